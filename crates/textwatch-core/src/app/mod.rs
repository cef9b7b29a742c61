//! Watch-face state machine: clock ticks, input, and per-line slide
//! transitions.

use heapless::Vec;
use log::{debug, trace, warn};

use crate::{
    LINE_BYTES, NUM_LINES,
    clock::WallTime,
    input::{InputEvent, InputProvider},
    layout::{LayoutConfig, Line, LineBuffer, time_to_lines},
    render::{AnimationSpec, Easing, Geometry, LineView, OutgoingView, WatchFrame},
    settings::WatchSettings,
};

const ANIM_SLIDE_MS: u16 = 400;
const ANIM_STAGGER_MS: u16 = 150;
const ANIM_OUT_IN_DELAY_MS: u16 = 100;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WatchConfig {
    pub layout: LayoutConfig,
    pub geometry: Geometry,
    /// Duration of one slide, out or in.
    pub animation_ms: u16,
    /// Delay between consecutive changed lines, top to bottom.
    pub stagger_ms: u16,
    /// Delay from a line's slide-out start to its slide-in start.
    pub out_in_delay_ms: u16,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            geometry: Geometry::default(),
            animation_ms: ANIM_SLIDE_MS,
            stagger_ms: ANIM_STAGGER_MS,
            out_in_delay_ms: ANIM_OUT_IN_DELAY_MS,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct LineTransition {
    outgoing: Line<LINE_BYTES>,
    outgoing_y: i16,
    slide_out: AnimationSpec,
    slide_in: AnimationSpec,
}

impl LineTransition {
    fn is_finished(&self, now_ms: u64) -> bool {
        now_ms >= self.slide_in.end_ms().max(self.slide_out.end_ms())
    }
}

/// The phrase can't change between readings with the same key.
type ReadingKey = (u8, u8, bool);

fn reading_key(time: WallTime) -> ReadingKey {
    (time.hour(), time.minute(), time.second() >= 30)
}

pub struct WatchFace<IN>
where
    IN: InputProvider,
{
    input: IN,
    config: WatchConfig,
    settings: WatchSettings,
    last_reading: Option<ReadingKey>,
    shown: Option<WallTime>,
    lines: LineBuffer<NUM_LINES, LINE_BYTES>,
    visible: usize,
    transitions: [Option<LineTransition>; NUM_LINES],
    pending_redraw: bool,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");

#[cfg(test)]
mod tests;
