//! Watch-face view models and animation metadata.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FontWeight {
    Bold,
    Light,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TextAlignment {
    Center,
    #[default]
    Left,
    Right,
}

impl TextAlignment {
    pub const fn code(self) -> u8 {
        match self {
            Self::Center => 0,
            Self::Left => 1,
            Self::Right => 2,
        }
    }

    /// Unknown codes centre the text.
    pub const fn from_code(code: u8) -> Self {
        match code {
            1 => Self::Left,
            2 => Self::Right,
            _ => Self::Center,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct VisualStyle {
    pub alignment: TextAlignment,
    pub inverted: bool,
}

/// Screen and row metrics in pixels.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Geometry {
    pub screen_width: i16,
    pub screen_height: i16,
    pub row_height: i16,
    pub top_margin: i16,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            screen_width: 144,
            screen_height: 168,
            row_height: 37,
            top_margin: 10,
        }
    }
}

impl Geometry {
    /// Top of row `index` when `lines` rows are visible. The block of rows
    /// is centred vertically, then lifted by `top_margin`.
    pub fn row_y(self, lines: usize, index: usize) -> i16 {
        let lines = lines as i16;
        let top = (self.screen_height - lines * self.row_height) / 2 - self.top_margin;
        top + index as i16 * self.row_height
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Easing {
    /// Accelerates, used for text leaving the screen.
    EaseIn,
    /// Decelerates, used for text arriving.
    EaseOut,
}

impl Easing {
    /// Map linear progress (0..=100) onto the curve.
    pub fn apply(self, progress_pct: u8) -> u8 {
        let p = progress_pct.min(100) as u16;
        let eased = match self {
            Self::EaseIn => p * p / 100,
            Self::EaseOut => 100 - (100 - p) * (100 - p) / 100,
        };
        eased as u8
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationFrame {
    pub easing: Easing,
    /// 0..=100
    pub progress_pct: u8,
}

impl AnimationFrame {
    pub fn eased_pct(self) -> u8 {
        self.easing.apply(self.progress_pct)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationSpec {
    pub easing: Easing,
    pub start_ms: u64,
    pub duration_ms: u16,
}

impl AnimationSpec {
    pub const fn new(easing: Easing, start_ms: u64, duration_ms: u16) -> Self {
        Self {
            easing,
            start_ms,
            duration_ms,
        }
    }

    pub fn end_ms(self) -> u64 {
        self.start_ms + self.duration_ms.max(1) as u64
    }

    /// Frame at `now_ms`; progress stays at 0 until `start_ms` and the
    /// animation yields `None` once finished.
    pub fn frame(self, now_ms: u64) -> Option<AnimationFrame> {
        let duration = self.duration_ms.max(1) as u64;
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= duration {
            return None;
        }

        let progress = ((elapsed * 100) / duration).min(100) as u8;
        Some(AnimationFrame {
            easing: self.easing,
            progress_pct: progress,
        })
    }
}

/// Old text of a line that is sliding out.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OutgoingView<'a> {
    pub text: &'a str,
    pub weight: FontWeight,
    pub x: i16,
    pub y: i16,
}

/// One line slot as the board renderer should draw it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LineView<'a> {
    pub text: &'a str,
    pub weight: FontWeight,
    pub x: i16,
    pub y: i16,
    pub outgoing: Option<OutgoingView<'a>>,
}

/// Everything needed to draw the watch face at one instant.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WatchFrame<'a> {
    pub lines: &'a [LineView<'a>],
    /// Rows of the new text, for vertical layout.
    pub visible_lines: usize,
    pub style: VisualStyle,
}
