use super::*;
use crate::{input::MockInput, phrase::Language, render::FontWeight};
use std::vec::Vec;

struct ScriptedInput<'a> {
    events: &'a [InputEvent],
    cursor: usize,
}

impl<'a> ScriptedInput<'a> {
    const fn new(events: &'a [InputEvent]) -> Self {
        Self { events, cursor: 0 }
    }
}

impl InputProvider for ScriptedInput<'_> {
    type Error = ();

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        let Some(event) = self.events.get(self.cursor).copied() else {
            return Ok(None);
        };
        self.cursor = self.cursor.saturating_add(1);
        Ok(Some(event))
    }
}

struct BrokenInput;

impl InputProvider for BrokenInput {
    type Error = ();

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Err(())
    }
}

#[derive(Debug, PartialEq)]
struct Row {
    text: String,
    weight: FontWeight,
    x: i16,
    y: i16,
    outgoing: Option<(String, i16, i16)>,
}

fn at(hour: u8, minute: u8, second: u8) -> WallTime {
    WallTime::new(hour, minute, second).unwrap()
}

fn face() -> WatchFace<MockInput> {
    WatchFace::new(MockInput::new(), WatchConfig::default(), WatchSettings::default())
}

fn rows<IN: InputProvider>(face: &WatchFace<IN>, now_ms: u64) -> Vec<Row> {
    let mut rows = Vec::new();
    face.with_frame(now_ms, |frame| {
        rows = frame
            .lines
            .iter()
            .map(|line| Row {
                text: line.text.to_owned(),
                weight: line.weight,
                x: line.x,
                y: line.y,
                outgoing: line
                    .outgoing
                    .map(|out| (out.text.to_owned(), out.x, out.y)),
            })
            .collect();
    });
    rows
}

fn texts<IN: InputProvider>(face: &WatchFace<IN>) -> Vec<&str> {
    face.lines().visible().iter().map(|line| line.text()).collect()
}

#[test]
fn initial_time_is_placed_without_animation() {
    let mut face = face();
    face.show_initial(at(3, 15, 0));

    let frame = rows(&face, 0);
    assert_eq!(frame.len(), 3);
    assert_eq!(frame[0].text, "quarter");
    assert_eq!(frame[0].weight, FontWeight::Bold);
    assert!(frame.iter().all(|row| row.x == 0 && row.outgoing.is_none()));
    assert_eq!(
        frame.iter().map(|row| row.y).collect::<Vec<_>>(),
        vec![18, 55, 92]
    );

    assert_eq!(face.tick(at(3, 15, 0), 0), TickResult::RenderRequested);
    assert_eq!(face.tick(at(3, 15, 10), 50), TickResult::NoRender);
}

#[test]
fn only_changed_lines_slide() {
    let mut face = face();
    face.show_initial(at(3, 15, 0));
    let _ = face.tick(at(3, 15, 0), 0);

    assert_eq!(face.tick(at(3, 20, 0), 1_000), TickResult::RenderRequested);
    assert_eq!(texts(&face), vec!["twenty", "past", "three"]);

    let frame = rows(&face, 1_000);
    assert_eq!(frame[0].outgoing, Some(("quarter".to_owned(), 0, 18)));
    assert_eq!(frame[0].x, 144);
    assert!(frame[1].outgoing.is_none() && frame[1].x == 0);
    assert!(frame[2].outgoing.is_none() && frame[2].x == 0);

    assert!(face.is_animating(1_400));
    assert_eq!(face.tick(at(3, 20, 0), 1_500), TickResult::RenderRequested);
    assert!(!face.is_animating(1_500));
    assert_eq!(face.tick(at(3, 20, 0), 1_600), TickResult::NoRender);
}

#[test]
fn line_count_change_slides_every_row_staggered() {
    let mut face = face();
    face.show_initial(at(3, 0, 0));
    let _ = face.tick(at(3, 0, 0), 0);

    let now = 10_000;
    assert_eq!(face.tick(at(3, 5, 0), now), TickResult::RenderRequested);
    assert_eq!(texts(&face), vec!["five", "past", "three"]);

    let frame = rows(&face, now + 100);
    // Row 0 started sliding out; row 1 waits for its stagger slot.
    let (_, out_x, out_y) = frame[0].outgoing.clone().unwrap();
    assert!(out_x < 0);
    assert_eq!(out_y, 37);
    assert_eq!(frame[0].x, 144);
    assert_eq!(frame[1].outgoing, Some(("o'clock".to_owned(), 0, 74)));
    assert_eq!(frame[2].outgoing, None);
    assert_eq!(frame[2].x, 144);

    // Last row slides in from now + 400 until now + 800.
    assert!(face.is_animating(now + 799));
    assert_eq!(face.tick(at(3, 5, 0), now + 800), TickResult::RenderRequested);
    assert_eq!(face.tick(at(3, 5, 0), now + 900), TickResult::NoRender);
    assert!(rows(&face, now + 900).iter().all(|row| row.x == 0));
}

#[test]
fn steps_follow_debug_buttons_until_clock_moves() {
    let events = [InputEvent::StepForward, InputEvent::StepForward];
    let mut face = WatchFace::new(
        ScriptedInput::new(&events),
        WatchConfig::default(),
        WatchSettings::default(),
    );
    face.show_initial(at(3, 15, 0));

    assert_eq!(face.tick(at(3, 15, 5), 0), TickResult::RenderRequested);
    assert_eq!(face.shown_time(), Some(at(3, 25, 0)));
    assert_eq!(texts(&face), vec!["twenty", "five", "past", "three"]);

    // Same half minute on the clock: stepped time stays.
    let _ = face.tick(at(3, 15, 20), 100);
    assert_eq!(face.shown_time(), Some(at(3, 25, 0)));

    let _ = face.tick(at(3, 15, 30), 200);
    assert_eq!(face.shown_time(), Some(at(3, 15, 30)));
}

#[test]
fn step_back_from_midnight_wraps_day() {
    let mut face = face();
    face.show_initial(at(0, 0, 0));
    face.apply_input_event(InputEvent::StepBack, 0);

    assert_eq!(face.shown_time(), Some(at(23, 55, 0)));
    assert_eq!(texts(&face), vec!["five", "to", "twelve"]);
}

#[test]
fn tap_replays_every_visible_line() {
    let events = [InputEvent::Tap];
    let mut face = WatchFace::new(
        ScriptedInput::new(&events),
        WatchConfig::default(),
        WatchSettings::default(),
    );
    face.show_initial(at(3, 0, 0));

    assert_eq!(face.tick(at(3, 0, 0), 0), TickResult::RenderRequested);
    let frame = rows(&face, 0);
    assert_eq!(frame.len(), 2);
    assert_eq!(frame[0].outgoing, Some(("three".to_owned(), 0, 37)));
    assert_eq!(frame[1].outgoing, Some(("o'clock".to_owned(), 0, 74)));
    assert!(face.is_animating(600));
    assert!(!face.is_animating(650));
}

#[test]
fn language_change_repacks_lines() {
    let mut face = face();
    face.show_initial(at(10, 10, 0));
    let _ = face.tick(at(10, 10, 0), 0);

    let mut settings = face.settings();
    settings.language = Language::Galician;
    face.apply_settings(settings, 100);

    assert_eq!(texts(&face), vec!["dez", "e dez"]);
    assert_eq!(face.tick(at(10, 10, 0), 100), TickResult::RenderRequested);
}

#[test]
fn style_change_requests_redraw_without_sliding() {
    let mut face = face();
    face.show_initial(at(8, 30, 0));
    let _ = face.tick(at(8, 30, 0), 0);

    let mut settings = face.settings();
    settings.style.inverted = true;
    face.apply_settings(settings, 10);

    assert!(!face.is_animating(10));
    assert_eq!(face.tick(at(8, 30, 0), 10), TickResult::RenderRequested);
    face.with_frame(10, |frame| assert!(frame.style.inverted));
}

#[test]
fn first_tick_without_initial_slides_lines_in() {
    let mut face = face();
    assert_eq!(face.tick(at(12, 0, 0), 0), TickResult::RenderRequested);

    let frame = rows(&face, 0);
    assert_eq!(frame.len(), 2);
    assert!(frame.iter().all(|row| row.outgoing.is_none() && row.x == 144));
}

#[test]
fn input_errors_do_not_stop_the_clock() {
    let mut face = WatchFace::new(BrokenInput, WatchConfig::default(), WatchSettings::default());
    face.show_initial(at(6, 0, 0));

    assert_eq!(face.tick(at(6, 30, 0), 0), TickResult::RenderRequested);
    assert_eq!(texts(&face), vec!["half", "past", "six"]);
}
