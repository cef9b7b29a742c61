//! Input abstraction layer.

mod mock;

pub use mock::MockInput;

/// Logical actions consumed by the watch face.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    /// Wrist tap: replay the slide-in of every visible line.
    Tap,
    /// Debug button: show the time five minutes later.
    StepForward,
    /// Debug button: show the time five minutes earlier.
    StepBack,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
