//! Validated wall-clock time.

use core::fmt;

/// Minutes moved by one debug step.
pub const STEP_MINUTES: u8 = 5;

/// Rejected time field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimeError {
    Hour(u8),
    Minute(u8),
    Second(u8),
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hour(value) => write!(f, "hour {value} outside 0..=23"),
            Self::Minute(value) => write!(f, "minute {value} outside 0..=59"),
            Self::Second(value) => write!(f, "second {value} outside 0..=59"),
        }
    }
}

impl core::error::Error for TimeError {}

/// Time of day on a 24 hour clock.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct WallTime {
    hour: u8,
    minute: u8,
    second: u8,
}

impl WallTime {
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };

    pub const fn new(hour: u8, minute: u8, second: u8) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::Hour(hour));
        }
        if minute > 59 {
            return Err(TimeError::Minute(minute));
        }
        if second > 59 {
            return Err(TimeError::Second(second));
        }

        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }

    pub const fn second(self) -> u8 {
        self.second
    }

    /// Debug step forward: minutes past the hour snap to 0 of the next hour.
    pub const fn step_forward(self) -> Self {
        let mut hour = self.hour;
        let mut minute = self.minute + STEP_MINUTES;
        if minute >= 60 {
            minute = 0;
            hour = if hour >= 23 { 0 } else { hour + 1 };
        }

        Self {
            hour,
            minute,
            second: self.second,
        }
    }

    /// Debug step back: underflow lands on :55 of the previous hour.
    pub const fn step_back(self) -> Self {
        let mut hour = self.hour;
        let minute = if self.minute < STEP_MINUTES {
            hour = if hour == 0 { 23 } else { hour - 1 };
            60 - STEP_MINUTES
        } else {
            self.minute - STEP_MINUTES
        };

        Self {
            hour,
            minute,
            second: self.second,
        }
    }
}

impl fmt::Display for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}
