//! Time-to-phrase generation.
//!
//! A time of day is rounded to the nearest five-minute slot and spoken
//! through one of the fixed phrase tables ("quarter past three",
//! "tres e cuarto").

mod tables;
pub mod template;

use core::fmt;

use heapless::String;

use crate::{PHRASE_BYTES, clock::WallTime, text_buffer::push_bounded};

pub use template::{HourRef, Segment, Template};

pub const HOURS_PER_DAY: usize = 24;
pub const SLOTS_PER_HOUR: usize = 12;

/// Words past this index can't carry emphasis.
const MAX_MARKED_WORDS: usize = u32::BITS as usize;

pub static ENGLISH: PhraseTable = PhraseTable::new(tables::ENGLISH_HOURS, tables::ENGLISH_RELS);
pub static GALICIAN: PhraseTable =
    PhraseTable::new(tables::GALICIAN_HOURS, tables::GALICIAN_RELS);

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Language {
    #[default]
    English,
    Galician,
}

impl Language {
    pub const fn code(self) -> u8 {
        match self {
            Self::English => 0,
            Self::Galician => 1,
        }
    }

    /// Unknown codes fall back to English.
    pub const fn from_code(code: u8) -> Self {
        match code {
            1 => Self::Galician,
            _ => Self::English,
        }
    }

    pub fn table(self) -> &'static PhraseTable {
        match self {
            Self::English => &ENGLISH,
            Self::Galician => &GALICIAN,
        }
    }
}

/// Hour names plus one relative-time template per five-minute slot.
#[derive(Debug)]
pub struct PhraseTable {
    hours: [&'static str; HOURS_PER_DAY],
    rels: [Template<'static>; SLOTS_PER_HOUR],
}

impl PhraseTable {
    pub const fn new(
        hours: [&'static str; HOURS_PER_DAY],
        rels: [Template<'static>; SLOTS_PER_HOUR],
    ) -> Self {
        Self { hours, rels }
    }

    pub fn hour_name(&self, hour: usize) -> &'static str {
        self.hours[hour % HOURS_PER_DAY]
    }

    pub fn template(&self, slot: usize) -> Template<'static> {
        self.rels[slot % SLOTS_PER_HOUR]
    }

    pub fn phrase_for<const N: usize>(&self, time: WallTime) -> Phrase<N> {
        self.phrase_at(time.hour(), time.minute(), time.second())
    }

    /// Unchecked variant of [`Self::phrase_for`]. Fields are expected in
    /// range; out-of-range values wrap instead of panicking.
    pub fn phrase_at<const N: usize>(&self, hour: u8, minute: u8, second: u8) -> Phrase<N> {
        let slot = slot_for(minute, second);
        let hour_index = spoken_hour(hour, minute, slot);

        let mut phrase = Phrase::new();
        phrase.render(
            self.template(slot),
            self.hour_name(hour_index),
            self.hour_name(hour_index + 1),
        );
        phrase
    }
}

/// Five-minute slot nearest to `minute:second`, at 30 second resolution.
/// Ties round up.
pub fn slot_for(minute: u8, second: u8) -> usize {
    let half_minutes = 2 * minute as usize + usize::from(second >= 30);
    ((half_minutes + 5) / 10) % SLOTS_PER_HOUR
}

/// Hour the phrase talks about. Rounding up into slot 0 late in the hour
/// means "o'clock" of the next hour.
pub fn spoken_hour(hour: u8, minute: u8, slot: usize) -> usize {
    let hour = hour as usize % HOURS_PER_DAY;
    if slot == 0 && minute > 30 {
        (hour + 1) % HOURS_PER_DAY
    } else {
        hour
    }
}

/// Phrase for `hour:minute:second` from the English table.
pub fn generate_phrase(hour: u8, minute: u8, second: u8) -> Phrase<PHRASE_BYTES> {
    ENGLISH.phrase_at(hour, minute, second)
}

/// One token of a phrase.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Word<'a> {
    pub text: &'a str,
    pub emphasized: bool,
}

impl Word<'_> {
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }
}

/// Space-terminated words with per-word emphasis, bounded to `N` bytes.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Phrase<const N: usize> {
    text: String<N>,
    emphasis: u32,
}

impl<const N: usize> Phrase<N> {
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            emphasis: 0,
        }
    }

    /// Build a phrase from marked text: `*word` is an emphasized word, a
    /// lone `*` is an ordinary one. Runs of whitespace collapse.
    pub fn parse(marked: &str) -> Self {
        let mut phrase = Self::new();

        for (index, token) in marked.split_whitespace().enumerate() {
            let (emphasized, word) = match token.strip_prefix('*') {
                Some(rest) if !rest.is_empty() => (true, rest),
                _ => (false, token),
            };

            if !(push_bounded(&mut phrase.text, word) && push_bounded(&mut phrase.text, " ")) {
                break;
            }
            if emphasized && index < MAX_MARKED_WORDS {
                phrase.emphasis |= 1 << index;
            }
        }

        phrase
    }

    fn render(&mut self, template: Template<'_>, hour: &str, next_hour: &str) {
        self.text.clear();
        self.emphasis = u32::from(template.emphasized);

        for segment in template.segments() {
            let text = match segment {
                Segment::Text(text) => text,
                Segment::Hour(HourRef::Current) => hour,
                Segment::Hour(HourRef::Next) => next_hour,
            };
            if !push_bounded(&mut self.text, text) {
                return;
            }
        }

        push_bounded(&mut self.text, " ");
    }

    /// Raw text, including the trailing space.
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.words().next().is_none()
    }

    pub fn words(&self) -> Words<'_> {
        Words {
            rest: self.text.as_str(),
            index: 0,
            emphasis: self.emphasis,
        }
    }
}

impl<const N: usize> fmt::Display for Phrase<N> {
    /// Marked form, e.g. `*three o'clock`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, word) in self.words().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            if word.emphasized {
                f.write_str("*")?;
            }
            f.write_str(word.text)?;
        }
        Ok(())
    }
}

/// Iterator over the complete words of a [`Phrase`].
///
/// A trailing fragment without its terminating space was cut by the
/// capacity limit and is skipped.
#[derive(Clone, Debug)]
pub struct Words<'a> {
    rest: &'a str,
    index: usize,
    emphasis: u32,
}

impl<'a> Iterator for Words<'a> {
    type Item = Word<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let end = self.rest.find(' ')?;
            let text = &self.rest[..end];
            self.rest = &self.rest[end + 1..];
            if text.is_empty() {
                continue;
            }

            let index = self.index;
            self.index += 1;
            let emphasized = index < MAX_MARKED_WORDS && self.emphasis & (1 << index) != 0;
            return Some(Word { text, emphasized });
        }
    }
}
