//! Packing phrases into fixed-width display lines.
//!
//! Each line starts with the next word of the phrase. An emphasized word
//! makes its line bold and keeps it to that single word. A normal-weight
//! line may take exactly one more word when both fit the width budget and
//! the next word is not emphasized. Words are never split; a word wider than
//! the budget gets a line of its own.

use heapless::String;
use log::trace;

use crate::{
    LINE_BYTES, LINE_LENGTH, NUM_LINES, PHRASE_BYTES,
    clock::WallTime,
    phrase::{Phrase, PhraseTable},
    render::FontWeight,
    text_buffer::{push_bounded, set_bounded},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LayoutConfig {
    /// Lines to fill, capped at the buffer's slot count.
    pub max_lines: usize,
    /// Width budget of one line, in characters.
    pub max_chars_per_line: usize,
    /// Characters that must stay free after a second word is appended.
    pub append_margin: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_lines: NUM_LINES,
            max_chars_per_line: LINE_LENGTH,
            append_margin: 0,
        }
    }
}

impl LayoutConfig {
    pub const fn append_limit(self) -> usize {
        self.max_chars_per_line.saturating_sub(self.append_margin)
    }
}

/// One display line.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Line<const B: usize> {
    text: String<B>,
    bold: bool,
}

impl<const B: usize> Line<B> {
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            bold: false,
        }
    }

    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn weight(&self) -> FontWeight {
        if self.bold {
            FontWeight::Bold
        } else {
            FontWeight::Light
        }
    }
}

/// `L` line slots of `B` bytes each and the count of slots in use.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LineBuffer<const L: usize = NUM_LINES, const B: usize = LINE_BYTES> {
    lines: [Line<B>; L],
    used: usize,
}

impl<const L: usize, const B: usize> Default for LineBuffer<L, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const L: usize, const B: usize> LineBuffer<L, B> {
    pub fn new() -> Self {
        Self {
            lines: core::array::from_fn(|_| Line::new()),
            used: 0,
        }
    }

    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.text.clear();
            line.bold = false;
        }
        self.used = 0;
    }

    /// Number of non-empty lines.
    pub fn used(&self) -> usize {
        self.used
    }

    /// All slots, empty ones included.
    pub fn slots(&self) -> &[Line<B>] {
        &self.lines
    }

    pub fn visible(&self) -> &[Line<B>] {
        &self.lines[..self.used]
    }

    pub fn line(&self, index: usize) -> Option<&Line<B>> {
        self.lines.get(index)
    }

    /// Text of slot `index`, empty when the slot is unused or out of range.
    pub fn text(&self, index: usize) -> &str {
        self.line(index).map_or("", Line::text)
    }
}

/// Pack `phrase` into lines. Words that don't fit in `config.max_lines`
/// lines are dropped.
pub fn pack_lines<const N: usize, const L: usize, const B: usize>(
    phrase: &Phrase<N>,
    config: LayoutConfig,
) -> LineBuffer<L, B> {
    let mut buffer = LineBuffer::new();
    let max_lines = config.max_lines.min(L);
    let limit = config.append_limit();
    let mut words = phrase.words().peekable();

    while buffer.used < max_lines {
        let Some(word) = words.next() else {
            break;
        };

        let line = &mut buffer.lines[buffer.used];
        line.bold = word.emphasized;
        let mut complete = set_bounded(&mut line.text, word.text);

        if !line.bold {
            let word_len = word.len_chars();
            let joined = words.next_if(|next| {
                !next.emphasized && word_len + 1 < limit && word_len + 1 + next.len_chars() <= limit
            });
            if let Some(next) = joined {
                complete &= push_bounded(&mut line.text, " ") && push_bounded(&mut line.text, next.text);
            }
        }

        if !complete {
            trace!("layout: line {} cut to {} bytes", buffer.used, B);
        }
        buffer.used += 1;
    }

    if words.next().is_some() {
        trace!("layout: phrase overflowed {} lines", max_lines);
    }

    buffer
}

/// Phrase for `time` from `table`, packed into lines.
pub fn time_to_lines<const L: usize, const B: usize>(
    table: &PhraseTable,
    time: WallTime,
    config: LayoutConfig,
) -> LineBuffer<L, B> {
    let phrase: Phrase<PHRASE_BYTES> = table.phrase_for(time);
    pack_lines(&phrase, config)
}
