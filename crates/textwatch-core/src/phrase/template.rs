//! Relative-time phrase templates.

/// Which hour name a placeholder stands for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HourRef {
    /// The hour being spoken about (`$1` in sigil form).
    Current,
    /// The hour after it (`$2` in sigil form).
    Next,
}

/// One piece of a template.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Segment<'a> {
    Text(&'a str),
    Hour(HourRef),
}

/// A phrase with at most one hour placeholder between two literal parts.
///
/// `emphasized` marks the first word of the rendered phrase, whatever
/// segment it comes from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Template<'a> {
    pub emphasized: bool,
    pub head: &'a str,
    pub hour: Option<HourRef>,
    pub tail: &'a str,
}

impl<'a> Template<'a> {
    pub const fn new(emphasized: bool, head: &'a str, hour: Option<HourRef>, tail: &'a str) -> Self {
        Self {
            emphasized,
            head,
            hour,
            tail,
        }
    }

    /// Bold-led template naming the current hour.
    pub const fn current(head: &'a str, tail: &'a str) -> Self {
        Self::new(true, head, Some(HourRef::Current), tail)
    }

    /// Bold-led template naming the next hour.
    pub const fn next(head: &'a str, tail: &'a str) -> Self {
        Self::new(true, head, Some(HourRef::Next), tail)
    }

    /// Parse the sigil form: a leading `*` sets `emphasized`, the first `$1`
    /// (or, failing that, the first `$2`) becomes the hour placeholder.
    /// Anything else is literal text.
    pub fn parse(source: &'a str) -> Self {
        let (emphasized, body) = match source.strip_prefix('*') {
            Some(rest) => (true, rest),
            None => (false, source),
        };

        let found = body
            .find("$1")
            .map(|at| (at, HourRef::Current))
            .or_else(|| body.find("$2").map(|at| (at, HourRef::Next)));

        match found {
            Some((at, hour)) => Self::new(emphasized, &body[..at], Some(hour), &body[at + 2..]),
            None => Self::new(emphasized, body, None, ""),
        }
    }

    /// Segments in render order, skipping empty literals.
    pub fn segments(self) -> impl Iterator<Item = Segment<'a>> {
        let head = (!self.head.is_empty()).then_some(Segment::Text(self.head));
        let hour = self.hour.map(Segment::Hour);
        let tail = (!self.tail.is_empty()).then_some(Segment::Text(self.tail));
        head.into_iter().chain(hour).chain(tail)
    }
}
