#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// One brace-delimited piece of a word annotation string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A piece without `=`: the bare surface name.
    Name(&'a str),
    /// `type=value`, split at the first `=`.
    Layer { tag: &'a str, value: &'a str },
}
