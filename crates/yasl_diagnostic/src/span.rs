/// A byte range `start..end` into a source text.
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn empty(pos: usize) -> Self {
        Self::new(pos, pos)
    }

    /// The smallest span covering both.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self::new(self.start.min(other.start), self.end.max(other.end))
    }
}

#[cfg(test)]
mod tests {
    use super::Span;

    #[test]
    fn union_covers_both() {
        assert_eq!(Span::new(4, 6).union(Span::new(1, 2)), Span::new(1, 6));
        assert_eq!(Span::new(0, 9).union(Span::empty(3)), Span::new(0, 9));
    }
}
