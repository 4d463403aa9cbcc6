pub trait Peek: Iterator {
    fn peek(&self) -> Option<Self::Item>;

    fn eat<P>(&mut self, pat: P) -> bool
    where
        Self::Item: PartialEq<P>,
    {
        match self.peek() {
            Some(item) if item == pat => {
                self.next();
                true
            }
            _ => false,
        }
    }

    fn eat_if(&mut self, f: impl FnOnce(&Self::Item) -> bool) -> Option<Self::Item> {
        match self.peek() {
            Some(item) if f(&item) => self.next(),
            _ => None,
        }
    }
}

impl Peek for std::str::Chars<'_> {
    fn peek(&self) -> Option<Self::Item> {
        self.clone().next()
    }
}

#[cfg(test)]
mod tests {
    use super::Peek;

    #[test]
    fn eat_matching_char() {
        let mut chars = "<=".chars();
        assert!(chars.eat('<'));
        assert!(!chars.eat('<'));
        assert!(chars.eat('='));
        assert_eq!(chars.peek(), None);
    }

    #[test]
    fn eat_if_digit() {
        let mut chars = "12a".chars();
        assert_eq!(chars.eat_if(char::is_ascii_digit), Some('1'));
        assert_eq!(chars.eat_if(char::is_ascii_digit), Some('2'));
        assert_eq!(chars.eat_if(char::is_ascii_digit), None);
        assert_eq!(chars.peek(), Some('a'));
    }
}
