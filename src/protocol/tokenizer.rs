const DELIMS: &[char] = &[' ', '(', ')'];

/// Flat scanner over a protocol message. Nesting is not tracked; every run of
/// spaces and parentheses is a separator.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'a> {
    rest: &'a str,
}

impl<'a> Tokenizer<'a> {
    pub fn new(msg: &'a str) -> Tokenizer<'a> {
        Tokenizer { rest: msg }
    }

    pub fn skip_delims(&mut self) {
        self.rest = self.rest.trim_start_matches(DELIMS);
    }

    /// Returns the next maximal run of non-delimiter characters, or `None`
    /// once the message is exhausted.
    pub fn next_token(&mut self) -> Option<&'a str> {
        self.skip_delims();
        if self.rest.is_empty() {
            return None;
        }

        let end = self.rest.find(DELIMS).unwrap_or(self.rest.len());
        let (token, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(token)
    }

    pub fn remaining(&self) -> &'a str {
        self.rest
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.next_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn splits_nested_message() {
        let tokens: Vec<_> = Tokenizer::new("(see 12 ((b) 4.5 -3) ((g r) 40 0))").collect();
        assert_eq!(tokens, vec!["see", "12", "b", "4.5", "-3", "g", "r", "40", "0"]);
    }

    #[test]
    fn empty_and_delimiter_only_input() {
        assert_eq!(Tokenizer::new("").next_token(), None);
        let mut tok = Tokenizer::new(" (( ) ) ");
        assert_eq!(tok.next_token(), None);
        assert_eq!(tok.remaining(), "");
    }

    #[test]
    fn token_is_consumed_whole() {
        let mut tok = Tokenizer::new("(init l 7 before_kick_off)");
        assert_eq!(tok.next_token(), Some("init"));
        assert_eq!(tok.remaining(), " l 7 before_kick_off)");
        assert_eq!(tok.next_token(), Some("l"));
        assert_eq!(tok.next_token(), Some("7"));
        assert_eq!(tok.next_token(), Some("before_kick_off"));
        assert_eq!(tok.next_token(), None);
    }

    proptest! {
        #[test]
        fn tokens_partition_the_input(words in prop::collection::vec("[a-z0-9_.-]{1,6}", 0..12),
                                      seps in prop::collection::vec("[ ()]{1,3}", 13)) {
            let mut msg = seps[0].clone();
            for (i, w) in words.iter().enumerate() {
                msg.push_str(w);
                msg.push_str(&seps[i + 1]);
            }

            let tokens: Vec<&str> = Tokenizer::new(&msg).collect();
            prop_assert_eq!(tokens, words.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }
}
