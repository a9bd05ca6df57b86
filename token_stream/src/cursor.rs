//! Sequential traversal with random-access override.
//!
//! The cursor is independent from the contents: splicing never moves it, and
//! callers are expected to check `valid` before reading through it.
use crate::TokenStream;
use diagnostics::error::invalid_seek;
use diagnostics::result::Result;
use syntax::token::Token;

impl TokenStream {
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Whether the cursor addresses an existing token.
    pub fn valid(&self) -> bool {
        self.cursor < self.tokens.len()
    }

    pub fn key(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    pub fn advance(&mut self) {
        self.cursor = self.cursor.saturating_add(1);
    }

    /// Moves the cursor to `position`. Seeking anywhere but an existing
    /// token fails and leaves the cursor where it was.
    pub fn seek(&mut self, position: usize) -> Result<()> {
        if position >= self.tokens.len() {
            return invalid_seek(position, self.tokens.len());
        }
        self.cursor = position;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diagnostics::error::Error;
    use syntax::token::TokenKind;

    fn stream() -> TokenStream {
        vec![
            Token::new(TokenKind::Identifier, "foo", 1),
            Token::new(TokenKind::OpenRound, "(", 1),
            Token::new(TokenKind::CloseRound, ")", 1),
        ]
        .into()
    }

    #[test]
    fn walks_every_token_in_order() {
        let mut stream = stream();
        let mut seen = Vec::new();
        stream.rewind();
        while stream.valid() {
            seen.push((stream.key(), stream.current().map(Token::kind)));
            stream.advance();
        }
        assert_eq!(
            seen,
            vec![
                (0, Some(TokenKind::Identifier)),
                (1, Some(TokenKind::OpenRound)),
                (2, Some(TokenKind::CloseRound)),
            ]
        );
        assert_eq!(stream.current(), None);
    }

    #[test]
    fn invalid_seek_keeps_the_cursor() {
        let mut stream = stream();
        stream.seek(2).unwrap();
        assert_eq!(
            stream.seek(3),
            Err(Error::InvalidSeek {
                position: 3,
                len: 3
            })
        );
        assert_eq!(stream.key(), 2);
        assert_eq!(stream.current().map(Token::text), Some(")"));
    }

    #[test]
    fn mutation_does_not_move_the_cursor() {
        let mut stream = stream();
        stream.seek(2).unwrap();
        stream.extract_stream(0, 1).unwrap();
        assert_eq!(stream.key(), 2);
        assert!(!stream.valid());
        stream.rewind();
        assert_eq!(stream.current().map(Token::kind), Some(TokenKind::CloseRound));
    }
}
