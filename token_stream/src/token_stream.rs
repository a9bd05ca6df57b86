use crate::raw::RawToken;
use diagnostics::error::{index_out_of_range, invalid_range, unknown_punctuation};
use diagnostics::result::Result;
use log::{debug, trace};
use std::mem;
use std::ops::Index;
use syntax::punctuation::punctuation_kind;
use syntax::token::Token;

/// An ordered sequence of tokens with a traversal cursor.
///
/// Indices are always contiguous: every removal closes its gap. The cursor
/// is only moved by the cursor methods, so after a splice it may point at a
/// different token or past the end.
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    pub(crate) tokens: Vec<Token>,
    pub(crate) cursor: usize,
}

impl TokenStream {
    pub fn new() -> Self {
        TokenStream::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TokenStream {
            tokens: Vec::with_capacity(capacity),
            cursor: 0,
        }
    }

    /// Builds a stream from tokenizer output.
    ///
    /// Bare characters are typed through the punctuation table and any
    /// character outside it fails the whole construction. Lines start at 1
    /// and advance by the number of line breaks in each token's text; lines
    /// reported by the tokenizer are ignored.
    pub fn from_raw<I>(raw: I) -> Result<TokenStream>
    where
        I: IntoIterator<Item = RawToken>,
    {
        let raw = raw.into_iter();
        let mut stream = TokenStream::with_capacity(raw.size_hint().0);
        let mut line = 1;
        let mut offset = 0;
        for item in raw {
            let token = match item {
                RawToken::Char(ch) => match punctuation_kind(ch) {
                    Some(kind) => Token::new(kind, ch.to_string(), line),
                    None => return unknown_punctuation(ch, offset..offset + ch.len_utf8()),
                },
                RawToken::Typed { kind, text, .. } => Token::new(kind, text, line),
            };
            offset += token.text().len();
            line += token.newlines();
            stream.tokens.push(token);
        }
        debug!(
            "built stream of {} tokens over {} lines",
            stream.tokens.len(),
            line
        );
        Ok(stream)
    }

    pub fn count(&self) -> usize {
        self.tokens.len()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Removes the closed range `from..=to` and returns it as a new stream.
    /// Later tokens shift down to close the gap. An invalid range leaves the
    /// stream untouched.
    pub fn extract_stream(&mut self, from: usize, to: usize) -> Result<TokenStream> {
        let len = self.tokens.len();
        if from > to || to >= len {
            return invalid_range(from, to, len);
        }
        trace!("extracting {}..={} from {} tokens", from, to, len);
        let tokens: Vec<Token> = self.tokens.drain(from..=to).collect();
        Ok(TokenStream::from(tokens))
    }

    /// Moves the tokens of `other` in so the first of them lands at `index`,
    /// followed by whatever was at `index` before. `index == count()`
    /// appends.
    pub fn insert_stream(&mut self, index: usize, other: TokenStream) -> Result<()> {
        let len = self.tokens.len();
        if index > len {
            return index_out_of_range(index, len);
        }
        trace!("inserting {} tokens at {} of {}", other.len(), index, len);
        if index == len {
            self.append_stream(other);
            return Ok(());
        }
        let after = self.tokens.split_off(index);
        self.tokens.extend(other.tokens);
        self.tokens.extend(after);
        Ok(())
    }

    pub fn insert_token(&mut self, index: usize, token: Token) -> Result<()> {
        self.insert_stream(index, TokenStream::from(vec![token]))
    }

    pub fn append_stream(&mut self, other: TokenStream) {
        if self.tokens.is_empty() {
            self.tokens = other.tokens;
        } else {
            self.tokens.extend(other.tokens);
        }
    }

    pub fn append_token(&mut self, token: Token) {
        self.tokens.push(token)
    }

    pub fn exists(&self, index: usize) -> bool {
        index < self.tokens.len()
    }

    pub fn get(&self, index: usize) -> Result<&Token> {
        match self.tokens.get(index) {
            Some(token) => Ok(token),
            None => index_out_of_range(index, self.tokens.len()),
        }
    }

    /// Replaces the token at `index`, returning the one it displaced.
    pub fn set(&mut self, index: usize, token: Token) -> Result<Token> {
        let len = self.tokens.len();
        match self.tokens.get_mut(index) {
            Some(slot) => Ok(mem::replace(slot, token)),
            None => index_out_of_range(index, len),
        }
    }

    /// Removes the token at `index`; later tokens shift down by one.
    pub fn remove(&mut self, index: usize) -> Result<Token> {
        let len = self.tokens.len();
        if index >= len {
            return index_out_of_range(index, len);
        }
        Ok(self.tokens.remove(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

// The cursor is traversal state, not content.
impl PartialEq for TokenStream {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}

impl Eq for TokenStream {}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        TokenStream { tokens, cursor: 0 }
    }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl FromIterator<Token> for TokenStream {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenStream::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl Extend<Token> for TokenStream {
    fn extend<I: IntoIterator<Item = Token>>(&mut self, iter: I) {
        self.tokens.extend(iter)
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Self::Item>;
    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;
    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diagnostics::error::Error;
    use syntax::token::TokenKind;

    fn tokens(kinds: &[TokenKind]) -> TokenStream {
        kinds
            .iter()
            .map(|kind| Token::new(*kind, kind.punctuation().unwrap_or('x').to_string(), 1))
            .collect()
    }

    #[test]
    fn unknown_bare_character_reports_its_byte_range() {
        let raw = vec![
            RawToken::typed(TokenKind::Variable, "$ab"),
            RawToken::Char('='),
            RawToken::Char('#'),
        ];
        match TokenStream::from_raw(raw) {
            Err(Error::Diagnostic(diagnostic)) => {
                assert_eq!(diagnostic.labels()[0].range(), 4..5);
            }
            other => panic!("expected a diagnostic, got {:?}", other),
        }
    }

    #[test]
    fn insert_before_the_last_token() {
        use TokenKind::{CloseRound, Comma, OpenRound, Semicolon};
        let mut stream = tokens(&[OpenRound, CloseRound, Semicolon]);
        stream.insert_stream(2, tokens(&[Comma])).unwrap();
        let kinds: Vec<_> = stream.iter().map(Token::kind).collect();
        assert_eq!(kinds, vec![OpenRound, CloseRound, Comma, Semicolon]);
    }

    #[test]
    fn insert_past_the_end_is_rejected() {
        let mut stream = tokens(&[TokenKind::Dot]);
        let err = stream.insert_token(2, Token::new(TokenKind::Comma, ",", 1));
        assert_eq!(err, Err(Error::IndexOutOfRange { index: 2, len: 1 }));
        assert_eq!(stream.len(), 1);
    }

    #[test]
    fn equality_ignores_the_cursor() {
        let a = tokens(&[TokenKind::Dot, TokenKind::Comma]);
        let mut b = a.clone();
        b.advance();
        assert_eq!(a, b);
    }
}
