//! Linear, type-directed scans. A miss is `Ok(None)`; only a starting
//! index that does not address a token is an error.
use crate::TokenStream;
use diagnostics::error::index_out_of_range;
use diagnostics::result::Result;
use log::trace;
use syntax::token::{Token, TokenKind};

impl TokenStream {
    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.tokens.len() {
            Ok(())
        } else {
            index_out_of_range(index, self.tokens.len())
        }
    }

    /// Returns the first index after `index` that is not whitespace.
    /// `index` itself is never inspected.
    pub fn skip_whitespace(&self, index: usize) -> Result<Option<usize>> {
        self.check_index(index)?;
        let found = self.tokens[index + 1..]
            .iter()
            .position(|token| !token.is_whitespace())
            .map(|offset| index + 1 + offset);
        trace!("skip_whitespace({}) -> {:?}", index, found);
        Ok(found)
    }

    /// Returns the nearest index before `index` holding a token of `kind`.
    /// Index 0 is searched too.
    pub fn find_previous_token(&self, index: usize, kind: TokenKind) -> Result<Option<usize>> {
        self.check_index(index)?;
        let found = self.tokens[..index]
            .iter()
            .rposition(|token| token.is(kind));
        trace!("find_previous_token({}, {}) -> {:?}", index, kind, found);
        Ok(found)
    }

    /// Returns the nearest index after `index` holding a token of `kind`.
    pub fn find_next_token(&self, index: usize, kind: TokenKind) -> Result<Option<usize>> {
        self.check_index(index)?;
        let found = self.tokens[index + 1..]
            .iter()
            .position(|token: &Token| token.is(kind))
            .map(|offset| index + 1 + offset);
        trace!("find_next_token({}, {}) -> {:?}", index, kind, found);
        Ok(found)
    }
}
