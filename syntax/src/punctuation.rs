//! The fixed mapping from bare single-character lexemes to token kinds.
//!
//! Tokenizers emit most punctuation as a lone character with no type
//! attached. The stream resolves those characters through this table; the
//! set is closed and never changes at runtime.
use crate::token::TokenKind;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Every bare character the stream accepts, with its kind.
pub const PUNCTUATION: [(char, TokenKind); 28] = [
    ('(', TokenKind::OpenRound),
    (')', TokenKind::CloseRound),
    ('[', TokenKind::OpenSquare),
    (']', TokenKind::CloseSquare),
    ('{', TokenKind::OpenCurly),
    ('}', TokenKind::CloseCurly),
    (';', TokenKind::Semicolon),
    ('.', TokenKind::Dot),
    (',', TokenKind::Comma),
    ('=', TokenKind::Equal),
    ('<', TokenKind::Lt),
    ('>', TokenKind::Gt),
    ('+', TokenKind::Plus),
    ('-', TokenKind::Minus),
    ('*', TokenKind::Mult),
    ('/', TokenKind::Div),
    ('?', TokenKind::Question),
    ('!', TokenKind::Exclamation),
    (':', TokenKind::Colon),
    ('"', TokenKind::DoubleQuotes),
    ('@', TokenKind::At),
    ('&', TokenKind::Amp),
    ('%', TokenKind::Percent),
    ('|', TokenKind::Pipe),
    ('$', TokenKind::Dollar),
    ('^', TokenKind::Caret),
    ('~', TokenKind::Tilde),
    ('`', TokenKind::Backtick),
];

static PUNCTUATION_TABLE: Lazy<HashMap<char, TokenKind>> =
    Lazy::new(|| PUNCTUATION.iter().copied().collect());

/// Resolves a bare lexeme to its kind, if it is in the table.
pub fn punctuation_kind(ch: char) -> Option<TokenKind> {
    PUNCTUATION_TABLE.get(&ch).copied()
}

impl TokenKind {
    /// The bare character this kind is produced from, for punctuation kinds.
    pub fn punctuation(self) -> Option<char> {
        PUNCTUATION
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(ch, _)| *ch)
    }
}
