//! The tokenizer output a stream is built from.
//!
//! Each item is either a bare punctuation character with no type attached,
//! or a typed pair that may carry the tokenizer's own line number. That line
//! is kept only so the input can be described faithfully; construction
//! recomputes lines from the text and never reads it.
use serde::Deserialize;
use syntax::token::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawTokenRepr")]
pub enum RawToken {
    /// A single punctuation character, typed through the punctuation table.
    Char(char),
    Typed {
        kind: TokenKind,
        text: String,
        line: Option<u32>,
    },
}

impl RawToken {
    pub fn typed(kind: TokenKind, text: impl Into<String>) -> Self {
        RawToken::Typed {
            kind,
            text: text.into(),
            line: None,
        }
    }

    /// Length of the literal text in bytes.
    pub fn text_len(&self) -> usize {
        match self {
            RawToken::Char(ch) => ch.len_utf8(),
            RawToken::Typed { text, .. } => text.len(),
        }
    }

    pub fn push_text(&self, buf: &mut String) {
        match self {
            RawToken::Char(ch) => buf.push(*ch),
            RawToken::Typed { text, .. } => buf.push_str(text),
        }
    }
}

/// Concatenates the literal text of every item, which is the source the
/// tokenizer started from.
pub fn source_text(items: &[RawToken]) -> String {
    let mut source = String::with_capacity(items.iter().map(RawToken::text_len).sum());
    for item in items {
        item.push_text(&mut source);
    }
    source
}

impl From<char> for RawToken {
    fn from(ch: char) -> Self {
        RawToken::Char(ch)
    }
}

impl From<(TokenKind, &str)> for RawToken {
    fn from((kind, text): (TokenKind, &str)) -> Self {
        RawToken::typed(kind, text)
    }
}

impl From<(TokenKind, String)> for RawToken {
    fn from((kind, text): (TokenKind, String)) -> Self {
        RawToken::typed(kind, text)
    }
}

impl From<(TokenKind, &str, u32)> for RawToken {
    fn from((kind, text, line): (TokenKind, &str, u32)) -> Self {
        RawToken::Typed {
            kind,
            text: text.into(),
            line: Some(line),
        }
    }
}

// `token_get_all` notation: `"("`, `["T_STRING", "foo"]` or
// `["T_STRING", "foo", 3]`. The three-element form must be tried first.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTokenRepr {
    Char(char),
    WithLine(TokenKind, String, u32),
    Typed(TokenKind, String),
}

impl From<RawTokenRepr> for RawToken {
    fn from(repr: RawTokenRepr) -> Self {
        match repr {
            RawTokenRepr::Char(ch) => RawToken::Char(ch),
            RawTokenRepr::WithLine(kind, text, line) => RawToken::Typed {
                kind,
                text,
                line: Some(line),
            },
            RawTokenRepr::Typed(kind, text) => RawToken::typed(kind, text),
        }
    }
}
