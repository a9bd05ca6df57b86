use diagnostics::error::{unknown_token_kind, Error};
use diagnostics::result::Result;
use serde::Deserialize;
use std::fmt::{Debug, Display};
use std::str::FromStr;

/// A single lexical unit. Tokens are immutable once built; a stream
/// replaces a token by swapping the whole slot.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: String,
    line: u32,
}

impl PartialEq<TokenKind> for Token {
    fn eq(&self, other: &TokenKind) -> bool {
        &self.kind == other
    }
}

impl PartialEq<Token> for TokenKind {
    fn eq(&self, other: &Token) -> bool {
        self == &other.kind
    }
}

impl Token {
    /// Creates a new `Token`. Lines are 1-based.
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32) -> Self {
        debug_assert!(line >= 1, "token lines start at 1");
        Token {
            kind,
            text: text.into(),
            line,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns whether this token is of the given kind
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_whitespace(&self) -> bool {
        self.is(TokenKind::Whitespace)
    }

    /// Number of line breaks inside the literal text.
    pub fn newlines(&self) -> u32 {
        count_newlines(&self.text)
    }
}

pub fn count_newlines(text: &str) -> u32 {
    text.bytes().filter(|byte| *byte == b'\n').count() as u32
}

impl Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Token")
            .field(&self.kind)
            .field(&self.text)
            .field(&self.line)
            .finish()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

macro_rules! token_kinds {
    ($($(#[$meta:meta])* $variant:ident => $name:literal,)*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
        #[serde(try_from = "String")]
        pub enum TokenKind {
            $($(#[$meta])* $variant,)*
        }

        impl TokenKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [TokenKind] = &[$(TokenKind::$variant,)*];

            /// The canonical `T_*` name of this kind.
            pub fn name(self) -> &'static str {
                match self {
                    $(TokenKind::$variant => $name,)*
                }
            }
        }

        impl FromStr for TokenKind {
            type Err = Error;

            fn from_str(name: &str) -> Result<Self> {
                match name {
                    $($name => Ok(TokenKind::$variant),)*
                    _ => unknown_token_kind(name),
                }
            }
        }
    };
}

token_kinds! {
    /// The '(' character
    OpenRound => "T_OPEN_ROUND",
    /// The ')' character
    CloseRound => "T_CLOSE_ROUND",
    /// The '[' character
    OpenSquare => "T_OPEN_SQUARE",
    /// The ']' character
    CloseSquare => "T_CLOSE_SQUARE",
    /// The '{' character
    OpenCurly => "T_OPEN_CURLY",
    /// The '}' character
    CloseCurly => "T_CLOSE_CURLY",
    /// The ';' character
    Semicolon => "T_SEMICOLON",
    /// The '.' character
    Dot => "T_DOT",
    /// The ',' character
    Comma => "T_COMMA",
    /// The '=' character
    Equal => "T_EQUAL",
    /// The '<' character
    Lt => "T_LT",
    /// The '>' character
    Gt => "T_GT",
    /// The '+' character
    Plus => "T_PLUS",
    /// The '-' character
    Minus => "T_MINUS",
    /// The '*' character
    Mult => "T_MULT",
    /// The '/' character
    Div => "T_DIV",
    /// The '?' character
    Question => "T_QUESTION",
    /// The '!' character
    Exclamation => "T_EXCLAMATION",
    /// The ':' character
    Colon => "T_COLON",
    /// The '"' character
    DoubleQuotes => "T_DOUBLE_QUOTES",
    /// The '@' character
    At => "T_AT",
    /// The '&' character
    Amp => "T_AMP",
    /// The '%' character
    Percent => "T_PERCENT",
    /// The '|' character
    Pipe => "T_PIPE",
    /// The '$' character
    Dollar => "T_DOLLAR",
    /// The '^' character
    Caret => "T_CARET",
    /// The '~' character
    Tilde => "T_TILDE",
    /// The '`' character
    Backtick => "T_BACKTICK",

    /// Any run of spaces, tabs and line breaks
    Whitespace => "T_WHITESPACE",
    Comment => "T_COMMENT",
    DocComment => "T_DOC_COMMENT",
    /// `<?php`
    OpenTag => "T_OPEN_TAG",
    /// `<?=`
    OpenTagWithEcho => "T_OPEN_TAG_WITH_ECHO",
    /// `?>`
    CloseTag => "T_CLOSE_TAG",
    /// Text outside of the open/close tags
    InlineHtml => "T_INLINE_HTML",
    /// A bare identifier
    Identifier => "T_STRING",
    /// `$name`
    Variable => "T_VARIABLE",
    /// An integer literal
    LNumber => "T_LNUMBER",
    /// A floating point literal
    DNumber => "T_DNUMBER",
    /// A quoted string without interpolation
    ConstantEncapsedString => "T_CONSTANT_ENCAPSED_STRING",
    /// Literal text inside an interpolated string
    EncapsedAndWhitespace => "T_ENCAPSED_AND_WHITESPACE",
    /// `{$`
    CurlyOpen => "T_CURLY_OPEN",
    /// `${`
    DollarOpenCurlyBraces => "T_DOLLAR_OPEN_CURLY_BRACES",
    StartHeredoc => "T_START_HEREDOC",
    EndHeredoc => "T_END_HEREDOC",

    /// `\`
    NsSeparator => "T_NS_SEPARATOR",
    /// `::`
    DoubleColon => "T_DOUBLE_COLON",
    /// `->`
    ObjectOperator => "T_OBJECT_OPERATOR",
    /// `=>`
    DoubleArrow => "T_DOUBLE_ARROW",
    /// `==`
    IsEqual => "T_IS_EQUAL",
    /// `!=`
    IsNotEqual => "T_IS_NOT_EQUAL",
    /// `===`
    IsIdentical => "T_IS_IDENTICAL",
    /// `!==`
    IsNotIdentical => "T_IS_NOT_IDENTICAL",
    /// `<=`
    IsSmallerOrEqual => "T_IS_SMALLER_OR_EQUAL",
    /// `>=`
    IsGreaterOrEqual => "T_IS_GREATER_OR_EQUAL",
    /// `&&`
    BooleanAnd => "T_BOOLEAN_AND",
    /// `||`
    BooleanOr => "T_BOOLEAN_OR",
    /// `++`
    Inc => "T_INC",
    /// `--`
    Dec => "T_DEC",
    /// `+=`
    PlusEqual => "T_PLUS_EQUAL",
    /// `-=`
    MinusEqual => "T_MINUS_EQUAL",
    /// `.=`
    ConcatEqual => "T_CONCAT_EQUAL",
    /// `<<`
    ShiftLeft => "T_SL",
    /// `>>`
    ShiftRight => "T_SR",

    Abstract => "T_ABSTRACT",
    Array => "T_ARRAY",
    As => "T_AS",
    Break => "T_BREAK",
    Case => "T_CASE",
    Catch => "T_CATCH",
    Class => "T_CLASS",
    Clone => "T_CLONE",
    Const => "T_CONST",
    Continue => "T_CONTINUE",
    Declare => "T_DECLARE",
    Default => "T_DEFAULT",
    Do => "T_DO",
    Echo => "T_ECHO",
    Else => "T_ELSE",
    ElseIf => "T_ELSEIF",
    Empty => "T_EMPTY",
    Extends => "T_EXTENDS",
    Final => "T_FINAL",
    For => "T_FOR",
    Foreach => "T_FOREACH",
    Function => "T_FUNCTION",
    Global => "T_GLOBAL",
    If => "T_IF",
    Implements => "T_IMPLEMENTS",
    Include => "T_INCLUDE",
    IncludeOnce => "T_INCLUDE_ONCE",
    Instanceof => "T_INSTANCEOF",
    Interface => "T_INTERFACE",
    Isset => "T_ISSET",
    List => "T_LIST",
    Namespace => "T_NAMESPACE",
    New => "T_NEW",
    Print => "T_PRINT",
    Private => "T_PRIVATE",
    Protected => "T_PROTECTED",
    Public => "T_PUBLIC",
    Require => "T_REQUIRE",
    RequireOnce => "T_REQUIRE_ONCE",
    Return => "T_RETURN",
    Static => "T_STATIC",
    Switch => "T_SWITCH",
    Throw => "T_THROW",
    Try => "T_TRY",
    Unset => "T_UNSET",
    Use => "T_USE",
    Var => "T_VAR",
    While => "T_WHILE",

    /// `__LINE__`
    LineConst => "T_LINE",
    /// `__FILE__`
    FileConst => "T_FILE",
    /// `__DIR__`
    DirConst => "T_DIR",
    /// `__CLASS__`
    ClassConst => "T_CLASS_C",
    /// `__FUNCTION__`
    FunctionConst => "T_FUNC_C",
    /// `__METHOD__`
    MethodConst => "T_METHOD_C",
    /// `__NAMESPACE__`
    NamespaceConst => "T_NS_C",
}

impl TryFrom<String> for TokenKind {
    type Error = Error;

    fn try_from(name: String) -> Result<Self> {
        name.parse()
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}
