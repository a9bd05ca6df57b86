//! The error type shared by the token stream crates, plus helpers
//! for building each kind of failure.
use std::io;

use codespan_reporting::diagnostic::LabelStyle;

use crate::result::Result;
use std::ops::Range;

const UNKNOWN_PUNCTUATION_TITLE: &str = "Unknown Punctuation";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    message: String,
    range: Range<usize>,
    style: LabelStyle,
}

impl Label {
    pub fn primary(message: impl Into<String>, range: Range<usize>) -> Self {
        Label {
            message: message.into(),
            range,
            style: LabelStyle::Primary,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    message: String,
    labels: Vec<Label>,
    notes: Option<Vec<String>>,
}

impl Diagnostic {
    pub fn error(message: String, labels: Vec<Label>) -> Diagnostic {
        Self {
            message,
            labels,
            notes: None,
        }
    }

    pub fn with_note(self, note: impl Into<String>) -> Self {
        let mut notes = self.notes.unwrap_or_default();
        notes.push(note.into());
        Self {
            message: self.message,
            labels: self.labels,
            notes: Some(notes),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn notes(&self) -> &[String] {
        self.notes.as_deref().unwrap_or_default()
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        for label in &self.labels {
            write!(
                f,
                " ({} at {}..{})",
                label.message, label.range.start, label.range.end
            )?;
        }
        Ok(())
    }
}

/// Takes an instance of our own `Diagnostic` and converts it to the `codespan_reporting` variant
/// so we can report the error in the terminal.
pub fn report_diagnostic_to_term(
    diagnostic: &Diagnostic,
    file_name: &str,
    file_source: &str,
) -> Result<()> {
    use codespan_reporting::diagnostic::{
        Diagnostic as CodespanDiagnostic, Label as CodespanLabel,
    };
    use codespan_reporting::files::SimpleFiles;
    use codespan_reporting::term;
    use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
    let mut files = SimpleFiles::new();
    let diagnostic = {
        let id = files.add(file_name, file_source);
        // Label ranges are half-open byte ranges, same as codespan.
        let labels = diagnostic
            .labels
            .iter()
            .map(|label| {
                CodespanLabel::new(label.style, id, label.range.clone())
                    .with_message(label.message.clone())
            })
            .collect();
        let mut csp_diagnostic = CodespanDiagnostic::error()
            .with_message(diagnostic.message.clone())
            .with_labels(labels);
        if let Some(notes) = &diagnostic.notes {
            csp_diagnostic = csp_diagnostic.with_notes(notes.clone())
        }
        csp_diagnostic
    };
    let writer = StandardStream::stderr(ColorChoice::Auto);
    let mut writer = writer.lock();
    let config = term::Config::default();
    term::emit(&mut writer, &config, &files, &diagnostic).map_err(|err| Error::IO(err.to_string()))
}

/// Report a bare lexeme that has no entry in the punctuation table.
pub fn unknown_punctuation<T>(ch: char, range: Range<usize>) -> Result<T> {
    let label = Label::primary(format!("'{}' is not a known punctuation character", ch), range);
    let diagnostic = Diagnostic::error(UNKNOWN_PUNCTUATION_TITLE.into(), vec![label])
        .with_note("Bare lexemes must be one of ( ) [ ] { } ; . , = < > + - * / ? ! : \" @ & % | $ ^ ~ `");
    Err(Error::Diagnostic(diagnostic))
}

pub fn index_out_of_range<T>(index: usize, len: usize) -> Result<T> {
    Err(Error::IndexOutOfRange { index, len })
}

pub fn invalid_range<T>(from: usize, to: usize, len: usize) -> Result<T> {
    Err(Error::InvalidRange { from, to, len })
}

pub fn invalid_seek<T>(position: usize, len: usize) -> Result<T> {
    Err(Error::InvalidSeek { position, len })
}

pub fn unknown_token_kind<T>(name: impl Into<String>) -> Result<T> {
    Err(Error::UnknownTokenKind(name.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    IO(String),
    #[error("malformed token dump: {0}")]
    Json(String),
    #[error("{0}")]
    Diagnostic(Diagnostic),
    #[error("index {index} is out of range for a stream of {len} tokens")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("range {from}..={to} is invalid for a stream of {len} tokens")]
    InvalidRange { from: usize, to: usize, len: usize },
    #[error("invalid seek position {position} for a stream of {len} tokens")]
    InvalidSeek { position: usize, len: usize },
    #[error("unknown token kind '{0}'")]
    UnknownTokenKind(String),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::IO(err.to_string())
    }
}
