//! rlox_diagnostics: Lexical error reporting for the rlox front end.
//!
//! The scanner never aborts on bad input. Every recoverable error is handed
//! to an [`ErrorReporter`] passed into the scan call, and scanning resumes
//! at the next character. Hosts choose the reporting policy: accumulate with
//! [`DiagnosticCollection`], stream with [`StreamReporter`], or pass a
//! closure.

use std::fmt;
use std::io::{self, Write};

use thiserror::Error;

/// A recoverable lexical error.
///
/// Both variants are local to one lexeme; a single scan can surface several
/// independent errors and still produce a token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexError {
    /// A string literal was still open when the input ended.
    #[error("Unterminated string.")]
    UnterminatedString,
    /// A character that matches no lexical rule.
    #[error("Unexpected character '{0}'.")]
    UnexpectedCharacter(char),
}

/// One reported error tagged with the 1-based source line it occurred on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: u32,
    pub error: LexError,
}

impl Diagnostic {
    pub fn new(line: u32, error: LexError) -> Self {
        Self { line, error }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.error)
    }
}

/// Sink for recoverable lexical errors.
///
/// The scanner invokes [`report`](ErrorReporter::report) once per error;
/// whether accumulated errors should abort downstream work is the
/// reporter's call, never the scanner's.
pub trait ErrorReporter {
    fn report(&mut self, line: u32, error: LexError);
}

/// Any `FnMut(u32, LexError)` closure works as a reporter.
impl<F: FnMut(u32, LexError)> ErrorReporter for F {
    fn report(&mut self, line: u32, error: LexError) {
        self(line, error)
    }
}

/// A reporter that accumulates diagnostics in arrival order.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any error has been reported.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Number of reported diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// All diagnostics reported so far, in arrival order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the collection and return the diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl ErrorReporter for DiagnosticCollection {
    fn report(&mut self, line: u32, error: LexError) {
        self.diagnostics.push(Diagnostic::new(line, error));
    }
}

/// A reporter that writes each error to a stream as it arrives, one line
/// per error in the `[line N] Error: message` console format.
pub struct StreamReporter<W: Write> {
    stream: W,
}

impl<W: Write> StreamReporter<W> {
    pub fn new(stream: W) -> Self {
        Self { stream }
    }

    /// Hand back the underlying stream.
    pub fn into_inner(self) -> W {
        self.stream
    }
}

impl<W: Write> ErrorReporter for StreamReporter<W> {
    fn report(&mut self, line: u32, error: LexError) {
        // A broken stream must not turn a recoverable error into an abort.
        let _ = writeln!(self.stream, "{}", Diagnostic::new(line, error));
    }
}

/// Reporter writing to standard error.
pub fn console_reporter() -> StreamReporter<io::Stderr> {
    StreamReporter::new(io::stderr())
}
