//! Error types with rich diagnostics using miette
//!
//! Shape geometry never fails; the only fallible step is reading a style
//! string, and those errors carry the source span of the bad entry.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Errors raised while parsing a `key=value;name` style string
#[derive(Error, Diagnostic, Debug)]
pub enum StyleError {
    #[error("malformed style string: {message}")]
    #[diagnostic(
        code(shapewright::style::syntax),
        help("entries look like `key=value` or `name`, separated by `;`")
    )]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("empty value for `{key}`")]
    #[diagnostic(
        code(shapewright::style::empty_value),
        help("drop the entry, or set the value to `none` to clear an inherited value")
    )]
    EmptyValue {
        key: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("no value after `=`")]
        span: SourceSpan,
    },
}

impl StyleError {
    /// Byte range of the offending text in the style string.
    pub fn span(&self) -> SourceSpan {
        match self {
            StyleError::Syntax { span, .. } | StyleError::EmptyValue { span, .. } => *span,
        }
    }
}
