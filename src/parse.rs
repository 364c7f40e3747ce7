//! Parse style strings into [`Style`] values

use miette::{NamedSource, SourceSpan};
use pest::Parser;
use pest::error::InputLocation;
use pest::iterators::Pair;

use crate::errors::StyleError;
use crate::style::{Style, StyleValue};
use crate::{Rule, StyleParser};

const SOURCE_NAME: &str = "<style>";

/// Parse a `name;key=value;...` style string.
///
/// Later entries for the same key replace earlier ones.
pub fn parse_style(source: &str) -> Result<Style, StyleError> {
    let pairs = StyleParser::parse(Rule::style, source).map_err(|e| syntax_error(source, e))?;

    let mut style = Style::new();
    for pair in pairs {
        if pair.as_rule() != Rule::style {
            continue;
        }
        for entry in pair.into_inner() {
            match entry.as_rule() {
                Rule::pair => parse_pair(source, entry, &mut style)?,
                Rule::name => style.push_name(entry.as_str()),
                _ => {}
            }
        }
    }
    Ok(style)
}

fn parse_pair(source: &str, pair: Pair<Rule>, style: &mut Style) -> Result<(), StyleError> {
    let span = pair.as_span();
    let mut inner = pair.into_inner();
    let (Some(key), Some(value)) = (inner.next(), inner.next()) else {
        return Err(StyleError::Syntax {
            message: "expected `key=value`".to_string(),
            src: named_source(source),
            span: (span.start(), span.end() - span.start()).into(),
        });
    };

    let raw = value.as_str().trim();
    if raw.is_empty() {
        return Err(StyleError::EmptyValue {
            key: key.as_str().to_string(),
            src: named_source(source),
            span: (span.start(), span.end() - span.start()).into(),
        });
    }

    style.set(key.as_str(), StyleValue::parse(raw));
    Ok(())
}

fn syntax_error(source: &str, err: pest::error::Error<Rule>) -> StyleError {
    let span: SourceSpan = match err.location {
        InputLocation::Pos(pos) => (pos, 0).into(),
        InputLocation::Span((start, end)) => (start, end - start).into(),
    };
    StyleError::Syntax {
        message: err.variant.message().into_owned(),
        src: named_source(source),
        span,
    }
}

fn named_source(source: &str) -> NamedSource<String> {
    NamedSource::new(SOURCE_NAME, source.to_string())
}
