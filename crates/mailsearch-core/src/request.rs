//! Free-text request resolution
//!
//! Turns a request like `"report body 20 full"` into [`SearchParameters`] by
//! stripping modifier keywords and keeping the rest as the search term.
//!
//! | token                   | effect               |
//! |-------------------------|----------------------|
//! | `subject`               | scope = subject      |
//! | `body`                  | scope = body         |
//! | `subject` + `body`      | scope = both         |
//! | integer                 | count (clamped 1-50) |
//! | `text`, `readable`      | format = text        |
//! | `full`, `complete`      | full body            |
//!
//! Keywords match case-insensitively. A term that itself contains one of
//! these words cannot be told apart from a modifier.

use crate::error::{MailsearchError, Result};
use crate::params::{Count, OutputFormat, Scope, SearchParameters};
use serde::Serialize;
use std::fmt;

/// Something the caller may want to confirm before the search runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Ambiguity {
    /// Both `subject` and `body` were given; searched both
    ScopeConflict,
    /// The integer was outside `[1, 50]`
    CountClamped { requested: String, applied: u8 },
    /// Integers after the first were kept in the term
    ExtraIntegers { tokens: Vec<String> },
}

impl fmt::Display for Ambiguity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ambiguity::ScopeConflict => {
                write!(f, "both 'subject' and 'body' given; searching both")
            }
            Ambiguity::CountClamped { requested, applied } => {
                write!(f, "count {} is out of range; using {}", requested, applied)
            }
            Ambiguity::ExtraIntegers { tokens } => write!(
                f,
                "only the first number sets the count; kept {} in the search term",
                tokens.join(", ")
            ),
        }
    }
}

/// Resolved parameters plus whatever was ambiguous about the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub params: SearchParameters,
    pub ambiguities: Vec<Ambiguity>,
}

impl Resolution {
    pub fn is_ambiguous(&self) -> bool {
        !self.ambiguities.is_empty()
    }
}

enum Token<'a> {
    Subject,
    Body,
    Text,
    Full,
    Integer(i64),
    Word(&'a str),
}

fn classify(raw: &str) -> Token<'_> {
    match raw.to_ascii_lowercase().as_str() {
        "subject" => Token::Subject,
        "body" => Token::Body,
        "text" | "readable" => Token::Text,
        "full" | "complete" => Token::Full,
        _ => match parse_integer(raw) {
            Some(n) => Token::Integer(n),
            None => Token::Word(raw),
        },
    }
}

/// Parse an optionally signed run of ASCII digits
///
/// Values beyond `i64` saturate so they still clamp by sign.
fn parse_integer(raw: &str) -> Option<i64> {
    let (negative, digits) = match raw.as_bytes().first()? {
        b'-' => (true, &raw[1..]),
        b'+' => (false, &raw[1..]),
        _ => (false, raw),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match raw.parse::<i64>() {
        Ok(n) => Some(n),
        Err(_) if negative => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

/// Resolve a free-text request
///
/// # Errors
///
/// [`MailsearchError::EmptyQuery`] when nothing is left once the modifiers
/// are stripped.
pub fn resolve_request(text: &str) -> Result<Resolution> {
    let mut saw_subject = false;
    let mut saw_body = false;
    let mut count: Option<(Count, &str, i64)> = None;
    let mut extra_integers = Vec::new();
    let mut format = OutputFormat::default();
    let mut full_body = false;
    let mut words = Vec::new();

    for raw in text.split_whitespace() {
        match classify(raw) {
            Token::Subject => saw_subject = true,
            Token::Body => saw_body = true,
            Token::Text => format = OutputFormat::Text,
            Token::Full => full_body = true,
            Token::Integer(n) => {
                if count.is_none() {
                    count = Some((Count::clamped(n), raw, n));
                } else {
                    extra_integers.push(raw.to_string());
                    words.push(raw);
                }
            }
            Token::Word(word) => words.push(word),
        }
    }

    let term = words.join(" ");
    if term.is_empty() {
        return Err(MailsearchError::EmptyQuery);
    }

    let scope = match (saw_subject, saw_body) {
        (true, false) => Scope::Subject,
        (false, true) => Scope::Body,
        _ => Scope::Both,
    };

    let mut ambiguities = Vec::new();
    if saw_subject && saw_body {
        ambiguities.push(Ambiguity::ScopeConflict);
    }
    if let Some((applied, raw, requested)) = count {
        if applied.get() as i64 != requested {
            ambiguities.push(Ambiguity::CountClamped {
                requested: raw.to_string(),
                applied: applied.get(),
            });
        }
    }
    if !extra_integers.is_empty() {
        ambiguities.push(Ambiguity::ExtraIntegers {
            tokens: extra_integers,
        });
    }

    let params = SearchParameters {
        term,
        scope,
        count: count.map(|(c, _, _)| c).unwrap_or_default(),
        format,
        full_body,
    };
    log::debug!("resolved {:?} -> {:?}", text, params);

    Ok(Resolution {
        params,
        ambiguities,
    })
}
