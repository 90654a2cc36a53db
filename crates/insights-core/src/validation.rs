//! Request-boundary validation.
//!
//! Pure functions over request field values. Each raises
//! [`Error::InvalidRequestData`] on violation and never touches persistence,
//! so invalid payloads are rejected before a domain entity is built.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

/// Maximum length of a source name, in characters.
pub const MAX_SOURCE_NAME_LENGTH: usize = 100;
/// Maximum length of a source description, in characters.
pub const MAX_SOURCE_DESCRIPTION_LENGTH: usize = 300;
/// Exact length of an ISBN-13, in characters.
pub const ISBN_13_LENGTH: usize = 13;
/// Maximum length of an insight note, in characters.
pub const MAX_INSIGHT_NOTE_LENGTH: usize = 1000;
/// Maximum length of an insight quote, in characters.
pub const MAX_INSIGHT_QUOTE_LENGTH: usize = 1000;

// local-part@domain, domain with at least one dot (covers dotted-quad
// literals such as 123.123.123.123). Classes are spelled out in ASCII:
// the regex crate's \w is Unicode-aware and would accept non-ASCII
// local parts.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_\-.]+@([A-Za-z0-9_\-]+\.)+[A-Za-z0-9_\-]{2,4}$")
        .expect("email regex is valid")
});

/// Validate an email address against the service's email grammar.
pub fn validate_email(email: &str) -> Result<()> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(Error::InvalidRequestData(format!(
            "Provided email has invalid format: {}",
            email
        )))
    }
}

/// Validate the user-supplied fields of a source.
pub fn validate_source_fields(
    name: &str,
    description: Option<&str>,
    isbn13: Option<&str>,
) -> Result<()> {
    let name_len = name.chars().count();
    if name_len == 0 || name_len > MAX_SOURCE_NAME_LENGTH {
        return Err(Error::InvalidRequestData(format!(
            "The source name must be between 1 and {} characters long",
            MAX_SOURCE_NAME_LENGTH
        )));
    }
    if let Some(description) = description {
        if description.chars().count() > MAX_SOURCE_DESCRIPTION_LENGTH {
            return Err(Error::InvalidRequestData(format!(
                "The source description must not exceed {} characters",
                MAX_SOURCE_DESCRIPTION_LENGTH
            )));
        }
    }
    if let Some(isbn13) = isbn13 {
        if isbn13.chars().count() != ISBN_13_LENGTH {
            return Err(Error::InvalidRequestData(format!(
                "An ISBN-13 must be exactly {} characters long",
                ISBN_13_LENGTH
            )));
        }
    }
    Ok(())
}

/// Validate the user-supplied fields of an insight.
pub fn validate_insight_fields(note: &str, quote: Option<&str>) -> Result<()> {
    if note.chars().count() > MAX_INSIGHT_NOTE_LENGTH {
        return Err(Error::InvalidRequestData(format!(
            "The insight note must not exceed {} characters",
            MAX_INSIGHT_NOTE_LENGTH
        )));
    }
    if let Some(quote) = quote {
        if quote.chars().count() > MAX_INSIGHT_QUOTE_LENGTH {
            return Err(Error::InvalidRequestData(format!(
                "The insight quote must not exceed {} characters",
                MAX_INSIGHT_QUOTE_LENGTH
            )));
        }
    }
    Ok(())
}
