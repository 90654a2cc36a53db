//! Domain entities for the insights service.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Closed set of categorical labels attached to insights and to a user's
/// notification preferences.
///
/// Stored in PostgreSQL as an array of the variant names. Decoding goes
/// through [`FilterTag::decode_all`], which treats an unknown stored name as
/// a data-corruption error rather than dropping it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterTag {
    #[serde(rename = "PERSONAL_DEVELOPMENT")]
    PersonalDevelopment,
    #[serde(rename = "WEALTH_CREATION")]
    WealthCreation,
}

impl FilterTag {
    /// The name this tag is stored under in a text array column.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterTag::PersonalDevelopment => "PERSONAL_DEVELOPMENT",
            FilterTag::WealthCreation => "WEALTH_CREATION",
        }
    }

    /// Encode a tag set into the stored string form.
    pub fn encode_all(tags: &[FilterTag]) -> Vec<String> {
        tags.iter().map(|t| t.as_str().to_string()).collect()
    }

    /// Decode a stored string array back into tags.
    ///
    /// An unrecognized name means the column holds data this binary cannot
    /// represent; that surfaces as [`Error::Decode`].
    pub fn decode_all(names: &[String]) -> Result<Vec<FilterTag>> {
        names.iter().map(|name| name.parse()).collect()
    }
}

impl FromStr for FilterTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "PERSONAL_DEVELOPMENT" => Ok(FilterTag::PersonalDevelopment),
            "WEALTH_CREATION" => Ok(FilterTag::WealthCreation),
            other => Err(Error::Decode(format!("unknown filter tag '{}'", other))),
        }
    }
}

impl fmt::Display for FilterTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered user.
///
/// The id is the subject claim of an externally-issued token: opaque,
/// immutable, and never taken from a request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub notification_enabled: bool,
    pub notification_filter_tags: Vec<FilterTag>,
}

/// A referenceable book or similar material, owned exclusively by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub isbn13: Option<String>,
}

/// A user's note/quote, optionally linked to one of their own sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub id: i64,
    pub user_id: String,
    /// If set, must reference a source owned by the same user. Enforced by
    /// the repository before every write.
    pub source_id: Option<i64>,
    /// Stamped by the service on every create/update, never client-supplied.
    pub last_modified_date: NaiveDate,
    pub filter_tags: Vec<FilterTag>,
    pub note: String,
    pub quote: Option<String>,
}
