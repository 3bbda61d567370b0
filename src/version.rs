//! Version identifier parsing
//!
//! Metadata schema revisions are identified by `<namespace>-<calendarVersion>`
//! strings such as `wonzimer-20210101`. The namespace is a project-scoped
//! prefix and may itself contain hyphens; the calendar version is always the
//! final 8-digit segment.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::MetadataError;

/// The calendar-version shape: exactly eight digits.
fn calendar_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{8}$").unwrap())
}

/// A parsed metadata version identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VersionIdentifier {
    /// Project-scoped namespace (e.g. "wonzimer")
    pub namespace: String,
    /// 8-digit calendar version token (e.g. "20210101")
    pub calendar_version: String,
}

impl VersionIdentifier {
    /// Parse an identifier string, e.g. `wonzimer-20210101`.
    ///
    /// The split is on the *last* hyphen, so hyphenated namespaces resolve
    /// correctly; the trailing segment must match the calendar shape.
    pub fn parse(identifier: &str) -> Result<Self, MetadataError> {
        let (namespace, calendar_version) = identifier
            .rsplit_once('-')
            .filter(|(ns, cal)| !ns.is_empty() && calendar_pattern().is_match(cal))
            .ok_or_else(|| MetadataError::InvalidVersionIdentifier(identifier.to_string()))?;

        Ok(Self {
            namespace: namespace.to_string(),
            calendar_version: calendar_version.to_string(),
        })
    }

    /// The full identifier string (e.g. "wonzimer-20210101")
    pub fn identifier(&self) -> String {
        format!("{}-{}", self.namespace, self.calendar_version)
    }
}

impl fmt::Display for VersionIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.namespace, self.calendar_version)
    }
}

impl FromStr for VersionIdentifier {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
