use std::borrow::Cow;

use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError, ValidationErrors};

pub const TITLE_REQUIRED: &str = "Job role title is required";
pub const TITLE_EMPTY: &str = "Job role title cannot be empty";

/// Input for creating a job role
///
/// A body without `title` deserializes to an empty title, which
/// validation then rejects.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewJobRole {
    #[serde(default)]
    #[validate(custom(function = "title_present"))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
impl NewJobRole {
    pub fn new(title: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            title: title.into(),
            description: description.map(str::to_string),
        }
    }
}

/// Partial update for a job role
///
/// Outer `None` means the field was absent from the body,
/// `Some(None)` means it was sent as an explicit `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobRoleChanges {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
}

#[cfg(test)]
impl JobRoleChanges {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(Some(title.into())),
            ..Self::default()
        }
    }

    pub fn description(description: Option<&str>) -> Self {
        Self {
            description: Some(description.map(str::to_string)),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: Option<&str>) -> Self {
        self.description = Some(description.map(str::to_string));
        self
    }
}

impl Validate for JobRoleChanges {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        match &self.title {
            Some(Some(title)) if is_blank(title) => {
                errors.add("title", title_error("blank", TITLE_EMPTY));
            }
            Some(None) => errors.add("title", title_error("null", TITLE_EMPTY)),
            _ => {}
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Identifier as received from a caller, before validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestedId {
    Number(i64),
    NotANumber,
}

impl RequestedId {
    /// Parse a path segment by its leading integer
    ///
    /// Leading whitespace and one sign are skipped, then the longest run of
    /// digits is read, so `"12abc"` is 12 and `"1.5"` is 1. A segment with
    /// no leading digit is `NotANumber`. Values past `i64` saturate.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim_start();
        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let digits: Vec<i64> = unsigned
            .bytes()
            .take_while(u8::is_ascii_digit)
            .map(|digit| i64::from(digit - b'0'))
            .collect();
        if digits.is_empty() {
            return RequestedId::NotANumber;
        }

        let magnitude = digits
            .into_iter()
            .fold(0_i64, |acc, digit| acc.saturating_mul(10).saturating_add(digit));
        RequestedId::Number(if negative { -magnitude } else { magnitude })
    }

    /// The storage key, if this is a positive integer
    pub fn to_key(self) -> Option<i64> {
        match self {
            RequestedId::Number(n) if n > 0 => Some(n),
            _ => None,
        }
    }
}

impl From<i32> for RequestedId {
    fn from(id: i32) -> Self {
        RequestedId::Number(id.into())
    }
}

impl From<i64> for RequestedId {
    fn from(id: i64) -> Self {
        RequestedId::Number(id)
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn title_present(title: &str) -> Result<(), ValidationError> {
    if is_blank(title) {
        return Err(title_error("required", TITLE_REQUIRED));
    }
    Ok(())
}

fn title_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Keeps an explicit `null` distinct from an absent field
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
