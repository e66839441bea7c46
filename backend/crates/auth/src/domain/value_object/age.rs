//! Age Value Object
//!
//! Registration forms send the age either as a JSON number or as the raw
//! text of an input field. Both are normalized to a whole number of years.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Upper bound accepted for a stored age
pub const AGE_MAX: i32 = 150;

/// Age as it arrives in a request body
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AgeInput {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Age(i32);

impl Age {
    /// Normalize request input to an optional age
    ///
    /// Text is read like `parseInt`: optional sign, then leading digits;
    /// anything after the digits is ignored and text without digits means
    /// "not given". Numbers are truncated toward zero.
    pub fn normalize(input: Option<AgeInput>) -> AppResult<Option<Self>> {
        let years = match input {
            None => None,
            Some(AgeInput::Number(n)) if n.is_finite() => Some(n.trunc() as i64),
            Some(AgeInput::Number(_)) => None,
            Some(AgeInput::Text(text)) => parse_leading_int(&text),
        };

        match years {
            None => Ok(None),
            Some(y) if (0..=AGE_MAX as i64).contains(&y) => Ok(Some(Self(y as i32))),
            Some(_) => Err(AppError::bad_request(format!(
                "Age must be between 0 and {}",
                AGE_MAX
            ))),
        }
    }

    pub const fn from_db(years: i32) -> Self {
        Self(years)
    }

    pub const fn years(&self) -> i32 {
        self.0
    }
}

fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).take(12).collect();
    if digits.is_empty() {
        return None;
    }

    let value: i64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}
