//! Profile Value Object
//!
//! Optional personal details collected at registration.

use chrono::NaiveDate;
use kernel::error::app_error::{AppError, AppResult};

use super::age::{Age, AgeInput};

pub const NAME_MAX_LENGTH: usize = 100;
pub const PHONE_MAX_LENGTH: usize = 20;
pub const ADDRESS_MAX_LENGTH: usize = 255;

/// Unvalidated profile fields from a request
#[derive(Debug, Clone, Default)]
pub struct ProfileInput {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub age: Option<AgeInput>,
    pub date_of_birth: Option<String>,
}

/// Validated profile; blank strings are stored as absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub age: Option<Age>,
    pub date_of_birth: Option<NaiveDate>,
}

impl Profile {
    pub fn from_input(input: ProfileInput) -> AppResult<Self> {
        Ok(Self {
            name: bounded("Name", input.name, NAME_MAX_LENGTH)?,
            phone: bounded("Phone number", input.phone, PHONE_MAX_LENGTH)?,
            address: bounded("Address", input.address, ADDRESS_MAX_LENGTH)?,
            age: Age::normalize(input.age)?,
            date_of_birth: parse_date(input.date_of_birth)?,
        })
    }
}

fn bounded(field: &str, value: Option<String>, max: usize) -> AppResult<Option<String>> {
    let Some(value) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    if value.chars().count() > max {
        return Err(AppError::bad_request(format!(
            "{field} cannot exceed {max} characters"
        )));
    }
    Ok(Some(value))
}

fn parse_date(value: Option<String>) -> AppResult<Option<NaiveDate>> {
    let Some(value) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    NaiveDate::parse_from_str(&value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| {
            AppError::bad_request("Date of birth must be a valid date")
                .with_action("Use the format YYYY-MM-DD")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_become_absent() {
        let profile = Profile::from_input(ProfileInput {
            name: Some("  ".into()),
            phone: Some(String::new()),
            date_of_birth: Some(String::new()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn test_full_profile() {
        let profile = Profile::from_input(ProfileInput {
            name: Some(" Alice Smith ".into()),
            phone: Some("+1 555-0100".into()),
            address: Some("1 Main Street".into()),
            age: Some(AgeInput::Text("29".into())),
            date_of_birth: Some("1996-04-12".into()),
        })
        .unwrap();

        assert_eq!(profile.name.as_deref(), Some("Alice Smith"));
        assert_eq!(profile.age.map(|a| a.years()), Some(29));
        assert_eq!(profile.date_of_birth, NaiveDate::from_ymd_opt(1996, 4, 12));
    }

    #[test]
    fn test_invalid_date() {
        let err = Profile::from_input(ProfileInput {
            date_of_birth: Some("12/04/1996".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.message(), "Date of birth must be a valid date");
    }

    #[test]
    fn test_field_too_long() {
        let err = Profile::from_input(ProfileInput {
            phone: Some("1".repeat(PHONE_MAX_LENGTH + 1)),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.message(), "Phone number cannot exceed 20 characters");
    }
}
