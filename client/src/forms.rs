//! Registration and login forms
//!
//! Field rules checked before anything is sent. Each field reports its
//! first failing rule.

use std::fmt;

use crate::models::{Credentials, RegistrationData};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(Vec<FieldError>);

impl FormErrors {
    fn check(&mut self, field: &'static str, result: Result<(), String>) {
        if let Err(message) = result {
            self.0.push(FieldError { field, message });
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for a field, if it failed
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

// ============================================================================
// Registration
// ============================================================================

/// Raw registration form input
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    pub address: String,
    pub age: String,
    pub date_of_birth: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<RegistrationData, FormErrors> {
        let mut errors = FormErrors::default();

        errors.check("name", length("Name", &self.name, 2, 50));
        errors.check("email", email(&self.email));
        errors.check("username", username(&self.username));
        errors.check("password", password(&self.password));
        errors.check(
            "confirmPassword",
            if self.password == self.confirm_password {
                Ok(())
            } else {
                Err("Passwords do not match".into())
            },
        );
        errors.check("phone", phone(&self.phone));
        errors.check("address", length("Address", &self.address, 5, 200));
        let age = age(&self.age);
        errors.check("age", age.clone().map(|_| ()));
        errors.check(
            "dateOfBirth",
            if self.date_of_birth.is_empty() {
                Err("Date of birth is required".into())
            } else {
                Ok(())
            },
        );

        match age {
            Ok(age) if errors.is_empty() => Ok(RegistrationData {
                name: self.name.clone(),
                email: self.email.clone(),
                username: self.username.clone(),
                password: self.password.clone(),
                phone: self.phone.clone(),
                address: self.address.clone(),
                age,
                date_of_birth: self.date_of_birth.clone(),
            }),
            _ => Err(errors),
        }
    }
}

// ============================================================================
// Login
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<Credentials, FormErrors> {
        let mut errors = FormErrors::default();

        errors.check("username", username(&self.username));
        errors.check(
            "password",
            if self.password.is_empty() {
                Err("Password is required".into())
            } else {
                Ok(())
            },
        );

        if errors.is_empty() {
            Ok(Credentials {
                username: self.username.clone(),
                password: self.password.clone(),
            })
        } else {
            Err(errors)
        }
    }
}

// ============================================================================
// Field rules
// ============================================================================

fn length(label: &str, value: &str, min: usize, max: usize) -> Result<(), String> {
    let len = value.chars().count();
    if len < min {
        Err(format!("{label} must be at least {min} characters"))
    } else if len > max {
        Err(format!("{label} cannot exceed {max} characters"))
    } else {
        Ok(())
    }
}

fn username(value: &str) -> Result<(), String> {
    length("Username", value, 3, 50)?;
    if value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err("Username can only contain letters, numbers and underscores".into())
    }
}

fn password(value: &str) -> Result<(), String> {
    length("Password", value, 8, 50)?;
    let rules: [(fn(&char) -> bool, &str); 4] = [
        (char::is_ascii_uppercase, "uppercase letter"),
        (char::is_ascii_lowercase, "lowercase letter"),
        (char::is_ascii_digit, "number"),
        (|c: &char| !c.is_ascii_alphanumeric(), "special character"),
    ];
    for (rule, what) in rules {
        if !value.chars().any(|c| rule(&c)) {
            return Err(format!("Password must contain at least one {what}"));
        }
    }
    Ok(())
}

fn email(value: &str) -> Result<(), String> {
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        return Err("Please enter a valid email address".into());
    }
    if value.chars().count() > 100 {
        return Err("Email cannot exceed 100 characters".into());
    }
    Ok(())
}

fn phone(value: &str) -> Result<(), String> {
    let len = value.chars().count();
    if len < 10 {
        return Err("Phone number must be at least 10 digits".into());
    }
    if len > 15 {
        return Err("Phone number cannot exceed 15 digits".into());
    }
    let allowed = |c: char| c.is_ascii_digit() || c.is_whitespace() || "+-()".contains(c);
    if value.chars().all(allowed) {
        Ok(())
    } else {
        Err("Please enter a valid phone number".into())
    }
}

/// Blank reads as 0, like `Number("")`
fn age(value: &str) -> Result<u32, String> {
    let trimmed = value.trim();
    let years = if trimmed.is_empty() {
        0.0
    } else {
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| "Age must be a number".to_string())?
    };

    if years < 12.0 {
        Err("You must be at least 12 years old".into())
    } else if years > 120.0 {
        Err("Age cannot exceed 120".into())
    } else {
        Ok(years.trunc() as u32)
    }
}
