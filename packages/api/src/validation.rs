//! Client-side form checks.
//!
//! These run before a request is built so an invalid form never reaches the
//! backend. Every failure is an [`ApiError::Validation`] carrying the message
//! shown under the form.

use crate::error::ApiError;
use crate::models::{NewAgent, NewManager};

pub const MIN_PASSWORD_LEN: usize = 8;

fn invalid(message: impl Into<String>) -> ApiError {
    ApiError::Validation(message.into())
}

/// Reject empty or whitespace-only values.
pub fn require(label: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(invalid(format!("{label} is required")));
    }
    Ok(())
}

/// Check the rough shape `local@domain.tld`.
pub fn email(value: &str) -> Result<(), ApiError> {
    let value = value.trim();
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
    if valid {
        Ok(())
    } else {
        Err(invalid("Invalid email address"))
    }
}

/// At least [`MIN_PASSWORD_LEN`] characters with upper, lower, digit and special.
pub fn strong_password(value: &str) -> Result<(), ApiError> {
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(invalid(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    let checks: [(fn(&char) -> bool, &str); 4] = [
        (char::is_ascii_uppercase, "an uppercase letter"),
        (char::is_ascii_lowercase, "a lowercase letter"),
        (char::is_ascii_digit, "a number"),
        (|c: &char| !c.is_ascii_alphanumeric(), "a special character"),
    ];
    for (check, what) in checks {
        if !value.chars().any(|c| check(&c)) {
            return Err(invalid(format!("Password must contain at least {what}")));
        }
    }
    Ok(())
}

/// New password plus its confirmation.
pub fn password_confirmation(password: &str, confirm: &str) -> Result<(), ApiError> {
    strong_password(password)?;
    if password != confirm {
        return Err(invalid("Passwords do not match"));
    }
    Ok(())
}

/// Email and work ID, the pair that identifies an employee.
pub fn employee(email_value: &str, work_id: &str) -> Result<(), ApiError> {
    email(email_value)?;
    require("Work ID", work_id)
}

impl NewAgent {
    pub fn validate(&self) -> Result<(), ApiError> {
        require("First name", &self.first_name)?;
        require("Last name", &self.last_name)?;
        employee(&self.email, &self.work_id)?;
        require("National ID", &self.national_id)?;
        require("Phone number", &self.phone_number)
    }
}

impl NewManager {
    pub fn validate(&self) -> Result<(), ApiError> {
        require("First name", &self.first_name)?;
        require("Last name", &self.last_name)?;
        employee(&self.email, &self.work_id)?;
        require("National ID", &self.national_id)?;
        require("Phone number", &self.phone_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: Result<(), ApiError>) -> String {
        match result {
            Err(ApiError::Validation(message)) => message,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_email_shapes() {
        assert!(email("a@b.com").is_ok());
        assert!(email(" ops@insure.co.rw ").is_ok());
        for bad in ["", "a", "a@b", "@b.com", "a@@b.com", "a b@c.com", "a@.com", "a@b."] {
            assert_eq!(message(email(bad)), "Invalid email address", "{bad:?}");
        }
    }

    #[test]
    fn test_strong_password() {
        assert!(strong_password("Secr3t!pw").is_ok());
        assert_eq!(
            message(strong_password("Ab1!")),
            "Password must be at least 8 characters"
        );
        assert!(message(strong_password("secr3t!pw")).contains("uppercase"));
        assert!(message(strong_password("SECR3T!PW")).contains("lowercase"));
        assert!(message(strong_password("Secret!pw")).contains("number"));
        assert!(message(strong_password("Secr3tpw9")).contains("special"));
    }

    #[test]
    fn test_confirmation_must_match() {
        assert!(password_confirmation("Secr3t!pw", "Secr3t!pw").is_ok());
        assert_eq!(
            message(password_confirmation("Secr3t!pw", "Secr3t!px")),
            "Passwords do not match"
        );
    }

    #[test]
    fn test_agent_form() {
        let mut agent = NewAgent {
            first_name: "Kim".into(),
            last_name: "Uwase".into(),
            email: "kim@insure.rw".into(),
            work_id: "AG7".into(),
            national_id: "1199".into(),
            phone_number: "+250788000000".into(),
        };
        assert!(agent.validate().is_ok());

        agent.work_id = "  ".into();
        assert_eq!(message(agent.validate()), "Work ID is required");
    }
}
