use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least {min} characters", min = MIN_PASSWORD_LEN)]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

fn required(value: &str, field: &'static str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::Missing(field))
    } else {
        Ok(())
    }
}

/// Loose shape check: one `@`, something before it, a dotted domain after.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

fn email(value: &str) -> Result<(), FormError> {
    required(value, "Email")?;
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(FormError::InvalidEmail)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), FormError> {
        email(&self.email)?;
        required(&self.password, "Password")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupRequest {
    pub fn validate(&self) -> Result<(), FormError> {
        required(&self.name, "Name")?;
        email(&self.email)?;
        required(&self.password, "Password")?;
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup() -> SignupRequest {
        SignupRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "correct horse".to_string(),
            confirm_password: "correct horse".to_string(),
        }
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("me@site.dev"));
        assert!(is_valid_email("  first.last@mail.co.uk "));
        assert!(!is_valid_email("me@site"));
        assert!(!is_valid_email("@site.dev"));
        assert!(!is_valid_email("me@@site.dev"));
        assert!(!is_valid_email("me@.site.dev"));
        assert!(!is_valid_email("me@site..dev"));
        assert!(!is_valid_email("me at@site.dev"));
        assert!(!is_valid_email("plain"));
    }

    #[test]
    fn test_login_validation() {
        let mut req = LoginRequest::default();
        assert_eq!(req.validate(), Err(FormError::Missing("Email")));
        req.email = "nope".to_string();
        assert_eq!(req.validate(), Err(FormError::InvalidEmail));
        req.email = "me@site.dev".to_string();
        assert_eq!(req.validate(), Err(FormError::Missing("Password")));
        req.password = "x".to_string();
        assert_eq!(req.validate(), Ok(()));
    }

    #[test]
    fn test_signup_validation() {
        assert_eq!(signup().validate(), Ok(()));

        let req = SignupRequest {
            name: " ".to_string(),
            ..signup()
        };
        assert_eq!(req.validate(), Err(FormError::Missing("Name")));

        let req = SignupRequest {
            password: "short".to_string(),
            confirm_password: "short".to_string(),
            ..signup()
        };
        assert_eq!(req.validate(), Err(FormError::PasswordTooShort));

        let req = SignupRequest {
            confirm_password: "correct horses".to_string(),
            ..signup()
        };
        assert_eq!(req.validate(), Err(FormError::PasswordMismatch));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FormError::Missing("Name").to_string(), "Name is required");
        assert_eq!(
            FormError::PasswordTooShort.to_string(),
            "Password must be at least 8 characters"
        );
    }
}
