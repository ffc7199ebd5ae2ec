//! Sign-in / sign-up notices
//!
//! Toast content shown after a login form submission.

use serde::Serialize;

use kernel::error::kind::ErrorKind;

use crate::error::{AuthError, NETWORK_ERROR_MESSAGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeVariant {
    Default,
    Destructive,
}

/// Which form was submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    SignIn,
    SignUp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
    /// Error class of a failure notice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
    /// Whether resubmitting the form may succeed
    pub retryable: bool,
}

impl Notice {
    pub fn success(mode: FormMode, username: &str) -> Self {
        let title = match mode {
            FormMode::SignIn => "Login Successful",
            FormMode::SignUp => "Account Created Successfully",
        };
        Self {
            title: title.to_string(),
            description: format!("Welcome to RescueConnect, {}!", username),
            variant: NoticeVariant::Default,
            kind: None,
            retryable: false,
        }
    }

    pub fn failure(err: &AuthError) -> Self {
        let app = err.to_app_error();
        let (title, description) = match err {
            AuthError::Network(_) => ("Network Error", NETWORK_ERROR_MESSAGE.to_string()),
            AuthError::Rejected { message, .. } => ("Authentication Failed", message.clone()),
            AuthError::InvalidEmail(msg) | AuthError::InvalidInput(msg) => {
                ("Authentication Failed", msg.clone())
            }
            AuthError::PasswordValidation(e) => ("Authentication Failed", e.to_string()),
            _ => ("Something Went Wrong", app.message().to_string()),
        };
        Self {
            title: title.to_string(),
            description,
            variant: NoticeVariant::Destructive,
            kind: Some(app.kind()),
            retryable: app.is_retryable(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DEFAULT_REJECTION_MESSAGE;

    #[test]
    fn test_success_notices() {
        let notice = Notice::success(FormMode::SignIn, "ravi");
        assert_eq!(notice.title, "Login Successful");
        assert_eq!(notice.description, "Welcome to RescueConnect, ravi!");

        let notice = Notice::success(FormMode::SignUp, "ravi");
        assert_eq!(notice.title, "Account Created Successfully");
        assert_eq!(notice.variant, NoticeVariant::Default);
    }

    #[test]
    fn test_failure_notices() {
        let notice = Notice::failure(&AuthError::rejected(401, None));
        assert_eq!(notice.title, "Authentication Failed");
        assert_eq!(notice.description, DEFAULT_REJECTION_MESSAGE);
        assert_eq!(notice.variant, NoticeVariant::Destructive);
        assert!(!notice.retryable);

        let notice = Notice::failure(&AuthError::Network("refused".to_string()));
        assert_eq!(notice.title, "Network Error");
        assert_eq!(notice.description, NETWORK_ERROR_MESSAGE);
        assert_eq!(notice.kind, Some(ErrorKind::ServiceUnavailable));
        assert!(notice.retryable);
    }

    #[test]
    fn test_notice_serialization() {
        let value = serde_json::to_value(Notice::failure(&AuthError::rejected(409, None))).unwrap();
        assert_eq!(value["variant"], "destructive");
        assert_eq!(value["kind"], "CONFLICT");

        let value = serde_json::to_value(Notice::success(FormMode::SignIn, "u")).unwrap();
        assert!(value.get("kind").is_none());
    }
}
