//! Account creation and login flows.

use crate::identity::{Credentials, IdentityService, SignUpRequest};
use crate::notify::Notification;
use crate::validation::{ValidationError, require};

/// The account creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub date_of_birth: String,
}

impl AccountForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "name")?;
        require(&self.email, "email")?;
        require(&self.password, "password")?;
        require(&self.confirm_password, "confirm password")?;
        require(&self.date_of_birth, "date of birth")?;
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }

    fn to_request(&self) -> SignUpRequest {
        SignUpRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            full_name: self.name.trim().to_string(),
            date_of_birth: self.date_of_birth.trim().to_string(),
        }
    }
}

/// The login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.email, "email")?;
        require(&self.password, "password")
    }
}

/// Submit the account form. The service is not called if validation fails.
pub async fn create_account(service: &dyn IdentityService, form: &AccountForm) -> Notification {
    if let Err(e) = form.validate() {
        return e.notification();
    }

    match service.sign_up(&form.to_request()).await {
        Ok(()) => {
            log::info!("Account created for {}", form.email.trim());
            Notification::info(
                "Account Created!",
                "Please check your email to verify your account.",
            )
        }
        Err(e) => {
            log::warn!("Account creation failed: {}", e);
            Notification::error("Account Creation Failed", e.to_string())
        }
    }
}

/// Submit the login form.
pub async fn log_in(service: &dyn IdentityService, form: &LoginForm) -> Notification {
    if let Err(e) = form.validate() {
        return e.notification();
    }

    let credentials = Credentials {
        email: form.email.trim().to_string(),
        password: form.password.clone(),
    };
    match service.sign_in(&credentials).await {
        Ok(()) => Notification::info("Login Successful!", "Welcome back!"),
        Err(e) => {
            log::warn!("Login failed: {}", e);
            Notification::error("Login Failed", e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{AuthError, AuthResult, BoxFuture, MemoryIdentityService};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts calls and always fails with a fixed message.
    #[derive(Default)]
    struct FailingService {
        calls: AtomicUsize,
    }

    impl IdentityService for FailingService {
        fn sign_up(&self, _request: &SignUpRequest) -> BoxFuture<'_, AuthResult<()>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Box::pin(async { Err(AuthError::Rejected("Signups not allowed for this instance".to_string())) })
        }

        fn sign_in(&self, _credentials: &Credentials) -> BoxFuture<'_, AuthResult<()>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Box::pin(async { Err(AuthError::Transport("connection refused".to_string())) })
        }
    }

    fn account_form() -> AccountForm {
        AccountForm {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            password: "hunter22".to_string(),
            confirm_password: "hunter22".to_string(),
            date_of_birth: "1990-05-01".to_string(),
        }
    }

    #[tokio::test]
    async fn test_password_mismatch_skips_service() {
        let service = FailingService::default();
        let form = AccountForm {
            confirm_password: "different".to_string(),
            ..account_form()
        };

        let notification = create_account(&service, &form).await;

        assert_eq!(notification.title, "Passwords Mismatch");
        assert!(notification.is_error());
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_missing_field() {
        let form = AccountForm {
            date_of_birth: String::new(),
            ..account_form()
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingField("date of birth")));
    }

    #[tokio::test]
    async fn test_create_account_then_log_in() {
        let service = MemoryIdentityService::new();

        let created = create_account(&service, &account_form()).await;
        assert_eq!(created.title, "Account Created!");

        let login = LoginForm {
            email: "john@example.com".to_string(),
            password: "hunter22".to_string(),
        };
        let notification = log_in(&service, &login).await;
        assert_eq!(notification.title, "Login Successful!");
        assert!(!notification.is_error());
    }

    #[tokio::test]
    async fn test_service_message_surfaced_verbatim() {
        let service = FailingService::default();

        let created = create_account(&service, &account_form()).await;
        assert_eq!(created.title, "Account Creation Failed");
        assert_eq!(created.description, "Signups not allowed for this instance");

        let login = LoginForm {
            email: "john@example.com".to_string(),
            password: "x".to_string(),
        };
        let failed = log_in(&service, &login).await;
        assert_eq!(failed.title, "Login Failed");
        assert_eq!(failed.description, "connection refused");
        assert_eq!(service.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_empty_login_rejected() {
        let service = FailingService::default();
        let notification = log_in(&service, &LoginForm::default()).await;

        assert!(notification.is_error());
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
    }
}
