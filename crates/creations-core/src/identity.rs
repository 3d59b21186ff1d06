//! Boundary to the hosted identity service.
//!
//! Account creation and login are delegated entirely to the service; the
//! application only forwards credentials and reacts to success or failure.
//! No session or token state is kept.

use serde::Serialize;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::RwLock;
use thiserror::Error;

/// Identity service errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The service refused the request; the message is shown as-is.
    #[error("{0}")]
    Rejected(String),
    /// The service could not be reached or answered garbage.
    #[error("{0}")]
    Transport(String),
}

/// Result type for identity operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Boxed future for identity calls.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Data submitted when creating an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    /// ISO date, `YYYY-MM-DD`.
    pub date_of_birth: String,
}

/// Email and password login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Trait for identity backends.
pub trait IdentityService: Send + Sync {
    /// Register a new account.
    fn sign_up(&self, request: &SignUpRequest) -> BoxFuture<'_, AuthResult<()>>;

    /// Log in with email and password.
    fn sign_in(&self, credentials: &Credentials) -> BoxFuture<'_, AuthResult<()>>;
}

#[derive(Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    data: SignUpMetadata<'a>,
}

#[derive(Serialize)]
struct SignUpMetadata<'a> {
    full_name: &'a str,
    date_of_birth: &'a str,
}

#[derive(Serialize)]
struct SignInBody<'a> {
    email: &'a str,
    password: &'a str,
}

/// Client for a hosted auth REST API (`/auth/v1/...`).
pub struct HttpIdentityService {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl HttpIdentityService {
    /// Create a client for the project at `base_url`, authenticating with
    /// its public anonymous key.
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
            anon_key: anon_key.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> AuthResult<()> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .json(body)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let text = response
            .text()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        let message = error_message(&text).unwrap_or_else(|| format!("Request failed ({})", status));
        log::warn!("Identity service rejected {}: {}", path, message);
        Err(AuthError::Rejected(message))
    }
}

impl IdentityService for HttpIdentityService {
    fn sign_up(&self, request: &SignUpRequest) -> BoxFuture<'_, AuthResult<()>> {
        let request = request.clone();
        Box::pin(async move {
            let body = SignUpBody {
                email: &request.email,
                password: &request.password,
                data: SignUpMetadata {
                    full_name: &request.full_name,
                    date_of_birth: &request.date_of_birth,
                },
            };
            self.post("/auth/v1/signup", &body).await
        })
    }

    fn sign_in(&self, credentials: &Credentials) -> BoxFuture<'_, AuthResult<()>> {
        let credentials = credentials.clone();
        Box::pin(async move {
            let body = SignInBody {
                email: &credentials.email,
                password: &credentials.password,
            };
            self.post("/auth/v1/token?grant_type=password", &body).await
        })
    }
}

/// Pull the human-readable message out of an error response body.
fn error_message(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    ["msg", "error_description", "message", "error"]
        .iter()
        .find_map(|key| json.get(key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

/// In-process accounts, for tests and offline use.
#[derive(Default)]
pub struct MemoryIdentityService {
    /// Password by email.
    accounts: RwLock<HashMap<String, String>>,
}

impl MemoryIdentityService {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityService for MemoryIdentityService {
    fn sign_up(&self, request: &SignUpRequest) -> BoxFuture<'_, AuthResult<()>> {
        let email = request.email.trim().to_lowercase();
        let password = request.password.clone();
        Box::pin(async move {
            if password.len() < 6 {
                return Err(AuthError::Rejected(
                    "Password should be at least 6 characters".to_string(),
                ));
            }
            let mut accounts = self
                .accounts
                .write()
                .map_err(|e| AuthError::Transport(format!("Lock error: {}", e)))?;
            if accounts.contains_key(&email) {
                return Err(AuthError::Rejected("User already registered".to_string()));
            }
            accounts.insert(email, password);
            Ok(())
        })
    }

    fn sign_in(&self, credentials: &Credentials) -> BoxFuture<'_, AuthResult<()>> {
        let email = credentials.email.trim().to_lowercase();
        let password = credentials.password.clone();
        Box::pin(async move {
            let accounts = self
                .accounts
                .read()
                .map_err(|e| AuthError::Transport(format!("Lock error: {}", e)))?;
            match accounts.get(&email) {
                Some(stored) if *stored == password => Ok(()),
                _ => Err(AuthError::Rejected("Invalid login credentials".to_string())),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, password: &str) -> SignUpRequest {
        SignUpRequest {
            email: email.to_string(),
            password: password.to_string(),
            full_name: "Jane Doe".to_string(),
            date_of_birth: "1990-01-01".to_string(),
        }
    }

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_memory_sign_up_then_in() {
        let service = MemoryIdentityService::new();

        service.sign_up(&request("jane@example.com", "secret1")).await.unwrap();
        service.sign_in(&credentials("Jane@Example.com", "secret1")).await.unwrap();
    }

    #[tokio::test]
    async fn test_memory_duplicate_account() {
        let service = MemoryIdentityService::new();
        service.sign_up(&request("a@b.c", "secret1")).await.unwrap();

        let result = service.sign_up(&request("a@b.c", "other12")).await;
        assert_eq!(result, Err(AuthError::Rejected("User already registered".to_string())));
    }

    #[tokio::test]
    async fn test_memory_wrong_password() {
        let service = MemoryIdentityService::new();
        service.sign_up(&request("a@b.c", "secret1")).await.unwrap();

        let result = service.sign_in(&credentials("a@b.c", "nope")).await;
        assert_eq!(
            result.unwrap_err().to_string(),
            "Invalid login credentials"
        );
    }

    #[tokio::test]
    async fn test_memory_short_password() {
        let service = MemoryIdentityService::new();
        let result = service.sign_up(&request("a@b.c", "123")).await;
        assert!(matches!(result, Err(AuthError::Rejected(_))));
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"code":400,"msg":"User already registered"}"#).as_deref(),
            Some("User already registered")
        );
        assert_eq!(
            error_message(r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#)
                .as_deref(),
            Some("Invalid login credentials")
        );
        assert_eq!(error_message("<html>bad gateway</html>"), None);
    }

    #[test]
    fn test_http_base_url_trimmed() {
        let service = HttpIdentityService::new("https://project.example.co/", "anon");
        assert_eq!(service.base_url(), "https://project.example.co");
    }
}
