//! Admin gate for write endpoints.
//!
//! Admins send the shared password in the `x-admin-password` header. The
//! server only knows its SHA-256 digest (from `ADMIN_PASSWORD_SHA256`) and
//! compares digests in constant time. Without a configured digest every admin
//! request is refused.
//!
//! # Usage
//!
//! ```rust,ignore
//! async fn handler(_admin: AdminGuard, State(app): State<Arc<App>>) -> impl IntoResponse {
//!     // only reached with the right password
//! }
//! ```

use std::fmt;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use sha2::{Digest, Sha256};

use super::http::ApiError;

/// Header carrying the admin password.
pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

#[derive(Clone)]
pub struct AdminCredentials {
    digest: Option<[u8; 32]>,
}

impl AdminCredentials {
    /// Credentials that refuse every password.
    pub fn disabled() -> Self {
        Self { digest: None }
    }

    /// Parses a hex-encoded SHA-256 digest (64 hex characters).
    pub fn from_hex_digest(value: &str) -> Result<Self, hex::FromHexError> {
        let mut digest = [0u8; 32];
        hex::decode_to_slice(value.trim(), &mut digest)?;
        Ok(Self {
            digest: Some(digest),
        })
    }

    pub fn from_password(password: &str) -> Self {
        Self {
            digest: Some(sha256(password)),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.digest.is_some()
    }

    pub fn verify(&self, password: &str) -> bool {
        match &self.digest {
            Some(expected) => ct_eq(expected, &sha256(password)),
            None => false,
        }
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

fn sha256(value: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&hasher.finalize());
    digest
}

/// Constant-time comparison of two digests.
fn ct_eq(a: &[u8; 32], b: &[u8; 32]) -> bool {
    let mut diff: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

/// Extractor that only succeeds for requests carrying the admin password.
#[derive(Debug, Clone, Copy)]
pub struct AdminGuard;

impl<S> FromRequestParts<S> for AdminGuard
where
    AdminCredentials: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let credentials = AdminCredentials::from_ref(state);

        let Some(password) = parts
            .headers
            .get(ADMIN_PASSWORD_HEADER)
            .and_then(|v| v.to_str().ok())
        else {
            tracing::warn!(method = %parts.method, path = %parts.uri.path(), "Admin request without password");
            return Err(ApiError::Unauthorized("Admin password required".to_string()));
        };

        if !credentials.verify(password) {
            tracing::warn!(method = %parts.method, path = %parts.uri.path(), "Admin password rejected");
            return Err(ApiError::Unauthorized("Invalid admin password".to_string()));
        }

        Ok(AdminGuard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::post,
        Router,
    };
    use tower::ServiceExt;

    async fn protected_handler(_admin: AdminGuard) -> &'static str {
        "admin"
    }

    fn app(credentials: AdminCredentials) -> Router {
        Router::new()
            .route("/", post(protected_handler))
            .with_state(credentials)
    }

    fn request(password: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(password) = password {
            builder = builder.header(ADMIN_PASSWORD_HEADER, password);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn missing_header_is_unauthorized() {
        let response = app(AdminCredentials::from_password("hunter2"))
            .oneshot(request(None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Admin password required" })
        );
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let response = app(AdminCredentials::from_password("hunter2"))
            .oneshot(request(Some("hunter3")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn right_password_is_let_through() {
        let response = app(AdminCredentials::from_password("hunter2"))
            .oneshot(request(Some("hunter2")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"admin");
    }

    #[tokio::test]
    async fn disabled_credentials_refuse_everything() {
        let response = app(AdminCredentials::disabled())
            .oneshot(request(Some("")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn hex_digest_matches_password_hash() {
        let from_hex = AdminCredentials::from_hex_digest(
            "F52FBD32B2B3B86FF88EF6C490628285F482AF15DDCB29541F94BCF526A3F6C7",
        )
        .unwrap();
        assert!(from_hex.verify("hunter2"));
        assert!(!from_hex.verify("Hunter2"));
        assert!(AdminCredentials::from_hex_digest("abc").is_err());
    }
}
