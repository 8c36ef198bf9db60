//! # Google One Tap
//!
//! A reusable Google One Tap sign-in library with a Dioxus UI component.
//!
//! This crate provides:
//! - One-time injection of the Google Identity Services client script
//! - Initialization of the one-tap prompt with a caller-supplied client id
//! - Credential forwarding to a caller-owned backend endpoint
//! - Sign-in results delivered through callbacks
//!
//! ## Separation of Concerns
//!
//! This crate focuses solely on the sign-in hand-off. It does **not**:
//! - Validate or decode the credential token (handled by the backend)
//! - Store sessions or tokens (handled by the application)
//! - Render any markup (the component is invisible)
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use google_one_tap::{OneTapService, OneTapSignIn};
//!
//! // Programmatic usage
//! let service = OneTapService::new("https://example.com/auth/google".to_string(), None);
//! let data = service.exchange_credential(&id_token).await?;
//!
//! // UI component usage
//! OneTapSignIn {
//!     client_id: "1234567890-abc.apps.googleusercontent.com".to_string(),
//!     auth_url: "https://example.com/auth/google".to_string(),
//!     on_signed_in: move |data| {
//!         // Store the signed-in user
//!     },
//! }
//! ```

pub mod component;
pub mod models;
pub mod script;
pub mod service;

pub use component::{OneTapSignIn, OneTapSignInProps};
pub use models::{CredentialPayload, OneTapOptions};
pub use script::{GsiScript, GSI_SCRIPT_ID, GSI_SCRIPT_SRC};
pub use service::{AuthError, OneTapService};
