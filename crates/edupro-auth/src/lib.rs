//! # EduPro Auth
//!
//! Turns submitted credentials into a [`User`](edupro_models::User).
//!
//! - [`authenticator`]: the [`Authenticator`] seam and its two built-in
//!   implementations
//! - [`error`]: [`AuthError`]
//!
//! Real credential exchange is out of scope. [`DemoAuthenticator`] binds the
//! demo student on every valid submission and [`DirectoryAuthenticator`]
//! binds the demo account matching the username. Either can be replaced by
//! an implementation that talks to an identity provider.
//!
//! # Example
//!
//! ```
//! use edupro_auth::{DemoAuthenticator, verify_credentials};
//! use edupro_models::LoginRequest;
//!
//! let user = verify_credentials(&DemoAuthenticator, &LoginRequest::new("bagus123", "x")).unwrap();
//! assert_eq!(user.name, "Bagus Prayoga");
//! ```

pub mod authenticator;
pub mod error;

// Re-export commonly used types at crate root
pub use authenticator::{
    Authenticator, DemoAuthenticator, DirectoryAuthenticator, authenticator_for, verify_credentials,
};
pub use error::AuthError;
