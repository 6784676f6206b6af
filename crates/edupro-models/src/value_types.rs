//! Strongly-typed value types with validation for domain primitives.
//!
//! - [`Email`]: a validated email address
//! - [`AvatarRef`]: an embeddable image reference (remote URL or `data:` URL)
//! - [`AvatarUpload`]: raw bytes of a user-selected image, converted to an
//!   [`AvatarRef`] after type and size checks
//!
//! # Example
//!
//! ```
//! use edupro_config::AvatarConfig;
//! use edupro_models::value_types::{AvatarRef, AvatarUpload, Email};
//!
//! let email: Email = "bagus@student.edupro.sch.id".parse().unwrap();
//! assert_eq!(email.domain(), "student.edupro.sch.id");
//!
//! let png = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR".to_vec();
//! let upload = AvatarUpload::new("me.png", png);
//! let avatar = AvatarRef::from_upload(&upload, &AvatarConfig::default()).unwrap();
//! assert!(avatar.as_str().starts_with("data:image/png;base64,"));
//! ```

use data_encoding::BASE64;
use edupro_config::AvatarConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::ValidateEmail;

/// Error type for value type parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueTypeError {
    #[error("Invalid email: {0}")]
    InvalidEmail(String),
}

// ============================================================================
// Email
// ============================================================================

/// A validated email address.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Create a new Email from a string, validating it.
    pub fn new(email: impl Into<String>) -> Result<Self, ValueTypeError> {
        let email = email.into();
        Self::validate(&email)?;
        Ok(Self(email))
    }

    /// Create an Email without validation.
    ///
    /// Intended for compile-time constants such as the demo accounts.
    #[inline]
    pub fn new_unchecked(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part after `@`.
    pub fn domain(&self) -> &str {
        self.0.split('@').nth(1).unwrap_or("")
    }

    fn validate(email: &str) -> Result<(), ValueTypeError> {
        if email.is_empty() {
            return Err(ValueTypeError::InvalidEmail("email cannot be empty".into()));
        }

        if !email.validate_email() {
            return Err(ValueTypeError::InvalidEmail(format!(
                "'{}' is not a valid email address",
                email
            )));
        }

        Ok(())
    }
}

impl fmt::Debug for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Email({})", self.0)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Email {
    type Err = ValueTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Email {
    type Error = ValueTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> String {
        email.0
    }
}

// ============================================================================
// Avatar
// ============================================================================

/// Reasons an avatar upload is refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AvatarError {
    #[error("avatar file `{file_name}` is empty")]
    Empty { file_name: String },

    #[error("avatar file `{file_name}` is not a recognised image")]
    UnrecognisedImage { file_name: String },

    #[error("avatar type {mime} is not allowed")]
    UnsupportedType { mime: String },

    #[error("avatar is {size} bytes, the limit is {max}")]
    TooLarge { size: usize, max: usize },
}

/// A user-selected image file, before validation.
#[derive(Clone, PartialEq, Eq)]
pub struct AvatarUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl AvatarUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// MIME type sniffed from the file signature.
    pub fn sniff_mime(&self) -> Option<&'static str> {
        sniff_image_mime(&self.bytes)
    }
}

impl fmt::Debug for AvatarUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvatarUpload")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

fn sniff_image_mime(bytes: &[u8]) -> Option<&'static str> {
    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n";

    if bytes.starts_with(PNG) {
        Some("image/png")
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        Some("image/gif")
    } else if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        Some("image/webp")
    } else {
        None
    }
}

/// Reference to a profile image that a view can embed directly.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvatarRef(String);

impl AvatarRef {
    /// A remote image URL.
    pub fn url(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Validate an upload and encode it as a `data:` URL.
    pub fn from_upload(upload: &AvatarUpload, config: &AvatarConfig) -> Result<Self, AvatarError> {
        if upload.bytes.is_empty() {
            return Err(AvatarError::Empty {
                file_name: upload.file_name.clone(),
            });
        }

        let mime = upload
            .sniff_mime()
            .ok_or_else(|| AvatarError::UnrecognisedImage {
                file_name: upload.file_name.clone(),
            })?;

        if !config.allows(mime) {
            return Err(AvatarError::UnsupportedType {
                mime: mime.to_string(),
            });
        }

        if upload.bytes.len() > config.max_bytes {
            return Err(AvatarError::TooLarge {
                size: upload.bytes.len(),
                max: config.max_bytes,
            });
        }

        Ok(Self(format!(
            "data:{};base64,{}",
            mime,
            BASE64.encode(&upload.bytes)
        )))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_data_url(&self) -> bool {
        self.0.starts_with("data:")
    }
}

impl fmt::Debug for AvatarRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // data URLs can be megabytes long
        if self.is_data_url() {
            write!(f, "AvatarRef(data URL, {} chars)", self.0.len())
        } else {
            write!(f, "AvatarRef({})", self.0)
        }
    }
}

impl fmt::Display for AvatarRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_data_url() {
            let header = self.0.split(',').next().unwrap_or("data:");
            write!(f, "{header},… ({} chars)", self.0.len())
        } else {
            f.write_str(&self.0)
        }
    }
}
