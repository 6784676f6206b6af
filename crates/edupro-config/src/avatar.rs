//! Avatar upload configuration.
//!
//! # Environment Variables
//!
//! - `AVATAR_MAX_BYTES`: largest accepted image in bytes (default: 2 MiB)
//! - `AVATAR_ALLOWED_TYPES`: comma-separated MIME types
//!   (default: `image/png,image/jpeg,image/gif,image/webp`)

const DEFAULT_MAX_BYTES: usize = 2 * 1024 * 1024;
const DEFAULT_ALLOWED_TYPES: &str = "image/png,image/jpeg,image/gif,image/webp";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvatarConfig {
    pub max_bytes: usize,
    pub allowed_types: Vec<String>,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            allowed_types: split_types(DEFAULT_ALLOWED_TYPES),
        }
    }
}

impl AvatarConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(&|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let allowed_types = lookup("AVATAR_ALLOWED_TYPES")
            .map(|raw| split_types(&raw))
            .filter(|types| !types.is_empty())
            .unwrap_or_else(|| split_types(DEFAULT_ALLOWED_TYPES));

        Self {
            max_bytes: crate::parse_or(lookup, "AVATAR_MAX_BYTES", DEFAULT_MAX_BYTES),
            allowed_types,
        }
    }

    pub fn allows(&self, mime: &str) -> bool {
        self.allowed_types.iter().any(|t| t.eq_ignore_ascii_case(mime))
    }
}

fn split_types(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_ascii_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
