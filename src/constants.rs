use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Fallback card image for projects created without one.
pub const DEFAULT_PROJECT_IMAGE: &str =
    "https://images.unsplash.com/photo-1556075798-4825dfaaf498?w=800&auto=format&fit=crop&q=60";

/// Description used when the repository metadata has none and the admin supplied none.
pub const NO_DESCRIPTION_FALLBACK: &str = "No description available";

/// Tech stack entry used when the repository reports no primary language.
pub const UNKNOWN_LANGUAGE_FALLBACK: &str = "Unknown";
