//! Supabase connection configuration.

use std::env;

use thiserror::Error;

/// A required environment variable is missing or empty.
#[derive(Debug, Error)]
#[error("environment variable {0} must be set")]
pub struct MissingEnv(pub &'static str);

/// Supabase connection settings loaded from environment variables.
///
/// # Environment Variables
///
/// - `SUPABASE_URL`: project URL, e.g. `https://xxxxx.supabase.co` (required)
/// - `SUPABASE_SERVICE_KEY`: service-role key, not the anon key (required)
/// - `SUPABASE_USERS_TABLE`: profile table name (default: `users`)
#[derive(Clone, Debug)]
pub struct SupabaseConfig {
    /// Project base URL without a trailing slash.
    pub url: String,

    /// Service-role key, sent as both `apikey` and bearer token.
    pub service_key: String,

    /// Table holding the user profile rows.
    pub users_table: String,
}

impl SupabaseConfig {
    /// Load configuration from environment variables.
    ///
    /// Fails when the URL or service key is unset or blank, so a
    /// misconfigured run stops before touching the CSV.
    pub fn from_env() -> Result<Self, MissingEnv> {
        Ok(Self::new(
            required("SUPABASE_URL")?,
            required("SUPABASE_SERVICE_KEY")?,
            env::var("SUPABASE_USERS_TABLE").unwrap_or_else(|_| "users".into()),
        ))
    }

    pub fn new(
        url: impl Into<String>,
        service_key: impl Into<String>,
        users_table: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into().trim_end_matches('/').to_string(),
            service_key: service_key.into(),
            users_table: users_table.into(),
        }
    }
}

fn required(name: &'static str) -> Result<String, MissingEnv> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(MissingEnv(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = SupabaseConfig::new("https://x.supabase.co/", "key", "users");
        assert_eq!(config.url, "https://x.supabase.co");
    }

    #[test]
    fn missing_env_message_names_the_variable() {
        let err = MissingEnv("SUPABASE_URL");
        assert_eq!(
            err.to_string(),
            "environment variable SUPABASE_URL must be set"
        );
    }
}
