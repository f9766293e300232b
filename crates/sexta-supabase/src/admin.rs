//! HTTP client for the Supabase Admin API and PostgREST.

use async_trait::async_trait;
use serde::Deserialize;
use sexta_importer::provision::{IdentityProvider, NewAuthUser, ProfileRow, ProfileStore};

use crate::config::SupabaseConfig;

/// Errors from the Supabase client.
#[derive(Debug, thiserror::Error)]
pub enum SupabaseError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Supabase returned a non-2xx status code.
    #[error("Supabase API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Auth user object returned by the Admin API; only the id is used.
#[derive(Debug, Deserialize)]
struct CreatedAuthUser {
    id: String,
}

/// Client for a single Supabase project, authenticated with the
/// service-role key.
pub struct SupabaseAdminClient {
    client: reqwest::Client,
    config: SupabaseConfig,
}

impl SupabaseAdminClient {
    pub fn new(config: SupabaseConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Override the profile table, e.g. from a CLI flag.
    pub fn with_users_table(mut self, table: impl Into<String>) -> Self {
        self.config.users_table = table.into();
        self
    }

    /// Create an auth account via `POST /auth/v1/admin/users`.
    ///
    /// Returns the GoTrue-issued user id.
    pub async fn create_auth_user(&self, user: &NewAuthUser) -> Result<String, SupabaseError> {
        let response = self
            .client
            .post(format!("{}/auth/v1/admin/users", self.config.url))
            .header("apikey", &self.config.service_key)
            .bearer_auth(&self.config.service_key)
            .json(user)
            .send()
            .await?;

        let created: CreatedAuthUser = Self::parse_response(response).await?;
        Ok(created.id)
    }

    /// Delete an auth account via `DELETE /auth/v1/admin/users/{id}`.
    pub async fn delete_auth_user(&self, id: &str) -> Result<(), SupabaseError> {
        let response = self
            .client
            .delete(format!("{}/auth/v1/admin/users/{}", self.config.url, id))
            .header("apikey", &self.config.service_key)
            .bearer_auth(&self.config.service_key)
            .send()
            .await?;

        Self::check_status(response).await
    }

    /// Insert a profile row via `POST /rest/v1/{table}`.
    pub async fn insert_user_row(&self, row: &ProfileRow) -> Result<(), SupabaseError> {
        let response = self
            .client
            .post(format!(
                "{}/rest/v1/{}",
                self.config.url, self.config.users_table
            ))
            .header("apikey", &self.config.service_key)
            .bearer_auth(&self.config.service_key)
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await?;

        Self::check_status(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code, or capture the
    /// status and body into a [`SupabaseError::Api`].
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, SupabaseError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(SupabaseError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, SupabaseError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), SupabaseError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[async_trait]
impl IdentityProvider for SupabaseAdminClient {
    async fn create_user(&self, user: &NewAuthUser) -> anyhow::Result<String> {
        Ok(self.create_auth_user(user).await?)
    }

    async fn delete_user(&self, id: &str) -> anyhow::Result<()> {
        Ok(self.delete_auth_user(id).await?)
    }
}

#[async_trait]
impl ProfileStore for SupabaseAdminClient {
    async fn insert_profile(&self, row: &ProfileRow) -> anyhow::Result<()> {
        Ok(self.insert_user_row(row).await?)
    }
}
