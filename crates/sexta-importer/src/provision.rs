//! Account provisioning with best-effort rollback.
//!
//! Two sequential external calls per user: create the authentication
//! account, then insert the profile row keyed by the new account's id.
//! When the insert fails, one compensating delete of the auth account is
//! attempted; its own failure is logged and swallowed, never escalated.
//!
//! The external services are capability traits so the pipeline can be
//! tested against in-memory fakes. Remote errors are opaque
//! ([`anyhow::Error`]): the pipeline only records their message, it never
//! inspects them.

use async_trait::async_trait;
use serde::Serialize;
use sexta_core::names::Gender;
use sexta_models::{FailureStage, ImportOutcome, MaritalStatus, NormalizedUser};

/// Metadata attached to the authentication account.
#[derive(Debug, Clone, Serialize)]
pub struct AuthMetadata {
    pub rut: String,
    pub full_name: String,
}

/// Request payload for creating an authentication account.
///
/// `email_confirm` is forced true by the pipeline: imported users get no
/// email verification flow.
#[derive(Debug, Clone, Serialize)]
pub struct NewAuthUser {
    pub email: String,
    pub password: String,
    pub email_confirm: bool,
    #[serde(rename = "user_metadata")]
    pub metadata: AuthMetadata,
}

/// Profile row inserted into the user table, keyed by the auth account id.
///
/// `email` is only populated when the source file supplied one; the
/// synthesized fallback address is used for authentication but not
/// persisted here.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileRow {
    pub id: String,
    pub rut: String,
    pub victor_number: String,
    pub registro_compania: Option<String>,
    pub full_name: String,
    pub gender: Gender,
    pub marital_status: MaritalStatus,
    pub rank: String,
    pub role: String,
    pub email: Option<String>,
}

/// External system of record for authentication credentials.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Creates an account and returns the provider-issued user id.
    async fn create_user(&self, user: &NewAuthUser) -> anyhow::Result<String>;

    /// Deletes an account by provider-issued id.
    async fn delete_user(&self, id: &str) -> anyhow::Result<()>;
}

/// External tabular store holding non-authentication user attributes.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn insert_profile(&self, row: &ProfileRow) -> anyhow::Result<()>;
}

/// Runs the create-then-insert sequence for one user.
///
/// Not idempotent: provisioning the same RUT twice creates conflicting
/// accounts unless the identity provider rejects the duplicate email.
pub struct Provisioner<'a> {
    identity: &'a dyn IdentityProvider,
    profiles: &'a dyn ProfileStore,
}

impl<'a> Provisioner<'a> {
    pub fn new(identity: &'a dyn IdentityProvider, profiles: &'a dyn ProfileStore) -> Self {
        Self { identity, profiles }
    }

    /// Provisions one normalized user and reports the outcome.
    ///
    /// Blocks on the external calls; errors never propagate out of here,
    /// they are folded into the returned [`ImportOutcome`] so the batch
    /// continues with the next record.
    pub async fn provision(&self, row: usize, user: &NormalizedUser) -> ImportOutcome {
        let request = NewAuthUser {
            email: user.email.clone(),
            password: user.password.clone(),
            email_confirm: true,
            metadata: AuthMetadata {
                rut: user.rut.clone(),
                full_name: user.full_name.clone(),
            },
        };

        let user_id = match self.identity.create_user(&request).await {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(row, rut = %user.rut, error = %e, "auth account creation failed");
                return ImportOutcome::failed(
                    row,
                    &user.rut,
                    &user.full_name,
                    Some(FailureStage::AccountCreation),
                    e.to_string(),
                );
            }
        };
        tracing::debug!(row, rut = %user.rut, user_id = %user_id, "auth account created");

        let profile = ProfileRow {
            id: user_id.clone(),
            rut: user.rut.clone(),
            victor_number: user.victor_number.clone(),
            registro_compania: user.registro_compania.clone(),
            full_name: user.full_name.clone(),
            gender: user.gender,
            marital_status: user.marital_status,
            rank: user.rank.clone(),
            role: user.role.clone(),
            email: if user.email_from_csv {
                Some(user.email.clone())
            } else {
                None
            },
        };

        if let Err(e) = self.profiles.insert_profile(&profile).await {
            tracing::warn!(row, rut = %user.rut, error = %e, "profile insert failed, rolling back auth account");
            if let Err(delete_err) = self.identity.delete_user(&user_id).await {
                // The auth account is now orphaned with no profile row;
                // nothing reconciles it automatically.
                tracing::error!(
                    row,
                    rut = %user.rut,
                    user_id = %user_id,
                    error = %delete_err,
                    "rollback delete failed, auth account orphaned"
                );
            }
            return ImportOutcome::failed(
                row,
                &user.rut,
                &user.full_name,
                Some(FailureStage::ProfileInsert),
                e.to_string(),
            )
            .with_rollback();
        }

        ImportOutcome::created(row, &user.rut, &user.full_name)
    }
}
