//! # Sexta Supabase
//!
//! Thin client for the two Supabase surfaces the importer touches:
//! the GoTrue Admin API (auth account create/delete) and PostgREST
//! (profile row insert). Authenticates with the service-role key; the
//! anon key cannot create users.

pub mod admin;
pub mod config;

pub use admin::{SupabaseAdminClient, SupabaseError};
pub use config::SupabaseConfig;
