//! Credential derivation for imported users.
//!
//! Temporary passwords are a pure function of the RUT, so operators can
//! restate the derivation rule out-of-band instead of mailing individual
//! credentials. Users are expected to change the password on first login.

/// Fixed suffix appended to the cleaned RUT to form the temporary password.
pub const PASSWORD_SUFFIX: &str = "2026";

/// Domain used to synthesize an email address when the source row has none.
pub const FALLBACK_EMAIL_DOMAIN: &str = "sexta.cl";

/// Removes separator characters (`-` and `.`) from a RUT.
///
/// All other characters are preserved, including a `K` check digit.
pub fn clean_rut(rut: &str) -> String {
    rut.chars().filter(|c| *c != '-' && *c != '.').collect()
}

/// Derives the temporary password for a RUT: cleaned RUT + [`PASSWORD_SUFFIX`].
///
/// Deterministic: the same RUT always yields the same password.
pub fn temp_password(rut: &str) -> String {
    format!("{}{}", clean_rut(rut), PASSWORD_SUFFIX)
}

/// Synthesizes a login email from the RUT and the fixed domain.
///
/// The RUT keeps its original separators here, matching the addresses that
/// already exist under the default domain.
pub fn fallback_email(rut: &str) -> String {
    format!("{}@{}", rut, FALLBACK_EMAIL_DOMAIN)
}

/// Resolves the login email for a row: the source email when present and
/// non-blank (trimmed), otherwise a synthesized [`fallback_email`].
pub fn resolve_email(rut: &str, source_email: &str) -> String {
    let trimmed = source_email.trim();
    if trimmed.is_empty() {
        fallback_email(rut)
    } else {
        trimmed.to_string()
    }
}
