use sexta_core::credentials::{
    FALLBACK_EMAIL_DOMAIN, clean_rut, fallback_email, resolve_email, temp_password,
};

#[test]
fn test_clean_rut_removes_hyphen() {
    assert_eq!(clean_rut("8726935-3"), "87269353");
}

#[test]
fn test_clean_rut_removes_dots_and_hyphen() {
    assert_eq!(clean_rut("8.726.935-3"), "87269353");
}

#[test]
fn test_clean_rut_preserves_check_digit_letter() {
    assert_eq!(clean_rut("12.345.678-K"), "12345678K");
}

#[test]
fn test_clean_rut_leaves_other_characters_alone() {
    assert_eq!(clean_rut("8726935 3"), "8726935 3");
}

#[test]
fn test_temp_password_format() {
    assert_eq!(temp_password("8726935-3"), "872693532026");
}

#[test]
fn test_temp_password_deterministic() {
    assert_eq!(temp_password("8726935-3"), temp_password("8726935-3"));
    assert_eq!(temp_password("8.726.935-3"), temp_password("8726935-3"));
}

#[test]
fn test_temp_password_distinct_for_distinct_ruts() {
    assert_ne!(temp_password("8726935-3"), temp_password("9123456-7"));
}

#[test]
fn test_fallback_email_keeps_separators() {
    assert_eq!(
        fallback_email("8726935-3"),
        format!("8726935-3@{}", FALLBACK_EMAIL_DOMAIN)
    );
}

#[test]
fn test_resolve_email_blank_synthesizes() {
    assert_eq!(resolve_email("8726935-3", ""), "8726935-3@sexta.cl");
    assert_eq!(resolve_email("8726935-3", "   "), "8726935-3@sexta.cl");
}

#[test]
fn test_resolve_email_passes_through_trimmed() {
    assert_eq!(
        resolve_email("8726935-3", "  maria@example.com "),
        "maria@example.com"
    );
}
