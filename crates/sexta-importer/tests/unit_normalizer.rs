use sexta_core::names::Gender;
use sexta_importer::normalize;
use sexta_models::{MaritalStatus, SourceRecord};

fn record() -> SourceRecord {
    SourceRecord {
        rut: "8726935-3".into(),
        full_name: "Maria Soto".into(),
        victor_number: "V-102".into(),
        registro_compania: String::new(),
        rank: "Voluntario".into(),
        marital_status: "Casada".into(),
        email: String::new(),
        role: "member".into(),
        gender: None,
    }
}

#[test]
fn test_worked_example_row() {
    let user = normalize(&record());

    assert_eq!(user.password, "872693532026");
    assert_eq!(user.gender, Gender::Female);
    assert_eq!(user.marital_status, MaritalStatus::Married);
    assert_eq!(user.email, "8726935-3@sexta.cl");
    assert!(!user.email_from_csv);
}

#[test]
fn test_source_email_is_kept() {
    let mut r = record();
    r.email = "maria@example.com".into();

    let user = normalize(&r);

    assert_eq!(user.email, "maria@example.com");
    assert!(user.email_from_csv);
}

#[test]
fn test_whitespace_email_counts_as_missing() {
    let mut r = record();
    r.email = "   ".into();

    let user = normalize(&r);

    assert_eq!(user.email, "8726935-3@sexta.cl");
    assert!(!user.email_from_csv);
}

#[test]
fn test_explicit_gender_override_beats_inference() {
    let mut r = record();
    r.gender = Some("M".into());

    assert_eq!(normalize(&r).gender, Gender::Male);
}

#[test]
fn test_invalid_gender_override_falls_back_to_inference() {
    let mut r = record();
    r.gender = Some("unknown".into());

    assert_eq!(normalize(&r).gender, Gender::Female);
}

#[test]
fn test_blank_registro_compania_becomes_none() {
    let user = normalize(&record());
    assert_eq!(user.registro_compania, None);

    let mut r = record();
    r.registro_compania = "2a".into();
    assert_eq!(normalize(&r).registro_compania.as_deref(), Some("2a"));
}

#[test]
fn test_passthrough_fields() {
    let user = normalize(&record());
    assert_eq!(user.rut, "8726935-3");
    assert_eq!(user.full_name, "Maria Soto");
    assert_eq!(user.victor_number, "V-102");
    assert_eq!(user.rank, "Voluntario");
    assert_eq!(user.role, "member");
}

#[test]
fn test_normalize_is_total_on_empty_fields() {
    let r = SourceRecord {
        rut: String::new(),
        full_name: String::new(),
        victor_number: String::new(),
        registro_compania: String::new(),
        rank: String::new(),
        marital_status: String::new(),
        email: String::new(),
        role: String::new(),
        gender: None,
    };

    let user = normalize(&r);
    assert_eq!(user.gender, Gender::Male);
    assert_eq!(user.marital_status, MaritalStatus::Single);
    assert_eq!(user.password, "2026");
    assert_eq!(user.email, "@sexta.cl");
}
