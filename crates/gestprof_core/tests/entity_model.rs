use chrono::NaiveDate;
use gestprof_core::{Entity, Professeur, Specialite, ValidationError};
use serde_json::json;

#[test]
fn professeur_json_uses_camel_case_and_iso_dates() {
    let mut professeur = Professeur::new(
        "Doe",
        "John",
        "123456789",
        "john.doe@example.com",
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        Specialite::new("CS", "Computer Science"),
    );
    professeur.set_id(3);

    let value = serde_json::to_value(&professeur).unwrap();
    assert_eq!(
        value,
        json!({
            "id": 3,
            "nom": "Doe",
            "prenom": "John",
            "telephone": "123456789",
            "email": "john.doe@example.com",
            "dateEmbauche": "2023-01-01",
            "specialite": {"id": 0, "code": "CS", "libelle": "Computer Science"}
        })
    );
}

#[test]
fn professeur_body_without_id_deserializes_with_reference_specialite() {
    let body = json!({
        "nom": "Doe",
        "prenom": "John",
        "email": "john.doe@example.com",
        "telephone": "123456789",
        "dateEmbauche": "2023-01-01",
        "specialite": {"id": 1}
    });

    let parsed: Professeur = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.id(), 0);
    assert_eq!(parsed.specialite_id(), 1);
    assert!(parsed.validate().is_ok());
}

#[test]
fn professeur_validation_reports_first_blank_field() {
    let professeur = Professeur::new(
        "Doe",
        " ",
        "123456789",
        "john.doe@example.com",
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        Specialite::reference(1),
    );

    assert_eq!(
        professeur.validate(),
        Err(ValidationError::BlankField {
            entity: "Professeur",
            field: "prenom"
        })
    );
}

#[test]
fn unassigned_specialite_reference_fails_validation() {
    let professeur = Professeur::new(
        "Doe",
        "John",
        "123456789",
        "john.doe@example.com",
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        Specialite::reference(0),
    );

    assert!(matches!(
        professeur.validate(),
        Err(ValidationError::MissingReference { .. })
    ));
}
