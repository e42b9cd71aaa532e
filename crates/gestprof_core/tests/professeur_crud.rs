use chrono::NaiveDate;
use gestprof_core::db::open_db_in_memory;
use gestprof_core::{
    Dao, Professeur, ProfesseurRepository, ProfesseurService, RepoError, Repository, Specialite,
    SpecialiteService, SqliteProfesseurRepository, SqliteSpecialiteRepository, ValidationError,
};
use rusqlite::Connection;

#[test]
fn create_and_get_roundtrip_fills_specialite_from_join() {
    let conn = open_db_in_memory().unwrap();
    let specialite = seed_specialite(&conn, "CS", "Computer Science");
    let repo = SqliteProfesseurRepository::try_new(&conn).unwrap();

    let submitted = professeur("Doe", "2023-01-01", Specialite::reference(specialite.id));
    let created = repo.save(&submitted).unwrap();
    assert_eq!(created.id, 1);

    let loaded = repo.find_by_id(created.id).unwrap().unwrap();
    assert_eq!(loaded, created);
    assert_eq!(loaded.nom, submitted.nom);
    assert_eq!(loaded.prenom, submitted.prenom);
    assert_eq!(loaded.telephone, submitted.telephone);
    assert_eq!(loaded.email, submitted.email);
    assert_eq!(loaded.date_embauche, submitted.date_embauche);
    assert_eq!(loaded.specialite, Some(specialite));
}

#[test]
fn update_keeps_identifier_and_replaces_fields() {
    let conn = open_db_in_memory().unwrap();
    let cs = seed_specialite(&conn, "CS", "Computer Science");
    let ma = seed_specialite(&conn, "MA", "Mathematics");
    let repo = SqliteProfesseurRepository::try_new(&conn).unwrap();

    let mut stored = repo.save(&professeur("Doe", "2023-01-01", cs)).unwrap();
    stored.email = "new@example.com".to_string();
    stored.specialite = Some(Specialite::reference(ma.id));
    let updated = repo.save(&stored).unwrap();

    assert_eq!(updated.id, stored.id);
    assert_eq!(updated.email, "new@example.com");
    assert_eq!(updated.specialite, Some(ma));
    assert_eq!(repo.find_all().unwrap().len(), 1);
}

#[test]
fn find_by_specialite_matches_on_id_only() {
    let conn = open_db_in_memory().unwrap();
    let cs = seed_specialite(&conn, "CS", "Computer Science");
    let ma = seed_specialite(&conn, "MA", "Mathematics");
    let repo = SqliteProfesseurRepository::try_new(&conn).unwrap();

    let a = repo.save(&professeur("A", "2020-01-01", cs.clone())).unwrap();
    repo.save(&professeur("B", "2020-01-01", ma)).unwrap();
    let c = repo.save(&professeur("C", "2021-01-01", cs.clone())).unwrap();

    let found = repo
        .find_by_specialite(&Specialite::reference(cs.id))
        .unwrap();
    assert_eq!(found, vec![a, c]);

    let none = repo.find_by_specialite(&Specialite::reference(99)).unwrap();
    assert!(none.is_empty());
}

#[test]
fn find_by_date_range_includes_both_bounds() {
    let conn = open_db_in_memory().unwrap();
    let cs = seed_specialite(&conn, "CS", "Computer Science");
    let repo = SqliteProfesseurRepository::try_new(&conn).unwrap();

    repo.save(&professeur("Before", "2019-12-31", cs.clone())).unwrap();
    repo.save(&professeur("Start", "2020-01-01", cs.clone())).unwrap();
    repo.save(&professeur("Middle", "2020-06-15", cs.clone())).unwrap();
    repo.save(&professeur("End", "2020-12-31", cs.clone())).unwrap();
    repo.save(&professeur("After", "2021-01-01", cs)).unwrap();

    let names: Vec<_> = repo
        .find_by_date_embauche_between(date("2020-01-01"), date("2020-12-31"))
        .unwrap()
        .into_iter()
        .map(|item| item.nom)
        .collect();
    assert_eq!(names, vec!["Start", "Middle", "End"]);

    let single_day = repo
        .find_by_date_embauche_between(date("2020-06-15"), date("2020-06-15"))
        .unwrap();
    assert_eq!(single_day.len(), 1);
}

#[test]
fn inverted_date_range_matches_nothing() {
    let conn = open_db_in_memory().unwrap();
    let cs = seed_specialite(&conn, "CS", "Computer Science");
    let repo = SqliteProfesseurRepository::try_new(&conn).unwrap();
    repo.save(&professeur("Doe", "2020-06-15", cs)).unwrap();

    let result = repo
        .find_by_date_embauche_between(date("2020-12-31"), date("2020-01-01"))
        .unwrap();
    assert!(result.is_empty());
}

#[test]
fn missing_specialite_is_a_validation_error() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProfesseurRepository::try_new(&conn).unwrap();

    let mut orphan = professeur("Doe", "2023-01-01", Specialite::reference(1));
    orphan.specialite = None;
    let err = repo.save(&orphan).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::MissingReference {
            field: "specialite",
            ..
        })
    ));
}

#[test]
fn unknown_specialite_id_is_a_store_error() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProfesseurRepository::try_new(&conn).unwrap();

    let err = repo
        .save(&professeur("Doe", "2023-01-01", Specialite::reference(42)))
        .unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));
}

#[test]
fn deleting_referenced_specialite_reports_false_and_keeps_row() {
    let conn = open_db_in_memory().unwrap();
    let cs = seed_specialite(&conn, "CS", "Computer Science");
    let professeurs = ProfesseurService::new(SqliteProfesseurRepository::try_new(&conn).unwrap());
    let specialites = SpecialiteService::new(SqliteSpecialiteRepository::try_new(&conn).unwrap());

    let prof = professeurs
        .create(&professeur("Doe", "2023-01-01", cs.clone()))
        .unwrap();

    assert!(!specialites.delete(&cs));
    assert!(specialites.find_by_id(cs.id).unwrap().is_some());

    assert!(professeurs.delete(&prof));
    assert!(specialites.delete(&cs));
    assert!(specialites.find_by_id(cs.id).unwrap().is_none());
}

#[test]
fn service_finders_delegate_to_repository() {
    let conn = open_db_in_memory().unwrap();
    let cs = seed_specialite(&conn, "CS", "Computer Science");
    let service = ProfesseurService::new(SqliteProfesseurRepository::try_new(&conn).unwrap());

    let created = service
        .create(&professeur("Doe", "2023-01-01", cs.clone()))
        .unwrap();

    assert_eq!(
        service.find_by_specialite(&cs).unwrap(),
        vec![created.clone()]
    );
    assert_eq!(
        service
            .find_by_date_embauche_between(date("2023-01-01"), date("2023-01-01"))
            .unwrap(),
        vec![created]
    );
}

fn seed_specialite(conn: &Connection, code: &str, libelle: &str) -> Specialite {
    SqliteSpecialiteRepository::try_new(conn)
        .unwrap()
        .save(&Specialite::new(code, libelle))
        .unwrap()
}

fn professeur(nom: &str, hired: &str, specialite: Specialite) -> Professeur {
    Professeur::new(
        nom,
        "John",
        "123456789",
        format!("{}@example.com", nom.to_lowercase()),
        date(hired),
        specialite,
    )
}

fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}
