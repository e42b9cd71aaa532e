//! SQLite mapping and finders for `professeurs`.
//!
//! # Invariants
//! - `date_embauche` is stored as ISO `YYYY-MM-DD` text, so lexical range
//!   comparison equals calendar comparison.
//! - Reads left-join `specialites` to fill the embedded specialty.

use crate::model::professeur::Professeur;
use crate::model::specialite::Specialite;
use crate::model::EntityId;
use crate::repo::sqlite::{SqliteEntity, SqliteRepository};
use crate::repo::{ProfesseurRepository, RepoError, RepoResult};
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{params, Row};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// SQLite-backed professor repository.
pub type SqliteProfesseurRepository<'conn> = SqliteRepository<'conn, Professeur>;

impl SqliteEntity for Professeur {
    const TABLE: &'static str = "professeurs";
    const WRITE_COLUMNS: &'static [&'static str] = &[
        "nom",
        "prenom",
        "telephone",
        "email",
        "date_embauche",
        "specialite_id",
    ];
    const SELECT_SQL: &'static str = "SELECT
    p.id AS id,
    p.nom AS nom,
    p.prenom AS prenom,
    p.telephone AS telephone,
    p.email AS email,
    p.date_embauche AS date_embauche,
    p.specialite_id AS specialite_id,
    s.code AS specialite_code,
    s.libelle AS specialite_libelle
FROM professeurs p
LEFT JOIN specialites s ON s.id = p.specialite_id";
    const ID_COLUMN: &'static str = "p.id";

    fn write_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.nom.clone()),
            Value::Text(self.prenom.clone()),
            Value::Text(self.telephone.clone()),
            Value::Text(self.email.clone()),
            Value::Text(format_date(self.date_embauche)),
            Value::Integer(i64::from(self.specialite_id())),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        let date_text: String = row.get("date_embauche")?;
        let date_embauche = NaiveDate::parse_from_str(&date_text, DATE_FORMAT).map_err(|_| {
            RepoError::InvalidData(format!(
                "invalid date `{date_text}` in professeurs.date_embauche"
            ))
        })?;

        let specialite_id: EntityId = row.get("specialite_id")?;
        let specialite = Specialite {
            id: specialite_id,
            code: row
                .get::<_, Option<String>>("specialite_code")?
                .unwrap_or_default(),
            libelle: row
                .get::<_, Option<String>>("specialite_libelle")?
                .unwrap_or_default(),
        };

        Ok(Self {
            id: row.get("id")?,
            nom: row.get("nom")?,
            prenom: row.get("prenom")?,
            telephone: row.get("telephone")?,
            email: row.get("email")?,
            date_embauche,
            specialite: Some(specialite),
        })
    }
}

impl ProfesseurRepository for SqliteRepository<'_, Professeur> {
    fn find_by_specialite(&self, specialite: &Specialite) -> RepoResult<Vec<Professeur>> {
        self.query_where(
            "WHERE p.specialite_id = ?1 ORDER BY p.id ASC",
            params![specialite.id],
        )
    }

    fn find_by_date_embauche_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepoResult<Vec<Professeur>> {
        self.query_where(
            "WHERE p.date_embauche BETWEEN ?1 AND ?2 ORDER BY p.id ASC",
            params![format_date(start), format_date(end)],
        )
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
