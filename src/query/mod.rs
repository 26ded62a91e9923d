//! SQL construction. Every statement the server runs is composed here; values
//! always travel as bind parameters, and the only text spliced into a statement
//! comes from the closed enums in [`comparator`] and [`columns`].

use crate::error::ValidationError;

pub mod columns;
pub mod comparator;

pub use self::columns::{PhonemeColumn, PhonemeProjection};
pub use self::comparator::{Comparator, ComparatorPolicy};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Text(String),
    Integer(i64),
    Null,
}

/// A statement ready for execution: SQL text, its binds in order, and the
/// column names when the projection was built dynamically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltQuery {
    pub sql: String,
    pub binds: Vec<BindValue>,
    pub columns: Option<Vec<String>>,
}

impl BuiltQuery {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            binds: Vec::new(),
            columns: None,
        }
    }

    pub fn bind_text(mut self, value: impl Into<String>) -> Self {
        self.binds.push(BindValue::Text(value.into()));
        self
    }

    pub fn bind_integer(mut self, value: i64) -> Self {
        self.binds.push(BindValue::Integer(value));
        self
    }

    pub fn bind_optional_text(mut self, value: Option<&str>) -> Self {
        self.binds.push(match value {
            Some(val) => BindValue::Text(val.to_string()),
            None => BindValue::Null,
        });
        self
    }

    pub fn with_columns(mut self, columns: Vec<String>) -> Self {
        self.columns = Some(columns);
        self
    }
}

/// Filters for the language / writing system age search. Absent filters drop
/// their predicate entirely.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LanguageStatusFilter {
    /// `LIKE` pattern; the caller supplies any wildcards.
    pub name: Option<String>,
    pub status: Option<String>,
    pub comparator: Comparator,
    pub age: Option<i64>,
}

impl LanguageStatusFilter {
    pub fn to_query(&self) -> BuiltQuery {
        let mut predicates: Vec<String> = Vec::new();
        let mut query = BuiltQuery::new("");

        if let Some(name) = &self.name {
            predicates.push("l.Name LIKE ?".to_string());
            query = query.bind_text(name.clone());
        }
        if let Some(status) = &self.status {
            predicates.push("l.Status = ?".to_string());
            query = query.bind_text(status.clone());
        }
        if let Some(age) = self.age {
            predicates.push(format!("ws.Age {} ?", self.comparator));
            query = query.bind_integer(age);
        }

        let mut sql = String::from(
            "SELECT l.Name, l.Status, ws.Name, ws.Age FROM Language l
            JOIN Uses u ON u.LanguageName = l.Name
            JOIN WritingSystem ws ON u.WSName = ws.Name",
        );
        if !predicates.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&predicates.join(" AND "));
        }

        query.sql = sql;
        query
    }
}

/// Empty strings count as "not provided", matching what HTML forms submit.
pub fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|val| !val.trim().is_empty())
}

pub fn parse_age(raw: Option<&str>) -> Result<Option<i64>, ValidationError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(val) => val
            .parse::<i64>()
            .map(Some)
            .map_err(|_| ValidationError::InvalidAge(val.to_string())),
    }
}

pub fn languages() -> BuiltQuery {
    BuiltQuery::new("SELECT Name, Status, FamilyName FROM Language ORDER BY Name")
}

pub fn language_record(name: &str) -> BuiltQuery {
    BuiltQuery::new("SELECT Status, FamilyName FROM Language WHERE Name = ?").bind_text(name)
}

pub fn population_sums() -> BuiltQuery {
    BuiltQuery::new(
        "SELECT Language.Name, SUM(Dialect.Population)
        FROM Language, Dialect
        WHERE Dialect.LanguageName = Language.Name
        GROUP BY Language.Name",
    )
}

/// Languages whose oldest writing system is over a thousand years old,
/// paired with that writing system.
pub fn ancient_languages() -> BuiltQuery {
    BuiltQuery::new(
        "SELECT max_vals.Name, max_vals.Age, ws.Name AS WritingSystemName
        FROM (
            SELECT Language.Name AS Name, MAX(WritingSystem.Age) AS Age
            FROM Language
            JOIN Uses ON Language.Name = Uses.LanguageName
            JOIN WritingSystem ON WritingSystem.Name = Uses.WSName
            GROUP BY Language.Name
            HAVING MAX(WritingSystem.Age) > 1000
        ) max_vals
        JOIN Uses ON Uses.LanguageName = max_vals.Name
        JOIN WritingSystem ws ON ws.Name = Uses.WSName
        WHERE ws.Age = max_vals.Age
        ORDER BY max_vals.Name",
    )
}

pub fn language_speakers(language: &str) -> BuiltQuery {
    BuiltQuery::new(
        "SELECT Speaker.Name, Dialect.Name
        FROM Speaker, Dialect, SpokenBy
        WHERE Dialect.LanguageName = ?
        AND SpokenBy.SpeakerID = Speaker.ID
        AND Dialect.Name = SpokenBy.DialectName
        AND SpokenBy.LanguageName = Dialect.LanguageName",
    )
    .bind_text(language)
}

/// Countries tied for the most speakers of a language, with the count.
pub fn max_speaker_countries(language: &str) -> BuiltQuery {
    BuiltQuery::new(
        "SELECT IsFrom.CountryName, COUNT(*) AS SpeakerCount
        FROM Dialect
        INNER JOIN SpokenBy ON SpokenBy.LanguageName = Dialect.LanguageName
            AND SpokenBy.DialectName = Dialect.Name
        INNER JOIN Speaker ON SpokenBy.SpeakerID = Speaker.ID
        INNER JOIN IsFrom ON IsFrom.SpeakerID = Speaker.ID
        WHERE Dialect.LanguageName = ?1
        GROUP BY IsFrom.CountryName
        HAVING COUNT(*) = (
            SELECT MAX(SpeakerCount)
            FROM (
                SELECT COUNT(*) AS SpeakerCount
                FROM Dialect
                INNER JOIN SpokenBy ON SpokenBy.LanguageName = Dialect.LanguageName
                    AND SpokenBy.DialectName = Dialect.Name
                INNER JOIN Speaker ON SpokenBy.SpeakerID = Speaker.ID
                INNER JOIN IsFrom ON IsFrom.SpeakerID = Speaker.ID
                WHERE Dialect.LanguageName = ?1
                GROUP BY IsFrom.CountryName
            ) counts
        )
        ORDER BY IsFrom.CountryName",
    )
    .bind_text(language)
}

/// Relational division: words for which no dialect of the language lacks a
/// definition.
pub fn words_in_all_dialects(language: &str) -> BuiltQuery {
    BuiltQuery::new(
        "SELECT Word.WrittenForm, Word.Meaning
        FROM Word
        WHERE NOT EXISTS (
            SELECT Dialect.Name, Dialect.LanguageName
            FROM Dialect
            WHERE Dialect.LanguageName = ?1
            EXCEPT
            SELECT Defines.DialectName, Defines.LanguageName
            FROM Defines
            WHERE Defines.WordID = Word.ID
            AND Defines.LanguageName = ?1
        )
        ORDER BY Word.WrittenForm",
    )
    .bind_text(language)
}

pub fn insert_language(name: &str, status: Option<&str>, family: Option<&str>) -> BuiltQuery {
    BuiltQuery::new("INSERT INTO Language (Name, Status, FamilyName) VALUES (?, ?, ?)")
        .bind_text(name)
        .bind_optional_text(status)
        .bind_optional_text(family)
}

pub fn update_language(name: &str, status: Option<&str>, family: Option<&str>) -> BuiltQuery {
    BuiltQuery::new("UPDATE Language SET Status = ?, FamilyName = ? WHERE Name = ?")
        .bind_optional_text(status)
        .bind_optional_text(family)
        .bind_text(name)
}

pub fn delete_language(name: &str) -> BuiltQuery {
    BuiltQuery::new("DELETE FROM Language WHERE Name = ?").bind_text(name)
}

pub const DROP_DEMO_TABLE: &str = "DROP TABLE DEMOTABLE";

pub const CREATE_DEMO_TABLE: &str = "CREATE TABLE DEMOTABLE (
    id INTEGER PRIMARY KEY,
    name VARCHAR(20)
)";
