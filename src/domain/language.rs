use derive_more::Display;

/// The mutable part of a `Language` row, as read back before an update.
#[derive(Debug, Clone, PartialEq, Eq, Default, sqlx::FromRow)]
pub struct LanguageRecord {
    #[sqlx(rename = "Status")]
    pub status: Option<String>,
    #[sqlx(rename = "FamilyName")]
    pub family_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{}", name)]
pub struct NewLanguage {
    pub name: String,
    pub status: Option<String>,
    pub family_name: Option<String>,
}

/// An update keyed by name. `None` fields keep their stored value.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{}", name)]
pub struct LanguageUpdate {
    pub name: String,
    pub status: Option<String>,
    pub family_name: Option<String>,
}

impl LanguageUpdate {
    /// Fills omitted fields from the stored record.
    pub fn merged_with(&self, current: &LanguageRecord) -> LanguageRecord {
        LanguageRecord {
            status: self.status.clone().or_else(|| current.status.clone()),
            family_name: self
                .family_name
                .clone()
                .or_else(|| current.family_name.clone()),
        }
    }
}
