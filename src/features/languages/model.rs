use crate::domain::{LanguageUpdate, NewLanguage};
use crate::error::ValidationError;
use crate::query::{non_empty, parse_age, ComparatorPolicy, LanguageStatusFilter};
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct NameQuery {
    pub name: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct LanguageStatusParams {
    pub name: Option<String>,
    #[serde(rename = "statusFilter")]
    pub status_filter: Option<String>,
    pub comparator: Option<String>,
    pub age: Option<String>,
}

impl LanguageStatusParams {
    pub fn into_filter(
        self,
        policy: ComparatorPolicy,
    ) -> Result<LanguageStatusFilter, ValidationError> {
        let comparator = policy.resolve(self.comparator.as_deref())?;
        let age = parse_age(self.age.as_deref())?;

        Ok(LanguageStatusFilter {
            name: non_empty(self.name),
            status: non_empty(self.status_filter),
            comparator,
            age,
        })
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct InsertLanguageBody {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Status")]
    pub status: Option<String>,
    #[serde(rename = "FamilyName")]
    pub family_name: Option<String>,
}

impl InsertLanguageBody {
    /// `None` when no name was given.
    pub fn into_new_language(self) -> Option<NewLanguage> {
        Some(NewLanguage {
            name: non_empty(self.name)?,
            status: non_empty(self.status),
            family_name: non_empty(self.family_name),
        })
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLanguageBody {
    pub old_name: Option<String>,
    pub new_status: Option<String>,
    pub new_family: Option<String>,
}

impl UpdateLanguageBody {
    // empty form fields mean "keep the current value"
    pub fn into_update(self) -> Option<LanguageUpdate> {
        Some(LanguageUpdate {
            name: non_empty(self.old_name)?,
            status: non_empty(self.new_status),
            family_name: non_empty(self.new_family),
        })
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeleteLanguageBody {
    pub input_name: Option<String>,
}
