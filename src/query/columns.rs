use crate::error::ValidationError;
use crate::query::BuiltQuery;
use derive_more::Display;

const PHONEME_JOINS: &str = "FROM Phoneme
    LEFT JOIN Vowel ON Vowel.IPANumber = Phoneme.IPANumber
    LEFT JOIN Consonant ON Consonant.IPANumber = Phoneme.IPANumber
    LEFT JOIN PlaceInfo ON Consonant.Place = PlaceInfo.Place";

/// Every column the phoneme view can project. `Display` gives the upper-case
/// identifier clients send and receive back as column metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum PhonemeColumn {
    #[display("IPANUMBER")]
    IpaNumber,
    #[display("UNICODE")]
    Unicode,
    #[display("HEIGHT")]
    Height,
    #[display("BACKNESS")]
    Backness,
    #[display("ROUNDED")]
    Rounded,
    #[display("VOICED")]
    Voiced,
    #[display("PLACE")]
    Place,
    #[display("MANNER")]
    Manner,
    #[display("CORONAL")]
    Coronal,
}

impl PhonemeColumn {
    pub const ALL: [PhonemeColumn; 9] = [
        PhonemeColumn::IpaNumber,
        PhonemeColumn::Unicode,
        PhonemeColumn::Height,
        PhonemeColumn::Backness,
        PhonemeColumn::Rounded,
        PhonemeColumn::Voiced,
        PhonemeColumn::Place,
        PhonemeColumn::Manner,
        PhonemeColumn::Coronal,
    ];

    // qualified, since PLACE exists in both Consonant and PlaceInfo
    fn source(&self) -> &'static str {
        match self {
            PhonemeColumn::IpaNumber => "Phoneme.IPANumber",
            PhonemeColumn::Unicode => "Phoneme.Unicode",
            PhonemeColumn::Height => "Vowel.Height",
            PhonemeColumn::Backness => "Vowel.Backness",
            PhonemeColumn::Rounded => "Vowel.Rounded",
            PhonemeColumn::Voiced => "Consonant.Voiced",
            PhonemeColumn::Place => "Consonant.Place",
            PhonemeColumn::Manner => "Consonant.Manner",
            PhonemeColumn::Coronal => "PlaceInfo.Coronal",
        }
    }

    /// Case-insensitive lookup against the known vocabulary.
    pub fn from_name(raw: &str) -> Result<Self, ValidationError> {
        let normalized = raw.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|col| col.to_string() == normalized)
            .ok_or_else(|| ValidationError::UnknownColumn(raw.trim().to_string()))
    }
}

/// A validated `SELECT` list for the phoneme view. `IPANUMBER` always leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonemeProjection {
    columns: Vec<PhonemeColumn>,
}

impl Default for PhonemeProjection {
    fn default() -> Self {
        Self {
            columns: PhonemeColumn::ALL.to_vec(),
        }
    }
}

impl PhonemeProjection {
    /// Builds a projection from client-selected option names. Each item may
    /// itself be a comma separated list. No options selects every column;
    /// any unknown name fails the whole projection.
    pub fn from_options<I, S>(options: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut columns = vec![PhonemeColumn::IpaNumber];
        let mut requested_any = false;

        for option in options {
            for raw in option.as_ref().split(',') {
                if raw.trim().is_empty() {
                    continue;
                }
                requested_any = true;

                let column = PhonemeColumn::from_name(raw)?;
                if !columns.contains(&column) {
                    columns.push(column);
                }
            }
        }

        if !requested_any {
            return Ok(Self::default());
        }

        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[PhonemeColumn] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(ToString::to_string).collect()
    }

    pub fn to_query(&self) -> BuiltQuery {
        let select_list = self
            .columns
            .iter()
            .map(|c| format!("{} AS {}", c.source(), c))
            .collect::<Vec<_>>()
            .join(", ");

        BuiltQuery::new(format!("SELECT {} {}", select_list, PHONEME_JOINS))
            .with_columns(self.column_names())
    }
}
