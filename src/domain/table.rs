use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ColumnMeta {
    pub name: String,
}

/// Rows as positional values. Column names are only known (and only
/// serialized) when the projection was built dynamically.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabularResult {
    pub columns: Option<Vec<ColumnMeta>>,
    pub rows: Vec<Vec<Value>>,
}

impl TabularResult {
    pub fn from_rows(rows: Vec<Vec<Value>>) -> Self {
        Self {
            columns: None,
            rows,
        }
    }

    pub fn with_column_names(mut self, names: Vec<String>) -> Self {
        self.columns = Some(names.into_iter().map(|name| ColumnMeta { name }).collect());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

// plain results go out as a bare row array; described results as {metaData, rows}
impl Serialize for TabularResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.columns {
            None => self.rows.serialize(serializer),
            Some(columns) => {
                let mut state = serializer.serialize_struct("TabularResult", 2)?;
                state.serialize_field("metaData", columns)?;
                state.serialize_field("rows", &self.rows)?;
                state.end()
            }
        }
    }
}
