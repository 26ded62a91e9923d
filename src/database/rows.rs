use crate::error::DbError;
use serde_json::Value;
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, TypeInfo, ValueRef};

// sqlite reports the storage class of each value, so decode by that rather
// than by the declared column type
pub(crate) fn row_to_values(row: &SqliteRow) -> Result<Vec<Value>, DbError> {
    (0..row.len()).map(|index| column_value(row, index)).collect()
}

fn column_value(row: &SqliteRow, index: usize) -> Result<Value, DbError> {
    let raw = row
        .try_get_raw(index)
        .map_err(|source| decode_error(row, index, source))?;

    if raw.is_null() {
        return Ok(Value::Null);
    }

    let type_name = raw.type_info().name().to_string();
    let decoded = match type_name.as_str() {
        "INTEGER" | "BOOLEAN" => row.try_get::<i64, _>(index).map(Value::from),
        "REAL" => row.try_get::<f64, _>(index).map(Value::from),
        // blobs are only representable when they hold text
        "BLOB" => row.try_get::<Vec<u8>, _>(index).and_then(|bytes| {
            String::from_utf8(bytes)
                .map(Value::from)
                .map_err(|e| sqlx::Error::Decode(Box::new(e)))
        }),
        _ => row.try_get::<String, _>(index).map(Value::from),
    };

    decoded.map_err(|source| decode_error(row, index, source))
}

fn decode_error(row: &SqliteRow, index: usize, source: sqlx::Error) -> DbError {
    let column = row
        .columns()
        .get(index)
        .map(|col| col.name().to_string())
        .unwrap_or_else(|| index.to_string());
    DbError::Decode { column, source }
}
