pub mod language;
pub mod table;

pub use self::language::{LanguageRecord, LanguageUpdate, NewLanguage};
pub use self::table::{ColumnMeta, TabularResult};
