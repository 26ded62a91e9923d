use crate::domain::{LanguageRecord, LanguageUpdate, NewLanguage, TabularResult};
use crate::error::DbError;
use crate::query::{LanguageStatusFilter, PhonemeProjection};
use async_trait::async_trait;

pub mod pool;
mod rows;
pub mod sqlite;

pub use self::pool::Database;

// a repository is shared between request tasks, sqlx::Pool is thread safe
// Ok(empty) means nothing matched, Err means the operation itself failed
#[async_trait]
pub trait LinguisticsRepository: Send + Sync {
    async fn ping(&self) -> Result<(), DbError>;

    // read operations
    async fn fetch_languages(&self) -> Result<TabularResult, DbError>;
    async fn fetch_population_sums(&self) -> Result<TabularResult, DbError>;
    async fn fetch_ancient_languages(&self) -> Result<TabularResult, DbError>;
    async fn fetch_language_speakers(&self, language: &str) -> Result<TabularResult, DbError>;
    async fn fetch_max_speaker_countries(&self, language: &str)
        -> Result<TabularResult, DbError>;
    async fn fetch_words_in_all_dialects(&self, language: &str)
        -> Result<TabularResult, DbError>;
    async fn fetch_language_status(
        &self,
        filter: &LanguageStatusFilter,
    ) -> Result<TabularResult, DbError>;
    async fn fetch_phoneme_options(
        &self,
        projection: &PhonemeProjection,
    ) -> Result<TabularResult, DbError>;
    async fn get_language(&self, name: &str) -> Result<Option<LanguageRecord>, DbError>;

    // write operations, each returns the number of affected rows
    async fn insert_language(&self, language: &NewLanguage) -> Result<u64, DbError>;
    async fn update_language(&self, update: &LanguageUpdate) -> Result<u64, DbError>;
    async fn delete_language(&self, name: &str) -> Result<u64, DbError>;
    async fn reset_demo_table(&self) -> Result<(), DbError>;
}
