use crate::database::pool::{execute_on, fetch_rows_on, Database};
use crate::database::LinguisticsRepository;
use crate::domain::{LanguageRecord, LanguageUpdate, NewLanguage, TabularResult};
use crate::error::DbError;
use crate::query::{self, LanguageStatusFilter, PhonemeProjection};
use async_trait::async_trait;
use sqlx::{Connection, FromRow};

pub struct SqliteRepository {
    db: Database,
}

impl SqliteRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl LinguisticsRepository for SqliteRepository {
    async fn ping(&self) -> Result<(), DbError> {
        self.db.ping().await
    }

    async fn fetch_languages(&self) -> Result<TabularResult, DbError> {
        self.db.fetch_table(&query::languages()).await
    }

    async fn fetch_population_sums(&self) -> Result<TabularResult, DbError> {
        self.db.fetch_table(&query::population_sums()).await
    }

    async fn fetch_ancient_languages(&self) -> Result<TabularResult, DbError> {
        self.db.fetch_table(&query::ancient_languages()).await
    }

    async fn fetch_language_speakers(&self, language: &str) -> Result<TabularResult, DbError> {
        self.db
            .fetch_table(&query::language_speakers(language))
            .await
    }

    async fn fetch_max_speaker_countries(
        &self,
        language: &str,
    ) -> Result<TabularResult, DbError> {
        self.db
            .fetch_table(&query::max_speaker_countries(language))
            .await
    }

    async fn fetch_words_in_all_dialects(
        &self,
        language: &str,
    ) -> Result<TabularResult, DbError> {
        self.db
            .fetch_table(&query::words_in_all_dialects(language))
            .await
    }

    async fn fetch_language_status(
        &self,
        filter: &LanguageStatusFilter,
    ) -> Result<TabularResult, DbError> {
        self.db.fetch_table(&filter.to_query()).await
    }

    async fn fetch_phoneme_options(
        &self,
        projection: &PhonemeProjection,
    ) -> Result<TabularResult, DbError> {
        self.db.fetch_table(&projection.to_query()).await
    }

    async fn get_language(&self, name: &str) -> Result<Option<LanguageRecord>, DbError> {
        let mut conn = self.db.acquire().await?;
        let rows = fetch_rows_on(&mut conn, &query::language_record(name)).await?;

        rows.first()
            .map(|row| LanguageRecord::from_row(row))
            .transpose()
            .map_err(DbError::Statement)
    }

    async fn insert_language(&self, language: &NewLanguage) -> Result<u64, DbError> {
        self.db
            .execute(&query::insert_language(
                &language.name,
                language.status.as_deref(),
                language.family_name.as_deref(),
            ))
            .await
    }

    // read, merge and write under one transaction. IMMEDIATE takes the write
    // lock before the read, so concurrent updates queue on the busy timeout
    // instead of failing on a deferred lock upgrade
    async fn update_language(&self, update: &LanguageUpdate) -> Result<u64, DbError> {
        let mut conn = self.db.acquire().await?;
        let mut tx = conn
            .begin_with("BEGIN IMMEDIATE")
            .await
            .map_err(DbError::Statement)?;

        let rows = fetch_rows_on(&mut tx, &query::language_record(&update.name)).await?;
        let current = match rows.first() {
            Some(row) => LanguageRecord::from_row(row).map_err(DbError::Statement)?,
            None => {
                tx.rollback().await.map_err(DbError::Statement)?;
                return Ok(0);
            }
        };

        let merged = update.merged_with(&current);
        let affected = execute_on(
            &mut tx,
            &query::update_language(
                &update.name,
                merged.status.as_deref(),
                merged.family_name.as_deref(),
            ),
        )
        .await?;

        tx.commit().await.map_err(DbError::Statement)?;
        Ok(affected)
    }

    async fn delete_language(&self, name: &str) -> Result<u64, DbError> {
        self.db.execute(&query::delete_language(name)).await
    }

    async fn reset_demo_table(&self) -> Result<(), DbError> {
        let mut conn = self.db.acquire().await?;

        if let Err(e) = sqlx::query(query::DROP_DEMO_TABLE).execute(&mut *conn).await {
            tracing::debug!(error = %e, "DEMOTABLE might not exist, proceeding to create");
        }

        sqlx::query(query::CREATE_DEMO_TABLE)
            .execute(&mut *conn)
            .await
            .map_err(DbError::Statement)?;

        Ok(())
    }
}
