//! Repository for the `characters` table.

use sqlx::{Sqlite, Transaction};

use crate::models::character::{Character, CreateCharacter};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, jap_name, rom_name, img_url";

/// Provides staging, query, and reset operations for characters.
pub struct CharacterRepo;

/// Pending characters buffered in an open transaction.
///
/// Rows created through a batch stay invisible to other queries until
/// [`CharacterBatch::commit`]. Dropping the batch rolls everything back.
pub struct CharacterBatch {
    tx: Transaction<'static, Sqlite>,
    staged: usize,
}

impl CharacterBatch {
    /// Stage one character in the open transaction.
    pub async fn create(&mut self, input: &CreateCharacter) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO characters (name, jap_name, rom_name, img_url)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&input.name)
        .bind(&input.jap_name)
        .bind(&input.rom_name)
        .bind(&input.img_url)
        .execute(&mut *self.tx)
        .await?;
        self.staged += 1;
        Ok(())
    }

    /// Number of characters staged so far.
    pub fn staged(&self) -> usize {
        self.staged
    }

    /// Persist every staged character, returning how many were committed.
    pub async fn commit(self) -> Result<usize, sqlx::Error> {
        self.tx.commit().await?;
        Ok(self.staged)
    }
}

impl CharacterRepo {
    /// Open a transaction for staging a batch of new characters.
    pub async fn begin(pool: &DbPool) -> Result<CharacterBatch, sqlx::Error> {
        let tx = pool.begin().await?;
        Ok(CharacterBatch { tx, staged: 0 })
    }

    /// Stage and commit `inputs` as a single transaction.
    pub async fn create_many(
        pool: &DbPool,
        inputs: &[CreateCharacter],
    ) -> Result<usize, sqlx::Error> {
        let mut batch = Self::begin(pool).await?;
        for input in inputs {
            batch.create(input).await?;
        }
        batch.commit().await
    }

    /// List every stored character, ordered by id ascending.
    pub async fn list_all(pool: &DbPool) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters ORDER BY id ASC");
        sqlx::query_as::<_, Character>(&query).fetch_all(pool).await
    }

    /// Find up to `limit` characters whose `name`, `jap_name`, or `rom_name`
    /// contains `text`.
    ///
    /// Matching is case-sensitive and literal: `instr` is used rather than
    /// `LIKE`, so `%` and `_` carry no special meaning. An empty `text`
    /// matches every row.
    pub async fn find_by_substring(
        pool: &DbPool,
        text: &str,
        limit: i64,
    ) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM characters
             WHERE instr(name, ?1) > 0
                OR instr(jap_name, ?1) > 0
                OR instr(rom_name, ?1) > 0
             ORDER BY id ASC
             LIMIT ?2"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(text)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Count stored characters.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM characters")
            .fetch_one(pool)
            .await
    }

    /// Delete every character. Returns the number of rows removed.
    ///
    /// The id sequence is left in place, so ids handed out after a reset
    /// never collide with ids handed out before it.
    pub async fn reset(pool: &DbPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM characters").execute(pool).await?;
        tracing::info!(removed = result.rows_affected(), "Character store reset");
        Ok(result.rows_affected())
    }
}
