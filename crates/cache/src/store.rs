//! SQLite-backed insight store.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use sqlx::Row;
use tokio::sync::Mutex;

use crate::ttl::INSIGHT_TTL_MS;
use crate::value::{CacheEntry, CachedValue};

/// Persistent key-value cache for generated insights.
///
/// Values are JSON-encoded `{data, timestamp}` entries under string keys
/// prefixed `ai_cache_`. Reads and writes are per-key atomic at the SQLite
/// level; there are no cross-key transactions, and concurrent writers for
/// the same fingerprint simply last-write-win.
#[derive(Debug, Clone)]
pub struct InsightCache {
    /// Lazily initialized shared pool; first use creates the database.
    pool: Arc<Mutex<Option<SqlitePool>>>,
    db_path: PathBuf,
    ttl_ms: i64,
}

impl InsightCache {
    /// Open a cache at `db_path` (created on first use).
    pub fn open(db_path: impl Into<PathBuf>) -> Self {
        Self {
            pool: Arc::new(Mutex::new(None)),
            db_path: db_path.into(),
            ttl_ms: INSIGHT_TTL_MS,
        }
    }

    /// Override the entry TTL (milliseconds).
    pub fn with_ttl_ms(mut self, ttl_ms: i64) -> Self {
        self.ttl_ms = ttl_ms;
        self
    }

    /// Read a cached value.
    ///
    /// Absent, malformed, and expired entries all read as `None`; the latter
    /// two are deleted on the way out. Storage failures are logged and
    /// reported as a miss.
    pub async fn get(&self, key: &str) -> Option<CachedValue> {
        match self.read_entry(key).await {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, "insight cache read failed: {err:?}");
                None
            }
        }
    }

    /// Write a value under `key`, stamped with the current time.
    ///
    /// Best-effort: failures (quota, corruption) are logged and swallowed so
    /// the in-flight insight still reaches the caller.
    pub async fn set(&self, key: &str, value: CachedValue) {
        self.set_at(key, value, Utc::now().timestamp_millis()).await;
    }

    pub(crate) async fn set_at(&self, key: &str, value: CachedValue, timestamp: i64) {
        let entry = CacheEntry {
            data: value,
            timestamp,
        };
        if let Err(err) = self.write_entry(key, &entry).await {
            tracing::warn!(key, "insight cache write failed: {err:?}");
        }
    }

    async fn read_entry(&self, key: &str) -> anyhow::Result<Option<CachedValue>> {
        let pool = self.get_pool().await?;
        let storage_key = storage_key(key);

        let row = sqlx::query("SELECT payload FROM ai_cache WHERE storage_key = ?1")
            .bind(&storage_key)
            .fetch_optional(&pool)
            .await
            .context("failed to fetch cache entry")?;

        let Some(row) = row else { return Ok(None) };
        let payload: String = row.try_get("payload")?;

        let entry: CacheEntry = match serde_json::from_str(&payload) {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(key, "evicting malformed cache entry: {err}");
                self.delete(&pool, &storage_key).await;
                return Ok(None);
            }
        };

        if Utc::now().timestamp_millis() - entry.timestamp > self.ttl_ms {
            self.delete(&pool, &storage_key).await;
            return Ok(None);
        }

        Ok(Some(entry.data))
    }

    async fn write_entry(&self, key: &str, entry: &CacheEntry) -> anyhow::Result<()> {
        let pool = self.get_pool().await?;
        let payload = serde_json::to_string(entry).context("failed to serialize cache entry")?;

        sqlx::query(
            r#"
            INSERT INTO ai_cache (storage_key, payload)
            VALUES (?1, ?2)
            ON CONFLICT(storage_key) DO UPDATE SET payload = excluded.payload
            "#,
        )
        .bind(storage_key(key))
        .bind(&payload)
        .execute(&pool)
        .await
        .context("failed to upsert cache entry")?;

        Ok(())
    }

    async fn delete(&self, pool: &SqlitePool, storage_key: &str) {
        if let Err(err) = sqlx::query("DELETE FROM ai_cache WHERE storage_key = ?1")
            .bind(storage_key)
            .execute(pool)
            .await
        {
            tracing::warn!(storage_key, "failed to delete cache entry: {err}");
        }
    }

    /// Get the pool, initializing the database on first use.
    async fn get_pool(&self) -> anyhow::Result<SqlitePool> {
        let mut guard = self.pool.lock().await;
        if let Some(pool) = guard.as_ref() {
            return Ok(pool.clone());
        }

        if let Some(parent) = self.db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create cache directory at {parent:?}"))?;
        }

        let options = SqliteConnectOptions::new()
            .filename(&self.db_path)
            .create_if_missing(true);

        let pool = SqlitePool::connect_with(options)
            .await
            .with_context(|| format!("failed to open insight cache at {:?}", self.db_path))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS ai_cache (
                storage_key TEXT PRIMARY KEY,
                payload     TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .context("failed to create ai_cache table")?;

        *guard = Some(pool.clone());
        Ok(pool)
    }

    #[cfg(test)]
    async fn raw_payload(&self, key: &str) -> Option<String> {
        let pool = self.get_pool().await.ok()?;
        sqlx::query("SELECT payload FROM ai_cache WHERE storage_key = ?1")
            .bind(storage_key(key))
            .fetch_optional(&pool)
            .await
            .ok()
            .flatten()
            .and_then(|row| row.try_get("payload").ok())
    }

    #[cfg(test)]
    async fn put_raw(&self, key: &str, payload: &str) {
        let pool = self.get_pool().await.unwrap();
        sqlx::query(
            r#"
            INSERT INTO ai_cache (storage_key, payload)
            VALUES (?1, ?2)
            ON CONFLICT(storage_key) DO UPDATE SET payload = excluded.payload
            "#,
        )
        .bind(storage_key(key))
        .bind(payload)
        .execute(&pool)
        .await
        .unwrap();
    }
}

fn storage_key(key: &str) -> String {
    format!("ai_cache_{key}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_cache(dir: &TempDir) -> InsightCache {
        InsightCache::open(dir.path().join("cache.db"))
    }

    #[tokio::test]
    async fn set_then_get_returns_value() {
        let dir = TempDir::new().unwrap();
        let cache = temp_cache(&dir);

        cache
            .set("inv_3_42", CachedValue::Text("قلل المخزون الراكد".to_string()))
            .await;

        assert_eq!(
            cache.get("inv_3_42").await,
            Some(CachedValue::Text("قلل المخزون الراكد".to_string()))
        );
    }

    #[tokio::test]
    async fn missing_key_is_a_miss() {
        let dir = TempDir::new().unwrap();
        let cache = temp_cache(&dir);

        assert_eq!(cache.get("dash_v2_0_0").await, None);
    }

    #[tokio::test]
    async fn expired_entry_reads_absent_and_is_deleted() {
        let dir = TempDir::new().unwrap();
        let cache = temp_cache(&dir);

        let stale = Utc::now().timestamp_millis() - INSIGHT_TTL_MS - 1;
        cache
            .set_at("cli_2_900", CachedValue::Text("تابع الديون".to_string()), stale)
            .await;

        assert_eq!(cache.get("cli_2_900").await, None);
        assert_eq!(cache.raw_payload("cli_2_900").await, None);
    }

    #[tokio::test]
    async fn entry_within_ttl_survives() {
        let dir = TempDir::new().unwrap();
        let cache = temp_cache(&dir);

        let recent = Utc::now().timestamp_millis() - (INSIGHT_TTL_MS / 2);
        cache
            .set_at("sup_1_100", CachedValue::Text("فاوض الموردين".to_string()), recent)
            .await;

        assert!(cache.get("sup_1_100").await.is_some());
    }

    #[tokio::test]
    async fn malformed_payload_is_evicted() {
        let dir = TempDir::new().unwrap();
        let cache = temp_cache(&dir);

        cache.put_raw("exp_4_5000", "{not json").await;

        assert_eq!(cache.get("exp_4_5000").await, None);
        assert_eq!(cache.raw_payload("exp_4_5000").await, None);
    }

    #[tokio::test]
    async fn overwrite_replaces_previous_value() {
        let dir = TempDir::new().unwrap();
        let cache = temp_cache(&dir);

        cache
            .set("inv_1_5", CachedValue::Text("أولى".to_string()))
            .await;
        cache
            .set(
                "inv_1_5",
                CachedValue::Tips(vec!["ثانية".to_string(), "ثالثة".to_string()]),
            )
            .await;

        assert_eq!(
            cache.get("inv_1_5").await,
            Some(CachedValue::Tips(vec!["ثانية".to_string(), "ثالثة".to_string()]))
        );
    }

    #[tokio::test]
    async fn short_ttl_override_expires_old_entries() {
        let dir = TempDir::new().unwrap();
        let cache = temp_cache(&dir).with_ttl_ms(50);

        let written = Utc::now().timestamp_millis() - 100;
        cache
            .set_at("dash_v2_9_9", CachedValue::Tips(vec!["نصيحة".to_string()]), written)
            .await;

        assert_eq!(cache.get("dash_v2_9_9").await, None);
    }
}
