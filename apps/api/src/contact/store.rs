//! Contact message persistence — pluggable, trait-based store.
//!
//! Two backends share the same contract: `MemoryContactStore` (process-local,
//! used when no database is configured, and in tests) and `PgContactStore`
//! (Postgres via sqlx). `AppState` holds an `Arc<dyn ContactStore>`, picked
//! once at startup from config.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use thiserror::Error;

use crate::models::contact::{ContactMessage, NewContactMessage};

/// An underlying storage fault. Validated input never fails on its own;
/// only I/O against the durable backend can.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The message store trait. Implement this to swap persistence backends
/// without touching handler code.
///
/// The store exclusively owns the record collection and the id counter.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Assigns the next id, stamps the creation time, and stores the record,
    /// returning the full entity. Ids are strictly increasing and never
    /// reused; two concurrent creates never receive the same id. The write
    /// is all-or-nothing.
    async fn create(&self, record: NewContactMessage) -> Result<ContactMessage, StoreError>;

    /// All stored messages in insertion order (ascending id).
    async fn list_all(&self) -> Result<Vec<ContactMessage>, StoreError>;

    /// The message with the given id, or `None` if no such id was ever
    /// assigned. An unknown id is not an error.
    async fn get_by_id(&self, id: i64) -> Result<Option<ContactMessage>, StoreError>;
}

// ────────────────────────────────────────────────────────────────────────────
// MemoryContactStore — default when DATABASE_URL is not set
// ────────────────────────────────────────────────────────────────────────────

/// In-memory store. State is owned by the instance, not a global, so tests
/// get isolated stores. The mutex guards the counter and collection together,
/// making id assignment atomic; it is never held across I/O.
#[derive(Default)]
pub struct MemoryContactStore {
    inner: Mutex<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    next_id: i64,
    messages: Vec<ContactMessage>,
}

impl MemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    async fn create(&self, record: NewContactMessage) -> Result<ContactMessage, StoreError> {
        let mut inner = self.inner.lock().expect("contact store mutex poisoned");
        let id = inner.next_id + 1;
        inner.next_id = id;
        let stored = ContactMessage {
            id,
            name: record.name,
            email: record.email,
            subject: record.subject,
            message: record.message,
            created_at: Utc::now(),
        };
        inner.messages.push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<ContactMessage>, StoreError> {
        let inner = self.inner.lock().expect("contact store mutex poisoned");
        Ok(inner.messages.clone())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<ContactMessage>, StoreError> {
        let inner = self.inner.lock().expect("contact store mutex poisoned");
        Ok(inner.messages.iter().find(|m| m.id == id).cloned())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// PgContactStore — durable backend
// ────────────────────────────────────────────────────────────────────────────

/// Postgres store. Id assignment rides on the table's BIGSERIAL column, so
/// monotonicity holds across process restarts; the single-statement insert
/// keeps creates atomic.
pub struct PgContactStore {
    pool: PgPool,
}

impl PgContactStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for PgContactStore {
    async fn create(&self, record: NewContactMessage) -> Result<ContactMessage, StoreError> {
        let stored: ContactMessage = sqlx::query_as(
            r#"
            INSERT INTO contact_messages (name, email, subject, message)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, subject, message, created_at
            "#,
        )
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.subject)
        .bind(&record.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<ContactMessage>, StoreError> {
        let messages: Vec<ContactMessage> = sqlx::query_as(
            "SELECT id, name, email, subject, message, created_at
             FROM contact_messages ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<ContactMessage>, StoreError> {
        let message: Option<ContactMessage> = sqlx::query_as(
            "SELECT id, name, email, subject, message, created_at
             FROM contact_messages WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(message)
    }
}
