//! Persistence seam
//!
//! The editor never talks to the document store directly; it hands a
//! finished document to a [`CatalogStore`]. The store owns identity
//! assignment and the authoritative `createdAt` stamp.

use async_trait::async_trait;
use shared::error::ErrorCode;
use shared::models::CatalogItem;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;

/// Store failure kinds
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Network or connection failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// Store refused the write (permissions, schema rules, quota)
    #[error("Rejected by store: {0}")]
    Rejected(String),

    /// Document to update does not exist
    #[error("Document not found: {0}")]
    NotFound(String),

    /// Call did not finish within the configured bound
    #[error("Store call timed out")]
    Timeout,
}

impl StoreError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Transport(_) => ErrorCode::NetworkError,
            Self::Rejected(_) => ErrorCode::CatalogItemSaveFailed,
            Self::NotFound(_) => ErrorCode::CatalogItemNotFound,
            Self::Timeout => ErrorCode::TimeoutError,
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Remote document store operations the editor relies on
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Insert a new document and return its identity.
    ///
    /// The store stamps `createdAt`; any value on `document` is ignored.
    async fn create(&self, collection: &str, document: CatalogItem) -> StoreResult<String>;

    /// Replace an existing document
    async fn update(&self, collection: &str, id: &str, document: CatalogItem) -> StoreResult<()>;

    /// Fetch one document, with `id` filled in
    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<CatalogItem>>;
}

/// In-process document store
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, HashMap<String, CatalogItem>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in a collection
    pub async fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, HashMap::len)
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn create(&self, collection: &str, mut document: CatalogItem) -> StoreResult<String> {
        let id = uuid::Uuid::new_v4().to_string();
        document.id = Some(id.clone());
        document.created_at = Some(shared::util::now_rfc3339());

        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), document);

        tracing::debug!(collection, id = %id, "Document created");
        Ok(id)
    }

    async fn update(&self, collection: &str, id: &str, mut document: CatalogItem) -> StoreResult<()> {
        let mut collections = self.collections.write().await;
        let slot = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(id))
            .ok_or_else(|| StoreError::NotFound(format!("{}/{}", collection, id)))?;

        document.id = Some(id.to_string());
        *slot = document;

        tracing::debug!(collection, id, "Document updated");
        Ok(())
    }

    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<CatalogItem>> {
        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .and_then(|docs| docs.get(id))
            .cloned())
    }
}
