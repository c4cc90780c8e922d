//! Catalog item editor session
//!
//! ```text
//! Editing ──submit()──▶ Submitting ──ok──▶ Persisted
//!    ▲                      │
//!    └──── invalid / store error (edits kept, error attached)
//! ```
//!
//! `submit` borrows the session mutably for the whole store call, so a
//! second submit (or any edit) cannot start while one is in flight. The
//! store receives its own copy of the document.

use std::sync::Arc;

use serde::Serialize;
use shared::models::CatalogItem;
use tracing::{info, instrument, warn};

use crate::config::EditorConfig;
use crate::editable::{EditableItem, ItemOrigin};
use crate::error::{EditorError, EditorResult};
use crate::normalizer::{hydrate_as, normalize};
use crate::store::{CatalogStore, StoreError, StoreResult};

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Editing,
    /// Held only while `submit` owns the session; callers never observe it
    /// through [`EditorSession::state`].
    Submitting,
    Persisted,
}

/// Whether submit creates or updates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    Create,
    Edit,
}

/// Editor for one catalog item
pub struct EditorSession<S: CatalogStore + ?Sized> {
    store: Arc<S>,
    config: EditorConfig,
    item: EditableItem,
    state: SessionState,
    last_error: Option<EditorError>,
    persisted_id: Option<String>,
}

impl<S: CatalogStore + ?Sized> EditorSession<S> {
    /// Session for the item stored under `id`, or a blank one when
    /// `stored` is `None`
    pub fn open(
        store: Arc<S>,
        config: EditorConfig,
        stored: Option<(&str, &CatalogItem)>,
    ) -> Self {
        let editable = match stored {
            Some((id, item)) => {
                if item.id.as_deref().is_some_and(|own| own != id) {
                    warn!(key = id, body_id = ?item.id, "Document id differs from its store key");
                }
                hydrate_as(
                    item,
                    ItemOrigin::Existing {
                        id: id.to_string(),
                        created_at: item.created_at.clone(),
                    },
                )
            }
            None => EditableItem::new(),
        };
        Self {
            store,
            config,
            item: editable,
            state: SessionState::Editing,
            last_error: None,
            persisted_id: None,
        }
    }

    /// Blank session that creates a new item on submit
    pub fn new_item(store: Arc<S>, config: EditorConfig) -> Self {
        Self::open(store, config, None)
    }

    /// Session editing the item stored under `id`.
    ///
    /// Always in edit mode: submit updates `id` and keeps the item's
    /// `createdAt`, whether or not the document body carries its id.
    pub fn edit(store: Arc<S>, config: EditorConfig, id: &str, item: &CatalogItem) -> Self {
        Self::open(store, config, Some((id, item)))
    }

    /// Fetch an item by identity and open it for editing
    pub async fn load(store: Arc<S>, config: EditorConfig, id: &str) -> EditorResult<Self> {
        let item = store
            .get(&config.collection, id)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("{}/{}", config.collection, id)))?;
        Ok(Self::edit(store, config, id, &item))
    }

    pub fn mode(&self) -> SessionMode {
        match self.item.origin() {
            ItemOrigin::New { .. } => SessionMode::Create,
            ItemOrigin::Existing { .. } => SessionMode::Edit,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Current editable state, for rendering
    pub fn snapshot(&self) -> &EditableItem {
        &self.item
    }

    /// Mutation handle; refused once the item is persisted
    pub fn state_mut(&mut self) -> EditorResult<&mut EditableItem> {
        match self.state {
            SessionState::Persisted => Err(EditorError::SessionClosed),
            _ => Ok(&mut self.item),
        }
    }

    /// Error attached by the last failed submit
    pub fn last_error(&self) -> Option<&EditorError> {
        self.last_error.as_ref()
    }

    /// Identity of the stored item after a successful submit
    pub fn persisted_id(&self) -> Option<&str> {
        self.persisted_id.as_deref()
    }

    /// Validate, normalize and hand the document to the store.
    ///
    /// Returns the item identity. On failure the session is back in
    /// `Editing` with every edit intact and the error attached.
    #[instrument(skip(self), fields(collection = %self.config.collection, mode = ?self.mode()))]
    pub async fn submit(&mut self) -> EditorResult<String> {
        if self.state == SessionState::Persisted {
            return Err(EditorError::SessionClosed);
        }

        let document = match normalize(&self.item) {
            Ok(document) => document,
            Err(err) => {
                warn!(error = %err, "Submit rejected by validation");
                return Err(self.fail(err));
            }
        };

        self.state = SessionState::Submitting;
        self.last_error = None;
        info!(title = %document.title, "Submitting catalog item");

        match self.persist(document).await {
            Ok(id) => {
                self.state = SessionState::Persisted;
                self.persisted_id = Some(id.clone());
                info!(id = %id, "Catalog item persisted");
                Ok(id)
            }
            Err(err) => {
                warn!(error = %err, "Store rejected catalog item");
                Err(self.fail(err.into()))
            }
        }
    }

    async fn persist(&self, document: CatalogItem) -> StoreResult<String> {
        let collection = self.config.collection.as_str();
        let call = async {
            match self.item.origin() {
                ItemOrigin::New { .. } => self.store.create(collection, document).await,
                ItemOrigin::Existing { id, .. } => self
                    .store
                    .update(collection, id, document)
                    .await
                    .map(|()| id.clone()),
            }
        };

        tokio::time::timeout(self.config.submit_timeout(), call)
            .await
            .map_err(|_| StoreError::Timeout)?
    }

    fn fail(&mut self, err: EditorError) -> EditorError {
        self.state = SessionState::Editing;
        self.last_error = Some(err.clone());
        err
    }
}
