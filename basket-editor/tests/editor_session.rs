// basket-editor/tests/editor_session.rs
// Session flows against in-memory and failing stores

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use basket_editor::{
    CatalogCategory, CatalogItem, CatalogStore, EditorConfig, EditorError, EditorSession,
    MemoryStore, PackagingFormat, SessionMode, SessionState, StoreError, StoreResult,
    ViolationRule, logger,
};

/// Store that counts calls and fails the first `failures` of them
#[derive(Default)]
struct FlakyStore {
    inner: MemoryStore,
    calls: AtomicUsize,
    failures: usize,
}

impl FlakyStore {
    fn failing(failures: usize) -> Self {
        Self {
            failures,
            ..Self::default()
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> StoreResult<()> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        if n < self.failures {
            return Err(StoreError::Transport("connection reset".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for FlakyStore {
    async fn create(&self, collection: &str, document: CatalogItem) -> StoreResult<String> {
        self.check()?;
        self.inner.create(collection, document).await
    }

    async fn update(&self, collection: &str, id: &str, document: CatalogItem) -> StoreResult<()> {
        self.check()?;
        self.inner.update(collection, id, document).await
    }

    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<CatalogItem>> {
        self.inner.get(collection, id).await
    }
}

/// Store that never answers in time
struct SlowStore;

#[async_trait]
impl CatalogStore for SlowStore {
    async fn create(&self, _collection: &str, _document: CatalogItem) -> StoreResult<String> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok("late".into())
    }

    async fn update(&self, _collection: &str, _id: &str, _document: CatalogItem) -> StoreResult<()> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok(())
    }

    async fn get(&self, _collection: &str, _id: &str) -> StoreResult<Option<CatalogItem>> {
        Ok(None)
    }
}

fn config() -> EditorConfig {
    EditorConfig::default()
}

#[tokio::test]
async fn test_create_flow() -> anyhow::Result<()> {
    logger::init_logger("debug");
    let store = Arc::new(MemoryStore::new());
    let mut session = EditorSession::new_item(store.clone(), config());
    assert_eq!(session.mode(), SessionMode::Create);

    let item = session.state_mut()?;
    item.set_title("Cesta Romance");
    item.set_price("89.90");
    item.set_category(CatalogCategory::Romance);
    item.images_mut().append(String::new());
    item.images_mut().append("http://x/img.png".into());
    item.format_prices_mut().set_format(PackagingFormat::Basket, "95")?;

    let id = session.submit().await?;
    assert_eq!(session.state(), SessionState::Persisted);
    assert_eq!(session.persisted_id(), Some(id.as_str()));

    let stored = store.get("cestas", &id).await?.expect("stored item");
    assert_eq!(stored.title, "Cesta Romance");
    assert_eq!(stored.images, vec!["http://x/img.png"]);
    assert_eq!(stored.format_prices.basket, Some(Decimal::from(95)));
    assert!(stored.created_at.is_some(), "store stamps createdAt");
    Ok(())
}

#[tokio::test]
async fn test_validation_failure_issues_no_store_call() {
    let store = Arc::new(FlakyStore::default());
    let mut session = EditorSession::new_item(store.clone(), config());
    session.state_mut().unwrap().set_price("10");

    let err = session.submit().await.unwrap_err();
    match &err {
        EditorError::Validation(errors) => assert!(errors.contains(ViolationRule::TitleRequired)),
        other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(store.calls(), 0);
    assert_eq!(session.state(), SessionState::Editing);
    assert!(matches!(session.last_error(), Some(EditorError::Validation(_))));
    assert_eq!(session.snapshot().price(), "10");
}

#[tokio::test]
async fn test_edit_keeps_identity_and_created_at() {
    let store = Arc::new(MemoryStore::new());
    let mut original = CatalogItem::new("Cesta Família", Decimal::from(120));
    original.category = CatalogCategory::FamilyAndFriends;
    let id = store.create("cestas", original).await.unwrap();
    let created_at = store.get("cestas", &id).await.unwrap().unwrap().created_at;

    let mut session = EditorSession::load(store.clone(), config(), &id).await.unwrap();
    assert_eq!(session.mode(), SessionMode::Edit);
    session.state_mut().unwrap().set_price("135.50");

    let returned = session.submit().await.unwrap();
    assert_eq!(returned, id);

    let stored = store.get("cestas", &id).await.unwrap().unwrap();
    assert_eq!(stored.created_at, created_at);
    assert_eq!(stored.price, Decimal::new(13550, 2));
    assert_eq!(stored.category, CatalogCategory::FamilyAndFriends);
    assert_eq!(store.len("cestas").await, 1);
}

#[tokio::test]
async fn test_edit_existing_created_at_unchanged() {
    let store = Arc::new(MemoryStore::new());
    let seeded = store
        .create("cestas", CatalogItem::new("Cesta", Decimal::from(50)))
        .await
        .unwrap();

    let mut item = store.get("cestas", &seeded).await.unwrap().unwrap();
    item.created_at = Some("2024-01-01T00:00:00Z".into());
    store.update("cestas", &seeded, item.clone()).await.unwrap();

    let mut session = EditorSession::edit(store.clone(), config(), &seeded, &item);
    session.state_mut().unwrap().set_price("60");
    session.submit().await.unwrap();

    let stored = store.get("cestas", &seeded).await.unwrap().unwrap();
    assert_eq!(stored.created_at.as_deref(), Some("2024-01-01T00:00:00Z"));
    assert_eq!(stored.price, Decimal::from(60));
}

#[tokio::test]
async fn test_edit_without_id_in_body_updates_in_place() {
    let store = Arc::new(MemoryStore::new());
    let key = store
        .create("cestas", CatalogItem::new("Cesta", Decimal::from(50)))
        .await
        .unwrap();

    // Document as read from the store body, identity only in the key
    let mut body = store.get("cestas", &key).await.unwrap().unwrap();
    body.id = None;
    body.created_at = Some("2024-01-01T00:00:00Z".into());
    store.update("cestas", &key, body.clone()).await.unwrap();

    let mut session = EditorSession::edit(store.clone(), config(), &key, &body);
    assert_eq!(session.mode(), SessionMode::Edit);
    session.state_mut().unwrap().set_price("55");

    let returned = session.submit().await.unwrap();
    assert_eq!(returned, key);
    assert_eq!(store.len("cestas").await, 1);

    let stored = store.get("cestas", &key).await.unwrap().unwrap();
    assert_eq!(stored.created_at.as_deref(), Some("2024-01-01T00:00:00Z"));
    assert_eq!(stored.price, Decimal::from(55));
}

#[tokio::test]
async fn test_open_mirrors_nullable_input() {
    let store = Arc::new(MemoryStore::new());
    let blank = EditorSession::open(store.clone(), config(), None);
    assert_eq!(blank.mode(), SessionMode::Create);

    let item = CatalogItem::new("Cesta", Decimal::from(10));
    let existing = EditorSession::open(store, config(), Some(("doc-7", &item)));
    assert_eq!(existing.mode(), SessionMode::Edit);
}

#[tokio::test]
async fn test_store_failure_keeps_edits_and_allows_retry() {
    let store = Arc::new(FlakyStore::failing(1));
    let mut session = EditorSession::new_item(store.clone(), config());
    {
        let item = session.state_mut().unwrap();
        item.set_title("Cesta Datas");
        item.set_price("70");
        item.set_category(CatalogCategory::SpecialDates);
        let g = item.add_group();
        item.group_mut(g).unwrap().set_category("Chocolates");
    }
    let before = session.snapshot().clone();

    let err = session.submit().await.unwrap_err();
    assert!(matches!(err, EditorError::Persistence(StoreError::Transport(_))));
    assert_eq!(session.state(), SessionState::Editing);
    assert_eq!(session.snapshot(), &before);
    assert!(session.last_error().is_some());

    let id = session.submit().await.unwrap();
    assert_eq!(store.calls(), 2);
    assert!(session.last_error().is_none());

    let stored = store.get("cestas", &id).await.unwrap().unwrap();
    assert_eq!(stored.customization_groups[0].category, "Chocolates");
}

#[tokio::test]
async fn test_slow_store_times_out() {
    let config = config().with_submit_timeout_ms(20);
    let mut session = EditorSession::new_item(Arc::new(SlowStore), config);
    session.state_mut().unwrap().set_title("Cesta");
    session.state_mut().unwrap().set_price("1");

    let err = session.submit().await.unwrap_err();
    assert!(matches!(err, EditorError::Persistence(StoreError::Timeout)));
    assert_eq!(session.state(), SessionState::Editing);
}

#[tokio::test]
async fn test_persisted_session_is_closed() {
    let store: Arc<dyn CatalogStore> = Arc::new(MemoryStore::new());
    let mut session = EditorSession::new_item(store, config().with_collection("cestas_teste"));
    session.state_mut().unwrap().set_title("Cesta");
    session.state_mut().unwrap().set_price("1");
    session.submit().await.unwrap();

    assert!(matches!(session.state_mut(), Err(EditorError::SessionClosed)));
    assert!(matches!(session.submit().await, Err(EditorError::SessionClosed)));
}

#[tokio::test]
async fn test_load_missing_item() {
    let store = Arc::new(MemoryStore::new());
    let result = EditorSession::load(store, config(), "nope").await;
    assert!(matches!(
        result,
        Err(EditorError::Persistence(StoreError::NotFound(_)))
    ));
}
