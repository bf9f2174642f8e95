//! EngineCache sharing across schemas and sessions.

use std::sync::Arc;

use lookahead_core::{Schema, TomlSchemaConfig, UserDataResolver};
use lookahead_engine::{EngineCache, PredictionEngine};
use lookahead_storage::HandleCache;

fn schema(id: &str, toml: &str) -> Schema {
    Schema::new(id, Arc::new(TomlSchemaConfig::from_toml(toml).unwrap()))
}

#[test]
fn engine_reads_limits_from_schema() {
    let dir = tempfile::tempdir().unwrap();
    let resolver = UserDataResolver::for_predict_db(dir.path());
    let handles = HandleCache::new();
    let engine = PredictionEngine::create(
        &schema(
            "luna_pinyin",
            "[predictor]\nmax_candidates = 4\nmax_iterations = 2\n",
        ),
        &resolver,
        &handles,
    )
    .unwrap();
    assert_eq!(engine.max_candidates(), 4);
    assert_eq!(engine.max_iterations(), 2);
    assert_eq!(
        engine.store().location(),
        dir.path().join("predict.userdb").to_string_lossy()
    );
}

#[test]
fn custom_db_name_is_resolved() {
    let dir = tempfile::tempdir().unwrap();
    let resolver = UserDataResolver::for_predict_db(dir.path());
    let handles = HandleCache::new();
    let engine = PredictionEngine::create(
        &schema("s", "[predictor]\npredictdb = \"custom.userdb\"\n"),
        &resolver,
        &handles,
    )
    .unwrap();
    assert!(engine.store().location().ends_with("custom.userdb"));
}

#[test]
fn unavailable_store_yields_no_engine() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocked");
    std::fs::write(&blocker, b"x").unwrap();
    let resolver = UserDataResolver::for_predict_db(&blocker);
    let cache = EngineCache::new(Arc::new(HandleCache::new()));

    assert!(cache.get_or_create(&schema("s", ""), &resolver).is_none());
    assert!(cache.is_empty());
}

#[test]
fn same_schema_shares_one_engine() {
    let dir = tempfile::tempdir().unwrap();
    let resolver = UserDataResolver::for_predict_db(dir.path());
    let cache = EngineCache::new(Arc::new(HandleCache::new()));
    let s = schema("luna_pinyin", "");

    let a = cache.get_or_create(&s, &resolver).unwrap();
    let b = cache.get_or_create(&s, &resolver).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(cache.live_count(), 1);
}

#[test]
fn schemas_on_one_db_share_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let resolver = UserDataResolver::for_predict_db(dir.path());
    let cache = EngineCache::new(Arc::new(HandleCache::new()));

    let a = cache.get_or_create(&schema("a", ""), &resolver).unwrap();
    let b = cache.get_or_create(&schema("b", ""), &resolver).unwrap();
    assert!(!Arc::ptr_eq(&a, &b));
    assert!(Arc::ptr_eq(a.store(), b.store()));

    a.update_predict("你好", "世界", false);
    assert!(b.predict("你好"));
    assert_eq!(b.candidates(), vec!["世界".to_string()]);
}

#[test]
fn released_engine_is_rebuilt_and_store_reclaimed() {
    let dir = tempfile::tempdir().unwrap();
    let resolver = UserDataResolver::for_predict_db(dir.path());
    let handles = Arc::new(HandleCache::new());
    let cache = EngineCache::new(handles.clone());
    let s = schema("s", "");

    let engine = cache.get_or_create(&s, &resolver).unwrap();
    engine.update_predict("k", "w", false);
    drop(engine);
    assert_eq!(cache.live_count(), 0);
    assert_eq!(handles.live_count(), 0);

    let engine = cache.get_or_create(&s, &resolver).unwrap();
    assert_eq!(cache.len(), 1);
    assert!(engine.predict("k"));
}

#[test]
fn global_caches_are_linked() {
    let engines = EngineCache::global();
    assert!(Arc::ptr_eq(engines.handles(), &HandleCache::global()));
}
