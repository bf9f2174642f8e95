//! End-to-end: component → session → engine → on-disk store.

use std::sync::Arc;

use lookahead_core::{CommitKind, UserDataResolver};
use lookahead_engine::EngineCache;
use lookahead_runtime::PredictorComponent;
use lookahead_storage::HandleCache;
use test_fixtures::{schema, MapConfig, MockContext, TempUserData};

fn component(data: &TempUserData) -> PredictorComponent {
    PredictorComponent::new(
        Arc::new(EngineCache::new(Arc::new(HandleCache::new()))),
        Arc::new(data.resolver.clone()),
    )
}

#[test]
fn sessions_of_one_schema_share_learning() {
    let data = TempUserData::new();
    let component = component(&data);
    let s = schema("luna_pinyin", 0, 0);

    let mut first = MockContext::new();
    let mut second = MockContext::new();
    let a = component.create(&s, &first).unwrap();
    let b = component.create(&s, &second).unwrap();
    assert!(Arc::ptr_eq(a.engine(), b.engine()));

    a.engine().update_predict("你好", "世界", false);
    first.commit("你好", CommitKind::Text);
    a.on_context_update(&mut first);
    a.on_select(&first, "世界");
    first.commit("世界", CommitKind::Prediction);
    a.on_context_update(&mut first);

    second.commit("你好", CommitKind::Text);
    b.on_context_update(&mut second);
    assert_eq!(second.prediction_segments().len(), 1);
    let list = b.engine().store().lookup("你好").unwrap();
    assert_eq!(list.weight_of("世界"), Some(1.5));
}

#[test]
fn learning_survives_releasing_every_session() {
    let data = TempUserData::new();
    let component = component(&data);
    let s = schema("luna_pinyin", 0, 0);

    {
        let ctx = MockContext::new();
        let session = component.create(&s, &ctx).unwrap();
        session.engine().update_predict("$", "我", false);
    }
    assert_eq!(component.engines().live_count(), 0);
    assert_eq!(component.engines().handles().live_count(), 0);

    let mut ctx = MockContext::new();
    let session = component.create(&s, &ctx).unwrap();
    session.on_context_update(&mut ctx);
    assert_eq!(ctx.prediction_segments().len(), 1);
    assert_eq!(session.engine().candidates(), vec!["我".to_string()]);
}

#[test]
fn limits_come_from_schema_config() {
    let data = TempUserData::new();
    let component = component(&data);
    let s = MapConfig::new()
        .with_string("predictor/predictdb", "custom.userdb")
        .with_int("predictor/max_candidates", 2)
        .with_int("predictor/max_iterations", -3)
        .into_schema("custom");

    let ctx = MockContext::new();
    let session = component.create(&s, &ctx).unwrap();
    let engine = session.engine();
    assert_eq!(engine.max_candidates(), 2);
    assert_eq!(engine.max_iterations(), 0);
    assert!(data.dir.path().join("custom.userdb").exists());
}

#[test]
fn unavailable_database_yields_no_session() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, b"x").unwrap();
    let component = PredictorComponent::new(
        Arc::new(EngineCache::new(Arc::new(HandleCache::new()))),
        Arc::new(UserDataResolver::for_predict_db(&blocker)),
    );

    let ctx = MockContext::new();
    assert!(component.create(&schema("s", 0, 0), &ctx).is_none());
}

#[test]
fn abort_capability_is_taken_from_the_context() {
    let data = TempUserData::new();
    let component = component(&data);
    let s = schema("s", 0, 0);

    let mut ctx = MockContext::new().with_abort_notifications();
    let session = component.create(&s, &ctx).unwrap();
    session.engine().update_predict("$", "a", false);
    session.on_context_update(&mut ctx);
    session.dispatch(&mut ctx, lookahead_session::ContextEvent::Abort);
    assert_eq!(session.iteration_counter(), 0);
}

#[test]
fn global_component_uses_global_caches() {
    let data = TempUserData::new();
    let component = PredictorComponent::with_global_caches(Arc::new(data.resolver.clone()));
    assert!(Arc::ptr_eq(component.engines(), &EngineCache::global()));
}
