//! Lifecycle transition scenarios: optimistic writes, rollback on
//! rejection, the two-phase finish, and the action layer's notification
//! wiring.

mod common;

use agora_client::{IncentiveCandidate, IncentiveCandidates};
use agora_lifecycle::{LayoutActions, Route, SpaceStore};
use agora_model::{PublishState, SpaceStatus, Visibility};
use common::{space, RecordingApi, ScriptedSelector, Ui, PK};
use std::sync::atomic::Ordering;
use std::sync::Arc;

fn store_with(api: Arc<RecordingApi>) -> SpaceStore {
    SpaceStore::new(api)
}

#[tokio::test]
async fn publish_invalidates_on_success() {
    let api = Arc::new(RecordingApi::with_space(space()));
    let store = store_with(api.clone());
    store.space(PK).await.unwrap();

    store.publish(PK, Visibility::Public).await.unwrap();

    // The speculative entry is gone; the next read refetches the
    // authoritative state.
    assert!(!store.spaces().contains(PK));
    let refreshed = store.space(PK).await.unwrap();
    assert_eq!(refreshed.publish_state, PublishState::Published);
    assert_eq!(refreshed.visibility, Visibility::Public);
    assert_eq!(api.calls()[1], format!("publish:{PK}"));
}

#[tokio::test]
async fn publish_rolls_back_on_rejection() {
    let api = Arc::new(RecordingApi::with_space(space()));
    api.fail_publish.store(true, Ordering::SeqCst);
    let store = store_with(api.clone());
    let before = store.space(PK).await.unwrap();

    let result = store.publish(PK, Visibility::Public).await;
    assert!(result.is_err());

    // The cache holds exactly the pre-mutation value again.
    assert_eq!(store.spaces().get(PK).unwrap(), before);
}

#[tokio::test]
async fn start_is_optimistic_with_rollback() {
    let api = Arc::new(RecordingApi::with_space(space()));
    api.fail_patch.store(true, Ordering::SeqCst);
    let store = store_with(api.clone());
    store.space(PK).await.unwrap();

    let result = store.start(PK, true).await;
    assert!(result.is_err());
    assert_eq!(store.spaces().get(PK).unwrap().status, None);

    api.fail_patch.store(false, Ordering::SeqCst);
    store.start(PK, true).await.unwrap();
    assert!(api
        .calls()
        .iter()
        .any(|c| c.contains("\"block_participate\":true")));
}

#[tokio::test]
async fn status_observations_stay_monotonic() {
    let api = Arc::new(RecordingApi::with_space(space()));
    let store = store_with(api.clone());

    let mut observed = vec![store.space(PK).await.unwrap().status];

    store.start(PK, false).await.unwrap();
    observed.push(store.space(PK).await.unwrap().status);

    store
        .finish(PK, true, &ScriptedSelector::default())
        .await
        .unwrap();
    observed.push(store.spaces().get(PK).unwrap().status);

    assert_eq!(
        observed,
        vec![
            None,
            Some(SpaceStatus::InProgress),
            Some(SpaceStatus::Finished)
        ]
    );
    let ranks: Vec<_> = observed
        .iter()
        .filter_map(|s| s.map(SpaceStatus::rank))
        .collect();
    assert!(ranks.windows(2).all(|w| w[0] < w[1]), "ranks: {ranks:?}");
}

#[tokio::test]
async fn finish_skips_selection_without_contract() {
    let api = Arc::new(RecordingApi::with_space(space()));
    api.set_candidates(IncentiveCandidates {
        incentive_address: None,
        candidates: vec![IncentiveCandidate {
            address: "0xabc".into(),
            score: 10,
        }],
    });
    let selector = ScriptedSelector::default();
    let store = store_with(api.clone());
    store.space(PK).await.unwrap();

    store.finish(PK, true, &selector).await.unwrap();

    assert_eq!(selector.calls.load(Ordering::SeqCst), 0);
    let calls = api.calls();
    assert!(!calls.iter().any(|c| c.starts_with("winners:")));
    assert!(calls.iter().any(|c| c.contains("\"finished\":true")));
    assert_eq!(
        store.spaces().get(PK).unwrap().status,
        Some(SpaceStatus::Finished)
    );
}

#[tokio::test]
async fn finish_drives_selection_before_patching() {
    let api = Arc::new(RecordingApi::with_space(space()));
    api.set_candidates(IncentiveCandidates {
        incentive_address: Some("0xcontract".into()),
        candidates: vec![
            IncentiveCandidate {
                address: "0xaaa".into(),
                score: 7,
            },
            IncentiveCandidate {
                address: "0xbbb".into(),
                score: 3,
            },
        ],
    });
    let selector = ScriptedSelector::default();
    let store = store_with(api.clone());
    store.space(PK).await.unwrap();

    store.finish(PK, true, &selector).await.unwrap();

    assert_eq!(selector.calls.load(Ordering::SeqCst), 1);
    let calls = api.calls();
    let winners_at = calls
        .iter()
        .position(|c| c == &format!("winners:{PK}:0xaaa,0xbbb"))
        .expect("winners recorded");
    let patch_at = calls
        .iter()
        .position(|c| c.contains("\"finished\":true"))
        .expect("finish patched");
    assert!(winners_at < patch_at, "calls: {calls:?}");
}

#[tokio::test]
async fn share_counts_optimistically_and_reverts() {
    let api = Arc::new(RecordingApi::with_space(space()));
    api.fail_share.store(true, Ordering::SeqCst);
    let store = store_with(api.clone());
    store.space(PK).await.unwrap();

    assert!(store.share(PK).await.is_err());
    assert_eq!(store.spaces().get(PK).unwrap().shares, 0);
}

#[tokio::test]
async fn participate_updates_cache_in_place() {
    let api = Arc::new(RecordingApi::with_space(space()));
    let store = store_with(api.clone());
    store.space(PK).await.unwrap();

    store.participate(PK, "").await.unwrap();

    let cached = store.spaces().get(PK).unwrap();
    assert!(cached.participated);
    assert!(!cached.can_participate);
}

#[tokio::test]
async fn delete_navigates_home_and_closes_popup() {
    let api = Arc::new(RecordingApi::with_space(space()));
    let ui = Arc::new(Ui::default());
    let actions = LayoutActions::new(
        Arc::new(store_with(api.clone())),
        Arc::new(ScriptedSelector::default()),
        ui.clone(),
        ui.clone(),
        ui.clone(),
        ui.clone(),
    );

    actions.delete(PK).await;

    assert_eq!(ui.routes.lock().unwrap().as_slice(), [Route::Home]);
    assert_eq!(
        ui.toasts.lock().unwrap().as_slice(),
        ["ok:toast_delete_success"]
    );
    assert_eq!(ui.closes.load(Ordering::SeqCst), 1);
}
