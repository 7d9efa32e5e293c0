//! Shared test doubles: a recording spaces API, a scripted incentive
//! selector, and recorder implementations of the UI collaborator traits.

// Not every test binary exercises every double.
#![allow(dead_code)]

use agora_client::{IncentiveCandidate, IncentiveCandidates, SpaceApi, SpacePatch};
use agora_lifecycle::{
    IncentiveSelector, Navigator, PopupContent, PopupService, Route, SelectorError, ToastService,
    Translator,
};
use agora_model::{
    Answer, PublishState, Requirement, RequirementKind, Space, SpaceType, Visibility,
};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

pub const PK: &str = "SPACE#1";

pub fn space() -> Space {
    Space {
        pk: PK.into(),
        sk: "SPACE".into(),
        title: "Budget deliberation".into(),
        content: String::new(),
        created_at: 1_700_000_000_000,
        updated_at: 1_700_000_000_000,
        space_type: SpaceType::Deliberation,
        status: None,
        publish_state: PublishState::Draft,
        visibility: Visibility::Private,
        booster: None,
        permissions: 0,
        author_display_name: "Ada".into(),
        author_username: "ada".into(),
        author_profile_url: String::new(),
        likes: 0,
        comments: 0,
        shares: 0,
        participated: false,
        can_participate: false,
        anonymous_participation: false,
        block_participate: false,
        change_visibility: false,
        quota: 0,
        remains: 0,
        participant_display_name: None,
        participant_profile_url: None,
        participant_username: None,
        requirements: Vec::new(),
    }
}

pub fn requirement(order: i64, responded: bool) -> Requirement {
    Requirement {
        pk: PK.into(),
        sk: format!("REQ#{order}"),
        order,
        kind: RequirementKind::PrePoll,
        related_pk: PK.into(),
        related_sk: format!("POLL#{order}"),
        responded,
    }
}

/// In-memory spaces API that records every call and can be told to fail
/// specific operations.
#[derive(Default)]
pub struct RecordingApi {
    pub space: Mutex<Option<Space>>,
    pub candidates: Mutex<IncentiveCandidates>,
    pub calls: Mutex<Vec<String>>,
    pub participate_count: AtomicUsize,
    pub fail_patch: AtomicBool,
    pub fail_publish: AtomicBool,
    pub fail_participate: AtomicBool,
    pub fail_share: AtomicBool,
    pub fail_submit: AtomicBool,
}

impl RecordingApi {
    pub fn with_space(space: Space) -> Self {
        let api = Self::default();
        *api.space.lock().unwrap() = Some(space);
        api
    }

    pub fn set_candidates(&self, candidates: IncentiveCandidates) {
        *self.candidates.lock().unwrap() = candidates;
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn rejected() -> agora_client::Error {
        agora_client::Error::Api {
            status: 500,
            message: "rejected".into(),
        }
    }
}

#[async_trait]
impl SpaceApi for RecordingApi {
    async fn fetch_space(&self, pk: &str) -> agora_client::Result<Space> {
        self.record(format!("fetch:{pk}"));
        self.space
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| agora_client::Error::NotFound(pk.into()))
    }

    async fn patch_space(&self, pk: &str, patch: SpacePatch) -> agora_client::Result<()> {
        self.record(format!(
            "patch:{pk}:{}",
            serde_json::to_string(&patch).unwrap()
        ));
        if self.fail_patch.load(Ordering::SeqCst) {
            return Err(Self::rejected());
        }
        // Mirror the server's application of the patch.
        if let Some(space) = self.space.lock().unwrap().as_mut() {
            if let Some(block) = patch.block_participate {
                space.block_participate = block;
                if space.status.is_none() {
                    space.status = Some(agora_model::SpaceStatus::InProgress);
                }
            }
            if patch.finished == Some(true) {
                space.status = Some(agora_model::SpaceStatus::Finished);
            }
            if let Some(visibility) = patch.visibility {
                space.visibility = visibility;
            }
            if let Some(anonymous) = patch.anonymous_participation {
                space.anonymous_participation = anonymous;
            }
            if let Some(title) = patch.title {
                space.title = title;
            }
        }
        Ok(())
    }

    async fn publish_space(&self, pk: &str, visibility: Visibility) -> agora_client::Result<()> {
        self.record(format!("publish:{pk}"));
        if self.fail_publish.load(Ordering::SeqCst) {
            return Err(Self::rejected());
        }
        if let Some(space) = self.space.lock().unwrap().as_mut() {
            space.publish_state = PublishState::Published;
            space.visibility = visibility;
        }
        Ok(())
    }

    async fn delete_space(&self, pk: &str) -> agora_client::Result<()> {
        self.record(format!("delete:{pk}"));
        Ok(())
    }

    async fn participate(&self, pk: &str, _: &str) -> agora_client::Result<()> {
        self.record(format!("participate:{pk}"));
        self.participate_count.fetch_add(1, Ordering::SeqCst);
        if self.fail_participate.load(Ordering::SeqCst) {
            return Err(agora_client::Error::Api {
                status: 401,
                message: "credential required".into(),
            });
        }
        Ok(())
    }

    async fn share_space(&self, pk: &str) -> agora_client::Result<()> {
        self.record(format!("share:{pk}"));
        if self.fail_share.load(Ordering::SeqCst) {
            return Err(Self::rejected());
        }
        Ok(())
    }

    async fn submit_poll_response(
        &self,
        pk: &str,
        poll_sk: &str,
        _: Vec<Answer>,
    ) -> agora_client::Result<()> {
        self.record(format!("respond:{pk}:{poll_sk}"));
        if self.fail_submit.load(Ordering::SeqCst) {
            return Err(Self::rejected());
        }
        Ok(())
    }

    async fn incentive_candidates(&self, pk: &str) -> agora_client::Result<IncentiveCandidates> {
        self.record(format!("candidates:{pk}"));
        Ok(self.candidates.lock().unwrap().clone())
    }

    async fn record_incentive_winners(
        &self,
        pk: &str,
        addresses: Vec<String>,
    ) -> agora_client::Result<()> {
        self.record(format!("winners:{pk}:{}", addresses.join(",")));
        Ok(())
    }
}

/// Incentive selector that returns every candidate and counts invocations.
#[derive(Default)]
pub struct ScriptedSelector {
    pub calls: AtomicUsize,
}

#[async_trait]
impl IncentiveSelector for ScriptedSelector {
    async fn select_winners(
        &self,
        _: &str,
        candidates: &[IncentiveCandidate],
    ) -> Result<Vec<String>, SelectorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(candidates.iter().map(|c| c.address.clone()).collect())
    }
}

/// Records toasts, popups, and navigation.
#[derive(Default)]
pub struct Ui {
    pub toasts: Mutex<Vec<String>>,
    pub popups: Mutex<Vec<PopupContent>>,
    pub closes: AtomicUsize,
    pub routes: Mutex<Vec<Route>>,
}

impl ToastService for Ui {
    fn success(&self, message: &str) {
        self.toasts.lock().unwrap().push(format!("ok:{message}"));
    }
    fn error(&self, message: &str) {
        self.toasts.lock().unwrap().push(format!("err:{message}"));
    }
    fn info(&self, message: &str) {
        self.toasts.lock().unwrap().push(format!("info:{message}"));
    }
    fn warning(&self, message: &str) {
        self.toasts.lock().unwrap().push(format!("warn:{message}"));
    }
}

impl PopupService for Ui {
    fn open(&self, content: PopupContent) {
        self.popups.lock().unwrap().push(content);
    }
    fn close(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}

impl Navigator for Ui {
    fn go(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

impl Translator for Ui {
    fn t(&self, key: &str) -> String {
        key.to_string()
    }
}
