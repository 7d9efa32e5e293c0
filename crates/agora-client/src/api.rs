//! The `SpaceApi` transport trait and its request/response bodies.
//!
//! Lifecycle operations and gating flows depend on this trait, not on a
//! concrete HTTP stack; tests substitute an in-memory fake that records
//! calls.

use crate::error::Result;
use agora_model::{Answer, Space, Visibility};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Partial update of a Space. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpacePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_participate: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub anonymous_participation: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl SpacePatch {
    pub fn finished(finished: bool) -> Self {
        Self {
            finished: Some(finished),
            ..Default::default()
        }
    }

    pub fn block_participate(block: bool) -> Self {
        Self {
            block_participate: Some(block),
            ..Default::default()
        }
    }

    pub fn visibility(visibility: Visibility) -> Self {
        Self {
            visibility: Some(visibility),
            ..Default::default()
        }
    }

    pub fn anonymous_participation(anonymous: bool) -> Self {
        Self {
            anonymous_participation: Some(anonymous),
            ..Default::default()
        }
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }
}

/// Body for `POST /v3/spaces/{pk}/publish`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishRequest {
    pub visibility: Visibility,
}

/// Body for `POST /v3/spaces/{pk}/polls/{poll_sk}/responses`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollResponseRequest {
    pub answers: Vec<Answer>,
}

/// One reward candidate with its participation score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncentiveCandidate {
    pub address: String,
    pub score: i64,
}

/// Response of `GET /v3/spaces/{pk}/incentives/candidates`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncentiveCandidates {
    /// Reward contract, when one is configured for the Space.
    #[serde(default)]
    pub incentive_address: Option<String>,

    #[serde(default)]
    pub candidates: Vec<IncentiveCandidate>,
}

/// Remote operations on the spaces API, keyed by Space primary key.
#[async_trait]
pub trait SpaceApi: Send + Sync {
    /// `GET /v3/spaces/{pk}`
    async fn fetch_space(&self, pk: &str) -> Result<Space>;

    /// `PATCH /v3/spaces/{pk}`
    async fn patch_space(&self, pk: &str, patch: SpacePatch) -> Result<()>;

    /// `POST /v3/spaces/{pk}/publish`
    async fn publish_space(&self, pk: &str, visibility: Visibility) -> Result<()>;

    /// `DELETE /v3/spaces/{pk}`
    async fn delete_space(&self, pk: &str) -> Result<()>;

    /// `POST /v3/spaces/{pk}/participate`
    async fn participate(&self, pk: &str, verifiable_presentation: &str) -> Result<()>;

    /// `POST /v3/spaces/{pk}/share`
    async fn share_space(&self, pk: &str) -> Result<()>;

    /// `POST /v3/spaces/{pk}/polls/{poll_sk}/responses`
    async fn submit_poll_response(
        &self,
        pk: &str,
        poll_sk: &str,
        answers: Vec<Answer>,
    ) -> Result<()>;

    /// `GET /v3/spaces/{pk}/incentives/candidates`
    async fn incentive_candidates(&self, pk: &str) -> Result<IncentiveCandidates>;

    /// `POST /v3/spaces/{pk}/incentives/user`
    async fn record_incentive_winners(&self, pk: &str, addresses: Vec<String>) -> Result<()>;
}
