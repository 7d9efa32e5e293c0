//! Space model - the central collaborative entity.
//!
//! A Space is a poll, deliberation thread, or similar unit attached to a
//! post. The struct mirrors the `GET /v3/spaces/{pk}` response; derived
//! predicates (`is_draft`, `is_started`, ...) are computed, never stored.

use crate::permissions;
use crate::requirement::Requirement;
use crate::visibility::Visibility;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a Space.
///
/// Transitions are monotonic: Waiting → InProgress → Finished. A missing
/// status means the lifecycle has not begun or does not apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpaceStatus {
    Waiting,
    InProgress,
    Finished,
}

impl SpaceStatus {
    /// Position in the lifecycle order, for monotonicity checks.
    pub fn rank(self) -> u8 {
        match self {
            SpaceStatus::Waiting => 0,
            SpaceStatus::InProgress => 1,
            SpaceStatus::Finished => 2,
        }
    }

    /// Whether moving from `self` to `next` goes forward in the lifecycle.
    pub fn can_advance_to(self, next: SpaceStatus) -> bool {
        next.rank() > self.rank()
    }
}

/// Publication state. Draft → Published only; there is no un-publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublishState {
    Draft,
    Published,
}

/// Discriminator for the Space flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpaceType {
    Deliberation,
    Poll,
    Notice,
    Dao,
    SprintLeague,
}

/// Reward multiplier configuration. Context only; not part of gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoosterType {
    NoBoost,
    X2,
    X10,
    X100,
}

/// A collaborative Space attached to a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    /// Partition key (primary id).
    pub pk: String,

    /// Sort key; distinguishes sub-items under a parent partition.
    pub sk: String,

    pub title: String,

    #[serde(default)]
    pub content: String,

    /// Millisecond timestamps.
    pub created_at: i64,
    pub updated_at: i64,

    pub space_type: SpaceType,

    /// Lifecycle status; `None` means not yet started/applicable.
    #[serde(default)]
    pub status: Option<SpaceStatus>,

    pub publish_state: PublishState,

    pub visibility: Visibility,

    #[serde(default)]
    pub booster: Option<BoosterType>,

    /// Capability bits for the current viewer (see [`permissions`]).
    #[serde(default)]
    pub permissions: i64,

    pub author_display_name: String,
    pub author_username: String,
    #[serde(default)]
    pub author_profile_url: String,

    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub comments: i64,
    #[serde(default)]
    pub shares: i64,

    /// Whether the current viewer has participated.
    #[serde(default)]
    pub participated: bool,

    /// Whether the current viewer is eligible to participate right now.
    #[serde(default)]
    pub can_participate: bool,

    /// Participants appear under a per-Space alias instead of their own
    /// profile.
    #[serde(default)]
    pub anonymous_participation: bool,

    /// New participation is blocked; set once the session has started.
    #[serde(default)]
    pub block_participate: bool,

    /// Whether the admin may toggle visibility while in progress.
    #[serde(default)]
    pub change_visibility: bool,

    /// Participation quota and how many seats remain.
    #[serde(default)]
    pub quota: i64,
    #[serde(default)]
    pub remains: i64,

    /// Alias identity shown for anonymous participants.
    #[serde(default)]
    pub participant_display_name: Option<String>,
    #[serde(default)]
    pub participant_profile_url: Option<String>,
    #[serde(default)]
    pub participant_username: Option<String>,

    /// Ordered gating tasks; consumed in ascending `order`.
    #[serde(default)]
    pub requirements: Vec<Requirement>,
}

impl Space {
    /// The Space has not been published yet.
    pub fn is_draft(&self) -> bool {
        self.publish_state == PublishState::Draft
    }

    /// The Space is visible to everyone.
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    /// The session has started: participation is closed to newcomers.
    pub fn is_started(&self) -> bool {
        self.block_participate
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == Some(SpaceStatus::InProgress)
    }

    pub fn is_finished(&self) -> bool {
        self.status == Some(SpaceStatus::Finished)
    }

    /// Whether any gating requirement is still unsatisfied.
    pub fn have_pre_tasks(&self) -> bool {
        self.requirements.iter().any(|r| !r.responded)
    }

    /// Whether the viewer holds the space-admin capability.
    pub fn is_admin(&self) -> bool {
        self.permissions & permissions::SPACE_ADMIN != 0
    }

    /// Requirements sorted ascending by `order`.
    pub fn sorted_requirements(&self) -> Vec<Requirement> {
        let mut reqs = self.requirements.clone();
        reqs.sort_by_key(|r| r.order);
        reqs
    }
}
