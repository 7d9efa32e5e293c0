//! Requirement-gating flow.
//!
//! A Space's requirements form an ordered sequence of gates. The flow
//! holds a single cursor, initialized to the first unsatisfied
//! requirement, and only ever moves forward - gate N+1 is never presented
//! before gate N's completion has been observed. While any gate is
//! pending, the surrounding layout hides itself.

use agora_client::SpaceApi;
use agora_model::{Answer, AnswerValidationError, Poll, Requirement, RequirementKind, Space};
use thiserror::Error;

/// What the current gate presents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    /// Answer collection for the poll at `related_pk`/`related_sk`.
    PrePoll {
        related_pk: String,
        related_sk: String,
    },
    /// A requirement kind this client cannot service; renders nothing.
    Blank,
}

/// Sequential cursor over a Space's gating requirements.
#[derive(Debug, Clone)]
pub struct RequirementFlow {
    requirements: Vec<Requirement>,
    cursor: usize,
}

impl RequirementFlow {
    /// Build the flow; requirements are evaluated in ascending `order` and
    /// the cursor starts at the first unresponded one.
    pub fn new(mut requirements: Vec<Requirement>) -> Self {
        requirements.sort_by_key(|r| r.order);
        let cursor = requirements
            .iter()
            .position(|r| !r.responded)
            .unwrap_or(requirements.len());
        Self {
            requirements,
            cursor,
        }
    }

    pub fn from_space(space: &Space) -> Self {
        Self::new(space.requirements.clone())
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The requirement currently gating access, if any.
    pub fn current(&self) -> Option<&Requirement> {
        self.requirements.get(self.cursor)
    }

    /// Gate content for the current requirement; `None` once complete.
    pub fn gate(&self) -> Option<Gate> {
        let requirement = self.current()?;
        Some(match requirement.kind {
            RequirementKind::PrePoll => Gate::PrePoll {
                related_pk: requirement.related_pk.clone(),
                related_sk: requirement.related_sk.clone(),
            },
            RequirementKind::Unknown => Gate::Blank,
        })
    }

    /// Move past the current gate. Only call after its completion has
    /// been confirmed.
    pub fn advance(&mut self) {
        if self.cursor < self.requirements.len() {
            self.cursor += 1;
        }
    }

    /// Step over requirements this client cannot service, preserving the
    /// fall-through behavior for unknown kinds.
    pub fn skip_unserviceable(&mut self) {
        while matches!(
            self.current().map(|r| &r.kind),
            Some(RequirementKind::Unknown)
        ) {
            tracing::warn!(
                sk = %self.requirements[self.cursor].sk,
                "skipping unserviceable requirement"
            );
            self.cursor += 1;
        }
    }

    /// All gates satisfied (or none existed).
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.requirements.len()
    }

    /// The layout stays hidden exactly while gating is active.
    pub fn should_hide_layout(&self) -> bool {
        !self.is_complete()
    }
}

/// Why a gate submission did not advance the flow.
#[derive(Debug, Error)]
pub enum GateError {
    /// The response is locally invalid; nothing was sent.
    #[error(transparent)]
    Validation(#[from] AnswerValidationError),

    /// The server rejected the submission.
    #[error(transparent)]
    Submit(#[from] agora_client::Error),
}

/// Submit answers for the current pre-poll gate.
///
/// Validation runs locally first; an invalid response surfaces in the gate
/// without any network traffic. The cursor advances only on a successful
/// submission, so a failure re-presents the same gate.
///
/// # Panics
///
/// Panics if the current gate is not a pre-poll - that is a caller-contract
/// violation, not a runtime condition.
pub async fn submit_pre_poll(
    api: &dyn SpaceApi,
    flow: &mut RequirementFlow,
    poll: &Poll,
    answers: Vec<Answer>,
) -> Result<(), GateError> {
    let requirement = flow
        .current()
        .expect("submit_pre_poll called with no gate pending");
    assert_eq!(
        requirement.kind,
        RequirementKind::PrePoll,
        "submit_pre_poll called on a non-poll gate"
    );

    poll.validate_answers(&answers)?;

    api.submit_poll_response(&requirement.related_pk, &requirement.related_sk, answers)
        .await?;

    flow.advance();
    Ok(())
}
