//! Admin action derivation.
//!
//! The action list is built base-first with conditional prepends, so the
//! last branch that fires ends up on top. The resulting order is
//! contractual UX priority: finish before start, start before the
//! visibility toggles, delete always last.

use agora_model::{Space, SpaceType};

/// An action a space admin may invoke, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    Finish,
    Start,
    ChangeToPublic,
    ChangeToPrivate,
    Delete,
}

impl AdminAction {
    /// Translation key for the action label.
    pub fn label_key(self) -> &'static str {
        match self {
            AdminAction::Finish => "action_admin_finish",
            AdminAction::Start => "action_admin_start",
            AdminAction::ChangeToPublic => "action_admin_change_to_public",
            AdminAction::ChangeToPrivate => "action_admin_change_to_private",
            AdminAction::Delete => "action_admin_delete",
        }
    }
}

/// Derive the ordered admin actions for the current Space state.
pub fn admin_actions(space: &Space) -> Vec<AdminAction> {
    let mut actions = vec![AdminAction::Delete];

    if space.is_in_progress() && space.is_public() && space.change_visibility {
        actions.insert(0, AdminAction::ChangeToPrivate);
    }

    if space.is_in_progress() && !space.is_public() && space.change_visibility {
        actions.insert(0, AdminAction::ChangeToPublic);
    }

    if space.is_in_progress() && space.space_type == SpaceType::Deliberation {
        actions.insert(0, AdminAction::Start);
    }

    if space.is_started() {
        actions.insert(0, AdminAction::Finish);
    }

    actions
}
