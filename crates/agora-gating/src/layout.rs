//! Layout controller - what the Space page shows around its content.
//!
//! Pure composition over current Space state: role, profile, menus, admin
//! actions, and the requirement cursor. The hosting view owns the struct
//! and re-renders from it; mutations go through `agora-lifecycle`.

use crate::admin::{admin_actions, AdminAction};
use crate::flow::RequirementFlow;
use crate::menus::{self, SideMenu};
use agora_model::Space;

/// The viewer's relationship to a Space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Participant,
    Viewer,
}

/// Derive the viewer's role from the Space they are looking at.
pub fn role_for(space: &Space) -> Role {
    if space.is_admin() {
        return Role::Admin;
    }
    if space.participated {
        return Role::Participant;
    }
    Role::Viewer
}

/// Identity shown in the participant slot of the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerProfile {
    pub display_name: String,
    pub username: String,
    pub profile_url: Option<String>,
}

/// Pick the profile to display for the viewer.
///
/// Participants of an anonymous Space appear under the per-Space alias the
/// server issued, never their own identity.
pub fn participant_profile(space: &Space, viewer: Option<&ViewerProfile>) -> Option<ViewerProfile> {
    if role_for(space) == Role::Participant && space.anonymous_participation {
        return Some(ViewerProfile {
            display_name: space.participant_display_name.clone().unwrap_or_default(),
            username: space.participant_username.clone().unwrap_or_default(),
            profile_url: space.participant_profile_url.clone(),
        });
    }
    viewer.cloned()
}

/// Whether the layout must route the viewer into the requirement flow.
pub fn pre_task_required(space: &Space) -> bool {
    space.participated && space.have_pre_tasks() && !space.is_admin() && !space.is_finished()
}

/// State consumed by the Space layout.
pub struct LayoutController {
    space: Space,
    flow: RequirementFlow,
}

impl LayoutController {
    pub fn new(space: Space) -> Self {
        let flow = RequirementFlow::from_space(&space);
        Self { space, flow }
    }

    pub fn space(&self) -> &Space {
        &self.space
    }

    /// Replace the Space after a refetch, preserving gating progress the
    /// local cursor has already made.
    pub fn update_space(&mut self, space: Space) {
        let refreshed = RequirementFlow::from_space(&space);
        if refreshed.cursor() > self.flow.cursor() {
            self.flow = refreshed;
        }
        self.space = space;
    }

    pub fn role(&self) -> Role {
        role_for(&self.space)
    }

    pub fn pre_task_required(&self) -> bool {
        pre_task_required(&self.space)
    }

    pub fn admin_actions(&self) -> Vec<AdminAction> {
        admin_actions(&self.space)
    }

    pub fn menus(&self) -> Vec<&'static SideMenu> {
        menus::assemble(&self.space, self.pre_task_required())
    }

    pub fn should_hide_layout(&self) -> bool {
        self.pre_task_required() && self.flow.should_hide_layout()
    }

    pub fn flow(&self) -> &RequirementFlow {
        &self.flow
    }

    pub fn flow_mut(&mut self) -> &mut RequirementFlow {
        &mut self.flow
    }
}
