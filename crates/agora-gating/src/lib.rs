//! Agora Gating - who gets into a Space, and what they see first.
//!
//! Controllers are pure state machines: the hosting view owns the struct,
//! calls transition methods, and re-renders from the resulting state. No
//! controller holds reactive handles or hidden mutability.
//!
//! # Components
//!
//! - [`RequirementFlow`] - sequential cursor over a Space's gating tasks
//! - [`AutoParticipation`] - one-shot silent participation attempt
//! - [`admin_actions`] - ordered admin action derivation
//! - [`menus`] - static side-menu tables per Space type
//! - [`LayoutController`] - composition consumed by the Space layout

pub mod admin;
pub mod auto;
pub mod flow;
pub mod layout;
pub mod menus;

pub use admin::{admin_actions, AdminAction};
pub use auto::{AutoOutcome, AutoParticipation};
pub use flow::{submit_pre_poll, Gate, GateError, RequirementFlow};
pub use layout::{
    participant_profile, pre_task_required, role_for, LayoutController, Role, ViewerProfile,
};
pub use menus::{assemble, menus_for, MenuLabel, MenuTarget, SideMenu};
