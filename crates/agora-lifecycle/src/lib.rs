//! Agora Lifecycle - Space state transitions.
//!
//! Named mutations (publish, start, finish, delete, visibility changes,
//! participation) that call the remote API and keep the client cache
//! consistent through the optimistic-update protocol: speculative write
//! first, rollback on rejection, invalidation on success.
//!
//! The UI collaborators (toasts, popups, navigation, translation, the
//! incentive contract driver) appear only as traits in [`surface`]; the
//! [`actions`] layer funnels every operation's outcome into them and never
//! re-throws past that boundary.

pub mod actions;
pub mod error;
pub mod store;
pub mod surface;

pub use actions::LayoutActions;
pub use error::{Error, Result};
pub use store::SpaceStore;
pub use surface::{
    IncentiveSelector, Navigator, PopupContent, PopupService, Route, SelectorError, ToastService,
    Translator,
};
