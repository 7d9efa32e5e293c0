//! Agora Model - Space Participation Data Model
//!
//! Core data types for collaborative Spaces (polls, deliberations, and
//! similar units attached to posts), their lifecycle attributes, and the
//! ordered gating requirements a viewer must satisfy before full access.
//!
//! # Core Types
//!
//! - [`Space`] - a collaborative unit with lifecycle, visibility, and
//!   participation state
//! - [`Requirement`] - one ordered gating task attached to a Space
//! - [`Poll`] - the sub-resource a `PrePoll` requirement points at
//!
//! # Supporting Types
//!
//! - [`SpaceStatus`] / [`PublishState`] - lifecycle enums with a monotonic
//!   transition order
//! - [`Visibility`] - strict tagged visibility decode (fails closed)
//! - [`SpaceType`] - discriminator for the Space flavors
//!
//! Spaces are never constructed locally from scratch: they deserialize
//! from the remote store and are mutated only through the lifecycle
//! operations in `agora-lifecycle`.

pub mod permissions;
pub mod poll;
pub mod requirement;
pub mod space;
pub mod visibility;

pub use poll::{Answer, AnswerValidationError, Poll, Question};
pub use requirement::{Requirement, RequirementKind};
pub use space::{BoosterType, PublishState, Space, SpaceStatus, SpaceType};
pub use visibility::{Visibility, VisibilityError};
