//! Agora Client - REST access to the spaces API.
//!
//! The transport seam is the [`SpaceApi`] trait: everything above it
//! (lifecycle operations, gating flows) talks to the trait, and
//! [`RestClient`] is the production implementation speaking JSON over
//! HTTPS to the versioned `/v3` API.

pub mod api;
pub mod config;
pub mod error;
pub mod rest;

pub use api::{
    IncentiveCandidate, IncentiveCandidates, PollResponseRequest, PublishRequest, SpaceApi,
    SpacePatch,
};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use rest::RestClient;
