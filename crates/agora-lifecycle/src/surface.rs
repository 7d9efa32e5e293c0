//! Trait seams for the UI and contract collaborators.
//!
//! The core never renders anything: popups and toasts are described by
//! value and handed to whatever presentation layer hosts the client. The
//! incentive selector wraps the external smart-contract call driven during
//! Finish.

use agora_client::IncentiveCandidate;
use async_trait::async_trait;
use thiserror::Error;

/// A destination the host application can route to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Credentials,
    Space(String),
    SpaceRequirements(String),
}

/// What an open popup should present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupContent {
    /// Visibility picker shown before publishing.
    Publish,
    /// Confirmation before starting the session.
    Start,
    /// Confirmation before deleting; carries the Space title for display.
    Delete { space_name: String },
    /// Prompt directing the viewer to acquire the missing credential.
    Authorize,
}

/// Modal presentation chrome.
pub trait PopupService: Send + Sync {
    fn open(&self, content: PopupContent);
    fn close(&self);
}

/// Transient user notifications.
pub trait ToastService: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
}

/// Host-side navigation.
pub trait Navigator: Send + Sync {
    fn go(&self, route: Route);
}

/// Translation lookup.
pub trait Translator: Send + Sync {
    fn t(&self, key: &str) -> String;
}

/// Failure of the external incentive-selection call.
#[derive(Debug, Error)]
#[error("incentive selection failed: {0}")]
pub struct SelectorError(pub String);

/// Drives the on-chain incentive selection for a finished Space.
///
/// Given the reward contract address and the scored candidate list, returns
/// the selected winner addresses to record against the Space.
#[async_trait]
pub trait IncentiveSelector: Send + Sync {
    async fn select_winners(
        &self,
        contract_address: &str,
        candidates: &[IncentiveCandidate],
    ) -> std::result::Result<Vec<String>, SelectorError>;
}
