//! Auto-participation - a one-shot silent join attempt.
//!
//! When an eligible viewer lands on a Space, the client tries to
//! participate once on their behalf. The guard flags are plain state, set
//! before the request suspends, so repeated invocations from re-renders
//! cannot fire a second request. A failed attempt opens the authorization
//! prompt and is never retried automatically.

use agora_lifecycle::{PopupContent, PopupService, SpaceStore};
use agora_model::Space;

/// What a run of the controller decided or observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoOutcome {
    /// The viewer cannot auto-participate here.
    Ineligible,
    /// The single attempt has already fired in this lifetime.
    AlreadyAttempted,
    /// A participation request is still in flight.
    InFlight,
    /// The silent attempt succeeded; the cache already reflects it.
    Participated,
    /// The attempt failed; the authorization prompt has been opened.
    AuthorizationRequired,
}

/// One-shot participation controller, owned by the hosting view for the
/// lifetime of one Space visit.
#[derive(Debug, Default)]
pub struct AutoParticipation {
    attempted: bool,
    in_flight: bool,
}

impl AutoParticipation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempted(&self) -> bool {
        self.attempted
    }

    /// Attempt participation if eligible and not yet attempted.
    pub async fn run(
        &mut self,
        space: &Space,
        store: &SpaceStore,
        popup: &dyn PopupService,
        verifiable_presentation: &str,
    ) -> AutoOutcome {
        if !space.can_participate {
            return AutoOutcome::Ineligible;
        }
        if self.in_flight {
            return AutoOutcome::InFlight;
        }
        if self.attempted {
            return AutoOutcome::AlreadyAttempted;
        }

        // Both flags go up before the request suspends.
        self.attempted = true;
        self.in_flight = true;

        let result = store.participate(&space.pk, verifiable_presentation).await;
        self.in_flight = false;

        match result {
            Ok(()) => {
                tracing::debug!(pk = %space.pk, "auto-participation succeeded");
                AutoOutcome::Participated
            }
            Err(err) => {
                tracing::warn!(pk = %space.pk, error = %err, "auto-participation failed");
                popup.open(PopupContent::Authorize);
                AutoOutcome::AuthorizationRequired
            }
        }
    }
}
