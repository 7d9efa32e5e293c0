//! Space store - the cache-coupled mutation layer.
//!
//! All writers to the shared Space cache go through here. Each mutation
//! follows the same wiring: speculative cache write, remote call, then
//! either invalidation (success) or rollback (failure). Preconditions are
//! not re-validated locally; the server is the authority.

use crate::error::Result;
use crate::surface::IncentiveSelector;
use agora_cache::{Cache, Rollback};
use agora_client::{IncentiveCandidates, SpaceApi, SpacePatch};
use agora_model::{Space, SpaceStatus, Visibility};
use std::convert::Infallible;
use std::sync::Arc;

/// Client-side store for Spaces and their incentive candidates.
pub struct SpaceStore {
    api: Arc<dyn SpaceApi>,
    spaces: Cache<Space>,
    incentives: Cache<IncentiveCandidates>,
}

impl SpaceStore {
    pub fn new(api: Arc<dyn SpaceApi>) -> Self {
        Self {
            api,
            spaces: Cache::new(),
            incentives: Cache::new(),
        }
    }

    /// The underlying Space cache (read access for controllers).
    pub fn spaces(&self) -> &Cache<Space> {
        &self.spaces
    }

    /// Cached Space, fetching on a miss.
    pub async fn space(&self, pk: &str) -> Result<Space> {
        if let Some(space) = self.spaces.get(pk) {
            return Ok(space);
        }
        self.refresh_space(pk).await
    }

    /// Authoritative refetch, replacing the cache entry.
    pub async fn refresh_space(&self, pk: &str) -> Result<Space> {
        let space = self.api.fetch_space(pk).await?;
        self.spaces.insert(pk, space.clone());
        Ok(space)
    }

    /// Cached incentive candidates, fetching on a miss.
    pub async fn incentive_candidates(&self, pk: &str) -> Result<IncentiveCandidates> {
        if let Some(candidates) = self.incentives.get(pk) {
            return Ok(candidates);
        }
        let candidates = self.api.incentive_candidates(pk).await?;
        self.incentives.insert(pk, candidates.clone());
        Ok(candidates)
    }

    /// Speculative field update; infallible transforms only.
    fn speculate(&self, pk: &str, mutate: impl FnOnce(&mut Space)) -> Rollback<Space> {
        let applied = self.spaces.apply(pk, |space| {
            let mut next = space.clone();
            mutate(&mut next);
            Ok::<_, Infallible>(next)
        });
        match applied {
            Ok(handle) => handle,
            Err(never) => match never {},
        }
    }

    async fn settle(&self, pk: &str, undo: Rollback<Space>, outcome: Result<()>) -> Result<()> {
        match outcome {
            Ok(()) => {
                self.spaces.invalidate(pk);
                Ok(())
            }
            Err(err) => {
                // Rollback strictly precedes surfacing the error.
                undo.rollback();
                Err(err)
            }
        }
    }

    /// Publish a draft Space under the chosen visibility.
    pub async fn publish(&self, pk: &str, visibility: Visibility) -> Result<()> {
        let undo = self.speculate(pk, |space| {
            space.publish_state = agora_model::PublishState::Published;
            space.visibility = visibility.clone();
        });
        let outcome = self
            .api
            .publish_space(pk, visibility)
            .await
            .map_err(Into::into);
        self.settle(pk, undo, outcome).await
    }

    /// Start the session, optionally blocking further participation.
    pub async fn start(&self, pk: &str, block: bool) -> Result<()> {
        let undo = self.speculate(pk, |space| {
            space.status = Some(SpaceStatus::InProgress);
        });
        let outcome = self
            .api
            .patch_space(pk, SpacePatch::block_participate(block))
            .await
            .map_err(Into::into);
        self.settle(pk, undo, outcome).await
    }

    /// Finish the Space.
    ///
    /// Two remote phases: first the incentive candidates are fetched and,
    /// when a reward contract is configured and candidates exist, the
    /// external selector is driven and its winners recorded; second the
    /// Space itself is patched finished. The speculative status write
    /// happens only after both phases succeed.
    pub async fn finish(
        &self,
        pk: &str,
        block: bool,
        selector: &dyn IncentiveSelector,
    ) -> Result<()> {
        let candidates = self.api.incentive_candidates(pk).await?;

        if let Some(contract_address) = &candidates.incentive_address {
            if !candidates.candidates.is_empty() {
                tracing::debug!(
                    pk,
                    candidates = candidates.candidates.len(),
                    "driving incentive selection"
                );
                let winners = selector
                    .select_winners(contract_address, &candidates.candidates)
                    .await?;
                self.api.record_incentive_winners(pk, winners).await?;
            }
        }

        let mut patch = SpacePatch::finished(true);
        patch.block_participate = Some(block);
        self.api.patch_space(pk, patch).await?;

        let _committed = self.speculate(pk, |space| {
            space.status = Some(SpaceStatus::Finished);
        });
        self.incentives.invalidate(pk);
        Ok(())
    }

    /// Delete the Space. No speculative write: the entity ceases to exist.
    pub async fn delete(&self, pk: &str) -> Result<()> {
        self.api.delete_space(pk).await?;
        self.spaces.invalidate(pk);
        self.incentives.invalidate(pk);
        Ok(())
    }

    pub async fn update_visibility(&self, pk: &str, visibility: Visibility) -> Result<()> {
        let undo = self.speculate(pk, |space| {
            space.visibility = visibility.clone();
        });
        let outcome = self
            .api
            .patch_space(pk, SpacePatch::visibility(visibility))
            .await
            .map_err(Into::into);
        self.settle(pk, undo, outcome).await
    }

    pub async fn update_anonymous_participation(&self, pk: &str, anonymous: bool) -> Result<()> {
        let undo = self.speculate(pk, |space| {
            space.anonymous_participation = anonymous;
        });
        let outcome = self
            .api
            .patch_space(pk, SpacePatch::anonymous_participation(anonymous))
            .await
            .map_err(Into::into);
        self.settle(pk, undo, outcome).await
    }

    pub async fn update_title(&self, pk: &str, title: &str) -> Result<()> {
        let undo = self.speculate(pk, |space| {
            space.title = title.to_string();
        });
        let outcome = self
            .api
            .patch_space(pk, SpacePatch::title(title))
            .await
            .map_err(Into::into);
        self.settle(pk, undo, outcome).await
    }

    /// Join the Space as a participant.
    ///
    /// The cache write happens after the server accepts, so there is no
    /// rollback path; the entry stays in place for the hosting view.
    pub async fn participate(&self, pk: &str, verifiable_presentation: &str) -> Result<()> {
        self.api.participate(pk, verifiable_presentation).await?;
        let _committed = self.speculate(pk, |space| {
            space.participated = true;
            space.can_participate = false;
        });
        Ok(())
    }

    /// Share the Space, counting the share optimistically.
    pub async fn share(&self, pk: &str) -> Result<()> {
        let undo = self.speculate(pk, |space| {
            space.shares += 1;
        });
        let outcome = self.api.share_space(pk).await.map_err(Into::into);
        self.settle(pk, undo, outcome).await
    }
}
