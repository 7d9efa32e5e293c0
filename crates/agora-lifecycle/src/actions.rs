//! Action layer - lifecycle operations as user-facing handlers.
//!
//! Wraps each store mutation with its toast notifications and closes any
//! open popup whatever the outcome. Errors stop here: they become
//! notifications and are never re-thrown to the hosting view.

use crate::store::SpaceStore;
use crate::surface::{
    IncentiveSelector, Navigator, PopupContent, PopupService, Route, ToastService, Translator,
};
use agora_model::Visibility;
use std::sync::Arc;

/// Handlers behind the layout's admin/viewer actions.
pub struct LayoutActions {
    store: Arc<SpaceStore>,
    selector: Arc<dyn IncentiveSelector>,
    toast: Arc<dyn ToastService>,
    popup: Arc<dyn PopupService>,
    navigator: Arc<dyn Navigator>,
    i18n: Arc<dyn Translator>,
}

impl LayoutActions {
    pub fn new(
        store: Arc<SpaceStore>,
        selector: Arc<dyn IncentiveSelector>,
        toast: Arc<dyn ToastService>,
        popup: Arc<dyn PopupService>,
        navigator: Arc<dyn Navigator>,
        i18n: Arc<dyn Translator>,
    ) -> Self {
        Self {
            store,
            selector,
            toast,
            popup,
            navigator,
            i18n,
        }
    }

    pub fn store(&self) -> &Arc<SpaceStore> {
        &self.store
    }

    fn report(&self, outcome: crate::Result<()>, context: &str, ok_key: &str, err_key: &str) {
        match outcome {
            Ok(()) => self.toast.success(&self.i18n.t(ok_key)),
            Err(err) => {
                tracing::error!(error = %err, "{context} failed");
                self.toast.error(&self.i18n.t(err_key));
            }
        }
    }

    // --- Confirmation popups ---

    pub fn open_publish(&self) {
        self.popup.open(PopupContent::Publish);
    }

    pub fn open_start(&self) {
        self.popup.open(PopupContent::Start);
    }

    pub fn open_delete(&self, space_name: &str) {
        self.popup.open(PopupContent::Delete {
            space_name: space_name.to_string(),
        });
    }

    // --- Lifecycle handlers ---

    pub async fn publish(&self, pk: &str, visibility: Visibility) {
        let outcome = self.store.publish(pk, visibility).await;
        self.report(
            outcome,
            "publish space",
            "toast_publish_success",
            "toast_publish_failed",
        );
        self.popup.close();
    }

    pub async fn start(&self, pk: &str, block: bool) {
        let outcome = self.store.start(pk, block).await;
        self.report(
            outcome,
            "start space",
            "toast_start_success",
            "toast_start_failed",
        );
        self.popup.close();
    }

    pub async fn finish(&self, pk: &str, block: bool) {
        let outcome = self.store.finish(pk, block, self.selector.as_ref()).await;
        self.report(
            outcome,
            "finish space",
            "toast_finish_success",
            "toast_finish_failed",
        );
        self.popup.close();
    }

    pub async fn delete(&self, pk: &str) {
        match self.store.delete(pk).await {
            Ok(()) => {
                self.navigator.go(Route::Home);
                self.toast.success(&self.i18n.t("toast_delete_success"));
            }
            Err(err) => {
                tracing::error!(error = %err, "delete space failed");
                self.toast.error(&self.i18n.t("toast_delete_failed"));
            }
        }
        self.popup.close();
    }

    pub async fn change_to_private(&self, pk: &str) {
        let outcome = self.store.update_visibility(pk, Visibility::Private).await;
        self.report(
            outcome,
            "change visibility",
            "toast_visibility_success",
            "toast_visibility_failed",
        );
        self.popup.close();
    }

    pub async fn change_to_public(&self, pk: &str) {
        let outcome = self.store.update_visibility(pk, Visibility::Public).await;
        self.report(
            outcome,
            "change visibility",
            "toast_visibility_success",
            "toast_visibility_failed",
        );
        self.popup.close();
    }

    pub async fn set_anonymous_participation(&self, pk: &str, anonymous: bool) {
        let outcome = self
            .store
            .update_anonymous_participation(pk, anonymous)
            .await;
        self.report(
            outcome,
            "update anonymous participation",
            "toast_anonymous_success",
            "toast_anonymous_failed",
        );
        self.popup.close();
    }

    // --- Viewer/participant handlers (no popup involved) ---

    pub async fn participate(&self, pk: &str, verifiable_presentation: &str) {
        let outcome = self.store.participate(pk, verifiable_presentation).await;
        self.report(
            outcome,
            "participate in space",
            "toast_participate_success",
            "toast_participate_failed",
        );
    }

    pub async fn share(&self, pk: &str) {
        let outcome = self.store.share(pk).await;
        self.report(
            outcome,
            "share space",
            "toast_share_success",
            "toast_share_failed",
        );
    }

    pub async fn update_title(&self, pk: &str, title: &str) {
        if let Err(err) = self.store.update_title(pk, title).await {
            tracing::error!(error = %err, "update title failed");
            self.toast
                .error(&format!("{}: {err}", self.i18n.t("toast_update_title_failed")));
            return;
        }
        self.toast
            .success(&self.i18n.t("toast_update_title_success"));
    }

    pub fn go_to_credentials(&self) {
        self.navigator.go(Route::Credentials);
    }
}
