//! reqwest-backed implementation of [`SpaceApi`].

use crate::api::{
    IncentiveCandidates, PollResponseRequest, PublishRequest, SpaceApi, SpacePatch,
};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use agora_model::{Answer, Space, Visibility};
use async_trait::async_trait;
use serde::Serialize;

/// HTTP client for the spaces API.
pub struct RestClient {
    config: ClientConfig,
    http: reqwest::Client,
}

/// Platform keys embed `#` (e.g. `SPACE#42`), which would otherwise start a
/// URL fragment.
fn encode_key(key: &str) -> String {
    key.replace('#', "%23")
}

impl RestClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    fn space_url(&self, pk: &str) -> String {
        format!("{}/v3/spaces/{}", self.config.api_url, encode_key(pk))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.header("Authorization", format!("Bearer {key}")),
            None => request,
        }
    }

    async fn expect_success(response: reqwest::Response, what: &str) -> Result<reqwest::Response> {
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::NotFound(what.to_string()));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(%status, what, "spaces API call failed");
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    async fn post_json<B: Serialize>(&self, url: String, body: &B, what: &str) -> Result<()> {
        let response = self.authorize(self.http.post(&url).json(body)).send().await?;
        Self::expect_success(response, what).await?;
        Ok(())
    }
}

#[async_trait]
impl SpaceApi for RestClient {
    async fn fetch_space(&self, pk: &str) -> Result<Space> {
        let url = self.space_url(pk);
        tracing::debug!(pk, "fetching space");
        let response = self.authorize(self.http.get(&url)).send().await?;
        let response = Self::expect_success(response, pk).await?;
        Ok(response.json().await?)
    }

    async fn patch_space(&self, pk: &str, patch: SpacePatch) -> Result<()> {
        let url = self.space_url(pk);
        let response = self
            .authorize(self.http.patch(&url).json(&patch))
            .send()
            .await?;
        Self::expect_success(response, pk).await?;
        Ok(())
    }

    async fn publish_space(&self, pk: &str, visibility: Visibility) -> Result<()> {
        let url = format!("{}/publish", self.space_url(pk));
        self.post_json(url, &PublishRequest { visibility }, pk).await
    }

    async fn delete_space(&self, pk: &str) -> Result<()> {
        let url = self.space_url(pk);
        let response = self.authorize(self.http.delete(&url)).send().await?;
        Self::expect_success(response, pk).await?;
        Ok(())
    }

    async fn participate(&self, pk: &str, verifiable_presentation: &str) -> Result<()> {
        let url = format!("{}/participate", self.space_url(pk));
        let body = serde_json::json!({ "verifiable_presentation": verifiable_presentation });
        self.post_json(url, &body, pk).await
    }

    async fn share_space(&self, pk: &str) -> Result<()> {
        let url = format!("{}/share", self.space_url(pk));
        self.post_json(url, &serde_json::json!({}), pk).await
    }

    async fn submit_poll_response(
        &self,
        pk: &str,
        poll_sk: &str,
        answers: Vec<Answer>,
    ) -> Result<()> {
        let url = format!(
            "{}/polls/{}/responses",
            self.space_url(pk),
            encode_key(poll_sk)
        );
        self.post_json(url, &PollResponseRequest { answers }, pk).await
    }

    async fn incentive_candidates(&self, pk: &str) -> Result<IncentiveCandidates> {
        let url = format!("{}/incentives/candidates", self.space_url(pk));
        let response = self.authorize(self.http.get(&url)).send().await?;
        let response = Self::expect_success(response, pk).await?;
        Ok(response.json().await?)
    }

    async fn record_incentive_winners(&self, pk: &str, addresses: Vec<String>) -> Result<()> {
        let url = format!("{}/incentives/user", self.space_url(pk));
        let body = serde_json::json!({ "incentive_addresses": addresses });
        self.post_json(url, &body, pk).await
    }
}
