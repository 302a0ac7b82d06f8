//! HTTP implementation of the agent backend ports.
//!
//! Thin REST adapter over the agent platform API. Each method maps one port
//! operation to one request; missing records come back as `Ok(None)` so the
//! application layer can distinguish "absent" from transport failure.

use anyhow::{Context, Result, bail};
use atelier_common::{
    Agent, AgentMetadataUpdate, AgentVersion, MarketplaceListing, NewVersionRequest,
    OwnedAgentListing, TemplateListing, VersionSummary,
};
use reqwest::StatusCode;

use crate::application::ports::{AgentReader, AgentWriter, CatalogReader, VersionWriter};

/// REST client for the agent platform API.
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET a single record, mapping 404 to `None`.
    async fn get_optional<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let url = self.url(path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {url} failed"))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = check_status(response, "GET", &url)?;
        let body = response
            .json()
            .await
            .with_context(|| format!("GET {url}: invalid response body"))?;
        Ok(Some(body))
    }

    /// GET a collection.
    async fn get_list<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let url = self.url(path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {url} failed"))?;
        let response = check_status(response, "GET", &url)?;
        response
            .json()
            .await
            .with_context(|| format!("GET {url}: invalid response body"))
    }
}

fn check_status(response: reqwest::Response, method: &str, url: &str) -> Result<reqwest::Response> {
    let status = response.status();
    if !status.is_success() {
        bail!("{method} {url} returned {status}");
    }
    Ok(response)
}

// ── Path builders ─────────────────────────────────────────────────────────────

fn agent_path(agent_id: &str) -> String {
    format!("/agents/{agent_id}")
}

fn versions_path(agent_id: &str) -> String {
    format!("/agents/{agent_id}/versions")
}

fn version_path(agent_id: &str, version_id: &str) -> String {
    format!("/agents/{agent_id}/versions/{version_id}")
}

fn activate_path(agent_id: &str, version_id: &str) -> String {
    format!("/agents/{agent_id}/versions/{version_id}/activate")
}

// ── Port implementations ──────────────────────────────────────────────────────

impl AgentReader for HttpBackend {
    async fn fetch_agent(&self, agent_id: &str) -> Result<Option<Agent>> {
        self.get_optional(&agent_path(agent_id)).await
    }

    async fn fetch_version(
        &self,
        agent_id: &str,
        version_id: &str,
    ) -> Result<Option<AgentVersion>> {
        self.get_optional(&version_path(agent_id, version_id)).await
    }

    async fn list_versions(&self, agent_id: &str) -> Result<Vec<VersionSummary>> {
        self.get_list(&versions_path(agent_id)).await
    }
}

impl AgentWriter for HttpBackend {
    async fn update_agent(&self, agent_id: &str, update: &AgentMetadataUpdate) -> Result<()> {
        let url = self.url(&agent_path(agent_id));
        let response = self
            .client
            .put(&url)
            .json(update)
            .send()
            .await
            .with_context(|| format!("PUT {url} failed"))?;
        check_status(response, "PUT", &url)?;
        Ok(())
    }
}

impl VersionWriter for HttpBackend {
    async fn create_version(
        &self,
        agent_id: &str,
        request: &NewVersionRequest,
    ) -> Result<AgentVersion> {
        let url = self.url(&versions_path(agent_id));
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .with_context(|| format!("POST {url} failed"))?;
        let response = check_status(response, "POST", &url)?;
        response
            .json()
            .await
            .with_context(|| format!("POST {url}: invalid response body"))
    }

    async fn activate_version(&self, agent_id: &str, version_id: &str) -> Result<()> {
        let url = self.url(&activate_path(agent_id, version_id));
        let response = self
            .client
            .put(&url)
            .send()
            .await
            .with_context(|| format!("PUT {url} failed"))?;
        check_status(response, "PUT", &url)?;
        Ok(())
    }
}

impl CatalogReader for HttpBackend {
    async fn list_agents(&self) -> Result<Vec<OwnedAgentListing>> {
        self.get_list("/agents").await
    }

    async fn list_marketplace(&self) -> Result<Vec<MarketplaceListing>> {
        self.get_list("/marketplace/agents").await
    }

    async fn list_templates(&self) -> Result<Vec<TemplateListing>> {
        self.get_list("/templates").await
    }
}
