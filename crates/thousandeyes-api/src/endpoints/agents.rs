// Agent endpoints
//
// Listing and lookup under `/agents`, plus enterprise cluster membership.

use reqwest::StatusCode;
use tracing::debug;

use crate::client::Client;
use crate::error::Error;
use crate::models::Agent;
use crate::normalize::{self, AGENTS_KEY};

impl Client {
    /// List all agents available to the account group.
    ///
    /// `GET /agents`
    pub async fn get_agents(&self) -> Result<Vec<Agent>, Error> {
        let resp = self.get("/agents").await?;
        normalize::decode_envelope(&resp.body, AGENTS_KEY)
    }

    /// Get a single agent by id.
    ///
    /// `GET /agents/{id}`
    pub async fn get_agent(&self, id: i64) -> Result<Agent, Error> {
        let resp = self.get(&format!("/agents/{id}")).await?;
        normalize::first(normalize::decode_envelope(&resp.body, AGENTS_KEY)?, "agents")
    }

    /// Add agents to an enterprise agent cluster.
    ///
    /// `POST /agents/{cluster}/add-to-cluster` with the agent ids as body.
    pub async fn add_agents_to_cluster(
        &self,
        cluster: i64,
        ids: &[i64],
    ) -> Result<Vec<Agent>, Error> {
        debug!(cluster, ?ids, "adding agents to cluster");
        self.cluster_op(&format!("/agents/{cluster}/add-to-cluster"), ids, "add agents to cluster")
            .await
    }

    /// Remove agents from an enterprise agent cluster.
    ///
    /// `POST /agents/{cluster}/remove-from-cluster`
    pub async fn remove_agents_from_cluster(
        &self,
        cluster: i64,
        ids: &[i64],
    ) -> Result<Vec<Agent>, Error> {
        debug!(cluster, ?ids, "removing agents from cluster");
        self.cluster_op(
            &format!("/agents/{cluster}/remove-from-cluster"),
            ids,
            "remove agents from cluster",
        )
        .await
    }

    async fn cluster_op(
        &self,
        path: &str,
        ids: &[i64],
        action: &'static str,
    ) -> Result<Vec<Agent>, Error> {
        let body = serde_json::to_vec(ids).map_err(|e| Error::Encode(e.to_string()))?;
        let resp = self.post(path, Some(body)).await?;
        resp.expect_status(StatusCode::OK, action)?;
        normalize::decode_envelope(&resp.body, AGENTS_KEY)
    }
}
