// Account-group role endpoints
//
// Reads are enveloped under `roles`; create and update answer with the
// bare role object.

use reqwest::StatusCode;
use tracing::debug;

use crate::client::Client;
use crate::codec;
use crate::error::Error;
use crate::models::AccountGroupRole;
use crate::normalize::{self, ROLES_KEY};

impl Client {
    /// List all roles in the account group.
    ///
    /// `GET /roles`
    pub async fn get_roles(&self) -> Result<Vec<AccountGroupRole>, Error> {
        let resp = self.get("/roles").await?;
        normalize::decode_envelope(&resp.body, ROLES_KEY)
    }

    /// Get a single role by id.
    ///
    /// `GET /roles/{id}`
    pub async fn get_role(&self, id: i64) -> Result<AccountGroupRole, Error> {
        let resp = self.get(&format!("/roles/{id}")).await?;
        normalize::first(normalize::decode_envelope(&resp.body, ROLES_KEY)?, "roles")
    }

    /// Create a role.
    ///
    /// `POST /roles/new`, expects `201 Created`.
    pub async fn create_role(&self, role: &AccountGroupRole) -> Result<AccountGroupRole, Error> {
        debug!(name = ?role.role_name, "creating role");
        let resp = self.post("/roles/new", Some(codec::encode(role)?)).await?;
        resp.expect_status(StatusCode::CREATED, "create role")?;
        codec::decode(&resp.body)
    }

    /// Update a role.
    ///
    /// `POST /roles/{id}/update`, expects `200 OK`.
    pub async fn update_role(
        &self,
        id: i64,
        role: &AccountGroupRole,
    ) -> Result<AccountGroupRole, Error> {
        debug!(id, "updating role");
        let resp = self
            .post(&format!("/roles/{id}/update"), Some(codec::encode(role)?))
            .await?;
        resp.expect_status(StatusCode::OK, "update role")?;
        codec::decode(&resp.body)
    }

    /// Delete a role.
    ///
    /// `POST /roles/{id}/delete`, expects `204 No Content`.
    pub async fn delete_role(&self, id: i64) -> Result<(), Error> {
        debug!(id, "deleting role");
        let resp = self.post(&format!("/roles/{id}/delete"), None).await?;
        resp.expect_status(StatusCode::NO_CONTENT, "delete role")
    }
}
