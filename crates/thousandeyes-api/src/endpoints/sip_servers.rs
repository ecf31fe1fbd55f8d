// SIP-server test endpoints
//
// Reads go through `/tests/{id}`; writes through `/tests/sip-server/...`.
// Every response body is normalized so flattened credentials end up in
// `target_sip_credentials`.

use reqwest::StatusCode;
use tracing::debug;

use crate::client::Client;
use crate::codec;
use crate::error::Error;
use crate::models::SipServer;
use crate::normalize;

impl Client {
    /// Get a SIP-server test by id.
    ///
    /// `GET /tests/{id}`
    pub async fn get_sip_server(&self, id: i64) -> Result<SipServer, Error> {
        let resp = self.get(&format!("/tests/{id}")).await?;
        normalize::first(normalize::decode_sip_servers(&resp.body)?, "tests")
    }

    /// Create a SIP-server test.
    ///
    /// `POST /tests/sip-server/new`, expects `201 Created`.
    pub async fn create_sip_server(&self, test: &SipServer) -> Result<SipServer, Error> {
        debug!(name = ?test.test_name, "creating sip-server test");
        let resp = self
            .post("/tests/sip-server/new", Some(codec::encode(test)?))
            .await?;
        resp.expect_status(StatusCode::CREATED, "create sip-server test")?;
        normalize::first(normalize::decode_sip_servers(&resp.body)?, "tests")
    }

    /// Update a SIP-server test.
    ///
    /// `POST /tests/sip-server/{id}/update`, expects `200 OK`.
    pub async fn update_sip_server(&self, id: i64, test: &SipServer) -> Result<SipServer, Error> {
        debug!(id, "updating sip-server test");
        let resp = self
            .post(
                &format!("/tests/sip-server/{id}/update"),
                Some(codec::encode(test)?),
            )
            .await?;
        resp.expect_status(StatusCode::OK, "update sip-server test")?;
        normalize::first(normalize::decode_sip_servers(&resp.body)?, "tests")
    }

    /// Delete a SIP-server test.
    ///
    /// `POST /tests/sip-server/{id}/delete`, expects `204 No Content`.
    pub async fn delete_sip_server(&self, id: i64) -> Result<(), Error> {
        debug!(id, "deleting sip-server test");
        let resp = self
            .post(&format!("/tests/sip-server/{id}/delete"), None)
            .await?;
        resp.expect_status(StatusCode::NO_CONTENT, "delete sip-server test")
    }
}
