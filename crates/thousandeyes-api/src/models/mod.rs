// v6 resource records
//
// Every field is optional: absent fields are skipped on serialization and
// default to `None` on deserialization. Boolean-as-integer fields are listed
// in each record's `IntBoolRecord::FIELDS` registry.

pub mod agent;
pub mod common;
pub mod role;
pub mod sip_server;

pub use agent::{Agent, AgentErrorDetails, ClusterMember};
pub use common::{AlertRule, ApiLink, GroupLabel, SharedWithAccount};
pub use role::{AccountGroupRole, Permission};
pub use sip_server::{SipAuthData, SipServer};
