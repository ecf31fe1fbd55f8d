// Agent records from `/agents`.

use serde::{Deserialize, Serialize};

use crate::codec::{FieldSpec, IntBoolRecord};
use crate::models::common::GroupLabel;

/// Cloud or enterprise agent.
///
/// Also used as a bare `{"agentId": N}` reference when assigning agents to
/// a test.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_members: Option<Vec<ClusterMember>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_addresses: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupLabel>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_details: Option<Vec<AgentErrorDetails>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<String>,
    /// `Online`, `Offline` or `Disabled`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_state: Option<String>,
    #[serde(
        default,
        rename = "verifySslCertificate",
        skip_serializing_if = "Option::is_none"
    )]
    pub verify_ssl_certificates: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_browser_cache: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utilization: Option<i64>,
    #[serde(default, rename = "IPV6Policy", skip_serializing_if = "Option::is_none")]
    pub ipv6_policy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_for_tests: Option<String>,
}

impl Agent {
    /// Reference to an existing agent by id.
    pub fn with_id(id: i64) -> Self {
        Self {
            agent_id: Some(id),
            ..Self::default()
        }
    }
}

impl IntBoolRecord for Agent {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::int_bool("enabled"),
        FieldSpec::int_bool("verifySslCertificate"),
        FieldSpec::int_bool("keepBrowserCache"),
        FieldSpec::record::<ClusterMember>("clusterMembers"),
        FieldSpec::record::<GroupLabel>("groups"),
        FieldSpec::record::<AgentErrorDetails>("errorDetails"),
    ];
}

/// Member of an enterprise agent cluster.
///
/// The address and prefix fields are capitalized on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterMember {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "IPAddresses", skip_serializing_if = "Option::is_none")]
    pub ip_addresses: Option<Vec<String>>,
    #[serde(
        default,
        rename = "PublicIPAddresses",
        skip_serializing_if = "Option::is_none"
    )]
    pub public_ip_addresses: Option<Vec<String>>,
    #[serde(default, rename = "Prefix", skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utilization: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_for_tests: Option<String>,
}

impl IntBoolRecord for ClusterMember {
    const FIELDS: &'static [FieldSpec] = &[];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentErrorDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl IntBoolRecord for AgentErrorDetails {
    const FIELDS: &'static [FieldSpec] = &[];
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::codec;
    use crate::codec::test_support::{assert_registry_matches, assert_round_trip, flag_combinations};

    fn flagged_agent(flags: &[Option<bool>]) -> Agent {
        Agent {
            agent_id: Some(3),
            enabled: flags[0],
            verify_ssl_certificates: flags[1],
            keep_browser_cache: flags[2],
            cluster_members: Some(vec![ClusterMember {
                member_id: Some(1),
                ..ClusterMember::default()
            }]),
            groups: Some(vec![GroupLabel {
                label_id: Some(10),
                builtin: flags[0],
                ..GroupLabel::default()
            }]),
            error_details: Some(vec![AgentErrorDetails {
                code: Some("E1".into()),
                description: None,
            }]),
            ..Agent::default()
        }
    }

    #[test]
    fn agent_wire_names_and_flags() {
        let agent = Agent {
            agent_id: Some(42),
            enabled: Some(true),
            verify_ssl_certificates: Some(false),
            ipv6_policy: Some("FORCE_IPV4".into()),
            cluster_members: Some(vec![ClusterMember {
                member_id: Some(7),
                ip_addresses: Some(vec!["10.0.0.7".into()]),
                prefix: Some("10.0.0.0/24".into()),
                ..ClusterMember::default()
            }]),
            groups: Some(vec![GroupLabel {
                name: Some("dc".into()),
                builtin: Some(false),
                ..GroupLabel::default()
            }]),
            ..Agent::default()
        };

        let wire: serde_json::Value =
            serde_json::from_slice(&codec::encode(&agent).unwrap()).unwrap();
        assert_eq!(
            wire,
            json!({
                "agentId": 42,
                "enabled": 1,
                "verifySslCertificate": 0,
                "IPV6Policy": "FORCE_IPV4",
                "clusterMembers": [{
                    "memberId": 7,
                    "IPAddresses": ["10.0.0.7"],
                    "Prefix": "10.0.0.0/24"
                }],
                "groups": [{ "name": "dc", "builtin": 0 }]
            })
        );
    }

    #[test]
    fn reference_agent_serializes_only_id() {
        let wire = codec::encode_value(&Agent::with_id(9)).unwrap();
        assert_eq!(wire, json!({ "agentId": 9 }));
    }

    #[test]
    fn every_flag_combination_round_trips() {
        for flags in flag_combinations(3) {
            assert_round_trip(&flagged_agent(&flags));
        }
    }

    #[test]
    fn registry_covers_every_flag() {
        assert_registry_matches(&flagged_agent(&[Some(true), Some(false), Some(true)]));
    }
}
