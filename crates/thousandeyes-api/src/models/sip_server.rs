// SIP-server test records from `/tests`.

use serde::{Deserialize, Serialize};

use crate::codec::{FieldSpec, IntBoolRecord};
use crate::models::agent::Agent;
use crate::models::common::{AlertRule, ApiLink, GroupLabel, SharedWithAccount};

/// SIP-server test.
///
/// Reads return the credential fields flattened onto the test object; see
/// `normalize::decode_sip_servers` for how they are moved back into
/// `target_sip_credentials`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SipServer {
    // ── Common test fields ──
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alerts_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_rules: Option<Vec<AlertRule>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_links: Option<Vec<ApiLink>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupLabel>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_event: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_with_accounts: Option<Vec<SharedWithAccount>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub test_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_share: Option<bool>,

    // ── SIP-server specific ──
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agents: Option<Vec<Agent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bandwidth_measurements: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bgp_measurements: Option<bool>,
    /// Seconds between test rounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtu_measurements: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_measurements: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_path_traces: Option<i64>,
    #[serde(default, rename = "options_regex", skip_serializing_if = "Option::is_none")]
    pub options_regex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_trace_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probe_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub register_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sip_target_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sip_time_limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_sip_credentials: Option<SipAuthData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_public_bgp: Option<bool>,
}

impl SipServer {
    /// Assign an agent to the test by id.
    pub fn add_agent(&mut self, id: i64) {
        self.agents.get_or_insert_with(Vec::new).push(Agent::with_id(id));
    }

    /// Attach an existing alert rule by id.
    pub fn add_alert_rule(&mut self, id: i64) {
        self.alert_rules.get_or_insert_with(Vec::new).push(AlertRule {
            rule_id: Some(id),
            ..AlertRule::default()
        });
    }
}

impl IntBoolRecord for SipServer {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::int_bool("alertsEnabled"),
        FieldSpec::int_bool("enabled"),
        FieldSpec::int_bool("savedEvent"),
        FieldSpec::int_bool("liveShare"),
        FieldSpec::int_bool("bandwidthMeasurements"),
        FieldSpec::int_bool("bgpMeasurements"),
        FieldSpec::int_bool("mtuMeasurements"),
        FieldSpec::int_bool("networkMeasurements"),
        FieldSpec::int_bool("registerEnabled"),
        FieldSpec::int_bool("usePublicBgp"),
        FieldSpec::record::<AlertRule>("alertRules"),
        FieldSpec::record::<GroupLabel>("groups"),
        FieldSpec::record::<Agent>("agents"),
        FieldSpec::record::<SipAuthData>("targetSipCredentials"),
    ];
}

/// Credentials and target of a SIP-server test.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SipAuthData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    /// `TCP`, `TLS` or `UDP`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sip_proxy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sip_registrar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl IntBoolRecord for SipAuthData {
    const FIELDS: &'static [FieldSpec] = &[];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::test_support::{assert_registry_matches, assert_round_trip, flag_combinations};
    use crate::models::agent::{AgentErrorDetails, ClusterMember};

    fn flagged_test(flags: &[Option<bool>]) -> SipServer {
        // Nested records follow the first and last top-level flags.
        let (a, b) = (flags[0], flags[9]);
        SipServer {
            alerts_enabled: flags[0],
            enabled: flags[1],
            saved_event: flags[2],
            live_share: flags[3],
            bandwidth_measurements: flags[4],
            bgp_measurements: flags[5],
            mtu_measurements: flags[6],
            network_measurements: flags[7],
            register_enabled: flags[8],
            use_public_bgp: flags[9],
            test_id: Some(812),
            alert_rules: Some(vec![AlertRule {
                rule_id: Some(5),
                default: a,
                notify_on_clear: b,
                ..AlertRule::default()
            }]),
            groups: Some(vec![GroupLabel {
                label_id: Some(2),
                builtin: b,
                ..GroupLabel::default()
            }]),
            agents: Some(vec![Agent {
                agent_id: Some(9),
                enabled: a,
                verify_ssl_certificates: b,
                keep_browser_cache: a,
                cluster_members: Some(vec![ClusterMember::default()]),
                groups: Some(vec![GroupLabel {
                    builtin: a,
                    ..GroupLabel::default()
                }]),
                error_details: Some(vec![AgentErrorDetails::default()]),
                ..Agent::default()
            }]),
            target_sip_credentials: Some(SipAuthData {
                auth_user: Some("alice".into()),
                port: Some(5060),
                ..SipAuthData::default()
            }),
            ..SipServer::default()
        }
    }

    #[test]
    fn every_flag_combination_round_trips() {
        for flags in flag_combinations(10) {
            assert_round_trip(&flagged_test(&flags));
        }
    }

    #[test]
    fn registry_covers_every_flag() {
        let flags: Vec<_> = (0..10).map(|i| Some(i % 2 == 0)).collect();
        assert_registry_matches(&flagged_test(&flags));
    }

    #[test]
    fn add_agent_creates_list() {
        let mut test = SipServer::default();
        test.add_agent(1);
        test.add_agent(2);
        let ids: Vec<_> = test
            .agents
            .iter()
            .flatten()
            .filter_map(|a| a.agent_id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn add_alert_rule_appends_reference() {
        let mut test = SipServer {
            alert_rules: Some(vec![AlertRule::default()]),
            ..SipServer::default()
        };
        test.add_alert_rule(55);
        let rules = test.alert_rules.unwrap_or_default();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[1].rule_id, Some(55));
        assert_eq!(rules[1].rule_name, None);
    }
}
