// Records shared between several resource kinds.

use serde::{Deserialize, Serialize};

use crate::codec::{FieldSpec, IntBoolRecord};

// ── Group labels ────────────────────────────────────────────────────

/// Label attached to agents or tests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupLabel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "groupId", skip_serializing_if = "Option::is_none")]
    pub label_id: Option<i64>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub label_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builtin: Option<bool>,
}

impl IntBoolRecord for GroupLabel {
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::int_bool("builtin")];
}

// ── Alert rules ─────────────────────────────────────────────────────

/// Alert rule assigned to a test.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_type: Option<String>,
    /// Applied to new tests automatically.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_on_clear: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_sources: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_sources_pct: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounds_violating_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounds_violating_out_of: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounds_violating_required: Option<i64>,
}

impl IntBoolRecord for AlertRule {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::int_bool("default"),
        FieldSpec::int_bool("notifyOnClear"),
    ];
}

// ── Links and sharing ───────────────────────────────────────────────

/// Hypermedia link returned alongside a test.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
}

impl IntBoolRecord for ApiLink {
    const FIELDS: &'static [FieldSpec] = &[];
}

/// Account group a test is shared with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SharedWithAccount {
    #[serde(default, rename = "aid", skip_serializing_if = "Option::is_none")]
    pub account_group_id: Option<i64>,
    #[serde(default, rename = "name", skip_serializing_if = "Option::is_none")]
    pub account_group_name: Option<String>,
}

impl IntBoolRecord for SharedWithAccount {
    const FIELDS: &'static [FieldSpec] = &[];
}
