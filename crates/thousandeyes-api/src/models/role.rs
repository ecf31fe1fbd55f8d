// Account-group role records from `/roles`.

use serde::{Deserialize, Serialize};

use crate::codec::{FieldSpec, IntBoolRecord};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountGroupRole {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_management_permissions: Option<bool>,
    /// Built-in roles cannot be modified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builtin: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<Permission>>,
}

impl IntBoolRecord for AccountGroupRole {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::int_bool("hasManagementPermissions"),
        FieldSpec::int_bool("builtin"),
        FieldSpec::record::<Permission>("permissions"),
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_management_permission: Option<bool>,
}

impl IntBoolRecord for Permission {
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::int_bool("isManagementPermission")];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::test_support::{assert_registry_matches, assert_round_trip, flag_combinations};

    fn flagged_role(flags: &[Option<bool>]) -> AccountGroupRole {
        AccountGroupRole {
            role_name: Some("Operators".into()),
            role_id: Some(1140),
            has_management_permissions: flags[0],
            builtin: flags[1],
            permissions: Some(vec![
                Permission {
                    permission_id: Some(11),
                    label: Some("View tests".into()),
                    is_management_permission: flags[2],
                },
                Permission {
                    permission_id: Some(12),
                    ..Permission::default()
                },
            ]),
        }
    }

    #[test]
    fn every_flag_combination_round_trips() {
        for flags in flag_combinations(3) {
            assert_round_trip(&flagged_role(&flags));
        }
    }

    #[test]
    fn registry_covers_every_flag() {
        let mut role = flagged_role(&[Some(true), Some(false), Some(true)]);
        // Every permission must carry the flag for the presence check.
        role.permissions = Some(vec![Permission {
            permission_id: Some(11),
            label: None,
            is_management_permission: Some(false),
        }]);
        assert_registry_matches(&role);
    }
}
