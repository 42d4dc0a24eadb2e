use std::collections::{HashMap, HashSet};

use super::identity::Identity;
use super::{permissions, roles};

/// Static mapping from permission name to the roles that grant it. Built
/// once at startup and shared read-only; tests may construct their own
/// table via [`PolicyTable::new`] and swap it wholesale.
#[derive(Debug, Clone)]
pub struct PolicyTable {
    grants: HashMap<String, HashSet<String>>,
}

impl PolicyTable {
    pub fn new(grants: HashMap<String, HashSet<String>>) -> Self {
        Self { grants }
    }

    pub fn roles_for(&self, permission: &str) -> Option<&HashSet<String>> {
        self.grants.get(permission)
    }

    /// Whether `identity` holds `permission`. Admin bypasses the table;
    /// every unknown input denies.
    pub fn allows(&self, identity: &Identity, permission: &str) -> bool {
        if identity.is_admin() {
            return true;
        }

        if permission.is_empty() || identity.roles.is_empty() {
            return false;
        }

        let Some(granting_roles) = self.roles_for(permission) else {
            tracing::debug!(
                user = %identity.name,
                permission = %permission,
                "unknown permission denied"
            );
            return false;
        };

        granting_roles.iter().any(|role| identity.has_role(role))
    }
}

impl Default for PolicyTable {
    fn default() -> Self {
        let entries: [(&str, &[&str]); 8] = [
            (
                permissions::CAN_EXPORT_MESSAGES,
                &[roles::NATIONAL_ADMIN, roles::DISTRICT_ADMIN, roles::ANALYTICS],
            ),
            (permissions::CAN_EXPORT_AUDIT, &[roles::NATIONAL_ADMIN]),
            (permissions::CAN_EXPORT_FEEDBACK, &[roles::NATIONAL_ADMIN]),
            (
                permissions::CAN_EXPORT_CONTACTS,
                &[roles::NATIONAL_ADMIN, roles::DISTRICT_ADMIN],
            ),
            (
                permissions::CAN_VIEW_ANALYTICS,
                &[roles::NATIONAL_ADMIN, roles::DISTRICT_ADMIN, roles::ANALYTICS],
            ),
            (
                permissions::CAN_VIEW_DATA_RECORDS,
                &[roles::NATIONAL_ADMIN, roles::DISTRICT_ADMIN, roles::ANALYTICS],
            ),
            (
                permissions::CAN_VIEW_UNALLOCATED_DATA_RECORDS,
                &[roles::NATIONAL_ADMIN, roles::DISTRICT_ADMIN],
            ),
            (
                permissions::CAN_EDIT,
                &[roles::NATIONAL_ADMIN, roles::DISTRICT_ADMIN],
            ),
        ];

        let grants = entries
            .into_iter()
            .map(|(permission, granted)| {
                (
                    permission.to_string(),
                    granted.iter().map(|role| role.to_string()).collect(),
                )
            })
            .collect();

        Self { grants }
    }
}
