use std::collections::HashSet;

/// The authenticated caller as resolved from the backend session. Only the
/// session resolver constructs one from outside input; it lives for the
/// duration of a single check.
#[derive(Debug, Clone)]
pub struct Identity {
    pub name: String,
    pub roles: HashSet<String>,
}

impl Identity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roles: HashSet::new(),
        }
    }

    pub fn with_roles(mut self, roles: impl IntoIterator<Item = String>) -> Self {
        self.roles = roles.into_iter().collect();
        self
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(super::roles::DB_ADMIN)
    }
}
