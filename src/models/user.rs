use serde::Deserialize;

/// The slice of the `_users` profile document this gateway cares about. A
/// missing `facility_id` means the account carries no facility restriction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserDoc {
    #[serde(default)]
    pub facility_id: Option<String>,
}
