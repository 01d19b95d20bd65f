use serde::{Deserialize, Serialize};

/// Snapshot of a platform user, fetched fresh per delivery attempt and never
/// cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub tags: Vec<String>,
}

impl UserProfile {
    /// Both name parts, only when each is present and non-blank.
    pub fn names(&self) -> Option<(&str, &str)> {
        let first = self
            .first_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())?;
        let last = self
            .last_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())?;
        Some((first, last))
    }
}
