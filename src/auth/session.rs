use chrono::{DateTime, Utc};

/// In-memory binding of the running process to one authenticated user.
/// Passed explicitly to whatever needs the current user; there is no
/// process-wide session singleton.
#[derive(Debug, Clone)]
pub struct Session {
    pub username: String,
    pub display_name: String,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn new(username: String, display_name: String) -> Self {
        Self {
            username,
            display_name,
            started_at: Utc::now(),
        }
    }
}
