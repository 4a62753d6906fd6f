use serde::Deserialize;

use crate::common::{CoreError, CoreResult, UserId};

use super::models::{AttendeeRole, RsvpStatus};

/// Organizer's direct grant of membership by user id.
#[derive(Debug, Clone, Deserialize)]
pub struct AddAttendeeInput {
    pub user_id: i64,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    AttendeeRole::Attendee.as_str().to_string()
}

impl AddAttendeeInput {
    pub fn validate(&self) -> CoreResult<(UserId, AttendeeRole)> {
        let user_id = UserId::new(self.user_id);
        if !user_id.is_valid() {
            return Err(CoreError::validation("user_id", "must be a positive integer"));
        }
        let role = parse_role(&self.role)?;
        Ok((user_id, role))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAttendanceInput {
    pub status: String,
}

impl UpdateAttendanceInput {
    pub fn validate(&self) -> CoreResult<RsvpStatus> {
        self.status
            .parse()
            .map_err(|e: anyhow::Error| CoreError::validation("status", e.to_string()))
    }
}

pub fn parse_role(role: &str) -> CoreResult<AttendeeRole> {
    role.parse()
        .map_err(|e: anyhow::Error| CoreError::validation("role", e.to_string()))
}
