use serde::Deserialize;

use crate::common::validation::{parse_date, parse_time, require_text};
use crate::common::{CoreResult, UserId};

use super::models::{EventChanges, NewEvent};

/// Request body for creating an event. Dates are `YYYY-MM-DD`, times
/// `HH:MM:SS`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateEventInput {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
}

impl CreateEventInput {
    pub fn into_new_event(self, organizer_id: UserId) -> CoreResult<NewEvent> {
        let title = require_text("title", &self.title)?;
        let location = require_text("location", &self.location)?;
        let date = parse_date(&self.date)?;
        let time = parse_time(&self.time)?;

        Ok(NewEvent::builder()
            .title(title)
            .description(self.description.trim())
            .date(date)
            .time(time)
            .location(location)
            .organizer_id(organizer_id)
            .build())
    }
}

/// Request body for a partial update.
///
/// An omitted field and an empty string both mean "leave unchanged", so a
/// field can never be cleared through this input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEventInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
}

fn provided(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl UpdateEventInput {
    pub fn into_changes(self) -> CoreResult<EventChanges> {
        let date = provided(self.date).map(|d| parse_date(&d)).transpose()?;
        let time = provided(self.time).map(|t| parse_time(&t)).transpose()?;

        Ok(EventChanges {
            title: provided(self.title),
            description: provided(self.description),
            date,
            time,
            location: provided(self.location),
        })
    }
}
