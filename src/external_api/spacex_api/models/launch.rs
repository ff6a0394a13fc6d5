use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One launch record, as returned by the v5 API.
///
/// Only `id` and `name` are guaranteed by the service; everything else is
/// nullable or absent depending on the launch.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Launch {
    pub id: String,
    pub name: String,
    pub flight_number: Option<u32>,
    pub date_utc: Option<DateTime<Utc>>,
    pub success: Option<bool>,
    pub upcoming: Option<bool>,
    pub details: Option<String>,
    pub links: Option<LaunchLinks>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LaunchLinks {
    pub patch: Option<LaunchPatch>,
    pub webcast: Option<String>,
    pub article: Option<String>,
    pub wikipedia: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LaunchPatch {
    pub small: Option<String>,
    pub large: Option<String>,
}

impl Launch {

    #[cfg(test)]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            flight_number: None,
            date_utc: None,
            success: None,
            upcoming: None,
            details: None,
            links: None,
        }
    }
}
