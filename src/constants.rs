pub const SPACEX_API_BASE_URL: &str = "https://api.spacexdata.com";

/// Standard message
#[derive(Debug)]
pub enum Message {
    LatestLaunches(usize),
    NoLaunchesFound,
}

impl Message {
    pub fn to_formatted_string(&self) -> String {
        match self {
            Message::LatestLaunches(count) => format!("Latest {} launches:", count),
            Message::NoLaunchesFound => "No launches matched the query".to_string(),
        }
    }
}
