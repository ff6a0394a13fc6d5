use crate::cli_app::LaunchArgs;
use crate::constants::Message;
use crate::external_api::spacex_api::models::launch::Launch;
use crate::external_api::spacex_api::SpacexApi;
use crate::external_api::ApiError;

/// List the latest launches as one line per launch
pub async fn latest_launches(spacex_api_client: &SpacexApi) -> Result<String, ApiError> {
    let launches = spacex_api_client.get_latest_launches().await?;
    if launches.is_empty() {
        return Ok(Message::NoLaunchesFound.to_formatted_string());
    }
    let mut lines = vec![Message::LatestLaunches(launches.len()).to_formatted_string()];
    lines.extend(launches.iter().map(format_launch_line));
    Ok(lines.join("\n"))
}

/// Show one launch by its id
pub async fn launch_details(
    launch_args: &LaunchArgs,
    spacex_api_client: &SpacexApi,
) -> Result<String, ApiError> {
    let launch = spacex_api_client
        .get_launch_by_id(&launch_args.launch_id)
        .await?;
    Ok(format_launch_card(&launch))
}

fn format_launch_line(launch: &Launch) -> String {
    let launch_date = match launch.date_utc {
        Some(date_utc) => date_utc.format("%d/%m/%Y %H:%M").to_string(),
        None => "unknown date".to_string(),
    };
    format!("{} | {} | {}", launch_date, launch.name, launch_status(launch))
}

fn format_launch_card(launch: &Launch) -> String {
    let mut lines = vec![
        format!("Name: {}", launch.name),
        format!("Id: {}", launch.id),
        format!("Status: {}", launch_status(launch)),
    ];
    if let Some(flight_number) = launch.flight_number {
        lines.push(format!("Flight number: {}", flight_number));
    }
    if let Some(date_utc) = launch.date_utc {
        lines.push(format!("Date (UTC): {}", date_utc.format("%d/%m/%Y %H:%M")));
    }
    if let Some(details) = &launch.details {
        lines.push(format!("Details: {}", details));
    }
    if let Some(webcast) = launch.links.as_ref().and_then(|links| links.webcast.as_ref()) {
        lines.push(format!("Webcast: {}", webcast));
    }
    lines.join("\n")
}

fn launch_status(launch: &Launch) -> &'static str {
    match (launch.upcoming, launch.success) {
        (Some(true), _) => "upcoming",
        (_, Some(true)) => "success",
        (_, Some(false)) => "failure",
        _ => "unknown",
    }
}
