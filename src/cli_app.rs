use clap::{Args, Parser, Subcommand};

use crate::external_api::spacex_api::SpacexApi;
use crate::{latest_launches, launch_details};

#[derive(Parser)]
#[command(
    name = "liftoff",
    version = "0.1.0",
    about = "CLI for browsing rocket launch data from the public SpaceX API <https://github.com/r-spacex/SpaceX-API>",
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the latest launches
    Latest,
    /// Show one launch by its id
    Launch(LaunchArgs),
}

#[derive(Args)]
pub struct LaunchArgs {
    /// Launch id from the SpaceX API
    #[arg(long, short, required = true)]
    pub launch_id: String,
}

impl LaunchArgs {

    #[cfg(test)]
    pub fn new_test(launch_id: &str) -> Self {
        Self { launch_id: launch_id.to_string() }
    }
}

pub async fn handle_command(cli: Cli, spacex_api: &SpacexApi) {
    match &cli.command {
        Commands::Latest => {
            match latest_launches(spacex_api).await {
                Ok(value) => println!("{}", value),
                Err(e) => eprintln!("Failed to fetch the latest launches: {}", e),
            };
        }
        Commands::Launch(value) => {
            match launch_details(value, spacex_api).await {
                Ok(value) => println!("{}", value),
                Err(e) => eprintln!("Failed to fetch launch by id: {}", e),
            };
        }
    }
}


#[cfg(test)]
mod tests {

    use super::*;
    use clap::Parser;
    use rstest::rstest;

    #[rstest]
    #[case("5eb87cd9ffd86e000604b32a", "-l")]
    #[case("5eb87cd9ffd86e000604b32a", "--launch-id")]
    #[case("latest", "-l")]
    fn test_launch_command_positive(#[case] launch_id: String, #[case] flag: String) {
        let args = Cli::parse_from(["liftoff", "launch", &flag, &launch_id]);
        match args.command {
            Commands::Launch(value) => {
                assert_eq!(value.launch_id, launch_id);
            }
            _ => panic!("expected the launch subcommand"),
        }
    }

    #[test]
    fn test_latest_command_positive() {
        let args = Cli::parse_from(["liftoff", "latest"]);
        assert!(matches!(args.command, Commands::Latest));
    }

    #[test]
    fn test_latest_command_takes_no_args() {
        let result = Cli::try_parse_from(["liftoff", "latest", "extra"]);
        assert!(result.is_err());
    }

    #[rstest]
    #[case("-h")]
    #[case("--help")]
    fn test_help_output(#[case] flag: String) {
        let mut cmd = assert_cmd::Command::cargo_bin("liftoff").unwrap();
        cmd.arg(flag)
            .assert()
            .success()
            .stdout(predicates::str::contains("Usage: liftoff <COMMAND>"))
            .stdout(predicates::str::contains("Show the latest launches"))
            .stdout(predicates::str::contains("Show one launch by its id"));
    }

    #[rstest]
    #[case("-h")]
    #[case("--help")]
    fn test_launch_help_output(#[case] flag: String) {
        let mut cmd = assert_cmd::Command::cargo_bin("liftoff").unwrap();
        cmd.args(["launch", &flag])
            .assert()
            .success()
            .stdout(predicates::str::contains("Usage: liftoff launch --launch-id <LAUNCH_ID>"))
            .stdout(predicates::str::contains("Launch id from the SpaceX API"));
    }

    #[test]
    fn test_launch_missing_required_args() {
        let mut cmd = assert_cmd::Command::cargo_bin("liftoff").unwrap();
        cmd.arg("launch")
            .assert()
            .failure()
            .stderr(predicates::str::contains("required"));
    }
}
