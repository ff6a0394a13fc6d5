pub mod cli_app;
pub mod command_logic;
pub mod constants;
pub mod external_api;

pub use command_logic::launches::{latest_launches, launch_details};
pub use external_api::spacex_api::SpacexApi;
