/// # The Main Entry Point of the Admin Console
///
/// This function serves as the primary driver of our application. It wires
/// configuration, the persisted session and the API client together, then
/// hands control to the interactive dashboard.
///
/// # Steps:
/// 1. Loads the configuration
/// 2. Opens the local session store and picks up any persisted token
/// 3. Builds the API client around the session
/// 4. Runs the dashboard loop until the user quits
///
use crate::api_client::ApiClient;
use crate::configuration::{self, ConfigFolder};
use crate::dashboard;
use crate::foundation::session::{open_session_store, Session};
use anyhow::Context;

pub async fn run(cfg_folder: ConfigFolder) -> Result<(), Box<dyn std::error::Error>> {
    if !cfg_folder.config_dir.exists() || !cfg_folder.config_file.exists() {
        eprintln!(
            "\x1b[1m\x1b[31mConfiguration folder or config.yaml not found. Please run 'cmsctl config' first.\x1b[0m"
        );
        return Ok(());
    }

    println!("\x1b[1m\x1b[34mStarting the admin console...\x1b[0m");
    start_dashboard(cfg_folder).await
}

async fn start_dashboard(config_folder: ConfigFolder) -> Result<(), Box<dyn std::error::Error>> {
    let config_file = config_folder
        .config_file
        .to_str()
        .ok_or_else(|| "Failed to convert the config path to a string".to_string())?;
    let config = configuration::get_configuration(config_file)
        .map_err(|_| "Unable to parse configuration file")?;

    let db_path_as_str = config_folder
        .session_db
        .to_str()
        .ok_or_else(|| "Failed to convert the session store path to a string".to_string())?;

    let db = open_session_store(db_path_as_str)?;
    let session = Session::load(db).context("Failed to read the persisted session")?;

    let client = ApiClient::new(&config, session);
    dashboard::run_dashboard(client, config.page_size).await
}
