use clap::Command;
use cmsctl::configuration::{create_config, ConfigFolder};
use cmsctl::demo::run_demo;
use cmsctl::startup::run;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Command::new("cmsctl")
        .about("📰 Terminal admin console for a remote CMS API 📰")
        .subcommand(
            Command::new("run").about("🚀 Open the interactive dashboard against the remote CMS"),
        )
        .subcommand(
            Command::new("config").about("🛠️ Create or update configuration file for cmsctl"),
        )
        .subcommand(
            Command::new("demo").about("🧪 Browse a hardcoded sample post list, no network"),
        )
        .get_matches();

    let cfg_folder = ConfigFolder::new();

    match args.subcommand() {
        Some(("run", _)) => {
            println!("\x1b[1m\x1b[34mOpening the dashboard...\x1b[0m");
            run(cfg_folder).await
        }
        Some(("config", _)) => {
            println!("\x1b[1m\x1b[34mConfiguring cmsctl...\x1b[0m");
            create_config(cfg_folder)
        }
        Some(("demo", _)) => run_demo(),
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn print_usage() {
    println!("\x1b[1m\x1b[31mInvalid command!\x1b[0m\n");
    println!("📖 Available Commands:");
    println!("  \x1b[1m\x1b[32mcmsctl run\x1b[0m    - 🚀 Open the interactive dashboard");
    println!("  \x1b[1m\x1b[32mcmsctl config\x1b[0m - 🛠️  Create or update configuration file");
    println!("  \x1b[1m\x1b[32mcmsctl demo\x1b[0m   - 🧪 Browse the sample post list offline");
    println!("\x1b[33mUse these commands to manage your CMS content from the terminal!\x1b[0m\n");
}
