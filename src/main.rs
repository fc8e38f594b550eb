//! devaudio command-line entry point

use std::{env, error::Error, process};

use devaudio::{
    cli::{CliService, formatting::format_error},
    config_store::ConfigStore,
    service_manager::Services,
    tracing_config,
};
use tracing::debug;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    let config_store = ConfigStore::load()?;
    let guard = tracing_config::init_cli_mode(config_store.get_current().general.log_level)?;
    debug!(source = ?config_store.source(), "Configuration loaded");

    let services = Services::new(&config_store)?;
    let cli_service = CliService::new(config_store, services);

    let category = args.get(1).map(|s| s.as_str()).unwrap_or("help");
    if matches!(category, "help" | "--help" | "-h") {
        println!("{}", cli_service.help());
        return Ok(());
    }

    let command = args.get(2).map(|s| s.as_str()).unwrap_or("");
    let remaining_args = args.get(3..).unwrap_or(&[]);

    match cli_service.execute_command(category, command, remaining_args) {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}: {}", format_error("Error"), e);
            drop(guard);
            process::exit(1);
        }
    }
}
