mod cli;
mod client;
mod config;
mod error;
mod exit;
mod jsonrpc;
mod maintenance;
mod resolver;

use chrono::Local;
use client::ZabbixClient;
use config::Config;
use error::Result;
use exit::{terminate, Created};
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("set_maintenance=info,reqwest=warn,hyper=warn"));
    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(app: &cli::Cli) -> Result<Created> {
    let config = Config::load(&app.config_file)?;
    let client = ZabbixClient::new(&config, app.insecure)?;
    let target = resolver::resolve_target(&client, &app.host, app.hostgroup)?;
    let request = app.maintenance.build(&target, Local::now())?;
    let maintenanceid = client.maintenance_create(&request)?;
    Ok(Created {
        maintenanceid,
        target,
    })
}

fn main() {
    init_logging();
    let app = cli::Cli::parsed();
    terminate(run(&app));
}
