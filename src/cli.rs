use crate::maintenance::{MaintenanceSpec, DEFAULT_USER, MAX_PERIOD_SECS};
use clap::{value_t, App, Arg};
use std::num::NonZeroU64;
use std::path::PathBuf;

fn positive_seconds(value: String) -> Result<(), String> {
    match value.parse::<NonZeroU64>() {
        Ok(period) if period.get() <= MAX_PERIOD_SECS => Ok(()),
        Ok(_) => Err(format!(
            "{} seconds is longer than the {} seconds Zabbix can store",
            value, MAX_PERIOD_SECS
        )),
        Err(_) => Err(format!("{} is not a positive number of seconds", value)),
    }
}

fn parser<'a, 'b>() -> App<'a, 'b> {
    App::new("set_maintenance")
        .about("Create a Zabbix maintenance period for a host or for the smallest host group it belongs to.")
        .version("0.1.0")
        .arg(
            Arg::with_name("config_file")
                .required(true)
                .help("Configuration file with a [zabbix] section holding SERVER and TOKEN_AUTH."),
        )
        .arg(
            Arg::with_name("host")
                .required(true)
                .help("Technical name of the host."),
        )
        .arg(
            Arg::with_name("period")
                .long("period")
                .takes_value(true)
                .validator(positive_seconds)
                .help("Duration of the maintenance period in seconds. Default: one hour."),
        )
        .arg(
            Arg::with_name("no-data-collection")
                .long("no-data-collection")
                .takes_value(false)
                .help("Create the maintenance period without data collection."),
        )
        .arg(
            Arg::with_name("hostgroup")
                .long("hostgroup")
                .takes_value(false)
                .help("Create the maintenance period for the smallest host group the host belongs to."),
        )
        .arg(
            Arg::with_name("user")
                .long("user")
                .takes_value(true)
                .default_value(DEFAULT_USER)
                .help("User name added to the description."),
        )
        .arg(
            Arg::with_name("insecure")
                .long("insecure")
                .takes_value(false)
                .help("Ignore TLS certificate errors."),
        )
}

pub struct Cli {
    pub config_file: PathBuf,
    pub host: String,
    pub hostgroup: bool,
    pub insecure: bool,
    pub maintenance: MaintenanceSpec,
}

impl Cli {
    pub fn parsed() -> Self {
        Self::from_matches(&parser().get_matches())
    }

    fn from_matches(matches: &clap::ArgMatches) -> Self {
        let mut cli = Cli {
            config_file: PathBuf::new(),
            host: String::new(),
            hostgroup: matches.is_present("hostgroup"),
            insecure: matches.is_present("insecure"),
            maintenance: MaintenanceSpec::default(),
        };
        if let Some(config_file) = matches.value_of_os("config_file") {
            cli.config_file = PathBuf::from(config_file);
        }
        if let Some(host) = matches.value_of("host") {
            cli.host = String::from(host);
        }
        if let Ok(period) = value_t!(matches, "period", NonZeroU64) {
            cli.maintenance.period = period;
        }
        cli.maintenance.data_collection = !matches.is_present("no-data-collection");
        if let Some(user) = matches.value_of("user") {
            cli.maintenance.user = String::from(user);
        }
        cli
    }
}
