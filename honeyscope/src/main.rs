use clap::{Parser, Subcommand};
use honeyscope_core::cli;
use honeyscope_core::cli::conf::ConfigCmd;
use honeyscope_core::logging::init_logging;
use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "honeyscope",
    version,
    about = "Honeyscope: Cowrie honeypot log analytics"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the dataset and print the dashboard (default)
    Report {
        /// Path to the config directory
        #[arg(long, default_value = "config")]
        config: PathBuf,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },

    /// Replay one session in chronological order
    Session {
        id: String,

        #[arg(long, default_value = "config")]
        config: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// Full remote information about one address
    Ip {
        addr: IpAddr,

        #[arg(long, default_value = "config")]
        config: PathBuf,
    },

    /// Publish the dashboard and refresh it on SIGHUP
    Serve {
        #[arg(long, default_value = "config")]
        config: PathBuf,
    },

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    let result = match cli.command {
        Some(Command::Report { config, json, yaml }) => cli::report(config, json, yaml),
        Some(Command::Session { id, config, json }) => cli::session(&id, config, json),
        Some(Command::Ip { addr, config }) => cli::ip(addr, config),
        Some(Command::Serve { config }) => cli::serve(config),
        Some(Command::Config { cmd }) => cli::conf::run(cmd),
        None => cli::report(PathBuf::from("config"), false, false),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
