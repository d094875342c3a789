use crate::conf::{ConfigError, GeoBackend, load_config};
use crate::ingest::discover_sources;
use owo_colors::{OwoColorize, Stream, Style};
use std::path::PathBuf;

pub fn check(path: PathBuf) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(cfg) => {
            println!("✔ Config loaded successfully");
            println!(
                "✔ logs: {} ({}), {} worker(s)",
                cfg.logs.dir.display(),
                cfg.logs.pattern,
                cfg.logs.workers
            );

            match discover_sources(&cfg.logs.sources()) {
                Ok(sources) => println!("✔ {} log sources found", sources.len()),
                Err(e) => println!(
                    "  {}: {e}",
                    "warning".if_supports_color(Stream::Stdout, |t| t.style(warning_style()))
                ),
            }

            let backend = match cfg.geoip.backend {
                GeoBackend::Maxmind => "maxmind",
                GeoBackend::Remote => "remote",
                GeoBackend::Disabled => "disabled",
            };
            println!(
                "✔ geoip backend: {backend} (cache {})",
                if cfg.geoip.cache { "on" } else { "off" }
            );
            Ok(())
        }
        Err(err) => {
            print_config_error(err);
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: ConfigError) {
    let hint = config_error_hint(&err);
    eprintln!(
        "{}: {}",
        "error".if_supports_color(Stream::Stderr, |t| t.style(Style::new().red().bold())),
        err
    );
    if let Some(hint) = hint {
        eprintln!();
        eprintln!("{}", hint);
    }
}

fn warning_style() -> Style {
    Style::new().yellow().bold()
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        //---------------------------------------------------------------------
        // Logs
        //---------------------------------------------------------------------
        ConfigError::ZeroWorkers => Some(
            "At least one ingest worker is required.\n\
             \n\
             Example:\n\
             \n\
             logs {\n  workers = 4\n}",
        ),

        ConfigError::Glob { .. } => Some(
            "The log file pattern is a glob relative to `logs.dir`.\n\
             \n\
             Example:\n\
             \n\
             logs {\n  pattern = \"cowrie.json*\"\n}",
        ),

        //---------------------------------------------------------------------
        // GeoIP
        //---------------------------------------------------------------------
        ConfigError::MissingCityDb => Some(
            "The maxmind backend reads a local database.\n\
             \n\
             Example:\n\
             \n\
             geoip {\n  backend = \"maxmind\"\n  city_db = \"data/GeoLite2-City.mmdb\"\n}",
        ),

        ConfigError::MissingIpPlaceholder { .. } => Some(
            "The remote URL must contain `{ip}`, which is replaced by the address to look up.\n\
             \n\
             Example:\n\
             \n\
             geoip {\n  backend    = \"remote\"\n  remote_url = \"https://api.ozeliurs.com/ip/{ip}\"\n}",
        ),

        ConfigError::ZeroTimeout => Some(
            "Remote lookups need a positive timeout in milliseconds.\n\
             \n\
             Remove `timeout_ms` to use the default of 2000.",
        ),

        //---------------------------------------------------------------------
        // Everything else: no hint
        //---------------------------------------------------------------------
        _ => None,
    }
}
