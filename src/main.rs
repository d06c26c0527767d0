use clap::Parser;
use log::{error, info};
use std::io::Write;
use std::process::ExitCode;
use zcl_quirks::config::{self, Config};
use zcl_quirks::{DeviceRegistry, devices};

/// Register the built-in device quirks and dump their descriptors as JSON.
#[derive(Debug, Parser)]
#[command(name = "quirk-dump", version, about)]
struct Args {
    /// Only dump descriptors for this vendor (exact match)
    #[arg(long, env = "QUIRK_VENDOR")]
    vendor: Option<String>,

    /// Only dump descriptors for this model (exact match)
    #[arg(long, env = "QUIRK_MODEL")]
    model: Option<String>,

    /// Single-line JSON output
    #[arg(long)]
    compact: bool,
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn run(config: &Config) -> zcl_quirks::Result<()> {
    let registry = DeviceRegistry::new();
    let count = devices::register_builtin(&registry)?;
    info!("Registered {} built-in quirk(s)", count);
    info!("  Schema hash: 0x{:016X}", registry.schema_hash());

    let descriptors: Vec<_> = registry
        .descriptors()
        .into_iter()
        .filter(|d| config.filter.matches_descriptor(d))
        .collect();
    if descriptors.is_empty() {
        log::warn!("No registered device matches the filter");
    }

    let mut stdout = std::io::stdout().lock();
    if config.output.pretty {
        serde_json::to_writer_pretty(&mut stdout, &descriptors)?;
    } else {
        serde_json::to_writer(&mut stdout, &descriptors)?;
    }
    writeln!(stdout)?;
    Ok(())
}

fn main() -> ExitCode {
    config::load_dotenv();
    let args = Args::parse();
    init_logger();

    let mut config = Config::from_env();
    if args.vendor.is_some() {
        config.filter.vendor = args.vendor;
    }
    if args.model.is_some() {
        config.filter.model = args.model;
    }
    if args.compact {
        config.output.pretty = false;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to load device quirks: {}", e);
            ExitCode::FAILURE
        }
    }
}
