//! CLI definition and dispatch.

use clap::Parser;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::domain::config_loader::ConfigLoader;
use crate::domain::config_path::DEFAULT_MARKER;
use crate::domain::error::ConfPacketError;
use crate::domain::load_report::LoadReport;
use crate::logging;

pub const DEFAULT_SECTIONS: &str = "MQTT, MQTT_TOPICS, MARIADB_DATABASE";

/// Exit code when `--strict` is set and a requested section is absent.
pub const EXIT_MISSING_SECTION: u8 = 3;

#[derive(Parser, Debug)]
#[command(name = "confpacket", about = "Print selected sections of config.ini")]
pub struct Cli {
    /// Section names separated by ", "
    #[arg(default_value = DEFAULT_SECTIONS)]
    pub sections: String,
    /// Path to the config file; overrides --anchor
    #[arg(short, long, conflicts_with = "anchor")]
    pub config: Option<PathBuf>,
    /// Directory to resolve config.ini from (defaults to the current directory)
    #[arg(short, long)]
    pub anchor: Option<PathBuf>,
    /// Directory name the config file sits above
    #[arg(short, long, default_value = DEFAULT_MARKER)]
    pub marker: String,
    /// Fail when any requested section is missing
    #[arg(long)]
    pub strict: bool,
    /// Log debug diagnostics (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run(cli: Cli) -> ExitCode {
    logging::init(cli.verbose);

    let loader = match build_loader(&cli) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let report = match loader.load(&cli.sections) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    print!("{}", render(&report));

    if cli.strict && !report.missing_sections().is_empty() {
        eprintln!(
            "error: missing sections: {}",
            report.missing_sections().join(", ")
        );
        return ExitCode::from(EXIT_MISSING_SECTION);
    }
    ExitCode::SUCCESS
}

pub fn build_loader(cli: &Cli) -> Result<ConfigLoader, ConfPacketError> {
    if let Some(path) = &cli.config {
        return Ok(ConfigLoader::new(path));
    }
    let anchor = match &cli.anchor {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    Ok(ConfigLoader::from_anchor(&anchor, &cli.marker))
}

/// Format the report as INI text, sections in request order.
pub fn render(report: &LoadReport) -> String {
    let mut out = String::new();
    for name in report.requested() {
        let _ = writeln!(out, "[{name}]");
        if let Some(pairs) = report.section(name) {
            for (key, value) in pairs {
                let _ = writeln!(out, "{key} = {value}");
            }
        }
        out.push('\n');
    }
    out
}
