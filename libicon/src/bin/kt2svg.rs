use std::path::PathBuf;

use clap::{error::ErrorKind, Parser};
use libicon::Config;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Export Compose `ImageVector` icon sources as standalone SVG files
#[derive(Parser, Debug)]
#[command(name = "kt2svg", version, about, long_about = None)]
struct Cli {
    /// Directory searched recursively for icon sources
    source_dir: PathBuf,

    /// Directory receiving one `<Name>.svg` per converted icon
    output_dir: PathBuf,

    /// Namespace of the icon properties, as in `val <namespace>.<group>.<Name>:`
    #[arg(long, env = "ICON_NAMESPACE", default_value = Config::DEFAULT_NAMESPACE)]
    namespace: String,

    /// Extension of the source files
    #[arg(long, env = "ICON_EXTENSION", default_value = Config::DEFAULT_EXTENSION)]
    extension: String,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            err.print()?;
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("libicon=info,kt2svg=info")),
        )
        .with_span_events(FmtSpan::NONE)
        .init();

    let config = Config {
        namespace: cli.namespace,
        extension: cli.extension,
    };
    let summary = libicon::convert_dir(&cli.source_dir, &cli.output_dir, &config)?;

    println!("\n{summary}");
    Ok(())
}
