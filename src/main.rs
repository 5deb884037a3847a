use std::{error::Error, fs, path::PathBuf};

use cfgxml::{ConfigError, XmlOptions, generate_xml_with, parse_config};
use clap::Parser;
use tracing::info;

/// cfgxml translates constant declarations written in a small configuration
/// language into an XML document.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file to translate.
    #[arg(short, long)]
    input: PathBuf,

    /// Path of the XML file to write.
    #[arg(short, long)]
    output: PathBuf,

    /// Pretty-print the document with this many spaces per nesting level.
    #[arg(long, value_name = "SPACES")]
    indent: Option<usize>,

    /// Start the document with an XML declaration.
    #[arg(long)]
    declaration: bool,
}

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        if let Some(config_error) = e.downcast_ref::<ConfigError>() {
            eprintln!("Configuration error: {config_error}");
        } else {
            eprintln!("Unknown error: {e}");
        }
        std::process::exit(1);
    }

    println!("Conversion completed successfully.");
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let source = fs::read_to_string(&args.input)?;
    let entries = parse_config(&source)?;

    let options = XmlOptions { indent:      args.indent,
                               declaration: args.declaration, };
    let xml = generate_xml_with(&entries, &options);
    fs::write(&args.output, xml)?;

    info!(input = %args.input.display(),
          output = %args.output.display(),
          entries = entries.len(),
          "translated configuration");
    Ok(())
}

/// Installs a `fmt` subscriber on stderr when `RUST_LOG` is set.
///
/// Enable with `RUST_LOG=cfgxml=debug` or `RUST_LOG=cfgxml=trace`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}
