//! aimeta CLI - Validate ai-meta issue blocks and derive labels.

use aimeta_cli::commands;
use aimeta_cli::config::Naming;
use aimeta_cli::pipeline::{read_body, Pipeline};
use aimeta_cli::{Cli, Command, Config, Formatter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Log to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> aimeta_cli::Result<String> {
    // Load config
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    let naming: Naming = cli.naming.map(Into::into).unwrap_or(config.settings.naming);
    let schema_path = config.schema_path(cli.schema.clone())?;
    let pipeline = Pipeline::from_schema_file(
        &schema_path,
        naming,
        config.settings.label_style,
        config.extractor.clone(),
    )?;

    match cli.command {
        Command::Parse(args) => {
            let body = read_body(args.file.as_deref())?;
            commands::execute_parse(&body, &pipeline, &formatter)
        }
        Command::Labels(args) => {
            let body = read_body(args.input.file.as_deref())?;
            commands::execute_labels(&body, &args, &pipeline, &formatter)
        }
        Command::Check(args) => {
            let body = read_body(args.file.as_deref())?;
            commands::execute_check(&body, &pipeline, &formatter)
        }
    }
}
