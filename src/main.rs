//! Mindmap CLI - Render topic/concept analysis results as radial diagrams.

use clap::Parser;
use mindmap::cli::{Cli, Commands, ConfigCommands, GeometryArgs};
use mindmap::commands::{self, CommandResult};
use mindmap::config::{ConfigOverrides, OutputFormat, ResolvedConfig, resolve_config};
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `MINDMAP_LOG=debug`.
const LOG_ENV: &str = "MINDMAP_LOG";

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let config_path = cli.config_path.clone();

    // -H always wins; otherwise fall back to the configured format once it is known.
    let mut human = cli.human_readable;

    let result = run_command(cli.command, config_path.as_deref(), &mut human);

    if let Err(e) = result {
        if human {
            eprintln!("Error: {}", e);
        } else {
            eprintln!("{}", serde_json::json!({ "error": e.to_string() }));
        }
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn resolve(
    config_path: Option<&Path>,
    geometry: Option<&GeometryArgs>,
    human: &mut bool,
) -> Result<ResolvedConfig, mindmap::Error> {
    let overrides = geometry
        .map(GeometryArgs::overrides)
        .unwrap_or_else(ConfigOverrides::new);
    let config = resolve_config(config_path, &overrides)?;
    if *config.output_format() == OutputFormat::Human {
        *human = true;
    }
    Ok(config)
}

fn run_command(
    command: Commands,
    config_path: Option<&Path>,
    human: &mut bool,
) -> Result<(), mindmap::Error> {
    match command {
        Commands::Render {
            input,
            output: out,
            geometry,
        } => {
            let config = resolve(config_path, Some(&geometry), human)?;
            let tree = commands::read_tree(input.as_deref())?;
            let result = commands::render(&tree, out.as_deref(), &config)?;
            // Without -o the SVG itself is the output.
            if out.is_some() {
                output(&result, *human);
            }
        }
        Commands::Layout { input, geometry } => {
            let config = resolve(config_path, Some(&geometry), human)?;
            let tree = commands::read_tree(input.as_deref())?;
            let result = commands::layout(&tree, &config)?;
            output(&result, *human);
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                let config = resolve(config_path, None, human)?;
                output(&commands::config_show(&config), *human);
            }
            ConfigCommands::Path => {
                output(&commands::config_path(config_path), *human);
            }
        },
    }
    Ok(())
}

fn output<T: CommandResult>(result: &T, human: bool) {
    if human {
        println!("{}", result.to_human());
    } else {
        println!("{}", result.to_json());
    }
}
