use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use registra::{
    commands::{form, submit::SubmitCommand},
    environment::ConfigProvider,
};
use registra_utils::registra_version;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    init_tracing();

    let config = registra_config::load(cli.config.as_slice()).context("Failed to load config")?;

    match cli.command {
        Command::Form => form::invoke(config)?,
        Command::Submit(command) => command.invoke(config)?,
        Command::Services => {
            for (idx, option) in config.registration.services.iter().enumerate() {
                let marker = if idx == 0 { " (default)" } else { "" };
                println!("{}. {option}{marker}", idx + 1);
            }
        }
        Command::CheckConfig { verbose } => {
            ConfigProvider::new(&config)?;
            verbose.then(|| println!("{config:#?}"));
        }
        Command::Completion { .. } => unreachable!(),
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version = registra_version())]
struct Cli {
    /// Config files to layer on top of the built-in defaults
    #[arg(short, long, global = true, env = "REGISTRA_CONFIG", value_delimiter = ':')]
    config: Vec<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fill in the registration form interactively
    #[command(aliases(["f"]))]
    Form,
    /// Validate a registration and send it via WhatsApp
    #[command(aliases(["s"]))]
    Submit(SubmitCommand),
    /// List the available service options
    Services,
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(
            fmt_layer.with_filter(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::WARN.into())
                    .from_env_lossy(),
            ),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_submit() {
        let cli = Cli::try_parse_from([
            "registra",
            "submit",
            "--name",
            "Budi Santoso",
            "--address",
            "Jl. Merdeka 10",
            "--whatsapp",
            "081234567890",
            "--email",
            "budi@example.com",
            "--service",
            "2",
            "--print",
        ])
        .unwrap();

        assert!(matches!(cli.command, Command::Submit(_)));
    }
}
