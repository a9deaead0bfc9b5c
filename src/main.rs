use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;

use studyfocus::cli::args::{Cli, Commands, FocusCommands};
use studyfocus::cli::commands::{self, Context};
use studyfocus::config::{Config, Paths};
use studyfocus::logging::{self, LogTarget};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = Paths::new()?;

    // The full-screen timer owns the terminal, so its logs go to a file
    let full_screen = matches!(
        &cli.command,
        Commands::Focus(args) if matches!(args.command, FocusCommands::Run { plain: false, .. })
    );
    if full_screen {
        paths.ensure_dirs()?;
        logging::init(cli.verbose, LogTarget::File(&paths.log_file))?;
    } else {
        logging::init(cli.verbose, LogTarget::Stderr)?;
    }

    let config = Config::load_from_path(&paths.config_file).context("loading configuration")?;
    config.general.color.apply();

    let ctx = Context::new(paths, config, cli.output, cli.user);

    let output = match cli.command {
        Commands::Focus(args) => commands::focus(&ctx, args.command)?,
        Commands::Timetable(args) => commands::timetable(&ctx, args.command)?,
        Commands::Course(args) => commands::course(&ctx, args.command)?,
        Commands::Profile(args) => commands::profile(&ctx, args.command)?,
        Commands::Dashboard => commands::dashboard(&ctx)?,
        Commands::Completions { shell, install } => commands::completions(shell, install)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}
