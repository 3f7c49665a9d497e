use anyhow::Result;
use clap::{CommandFactory, Parser};
use readalong::app::{RunOptions, list_stories, run_read_command};
use readalong::cli::{Cli, Commands};
use readalong::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            let config = load_config(cli.config.as_deref())?;
            let opts = RunOptions {
                quiet: cli.quiet,
                verbosity: cli.verbose,
                export: cli.export,
            };
            run_read_command(
                config,
                cli.story,
                cli.page,
                cli.language,
                cli.story_dir,
                opts,
            )
            .await?;
        }
        Some(Commands::Stories) => {
            let mut config = load_config(cli.config.as_deref())?;
            if let Some(dir) = cli.story_dir {
                config.story.dir = Some(dir);
            }
            list_stories(&config);
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "readalong",
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}

/// Load configuration from file or use defaults.
///
/// Priority order:
/// 1. Custom config path from CLI (--config)
/// 2. Default config path (~/.config/readalong/config.toml)
/// 3. Built-in defaults with environment variable overrides
fn load_config(custom_path: Option<&std::path::Path>) -> Result<Config> {
    let config = if let Some(path) = custom_path {
        Config::load(path)?
    } else if let Some(default_path) = Config::default_path() {
        Config::load_or_default(&default_path)?
    } else {
        Config::default()
    };

    Ok(config.with_env_overrides())
}
