mod commands;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use folio_core::theme::Theme;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "Static site generator for a personal portfolio", long_about = None)]
struct Cli {
    /// Log more (repeat for trace output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Initialize new portfolio directory
    Init {
        /// Path to portfolio directory
        path: PathBuf,

        /// Your name
        #[arg(long)]
        name: Option<String>,

        /// Contact email
        #[arg(long)]
        email: Option<String>,
    },

    /// Validate portfolio configuration, media and blog posts
    Validate {
        /// Path to portfolio directory
        path: PathBuf,
    },

    /// Preview site locally with hot reload
    Preview {
        /// Path to portfolio directory
        path: PathBuf,

        /// Port to serve on
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// Skip the activity feed request
        #[arg(long)]
        offline: bool,

        /// Directory for the activity cache
        #[arg(long)]
        cache_dir: Option<PathBuf>,
    },

    /// Build the static site
    Build {
        /// Path to portfolio directory
        path: PathBuf,

        /// Output directory for generated site
        #[arg(short, long)]
        output: PathBuf,

        /// Skip remote statistics and activity
        #[arg(long)]
        offline: bool,

        /// Initial theme, overriding site.default_theme
        #[arg(long)]
        theme: Option<Theme>,

        /// Directory for the activity cache
        #[arg(long)]
        cache_dir: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Install the global tracing subscriber; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) -> anyhow::Result<()> {
    let default_level = match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(
            std::env::var(EnvFilter::DEFAULT_ENV)
                .unwrap_or_else(|_| format!("folio={level},folio_remote={level},folio_generator={level},folio_validator={level}", level = default_level)),
        );

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().compact().with_target(true).with_writer(io::stderr))
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Command::Init { path, name, email } => commands::init::run(path, name, email).await,
        Command::Validate { path } => commands::validate::run(path).await,
        Command::Preview {
            path,
            port,
            offline,
            cache_dir,
        } => commands::preview::run(path, port, offline, cache_dir).await,
        Command::Build {
            path,
            output,
            offline,
            theme,
            cache_dir,
        } => {
            let options = commands::build::BuildOptions {
                offline,
                theme,
                cache_dir,
            };
            commands::build::run(path, output, options).await
        }
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "folio", &mut io::stdout());
            Ok(())
        }
    }
}
