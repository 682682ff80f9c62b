/*
[INPUT]:  CLI arguments, optional YAML configuration file, stdin commands
[OUTPUT]: Rendered ARC tasks and an interactive output-grid editor
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, subcommands, or startup flow
*/

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use arc_task_adapter::{ArcClient, DatasetVersion, Subset};
use arc_task_viewer::cli::run_editor;
use arc_task_viewer::render::render_session;
use arc_task_viewer::{LoadOutcome, SessionState, TaskStore, ViewerConfig};

#[derive(Parser, Debug)]
#[command(name = "arc-task-viewer", version, about = "Browse and solve ARC puzzle tasks")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
    /// Dataset version (1 or 2), overrides the config file
    #[arg(long = "arc-version", value_name = "N")]
    arc_version: Option<u8>,
    /// training or evaluation, overrides the config file
    #[arg(long = "subset", value_name = "SUBSET")]
    subset: Option<Subset>,
    #[arg(long = "no-color")]
    no_color: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the tasks of the subset
    List,
    /// Show a random task
    Random,
    /// Show task N (1-based)
    Open {
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },
    /// Show the task named HASH.json
    Hash { hash: String },
    /// Show a task file from disk
    File { path: PathBuf },
    /// Interactive editor (default)
    Edit,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;
    if args.no_color {
        console::set_colors_enabled(false);
    }

    let mut config = ViewerConfig::load(args.config_path.as_deref()).context("load config")?;
    if let Some(number) = args.arc_version {
        config.dataset_version = DatasetVersion::try_from(number).map_err(|err| anyhow!(err))?;
    }
    if let Some(subset) = args.subset {
        config.subset = subset;
    }
    info!(
        dataset = %config.dataset_version,
        subset = %config.subset,
        "starting arc-task-viewer"
    );

    let client = ArcClient::with_config_and_api_bases(
        config.client_config(),
        &config.arc1_api_base,
        &config.arc2_api_base,
    )
    .context("build HTTP client")?;
    let mut store = TaskStore::with_state(
        Arc::new(client),
        SessionState::new(config.dataset_version, config.subset),
    );
    let subset = config.subset;

    let outcome = match args.command.unwrap_or(Command::Edit) {
        Command::Edit => return run_editor(&mut store, &config.display).await,
        Command::List => {
            let outcome = store.load_tasks_metadata(subset).await;
            ensure_success(&outcome)?;
            for (i, entry) in store
                .state()
                .tasks_metadata(subset)
                .unwrap_or_default()
                .iter()
                .enumerate()
            {
                println!("{:>4}  {}", i + 1, entry.hash());
            }
            return Ok(());
        }
        Command::Random => store.load_random_task().await,
        Command::Open { number } => store.load_task(number.saturating_sub(1), subset).await,
        Command::Hash { hash } => store.load_task_by_hash(&hash, subset).await,
        Command::File { path } => store.load_task_from_file(&path).await,
    };

    ensure_success(&outcome)?;
    println!(
        "{}",
        render_session(store.state(), &config.display, console::colors_enabled())
    );
    Ok(())
}

fn ensure_success(outcome: &LoadOutcome) -> Result<()> {
    match &outcome.error {
        None => Ok(()),
        Some(err) => bail!("{err}"),
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
