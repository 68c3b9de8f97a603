use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use matcher::config::Config;
use matcher::loader::{load_candidate, load_candidates, load_job};
use matcher::models::profile::PersonalityScale;
use matcher::ranking::rank_candidates;
use matcher::state::AppState;
use matcher::JobRequirements;

#[derive(Parser)]
#[command(
    name = "matcher",
    version,
    about = "Score extracted candidate profiles against a job's requirements"
)]
struct Cli {
    /// Scale of personality maps that carry no `personalityScale` tag
    /// (overrides MATCHER_PERSONALITY_SCALE)
    #[arg(long, global = true)]
    scale: Option<PersonalityScale>,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score one candidate against a job and print the match report
    Score {
        #[arg(long)]
        job: PathBuf,
        #[arg(long)]
        candidate: PathBuf,
    },
    /// Score many candidates against a job and print them ranked by overall match
    Rank {
        #[arg(long)]
        job: PathBuf,
        #[arg(required = true)]
        candidates: Vec<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(scale) = cli.scale {
        config.personality_scale = scale;
    }

    // Logs go to stderr; stdout carries only the JSON result.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(
        scale = config.personality_scale.as_str(),
        "Starting matcher v{}",
        env!("CARGO_PKG_VERSION")
    );

    let state = AppState::new(config);

    match cli.command {
        Command::Score { job, candidate } => {
            let report = run_score(&state, job, candidate).await?;
            print_json(&report, cli.pretty)
        }
        Command::Rank { job, candidates } => {
            let ranked = run_rank(&state, job, &candidates).await?;
            print_json(&ranked, cli.pretty)
        }
    }
}

async fn run_score(
    state: &AppState,
    job_path: PathBuf,
    candidate_path: PathBuf,
) -> Result<matcher::MatchReport> {
    let scale = state.config.personality_scale;
    let job = load_job(&job_path, scale)
        .await
        .with_context(|| format!("Failed to load job '{}'", job_path.display()))?;
    let candidate = load_candidate(&candidate_path, scale)
        .await
        .with_context(|| format!("Failed to load candidate '{}'", candidate_path.display()))?;

    info!(job = job_label(&job), "Scoring candidate");
    Ok(state.scorer.score(&candidate, &job))
}

async fn run_rank(
    state: &AppState,
    job_path: PathBuf,
    candidate_paths: &[PathBuf],
) -> Result<Vec<matcher::ranking::RankedCandidate>> {
    let scale = state.config.personality_scale;
    let job = load_job(&job_path, scale)
        .await
        .with_context(|| format!("Failed to load job '{}'", job_path.display()))?;
    let candidates = load_candidates(candidate_paths, scale, state.config.max_concurrent_loads)
        .await
        .context("Failed to load candidates")?;

    info!(
        job = job_label(&job),
        candidates = candidates.len(),
        "Ranking candidates"
    );
    Ok(rank_candidates(state.scorer.as_ref(), &job, &candidates))
}

fn job_label(job: &JobRequirements) -> &str {
    job.job_title.as_deref().unwrap_or("untitled job")
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
