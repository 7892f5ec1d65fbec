use clap::Parser;
use distributed_calculator::agent::client::OrchestratorClient;
use distributed_calculator::agent::worker::{AgentConfig, WorkerPool};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Worker agent: polls the orchestrator for tasks and reports results.
#[derive(Parser, Debug)]
#[command(name = "agent", version)]
struct Args {
    /// Base URL of the orchestrator
    #[arg(long, env = "ORCHESTRATOR_URL", default_value = "http://localhost:8080")]
    orchestrator_url: String,

    /// Number of concurrent workers
    #[arg(long, env = "COMPUTING_POWER", default_value_t = 3)]
    computing_power: usize,

    /// Milliseconds to wait after an empty poll or a failed request
    #[arg(long, env = "POLL_INTERVAL_MS", default_value_t = 1000)]
    poll_interval_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if args.computing_power == 0 {
        anyhow::bail!("--computing-power must be at least 1");
    }

    let client = OrchestratorClient::new(&args.orchestrator_url);
    let pool = WorkerPool::new(
        client,
        AgentConfig {
            computing_power: args.computing_power,
            poll_interval: Duration::from_millis(args.poll_interval_ms),
        },
    );

    let workers = pool.start();
    tracing::info!("Agent started with {} workers", workers.len());

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down agent");
    for worker in workers {
        worker.abort();
    }

    Ok(())
}
