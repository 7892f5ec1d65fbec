use clap::Parser;
use distributed_calculator::orchestrator::dispatcher::Orchestrator;
use distributed_calculator::orchestrator::handlers::build_router;
use distributed_calculator::orchestrator::timing::OperationTimings;
use std::net::SocketAddr;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Coordinator of the distributed calculator.
#[derive(Parser, Debug)]
#[command(name = "orchestrator", version)]
struct Args {
    /// Address the HTTP server binds to
    #[arg(long, env = "ORCHESTRATOR_BIND", default_value = "0.0.0.0:8080")]
    bind: SocketAddr,

    /// Seconds between stats log lines (0 disables the reporter)
    #[arg(long, env = "STATS_INTERVAL_SECS", default_value_t = 5)]
    stats_interval: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // 1. Timing table (TIME_*_MS, lenient):
    let timings = OperationTimings::from_env();
    tracing::info!(
        "Operation times: + {}ms, - {}ms, * {}ms, / {}ms",
        timings.addition_ms,
        timings.subtraction_ms,
        timings.multiplication_ms,
        timings.division_ms
    );

    // 2. Dispatch engine:
    let orchestrator = Orchestrator::new(timings);

    // 3. HTTP Router:
    let app = build_router(orchestrator.clone());

    // 4. Spawn stats reporter:
    if args.stats_interval > 0 {
        let stats_source = orchestrator.clone();
        let period = Duration::from_secs(args.stats_interval);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);

            loop {
                interval.tick().await;
                let stats = stats_source.stats();
                tracing::info!(
                    "Stats: queued={} in_flight={} pending={} completed={} error={}",
                    stats.queued,
                    stats.in_flight,
                    stats.pending,
                    stats.completed,
                    stats.error
                );
            }
        });
    }

    // 5. Start HTTP server:
    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    tracing::info!("Orchestrator listening on {}", listener.local_addr()?);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Orchestrator stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
