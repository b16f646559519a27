//! Tally reconciliation entry point.
//!
//! Runs one reconciliation pass: every question's and answer's stored vote
//! counter is rewritten from the sum of its vote rows. Scheduled
//! externally (cron or a deploy hook); one invocation, one pass.

use dotenv::dotenv;
use spectachat::{Dependencies, HubError};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("spectachat=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

#[tokio::main]
async fn main() -> Result<(), HubError> {
    dotenv().ok();
    init_tracing();

    info!(
        service_version = env!("CARGO_PKG_VERSION"),
        "Starting tally reconciliation"
    );

    let dependencies = match Dependencies::new().await {
        Ok(dependencies) => dependencies,
        Err(e) => {
            error!(error = %e, "Failed to initialize dependencies");
            return Err(e);
        }
    };

    match dependencies.reconciler().run().await {
        Ok(summary) => {
            info!(
                questions = summary.questions,
                answers = summary.answers,
                "Reconciliation finished"
            );
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Reconciliation failed");
            Err(e)
        }
    }
}
