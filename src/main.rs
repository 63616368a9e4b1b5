use anyhow::Context;
use std::sync::Arc;
use tracing::info;
use triage_ai::config::ServiceConfig;
use triage_ai::triage::{Classifier, MODEL_VERSION};
use triage_ai::{logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::load().context("failed to load configuration")?;
    logging::init_from_config(&config.logging);

    let classifier =
        Classifier::new(&config.triage).context("failed to build triage classifier")?;
    info!(
        model_version = MODEL_VERSION,
        red_flags = classifier.red_flags().len(),
        mid_flags = classifier.mid_flags().len(),
        "Classifier ready"
    );

    server::serve(&config.server, Arc::new(classifier))
        .await
        .with_context(|| format!("server on {} failed", config.server.bind_addr))?;
    Ok(())
}
