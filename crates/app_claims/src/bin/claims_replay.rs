//! Claims Replay Tool
//!
//! Replays a batch of claim filings through the claims application service
//! backed by in-memory adapters, then prints the resulting claims and the
//! events that were published.
//!
//! # Usage
//!
//! ```bash
//! claims-replay filings.json
//!
//! # With debug logging as JSON lines
//! CLAIMS_LOG_LEVEL=debug CLAIMS_LOG_JSON=true claims-replay filings.json
//! ```
//!
//! `filings.json` holds a JSON array of create-claim commands.
//!
//! # Environment Variables
//!
//! * `CLAIMS_LOG_LEVEL` - Log level when `RUST_LOG` is unset (default: info)
//! * `CLAIMS_LOG_JSON` - Emit logs as JSON lines (default: false)
//! * `CLAIMS_REJECTION_MESSAGE` - Reason recorded on claims rejected at intake

use anyhow::{bail, Context};
use serde::Serialize;
use std::sync::Arc;

use app_claims::{telemetry, ClaimApplicationService, ClaimView, ClaimsConfig, CreateClaimCommand};
use domain_claims::ClaimDomainService;
use infra_memory::{InMemoryClaimRepository, InMemoryEventOutbox};

#[derive(Serialize)]
struct ReplayReport {
    claims: Vec<ClaimView>,
    failures: Vec<ReplayFailure>,
    published_events: Vec<&'static str>,
}

#[derive(Serialize)]
struct ReplayFailure {
    index: usize,
    error: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ClaimsConfig::from_env().context("invalid CLAIMS_* configuration")?;
    telemetry::init_tracing(&config);

    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: claims-replay <filings.json>");
    };

    let raw = std::fs::read_to_string(&path).with_context(|| format!("cannot read {path}"))?;
    let commands: Vec<CreateClaimCommand> =
        serde_json::from_str(&raw).with_context(|| format!("{path} is not a list of claim filings"))?;

    tracing::info!(count = commands.len(), %path, "Replaying claim filings");

    let repository = Arc::new(InMemoryClaimRepository::new());
    let outbox = Arc::new(InMemoryEventOutbox::new());
    let service = ClaimApplicationService::new(
        repository,
        outbox.clone(),
        ClaimDomainService::default().with_rejection_message(config.rejection_message),
    );

    let mut report = ReplayReport {
        claims: Vec::new(),
        failures: Vec::new(),
        published_events: Vec::new(),
    };

    for (index, command) in commands.into_iter().enumerate() {
        match service.create_claim(command).await {
            Ok(view) => report.claims.push(view),
            Err(err) => {
                tracing::warn!(index, error = %err, "Claim filing refused");
                report.failures.push(ReplayFailure {
                    index,
                    error: err.to_string(),
                });
            }
        }
    }

    report.published_events = outbox.published_types().await;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
