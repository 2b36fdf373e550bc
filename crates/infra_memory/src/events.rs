//! In-memory event outbox

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use core_kernel::{DomainEvent, DomainPort, PortError};
use domain_claims::{ClaimEvent, ClaimEventPublisher};

/// Collects published claim events in publication order
///
/// Stands in for a message broker; readers inspect or drain what was
/// published.
#[derive(Debug, Default)]
pub struct InMemoryEventOutbox {
    events: Mutex<Vec<ClaimEvent>>,
}

impl InMemoryEventOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything published so far
    pub async fn published(&self) -> Vec<ClaimEvent> {
        self.events.lock().await.clone()
    }

    /// Event type names of everything published so far
    pub async fn published_types(&self) -> Vec<&'static str> {
        self.events
            .lock()
            .await
            .iter()
            .map(DomainEvent::event_type)
            .collect()
    }

    /// Removes and returns everything published so far
    pub async fn drain(&self) -> Vec<ClaimEvent> {
        std::mem::take(&mut *self.events.lock().await)
    }
}

impl DomainPort for InMemoryEventOutbox {}

#[async_trait]
impl ClaimEventPublisher for InMemoryEventOutbox {
    async fn publish(&self, events: Vec<ClaimEvent>) -> Result<(), PortError> {
        if events.is_empty() {
            return Ok(());
        }

        debug!(count = events.len(), "Publishing claim events");
        self.events.lock().await.extend(events);
        Ok(())
    }
}
