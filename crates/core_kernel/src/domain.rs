//! Identity and event capabilities for domain types
//!
//! Entities compare by identity rather than by value. Aggregate roots also
//! buffer the domain events raised by their state transitions until the
//! application layer has persisted the aggregate and drains them for
//! publication. Nothing here knows about a message bus.
//!
//! ```rust,ignore
//! let mut claim = service.create_claim(..)?;
//! repository.save(&mut claim).await?;
//! publisher.publish(claim.take_events()).await?;
//! ```

use chrono::{DateTime, Utc};
use std::fmt::Debug;
use std::hash::Hash;

/// Something with a stable identity across state changes
pub trait Entity {
    /// Strongly-typed identifier
    type Id: Copy + Eq + Hash + Debug;

    /// Returns the identifier
    fn id(&self) -> Self::Id;

    /// Returns true if both values denote the same entity
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

/// Marker for records describing something that happened to an aggregate
pub trait DomainEvent: Clone + Debug {
    /// Stable name of the event kind, e.g. `ClaimCreated`
    fn event_type(&self) -> &'static str;

    /// When the event was raised
    fn occurred_at(&self) -> DateTime<Utc>;
}

/// An entity that guards a consistency boundary and queues domain events
pub trait AggregateRoot: Entity {
    type Event: DomainEvent;

    /// Events raised since the last drain, oldest first
    fn pending_events(&self) -> &[Self::Event];

    /// Returns the pending events and clears the buffer
    fn take_events(&mut self) -> Vec<Self::Event>;
}

/// Ordered in-memory buffer of pending domain events
///
/// Aggregates hold it behind `#[serde(skip)]` so snapshots never carry
/// unpublished events.
#[derive(Debug, Clone, PartialEq)]
pub struct EventBuffer<E> {
    events: Vec<E>,
}

impl<E> Default for EventBuffer<E> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<E> EventBuffer<E> {
    /// Creates an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event
    pub fn record(&mut self, event: E) {
        self.events.push(event);
    }

    /// Events recorded so far
    pub fn pending(&self) -> &[E] {
        &self.events
    }

    /// Removes and returns all recorded events
    pub fn drain(&mut self) -> Vec<E> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
