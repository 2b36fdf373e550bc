//! Core Kernel - Foundational types for the claims system
//!
//! This crate provides the building blocks shared by the claims domain and
//! its adapters:
//! - Money types with precise decimal arithmetic
//! - Inclusive date ranges for policy windows
//! - Strongly-typed identifiers
//! - Identity and event-buffer capabilities for entities and aggregates
//! - The error taxonomy used by ports and adapters

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod domain;
pub mod ports;

pub use money::{Money, Currency, MoneyError};
pub use temporal::{DateRange, TemporalError};
pub use identifiers::{ClaimId, DocumentId};
pub use domain::{Entity, AggregateRoot, EventBuffer, DomainEvent};
pub use ports::{PortError, DomainPort};
