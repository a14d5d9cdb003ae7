//! Audit trail of authorization decisions.
//!
//! This module provides:
//! - `AuditEvent`: one recorded decision (who, what, on which resource, outcome)
//! - `AuditOutcome`: granted, denied, or unauthenticated
//! - `AuditTrail`: thread-safe in-memory recorder
//!
//! Attach a trail to a [`Gate`](crate::Gate) with
//! [`Gate::with_trail`](crate::Gate::with_trail) to record every decision
//! the gate makes.

mod event;
mod trail;

pub use event::{AuditEvent, AuditOutcome};
pub use trail::AuditTrail;
