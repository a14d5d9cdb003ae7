//! Audit event schema and types.
//!
//! An event records one authorization decision. It carries identifiers
//! only: no resource contents are stored.

use std::fmt;

use crate::ability::Ability;
use crate::request::UserId;
use crate::resource::ResourceKind;

/// Outcome of an authorization decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditOutcome {
    /// The policy allowed the ability
    Granted,
    /// The policy denied the ability
    Denied,
    /// The request had no authenticated actor
    Unauthenticated,
}

impl AuditOutcome {
    /// Returns true for [`AuditOutcome::Granted`].
    pub fn is_granted(self) -> bool {
        matches!(self, AuditOutcome::Granted)
    }
}

impl fmt::Display for AuditOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditOutcome::Granted => write!(f, "granted"),
            AuditOutcome::Denied => write!(f, "denied"),
            AuditOutcome::Unauthenticated => write!(f, "unauthenticated"),
        }
    }
}

/// A recorded authorization decision.
///
/// # Example
///
/// ```
/// use sermon_policy::{Ability, ResourceKind, UserId};
/// use sermon_policy::audit::{AuditEvent, AuditOutcome};
///
/// let event = AuditEvent::new("req-123", Ability::Update, ResourceKind::Sermon, AuditOutcome::Denied)
///     .with_actor(UserId(7))
///     .with_resource_id(42);
///
/// assert_eq!(event.request_id(), "req-123");
/// assert_eq!(event.actor(), Some(UserId(7)));
/// assert_eq!(event.resource_id(), Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// Request identifier for correlation
    request_id: String,
    /// None for unauthenticated requests
    actor: Option<UserId>,
    ability: Ability,
    resource: ResourceKind,
    /// None for class-level abilities (`view_any`, `create`)
    resource_id: Option<u64>,
    outcome: AuditOutcome,
}

impl AuditEvent {
    /// Creates a new audit event with required fields.
    pub fn new(
        request_id: impl Into<String>,
        ability: Ability,
        resource: ResourceKind,
        outcome: AuditOutcome,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            actor: None,
            ability,
            resource,
            resource_id: None,
            outcome,
        }
    }

    /// Sets the acting user.
    pub fn with_actor(mut self, actor: UserId) -> Self {
        self.actor = Some(actor);
        self
    }

    /// Sets the primary key of the resource the decision was about.
    pub fn with_resource_id(mut self, resource_id: u64) -> Self {
        self.resource_id = Some(resource_id);
        self
    }

    /// Returns the request identifier.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Returns the actor, if authenticated.
    pub fn actor(&self) -> Option<UserId> {
        self.actor
    }

    /// Returns the ability that was checked.
    pub fn ability(&self) -> Ability {
        self.ability
    }

    /// Returns the kind of resource that was checked.
    pub fn resource(&self) -> ResourceKind {
        self.resource
    }

    /// Returns the resource primary key, if the check was per-instance.
    pub fn resource_id(&self) -> Option<u64> {
        self.resource_id
    }

    /// Returns the decision outcome.
    pub fn outcome(&self) -> AuditOutcome {
        self.outcome
    }
}

impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AuditEvent[outcome={}, request_id={}, actor=",
            self.outcome, self.request_id
        )?;
        match self.actor {
            Some(actor) => write!(f, "{}", actor)?,
            None => write!(f, "<none>")?,
        }
        write!(f, ", ability={}, resource={}", self.ability, self.resource)?;
        if let Some(id) = self.resource_id {
            write!(f, "#{}", id)?;
        }
        write!(f, "]")
    }
}
