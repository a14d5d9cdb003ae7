//! In-memory audit trail recorder.

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::AuditEvent;

/// In-memory recorder for authorization decisions.
///
/// Events are kept in the order they were recorded. The buffer sits
/// behind a mutex so one trail can serve gates on several threads.
///
/// # Example
///
/// ```
/// use sermon_policy::{Ability, ResourceKind};
/// use sermon_policy::audit::{AuditTrail, AuditEvent, AuditOutcome};
///
/// let trail = AuditTrail::new();
///
/// trail.record(AuditEvent::new(
///     "req-123",
///     Ability::Delete,
///     ResourceKind::Lesson,
///     AuditOutcome::Denied,
/// ));
///
/// assert_eq!(trail.len(), 1);
/// assert_eq!(trail.denials().len(), 1);
/// ```
#[derive(Debug)]
pub struct AuditTrail {
    events: Mutex<Vec<AuditEvent>>,
}

impl AuditTrail {
    /// Creates a new empty audit trail.
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    // A panic while holding the lock cannot leave a half-pushed Vec.
    fn lock(&self) -> MutexGuard<'_, Vec<AuditEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records an audit event.
    pub fn record(&self, event: AuditEvent) {
        self.lock().push(event);
    }

    /// Returns a snapshot of all recorded events.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.lock().clone()
    }

    /// Returns a snapshot of every event that was not granted.
    pub fn denials(&self) -> Vec<AuditEvent> {
        self.lock()
            .iter()
            .filter(|event| !event.outcome().is_granted())
            .cloned()
            .collect()
    }

    /// Returns the number of recorded events.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Clears all recorded events.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Default for AuditTrail {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::Ability;
    use crate::audit::AuditOutcome;
    use crate::resource::ResourceKind;
    use std::sync::Arc;
    use std::thread;

    fn event(request_id: &str, outcome: AuditOutcome) -> AuditEvent {
        AuditEvent::new(request_id, Ability::View, ResourceKind::Sermon, outcome)
    }

    #[test]
    fn audit_trail_starts_empty() {
        let trail = AuditTrail::new();
        assert!(trail.is_empty());
        assert_eq!(trail.len(), 0);
    }

    #[test]
    fn audit_trail_records_in_order() {
        let trail = AuditTrail::new();

        trail.record(event("req-1", AuditOutcome::Granted));
        trail.record(event("req-2", AuditOutcome::Denied));

        let events = trail.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].request_id(), "req-1");
        assert_eq!(events[1].request_id(), "req-2");
    }

    #[test]
    fn denials_exclude_grants() {
        let trail = AuditTrail::new();

        trail.record(event("req-1", AuditOutcome::Granted));
        trail.record(event("req-2", AuditOutcome::Denied));
        trail.record(event("req-3", AuditOutcome::Unauthenticated));

        let denials = trail.denials();
        assert_eq!(denials.len(), 2);
        assert_eq!(denials[0].request_id(), "req-2");
        assert_eq!(denials[1].request_id(), "req-3");
    }

    #[test]
    fn audit_trail_can_be_cleared() {
        let trail = AuditTrail::default();
        trail.record(event("req-1", AuditOutcome::Denied));

        trail.clear();

        assert!(trail.is_empty());
    }

    #[test]
    fn audit_trail_accepts_concurrent_writers() {
        let trail = Arc::new(AuditTrail::new());

        let handles: Vec<_> = (0..4)
            .map(|n| {
                let trail = Arc::clone(&trail);
                thread::spawn(move || {
                    for i in 0..25 {
                        trail.record(event(&format!("req-{n}-{i}"), AuditOutcome::Granted));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(trail.len(), 100);
    }
}
