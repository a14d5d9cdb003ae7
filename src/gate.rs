use crate::{
    ability::Ability,
    audit::{AuditEvent, AuditOutcome, AuditTrail},
    error::{Error, Violation},
    policy::Policy,
    request::{RequestMeta, User},
    resource::Resource,
};

/// The request-scoped authorization gate.
///
/// `Gate` resolves the policy for a resource type, evaluates an ability
/// for the request's actor, logs the decision and, when a trail is
/// attached, records it. A request without an actor is never allowed.
///
/// # Examples
///
/// ```
/// use sermon_policy::{Ability, Gate, RequestMeta, Sermon, User};
///
/// let meta = RequestMeta::authenticated("req-123", User::new(2, "Bob"));
/// let gate = Gate::new(meta);
///
/// let sermon = Sermon::new(10, 1).shared_with_user(2);
///
/// assert!(gate.allows(Ability::View, &sermon));
/// assert!(gate.denies(Ability::Update, &sermon));
///
/// let err = gate.authorize(Ability::Delete, &sermon).unwrap_err();
/// assert_eq!(err.status_code(), 403);
/// ```
#[derive(Debug)]
pub struct Gate<'t> {
    meta: RequestMeta,
    trail: Option<&'t AuditTrail>,
}

impl<'t> Gate<'t> {
    /// Creates a gate for the given request.
    pub fn new(meta: RequestMeta) -> Self {
        Self { meta, trail: None }
    }

    /// Records every decision this gate makes into `trail`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sermon_policy::{Ability, Gate, Lesson, RequestMeta, User};
    /// use sermon_policy::audit::AuditTrail;
    ///
    /// let trail = AuditTrail::new();
    /// let gate = Gate::new(RequestMeta::authenticated("req-1", User::new(2, "Bob")))
    ///     .with_trail(&trail);
    ///
    /// gate.allows(Ability::View, &Lesson::new(5, 1));
    ///
    /// assert_eq!(trail.denials().len(), 1);
    /// ```
    pub fn with_trail<'a>(self, trail: &'a AuditTrail) -> Gate<'a> {
        Gate {
            meta: self.meta,
            trail: Some(trail),
        }
    }

    /// Returns the request ID this gate decides for.
    pub fn request_id(&self) -> &str {
        &self.meta.request_id
    }

    /// Returns the actor, if the request is authenticated.
    pub fn actor(&self) -> Option<&User> {
        self.meta.actor.as_ref()
    }

    /// Returns true if the actor may perform `ability` on `resource`.
    pub fn allows<R: Resource>(&self, ability: Ability, resource: &R) -> bool {
        self.decide(ability, Some(resource)).is_granted()
    }

    /// Returns true if the actor may not perform `ability` on `resource`.
    pub fn denies<R: Resource>(&self, ability: Ability, resource: &R) -> bool {
        !self.allows(ability, resource)
    }

    /// Returns true if at least one of `abilities` is allowed on `resource`.
    ///
    /// Stops at the first granted ability; later ones are not evaluated
    /// or recorded.
    pub fn any<R: Resource>(&self, abilities: &[Ability], resource: &R) -> bool {
        abilities
            .iter()
            .any(|&ability| self.allows(ability, resource))
    }

    /// Returns true if the actor may perform a class-level `ability` on
    /// resources of type `R`.
    ///
    /// # Panics
    ///
    /// Panics if `ability` needs a resource instance (`view`, `update`,
    /// `delete`, `share`).
    ///
    /// # Examples
    ///
    /// ```
    /// use sermon_policy::{Ability, Gate, RequestMeta, Sermon, User};
    ///
    /// let gate = Gate::new(RequestMeta::authenticated("req-1", User::new(1, "Alice")));
    /// assert!(gate.allows_class::<Sermon>(Ability::Create));
    /// ```
    pub fn allows_class<R: Resource>(&self, ability: Ability) -> bool {
        Self::assert_class_ability(ability);
        self.decide::<R>(ability, None).is_granted()
    }

    /// Checks `ability` on `resource`, failing with a [`Violation`].
    ///
    /// # Errors
    ///
    /// Returns `ViolationKind::Unauthenticated` if the request has no
    /// actor, and `ViolationKind::Forbidden` if the policy denies it.
    pub fn authorize<R: Resource>(
        &self,
        ability: Ability,
        resource: &R,
    ) -> Result<(), Violation> {
        let outcome = self.decide(ability, Some(resource));
        Self::outcome_to_result::<R>(outcome, ability)
    }

    /// Checks an ability given by name, as it appears in route metadata.
    ///
    /// Class-level names (`view_any`, `create`) are decided per kind and
    /// ignore `resource`.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownAbility` if `name` is not an ability, and
    /// `Error::Violation` if the check fails as in [`Gate::authorize`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sermon_policy::{Error, Gate, RequestMeta, Sermon, User};
    ///
    /// let gate = Gate::new(RequestMeta::authenticated("req-1", User::new(2, "Bob")));
    /// let sermon = Sermon::new(10, 1).public(true);
    ///
    /// assert!(gate.authorize_named("view", &sermon).is_ok());
    /// assert!(matches!(gate.authorize_named("update", &sermon), Err(Error::Violation(_))));
    /// assert!(matches!(gate.authorize_named("publish", &sermon), Err(Error::UnknownAbility(_))));
    /// ```
    pub fn authorize_named<R: Resource>(&self, name: &str, resource: &R) -> Result<(), Error> {
        let ability: Ability = name.parse()?;
        self.authorize(ability, resource)?;
        Ok(())
    }

    /// Checks a class-level `ability` on resources of type `R`.
    ///
    /// # Errors
    ///
    /// Same as [`Gate::authorize`].
    ///
    /// # Panics
    ///
    /// Panics if `ability` needs a resource instance.
    pub fn authorize_class<R: Resource>(&self, ability: Ability) -> Result<(), Violation> {
        Self::assert_class_ability(ability);
        let outcome = self.decide::<R>(ability, None);
        Self::outcome_to_result::<R>(outcome, ability)
    }

    fn assert_class_ability(ability: Ability) {
        assert!(
            !ability.requires_resource(),
            "ability `{ability}` requires a resource instance"
        );
    }

    fn outcome_to_result<R: Resource>(
        outcome: AuditOutcome,
        ability: Ability,
    ) -> Result<(), Violation> {
        match outcome {
            AuditOutcome::Granted => Ok(()),
            AuditOutcome::Denied => Err(Violation::forbidden(ability, R::KIND)),
            AuditOutcome::Unauthenticated => Err(Violation::unauthenticated(ability, R::KIND)),
        }
    }

    /// Evaluates the policy, then logs and records the outcome.
    fn decide<R: Resource>(&self, ability: Ability, resource: Option<&R>) -> AuditOutcome {
        let policy = <R::Policy as Default>::default();
        let outcome = match &self.meta.actor {
            None => AuditOutcome::Unauthenticated,
            Some(actor) if policy.check(actor, ability, resource) => AuditOutcome::Granted,
            Some(_) => AuditOutcome::Denied,
        };

        let actor_id = self.meta.actor.as_ref().map(|actor| actor.id);
        // Class-level decisions never name an instance, whichever entry point is used
        let resource_id = resource
            .filter(|_| ability.requires_resource())
            .map(|r| r.key());
        let kind = R::KIND;

        if outcome.is_granted() {
            tracing::debug!(
                target: "sermon_policy::gate",
                request_id = %self.meta.request_id,
                actor = actor_id.map(|id| id.0),
                ability = %ability,
                resource = %kind,
                resource_id = resource_id,
                allowed = true,
                "ability granted"
            );
        } else {
            tracing::info!(
                target: "sermon_policy::gate",
                request_id = %self.meta.request_id,
                actor = actor_id.map(|id| id.0),
                ability = %ability,
                resource = %kind,
                resource_id = resource_id,
                allowed = false,
                outcome = %outcome,
                "ability denied"
            );
        }

        if let Some(trail) = self.trail {
            let mut event = AuditEvent::new(&*self.meta.request_id, ability, kind, outcome);
            if let Some(id) = actor_id {
                event = event.with_actor(id);
            }
            if let Some(id) = resource_id {
                event = event.with_resource_id(id);
            }
            trail.record(event);
        }

        outcome
    }
}
