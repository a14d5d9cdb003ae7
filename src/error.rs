use std::fmt;

use crate::ability::Ability;
use crate::resource::ResourceKind;

/// Errors that can occur in the sermon-policy crate.
#[derive(Debug)]
pub enum Error {
    /// An authorization check failed
    ///
    /// Returned by [`Gate::authorize_named`](crate::Gate::authorize_named);
    /// the `From` impl also lets callers lift a [`Violation`] with `?`.
    Violation(Violation),
    /// An ability name did not match any known ability
    UnknownAbility(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Violation(v) => write!(f, "Policy violation: {}", v),
            Error::UnknownAbility(name) => write!(f, "Unknown ability '{}'", name),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Violation(v) => Some(v),
            Error::UnknownAbility(_) => None,
        }
    }
}

impl From<Violation> for Error {
    fn from(v: Violation) -> Self {
        Error::Violation(v)
    }
}

/// A rejected request with details about what failed.
///
/// Returned by [`Gate::authorize`](crate::Gate::authorize). The HTTP layer
/// turns it into a response with [`Violation::status_code`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The kind of violation that occurred
    pub kind: ViolationKind,
    /// Human-readable message explaining the violation
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// A request with no actor attempted `ability` on `resource`.
    pub fn unauthenticated(ability: Ability, resource: ResourceKind) -> Self {
        Self::new(
            ViolationKind::Unauthenticated,
            format!("Authentication required to {} a {}", ability, resource),
        )
    }

    /// The actor is not allowed `ability` on `resource`.
    pub fn forbidden(ability: Ability, resource: ResourceKind) -> Self {
        Self::new(
            ViolationKind::Forbidden { ability, resource },
            "This action is unauthorized.",
        )
    }

    /// HTTP status code the caller should respond with.
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Violation {}

/// The kind of policy violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// No authenticated actor was present
    Unauthenticated,
    /// The actor was denied an ability on a resource
    Forbidden {
        /// The ability that was denied
        ability: Ability,
        /// The kind of resource it was denied on
        resource: ResourceKind,
    },
}

impl ViolationKind {
    /// 401 for missing authentication, 403 for denials.
    pub fn status_code(self) -> u16 {
        match self {
            ViolationKind::Unauthenticated => 401,
            ViolationKind::Forbidden { .. } => 403,
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::Unauthenticated => write!(f, "Unauthenticated"),
            ViolationKind::Forbidden { ability, resource } => {
                write!(f, "Forbidden '{}' on {}", ability, resource)
            }
        }
    }
}
