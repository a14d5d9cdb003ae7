use std::fmt;

/// Identifier of a user account.
///
/// Ownership and shared-with membership are both decided by comparing
/// identifiers, never by comparing whole [`User`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        UserId(id)
    }
}

/// An authenticated user acting on sermons and lessons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for this user
    pub id: UserId,
    /// Display name
    pub name: String,
}

impl User {
    /// Creates a user with the given identifier and display name.
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Metadata about an incoming request.
///
/// Contains the request identifier and the authenticated actor, if any.
#[derive(Debug, Clone)]
pub struct RequestMeta {
    /// Unique identifier for this request
    pub request_id: String,
    /// Authenticated actor, if any
    pub actor: Option<User>,
}

impl RequestMeta {
    /// Metadata for a request made by `actor`.
    pub fn authenticated(request_id: impl Into<String>, actor: User) -> Self {
        Self {
            request_id: request_id.into(),
            actor: Some(actor),
        }
    }

    /// Metadata for a request with no authenticated actor.
    pub fn anonymous(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            actor: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_displays_as_number() {
        assert_eq!(UserId(42).to_string(), "42");
    }

    #[test]
    fn authenticated_meta_carries_actor() {
        let meta = RequestMeta::authenticated("req-1", User::new(7, "Alice"));
        assert_eq!(meta.request_id, "req-1");
        assert_eq!(meta.actor.map(|u| u.id), Some(UserId(7)));
    }

    #[test]
    fn anonymous_meta_has_no_actor() {
        let meta = RequestMeta::anonymous("req-2");
        assert!(meta.actor.is_none());
    }
}
