//! Sermons, lessons and their binding to policies.
//!
//! These are read-only snapshots handed over by the persistence layer.
//! Nothing in this crate mutates them while deciding access.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::policy::{LessonPolicy, Policy, SermonPolicy};
use crate::request::{User, UserId};

/// The kind of resource a decision is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// A [`Sermon`]
    Sermon,
    /// A [`Lesson`]
    Lesson,
}

impl ResourceKind {
    /// Returns the lowercase name used in logs and audit events.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Sermon => "sermon",
            ResourceKind::Lesson => "lesson",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A guarded resource that knows which policy decides access to it.
///
/// The gate resolves `R::Policy` from the resource type, so adding a new
/// kind of resource means implementing this trait and [`Policy`].
pub trait Resource {
    /// Kind reported in logs, audit events and violations.
    const KIND: ResourceKind;

    /// Policy evaluated for this resource type.
    type Policy: Policy<Resource = Self> + Default;

    /// Primary key of this resource.
    fn key(&self) -> u64;

    /// The owning user.
    fn owner_id(&self) -> UserId;

    /// Returns true if `actor` owns this resource.
    fn is_owned_by(&self, actor: &User) -> bool {
        self.owner_id() == actor.id
    }
}

/// A sermon and its visibility settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sermon {
    /// Primary key
    pub id: u64,
    /// Owner
    pub user_id: UserId,
    /// Visible to every user when set
    pub is_public: bool,
    /// Users explicitly granted view access
    pub shared_with: BTreeSet<UserId>,
}

impl Sermon {
    /// Creates a private, unshared sermon owned by `owner`.
    pub fn new(id: u64, owner: impl Into<UserId>) -> Self {
        Self {
            id,
            user_id: owner.into(),
            is_public: false,
            shared_with: BTreeSet::new(),
        }
    }

    /// Sets the public flag.
    pub fn public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    /// Adds a user to the shared-with set.
    pub fn shared_with_user(mut self, user: impl Into<UserId>) -> Self {
        self.shared_with.insert(user.into());
        self
    }

    /// Returns true if `user` is in the shared-with set.
    pub fn is_shared_with(&self, user: UserId) -> bool {
        self.shared_with.contains(&user)
    }

    /// Returns true if a non-owner may see this sermon.
    pub fn is_visible_to_guest(&self, actor: &User) -> bool {
        self.is_public || self.is_shared_with(actor.id)
    }
}

impl Resource for Sermon {
    const KIND: ResourceKind = ResourceKind::Sermon;
    type Policy = SermonPolicy;

    fn key(&self) -> u64 {
        self.id
    }

    fn owner_id(&self) -> UserId {
        self.user_id
    }
}

/// A lesson, optionally attached to a sermon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    /// Primary key
    pub id: u64,
    /// Owner
    pub user_id: UserId,
    /// The sermon this lesson belongs to, already loaded
    pub sermon: Option<Arc<Sermon>>,
}

impl Lesson {
    /// Creates a standalone lesson owned by `owner`.
    pub fn new(id: u64, owner: impl Into<UserId>) -> Self {
        Self {
            id,
            user_id: owner.into(),
            sermon: None,
        }
    }

    /// Attaches the lesson to a sermon.
    pub fn with_sermon(mut self, sermon: impl Into<Arc<Sermon>>) -> Self {
        self.sermon = Some(sermon.into());
        self
    }

    /// Returns the attached sermon, if any.
    pub fn sermon(&self) -> Option<&Sermon> {
        self.sermon.as_deref()
    }
}

impl Resource for Lesson {
    const KIND: ResourceKind = ResourceKind::Lesson;
    type Policy = LessonPolicy;

    fn key(&self) -> u64 {
        self.id
    }

    fn owner_id(&self) -> UserId {
        self.user_id
    }
}
