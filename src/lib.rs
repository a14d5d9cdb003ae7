//! Ownership and sharing authorization for sermons and lessons.
//!
//! This crate decides whether a user may view, create, update, delete or
//! share a [`Sermon`] or a [`Lesson`]:
//! - **Owners** can do everything with what they own
//! - **Sermons** are visible to others when public or explicitly shared
//! - **Lessons** have no sharing list; others see them through their sermon
//!
//! # Core Types
//!
//! - [`SermonPolicy`] / [`LessonPolicy`]: pure decision functions per ability
//! - [`Gate`]: request-scoped entry point that logs decisions and turns
//!   denials into a [`Violation`]
//! - [`audit::AuditTrail`]: optional in-memory record of every decision
//!
//! # Examples
//!
//! ```
//! use sermon_policy::{Ability, Gate, Lesson, RequestMeta, Sermon, User};
//!
//! let alice = User::new(1, "Alice");
//! let bob = User::new(2, "Bob");
//!
//! let sermon = Sermon::new(10, alice.id).shared_with_user(bob.id);
//! let lesson = Lesson::new(20, alice.id).with_sermon(sermon.clone());
//!
//! let gate = Gate::new(RequestMeta::authenticated("req-123", bob));
//!
//! // Bob sees the lesson through the shared sermon, but cannot edit it
//! assert!(gate.allows(Ability::View, &lesson));
//! assert!(gate.authorize(Ability::Update, &lesson).is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod ability;
pub mod audit;
mod error;
mod gate;
mod policy;
mod request;
mod resource;

pub use ability::Ability;
pub use error::{Error, Violation, ViolationKind};
pub use gate::Gate;
pub use policy::{LessonPolicy, Policy, SermonPolicy};
pub use request::{RequestMeta, User, UserId};
pub use resource::{Lesson, Resource, ResourceKind, Sermon};
