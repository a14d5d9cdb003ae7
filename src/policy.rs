//! Access policies for sermons and lessons.
//!
//! Each policy answers one question per ability with a plain `bool`.
//! Policies are pure: they read the actor and the resource and never
//! fail. A missing permission is an ordinary `false`.

use crate::ability::Ability;
use crate::request::User;
use crate::resource::{Lesson, Resource, Sermon};

/// Decision rules for one resource type.
///
/// Abilities a policy does not define are denied. Only [`SermonPolicy`]
/// overrides [`Policy::share`].
pub trait Policy {
    /// The resource type this policy guards.
    type Resource: Resource;

    /// Whether `actor` may list resources of this kind.
    fn view_any(&self, actor: &User) -> bool;

    /// Whether `actor` may read `resource`.
    fn view(&self, actor: &User, resource: &Self::Resource) -> bool;

    /// Whether `actor` may create a resource of this kind.
    fn create(&self, actor: &User) -> bool;

    /// Whether `actor` may modify `resource`.
    fn update(&self, actor: &User, resource: &Self::Resource) -> bool;

    /// Whether `actor` may remove `resource`.
    fn delete(&self, actor: &User, resource: &Self::Resource) -> bool;

    /// Whether `actor` may change who `resource` is shared with.
    fn share(&self, _actor: &User, _resource: &Self::Resource) -> bool {
        false
    }

    /// Dispatches `ability` to the matching decision function.
    ///
    /// # Panics
    ///
    /// Panics if `ability` needs a resource and `resource` is `None`.
    /// That is a caller bug, not a denial.
    fn check(&self, actor: &User, ability: Ability, resource: Option<&Self::Resource>) -> bool {
        match (ability, resource) {
            (Ability::ViewAny, _) => self.view_any(actor),
            (Ability::Create, _) => self.create(actor),
            (Ability::View, Some(r)) => self.view(actor, r),
            (Ability::Update, Some(r)) => self.update(actor, r),
            (Ability::Delete, Some(r)) => self.delete(actor, r),
            (Ability::Share, Some(r)) => self.share(actor, r),
            (ability, None) => panic!("ability `{ability}` requires a resource instance"),
        }
    }
}

/// Who may do what with a [`Sermon`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SermonPolicy;

impl Policy for SermonPolicy {
    type Resource = Sermon;

    fn view_any(&self, _actor: &User) -> bool {
        true
    }

    fn view(&self, actor: &User, sermon: &Sermon) -> bool {
        sermon.is_owned_by(actor) || sermon.is_visible_to_guest(actor)
    }

    fn create(&self, _actor: &User) -> bool {
        true
    }

    fn update(&self, actor: &User, sermon: &Sermon) -> bool {
        sermon.is_owned_by(actor)
    }

    fn delete(&self, actor: &User, sermon: &Sermon) -> bool {
        sermon.is_owned_by(actor)
    }

    fn share(&self, actor: &User, sermon: &Sermon) -> bool {
        sermon.is_owned_by(actor)
    }
}

/// Who may do what with a [`Lesson`].
///
/// Lessons have no sharing list of their own. A non-owner sees a lesson
/// exactly when they may view its sermon: as the sermon's owner, or
/// through its public flag or shared-with set.
#[derive(Debug, Clone, Copy, Default)]
pub struct LessonPolicy;

impl Policy for LessonPolicy {
    type Resource = Lesson;

    fn view_any(&self, _actor: &User) -> bool {
        true
    }

    fn view(&self, actor: &User, lesson: &Lesson) -> bool {
        if lesson.is_owned_by(actor) {
            return true;
        }

        lesson
            .sermon()
            .is_some_and(|sermon| SermonPolicy.view(actor, sermon))
    }

    fn create(&self, _actor: &User) -> bool {
        true
    }

    fn update(&self, actor: &User, lesson: &Lesson) -> bool {
        lesson.is_owned_by(actor)
    }

    fn delete(&self, actor: &User, lesson: &Lesson) -> bool {
        lesson.is_owned_by(actor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> User {
        User::new(1, "Alice")
    }

    fn bob() -> User {
        User::new(2, "Bob")
    }

    #[test]
    fn owner_sees_private_sermon() {
        let sermon = Sermon::new(10, 1);
        assert!(SermonPolicy.view(&alice(), &sermon));
    }

    #[test]
    fn stranger_cannot_see_private_sermon() {
        let sermon = Sermon::new(10, 1);
        assert!(!SermonPolicy.view(&bob(), &sermon));
    }

    #[test]
    fn public_sermon_is_visible_to_everyone() {
        let sermon = Sermon::new(10, 1).public(true);
        assert!(SermonPolicy.view(&bob(), &sermon));
    }

    #[test]
    fn shared_sermon_is_visible_to_recipient_only() {
        let sermon = Sermon::new(10, 1).shared_with_user(2);
        assert!(SermonPolicy.view(&bob(), &sermon));
        assert!(!SermonPolicy.view(&User::new(3, "Carol"), &sermon));
    }

    #[test]
    fn sharing_does_not_grant_writes() {
        let sermon = Sermon::new(10, 1).public(true).shared_with_user(2);

        assert!(!SermonPolicy.update(&bob(), &sermon));
        assert!(!SermonPolicy.delete(&bob(), &sermon));
        assert!(!SermonPolicy.share(&bob(), &sermon));

        assert!(SermonPolicy.update(&alice(), &sermon));
        assert!(SermonPolicy.delete(&alice(), &sermon));
        assert!(SermonPolicy.share(&alice(), &sermon));
    }

    #[test]
    fn lists_and_creation_are_open() {
        let stranger = User::new(999, "Nobody");
        assert!(SermonPolicy.view_any(&stranger));
        assert!(SermonPolicy.create(&stranger));
        assert!(LessonPolicy.view_any(&stranger));
        assert!(LessonPolicy.create(&stranger));
    }

    #[test]
    fn standalone_lesson_is_owner_only() {
        let lesson = Lesson::new(5, 1);
        assert!(LessonPolicy.view(&alice(), &lesson));
        assert!(!LessonPolicy.view(&bob(), &lesson));
    }

    #[test]
    fn lesson_inherits_sermon_visibility() {
        let private = Lesson::new(5, 1).with_sermon(Sermon::new(10, 1));
        let public = Lesson::new(6, 1).with_sermon(Sermon::new(11, 1).public(true));
        let shared = Lesson::new(7, 1).with_sermon(Sermon::new(12, 1).shared_with_user(2));

        assert!(!LessonPolicy.view(&bob(), &private));
        assert!(LessonPolicy.view(&bob(), &public));
        assert!(LessonPolicy.view(&bob(), &shared));
    }

    #[test]
    fn lesson_owner_need_not_own_sermon() {
        // Bob wrote a lesson on Alice's private sermon
        let lesson = Lesson::new(5, 2).with_sermon(Sermon::new(10, 1));

        assert!(LessonPolicy.view(&bob(), &lesson));
        assert!(LessonPolicy.update(&bob(), &lesson));
        assert!(!LessonPolicy.view(&User::new(3, "Carol"), &lesson));
    }

    #[test]
    fn sermon_owner_views_lesson_on_private_sermon() {
        // Bob's lesson hangs off Alice's private sermon
        let lesson = Lesson::new(5, 2).with_sermon(Sermon::new(10, 1));

        assert!(LessonPolicy.view(&alice(), &lesson));
        assert!(!LessonPolicy.view(&User::new(3, "Carol"), &lesson));
    }

    #[test]
    fn sermon_owner_does_not_own_lessons() {
        // Alice owns the sermon, Bob owns the lesson
        let lesson = Lesson::new(5, 2).with_sermon(Sermon::new(10, 1));

        assert!(!LessonPolicy.update(&alice(), &lesson));
        assert!(!LessonPolicy.delete(&alice(), &lesson));
    }

    #[test]
    fn lesson_share_is_never_granted() {
        let lesson = Lesson::new(5, 1);
        assert!(!LessonPolicy.share(&alice(), &lesson));
    }

    #[test]
    fn check_dispatches_by_ability() {
        let sermon = Sermon::new(10, 1);

        assert!(SermonPolicy.check(&bob(), Ability::ViewAny, None));
        assert!(SermonPolicy.check(&bob(), Ability::Create, None));
        assert!(!SermonPolicy.check(&bob(), Ability::View, Some(&sermon)));
        assert!(SermonPolicy.check(&alice(), Ability::Delete, Some(&sermon)));
    }

    #[test]
    #[should_panic(expected = "requires a resource instance")]
    fn check_panics_without_required_resource() {
        SermonPolicy.check(&alice(), Ability::Update, None);
    }
}
