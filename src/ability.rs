use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// An action an actor may attempt on a resource.
///
/// Names follow the policy method names (`view_any`, `view`, `create`,
/// `update`, `delete`, `share`) so they can be parsed from route metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ability {
    /// List resources of a kind
    ViewAny,
    /// Read a single resource
    View,
    /// Create a new resource
    Create,
    /// Modify an existing resource
    Update,
    /// Remove an existing resource
    Delete,
    /// Change who a resource is shared with
    Share,
}

impl Ability {
    /// Every ability, in declaration order.
    pub const ALL: [Ability; 6] = [
        Ability::ViewAny,
        Ability::View,
        Ability::Create,
        Ability::Update,
        Ability::Delete,
        Ability::Share,
    ];

    /// Returns the snake-case name of this ability.
    pub fn as_str(self) -> &'static str {
        match self {
            Ability::ViewAny => "view_any",
            Ability::View => "view",
            Ability::Create => "create",
            Ability::Update => "update",
            Ability::Delete => "delete",
            Ability::Share => "share",
        }
    }

    /// Returns true if deciding this ability needs a resource instance.
    ///
    /// `view_any` and `create` are decided per resource kind.
    pub fn requires_resource(self) -> bool {
        !matches!(self, Ability::ViewAny | Ability::Create)
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ability {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ability::ALL
            .into_iter()
            .find(|ability| ability.as_str() == s)
            .ok_or_else(|| Error::UnknownAbility(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for ability in Ability::ALL {
            assert_eq!(ability.as_str().parse::<Ability>().unwrap(), ability);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "publish".parse::<Ability>().unwrap_err();
        assert!(matches!(err, Error::UnknownAbility(ref name) if name == "publish"));
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("View".parse::<Ability>().is_err());
    }

    #[test]
    fn class_abilities_need_no_resource() {
        assert!(!Ability::ViewAny.requires_resource());
        assert!(!Ability::Create.requires_resource());
        assert!(Ability::View.requires_resource());
        assert!(Ability::Update.requires_resource());
        assert!(Ability::Delete.requires_resource());
        assert!(Ability::Share.requires_resource());
    }
}
