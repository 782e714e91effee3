// Pattern: Factory
// One place decides which concrete account type to build.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Read,
    Write,
    Delete,
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Permission::Read => "read",
            Permission::Write => "write",
            Permission::Delete => "delete",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub name: String,
}

impl UserData {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

pub trait Account: fmt::Debug {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn permissions(&self) -> &'static [Permission];
}

macro_rules! account_type {
    ($name:ident, [$($perm:ident),*]) => {
        #[derive(Debug, Clone, Serialize)]
        pub struct $name {
            pub id: String,
            pub name: String,
        }

        impl $name {
            pub fn new(data: UserData) -> Self {
                Self { id: data.id, name: data.name }
            }
        }

        impl Account for $name {
            fn id(&self) -> &str {
                &self.id
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn permissions(&self) -> &'static [Permission] {
                &[$(Permission::$perm),*]
            }
        }
    };
}

account_type!(AdminUser, [Read, Write, Delete]);
account_type!(ModeratorUser, [Read, Write]);
account_type!(RegularUser, [Read]);

// ============================================================================
// With the pattern
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserKind {
    Admin,
    Moderator,
    Regular,
}

impl FromStr for UserKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserKind::Admin),
            "moderator" => Ok(UserKind::Moderator),
            "regular" => Ok(UserKind::Regular),
            other => Err(CatalogError::InvalidUserType(other.to_string())),
        }
    }
}

pub struct UserFactory;

impl UserFactory {
    pub fn create(kind: UserKind, data: UserData) -> Box<dyn Account> {
        match kind {
            UserKind::Admin => Box::new(AdminUser::new(data)),
            UserKind::Moderator => Box::new(ModeratorUser::new(data)),
            UserKind::Regular => Box::new(RegularUser::new(data)),
        }
    }

    pub fn create_from_str(kind: &str, data: UserData) -> Result<Box<dyn Account>, CatalogError> {
        Ok(Self::create(kind.parse()?, data))
    }
}

// ============================================================================
// Without the pattern: the branching lives at every call site
// ============================================================================

pub fn create_user_manually(kind: &str, data: UserData) -> Result<Box<dyn Account>, CatalogError> {
    let user: Box<dyn Account> = if kind == "admin" {
        Box::new(AdminUser::new(data))
    } else if kind == "moderator" {
        Box::new(ModeratorUser::new(data))
    } else if kind == "regular" {
        Box::new(RegularUser::new(data))
    } else {
        return Err(CatalogError::InvalidUserType(kind.to_string()));
    };
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_permissions() {
        let admin = UserFactory::create(UserKind::Admin, UserData::new("1", "John"));
        assert_eq!(
            admin.permissions(),
            &[Permission::Read, Permission::Write, Permission::Delete]
        );

        let moderator = UserFactory::create(UserKind::Moderator, UserData::new("2", "Alice"));
        assert_eq!(moderator.permissions(), &[Permission::Read, Permission::Write]);
        assert_eq!(moderator.name(), "Alice");

        let regular = UserFactory::create(UserKind::Regular, UserData::new("3", "Bob"));
        assert_eq!(regular.permissions(), &[Permission::Read]);
        assert_eq!(regular.id(), "3");
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("admin".parse::<UserKind>().unwrap(), UserKind::Admin);
        let err = "guest".parse::<UserKind>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid user type: guest");
    }

    #[test]
    fn test_create_from_str() {
        let user = UserFactory::create_from_str("moderator", UserData::new("2", "Alice")).unwrap();
        assert_eq!(user.permissions().len(), 2);
        assert!(UserFactory::create_from_str("root", UserData::new("9", "Eve")).is_err());
    }

    #[test]
    fn test_manual_creation_matches_factory() {
        for kind in ["admin", "moderator", "regular"] {
            let manual = create_user_manually(kind, UserData::new("1", "John")).unwrap();
            let factory = UserFactory::create_from_str(kind, UserData::new("1", "John")).unwrap();
            assert_eq!(manual.permissions(), factory.permissions());
        }
        assert!(matches!(
            create_user_manually("superuser", UserData::new("1", "John")),
            Err(CatalogError::InvalidUserType(_))
        ));
    }

    #[test]
    fn test_permission_display() {
        let names: Vec<String> = [Permission::Read, Permission::Delete]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(names, vec!["read", "delete"]);
    }
}
