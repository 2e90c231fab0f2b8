use thiserror::Error;

use crate::{Permission, Role};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: role {role} lacks permission '{permission}'")]
    Forbidden { role: Role, permission: Permission },
}

/// Check that `role` holds `required`.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
pub fn authorize(role: Role, required: Permission) -> Result<(), AuthzError> {
    if role.permissions().contains(&required) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden {
            role,
            permission: required,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_can_do_everything() {
        for permission in [
            Permission::ViewReports,
            Permission::ReviewRecommendations,
            Permission::ConfigureScoring,
        ] {
            assert!(authorize(Role::Admin, permission).is_ok());
        }
    }

    #[test]
    fn reviewer_cannot_configure() {
        assert!(authorize(Role::Reviewer, Permission::ReviewRecommendations).is_ok());
        assert_eq!(
            authorize(Role::Reviewer, Permission::ConfigureScoring),
            Err(AuthzError::Forbidden {
                role: Role::Reviewer,
                permission: Permission::ConfigureScoring,
            })
        );
    }

    #[test]
    fn viewer_is_read_only() {
        assert!(authorize(Role::Viewer, Permission::ViewReports).is_ok());
        let err = authorize(Role::Viewer, Permission::ReviewRecommendations).unwrap_err();
        assert_eq!(
            err.to_string(),
            "forbidden: role VIEWER lacks permission 'recommendations.review'"
        );
    }
}
