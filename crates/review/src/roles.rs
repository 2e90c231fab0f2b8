use serde::{Deserialize, Serialize};

use crate::permissions::Permission;

/// Role of the person acting on the dashboard.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Reviewer,
    Viewer,
}

impl Role {
    /// Permissions granted to this role.
    pub fn permissions(self) -> &'static [Permission] {
        match self {
            Role::Admin => &[
                Permission::ViewReports,
                Permission::ReviewRecommendations,
                Permission::ConfigureScoring,
            ],
            Role::Reviewer => &[Permission::ViewReports, Permission::ReviewRecommendations],
            Role::Viewer => &[Permission::ViewReports],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Reviewer => "REVIEWER",
            Role::Viewer => "VIEWER",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
