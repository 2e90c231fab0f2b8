use serde::{Deserialize, Serialize};

/// Operations a role may be allowed to perform.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    /// Read scores, alerts and reports.
    ViewReports,
    /// Approve or reject recommendations.
    ReviewRecommendations,
    /// Change scoring settings.
    ConfigureScoring,
}

impl Permission {
    pub fn as_str(self) -> &'static str {
        match self {
            Permission::ViewReports => "reports.view",
            Permission::ReviewRecommendations => "recommendations.review",
            Permission::ConfigureScoring => "scoring.configure",
        }
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
