//! The node taxonomy.
//!
//! Every diagram node carries a [`Category`] describing the kind of system
//! entity it represents. Categories come from provider icon sets grouped by
//! service domain; since those sets are bitmap assets, nodes are styled with
//! a fixed fill color per category rather than an embedded image.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Semantic category of a diagram node.
///
/// The serialized names are kebab-case, matching the strings accepted in
/// configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Serverless functions and other compute services
    Compute,
    /// Managed databases and key-value stores
    Database,
    /// Conversational bots and other machine-learning services
    MlService,
    /// Queues and message brokers
    MessagingQueue,
    /// Identity and access management entities
    SecurityRole,
    /// Managed API front doors
    ApiGateway,
    /// Contact-center and customer engagement services
    EngagementService,
}

impl Category {
    /// Every category in the taxonomy, in a stable order.
    pub const ALL: [Category; 7] = [
        Category::Compute,
        Category::Database,
        Category::MlService,
        Category::MessagingQueue,
        Category::SecurityRole,
        Category::ApiGateway,
        Category::EngagementService,
    ];

    /// Fill color used when drawing nodes of this category, taken from the
    /// provider architecture palette.
    pub fn fill_color(self) -> &'static str {
        match self {
            Category::Compute => "#ED7100",
            Category::Database => "#527FFF",
            Category::MlService => "#01A88D",
            Category::MessagingQueue => "#E7157B",
            Category::SecurityRole => "#DD344C",
            Category::ApiGateway => "#8C4FFF",
            Category::EngagementService => "#0073BB",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compute" => Ok(Category::Compute),
            "database" => Ok(Category::Database),
            "ml-service" => Ok(Category::MlService),
            "messaging-queue" => Ok(Category::MessagingQueue),
            "security-role" => Ok(Category::SecurityRole),
            "api-gateway" => Ok(Category::ApiGateway),
            "engagement-service" => Ok(Category::EngagementService),
            _ => Err(format!("Unknown category: {s}")),
        }
    }
}

impl From<Category> for &'static str {
    fn from(category: Category) -> Self {
        match category {
            Category::Compute => "compute",
            Category::Database => "database",
            Category::MlService => "ml-service",
            Category::MessagingQueue => "messaging-queue",
            Category::SecurityRole => "security-role",
            Category::ApiGateway => "api-gateway",
            Category::EngagementService => "engagement-service",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &'static str = (*self).into();
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_from_str_roundtrip() {
        for category in Category::ALL {
            let name = category.to_string();
            assert_eq!(Category::from_str(&name).unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let err = Category::from_str("quantum-annealer").unwrap_err();
        assert!(err.contains("quantum-annealer"));
    }

    #[test]
    fn test_fill_colors_are_distinct() {
        let colors: HashSet<&str> = Category::ALL.iter().map(|c| c.fill_color()).collect();
        assert_eq!(colors.len(), Category::ALL.len());
    }

    #[test]
    fn test_display_uses_kebab_case() {
        assert_eq!(Category::MlService.to_string(), "ml-service");
        assert_eq!(Category::ApiGateway.to_string(), "api-gateway");
    }
}
