//! Platforms that deliver webhooks to this service.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A Meta platform with its own webhook subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Facebook,
    Instagram,
    Threads,
}

impl Platform {
    /// Every platform, in route registration order.
    pub const ALL: [Platform; 3] = [Platform::Facebook, Platform::Instagram, Platform::Threads];

    /// Route path the platform's subscription points at.
    pub fn route_path(&self) -> &'static str {
        match self {
            Platform::Facebook => "/facebook",
            Platform::Instagram => "/instagram",
            Platform::Threads => "/threads",
        }
    }

    /// Human-readable name used in log output.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::Threads => "Threads",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.route_path()[1..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_paths_are_distinct() {
        let paths: std::collections::HashSet<_> =
            Platform::ALL.iter().map(|p| p.route_path()).collect();
        assert_eq!(paths.len(), 3);
    }

    #[test]
    fn displays_as_lowercase_segment() {
        assert_eq!(Platform::Facebook.to_string(), "facebook");
        assert_eq!(Platform::Instagram.to_string(), "instagram");
        assert_eq!(Platform::Threads.to_string(), "threads");
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Platform::Threads).unwrap();
        assert_eq!(json, "\"threads\"");
    }
}
