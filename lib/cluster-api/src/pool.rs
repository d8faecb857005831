//! Server pool types

use serde::{Deserialize, Serialize};

use crate::firewall::Firewall;

/// Role of a server pool within the cluster
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerPoolType {
    /// Control-plane pool
    Master,
    /// Worker pool
    Node,
}

impl ServerPoolType {
    /// The role word used in derived resource names
    pub fn role_word(&self) -> &'static str {
        match self {
            ServerPoolType::Master => "master",
            ServerPoolType::Node => "node",
        }
    }

    /// Derived name for a pool of this role: `<cluster-name>-<role-word>`
    ///
    /// Cross-pool firewall references use this same helper, so a change to
    /// the naming convention cannot drift apart from the pool names.
    pub fn derived_name(&self, cluster_name: &str) -> String {
        format!("{}-{}", cluster_name, self.role_word())
    }
}

/// A homogeneous group of machines sharing role, image, size, and
/// bootstrap sequence
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServerPool {
    #[serde(rename = "type")]
    pub pool_type: ServerPoolType,
    /// Derived name, `<cluster-name>-<role-word>`
    pub name: String,
    /// Maximum instance count for the pool
    pub max_count: u32,
    /// Base image identifier, provider-specific
    pub image: String,
    /// Instance size class, provider-specific
    pub size: String,
    /// Script references applied in listed order by the provisioning engine
    pub bootstrap_scripts: Vec<String>,
    pub firewalls: Vec<Firewall>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_words() {
        assert_eq!(ServerPoolType::Master.role_word(), "master");
        assert_eq!(ServerPoolType::Node.role_word(), "node");
    }

    #[test]
    fn test_derived_name_keeps_hyphenated_prefix() {
        assert_eq!(
            ServerPoolType::Master.derived_name("my-demo-cluster"),
            "my-demo-cluster-master"
        );
        assert_eq!(
            ServerPoolType::Node.derived_name("my-demo-cluster"),
            "my-demo-cluster-node"
        );
    }

    #[test]
    fn test_pool_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ServerPoolType::Master).unwrap(),
            "\"master\""
        );
        assert_eq!(
            serde_json::to_string(&ServerPoolType::Node).unwrap(),
            "\"node\""
        );
    }
}
