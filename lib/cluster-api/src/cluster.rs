//! Top-level cluster blueprint

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::pool::{ServerPool, ServerPoolType};

/// Cloud provider a blueprint targets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudProvider {
    DigitalOcean,
}

/// SSH access descriptor for the cluster machines
///
/// Opaque to this crate; key management is the provisioning engine's job.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ssh {
    pub public_key_path: String,
    pub user: String,
}

/// Kubernetes API endpoint descriptor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KubernetesApi {
    pub port: String,
}

/// Optional cluster components and whether they are enabled
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub vpn: bool,
}

/// A complete, immutable cluster blueprint
///
/// Produced fully populated in a single construction pass and never mutated
/// afterwards. The provisioning engine reads it to create cloud resources
/// and run each pool's bootstrap scripts in order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub name: String,
    pub cloud: CloudProvider,
    /// Provider location code, e.g. a DigitalOcean region slug
    pub location: String,
    pub ssh: Ssh,
    pub kubernetes_api: KubernetesApi,
    /// Free-form values for template substitution in bootstrap scripts
    pub values: BTreeMap<String, String>,
    pub components: Components,
    /// Always two pools, master first
    pub server_pools: Vec<ServerPool>,
}

impl Cluster {
    /// Look up the pool with the given role
    pub fn pool(&self, pool_type: ServerPoolType) -> Option<&ServerPool> {
        self.server_pools.iter().find(|p| p.pool_type == pool_type)
    }
}
