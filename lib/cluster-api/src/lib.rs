//! Declarative blueprint types for two-tier compute clusters
//!
//! This library provides:
//! - The `Cluster` blueprint and its pool, firewall, and rule types
//! - Derived-name helpers tying pool names and cross-pool firewall
//!   references to one naming convention
//!
//! The types are plain values; building them is the profile crate's job and
//! acting on them is the provisioning engine's.

pub mod cluster;
pub mod firewall;
pub mod pool;

pub use cluster::{CloudProvider, Cluster, Components, KubernetesApi, Ssh};
pub use firewall::{EgressRule, Firewall, IngressRule, PortSpec, Protocol};
pub use pool::{ServerPool, ServerPoolType};
