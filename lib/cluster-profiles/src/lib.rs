//! Cluster profile construction
//!
//! This library provides:
//! - Profile builders that assemble complete `cluster_api::Cluster`
//!   blueprints for a (provider, OS) combination
//! - The `TokenGenerator` collaborator seam for bootstrap credentials
//!
//! Builders perform no cloud I/O; a separate provisioning engine consumes
//! the returned blueprint.

pub mod digitalocean;
pub mod error;
pub mod token;

pub use digitalocean::CentosProfileBuilder;
pub use error::{ProfileError, Result};
pub use token::{BootstrapTokenGenerator, TokenGenerator};
