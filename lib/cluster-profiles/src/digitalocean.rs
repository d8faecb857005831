//! DigitalOcean CentOS 7 cluster profile

use std::collections::BTreeMap;
use std::sync::Arc;

use cluster_api::{
    CloudProvider, Cluster, Components, EgressRule, Firewall, IngressRule, KubernetesApi,
    PortSpec, Protocol, ServerPool, ServerPoolType, Ssh,
};
use tracing::debug;

use crate::error::{ProfileError, Result};
use crate::token::TokenGenerator;

const LOCATION: &str = "sfo2";
const API_PORT: &str = "443";
const SSH_PUBLIC_KEY_PATH: &str = "~/.ssh/id_rsa.pub";
const SSH_USER: &str = "root";

const IMAGE: &str = "centos-7-x64";
const MASTER_SIZE: &str = "s-2vcpu-2gb";
const NODE_SIZE: &str = "s-1vcpu-2gb";
const MASTER_MAX_COUNT: u32 = 1;
const NODE_MAX_COUNT: u32 = 2;

/// Key the provisioning engine substitutes the bootstrap token under
const TOKEN_KEY: &str = "INJECTEDTOKEN";

const ANY_IPV4: &str = "0.0.0.0/0";
const SSH_PORT: u16 = 22;
const KUBE_API_PORT: u16 = 443;
const VPN_PORT: u16 = 1194;

/// Builds CentOS 7 DigitalOcean cluster blueprints
///
/// One control-plane pool and one worker pool, each fronted by a firewall
/// that exposes only enumerated ports externally while trusting all tcp
/// traffic from the peer pool.
pub struct CentosProfileBuilder {
    tokens: Arc<dyn TokenGenerator>,
}

impl CentosProfileBuilder {
    pub fn new(tokens: Arc<dyn TokenGenerator>) -> Self {
        Self { tokens }
    }

    /// Build the complete blueprint for `cluster_name`
    ///
    /// Pure data assembly apart from the one token request; fails only if
    /// the token generator cannot produce a usable credential. The caller
    /// is responsible for `cluster_name` being a non-empty, label-safe
    /// identifier.
    pub fn build(&self, cluster_name: &str) -> Result<Cluster> {
        let master_name = ServerPoolType::Master.derived_name(cluster_name);
        let node_name = ServerPoolType::Node.derived_name(cluster_name);

        let token = self
            .tokens
            .random_token()
            .map_err(ProfileError::TokenAcquisition)?;
        if token.is_empty() {
            return Err(ProfileError::TokenAcquisition(anyhow::anyhow!(
                "token generator returned an empty token"
            )));
        }

        let mut values = BTreeMap::new();
        values.insert(TOKEN_KEY.to_string(), token);

        let cluster = Cluster {
            name: cluster_name.to_string(),
            cloud: CloudProvider::DigitalOcean,
            location: LOCATION.to_string(),
            ssh: Ssh {
                public_key_path: SSH_PUBLIC_KEY_PATH.to_string(),
                user: SSH_USER.to_string(),
            },
            kubernetes_api: KubernetesApi {
                port: API_PORT.to_string(),
            },
            values,
            components: Components { vpn: false },
            server_pools: vec![
                Self::master_pool(&master_name, &node_name),
                Self::node_pool(&node_name, &master_name),
            ],
        };

        debug!("Built profile for cluster: {}", cluster_name);
        Ok(cluster)
    }

    fn master_pool(name: &str, peer_name: &str) -> ServerPool {
        ServerPool {
            pool_type: ServerPoolType::Master,
            name: name.to_string(),
            max_count: MASTER_MAX_COUNT,
            image: IMAGE.to_string(),
            size: MASTER_SIZE.to_string(),
            // VPN setup must run before the role bootstrap; the
            // provisioning engine honors this order.
            bootstrap_scripts: vec![
                "bootstrap/vpn/openvpnMaster-centos.sh".to_string(),
                "bootstrap/digitalocean_k8s_centos_7_master.sh".to_string(),
            ],
            firewalls: vec![Firewall {
                name: name.to_string(),
                ingress_rules: vec![
                    IngressRule {
                        to_port: PortSpec::Port(SSH_PORT),
                        source: ANY_IPV4.to_string(),
                        protocol: Protocol::Tcp,
                    },
                    IngressRule {
                        to_port: PortSpec::Port(KUBE_API_PORT),
                        source: ANY_IPV4.to_string(),
                        protocol: Protocol::Tcp,
                    },
                    IngressRule {
                        to_port: PortSpec::Port(VPN_PORT),
                        source: ANY_IPV4.to_string(),
                        protocol: Protocol::Udp,
                    },
                    Self::peer_trust_rule(peer_name),
                ],
                egress_rules: Self::open_egress(),
            }],
        }
    }

    fn node_pool(name: &str, peer_name: &str) -> ServerPool {
        ServerPool {
            pool_type: ServerPoolType::Node,
            name: name.to_string(),
            max_count: NODE_MAX_COUNT,
            image: IMAGE.to_string(),
            size: NODE_SIZE.to_string(),
            bootstrap_scripts: vec![
                "bootstrap/vpn/openvpnNode-centos.sh".to_string(),
                "bootstrap/digitalocean_k8s_centos_7_node.sh".to_string(),
            ],
            firewalls: vec![Firewall {
                name: name.to_string(),
                ingress_rules: vec![
                    IngressRule {
                        to_port: PortSpec::Port(SSH_PORT),
                        source: ANY_IPV4.to_string(),
                        protocol: Protocol::Tcp,
                    },
                    IngressRule {
                        to_port: PortSpec::Port(VPN_PORT),
                        source: ANY_IPV4.to_string(),
                        protocol: Protocol::Udp,
                    },
                    Self::peer_trust_rule(peer_name),
                ],
                egress_rules: Self::open_egress(),
            }],
        }
    }

    /// Coarse-grained trust boundary: pools accept all tcp traffic from
    /// each other, referenced by derived name rather than address.
    fn peer_trust_rule(peer_name: &str) -> IngressRule {
        IngressRule {
            to_port: PortSpec::All,
            source: peer_name.to_string(),
            protocol: Protocol::Tcp,
        }
    }

    // All egress from the machines is allowed by default
    fn open_egress() -> Vec<EgressRule> {
        vec![
            EgressRule {
                to_port: PortSpec::All,
                destination: ANY_IPV4.to_string(),
                protocol: Protocol::Tcp,
            },
            EgressRule {
                to_port: PortSpec::All,
                destination: ANY_IPV4.to_string(),
                protocol: Protocol::Udp,
            },
        ]
    }
}
