//! Firewall rule types attached to server pools

use serde::{Deserialize, Serialize};

/// A port selector for a firewall rule: a single port or all ports
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum PortSpec {
    /// Every port
    All,
    /// One specific port
    Port(u16),
}

impl From<PortSpec> for String {
    fn from(spec: PortSpec) -> Self {
        match spec {
            PortSpec::All => "all".to_string(),
            PortSpec::Port(p) => p.to_string(),
        }
    }
}

impl TryFrom<String> for PortSpec {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == "all" {
            return Ok(PortSpec::All);
        }
        value
            .parse::<u16>()
            .map(PortSpec::Port)
            .map_err(|_| format!("invalid port spec: {}", value))
    }
}

impl std::fmt::Display for PortSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PortSpec::All => write!(f, "all"),
            PortSpec::Port(p) => write!(f, "{}", p),
        }
    }
}

/// Transport protocol for a firewall rule
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Tcp,
    Udp,
}

/// Permitted inbound traffic
///
/// The source is either a CIDR literal or the derived name of the peer
/// server pool in the same cluster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IngressRule {
    /// Destination port on the receiving machines
    pub to_port: PortSpec,
    /// CIDR literal or peer pool name
    pub source: String,
    pub protocol: Protocol,
}

/// Permitted outbound traffic
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EgressRule {
    /// Source port on the sending machines
    pub to_port: PortSpec,
    /// Destination CIDR
    pub destination: String,
    pub protocol: Protocol,
}

/// Firewall attached to a single server pool
///
/// Carries the same derived name as its owning pool. Rule order within the
/// lists is not significant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Firewall {
    pub name: String,
    pub ingress_rules: Vec<IngressRule>,
    pub egress_rules: Vec<EgressRule>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_spec_serializes_as_string() {
        assert_eq!(
            serde_json::to_string(&PortSpec::Port(22)).unwrap(),
            "\"22\""
        );
        assert_eq!(serde_json::to_string(&PortSpec::All).unwrap(), "\"all\"");
    }

    #[test]
    fn test_port_spec_parses_back() {
        let spec: PortSpec = serde_json::from_str("\"1194\"").unwrap();
        assert_eq!(spec, PortSpec::Port(1194));
        let spec: PortSpec = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(spec, PortSpec::All);
        assert!(serde_json::from_str::<PortSpec>("\"not-a-port\"").is_err());
    }

    #[test]
    fn test_protocol_lowercase() {
        assert_eq!(serde_json::to_string(&Protocol::Tcp).unwrap(), "\"tcp\"");
        assert_eq!(serde_json::to_string(&Protocol::Udp).unwrap(), "\"udp\"");
    }
}
