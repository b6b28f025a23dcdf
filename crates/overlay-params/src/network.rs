//! Overlay protocol network definitions

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Network type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    /// Mainnet
    Mainnet,
    /// Testnet
    Testnet,
    /// Regtest (local development)
    Regtest,
}

impl Network {
    /// All known networks, in precedence order
    pub const ALL: [Network; 3] = [Network::Mainnet, Network::Testnet, Network::Regtest];

    /// Human-readable network name
    pub const fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "main",
            Network::Testnet => "test",
            Network::Regtest => "regtest",
        }
    }

    /// Resolve a network from its name
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "main" => Ok(Network::Mainnet),
            "test" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            other => Err(Error::InvalidNetwork(other.to_string())),
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_names() {
        assert_eq!(Network::Mainnet.name(), "main");
        assert_eq!(Network::Testnet.name(), "test");
        assert_eq!(Network::Regtest.name(), "regtest");
    }

    #[test]
    fn test_network_from_name() {
        assert_eq!(Network::from_name("main").unwrap(), Network::Mainnet);
        assert_eq!(Network::from_name("test").unwrap(), Network::Testnet);
        assert_eq!(Network::from_name("regtest").unwrap(), Network::Regtest);
        assert!(Network::from_name("signet").is_err());
    }

    #[test]
    fn test_network_display() {
        assert_eq!(Network::Testnet.to_string(), "test");
    }
}
