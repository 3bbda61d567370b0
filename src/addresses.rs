//! Deployed contract address book
//!
//! Maps a network name to the officially deployed instances of the
//! Wonzimer Media Protocol contracts. The per-network tables are bundled
//! JSON; lookup is exact keyed access only.

use std::collections::HashMap;

use crate::error::{MetadataError, Result};

static MAINNET: &str = include_str!("../addresses/mainnet.json");
static RINKEBY: &str = include_str!("../addresses/rinkeby.json");

/// Network name -> contract name -> deployed address
pub struct AddressBook {
    networks: HashMap<String, HashMap<String, String>>,
}

impl AddressBook {
    /// The bundled address tables for officially supported networks
    pub fn bundled() -> Result<Self> {
        let mut networks = HashMap::new();
        networks.insert("mainnet".to_string(), serde_json::from_str(MAINNET)?);
        networks.insert("rinkeby".to_string(), serde_json::from_str(RINKEBY)?);
        Ok(Self { networks })
    }

    /// The contract table for a network
    pub fn contracts(&self, network: &str) -> Result<&HashMap<String, String>> {
        self.networks
            .get(network)
            .ok_or_else(|| MetadataError::UnknownNetwork(network.to_string()))
    }

    /// A single deployed contract address, if the network declares it
    pub fn address(&self, network: &str, contract: &str) -> Result<Option<&str>> {
        Ok(self.contracts(network)?.get(contract).map(String::as_str))
    }

    /// All supported network names, sorted
    pub fn networks(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.networks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
