//! Classification result and network parameter types
//!
//! These are the values the classifier hands back to callers and the
//! configuration it consumes. Everything here is constructed fresh per
//! classification call; nothing is shared or mutated across calls.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Semantic type of an output script
///
/// Serialised with the lowercase wire tags used by the JSON output
/// (`pubkeyhash`, `scripthash`, `nulldata`, `pubkey`, `multisig`,
/// `unknown`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptType {
    /// Pay-to-PubKey-Hash (standard address)
    PubKeyHash,
    /// Pay-to-Script-Hash
    ScriptHash,
    /// OP_RETURN data carrier
    NullData,
    /// Pay-to-PubKey (legacy)
    PubKey,
    /// Pay-to-Multisig (M-of-N)
    MultiSig,
    /// Unknown/unparseable script
    Unknown,
}

impl ScriptType {
    /// Wire string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptType::PubKeyHash => "pubkeyhash",
            ScriptType::ScriptHash => "scripthash",
            ScriptType::NullData => "nulldata",
            ScriptType::PubKey => "pubkey",
            ScriptType::MultiSig => "multisig",
            ScriptType::Unknown => "unknown",
        }
    }
}

/// Result of classifying a single output script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Semantic script type
    #[serde(rename = "type")]
    pub script_type: ScriptType,

    /// Addresses the script pays to, duplicate-free and in first-occurrence
    /// order. Always empty for `NullData` and `Unknown`.
    pub addresses: Vec<String>,
}

impl ClassificationResult {
    /// Create a result for the given type and address list
    pub fn new(script_type: ScriptType, addresses: Vec<String>) -> Self {
        Self {
            script_type,
            addresses,
        }
    }

    /// The `Unknown` result every failure mode collapses to
    pub fn unknown() -> Self {
        Self::new(ScriptType::Unknown, Vec::new())
    }

    /// A null-data output carries no spendable destination
    pub fn null_data() -> Self {
        Self::new(ScriptType::NullData, Vec::new())
    }
}

/// Address version bytes for a Bitcoin-family network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkParams {
    /// Version byte for pay-to-pubkey-hash addresses
    pub pubkey_hash_version: u8,
    /// Version byte for pay-to-script-hash addresses
    pub script_hash_version: u8,
}

impl NetworkParams {
    /// Bitcoin mainnet version bytes
    pub const MAINNET: NetworkParams = NetworkParams {
        pubkey_hash_version: 0x00,
        script_hash_version: 0x05,
    };

    /// Bitcoin testnet version bytes (shared by regtest)
    pub const TESTNET: NetworkParams = NetworkParams {
        pubkey_hash_version: 0x6f,
        script_hash_version: 0xc4,
    };

    /// Resolve a network by name
    ///
    /// Lookup is case-insensitive. Unrecognised names resolve to mainnet so
    /// classification of arbitrary input never fails over a network label.
    pub fn from_name(name: &str) -> Self {
        NETWORKS
            .get(name.to_lowercase().as_str())
            .copied()
            .unwrap_or_default()
    }

    /// All known network names with their version bytes, sorted by name
    pub fn known_networks() -> Vec<(&'static str, NetworkParams)> {
        let mut networks: Vec<_> = NETWORKS.iter().map(|(&name, &params)| (name, params)).collect();
        networks.sort_by_key(|(name, _)| *name);
        networks
    }
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self::MAINNET
    }
}

lazy_static! {
    /// Static network table, keyed by lowercase name
    static ref NETWORKS: HashMap<&'static str, NetworkParams> = {
        let mut networks = HashMap::new();
        networks.insert("bitcoin", NetworkParams::MAINNET);
        networks.insert("mainnet", NetworkParams::MAINNET);
        networks.insert("livenet", NetworkParams::MAINNET);
        networks.insert("testnet", NetworkParams::TESTNET);
        networks.insert("regtest", NetworkParams::TESTNET);
        networks
    };
}
