//! Address derivation
//!
//! Thin wrappers over the Base58Check and hash160 collaborators. These are
//! deterministic and have no failure mode for well-formed inputs.

use bitcoin::base58;
use bitcoin::hashes::hash160::Hash as Hash160;
use bitcoin::hashes::Hash;

use crate::types::NetworkParams;

/// SHA-256 followed by RIPEMD-160
pub fn hash160(bytes: &[u8]) -> [u8; 20] {
    Hash160::hash(bytes).to_byte_array()
}

/// Base58Check-encode `version || hash`
pub fn to_address(version: u8, hash: &[u8; 20]) -> String {
    let mut payload = [0u8; 21];
    payload[0] = version;
    payload[1..].copy_from_slice(hash);
    base58::encode_check(&payload)
}

/// Pay-to-pubkey-hash address for a raw serialised public key
pub fn pubkey_to_address(network: &NetworkParams, pubkey: &[u8]) -> String {
    to_address(network.pubkey_hash_version, &hash160(pubkey))
}
