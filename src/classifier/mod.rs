//! Output script classification
//!
//! Position-based scanning of the raw script bytes: dispatch on the leading
//! opcode to the pay-to-pubkey-hash, pay-to-script-hash and null-data
//! matchers, then fall back to the trailing-opcode pay-to-pubkey and
//! multisig matchers. A generic leading byte (a direct push, or one of
//! OP_1..OP_16) is ambiguous between "start of a pubkey push" and "start of
//! a multisig m value", so those two templates are resolved off the tail of
//! the script instead.
//!
//! Classification is total: truncated scripts, invalid push headers,
//! non-canonical encodings under strict mode, invalid public keys and
//! malformed multisig counts all collapse to `Unknown` with no addresses.

pub mod address;
pub mod error;
pub mod opcodes;
pub mod pubkey;
pub mod push;

pub use error::ScriptError;
pub use push::{decode_push, DataPush};

use std::collections::HashSet;
use tracing::debug;

use crate::types::{ClassificationResult, NetworkParams, ScriptType};
use opcodes::{
    OP_1, OP_16, OP_CHECKMULTISIG, OP_CHECKSIG, OP_DUP, OP_EQUAL, OP_EQUALVERIFY, OP_HASH160,
    OP_RETURN,
};

/// Classify a hex-encoded output script
///
/// A hex decode failure is a classification outcome, not an error: the
/// result is `Unknown` with no addresses.
pub fn classify_hex(script_hex: &str, network: &NetworkParams, strict: bool) -> ClassificationResult {
    match hex::decode(script_hex.trim()) {
        Ok(script) => classify(&script, network, strict),
        Err(_) => {
            debug!("Input is not valid hex, classifying as unknown");
            ClassificationResult::unknown()
        }
    }
}

/// Classify a raw output script and derive the addresses it pays to
///
/// Total over all byte sequences; never panics and never returns an error.
pub fn classify(script: &[u8], network: &NetworkParams, strict: bool) -> ClassificationResult {
    let leading = match script.first() {
        Some(&opcode) => opcode,
        None => return ClassificationResult::unknown(),
    };

    let matched = match leading {
        OP_DUP => match_pubkey_hash(script, network, strict),
        OP_HASH160 => match_script_hash(script, network, strict),
        OP_RETURN => Some(ClassificationResult::null_data()),
        _ => match_pubkey(script, network, strict)
            .or_else(|| match_multisig(script, network, strict)),
    };

    matched.unwrap_or_else(ClassificationResult::unknown)
}

/// OP_DUP OP_HASH160 <20-byte push> OP_EQUALVERIFY OP_CHECKSIG
fn match_pubkey_hash(
    script: &[u8],
    network: &NetworkParams,
    strict: bool,
) -> Option<ClassificationResult> {
    if script.len() < 2 || script[1] != OP_HASH160 {
        return None;
    }

    let push = decode_push(script, 2, strict).ok()?;
    if push.payload_size != 20 {
        return None;
    }

    let hash_end = push.payload_end(2);
    if script.len() != hash_end + 2
        || script[hash_end] != OP_EQUALVERIFY
        || script[hash_end + 1] != OP_CHECKSIG
    {
        return None;
    }

    let hash: [u8; 20] = script[push.payload_start(2)..hash_end].try_into().ok()?;
    Some(ClassificationResult::new(
        ScriptType::PubKeyHash,
        vec![address::to_address(network.pubkey_hash_version, &hash)],
    ))
}

/// OP_HASH160 <20-byte push> OP_EQUAL
fn match_script_hash(
    script: &[u8],
    network: &NetworkParams,
    strict: bool,
) -> Option<ClassificationResult> {
    let push = decode_push(script, 1, strict).ok()?;
    if push.payload_size != 20 {
        return None;
    }

    let hash_end = push.payload_end(1);
    if script.len() != hash_end + 1 || script[hash_end] != OP_EQUAL {
        return None;
    }

    let hash: [u8; 20] = script[push.payload_start(1)..hash_end].try_into().ok()?;
    Some(ClassificationResult::new(
        ScriptType::ScriptHash,
        vec![address::to_address(network.script_hash_version, &hash)],
    ))
}

/// <serialised public key push> OP_CHECKSIG
fn match_pubkey(
    script: &[u8],
    network: &NetworkParams,
    strict: bool,
) -> Option<ClassificationResult> {
    if script.last() != Some(&OP_CHECKSIG) {
        return None;
    }

    let push = decode_push(script, 0, strict).ok()?;
    if push.payload_end(0) != script.len() - 1 {
        return None;
    }

    let key = &script[push.payload_start(0)..push.payload_end(0)];
    if !pubkey::is_public_key(key, strict) {
        return None;
    }

    Some(ClassificationResult::new(
        ScriptType::PubKey,
        vec![address::pubkey_to_address(network, key)],
    ))
}

/// OP_m <pubkey pushes> OP_n OP_CHECKMULTISIG
///
/// Each pushed key contributes one pay-to-pubkey-hash address in script
/// order; exact duplicates collapse to their first occurrence. Any decode
/// failure, invalid key or m/n/count mismatch aborts the whole match.
fn match_multisig(
    script: &[u8],
    network: &NetworkParams,
    strict: bool,
) -> Option<ClassificationResult> {
    if script.len() < 4 || script[script.len() - 1] != OP_CHECKMULTISIG {
        return None;
    }

    let m_op = script[0];
    let n_op = script[script.len() - 2];
    if !(OP_1..=OP_16).contains(&m_op) || !(OP_1..=OP_16).contains(&n_op) || n_op < m_op {
        return None;
    }

    let expected_keys = (n_op - OP_1 + 1) as usize;
    let keys_end = script.len() - 2;

    let mut addresses = Vec::new();
    let mut seen = HashSet::new();
    let mut key_count = 0;
    let mut offset = 1;

    while offset < keys_end {
        let push = decode_push(script, offset, strict).ok()?;
        let payload_end = push.payload_end(offset);
        if payload_end > keys_end {
            return None;
        }

        let key = &script[push.payload_start(offset)..payload_end];
        if !pubkey::is_public_key(key, strict) {
            return None;
        }

        let addr = address::pubkey_to_address(network, key);
        if seen.insert(addr.clone()) {
            addresses.push(addr);
        }

        key_count += 1;
        offset = payload_end;
    }

    if key_count != expected_keys {
        return None;
    }

    Some(ClassificationResult::new(ScriptType::MultiSig, addresses))
}
