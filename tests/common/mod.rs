//! Common Test Utilities
//!
//! Shared script builders and known-good key material used across the
//! integration tests.

/// secp256k1 generator point, compressed (0x02 prefix, even y)
pub const GENERATOR_COMPRESSED: &str =
    "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

/// secp256k1 generator point, uncompressed
pub const GENERATOR_UNCOMPRESSED: &str =
    "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

/// Twice the generator, compressed - a second, distinct valid key
pub const DOUBLE_GENERATOR_COMPRESSED: &str =
    "02c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5";

/// Genesis block coinbase public key
pub const GENESIS_PUBKEY: &str =
    "04678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f";

/// hash160 of the genesis coinbase key
pub const GENESIS_PUBKEY_HASH: &str = "62e907b15cbf27d5425399ebf6f0fb50ebb88f18";

/// Mainnet P2PKH address paying to the genesis coinbase key
pub const GENESIS_ADDRESS: &str = "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa";

pub fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).expect("valid test vector hex")
}

/// Minimal direct push of `data`
pub fn push(data: &[u8]) -> Vec<u8> {
    assert!(data.len() <= 75, "direct pushes carry at most 75 bytes");
    let mut out = vec![data.len() as u8];
    out.extend_from_slice(data);
    out
}

/// OP_PUSHDATA1 push of `data` - non-minimal for payloads under 76 bytes
pub fn pushdata1(data: &[u8]) -> Vec<u8> {
    assert!(data.len() <= u8::MAX as usize);
    let mut out = vec![0x4c, data.len() as u8];
    out.extend_from_slice(data);
    out
}

/// OP_DUP OP_HASH160 <hash> OP_EQUALVERIFY OP_CHECKSIG
pub fn p2pkh_script(hash: &[u8]) -> Vec<u8> {
    let mut script = vec![0x76, 0xa9];
    script.extend(push(hash));
    script.extend([0x88, 0xac]);
    script
}

/// OP_HASH160 <hash> OP_EQUAL
pub fn p2sh_script(hash: &[u8]) -> Vec<u8> {
    let mut script = vec![0xa9];
    script.extend(push(hash));
    script.push(0x87);
    script
}

/// <pubkey> OP_CHECKSIG
pub fn p2pk_script(pubkey: &[u8]) -> Vec<u8> {
    let mut script = push(pubkey);
    script.push(0xac);
    script
}

/// OP_m <pubkeys> OP_n OP_CHECKMULTISIG
///
/// `m` and `n` are the small integer values, not opcodes; `n` is encoded
/// as given even when it disagrees with the key count, so tests can build
/// malformed scripts.
pub fn multisig_script(m: u8, pubkeys: &[&[u8]], n: u8) -> Vec<u8> {
    let mut script = vec![0x50 + m];
    for pubkey in pubkeys {
        script.extend(push(pubkey));
    }
    script.extend([0x50 + n, 0xae]);
    script
}
