//! Output script opcode constants
//!
//! Only the opcodes the template matchers compare against. Any byte value
//! in `1..=MAX_DIRECT_PUSH` is itself a direct push of that many bytes.

/// Largest direct push (the opcode doubles as the byte count)
pub const MAX_DIRECT_PUSH: u8 = 0x4b;
/// Push with a 1-byte length field
pub const OP_PUSHDATA1: u8 = 0x4c;
/// Push with a 2-byte little-endian length field
pub const OP_PUSHDATA2: u8 = 0x4d;
/// Push with a 4-byte little-endian length field
pub const OP_PUSHDATA4: u8 = 0x4e;
/// Small integer 1; OP_1..OP_16 are contiguous
pub const OP_1: u8 = 0x51;
/// Small integer 16
pub const OP_16: u8 = 0x60;
pub const OP_RETURN: u8 = 0x6a;
pub const OP_DUP: u8 = 0x76;
pub const OP_EQUAL: u8 = 0x87;
pub const OP_EQUALVERIFY: u8 = 0x88;
pub const OP_HASH160: u8 = 0xa9;
pub const OP_CHECKSIG: u8 = 0xac;
pub const OP_CHECKMULTISIG: u8 = 0xae;
