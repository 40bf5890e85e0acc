//! Signature type registry
//!
//! Maps the 2-byte signature type code at the head of every data item to the
//! byte widths of its signature and owner public key. The table is built once
//! on first use and is read-only afterwards, so lookups need no locking.

use crate::error::{DecodeError, DecodeResult};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Field widths for one signature scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureTypeInfo {
    /// Scheme name
    pub name: &'static str,
    /// Signature length in bytes
    pub signature_length: usize,
    /// Owner public key length in bytes
    pub public_key_length: usize,
}

impl SignatureTypeInfo {
    const fn new(name: &'static str, signature_length: usize, public_key_length: usize) -> Self {
        SignatureTypeInfo {
            name,
            signature_length,
            public_key_length,
        }
    }

    /// Smallest data item buffer this scheme can occupy: type code, signature and owner
    pub fn min_item_len(&self) -> usize {
        2 + self.signature_length + self.public_key_length
    }
}

/// Signature type codes
pub mod codes {
    /// Arweave RSA-PSS (4096-bit)
    pub const ARWEAVE: u16 = 1;
    /// Ed25519
    pub const ED25519: u16 = 2;
    /// Ethereum secp256k1
    pub const ETHEREUM: u16 = 3;
    /// Solana Ed25519
    pub const SOLANA: u16 = 4;
    /// Aptos injected wallet
    pub const INJECTED_APTOS: u16 = 5;
    /// Aptos multisig (32 keys)
    pub const MULTI_APTOS: u16 = 6;
    /// Ethereum EIP-712 typed data
    pub const TYPED_ETHEREUM: u16 = 7;
}

static SIGNATURE_REGISTRY: Lazy<HashMap<u16, SignatureTypeInfo>> = Lazy::new(|| {
    HashMap::from([
        (codes::ARWEAVE, SignatureTypeInfo::new("arweave", 512, 512)),
        (codes::ED25519, SignatureTypeInfo::new("ed25519", 64, 32)),
        (codes::ETHEREUM, SignatureTypeInfo::new("ethereum", 65, 65)),
        (codes::SOLANA, SignatureTypeInfo::new("solana", 64, 32)),
        (codes::INJECTED_APTOS, SignatureTypeInfo::new("injectedAptos", 64, 32)),
        (
            codes::MULTI_APTOS,
            SignatureTypeInfo::new("multiAptos", 64 * 32 + 4, 32 * 32 + 1),
        ),
        (codes::TYPED_ETHEREUM, SignatureTypeInfo::new("typedEthereum", 65, 42)),
    ])
});

/// Resolve the field widths for a signature type code.
pub fn lookup(signature_type: u16) -> DecodeResult<&'static SignatureTypeInfo> {
    SIGNATURE_REGISTRY
        .get(&signature_type)
        .ok_or(DecodeError::UnsupportedSignatureType(signature_type))
}

/// All registered signature type codes, ascending.
pub fn registered_types() -> Vec<u16> {
    let mut types: Vec<u16> = SIGNATURE_REGISTRY.keys().copied().collect();
    types.sort_unstable();
    types
}
