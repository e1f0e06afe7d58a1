//! Self-describing JSON envelope for [`KeyProof`].
//!
//! The variant is identified by a stable `type` discriminator (see
//! [`crate::ProofKind::discriminator`]) and the fields live under `value`.
//! Prefixes and suffixes are hex encoded.

use crate::error::ProofError;
use crate::merkle::KeyProof;

/// Serializes a proof into its JSON envelope.
pub fn to_json(proof: &KeyProof) -> Result<String, ProofError> {
    Ok(serde_json::to_string(proof)?)
}

/// Parses a proof from its JSON envelope.
pub fn from_json(json: &str) -> Result<KeyProof, ProofError> {
    Ok(serde_json::from_str(json)?)
}
