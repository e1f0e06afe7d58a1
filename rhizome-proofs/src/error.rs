//! Errors returned by proof conversion and envelope encoding.
//!
//! A proof that fails to verify is not an error: [`crate::verify`] simply
//! returns `false`.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::hash::HashOp;

/// The concrete variant of a [`crate::KeyProof`] or of a native versioned
/// tree proof.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProofKind {
    /// Proof that a key exists with a given value.
    Exists,
    /// Proof that a key is absent.
    Absent,
    /// Proof over a range of keys.
    Range,
}

impl ProofKind {
    /// The stable discriminator used for this variant in serialized envelopes.
    pub fn discriminator(&self) -> &'static str {
        match self {
            ProofKind::Exists => "rhizome/ExistsProof",
            ProofKind::Absent => "rhizome/AbsentProof",
            ProofKind::Range => "rhizome/RangeProof",
        }
    }
}

impl Display for ProofKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.discriminator())
    }
}

/// Errors that can occur while converting or encoding proofs.
#[derive(Debug, thiserror::Error)]
pub enum ProofError {
    /// The proof envelope could not be serialized or deserialized.
    #[error("encoding failure: {0}")]
    EncodingFailure(#[from] serde_json::Error),

    /// The native proof has no mapping onto the canonical proof model.
    #[error("unsupported proof variant: {0}")]
    UnsupportedProofVariant(ProofKind),

    /// An inner node must carry exactly one sibling hash.
    #[error("malformed inner node: left present = {left}, right present = {right}")]
    MalformedInnerNode {
        /// whether a left hash was supplied
        left: bool,
        /// whether a right hash was supplied
        right: bool,
    },

    /// A proof step used a different hash algorithm than the [`crate::ProofSpec`] expects.
    #[error("hash op mismatch: expected {expected:?}, found {found:?}")]
    HashOpMismatch {
        /// the op required by the [`crate::ProofSpec`]
        expected: HashOp,
        /// the op found in the proof
        found: HashOp,
    },
}
