//! Converters from native source tree proofs to the canonical model, and
//! the dispatcher over native versioned tree proofs.

mod simple;
mod versioned;

pub use crate::convert::simple::from_simple_proof;
pub use crate::convert::versioned::{
    from_key_absent_proof, from_key_exists_proof, from_key_range_proof,
};

use crate::error::ProofError;
use crate::merkle::{KeyProof, ProofSpec};
use crate::native::VersionedProof;

impl ProofSpec {
    /// Routes a native versioned tree proof to its converter. Only
    /// existence proofs convert; every other variant is reported as
    /// unsupported.
    pub fn convert_key_proof(&self, proof: &VersionedProof) -> Result<KeyProof, ProofError> {
        match proof {
            VersionedProof::Exists(exists) => {
                Ok(KeyProof::Exists(self.convert_key_exists_proof(exists)))
            }
            VersionedProof::Absent(absent) => from_key_absent_proof(absent),
            VersionedProof::Range(range) => from_key_range_proof(range),
        }
    }
}

/// Converts any native versioned tree proof using the default [`ProofSpec`].
pub fn from_key_proof(proof: &VersionedProof) -> Result<KeyProof, ProofError> {
    ProofSpec::default().convert_key_proof(proof)
}
