use tracing::{debug, trace, warn};

use crate::error::{ProofError, ProofKind};
use crate::merkle::{ExistsProof, KeyProof, LeafTransform, ProofSpec, ProofStep};
use crate::native::{InnerNode, KeyAbsentProof, KeyExistsProof, KeyRangeProof};
use crate::varint::{put_length_prefixed, put_varint_signed, MAX_VARINT_LEN};

/// Tag written at the front of every leaf pre-image.
const LEAF_HEIGHT: i8 = 0;
/// Leaves always have a size of one.
const LEAF_SIZE: i64 = 1;

impl ProofSpec {
    /// Converts a versioned tree existence proof.
    pub fn convert_key_exists_proof(&self, proof: &KeyExistsProof) -> ExistsProof {
        let mut leaf_prefix = Vec::with_capacity(3 * MAX_VARINT_LEN);
        put_varint_signed(&mut leaf_prefix, LEAF_HEIGHT as i64);
        put_varint_signed(&mut leaf_prefix, LEAF_SIZE);
        put_varint_signed(&mut leaf_prefix, proof.version);

        let steps = proof
            .inner_path
            .iter()
            .map(|inner| self.inner_step(inner))
            .collect::<Vec<_>>();

        debug!(
            version = proof.version,
            depth = steps.len(),
            op = ?self.inner_op,
            "converted key exists proof"
        );
        ExistsProof {
            leaf: LeafTransform { op: self.leaf_op, prefix: leaf_prefix },
            steps,
        }
    }

    fn inner_step(&self, inner: &InnerNode) -> ProofStep {
        let sibling_len = inner.left().or(inner.right()).map_or(0, <[u8]>::len);
        let mut prefix = Vec::with_capacity(4 * MAX_VARINT_LEN + sibling_len);
        put_varint_signed(&mut prefix, inner.height as i64);
        put_varint_signed(&mut prefix, inner.size);
        put_varint_signed(&mut prefix, inner.version);

        let mut suffix = vec![];
        match (inner.left(), inner.right()) {
            (Some(left), _) => put_length_prefixed(&mut prefix, left),
            (None, Some(right)) => {
                suffix.reserve(MAX_VARINT_LEN + right.len());
                put_length_prefixed(&mut suffix, right);
            }
            // unreachable through InnerNode's constructors
            (None, None) => {}
        }

        trace!(
            height = inner.height,
            size = inner.size,
            version = inner.version,
            left = inner.left().is_some(),
            "inner step"
        );
        ProofStep { op: self.inner_op, prefix, suffix }
    }
}

/// Converts a versioned tree existence proof using the default [`ProofSpec`].
pub fn from_key_exists_proof(proof: &KeyExistsProof) -> ExistsProof {
    ProofSpec::default().convert_key_exists_proof(proof)
}

/// Absence proofs have no canonical form yet.
pub fn from_key_absent_proof(proof: &KeyAbsentProof) -> Result<KeyProof, ProofError> {
    warn!(version = proof.version, "absence proofs are not supported");
    Err(ProofError::UnsupportedProofVariant(ProofKind::Absent))
}

/// Range proofs have no canonical form yet.
pub fn from_key_range_proof(proof: &KeyRangeProof) -> Result<KeyProof, ProofError> {
    warn!(
        version = proof.version,
        paths = proof.paths.len(),
        "range proofs are not supported"
    );
    Err(ProofError::UnsupportedProofVariant(ProofKind::Range))
}
