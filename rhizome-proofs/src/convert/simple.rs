use tracing::{debug, trace};

use crate::merkle::{ExistsProof, LeafTransform, ProofSpec, ProofStep};
use crate::native::SimpleProof;
use crate::varint::{put_length_prefixed, MAX_VARINT_LEN};

impl ProofSpec {
    /// Converts a simple tree proof for the leaf at `leaf_index`.
    ///
    /// At each level an even index means the current node is the left child,
    /// so the aunt goes into the suffix; an odd index puts it into the
    /// prefix. `total_leaves` does not influence the result.
    pub fn convert_simple_proof(
        &self,
        proof: &SimpleProof,
        leaf_index: usize,
        total_leaves: usize,
    ) -> ExistsProof {
        self.convert_simple_aunts(&proof.aunts, leaf_index, total_leaves)
    }

    /// Converts borrowed simple tree aunts without taking ownership of them.
    pub fn convert_simple_aunts(
        &self,
        aunts: &[Vec<u8>],
        leaf_index: usize,
        total_leaves: usize,
    ) -> ExistsProof {
        let mut index = leaf_index;
        let steps = aunts
            .iter()
            .map(|aunt| {
                let mut sibling = Vec::with_capacity(MAX_VARINT_LEN + aunt.len());
                put_length_prefixed(&mut sibling, aunt);
                let step = if index % 2 == 0 {
                    ProofStep { op: self.inner_op, prefix: vec![], suffix: sibling }
                } else {
                    ProofStep { op: self.inner_op, prefix: sibling, suffix: vec![] }
                };
                trace!(index, left = index % 2 == 0, "simple step");
                index /= 2;
                step
            })
            .collect::<Vec<_>>();

        debug!(
            leaf_index,
            total_leaves,
            depth = steps.len(),
            op = ?self.inner_op,
            "converted simple proof"
        );
        ExistsProof {
            leaf: LeafTransform { op: self.leaf_op, prefix: vec![] },
            steps,
        }
    }
}

/// Converts the aunts of a simple tree proof using the default [`ProofSpec`].
pub fn from_simple_proof(
    aunts: &[Vec<u8>],
    leaf_index: usize,
    total_leaves: usize,
) -> ExistsProof {
    ProofSpec::default().convert_simple_aunts(aunts, leaf_index, total_leaves)
}
