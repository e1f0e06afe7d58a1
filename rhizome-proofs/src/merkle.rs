//! The canonical, tree agnostic proof model.
//!
//! An [`ExistsProof`] is a [`LeafTransform`] followed by an ordered list of
//! [`ProofStep`]s from the leaf towards the root. Replaying them against a
//! claimed value yields a root hash:
//!
//! ```text
//! h = Hash(leaf.op, leaf.prefix ++ value)
//! h = Hash(step.op, step.prefix ++ h ++ step.suffix)   for every step
//! ```
//!
//! Converters are responsible for producing prefixes and suffixes that are
//! byte for byte what the source tree hashed at each level.

use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::error::{ProofError, ProofKind};
use crate::hash::HashOp;

/// One level of a merkle path: `Hash(op, prefix ++ child ++ suffix)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    /// hash algorithm for this level
    pub op: HashOp,
    /// bytes hashed before the child hash
    #[serde(with = "hex")]
    pub prefix: Vec<u8>,
    /// bytes hashed after the child hash
    #[serde(with = "hex")]
    pub suffix: Vec<u8>,
}

impl ProofStep {
    /// Computes the parent hash from `child`.
    pub fn apply(&self, child: &[u8]) -> Vec<u8> {
        self.op.digest(&[&self.prefix, child, &self.suffix])
    }
}

/// The transformation applied to the raw value: `Hash(op, prefix ++ value)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafTransform {
    /// hash algorithm for the leaf
    pub op: HashOp,
    /// bytes hashed before the value
    #[serde(with = "hex")]
    pub prefix: Vec<u8>,
}

impl LeafTransform {
    /// Computes the leaf hash of `value`.
    pub fn apply(&self, value: &[u8]) -> Vec<u8> {
        self.op.digest(&[&self.prefix, value])
    }
}

/// Proof that a value is stored under some root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistsProof {
    /// the leaf transform
    pub leaf: LeafTransform,
    /// the path from the leaf to the root
    pub steps: Vec<ProofStep>,
}

impl ExistsProof {
    /// Replays the proof against `value` and returns the resulting root.
    pub fn calculate_root(&self, value: &[u8]) -> Vec<u8> {
        self.steps
            .iter()
            .fold(self.leaf.apply(value), |hash, step| step.apply(&hash))
    }

    /// The number of levels between the leaf and the root.
    pub fn depth(&self) -> usize {
        self.steps.len()
    }
}

/// Proof that a key is absent. Declared for completeness; no converter
/// produces one and it never verifies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct AbsentProof {}

/// Proof over a key range. Declared for completeness; no converter
/// produces one and it never verifies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct RangeProof {}

/// Any canonical key proof.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum KeyProof {
    /// see [`ExistsProof`]
    #[serde(rename = "rhizome/ExistsProof")]
    Exists(ExistsProof),
    /// see [`AbsentProof`]
    #[serde(rename = "rhizome/AbsentProof")]
    Absent(AbsentProof),
    /// see [`RangeProof`]
    #[serde(rename = "rhizome/RangeProof")]
    Range(RangeProof),
}

impl KeyProof {
    /// The variant of this proof.
    pub fn kind(&self) -> ProofKind {
        match self {
            KeyProof::Exists(_) => ProofKind::Exists,
            KeyProof::Absent(_) => ProofKind::Absent,
            KeyProof::Range(_) => ProofKind::Range,
        }
    }

    /// Verifies the proof. Only existence proofs can succeed.
    pub fn verify(&self, value: &[u8], root: &[u8]) -> bool {
        match self {
            KeyProof::Exists(proof) => verify(proof, value, root),
            KeyProof::Absent(_) | KeyProof::Range(_) => false,
        }
    }
}

impl From<ExistsProof> for KeyProof {
    fn from(proof: ExistsProof) -> Self {
        KeyProof::Exists(proof)
    }
}

/// Returns true if replaying `proof` against `value` yields `root`.
pub fn verify(proof: &ExistsProof, value: &[u8], root: &[u8]) -> bool {
    let calculated = proof.calculate_root(value);
    let ok: bool = calculated.as_slice().ct_eq(root).into();
    if !ok {
        debug!(
            calculated = %hex::encode(&calculated),
            expected = %hex::encode(root),
            depth = proof.depth(),
            "root mismatch"
        );
    }
    ok
}

/// The hash algorithms a verifier expects from a given source tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProofSpec {
    /// op expected for the leaf transform
    pub leaf_op: HashOp,
    /// op expected for every inner step
    pub inner_op: HashOp,
}

impl Default for ProofSpec {
    fn default() -> Self {
        ProofSpec {
            leaf_op: HashOp::Ripemd160,
            inner_op: HashOp::Ripemd160,
        }
    }
}

impl ProofSpec {
    /// A `ProofSpec` using `op` for the leaf and every step.
    pub fn with_op(op: HashOp) -> Self {
        ProofSpec {
            leaf_op: op,
            inner_op: op,
        }
    }

    /// Checks that `proof` uses only the ops configured here.
    pub fn check(&self, proof: &ExistsProof) -> Result<(), ProofError> {
        if proof.leaf.op != self.leaf_op {
            return Err(ProofError::HashOpMismatch {
                expected: self.leaf_op,
                found: proof.leaf.op,
            });
        }
        match proof.steps.iter().find(|step| step.op != self.inner_op) {
            Some(step) => Err(ProofError::HashOpMismatch {
                expected: self.inner_op,
                found: step.op,
            }),
            None => Ok(()),
        }
    }

    /// Verifies `proof` after checking it against this spec.
    pub fn verify(&self, proof: &ExistsProof, value: &[u8], root: &[u8]) -> bool {
        match self.check(proof) {
            Ok(()) => verify(proof, value, root),
            Err(err) => {
                debug!(%err, "hash op rejected");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use coverage_helper::test;

    use crate::error::{ProofError, ProofKind};
    use crate::hash::HashOp;
    use crate::merkle::*;

    fn two_level_proof() -> ExistsProof {
        ExistsProof {
            leaf: LeafTransform { op: HashOp::Sha256, prefix: vec![0] },
            steps: vec![
                ProofStep { op: HashOp::Sha256, prefix: vec![1], suffix: b"right".to_vec() },
                ProofStep { op: HashOp::Sha256, prefix: b"left".to_vec(), suffix: vec![] },
            ],
        }
    }

    #[test]
    fn test_replay() {
        let proof = two_level_proof();
        let leaf = HashOp::Sha256.digest(&[&[0], b"value"]);
        let mid = HashOp::Sha256.digest(&[&[1], &leaf, b"right"]);
        let root = HashOp::Sha256.digest(&[b"left", &mid]);

        assert_eq!(root, proof.calculate_root(b"value"));
        assert!(verify(&proof, b"value", &root));
        assert!(!verify(&proof, b"other", &root));
        assert!(!verify(&proof, b"value", &root[..31]));
    }

    #[test]
    fn test_empty_path_is_leaf_hash() {
        let proof = ExistsProof {
            leaf: LeafTransform { op: HashOp::Ripemd160, prefix: vec![] },
            steps: vec![],
        };
        assert!(verify(&proof, b"v", &HashOp::Ripemd160.digest(&[b"v"])));
    }

    #[test]
    fn test_key_proof_verify() {
        let proof = two_level_proof();
        let root = proof.calculate_root(b"value");
        let key_proof = KeyProof::from(proof);
        assert_eq!(ProofKind::Exists, key_proof.kind());
        assert!(key_proof.verify(b"value", &root));

        assert!(!KeyProof::Absent(AbsentProof {}).verify(b"value", &root));
        assert!(!KeyProof::Range(RangeProof {}).verify(b"value", &root));
    }

    #[test]
    fn test_spec_check() {
        let proof = two_level_proof();
        let root = proof.calculate_root(b"value");
        let spec = ProofSpec::with_op(HashOp::Sha256);
        assert!(spec.check(&proof).is_ok());
        assert!(spec.verify(&proof, b"value", &root));

        let mut mixed = proof.clone();
        mixed.steps[1].op = HashOp::Blake3_256;
        match spec.check(&mixed) {
            Err(ProofError::HashOpMismatch { expected, found }) => {
                assert_eq!(HashOp::Sha256, expected);
                assert_eq!(HashOp::Blake3_256, found);
            }
            other => panic!("unexpected {:?}", other),
        }

        assert!(!ProofSpec::default().verify(&proof, b"value", &root));
    }

    #[test]
    fn test_spec_from_json() -> anyhow::Result<()> {
        let spec: ProofSpec = serde_json::from_str(r#"{"inner_op": "Blake2b256"}"#)?;
        assert_eq!(HashOp::Ripemd160, spec.leaf_op);
        assert_eq!(HashOp::Blake2b256, spec.inner_op);
        Ok(())
    }
}
