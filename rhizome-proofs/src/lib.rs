//! Conversion of native merkle proofs from the simple tree and the
//! versioned AVL tree into one canonical proof shape which a single
//! generic verifier can replay.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
// coverage-helper 0.2.3+ marks its `test` attribute deprecated
#![cfg_attr(test, allow(deprecated))]

pub mod convert;
pub mod envelope;
pub mod error;
pub mod hash;
pub mod merkle;
pub mod native;
pub mod traits;
pub mod varint;

pub use crate::convert::{
    from_key_absent_proof, from_key_exists_proof, from_key_proof, from_key_range_proof,
    from_simple_proof,
};
pub use crate::error::{ProofError, ProofKind};
pub use crate::hash::HashOp;
pub use crate::merkle::{
    verify, AbsentProof, ExistsProof, KeyProof, LeafTransform, ProofSpec, ProofStep, RangeProof,
};
