//! Hash algorithms available to proof steps.

use blake2::digest::consts::U32;
use blake2::Blake2b;
use digest::Digest;
use ripemd::Ripemd160;
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::traits::Hasher;

/// The hash algorithm applied at a single proof step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashOp {
    /// RIPEMD-160, used by both source trees.
    Ripemd160,
    /// SHA2-256.
    Sha256,
    /// BLAKE2b with a 256 bit output.
    Blake2b256,
    /// BLAKE3 with a 256 bit output.
    Blake3_256,
}

impl HashOp {
    /// Creates a fresh hasher for this algorithm.
    pub fn hasher(&self) -> Box<dyn Hasher> {
        match self {
            HashOp::Ripemd160 => Box::new(DigestHasher::<Ripemd160>::new()),
            HashOp::Sha256 => Box::new(DigestHasher::<Sha256>::new()),
            HashOp::Blake2b256 => Box::new(DigestHasher::<Blake2b<U32>>::new()),
            HashOp::Blake3_256 => Box::new(Blake3Hash::new()),
        }
    }

    /// Hashes the concatenation of `parts` on the stack, without boxing a
    /// hasher.
    pub fn digest(&self, parts: &[&[u8]]) -> Vec<u8> {
        match self {
            HashOp::Ripemd160 => digest_parts::<DigestHasher<Ripemd160>>(parts),
            HashOp::Sha256 => digest_parts::<DigestHasher<Sha256>>(parts),
            HashOp::Blake2b256 => digest_parts::<DigestHasher<Blake2b<U32>>>(parts),
            HashOp::Blake3_256 => digest_parts::<Blake3Hash>(parts),
        }
    }

    /// The digest length in bytes.
    pub fn output_len(&self) -> usize {
        match self {
            HashOp::Ripemd160 => 20,
            HashOp::Sha256 | HashOp::Blake2b256 | HashOp::Blake3_256 => 32,
        }
    }
}

fn digest_parts<H: Hasher + Default>(parts: &[&[u8]]) -> Vec<u8> {
    let mut hasher = H::default();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize()
}

/// Adapts any RustCrypto [`Digest`] to [`Hasher`].
pub struct DigestHasher<D: Digest> {
    digest: D,
}

impl<D: Digest> DigestHasher<D> {
    /// Creates a hasher with an empty state.
    pub fn new() -> Self {
        DigestHasher { digest: D::new() }
    }
}

impl<D: Digest> Default for DigestHasher<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Digest> Hasher for DigestHasher<D> {
    fn update(&mut self, value: &[u8]) {
        Digest::update(&mut self.digest, value);
    }

    fn finalize(&mut self) -> Vec<u8> {
        let digest = std::mem::replace(&mut self.digest, D::new());
        digest.finalize().to_vec()
    }
}

/// A [`Hasher`] backed by blake3.
pub struct Blake3Hash {
    hasher: blake3::Hasher,
}

impl Blake3Hash {
    /// Creates a hasher with an empty state.
    pub fn new() -> Self {
        Blake3Hash { hasher: blake3::Hasher::new() }
    }
}

impl Default for Blake3Hash {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Blake3Hash {
    fn update(&mut self, value: &[u8]) {
        self.hasher.update(value);
    }

    fn finalize(&mut self) -> Vec<u8> {
        let hash: [u8; 32] = self.hasher.finalize().into();
        self.hasher.reset();
        Vec::from(hash)
    }
}
