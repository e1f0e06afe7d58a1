//! The streaming hasher abstraction shared by every [`crate::HashOp`].

/// A streaming hash function.
pub trait Hasher {
    /// Feeds `value` into the hash state.
    fn update(&mut self, value: &[u8]);

    /// Returns the digest and resets the state so the hasher can be reused.
    fn finalize(&mut self) -> Vec<u8>;
}
