//! Native proofs as produced by the two source trees. These are read-only
//! inputs to the converters in [`crate::convert`].

use crate::error::{ProofError, ProofKind};

/// A simple tree proof: the sibling hashes from the leaf up to the root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimpleProof {
    /// sibling hashes ordered from the leaf level upwards
    pub aunts: Vec<Vec<u8>>,
}

impl SimpleProof {
    /// Creates a proof from its aunt hashes.
    pub fn new(aunts: Vec<Vec<u8>>) -> Self {
        SimpleProof { aunts }
    }
}

/// The sibling carried by an inner node of a versioned tree path.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Sibling {
    Left(Vec<u8>),
    Right(Vec<u8>),
}

/// An ancestor of the proven leaf in a versioned AVL tree.
///
/// Exactly one of `left` and `right` is populated: the other side is the
/// subtree containing the proven key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InnerNode {
    /// height of the subtree rooted at this node
    pub height: i8,
    /// number of leaves below this node
    pub size: i64,
    /// version at which this node was created
    pub version: i64,
    sibling: Sibling,
}

impl InnerNode {
    /// Creates a node from optional left and right hashes. An empty hash is
    /// treated as absent. Fails unless exactly one side is present.
    pub fn new(
        height: i8,
        size: i64,
        version: i64,
        left: Option<Vec<u8>>,
        right: Option<Vec<u8>>,
    ) -> Result<Self, ProofError> {
        let left = left.filter(|l| !l.is_empty());
        let right = right.filter(|r| !r.is_empty());
        let sibling = match (left, right) {
            (Some(left), None) => Sibling::Left(left),
            (None, Some(right)) => Sibling::Right(right),
            (left, right) => {
                return Err(ProofError::MalformedInnerNode {
                    left: left.is_some(),
                    right: right.is_some(),
                })
            }
        };
        Ok(InnerNode { height, size, version, sibling })
    }

    /// A node whose left child is the sibling, i.e. the path continues right.
    /// Fails if `left` is empty.
    pub fn with_left(
        height: i8,
        size: i64,
        version: i64,
        left: Vec<u8>,
    ) -> Result<Self, ProofError> {
        Self::new(height, size, version, Some(left), None)
    }

    /// A node whose right child is the sibling, i.e. the path continues left.
    /// Fails if `right` is empty.
    pub fn with_right(
        height: i8,
        size: i64,
        version: i64,
        right: Vec<u8>,
    ) -> Result<Self, ProofError> {
        Self::new(height, size, version, None, Some(right))
    }

    /// The left child hash, if it is the sibling.
    pub fn left(&self) -> Option<&[u8]> {
        match &self.sibling {
            Sibling::Left(left) => Some(left.as_slice()),
            Sibling::Right(_) => None,
        }
    }

    /// The right child hash, if it is the sibling.
    pub fn right(&self) -> Option<&[u8]> {
        match &self.sibling {
            Sibling::Left(_) => None,
            Sibling::Right(right) => Some(right.as_slice()),
        }
    }
}

/// Proof that a key exists in a versioned tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyExistsProof {
    /// version of the proven leaf
    pub version: i64,
    /// inner nodes from the leaf's parent up to the root
    pub inner_path: Vec<InnerNode>,
}

/// Proof that a key is absent from a versioned tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyAbsentProof {
    /// tree version the proof was taken at
    pub version: i64,
    /// inner nodes of the neighbouring leaf
    pub inner_path: Vec<InnerNode>,
}

/// Proof over a range of keys in a versioned tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyRangeProof {
    /// tree version the proof was taken at
    pub version: i64,
    /// one path per leaf in the range
    pub paths: Vec<Vec<InnerNode>>,
}

/// Any native versioned tree proof.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VersionedProof {
    /// see [`KeyExistsProof`]
    Exists(KeyExistsProof),
    /// see [`KeyAbsentProof`]
    Absent(KeyAbsentProof),
    /// see [`KeyRangeProof`]
    Range(KeyRangeProof),
}

impl VersionedProof {
    /// The variant of this proof.
    pub fn kind(&self) -> ProofKind {
        match self {
            VersionedProof::Exists(_) => ProofKind::Exists,
            VersionedProof::Absent(_) => ProofKind::Absent,
            VersionedProof::Range(_) => ProofKind::Range,
        }
    }
}

#[cfg(test)]
mod tests {
    use coverage_helper::test;

    use crate::error::ProofError;
    use crate::native::InnerNode;

    #[test]
    fn test_inner_node_exclusive() -> anyhow::Result<()> {
        let node = InnerNode::new(1, 2, 3, Some(vec![1]), None)?;
        assert_eq!(Some(&[1u8][..]), node.left());
        assert_eq!(None, node.right());

        let node = InnerNode::new(1, 2, 3, Some(vec![]), Some(vec![2]))?;
        assert_eq!(None, node.left());
        assert_eq!(Some(&[2u8][..]), node.right());
        Ok(())
    }

    #[test]
    fn test_inner_node_malformed() {
        match InnerNode::new(1, 2, 3, Some(vec![1]), Some(vec![2])) {
            Err(ProofError::MalformedInnerNode { left: true, right: true }) => {}
            other => panic!("unexpected {:?}", other),
        }
        match InnerNode::new(1, 2, 3, None, Some(vec![])) {
            Err(ProofError::MalformedInnerNode { left: false, right: false }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_empty_sibling_rejected() -> anyhow::Result<()> {
        match InnerNode::with_left(1, 2, 3, vec![]) {
            Err(ProofError::MalformedInnerNode { left: false, right: false }) => {}
            other => panic!("unexpected {:?}", other),
        }
        match InnerNode::with_right(1, 2, 3, vec![]) {
            Err(ProofError::MalformedInnerNode { left: false, right: false }) => {}
            other => panic!("unexpected {:?}", other),
        }

        let node = InnerNode::with_left(1, 2, 3, vec![7])?;
        assert_eq!(InnerNode::new(1, 2, 3, Some(vec![7]), None)?, node);
        Ok(())
    }
}
