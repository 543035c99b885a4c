use crate::{
    hash::{leaf_sum, node_sum},
    proof::{Proof, ProofStep, Side},
};

use alloc::vec::Vec;
use digest::{Digest, Output};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MerkleTreeError {
    #[display(fmt = "the tree has no leaves, so the root is undefined")]
    EmptyTree,

    #[display(fmt = "leaf index {_0} is out of range for a tree of {_1} leaves")]
    IndexOutOfRange(u64, u64),
}

#[cfg(feature = "std")]
impl std::error::Error for MerkleTreeError {}

/// A static binary Merkle tree, stored as an arena of levels.
///
/// Level 0 holds the leaf digests in input order; each subsequent level
/// holds the pairwise digests of the level below it, with the unpaired tail
/// of an odd-length level carried forward unchanged. The last level holds
/// the single root digest. The tree is built once from a fixed record list
/// and never mutated, so shared references to it are safe to use from
/// multiple threads.
pub struct MerkleTree<D: Digest> {
    levels: Vec<Vec<Output<D>>>,
}

impl<D: Digest> MerkleTree<D> {
    /// Hashes `records` into leaves and folds levels upward until a single
    /// root digest remains. Zero records produce a tree with zero levels;
    /// [`root`](Self::root) and [`prove`](Self::prove) report `EmptyTree`
    /// on such a tree.
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let leaves: Vec<Output<D>> = records
            .into_iter()
            .map(|record| leaf_sum::<D>(record.as_ref()))
            .collect();
        if leaves.is_empty() {
            return Self { levels: Vec::new() };
        }

        let mut levels = Vec::new();
        let mut current = leaves;
        while current.len() > 1 {
            let mut next = Vec::with_capacity((current.len() + 1) / 2);
            for pair in current.chunks(2) {
                if let [left, right] = pair {
                    next.push(node_sum::<D>(left, right));
                } else if let [tail] = pair {
                    // The unpaired tail of an odd level is promoted
                    // unchanged, not hashed with itself.
                    next.push(tail.clone());
                }
            }
            levels.push(current);
            current = next;
        }
        levels.push(current);

        Self { levels }
    }

    /// The single digest committing to the whole record list.
    pub fn root(&self) -> Result<Output<D>, MerkleTreeError> {
        self.levels
            .last()
            .and_then(|level| level.first())
            .cloned()
            .ok_or(MerkleTreeError::EmptyTree)
    }

    pub fn leaves_count(&self) -> u64 {
        self.levels
            .first()
            .map(|leaves| leaves.len() as u64)
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of levels, leaves included.
    pub fn height(&self) -> usize {
        self.levels.len()
    }

    /// The digests at the given level, `0` being the leaves.
    pub fn level(&self, height: usize) -> Option<&[Output<D>]> {
        self.levels.get(height).map(Vec::as_slice)
    }

    /// The leaf digest at `index`.
    pub fn leaf(&self, index: u64) -> Result<Output<D>, MerkleTreeError> {
        let leaves = self.levels.first().ok_or(MerkleTreeError::EmptyTree)?;
        usize::try_from(index)
            .ok()
            .and_then(|position| leaves.get(position))
            .cloned()
            .ok_or(MerkleTreeError::IndexOutOfRange(
                index,
                leaves.len() as u64,
            ))
    }

    /// Derives the inclusion path for the leaf at `leaf_index`: one sibling
    /// digest per level the leaf participates in, ordered from the leaves
    /// upward. Levels where the running node is the carried-forward tail of
    /// an odd level have no sibling and contribute no step.
    pub fn prove(&self, leaf_index: u64) -> Result<Proof<D>, MerkleTreeError> {
        if self.is_empty() {
            return Err(MerkleTreeError::EmptyTree);
        }
        let leaves_count = self.leaves_count();
        if leaf_index >= leaves_count {
            return Err(MerkleTreeError::IndexOutOfRange(leaf_index, leaves_count));
        }

        let mut steps = Vec::new();
        let mut index = leaf_index as usize;
        for level in self.levels.iter().take(self.levels.len() - 1) {
            if index % 2 == 0 {
                if let Some(sibling) = level.get(index + 1) {
                    steps.push(ProofStep {
                        sibling: sibling.clone(),
                        side: Side::Right,
                    });
                }
            } else {
                // A right child always has a left sibling.
                if let Some(sibling) = level.get(index - 1) {
                    steps.push(ProofStep {
                        sibling: sibling.clone(),
                        side: Side::Left,
                    });
                }
            }
            index /= 2;
        }

        Ok(Proof::from_steps(steps))
    }
}

impl<D: Digest> Clone for MerkleTree<D> {
    fn clone(&self) -> Self {
        Self {
            levels: self.levels.clone(),
        }
    }
}

impl<D: Digest> core::fmt::Debug for MerkleTree<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MerkleTree")
            .field("levels", &self.levels)
            .finish()
    }
}
