#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod hash;
pub mod proof;
pub mod tree;
pub mod verify;

pub use proof::{Proof, ProofData, ProofDecodeError, ProofStep, Side};
pub use tree::{MerkleTree, MerkleTreeError};
pub use verify::verify;

/// Merkle tree over the crate's default digest, SHA3-256.
pub type Sha3MerkleTree = MerkleTree<sha3::Sha3_256>;
