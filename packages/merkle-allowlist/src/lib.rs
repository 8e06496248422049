//! Merkle trees over allowlisted identities.
//!
//! Leaves are SHA-256 hashes of an identity's canonical bytes. Parents are
//! `sha256(min(a, b) || max(a, b))`, so a proof is just the list of sibling
//! hashes from leaf to root and carries no left/right flags. A level with an
//! odd number of nodes promotes its last node unchanged.
use sha2::{Digest, Sha256};
use thiserror::Error;

pub type Hash = [u8; 32];

/// Longest proof accepted by [`verify_proof`].
pub const MAX_PROOF_DEPTH: usize = 32;

#[derive(Error, Debug, PartialEq)]
pub enum MerkleError {
    #[error("cannot build a merkle tree without leaves")]
    EmptyLeaves {},

    #[error("leaf is not part of the tree")]
    LeafNotFound {},

    #[error("leaf index {index} out of bounds ({len} leaves)")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Hashes canonical identity bytes into a leaf.
pub fn hash_leaf(data: &[u8]) -> Hash {
    Sha256::digest(data).into()
}

/// Hashes two nodes in sorted order.
pub fn hash_pair(a: &Hash, b: &Hash) -> Hash {
    let (left, right) = if a <= b { (a, b) } else { (b, a) };
    let mut hasher = Sha256::new();
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}

/// Folds a proof into the root it commits to.
pub fn compute_root(leaf: &Hash, proof: &[Hash]) -> Hash {
    proof
        .iter()
        .fold(*leaf, |current, sibling| hash_pair(&current, sibling))
}

/// Returns true when `proof` links `leaf` to `root`. Never errors: oversized
/// proofs and mismatches are simply rejected.
pub fn verify_proof(root: &Hash, leaf: &Hash, proof: &[Hash]) -> bool {
    if proof.len() > MAX_PROOF_DEPTH {
        return false;
    }
    compute_root(leaf, proof) == *root
}

#[derive(Clone, Debug, PartialEq)]
pub struct MerkleTree {
    // layers[0] are the leaves, the last layer holds only the root
    layers: Vec<Vec<Hash>>,
}

impl MerkleTree {
    pub fn new(leaves: Vec<Hash>) -> Result<Self, MerkleError> {
        if leaves.is_empty() {
            return Err(MerkleError::EmptyLeaves {});
        }
        let mut layers = vec![leaves];
        loop {
            let next: Vec<Hash> = {
                let current = &layers[layers.len() - 1];
                if current.len() == 1 {
                    break;
                }
                current
                    .chunks(2)
                    .map(|chunk| match chunk.get(1) {
                        Some(right) => hash_pair(&chunk[0], right),
                        None => chunk[0],
                    })
                    .collect()
            };
            layers.push(next);
        }
        Ok(MerkleTree { layers })
    }

    pub fn root(&self) -> Hash {
        self.layers[self.layers.len() - 1][0]
    }

    pub fn leaves(&self) -> &[Hash] {
        &self.layers[0]
    }

    pub fn proof(&self, index: usize) -> Result<Vec<Hash>, MerkleError> {
        let len = self.layers[0].len();
        if index >= len {
            return Err(MerkleError::IndexOutOfBounds { index, len });
        }
        let mut proof = Vec::with_capacity(self.layers.len() - 1);
        let mut position = index;
        for layer in &self.layers[..self.layers.len() - 1] {
            // A promoted node has no sibling on this level
            if let Some(sibling) = layer.get(position ^ 1) {
                proof.push(*sibling);
            }
            position /= 2;
        }
        Ok(proof)
    }

    pub fn proof_for(&self, leaf: &Hash) -> Result<Vec<Hash>, MerkleError> {
        let index = self
            .leaves()
            .iter()
            .position(|candidate| candidate == leaf)
            .ok_or(MerkleError::LeafNotFound {})?;
        self.proof(index)
    }
}
