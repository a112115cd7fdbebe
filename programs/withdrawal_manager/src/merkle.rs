//! Merkle commitments over withdrawal requests.
//!
//! - Leaf: `keccak256(request_id u64 LE || user pubkey || assets u64 LE)`.
//!   Off-chain tree builders must use the exact same 48-byte preimage.
//! - Pairs are hashed in sorted order (lexicographically by 32-byte value), so
//!   proofs carry no left/right flags.
//! - An unpaired node at the end of a level is hashed with itself rather than
//!   carried up unchanged. `root` and `proof` share this rule.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;

use crate::error::ErrorCode;

pub type Hash = [u8; 32];

pub fn leaf(request_id: u64, user: &Pubkey, assets: u64) -> Hash {
    keccak::hashv(&[
        &request_id.to_le_bytes()[..],
        user.as_ref(),
        &assets.to_le_bytes()[..],
    ])
    .to_bytes()
}

pub fn node(left: &Hash, right: &Hash) -> Hash {
    let (lo, hi) = if left <= right {
        (left, right)
    } else {
        (right, left)
    };
    keccak::hashv(&[&lo[..], &hi[..]]).to_bytes()
}

fn next_level(level: &[Hash]) -> Vec<Hash> {
    level
        .chunks(2)
        .map(|pair| node(&pair[0], pair.get(1).unwrap_or(&pair[0])))
        .collect()
}

pub fn root(leaves: &[Hash]) -> Result<Hash> {
    require!(!leaves.is_empty(), ErrorCode::EmptyMerkleTree);

    let mut level = leaves.to_vec();
    while level.len() > 1 {
        level = next_level(&level);
    }
    Ok(level[0])
}

/// Sibling path from `leaves[index]` up to the root.
pub fn proof(leaves: &[Hash], index: usize) -> Result<Vec<Hash>> {
    require!(!leaves.is_empty(), ErrorCode::EmptyMerkleTree);
    require!(index < leaves.len(), ErrorCode::LeafIndexOutOfRange);

    let mut path = Vec::new();
    let mut level = leaves.to_vec();
    let mut position = index;
    while level.len() > 1 {
        let sibling = level.get(position ^ 1).unwrap_or(&level[position]);
        path.push(*sibling);
        level = next_level(&level);
        position /= 2;
    }
    Ok(path)
}

pub fn verify(proof: &[Hash], root: &Hash, leaf: &Hash) -> bool {
    proof.iter().fold(*leaf, |acc, sibling| node(&acc, sibling)) == *root
}
