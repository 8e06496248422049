use cosmwasm_std::{Addr, Api, HexBinary, StdResult};
use merkle_allowlist::{hash_leaf, verify_proof, Hash, MAX_PROOF_DEPTH};

/// Leaf committed to the allowlist root for `address`: the sha256 of its
/// canonical bytes. Off-chain tree builders must use the same encoding.
pub fn allowlist_leaf(api: &dyn Api, address: &Addr) -> StdResult<Hash> {
    let canonical = api.addr_canonicalize(address.as_str())?;
    Ok(hash_leaf(canonical.as_slice()))
}

/// Converts wire proof elements into hashes. Returns None if any element is
/// not exactly 32 bytes or the proof is deeper than any real tree.
pub fn parse_proof(proof: &[HexBinary]) -> Option<Vec<Hash>> {
    if proof.len() > MAX_PROOF_DEPTH {
        return None;
    }
    proof.iter().map(|node| node.to_array::<32>().ok()).collect()
}

/// Membership check used for pricing. Malformed input is treated the same as
/// a rejected proof.
pub fn is_allowlisted(api: &dyn Api, root: &HexBinary, address: &Addr, proof: &[HexBinary]) -> bool {
    let root = match root.to_array::<32>() {
        Ok(root) => root,
        Err(_) => return false,
    };
    let leaf = match allowlist_leaf(api, address) {
        Ok(leaf) => leaf,
        Err(_) => return false,
    };
    match parse_proof(proof) {
        Some(proof) => verify_proof(&root, &leaf, &proof),
        None => false,
    }
}
