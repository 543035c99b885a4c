use digest::{Digest, Output};

// Leaves and nodes share one undifferentiated digest: a leaf is the bare
// hash of the record bytes, and a node is the bare hash of its two child
// digests concatenated left-to-right with no separator. There is no prefix
// separating the two domains, so an internal digest's pre-image cannot be
// told apart from a two-record input; callers that need that hardening must
// prefix their records before building.

/// Digest of a single raw record.
pub fn leaf_sum<D: Digest>(data: &[u8]) -> Output<D> {
    let mut hash = D::new();

    hash.update(data);

    hash.finalize()
}

/// Digest of two child digests, left before right.
pub fn node_sum<D: Digest>(lhs: &Output<D>, rhs: &Output<D>) -> Output<D> {
    let mut hash = D::new();

    hash.update(lhs);
    hash.update(rhs);

    hash.finalize()
}
