use crate::{
    hash::node_sum,
    proof::{Proof, Side},
};

use digest::{Digest, Output};

/// Recomputes the root implied by `proof` starting from `leaf` and compares
/// it against `root`.
///
/// This is a pure fold over the proof steps with no access to the tree the
/// proof came from, so it can run on a machine holding only these three
/// values. A mismatched root is the expected negative outcome and returns
/// `false`, not an error.
pub fn verify<D: Digest>(leaf: &Output<D>, proof: &Proof<D>, root: &Output<D>) -> bool {
    let mut current = leaf.clone();
    for step in proof.steps() {
        current = match step.side {
            Side::Right => node_sum::<D>(&current, &step.sibling),
            Side::Left => node_sum::<D>(&step.sibling, &current),
        };
    }
    current == *root
}
