use alloc::{string::String, vec::Vec};
use digest::{Digest, Output};

/// Which side of the running hash a proof sibling occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn is_right(self) -> bool {
        matches!(self, Side::Right)
    }
}

impl From<bool> for Side {
    fn from(is_right: bool) -> Self {
        if is_right {
            Side::Right
        } else {
            Side::Left
        }
    }
}

/// One level of an inclusion path: the sibling digest and the side it sits
/// on relative to the running hash.
pub struct ProofStep<D: Digest> {
    pub sibling: Output<D>,
    pub side: Side,
}

/// An inclusion path from a leaf to the root, ordered from the leaves
/// upward. Levels where the leaf's running node was the carried-forward
/// tail of an odd level contribute no step.
pub struct Proof<D: Digest> {
    steps: Vec<ProofStep<D>>,
}

impl<D: Digest> Proof<D> {
    pub fn from_steps(steps: Vec<ProofStep<D>>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[ProofStep<D>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Renders the proof, the leaf it opens, and the root it leads to in
    /// the interchange form: lowercase hex digests plus boolean side flags.
    pub fn to_data(&self, leaf_index: u64, leaf: &Output<D>, root: &Output<D>) -> ProofData {
        ProofData {
            leaf_index,
            leaf: hex::encode(leaf.as_slice()),
            root: hex::encode(root.as_slice()),
            steps: self
                .steps
                .iter()
                .map(|step| (hex::encode(step.sibling.as_slice()), step.side.is_right()))
                .collect(),
        }
    }
}

impl<D: Digest> Clone for ProofStep<D> {
    fn clone(&self) -> Self {
        Self {
            sibling: self.sibling.clone(),
            side: self.side,
        }
    }
}

impl<D: Digest> core::fmt::Debug for ProofStep<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProofStep")
            .field("sibling", &self.sibling)
            .field("side", &self.side)
            .finish()
    }
}

impl<D: Digest> PartialEq for ProofStep<D> {
    fn eq(&self, other: &Self) -> bool {
        self.sibling == other.sibling && self.side == other.side
    }
}

impl<D: Digest> Eq for ProofStep<D> {}

impl<D: Digest> Clone for Proof<D> {
    fn clone(&self) -> Self {
        Self {
            steps: self.steps.clone(),
        }
    }
}

impl<D: Digest> core::fmt::Debug for Proof<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Proof").field("steps", &self.steps).finish()
    }
}

impl<D: Digest> PartialEq for Proof<D> {
    fn eq(&self, other: &Self) -> bool {
        self.steps == other.steps
    }
}

impl<D: Digest> Eq for Proof<D> {}

// hex::FromHexError implements PartialEq but not Eq, so this enum cannot
// be Eq either.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum ProofDecodeError {
    #[display(fmt = "digest is not valid hex: {_0}")]
    InvalidHex(hex::FromHexError),

    #[display(fmt = "digest is {_0} bytes, expected {_1}")]
    InvalidDigestLength(usize, usize),
}

impl From<hex::FromHexError> for ProofDecodeError {
    fn from(err: hex::FromHexError) -> Self {
        ProofDecodeError::InvalidHex(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ProofDecodeError {}

/// Decodes a lowercase or uppercase hex digest, rejecting any byte string
/// whose length differs from the digest size of `D`.
pub fn decode_digest<D: Digest>(digest_hex: &str) -> Result<Output<D>, ProofDecodeError> {
    let bytes = hex::decode(digest_hex)?;
    let expected = <D as Digest>::output_size();
    if bytes.len() != expected {
        return Err(ProofDecodeError::InvalidDigestLength(bytes.len(), expected));
    }
    Ok(Output::<D>::clone_from_slice(&bytes))
}

/// The externally-representable form of an inclusion proof: hex digests and
/// side flags, sufficient for a verifier with no access to the record set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProofData {
    pub leaf_index: u64,
    /// Hex digest of the leaf the proof opens.
    pub leaf: String,
    /// Hex digest of the claimed root.
    pub root: String,
    /// `(sibling_hex, sibling_is_right)` pairs, ordered from the leaves
    /// upward.
    pub steps: Vec<(String, bool)>,
}

impl ProofData {
    pub fn leaf_digest<D: Digest>(&self) -> Result<Output<D>, ProofDecodeError> {
        decode_digest::<D>(&self.leaf)
    }

    pub fn root_digest<D: Digest>(&self) -> Result<Output<D>, ProofDecodeError> {
        decode_digest::<D>(&self.root)
    }

    pub fn to_proof<D: Digest>(&self) -> Result<Proof<D>, ProofDecodeError> {
        let mut steps = Vec::with_capacity(self.steps.len());
        for (digest_hex, is_right) in &self.steps {
            steps.push(ProofStep {
                sibling: decode_digest::<D>(digest_hex)?,
                side: Side::from(*is_right),
            });
        }
        Ok(Proof::from_steps(steps))
    }

    /// Decodes every digest, failing fast on malformed input before any
    /// hashing, then runs the standalone verifier.
    pub fn verify<D: Digest>(&self) -> Result<bool, ProofDecodeError> {
        let leaf = self.leaf_digest::<D>()?;
        let root = self.root_digest::<D>()?;
        let proof = self.to_proof::<D>()?;
        Ok(crate::verify::verify::<D>(&leaf, &proof, &root))
    }
}
