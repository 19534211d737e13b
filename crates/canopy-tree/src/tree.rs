//! Layered Merkle tree over a canonical element set.

use canopy_core::base::{Bytes32, ElementSet};
use tracing::debug;

use crate::core::MerkleTreeError;
use crate::hasher::{Keccak256Hasher, MerkleHasher, combine};
use crate::proof::MerkleProof;

/// An immutable Merkle tree.
///
/// Layer 0 is the sorted, deduplicated element set. Each following layer
/// combines consecutive pairs of the one below; an unpaired last node is
/// carried up unchanged. The final layer holds only the root.
#[derive(Debug, Clone)]
pub struct MerkleTree<H = Keccak256Hasher> {
    hasher: H,
    leaves: ElementSet,
    upper_layers: Vec<Vec<Bytes32>>,
    root: Bytes32,
}

impl MerkleTree<Keccak256Hasher> {
    /// Build a Keccak-256 tree from raw element bytes.
    ///
    /// Empty entries are dropped, duplicates collapse and the rest is sorted.
    ///
    /// # Errors
    /// Returns [`MerkleTreeError::InvalidElement`] if a non-empty entry is not
    /// 32 bytes, or [`MerkleTreeError::EmptyTree`] if nothing remains.
    pub fn new<I, B>(elements: I) -> Result<Self, MerkleTreeError>
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        Self::with_hasher(elements, Keccak256Hasher)
    }
}

impl<H: MerkleHasher> MerkleTree<H> {
    /// Build a tree from raw element bytes using `hasher` for internal nodes.
    ///
    /// # Errors
    /// Returns [`MerkleTreeError::InvalidElement`] if a non-empty entry is not
    /// 32 bytes, or [`MerkleTreeError::EmptyTree`] if nothing remains.
    pub fn with_hasher<I, B>(elements: I, hasher: H) -> Result<Self, MerkleTreeError>
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        let leaves = ElementSet::from_raw(elements)?;
        Self::from_element_set(leaves, hasher)
    }

    /// Build a tree from an already canonical element set.
    ///
    /// # Errors
    /// Returns [`MerkleTreeError::EmptyTree`] if the set is empty.
    pub fn from_element_set(leaves: ElementSet, hasher: H) -> Result<Self, MerkleTreeError> {
        if leaves.is_empty() {
            return Err(MerkleTreeError::EmptyTree);
        }

        let mut upper_layers: Vec<Vec<Bytes32>> = Vec::new();
        loop {
            let current = upper_layers.last().map_or(&*leaves, Vec::as_slice);
            if current.len() <= 1 {
                break;
            }
            let next = next_layer(&hasher, current);
            upper_layers.push(next);
        }

        let root = upper_layers
            .last()
            .map_or(&*leaves, Vec::as_slice)
            .first()
            .copied()
            .ok_or(MerkleTreeError::EmptyTree)?;

        debug!(
            leaves = leaves.len(),
            depth = upper_layers.len(),
            %root,
            "Built merkle tree"
        );

        Ok(Self {
            hasher,
            leaves,
            upper_layers,
            root,
        })
    }

    /// The tree root.
    #[must_use]
    pub const fn root(&self) -> Bytes32 {
        self.root
    }

    /// The hasher used for internal nodes.
    #[must_use]
    pub const fn hasher(&self) -> &H {
        &self.hasher
    }

    /// The canonical leaf layer.
    #[must_use]
    pub const fn elements(&self) -> &ElementSet {
        &self.leaves
    }

    /// Number of distinct elements.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.leaves.len()
    }

    /// Number of layers above the leaves. A single-element tree has depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.upper_layers.len()
    }

    /// Layer at `level`, where level 0 is the leaves and `depth()` the root.
    #[must_use]
    pub fn layer(&self, level: usize) -> Option<&[Bytes32]> {
        match level.checked_sub(1) {
            None => Some(&self.leaves),
            Some(upper) => self.upper_layers.get(upper).map(Vec::as_slice),
        }
    }

    /// All layers from leaves to root.
    pub fn layers(&self) -> impl Iterator<Item = &[Bytes32]> {
        std::iter::once(&*self.leaves).chain(self.upper_layers.iter().map(Vec::as_slice))
    }

    /// Whether `element` is a leaf.
    #[must_use]
    pub fn contains(&self, element: &Bytes32) -> bool {
        self.leaves.contains(element)
    }

    /// Leaf index of `element` in canonical order.
    #[must_use]
    pub fn position(&self, element: &Bytes32) -> Option<usize> {
        self.leaves.position(element)
    }

    /// Inclusion proof for `element`.
    ///
    /// # Errors
    /// Returns [`MerkleTreeError::ElementNotFound`] if `element` is not a leaf.
    pub fn proof(&self, element: &Bytes32) -> Result<MerkleProof, MerkleTreeError> {
        let index = self
            .position(element)
            .ok_or(MerkleTreeError::ElementNotFound(*element))?;
        self.proof_at(index)
    }

    /// Inclusion proof for the leaf at `index`.
    ///
    /// Walks from the leaf to the layer below the root, taking the sibling at
    /// `index ^ 1` when it exists. A node without a sibling was carried
    /// forward and contributes no entry.
    ///
    /// # Errors
    /// Returns [`MerkleTreeError::IndexOutOfRange`] if `index` is not a leaf index.
    pub fn proof_at(&self, index: usize) -> Result<MerkleProof, MerkleTreeError> {
        if index >= self.leaves.len() {
            return Err(MerkleTreeError::IndexOutOfRange {
                index,
                len: self.leaves.len(),
            });
        }

        Ok(self.sibling_path(index))
    }

    /// Proofs for every element, in canonical order.
    pub fn proofs(&self) -> impl Iterator<Item = (Bytes32, MerkleProof)> + '_ {
        self.leaves
            .iter()
            .enumerate()
            .map(|(index, element)| (*element, self.sibling_path(index)))
    }

    /// Sibling walk for a leaf index already known to be in range.
    fn sibling_path(&self, mut index: usize) -> MerkleProof {
        let mut siblings = Vec::with_capacity(self.depth());
        for layer in self.layers().take(self.depth()) {
            if let Some(sibling) = layer.get(index ^ 1) {
                siblings.push(*sibling);
            }
            index /= 2;
        }
        MerkleProof::new(siblings)
    }

    /// Check a proof against this tree's root and hasher.
    #[must_use]
    pub fn verify(&self, proof: &MerkleProof, element: &Bytes32) -> bool {
        proof.verify(&self.hasher, &self.root, element)
    }
}

/// Root of the Keccak-256 tree over `elements`, without keeping the tree.
///
/// # Errors
/// Same as [`MerkleTree::new`].
pub fn merkle_root<I, B>(elements: I) -> Result<Bytes32, MerkleTreeError>
where
    I: IntoIterator<Item = B>,
    B: AsRef<[u8]>,
{
    MerkleTree::new(elements).map(|tree| tree.root())
}

fn next_layer<H: MerkleHasher>(hasher: &H, layer: &[Bytes32]) -> Vec<Bytes32> {
    layer
        .chunks(2)
        .filter_map(|pair| combine(hasher, pair.first(), pair.get(1)))
        .collect()
}

#[cfg(test)]
mod tests {
    use test_utils::{b32, filled};

    use super::*;
    use crate::hasher::{Sha256Hasher, hash_sorted_pair};

    fn raw(elements: &[Bytes32]) -> Vec<[u8; 32]> {
        elements.iter().map(|e| e.to_bytes()).collect()
    }

    #[test]
    fn single_element_tree_is_its_own_root() {
        let e: Bytes32 = filled!(7_u8);
        let tree = MerkleTree::new(raw(&[e])).expect("tree should build");

        assert_eq!(tree.root(), e);
        assert_eq!(tree.depth(), 0);
        assert!(tree.proof(&e).expect("member should have a proof").is_empty());
        assert!(tree.verify(&MerkleProof::default(), &e));
    }

    #[test]
    fn two_element_tree_hashes_sorted_pair() {
        let a: Bytes32 = filled!(1_u8);
        let b: Bytes32 = filled!(2_u8);
        let tree = MerkleTree::new(raw(&[b, a])).expect("tree should build");

        let mut preimage = a.to_vec();
        preimage.extend_from_slice(b.as_ref());
        assert_eq!(tree.root(), Keccak256Hasher.hash(&preimage));

        assert_eq!(*tree.proof(&a).expect("a is a member"), [b]);
        assert_eq!(*tree.proof(&b).expect("b is a member"), [a]);
    }

    #[test]
    fn odd_node_is_carried_forward() {
        let a: Bytes32 = b32!(1_u8);
        let b: Bytes32 = b32!(2_u8);
        let c: Bytes32 = b32!(3_u8);
        let tree = MerkleTree::with_hasher(raw(&[c, a, b]), Sha256Hasher).expect("tree should build");

        let ab = hash_sorted_pair(&Sha256Hasher, &a, &b);
        assert_eq!(tree.layer(1), Some([ab, c].as_slice()));
        assert_eq!(tree.root(), hash_sorted_pair(&Sha256Hasher, &ab, &c));

        let proof_c = tree.proof(&c).expect("c is a member");
        assert_eq!(*proof_c, [ab]);
        assert_eq!(*tree.proof(&a).expect("a is a member"), [b, c]);
    }

    #[test]
    fn layer_widths_halve_rounding_up() {
        let elements: Vec<[u8; 32]> = (1..=11_u8).map(|v| b32!(v)).collect();
        let tree = MerkleTree::new(&elements).expect("tree should build");

        let widths: Vec<usize> = tree.layers().map(<[Bytes32]>::len).collect();
        assert_eq!(widths, vec![11, 6, 3, 2, 1]);
        assert_eq!(tree.depth(), 4);
        assert_eq!(tree.layer(4), Some([tree.root()].as_slice()));
        assert_eq!(tree.layer(5), None);
    }

    #[test]
    fn empty_input_is_rejected() {
        let none: Vec<Vec<u8>> = Vec::new();
        assert_eq!(
            MerkleTree::new(&none).expect_err("no elements"),
            MerkleTreeError::EmptyTree
        );

        let placeholders: Vec<Vec<u8>> = vec![Vec::new(), Vec::new()];
        assert_eq!(
            MerkleTree::new(&placeholders).expect_err("only placeholders"),
            MerkleTreeError::EmptyTree
        );
    }

    #[test]
    fn wrong_length_element_is_rejected() {
        let input: Vec<Vec<u8>> = vec![vec![1; 32], vec![2; 20]];
        let err = MerkleTree::new(&input).expect_err("20-byte element must be rejected");
        assert!(matches!(err, MerkleTreeError::InvalidElement(_)));
    }

    #[test]
    fn placeholders_and_duplicates_do_not_change_root() {
        let a: Bytes32 = filled!(0xaa_u8);
        let b: Bytes32 = filled!(0xbb_u8);
        let c: Bytes32 = filled!(0xcc_u8);

        let clean = MerkleTree::new(raw(&[a, b, c])).expect("tree should build");
        let noisy_input: Vec<Vec<u8>> = vec![
            c.to_vec(),
            Vec::new(),
            a.to_vec(),
            c.to_vec(),
            b.to_vec(),
            Vec::new(),
        ];
        let noisy = MerkleTree::new(&noisy_input).expect("tree should build");

        assert_eq!(clean.root(), noisy.root());
        assert_eq!(noisy.element_count(), 3);
    }

    #[test]
    fn missing_element_has_no_proof() {
        let tree = MerkleTree::new(raw(&[b32!(1_u8), b32!(2_u8)])).expect("tree should build");
        let missing: Bytes32 = b32!(3_u8);

        assert_eq!(
            tree.proof(&missing).expect_err("non-member"),
            MerkleTreeError::ElementNotFound(missing)
        );
        assert!(matches!(
            tree.proof_at(2),
            Err(MerkleTreeError::IndexOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn every_member_proof_verifies() {
        let elements: Vec<[u8; 32]> = (0..=20_u8).map(|v| filled!(v.wrapping_mul(37))).collect();
        let tree = MerkleTree::new(&elements).expect("tree should build");

        let mut count = 0_usize;
        for (element, proof) in tree.proofs() {
            assert!(tree.verify(&proof, &element), "proof for {element} must verify");
            assert!(proof.len() <= tree.depth());
            count = count.saturating_add(1);
        }
        assert_eq!(count, tree.element_count());
    }

    #[test]
    fn proofs_iterator_matches_indexed_proofs() {
        let elements: Vec<[u8; 32]> = (1..=7_u8).map(|v| filled!(v)).collect();
        let tree = MerkleTree::new(&elements).expect("tree should build");

        let all: Vec<_> = tree.proofs().collect();
        assert_eq!(all.len(), 7);
        for (index, (element, proof)) in all.into_iter().enumerate() {
            assert_eq!(tree.position(&element), Some(index));
            assert_eq!(tree.proof_at(index), Ok(proof));
        }
    }

    #[test]
    fn merkle_root_matches_tree_root() {
        let elements = raw(&[b32!(9_u8), b32!(4_u8), b32!(6_u8)]);
        assert_eq!(
            merkle_root(&elements).expect("root should compute"),
            MerkleTree::new(&elements).expect("tree should build").root()
        );
    }
}
