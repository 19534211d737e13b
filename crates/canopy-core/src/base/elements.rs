//! Canonical element sets.

use std::ops::Deref;

use thiserror::Error;

use super::bytes32::Bytes32;

/// Errors raised while normalising raw element input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElementError {
    /// A non-empty input element is not exactly 32 bytes.
    #[error("Element at input index {index} is {len} bytes, expected 32")]
    InvalidLength {
        /// Position of the element in the caller's input.
        index: usize,
        /// Byte length of the rejected element.
        len: usize,
    },
}

/// A collection of elements that have been sanitised by sorting and deduplication.
///
/// This is the leaf layer of a tree: no duplicates, ascending unsigned
/// byte-lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementSet {
    elements: Vec<Bytes32>,
}

impl ElementSet {
    /// Create a new `ElementSet` by sorting and deduplicating the input elements.
    #[must_use]
    pub fn new(mut elements: Vec<Bytes32>) -> Self {
        if !elements.is_sorted() {
            elements.sort_unstable();
        }
        elements.dedup();

        Self { elements }
    }

    /// Normalise raw byte input into an `ElementSet`.
    ///
    /// Empty entries are placeholders and are dropped before validation.
    ///
    /// # Errors
    /// Returns an error if any remaining entry is not exactly 32 bytes.
    pub fn from_raw<I, B>(raw: I) -> Result<Self, ElementError>
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        let elements = raw
            .into_iter()
            .enumerate()
            .filter(|(_, bytes)| !bytes.as_ref().is_empty())
            .map(|(index, bytes)| {
                let bytes = bytes.as_ref();
                Bytes32::try_from(bytes).map_err(|_| ElementError::InvalidLength {
                    index,
                    len: bytes.len(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(elements))
    }

    /// Position of `element` in the canonical order, if present.
    #[must_use]
    pub fn position(&self, element: &Bytes32) -> Option<usize> {
        self.elements.binary_search(element).ok()
    }

    /// Whether `element` is a member.
    #[must_use]
    pub fn contains(&self, element: &Bytes32) -> bool {
        self.position(element).is_some()
    }

    /// Consume the set, returning the sorted elements.
    #[must_use]
    pub fn into_inner(self) -> Vec<Bytes32> {
        self.elements
    }
}

impl Deref for ElementSet {
    type Target = [Bytes32];

    fn deref(&self) -> &Self::Target {
        &self.elements
    }
}

impl FromIterator<Bytes32> for ElementSet {
    fn from_iter<T: IntoIterator<Item = Bytes32>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use test_utils::{b32, b32s};

    use super::*;

    #[test]
    fn test_sanitise_elements() {
        let elements = vec![
            b32![3_u8],
            b32![2_u8],
            b32![1_u8],
            b32![2_u8],
            b32![3_u8],
            b32![1_u8],
        ];

        let sanitised = ElementSet::new(elements);

        let expected: Vec<Bytes32> = b32s![1_u8, 2_u8, 3_u8];
        assert_eq!(*sanitised, expected);
    }

    #[test]
    fn from_raw_drops_empty_placeholders() {
        let raw: Vec<Vec<u8>> = vec![vec![9; 32], Vec::new(), vec![4; 32], Vec::new()];
        let set = ElementSet::from_raw(&raw).expect("valid raw input should normalise");

        assert_eq!(set.len(), 2);
        assert_eq!(set.first(), Some(&Bytes32::new([4; 32])));
        assert_eq!(set.last(), Some(&Bytes32::new([9; 32])));
    }

    #[test]
    fn from_raw_rejects_wrong_length() {
        let raw: Vec<Vec<u8>> = vec![vec![1; 32], Vec::new(), vec![2; 31]];
        let err = ElementSet::from_raw(&raw).expect_err("31 bytes must be rejected");
        assert_eq!(err, ElementError::InvalidLength { index: 2, len: 31 });

        let raw: Vec<Vec<u8>> = vec![vec![1; 33]];
        assert!(ElementSet::from_raw(&raw).is_err());
    }

    #[test]
    fn empty_input_gives_empty_set() {
        let raw: Vec<Vec<u8>> = vec![Vec::new(), Vec::new()];
        let set = ElementSet::from_raw(&raw).expect("placeholders only is not an error here");
        assert!(set.is_empty());
    }

    #[test]
    fn position_follows_canonical_order() {
        let set = ElementSet::new(vec![b32![5_u8], b32![1_u8], b32![3_u8]]);

        assert_eq!(set.position(&b32![1_u8]), Some(0));
        assert_eq!(set.position(&b32![3_u8]), Some(1));
        assert_eq!(set.position(&b32![5_u8]), Some(2));
        assert_eq!(set.position(&b32![4_u8]), None);
        assert!(set.contains(&b32![5_u8]));
        assert!(!set.contains(&b32![2_u8]));
    }
}
