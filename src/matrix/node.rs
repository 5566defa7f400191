//! Zero-list node for slab-based storage.
//!
//! ## Design
//!
//! `ZeroNode` records one patient holding a zero in some doctor's column,
//! plus doubly-linked list pointers into that doctor's [`ZeroSet`]. A patient
//! who finds a better zero elsewhere can then be unlinked in O(1) given its
//! slab key.
//!
//! [`ZeroSet`]: crate::matrix::ZeroSet

/// Node stored in the tracker's slab.
///
/// The pointers are slab keys (`usize`), not direct references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZeroNode {
    /// Patient index holding the zero
    pub patient: usize,

    /// Doctor whose column holds the zero
    pub doctor: usize,

    /// Next (newer) node in the doctor's list
    pub next: Option<usize>,

    /// Previous (older) node in the doctor's list
    pub prev: Option<usize>,
}

impl ZeroNode {
    /// Create a new, unlinked node
    ///
    /// # Example
    ///
    /// ```
    /// use rank_match::matrix::ZeroNode;
    ///
    /// let node = ZeroNode::new(4, 1);
    /// assert!(node.is_unlinked());
    /// ```
    #[inline]
    pub fn new(patient: usize, doctor: usize) -> Self {
        Self {
            patient,
            doctor,
            next: None,
            prev: None,
        }
    }

    /// Check if this node has no neighbours
    #[inline]
    pub fn is_unlinked(&self) -> bool {
        self.next.is_none() && self.prev.is_none()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_node_new() {
        let node = ZeroNode::new(3, 2);

        assert_eq!(node.patient, 3);
        assert_eq!(node.doctor, 2);
        assert!(node.is_unlinked());
    }

    #[test]
    fn test_zero_node_linking() {
        let mut node = ZeroNode::new(0, 0);

        node.next = Some(5);
        assert!(!node.is_unlinked());

        node.next = None;
        node.prev = Some(1);
        assert!(!node.is_unlinked());
    }
}
