//! Ordered set of patients holding a zero for one doctor.
//!
//! ## Queue Structure
//!
//! ```text
//! head (earliest zero) <-> patient <-> patient <-> tail (latest zero)
//! ```
//!
//! - New zeros are appended at the tail
//! - Settling walks from the head, so earlier zeros are committed first
//! - Any member can be removed in O(1) using its slab key

use slab::Slab;

use crate::matrix::ZeroNode;

/// Zero list of a single doctor column.
///
/// The node data lives in the tracker's slab; this struct only holds the
/// list metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZeroSet {
    /// Doctor this list belongs to
    pub doctor: usize,

    /// Earliest node (slab key)
    pub head: Option<usize>,

    /// Latest node (slab key)
    pub tail: Option<usize>,

    /// Number of patients in the list
    pub len: usize,
}

impl ZeroSet {
    pub fn new(doctor: usize) -> Self {
        Self {
            doctor,
            head: None,
            tail: None,
            len: 0,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append a node to the tail of the list
    ///
    /// # Panics
    ///
    /// Panics if the key doesn't exist in the slab
    pub fn push_back(&mut self, key: usize, slab: &mut Slab<ZeroNode>) {
        let node = slab.get_mut(key).expect("Invalid slab key");
        node.prev = self.tail;
        node.next = None;

        if let Some(tail_key) = self.tail {
            let tail_node = slab.get_mut(tail_key).expect("Invalid tail key");
            tail_node.next = Some(key);
        } else {
            self.head = Some(key);
        }

        self.tail = Some(key);
        self.len += 1;
    }

    /// Unlink a node from the list, returning its patient index.
    ///
    /// The node stays in the slab; the caller decides whether to free it.
    pub fn remove(&mut self, key: usize, slab: &mut Slab<ZeroNode>) -> usize {
        let node = slab.get(key).expect("Invalid slab key");
        let patient = node.patient;
        let prev_key = node.prev;
        let next_key = node.next;

        if let Some(prev) = prev_key {
            slab.get_mut(prev).expect("Invalid prev key").next = next_key;
        } else {
            self.head = next_key;
        }

        if let Some(next) = next_key {
            slab.get_mut(next).expect("Invalid next key").prev = prev_key;
        } else {
            self.tail = prev_key;
        }

        let node = slab.get_mut(key).expect("Invalid slab key");
        node.prev = None;
        node.next = None;

        self.len -= 1;
        patient
    }

    /// Iterate member patients from head to tail
    pub fn iter<'a>(&self, slab: &'a Slab<ZeroNode>) -> ZeroSetIter<'a> {
        ZeroSetIter {
            slab,
            cursor: self.head,
        }
    }
}

/// Head-to-tail iterator over a [`ZeroSet`]
#[derive(Debug, Clone)]
pub struct ZeroSetIter<'a> {
    slab: &'a Slab<ZeroNode>,
    cursor: Option<usize>,
}

impl Iterator for ZeroSetIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let node = self.slab.get(self.cursor?)?;
        self.cursor = node.next;
        Some(node.patient)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
