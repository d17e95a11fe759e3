//! A `Ring<T>` is a non-empty circular doubly-linked list of `T` values.
//!
//! Elements live in an arena and are named by `NodeId` indexes, which stay
//! valid for the life of the ring. Removing an element from the cycle detaches
//! it but keeps its slot, so the caller can hand it back to `insert_after`
//! later with a new value.
//!
//! Throughout, `left` is the clockwise direction.

use failure::Error;
use std::fmt;
use std::mem::replace;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(usize);

/// A live element's `left` and `right` name its neighbors in the cycle. A
/// detached element has neither.
struct Element<T> {
    left: Option<NodeId>,
    right: Option<NodeId>,
    value: T,
}

impl<T> Element<T> {
    fn is_live(&self) -> bool {
        self.left.is_some()
    }
}

pub struct Ring<T> {
    elements: Vec<Element<T>>,
    live: usize,
}

const ROOT: NodeId = NodeId(0);

impl<T> Ring<T> {
    /// Return a ring holding only `value`, linked to itself.
    pub fn new(value: T) -> Ring<T> {
        Ring::with_capacity(value, 1)
    }

    pub fn with_capacity(value: T, capacity: usize) -> Ring<T> {
        let mut elements = Vec::with_capacity(capacity.max(1));
        elements.push(Element {
            left: Some(ROOT),
            right: Some(ROOT),
            value,
        });
        Ring { elements, live: 1 }
    }

    /// The element the ring was created with. It can never be removed.
    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// The number of elements in the cycle.
    pub fn len(&self) -> usize {
        self.live
    }

    /// The number of arena slots allocated so far, live or detached.
    pub fn slots(&self) -> usize {
        self.elements.len()
    }

    /// The number of slots the arena can hold before it must reallocate.
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Allocate a new detached element holding `value`.
    pub fn alloc(&mut self, value: T) -> NodeId {
        let id = NodeId(self.elements.len());
        self.elements.push(Element {
            left: None,
            right: None,
            value,
        });
        id
    }

    pub fn is_live(&self, id: NodeId) -> bool {
        self.elements[id.0].is_live()
    }

    pub fn get(&self, id: NodeId) -> &T {
        &self.elements[id.0].value
    }

    /// Overwrite the value of the detached element `id`, returning the old
    /// one.
    pub fn replace(&mut self, id: NodeId, value: T) -> T {
        let elt = &mut self.elements[id.0];
        assert!(!elt.is_live(), "overwriting live ring element {:?}", id);
        replace(&mut elt.value, value)
    }

    pub fn left(&self, id: NodeId) -> NodeId {
        match self.elements[id.0].left {
            Some(left) => left,
            None => panic!("ring element {:?} is detached", id),
        }
    }

    pub fn right(&self, id: NodeId) -> NodeId {
        match self.elements[id.0].right {
            Some(right) => right,
            None => panic!("ring element {:?} is detached", id),
        }
    }

    pub fn step_left(&self, mut id: NodeId, count: usize) -> NodeId {
        for _ in 0..count {
            id = self.left(id);
        }
        id
    }

    pub fn step_right(&self, mut id: NodeId, count: usize) -> NodeId {
        for _ in 0..count {
            id = self.right(id);
        }
        id
    }

    /// Splice the detached element `node` into the cycle just left of
    /// `anchor`, between `anchor` and its old left neighbor.
    pub fn insert_after(&mut self, anchor: NodeId, node: NodeId) {
        assert!(!self.is_live(node), "inserting live ring element {:?}", node);
        let beyond = self.left(anchor);

        {
            let elt = &mut self.elements[node.0];
            elt.right = Some(anchor);
            elt.left = Some(beyond);
        }
        self.elements[anchor.0].left = Some(node);
        self.elements[beyond.0].right = Some(node);

        self.live += 1;
    }

    /// Splice `target` out of the cycle, joining its neighbors to each other.
    /// `target` is left detached, holding its value.
    pub fn remove(&mut self, target: NodeId) {
        assert!(target != ROOT, "removing the root of a ring");
        let left = self.left(target);
        let right = self.right(target);

        self.elements[left.0].right = Some(right);
        self.elements[right.0].left = Some(left);

        let elt = &mut self.elements[target.0];
        elt.left = None;
        elt.right = None;

        self.live -= 1;
    }

    /// Iterate over every element of the cycle once, starting at `start` and
    /// moving left.
    pub fn iter_from(&self, start: NodeId) -> Iter<T> {
        assert!(self.is_live(start), "iterating from detached element {:?}", start);
        Iter {
            ring: self,
            next: Some(start),
            start,
        }
    }

    /// Check that every live element's neighbors point back at it, that the
    /// live elements form a single cycle, and that `len` agrees with it.
    pub fn check(&self) -> Result<(), Error> {
        let mut live = 0;
        for (index, elt) in self.elements.iter().enumerate() {
            let id = NodeId(index);
            match (elt.left, elt.right) {
                (None, None) => continue,
                (Some(left), Some(right)) => {
                    if !self.is_live(left) || !self.is_live(right) {
                        return Err(format_err!("{:?} has a detached neighbor", id));
                    }
                    if self.elements[left.0].right != Some(id) {
                        return Err(format_err!(
                            "{:?}'s left neighbor {:?} doesn't point back at it",
                            id,
                            left
                        ));
                    }
                    if self.elements[right.0].left != Some(id) {
                        return Err(format_err!(
                            "{:?}'s right neighbor {:?} doesn't point back at it",
                            id,
                            right
                        ));
                    }
                }
                _ => return Err(format_err!("{:?} is half-linked", id)),
            }
            live += 1;
        }

        if live != self.live {
            return Err(format_err!(
                "ring claims {} live elements, but has {}",
                self.live,
                live
            ));
        }

        let mut id = ROOT;
        for step in 1..self.live + 1 {
            id = self.left(id);
            if id == ROOT && step < self.live {
                return Err(format_err!(
                    "cycle through the root has only {} of {} elements",
                    step,
                    self.live
                ));
            }
        }
        if id != ROOT {
            return Err(format_err!("walking {} steps left doesn't return to the root", self.live));
        }

        Ok(())
    }
}

pub struct Iter<'a, T: 'a> {
    ring: &'a Ring<T>,
    next: Option<NodeId>,
    start: NodeId,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (NodeId, &'a T);
    fn next(&mut self) -> Option<(NodeId, &'a T)> {
        let id = match self.next {
            None => return None,
            Some(id) => id,
        };
        let left = self.ring.left(id);
        self.next = if left == self.start { None } else { Some(left) };
        Some((id, self.ring.get(id)))
    }
}

impl<T: fmt::Debug> fmt::Debug for Ring<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        fmt.debug_list()
            .entries(self.iter_from(ROOT).map(|(_, value)| value))
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn values(ring: &Ring<u32>) -> Vec<u32> {
        ring.iter_from(ring.root()).map(|(_, &v)| v).collect()
    }

    #[test]
    fn singleton() {
        let ring = Ring::new(0_u32);
        let root = ring.root();
        assert_eq!(ring.len(), 1);
        assert_eq!(ring.left(root), root);
        assert_eq!(ring.right(root), root);
        assert_eq!(ring.step_left(root, 5), root);
        assert_eq!(ring.step_right(root, 7), root);
        assert_eq!(values(&ring), vec![0]);
        ring.check().unwrap();
    }

    #[test]
    fn insert_and_step() {
        let mut ring = Ring::new(0_u32);
        let root = ring.root();
        let mut last = root;
        for v in 1..5 {
            let node = ring.alloc(v);
            ring.insert_after(last, node);
            ring.check().unwrap();
            last = node;
        }
        assert_eq!(values(&ring), vec![0, 1, 2, 3, 4]);
        assert_eq!(format!("{:?}", ring), "[0, 1, 2, 3, 4]");
        assert_eq!(*ring.get(ring.step_left(root, 3)), 3);
        assert_eq!(*ring.get(ring.step_right(root, 1)), 4);
        assert_eq!(ring.step_left(root, 5), root);
        assert_eq!(ring.step_right(ring.step_left(root, 2), 2), root);
    }

    #[test]
    fn insert_between() {
        let mut ring = Ring::new(0_u32);
        let root = ring.root();
        let one = ring.alloc(1);
        ring.insert_after(root, one);
        let two = ring.alloc(2);
        ring.insert_after(root, two);
        assert_eq!(values(&ring), vec![0, 2, 1]);
        assert_eq!(ring.left(two), one);
        assert_eq!(ring.right(two), root);
    }

    #[test]
    fn remove_detaches() {
        let mut ring = Ring::new(0_u32);
        let root = ring.root();
        let ids: Vec<NodeId> = (1..4)
            .map(|v| {
                let node = ring.alloc(v);
                let anchor = ring.right(root);
                ring.insert_after(anchor, node);
                node
            })
            .collect();
        assert_eq!(values(&ring), vec![0, 1, 2, 3]);

        ring.remove(ids[1]);
        ring.check().unwrap();
        assert_eq!(ring.len(), 3);
        assert!(!ring.is_live(ids[1]));
        assert_eq!(values(&ring), vec![0, 1, 3]);
        assert_eq!(ring.left(ids[0]), ids[2]);
        assert_eq!(ring.right(ids[2]), ids[0]);

        // The detached slot can be reused with a fresh value.
        assert_eq!(ring.replace(ids[1], 9), 2);
        ring.insert_after(root, ids[1]);
        ring.check().unwrap();
        assert_eq!(values(&ring), vec![0, 9, 1, 3]);
        assert_eq!(ring.slots(), 4);
    }

    #[test]
    #[should_panic]
    fn step_from_detached() {
        let mut ring = Ring::new(0_u32);
        let node = ring.alloc(1);
        ring.step_left(node, 1);
    }

    #[test]
    #[should_panic]
    fn remove_root() {
        let mut ring = Ring::new(0_u32);
        let node = ring.alloc(1);
        let root = ring.root();
        ring.insert_after(root, node);
        ring.remove(root);
    }

    #[test]
    #[should_panic]
    fn overwrite_live() {
        let mut ring = Ring::new(0_u32);
        let root = ring.root();
        ring.replace(root, 1);
    }
}
