// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

#[cfg(feature = "arbitrary")]
use arbitrary::{Arbitrary, Unstructured};

use crate::node::{Children, Parent};

/// Handle to a node in a `GenericTree`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The position of the node in insertion order
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Slot<T> {
    value: T,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An owned tree stored in a flat arena.
///
/// Nodes are addressed by `NodeId`, which is `Copy` and compares by
/// position, so a shared reference to the tree serves as both a `Children`
/// and a `Parent` accessor. Node values can be mutated through `get_mut`
/// while events produced from the same tree are replayed.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericTree<T>(Vec<Slot<T>>);

impl<T> GenericTree<T> {
    /// Creates a tree consisting of a single root node
    pub fn new(root: T) -> Self {
        GenericTree(vec![Slot {
            value: root,
            parent: None,
            children: vec![],
        }])
    }

    /// Returns the root node
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Appends `value` as the last child of `parent`.
    ///
    /// Returns `None` if `parent` does not belong to this tree.
    pub fn push(&mut self, parent: NodeId, value: T) -> Option<NodeId> {
        if parent.0 < self.0.len() {
            Some(self.attach(parent.0, value))
        } else {
            None
        }
    }

    fn attach(&mut self, parent: usize, value: T) -> NodeId {
        let id = NodeId(self.0.len());
        self.0.push(Slot {
            value,
            parent: Some(NodeId(parent)),
            children: vec![],
        });
        self.0[parent].children.push(id);
        id
    }

    /// Returns the value stored at `id`
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.0.get(id.0).map(|slot| &slot.value)
    }

    /// Returns a mutable reference to the value stored at `id`
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.0.get_mut(id.0).map(|slot| &mut slot.value)
    }

    /// Provides the children of `id`, in insertion order
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.0
            .get(id.0)
            .map(|slot| &slot.children[..])
            .unwrap_or(&[])
    }

    /// Returns the parent of `id`, `None` for the root
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.0.get(id.0).and_then(|slot| slot.parent)
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// A tree always holds its root, so this is never true
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over all node ids in insertion order
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.0.len()).map(NodeId)
    }
}

impl<'a, T> Children<NodeId> for &'a GenericTree<T> {
    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.children_of(node).to_vec()
    }
}

impl<'a, T> Parent<NodeId> for &'a GenericTree<T> {
    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parent_of(node)
    }
}

/// Every generated node hangs off one generated before it, so the result is
/// always a well-formed tree.
#[cfg(feature = "arbitrary")]
impl<'a, T> Arbitrary<'a> for GenericTree<T>
where
    T: Arbitrary<'a>,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut tree = GenericTree::new(T::arbitrary(u)?);
        let extra = u.arbitrary_len::<(u32, T)>()?;

        for _ in 0..extra {
            let parent = u.int_in_range(0..=tree.len() - 1)?;
            let value = T::arbitrary(u)?;
            tree.attach(parent, value);
        }

        Ok(tree)
    }
}
