// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Deref;

/// Accessor yielding the ordered direct descendants of a node.
///
/// The returned order defines the order in which siblings are visited, and
/// must be stable for the duration of a single traversal.
pub trait Children<N> {
    /// Returns the children of `node`, possibly none
    fn children(&self, node: N) -> Vec<N>;
}

impl<N, F, I> Children<N> for F
where
    F: Fn(N) -> I,
    I: IntoIterator<Item = N>,
{
    fn children(&self, node: N) -> Vec<N> {
        self(node).into_iter().collect()
    }
}

/// Accessor yielding the direct ancestor of a node.
///
/// Must agree with the `Children` accessor used alongside it: if `c` is among
/// the children of `p`, then the parent of `c` is `p`.
pub trait Parent<N> {
    /// Returns the parent of `node`, or `None` for the root
    fn parent(&self, node: N) -> Option<N>;
}

impl<N, F> Parent<N> for F
where
    F: Fn(N) -> Option<N>,
{
    fn parent(&self, node: N) -> Option<N> {
        self(node)
    }
}

/// A shared reference compared and hashed by address rather than by value.
///
/// Two structurally equal nodes stored at different places are distinct
/// handles.
pub struct ById<'a, T>(&'a T);

impl<'a, T> ById<'a, T> {
    /// Wraps a reference
    pub fn new(node: &'a T) -> Self {
        ById(node)
    }

    /// Returns the wrapped reference with its original lifetime
    pub fn get(self) -> &'a T {
        self.0
    }
}

impl<'a, T> Clone for ById<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for ById<'a, T> {}

impl<'a, T> PartialEq for ById<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.0, other.0)
    }
}

impl<'a, T> Eq for ById<'a, T> {}

impl<'a, T> Hash for ById<'a, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.0 as *const T).hash(state)
    }
}

impl<'a, T> Deref for ById<'a, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl<'a, T> From<&'a T> for ById<'a, T> {
    fn from(node: &'a T) -> Self {
        ById(node)
    }
}

impl<'a, T> fmt::Debug for ById<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}@{:p}", self.0, self.0)
    }
}
