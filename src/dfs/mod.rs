// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Depth-first traversals.
//!
//! Every strategy produces the same nested pre/post-order sequence: each
//! node is entered, its subtrees are walked in child order, and then it is
//! left.
//!
//! - [`heap::search`] is iterative and needs only a `Children` accessor.
//! - [`heap::search_with_parent`] is iterative and uses no hashing, but needs
//!   a `Parent` accessor too.
//! - [`stack::search`] recurses, one call frame per tree level.
//!
//! [`search`] and [`execute`] default to [`heap::search`].

use core::hash::Hash;

use crate::event::Event;
use crate::node::Children;

pub mod heap;
mod ledger;
pub mod stack;

/// Depth-first search using the default strategy, [`heap::search`]
pub fn search<N, C>(root: Option<N>, children: C) -> Vec<Event<N>>
where
    N: Copy + Eq + Hash,
    C: Children<N>,
{
    heap::search(root, children)
}

/// Depth-first search and replay using the default strategy
pub fn execute<N, C, En, Ex>(
    root: Option<N>,
    children: C,
    on_entry: En,
    on_exit: Ex,
) where
    N: Copy + Eq + Hash,
    C: Children<N>,
    En: FnMut(N),
    Ex: FnMut(N),
{
    heap::execute(root, children, on_entry, on_exit)
}

/// Fallible version of [`execute`]
pub fn try_execute<N, C, En, Ex, E>(
    root: Option<N>,
    children: C,
    on_entry: En,
    on_exit: Ex,
) -> Result<(), E>
where
    N: Copy + Eq + Hash,
    C: Children<N>,
    En: FnMut(N) -> Result<(), E>,
    Ex: FnMut(N) -> Result<(), E>,
{
    heap::try_execute(root, children, on_entry, on_exit)
}
