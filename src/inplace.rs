// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Flattening of parent recursion.
//!
//! Replaces the recursive shape
//!
//! ```text
//! fn go(node) {
//!     match parent(node) {
//!         Some(up) => combine(f(node), go(up)),
//!         None => f(node),
//!     }
//! }
//! ```
//!
//! with a list of the nodes `go` would be called on, collected up front from
//! `node` towards the root.

use tracing::debug;

use crate::node::Parent;

/// Collects `start` and all its ancestors, child first.
///
/// Returns an empty list for `None`, and just `start` when it has no parent.
pub fn required_calls<N, P>(start: Option<N>, parent: P) -> Vec<N>
where
    N: Copy,
    P: Parent<N>,
{
    required_calls_while(start, parent, |_| true)
}

/// Collects `start` and its ancestors for as long as `predicate` holds.
///
/// The first node the predicate rejects ends the chain and is not included.
pub fn required_calls_while<N, P, F>(
    start: Option<N>,
    parent: P,
    mut predicate: F,
) -> Vec<N>
where
    N: Copy,
    P: Parent<N>,
    F: FnMut(N) -> bool,
{
    let mut chain = vec![];
    let mut next = start;

    while let Some(node) = next {
        if !predicate(node) {
            break;
        }
        chain.push(node);
        next = parent.parent(node);
    }

    debug!("collected {} ancestors", chain.len());

    chain
}

/// Calls `action` on `start` and each of its ancestors, child first.
pub fn construction<N, P, A>(start: Option<N>, parent: P, mut action: A)
where
    N: Copy,
    P: Parent<N>,
    A: FnMut(N),
{
    for node in required_calls(start, parent) {
        action(node)
    }
}

/// Evaluates the recursive shape in the module docs without recursing.
///
/// `f` is applied to every node of the chain. Results are combined from the
/// root downwards: the root's value is `f(root)`, and each node below it
/// yields `combine(f(node), value_of_parent)`. Returns `None` for a `None`
/// start.
pub fn fold<N, P, T, F, G>(
    start: Option<N>,
    parent: P,
    mut f: F,
    mut combine: G,
) -> Option<T>
where
    N: Copy,
    P: Parent<N>,
    F: FnMut(N) -> T,
    G: FnMut(T, T) -> T,
{
    let mut chain = required_calls(start, parent).into_iter().rev();
    let top = chain.next()?;
    let init = f(top);

    Some(chain.fold(init, |acc, node| combine(f(node), acc)))
}
