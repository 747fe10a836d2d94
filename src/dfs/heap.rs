// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Depth-first searches keeping their state on the heap.
//!
//! Neither function recurses, so tree depth is bounded by memory rather than
//! by the call stack.

use std::collections::HashSet;
use std::hash::Hash;

use tracing::{debug, trace};

use super::ledger::Ledger;
use crate::dispatch::{dispatch, try_dispatch};
use crate::event::Event;
use crate::node::{Children, Parent};

/// Depth-first search tracking entered nodes in a set.
///
/// Slower than [`search_with_parent`], since every step needs a membership
/// lookup, but it only needs a `Children` accessor.
pub fn search<N, C>(root: Option<N>, children: C) -> Vec<Event<N>>
where
    N: Copy + Eq + Hash,
    C: Children<N>,
{
    let root = match root {
        Some(root) => root,
        None => return vec![],
    };

    let mut pending = vec![root];
    let mut entered = HashSet::new();
    let mut events = vec![];

    while let Some(&top) = pending.last() {
        if entered.insert(top) {
            events.push(Event::entry(top));
            // reversed, so the first child ends up on top
            pending.extend(children.children(top).into_iter().rev());
        } else {
            pending.pop();
            events.push(Event::exit(top));
            if top == root {
                break;
            }
        }
    }

    debug!("depth-first search emitted {} events", events.len());

    events
}

/// Depth-first search driven by parent pointers and sibling offsets.
///
/// Keeps one `(count, offset)` pair per depth level instead of a visited set,
/// so nodes need no hashing. Ascending stops at the parent `root` had before
/// the walk started, so starting from an inner node only visits that node's
/// subtree.
///
/// The accessors must agree with each other. If they are observed not to,
/// the search stops early and returns what it has.
pub fn search_with_parent<N, P, C>(
    root: Option<N>,
    parent: P,
    children: C,
) -> Vec<Event<N>>
where
    N: Copy + Eq,
    P: Parent<N>,
    C: Children<N>,
{
    let root = match root {
        Some(root) => root,
        None => return vec![],
    };

    let boundary = parent.parent(root);
    let mut ledger = Ledger::new();
    let mut events = vec![];
    let mut current = root;

    'walk: loop {
        // descend along first children
        loop {
            events.push(Event::entry(current));
            let subnodes = children.children(current);
            match subnodes.first() {
                Some(&first) => {
                    ledger.push(subnodes.len());
                    current = first;
                }
                None => break,
            }
        }
        trace!(depth = ledger.depth(), "reached leaf");

        events.push(Event::exit(current));

        // ascend until a level has siblings left
        loop {
            let up = parent.parent(current);
            if up == boundary {
                break 'walk;
            }
            let up = match up {
                Some(up) => up,
                None => break 'walk,
            };
            let level = match ledger.top_mut() {
                Some(level) => level,
                None => break 'walk,
            };

            if level.exhausted() {
                ledger.pop();
                events.push(Event::exit(up));
                current = up;
            } else {
                let offset = level.advance();
                match children.children(up).get(offset) {
                    Some(&next) => {
                        current = next;
                        continue 'walk;
                    }
                    None => break 'walk,
                }
            }
        }
    }

    debug!(
        "parent-pointer depth-first search emitted {} events",
        events.len()
    );

    events
}

/// Searches with [`search`] and replays the result.
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
    dispatch(search(root, children), on_entry, on_exit)
}

/// Searches with [`search_with_parent`] and replays the result.
pub fn execute_with_parent<N, P, C, En, Ex>(
    root: Option<N>,
    parent: P,
    children: C,
    on_entry: En,
    on_exit: Ex,
) where
    N: Copy + Eq,
    P: Parent<N>,
    C: Children<N>,
    En: FnMut(N),
    Ex: FnMut(N),
{
    dispatch(search_with_parent(root, parent, children), on_entry, on_exit)
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
    try_dispatch(search(root, children), on_entry, on_exit)
}

/// Fallible version of [`execute_with_parent`]
pub fn try_execute_with_parent<N, P, C, En, Ex, E>(
    root: Option<N>,
    parent: P,
    children: C,
    on_entry: En,
    on_exit: Ex,
) -> Result<(), E>
where
    N: Copy + Eq,
    P: Parent<N>,
    C: Children<N>,
    En: FnMut(N) -> Result<(), E>,
    Ex: FnMut(N) -> Result<(), E>,
{
    try_dispatch(search_with_parent(root, parent, children), on_entry, on_exit)
}
