// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Breadth-first traversal.
//!
//! The events come in two phases: every node is entered in level order, then
//! every node is left. Exits are not nested per level. The exit phase walks
//! the discovered nodes backwards and leaves the root last.
//!
//! Consumers that need scoped, nested exits should use `dfs` instead.

use tracing::{debug, trace};

use crate::dispatch::{dispatch, try_dispatch};
use crate::event::Event;
use crate::node::Children;

/// Performs a breadth-first search from `root`.
///
/// Returns an empty sequence if `root` is `None`. Any cycle reachable through
/// `children` makes this loop forever.
pub fn search<N, C>(root: Option<N>, children: C) -> Vec<Event<N>>
where
    N: Copy,
    C: Children<N>,
{
    let root = match root {
        Some(root) => root,
        None => return vec![],
    };

    let mut discovered = vec![root];
    let mut cursor = 0;
    let mut depth = 0usize;

    // each round expands exactly the nodes found by the previous one
    while cursor < discovered.len() {
        let stop = discovered.len();
        for i in cursor..stop {
            let node = discovered[i];
            discovered.extend(children.children(node));
        }
        trace!(depth, expanded = stop - cursor, "expanded level");
        cursor = stop;
        depth += 1;
    }

    let mut events = Vec::with_capacity(discovered.len() * 2);
    events.extend(discovered.iter().map(|&node| Event::entry(node)));
    events.extend(discovered[1..].iter().rev().map(|&node| Event::exit(node)));
    events.push(Event::exit(root));

    debug!(
        "breadth-first search visited {} nodes over {} levels",
        discovered.len(),
        depth
    );

    events
}

/// Searches from `root` and replays the result into `on_entry` and
/// `on_exit`.
pub fn execute<N, C, En, Ex>(
    root: Option<N>,
    children: C,
    on_entry: En,
    on_exit: Ex,
) where
    N: Copy,
    C: Children<N>,
    En: FnMut(N),
    Ex: FnMut(N),
{
    dispatch(search(root, children), on_entry, on_exit)
}

/// Like `execute`, with fallible callbacks. The first error aborts the
/// replay.
pub fn try_execute<N, C, En, Ex, E>(
    root: Option<N>,
    children: C,
    on_entry: En,
    on_exit: Ex,
) -> Result<(), E>
where
    N: Copy,
    C: Children<N>,
    En: FnMut(N) -> Result<(), E>,
    Ex: FnMut(N) -> Result<(), E>,
{
    try_dispatch(search(root, children), on_entry, on_exit)
}
