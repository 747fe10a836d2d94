// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Depth-first search using plain recursion.
//!
//! Uses one call frame per tree level, so very deep trees can overflow the
//! stack. Prefer `dfs::heap` when depth is not known to be small.

use tracing::debug;

use crate::dispatch::{dispatch, try_dispatch};
use crate::event::Event;
use crate::node::Children;

/// Recursive depth-first search from `root`
pub fn search<N, C>(root: Option<N>, children: C) -> Vec<Event<N>>
where
    N: Copy,
    C: Children<N>,
{
    let mut events = vec![];
    if let Some(root) = root {
        descend(root, &children, &mut events);
    }

    debug!("recursive depth-first search emitted {} events", events.len());

    events
}

fn descend<N, C>(node: N, children: &C, events: &mut Vec<Event<N>>)
where
    N: Copy,
    C: Children<N>,
{
    events.push(Event::entry(node));
    for child in children.children(node) {
        descend(child, children, events);
    }
    events.push(Event::exit(node));
}

/// Searches with [`search`] and replays the result.
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

/// Fallible version of [`execute`]
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
