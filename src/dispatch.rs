// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Replaying event sequences against callbacks.
//!
//! Replay is strictly in order. Nothing is buffered, reordered or filtered,
//! and a failing callback stops the replay on the spot.

use crate::event::{Action, Event};

/// A receiver of replayed traversal events
pub trait Visitor<N> {
    /// Called for every entry event
    fn enter(&mut self, node: N);

    /// Called for every exit event
    fn exit(&mut self, _node: N) {}
}

/// Replays `events`, calling `on_entry` or `on_exit` for each.
pub fn dispatch<N, I, En, Ex>(events: I, mut on_entry: En, mut on_exit: Ex)
where
    I: IntoIterator<Item = Event<N>>,
    En: FnMut(N),
    Ex: FnMut(N),
{
    for event in events {
        match event.action {
            Action::Entry => on_entry(event.node),
            Action::Exit => on_exit(event.node),
        }
    }
}

/// Replays `events` through fallible callbacks.
///
/// The first error is returned as-is, and no further callbacks are made.
pub fn try_dispatch<N, I, En, Ex, E>(
    events: I,
    mut on_entry: En,
    mut on_exit: Ex,
) -> Result<(), E>
where
    I: IntoIterator<Item = Event<N>>,
    En: FnMut(N) -> Result<(), E>,
    Ex: FnMut(N) -> Result<(), E>,
{
    for event in events {
        match event.action {
            Action::Entry => on_entry(event.node)?,
            Action::Exit => on_exit(event.node)?,
        }
    }
    Ok(())
}

/// Replays `events` into a `Visitor`
pub fn visit<N, I, V>(events: I, visitor: &mut V)
where
    I: IntoIterator<Item = Event<N>>,
    V: Visitor<N> + ?Sized,
{
    for event in events {
        match event.action {
            Action::Entry => visitor.enter(event.node),
            Action::Exit => visitor.exit(event.node),
        }
    }
}
