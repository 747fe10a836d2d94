// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

/// Whether a node is being entered or left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// The node is visited for the first time
    Entry,
    /// The node, and everything below it, is done
    Exit,
}

/// A single step of a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Event<N> {
    /// The node the event concerns
    pub node: N,
    /// Entry or exit
    pub action: Action,
}

impl<N> Event<N> {
    /// Construct an entry event
    pub fn entry(node: N) -> Self {
        Event {
            node,
            action: Action::Entry,
        }
    }

    /// Construct an exit event
    pub fn exit(node: N) -> Self {
        Event {
            node,
            action: Action::Exit,
        }
    }

    /// Returns true for entry events
    pub fn is_entry(&self) -> bool {
        self.action == Action::Entry
    }

    /// Returns true for exit events
    pub fn is_exit(&self) -> bool {
        self.action == Action::Exit
    }
}

impl<N> From<(N, Action)> for Event<N> {
    fn from((node, action): (N, Action)) -> Self {
        Event { node, action }
    }
}
