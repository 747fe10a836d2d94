// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

/// Represents a level in the ledger.
///
/// The offset points at the currently active child of the node one level up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Level {
    count: usize,
    offset: usize,
}

impl Level {
    fn new(count: usize) -> Self {
        Level { count, offset: 0 }
    }

    /// True when the active child is the last one
    pub fn exhausted(&self) -> bool {
        self.offset + 1 >= self.count
    }

    /// Moves on to the next sibling, returning its offset
    pub fn advance(&mut self) -> usize {
        self.offset += 1;
        self.offset
    }
}

/// Stack of sibling positions, one per depth below the start node.
#[derive(Debug, Default)]
pub(crate) struct Ledger(Vec<Level>);

impl Ledger {
    pub fn new() -> Self {
        Ledger(vec![])
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn push(&mut self, count: usize) {
        self.0.push(Level::new(count))
    }

    pub fn pop(&mut self) -> Option<Level> {
        self.0.pop()
    }

    pub fn top_mut(&mut self) -> Option<&mut Level> {
        self.0.last_mut()
    }
}
