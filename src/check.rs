// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Opt-in validation.
//!
//! The traversals trust their input. These checks are for tests and for
//! callers that want to vet an untrusted tree before walking it.

use std::collections::HashSet;
use std::hash::Hash;

use thiserror::Error;
use tracing::warn;

use crate::event::{Action, Event};
use crate::node::{Children, Parent};

/// A sequence of events that is not properly nested
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NestingError {
    /// An exit was found with no entry left open
    #[error("exit at index {index} has no open entry")]
    UnmatchedExit {
        /// Position of the offending event
        index: usize,
    },
    /// An exit did not close the innermost open entry
    #[error("exit at index {index} does not close the innermost open entry")]
    MismatchedExit {
        /// Position of the offending event
        index: usize,
    },
    /// A node was entered a second time
    #[error("node entered again at index {index}")]
    DuplicateEntry {
        /// Position of the offending event
        index: usize,
    },
    /// Entries left open at the end of the sequence
    #[error("{open} entries were never closed")]
    Unclosed {
        /// Number of open entries
        open: usize,
    },
}

/// Accessors that do not describe a tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyError {
    /// A child does not point back at the node listing it
    #[error("node discovered at position {position} has the wrong parent")]
    ParentMismatch {
        /// Discovery position of the child, root is 0
        position: usize,
    },
    /// A node was reached twice, through a cycle or a shared subtree
    #[error("node discovered at position {position} was already reached")]
    Revisited {
        /// Discovery position of the repeated node
        position: usize,
    },
}

/// Checks that `events` form a proper pre/post-order nesting.
///
/// Every exit must close the most recently entered node that is still open,
/// no node may be entered twice, and nothing may remain open at the end.
pub fn check_nesting<'a, N, I>(events: I) -> Result<(), NestingError>
where
    N: 'a + Copy + Eq + Hash,
    I: IntoIterator<Item = &'a Event<N>>,
{
    let mut open = vec![];
    let mut entered = HashSet::new();

    for (index, event) in events.into_iter().enumerate() {
        match event.action {
            Action::Entry => {
                if !entered.insert(event.node) {
                    return Err(NestingError::DuplicateEntry { index });
                }
                open.push(event.node);
            }
            Action::Exit => match open.pop() {
                Some(node) if node == event.node => (),
                Some(_) => return Err(NestingError::MismatchedExit { index }),
                None => return Err(NestingError::UnmatchedExit { index }),
            },
        }
    }

    if open.is_empty() {
        Ok(())
    } else {
        Err(NestingError::Unclosed { open: open.len() })
    }
}

/// Verifies that `parent` and `children` agree on the subtree below `root`,
/// and that the subtree contains no node twice.
///
/// Returns the number of nodes in the subtree. Unlike the traversals, this
/// terminates on cyclic input.
pub fn check_parents<N, P, C>(
    root: N,
    parent: P,
    children: C,
) -> Result<usize, ConsistencyError>
where
    N: Copy + Eq + Hash,
    P: Parent<N>,
    C: Children<N>,
{
    let mut seen = HashSet::new();
    seen.insert(root);
    let mut discovered = vec![root];
    let mut cursor = 0;

    while cursor < discovered.len() {
        let node = discovered[cursor];
        for child in children.children(node) {
            let position = discovered.len();
            if parent.parent(child) != Some(node) {
                warn!("parent accessor disagrees at position {}", position);
                return Err(ConsistencyError::ParentMismatch { position });
            }
            if !seen.insert(child) {
                warn!("node reached twice at position {}", position);
                return Err(ConsistencyError::Revisited { position });
            }
            discovered.push(child);
        }
        cursor += 1;
    }

    Ok(discovered.len())
}
