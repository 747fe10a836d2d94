// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Treewalk
//!
//! A library for walking tree-shaped data. It has three parts:
//!
//! `Children` and `Parent`, accessor traits through which any tree can be
//! walked without the library owning it
//! `bfs` and `dfs`, traversals producing ordered sequences of entry and exit
//! `Event`s
//! `dispatch` and `inplace`, for replaying those events into callbacks and
//! for flattening recursion over parents.

#![deny(missing_docs)]

pub mod bfs;
pub mod check;
pub mod dfs;
pub mod dispatch;
mod event;
mod generic;
pub mod inplace;
mod node;

pub use check::{ConsistencyError, NestingError};
pub use dispatch::Visitor;
pub use event::{Action, Event};
pub use generic::{GenericTree, NodeId};
pub use node::{ById, Children, Parent};
