// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use treewalk::{Action, Event, GenericTree, NodeId};

pub struct Sample {
    pub tree: GenericTree<&'static str>,
    pub r: NodeId,
    pub a: NodeId,
    pub b: NodeId,
    pub c: NodeId,
    pub b1: NodeId,
    pub c1: NodeId,
}

/// R with children A, B, C; B has B1 and C has C1
pub fn sample() -> Sample {
    let mut tree = GenericTree::new("R");
    let r = tree.root();
    let a = tree.push(r, "A").unwrap();
    let b = tree.push(r, "B").unwrap();
    let c = tree.push(r, "C").unwrap();
    let b1 = tree.push(b, "B1").unwrap();
    let c1 = tree.push(c, "C1").unwrap();

    Sample {
        tree,
        r,
        a,
        b,
        c,
        b1,
        c1,
    }
}

pub fn named(
    tree: &GenericTree<&'static str>,
    events: &[Event<NodeId>],
) -> Vec<(&'static str, Action)> {
    events
        .iter()
        .map(|e| (*tree.get(e.node).unwrap(), e.action))
        .collect()
}

pub fn entries(names: &[&'static str]) -> Vec<(&'static str, Action)> {
    names.iter().map(|n| (*n, Action::Entry)).collect()
}

pub fn exits(names: &[&'static str]) -> Vec<(&'static str, Action)> {
    names.iter().map(|n| (*n, Action::Exit)).collect()
}

pub fn sample_dfs() -> Vec<(&'static str, Action)> {
    use Action::*;
    vec![
        ("R", Entry),
        ("A", Entry),
        ("A", Exit),
        ("B", Entry),
        ("B1", Entry),
        ("B1", Exit),
        ("B", Exit),
        ("C", Entry),
        ("C1", Entry),
        ("C1", Exit),
        ("C", Exit),
        ("R", Exit),
    ]
}

/// A tree of `n` nodes where every node hangs off a random earlier one
pub fn random_tree(seed: u64, n: usize) -> GenericTree<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut tree = GenericTree::new(0);

    let mut ids = vec![tree.root()];
    for i in 1..n {
        let parent = ids[rng.gen_range(0..ids.len())];
        ids.push(tree.push(parent, i).unwrap());
    }

    tree
}

/// A single path of `n` nodes
pub fn chain(n: usize) -> GenericTree<usize> {
    let mut tree = GenericTree::new(0);
    let mut last = tree.root();
    for i in 1..n {
        last = tree.push(last, i).unwrap();
    }
    tree
}
