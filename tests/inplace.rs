// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

mod common;

use common::{chain, sample};
use treewalk::{inplace, NodeId};

#[test]
fn chain_from_leaf() {
    let s = sample();

    assert_eq!(
        inplace::required_calls(Some(s.b1), &s.tree),
        vec![s.b1, s.b, s.r]
    );
}

#[test]
fn chain_from_root() {
    let s = sample();

    assert_eq!(inplace::required_calls(Some(s.r), &s.tree), vec![s.r]);
    assert!(inplace::required_calls(None::<NodeId>, &s.tree).is_empty());
}

#[test]
fn chain_while() {
    let s = sample();

    let calls =
        inplace::required_calls_while(Some(s.c1), &s.tree, |n| n != s.r);
    assert_eq!(calls, vec![s.c1, s.c]);

    let calls = inplace::required_calls_while(Some(s.c1), &s.tree, |_| false);
    assert!(calls.is_empty());
}

#[test]
fn construction_is_child_first() {
    let s = sample();
    let mut names = vec![];

    inplace::construction(Some(s.b1), &s.tree, |n| {
        names.push(*s.tree.get(n).unwrap())
    });

    assert_eq!(names, ["B1", "B", "R"]);
}

#[test]
fn fold_matches_recursion() {
    let s = sample();

    fn path(tree: &treewalk::GenericTree<&'static str>, n: NodeId) -> String {
        let name = tree.get(n).unwrap().to_string();
        match tree.parent_of(n) {
            Some(up) => format!("{}/{}", path(tree, up), name),
            None => name,
        }
    }

    for &start in &[s.r, s.a, s.b1, s.c1] {
        let folded = inplace::fold(
            Some(start),
            &s.tree,
            |n| s.tree.get(n).unwrap().to_string(),
            |own, above| format!("{}/{}", above, own),
        );

        assert_eq!(folded, Some(path(&s.tree, start)));
    }

    assert_eq!(
        inplace::fold(None::<NodeId>, &s.tree, |_| 1, |a, b| a + b),
        None
    );
}

#[test]
fn deep_fold() {
    let n = 100_000;
    let tree = chain(n);
    let leaf = tree.ids().last();

    let depth = inplace::fold(leaf, &tree, |_| 1usize, |a, b| a + b);

    assert_eq!(depth, Some(n));
}
