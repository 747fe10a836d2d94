// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use treewalk::check::check_parents;
use treewalk::GenericTree;

#[test]
fn push_and_lookup() {
    let mut tree = GenericTree::new('r');
    let root = tree.root();
    let a = tree.push(root, 'a').unwrap();
    let b = tree.push(root, 'b').unwrap();
    let a1 = tree.push(a, '1').unwrap();

    assert_eq!(tree.len(), 4);
    assert!(!tree.is_empty());
    assert_eq!(tree.children_of(root), &[a, b]);
    assert!(tree.children_of(a1).is_empty());
    assert_eq!(tree.parent_of(a1), Some(a));
    assert_eq!(tree.parent_of(root), None);
    assert_eq!(tree.get(b), Some(&'b'));

    *tree.get_mut(b).unwrap() = 'B';
    assert_eq!(tree.get(b), Some(&'B'));

    assert_eq!(check_parents(root, &tree, &tree), Ok(4));
    assert_eq!(check_parents(a, &tree, &tree), Ok(2));
}

#[test]
fn foreign_ids_are_rejected() {
    let mut big = GenericTree::new(0);
    let root = big.root();
    let far = big.push(root, 1).and_then(|n| big.push(n, 2)).unwrap();

    let mut small = GenericTree::new(0);
    assert_eq!(small.push(far, 3), None);
    assert_eq!(small.get(far), None);
    assert!(small.children_of(far).is_empty());
    assert_eq!(small.len(), 1);
}

#[cfg(feature = "arbitrary")]
#[test]
fn fuzz_generic_tree() {
    use arbitrary::{Arbitrary, Unstructured};
    use rand::{RngCore, SeedableRng};
    use treewalk::{bfs, dfs};

    let mut rng = rand::rngs::StdRng::seed_from_u64(0xdead);
    let mut bytes = vec![0u8; 4096];

    for _ in 0..128 {
        rng.fill_bytes(&mut bytes);
        let mut u = Unstructured::new(&bytes);
        let tree = GenericTree::<u8>::arbitrary(&mut u).unwrap();
        let root = Some(tree.root());
        let n = tree.len();

        assert_eq!(check_parents(tree.root(), &tree, &tree), Ok(n));

        let recursive = dfs::stack::search(root, &tree);
        assert_eq!(dfs::heap::search(root, &tree), recursive);
        assert_eq!(dfs::heap::search_with_parent(root, &tree, &tree), recursive);
        assert_eq!(bfs::search(root, &tree).len(), 2 * n);
    }
}
