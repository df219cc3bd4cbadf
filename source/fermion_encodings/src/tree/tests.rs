// Copyright (c) Andrew Projansky.
// Licensed under the MIT License.

use super::{FenwickTree, Leg, TernaryTree};
use crate::pauli::Pauli;

#[test]
fn fenwick_tree_over_eight_qubits() {
    let tree = FenwickTree::new(8);
    assert_eq!(Some(7), tree.root());
    let parents: Vec<_> = (0..8).map(|node| tree.parent(node)).collect();
    assert_eq!(
        vec![
            Some(1),
            Some(3),
            Some(3),
            Some(7),
            Some(5),
            Some(7),
            Some(7),
            None
        ],
        parents
    );
    assert_eq!(vec![3, 5, 6], tree.flip_set(7));
    assert!(tree.flip_set(0).is_empty());
}

#[test]
fn fenwick_sets_over_four_qubits() {
    let tree = FenwickTree::new(4);
    assert_eq!(vec![1, 3], tree.update_set(0));
    assert_eq!(vec![3], tree.update_set(2));
    assert!(tree.update_set(3).is_empty());

    assert!(tree.remainder_set(0).is_empty());
    assert_eq!(vec![1], tree.remainder_set(2));

    assert_eq!(vec![0], tree.parity_set(1));
    assert_eq!(vec![1], tree.parity_set(2));
    assert_eq!(vec![1, 2], tree.parity_set(3));
}

#[test]
fn fenwick_depth_is_logarithmic() {
    for num_qubits in [2usize, 5, 16, 33, 100] {
        let tree = FenwickTree::new(num_qubits);
        let bound = num_qubits.next_power_of_two().trailing_zeros() as usize;
        for node in 0..num_qubits {
            assert!(tree.update_set(node).len() <= bound);
        }
    }
}

#[test]
fn empty_trees_have_no_root() {
    assert_eq!(None, FenwickTree::new(0).root());
    assert!(FenwickTree::new(0).is_empty());
    assert_eq!(None, TernaryTree::complete(0).root());
    assert_eq!(None, TernaryTree::sierpinski(0).root());
}

#[test]
fn complete_ternary_tree_uses_heap_order() {
    let tree = TernaryTree::complete(5);
    assert_eq!(Some(0), tree.root());
    assert_eq!(Some(1), tree.child(0, Leg::X));
    assert_eq!(Some(2), tree.child(0, Leg::Y));
    assert_eq!(Some(3), tree.child(0, Leg::Z));
    assert_eq!(Some(4), tree.child(1, Leg::X));
    assert_eq!(None, tree.child(1, Leg::Y));
    assert_eq!(Some(Leg::X), tree.leg_to_parent(4));
    assert_eq!(vec![(1, Leg::X), (0, Leg::X)], tree.ancestor_path(4));
    assert_eq!(2, tree.depth(4));
}

#[test]
fn sierpinski_tree_is_self_similar() {
    let tree = TernaryTree::sierpinski(13);
    assert_eq!(Some(12), tree.root());
    assert_eq!(Some(3), tree.child(12, Leg::X));
    assert_eq!(Some(7), tree.child(12, Leg::Y));
    assert_eq!(Some(11), tree.child(12, Leg::Z));
    for (subtree, first) in [(3, 0), (7, 4), (11, 8)] {
        assert_eq!(Some(first), tree.child(subtree, Leg::X));
        assert_eq!(Some(first + 1), tree.child(subtree, Leg::Y));
        assert_eq!(Some(first + 2), tree.child(subtree, Leg::Z));
    }
}

#[test]
fn sierpinski_blocks_favour_earlier_legs() {
    let tree = TernaryTree::sierpinski(3);
    assert_eq!(Some(0), tree.child(2, Leg::X));
    assert_eq!(Some(1), tree.child(2, Leg::Y));
    assert_eq!(None, tree.child(2, Leg::Z));
}

#[test]
fn z_chain_follows_z_legs() {
    let tree = TernaryTree::complete(13);
    assert_eq!(vec![0, 3, 12], tree.z_chain(Some(0)));
    assert_eq!(vec![2, 9], tree.z_chain(tree.child(0, Leg::Y)));
    assert!(tree.z_chain(None).is_empty());
}

#[test]
fn majorana_path_marks_ancestors_node_and_z_chain() {
    let tree = TernaryTree::complete(5);
    assert_eq!(
        vec![(0, Pauli::X), (1, Pauli::X), (4, Pauli::Z)],
        tree.majorana_path(1, Leg::X)
    );
    assert_eq!(vec![(0, Pauli::Y), (2, Pauli::Z)], tree.majorana_path(0, Leg::Y));
}
