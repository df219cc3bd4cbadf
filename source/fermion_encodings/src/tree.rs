// Copyright (c) Andrew Projansky.
// Licensed under the MIT License.

//! Index trees over the qubits of a register.
//!
//! Both trees are arenas: node `k` lives at index `k` and stores its parent
//! and children as qubit indices.

#[cfg(test)]
mod tests;

use log::trace;

use crate::pauli::Pauli;

#[derive(Clone, Debug, Default)]
struct FenwickNode {
    parent: Option<usize>,
    children: Vec<usize>,
}

/// The binary-indexed tree behind the Bravyi-Kitaev encoding.
///
/// Qubit `k` stores the parity of the modes in its subtree. The tree over
/// `[l, r]` hangs the midpoint below `r` and recurses on both halves, so the
/// root is the last qubit and the depth is `⌈log₂ n⌉`.
#[derive(Clone, Debug, Default)]
pub struct FenwickTree {
    nodes: Vec<FenwickNode>,
}

impl FenwickTree {
    #[must_use]
    pub fn new(num_qubits: usize) -> Self {
        let mut tree = FenwickTree {
            nodes: vec![FenwickNode::default(); num_qubits],
        };
        if num_qubits > 0 {
            tree.split(0, num_qubits - 1, num_qubits - 1);
        }
        trace!("built Fenwick tree over {num_qubits} qubits");
        tree
    }

    fn split(&mut self, left: usize, right: usize, parent: usize) {
        if left >= right {
            return;
        }
        let pivot = (left + right) / 2;
        self.nodes[parent].children.push(pivot);
        self.nodes[pivot].parent = Some(parent);
        self.split(left, pivot, pivot);
        self.split(pivot + 1, right, parent);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn root(&self) -> Option<usize> {
        self.nodes.len().checked_sub(1)
    }

    #[must_use]
    pub fn parent(&self, node: usize) -> Option<usize> {
        self.nodes[node].parent
    }

    #[must_use]
    pub fn children(&self, node: usize) -> &[usize] {
        &self.nodes[node].children
    }

    /// Ancestors of `node`, nearest first. These qubits also store the
    /// occupation of `node` and flip with it.
    #[must_use]
    pub fn update_set(&self, node: usize) -> Vec<usize> {
        std::iter::successors(self.parent(node), |&ancestor| self.parent(ancestor)).collect()
    }

    /// Children of `node`, in increasing order. Together with `node` they
    /// determine whether mode `node` is occupied.
    #[must_use]
    pub fn flip_set(&self, node: usize) -> Vec<usize> {
        let mut children = self.children(node).to_vec();
        children.sort_unstable();
        children
    }

    /// Children of the ancestors of `node` that precede it.
    #[must_use]
    pub fn remainder_set(&self, node: usize) -> Vec<usize> {
        let mut remainder: Vec<usize> = self
            .update_set(node)
            .into_iter()
            .flat_map(|ancestor| self.children(ancestor).iter().copied())
            .filter(|&child| child < node)
            .collect();
        remainder.sort_unstable();
        remainder
    }

    /// Qubits whose joint parity is the parity of the modes before `node`.
    #[must_use]
    pub fn parity_set(&self, node: usize) -> Vec<usize> {
        let mut parity = self.remainder_set(node);
        parity.extend(self.children(node));
        parity.sort_unstable();
        parity
    }
}

/// One of the three outgoing edges of a ternary tree node.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Leg {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Leg {
    pub const ALL: [Leg; 3] = [Leg::X, Leg::Y, Leg::Z];

    #[must_use]
    pub const fn pauli(self) -> Pauli {
        match self {
            Leg::X => Pauli::X,
            Leg::Y => Pauli::Y,
            Leg::Z => Pauli::Z,
        }
    }
}

#[derive(Clone, Debug, Default)]
struct TernaryNode {
    parent: Option<(usize, Leg)>,
    children: [Option<usize>; 3],
}

/// A tree in which every qubit has an X, a Y and a Z leg.
///
/// Every path from the root that leaves the tree through a free leg is a
/// Pauli string, and any two such strings anticommute: they agree down to
/// the node where they split and take different legs there. Of the `2n + 1`
/// paths, the one that only follows Z legs is left out.
#[derive(Clone, Debug, Default)]
pub struct TernaryTree {
    nodes: Vec<TernaryNode>,
    root: Option<usize>,
}

impl TernaryTree {
    /// The complete ternary tree in heap order: the children of `k` are
    /// `3k + 1`, `3k + 2` and `3k + 3`.
    #[must_use]
    pub fn complete(num_qubits: usize) -> Self {
        let mut tree = TernaryTree {
            nodes: vec![TernaryNode::default(); num_qubits],
            root: (num_qubits > 0).then_some(0),
        };
        for node in 1..num_qubits {
            let leg = Leg::ALL[(node - 1) % 3];
            tree.attach(node, (node - 1) / 3, leg);
        }
        trace!("built complete ternary tree over {num_qubits} qubits");
        tree
    }

    /// The self-similar tree: `[l, r)` is rooted at `r - 1` and the remaining
    /// qubits are cut into three consecutive blocks hanging from the X, Y and
    /// Z legs. Earlier blocks get the leftover qubits. This block order is a
    /// convention of this crate, not the published Sierpinski-triangle rule.
    #[must_use]
    pub fn sierpinski(num_qubits: usize) -> Self {
        let mut tree = TernaryTree {
            nodes: vec![TernaryNode::default(); num_qubits],
            root: num_qubits.checked_sub(1),
        };
        tree.partition(0, num_qubits);
        trace!("built Sierpinski tree over {num_qubits} qubits");
        tree
    }

    fn partition(&mut self, left: usize, right: usize) {
        if left >= right {
            return;
        }
        let root = right - 1;
        let remaining = root - left;
        let sizes = [(remaining + 2) / 3, (remaining + 1) / 3, remaining / 3];
        let mut start = left;
        for (leg, size) in Leg::ALL.into_iter().zip(sizes) {
            if size > 0 {
                let end = start + size;
                self.attach(end - 1, root, leg);
                self.partition(start, end);
                start = end;
            }
        }
    }

    fn attach(&mut self, child: usize, parent: usize, leg: Leg) {
        self.nodes[child].parent = Some((parent, leg));
        self.nodes[parent].children[leg as usize] = Some(child);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn root(&self) -> Option<usize> {
        self.root
    }

    #[must_use]
    pub fn parent(&self, node: usize) -> Option<usize> {
        self.nodes[node].parent.map(|(parent, _)| parent)
    }

    /// The leg of the parent that leads to `node`.
    #[must_use]
    pub fn leg_to_parent(&self, node: usize) -> Option<Leg> {
        self.nodes[node].parent.map(|(_, leg)| leg)
    }

    #[must_use]
    pub fn child(&self, node: usize, leg: Leg) -> Option<usize> {
        self.nodes[node].children[leg as usize]
    }

    #[must_use]
    pub fn depth(&self, node: usize) -> usize {
        std::iter::successors(self.parent(node), |&ancestor| self.parent(ancestor)).count()
    }

    /// Ancestors of `node`, nearest first, each with the leg leading towards
    /// `node`.
    #[must_use]
    pub fn ancestor_path(&self, node: usize) -> Vec<(usize, Leg)> {
        std::iter::successors(self.nodes[node].parent, |&(ancestor, _)| {
            self.nodes[ancestor].parent
        })
        .collect()
    }

    /// Nodes reached from `start` by following Z legs only, `start` included.
    #[must_use]
    pub fn z_chain(&self, start: Option<usize>) -> Vec<usize> {
        std::iter::successors(start, |&node| self.child(node, Leg::Z)).collect()
    }

    /// The path that leaves `node` through `leg` and then follows Z legs down
    /// to a free leg, as `(qubit, Pauli)` pairs.
    #[must_use]
    pub fn majorana_path(&self, node: usize, leg: Leg) -> Vec<(usize, Pauli)> {
        let mut path: Vec<(usize, Pauli)> = self
            .ancestor_path(node)
            .into_iter()
            .map(|(ancestor, leg)| (ancestor, leg.pauli()))
            .collect();
        path.push((node, leg.pauli()));
        path.extend(
            self.z_chain(self.child(node, leg))
                .into_iter()
                .map(|descendant| (descendant, Pauli::Z)),
        );
        path
    }
}
