/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */
use crate::prelude::*;
use arbitrary::Arbitrary;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Arbitrary, Debug)]
pub struct Data {
    /// the payload and label of each node
    nodes: Vec<(u32, String)>,
    /// (source, target) % number of nodes
    edges: Vec<(u16, u16)>,
}

struct Node {
    payload: u32,
    label: String,
    out: Vec<Rc<RefCell<Node>>>,
}

crate::inspect_object!(Node { payload, label, out });

/// build an arbitrary, possibly cyclic, graph and check that its estimate
/// is finite, positive and stable
pub fn harness(data: Data) {
    let nodes = data
        .nodes
        .into_iter()
        .take(1 << 12) // avoid spending all the time building the graph
        .map(|(payload, label)| {
            Rc::new(RefCell::new(Node {
                payload,
                label,
                out: vec![],
            }))
        })
        .collect::<Vec<_>>();

    if !nodes.is_empty() {
        for &(source, target) in &data.edges {
            let target = nodes[target as usize % nodes.len()].clone();
            nodes[source as usize % nodes.len()]
                .borrow_mut()
                .out
                .push(target);
        }
    }

    let estimator = SizeEstimator::default();
    let first = estimator.report(&nodes);
    let second = estimator.report(&nodes);
    assert!(first.bytes > 0);
    assert_eq!(first, second);
    assert!(first.revisits <= data.edges.len() + nodes.len());
    assert!(!first.truncated);

    // break the cycles, or the graph would leak
    for node in &nodes {
        node.borrow_mut().out.clear();
    }
}
