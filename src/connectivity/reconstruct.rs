use crate::numbers::{NumbersPath, Step, Value};

use super::index::{ConnectivityIndex, WitnessLink};

/// Reads the witness-forest path between `a` and `b` as a `NumbersPath`.
///
/// Both endpoints are walked up to their tree root and the walks are cut at
/// the first node they share. The remaining tree path `a … b` proves the pair
/// only if it climbs forward from `a` to an apex and then descends to `b`.
/// Returns `None` when `a` and `b` sit in different trees or the tree path
/// changes direction more than once.
pub fn reconstruct(index: &ConnectivityIndex, a: Value, b: Value) -> Option<NumbersPath> {
    let (nodes_a, links_a) = walk_to_root(index, a);
    let (nodes_b, links_b) = walk_to_root(index, b);

    let (cut_a, cut_b) = nodes_a
        .iter()
        .enumerate()
        .find_map(|(i, node)| nodes_b.iter().position(|n| n == node).map(|j| (i, j)))?;

    // Each link as traversed from `a` to `b`, with its direction along that walk.
    let mut chain: Vec<(Step, bool)> = links_a[..cut_a]
        .iter()
        .map(|link| (link.step, link.forward))
        .collect();
    chain.extend(
        links_b[..cut_b]
            .iter()
            .rev()
            .map(|link| (link.step, !link.forward)),
    );

    let apex = chain
        .iter()
        .position(|&(_, forward)| !forward)
        .unwrap_or(chain.len());
    if chain[apex..].iter().any(|&(_, forward)| forward) {
        return None;
    }

    let steps_a = chain[..apex].iter().map(|&(step, _)| step).collect();
    let steps_b = chain[apex..].iter().rev().map(|&(step, _)| step).collect();
    Some(NumbersPath::new(a, b, steps_a, steps_b))
}

/// Nodes visited from `start` to its tree root (inclusive) and the links taken.
fn walk_to_root(index: &ConnectivityIndex, start: Value) -> (Vec<Value>, Vec<WitnessLink>) {
    let mut nodes = vec![start];
    let mut links = Vec::new();
    let mut node = start;
    while let Some(link) = index.witness_link(node) {
        links.push(link);
        node = link.toward;
        nodes.push(node);
    }
    (nodes, links)
}
