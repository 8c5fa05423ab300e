//! This module implements an A* variant in the spirit of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
//! whose open set is ordered by a secondary tie-break score after the estimated cost, and which
//! hands back the full table of search nodes alongside the path.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::debug;
use std::cmp::Ordering;
use std::hash::Hash;

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// The best known record for a node. `parent` is the position of the predecessor in the node
/// table the record lives in.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchNode<N> {
    pub cell: N,
    /// Cost from the start.
    pub g: i32,
    /// Primary heuristic estimate to the goal.
    pub h: f64,
    pub f: f64,
    /// Secondary tie-break score, lower is preferred.
    pub w: f64,
    pub parent: Option<usize>,
    pub is_open: bool,
}

impl<N> SearchNode<N> {
    fn open(cell: N, g: i32, h: f64, w: f64, parent: usize) -> Self {
        SearchNode {
            cell,
            g,
            h,
            f: g as f64 + h,
            w,
            parent: Some(parent),
            is_open: true,
        }
    }
}

/// Everything a single search produced.
#[derive(Clone, Debug)]
pub struct SearchOutcome<N> {
    /// Start to goal, empty if the goal was never reached.
    pub path: Vec<N>,
    pub nodes: FxIndexMap<N, SearchNode<N>>,
    pub expansions: usize,
}

#[derive(Clone, Copy, Debug)]
struct OpenEntry {
    f: f64,
    w: f64,
    g: i32,
    index: usize,
}

impl OpenEntry {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.w.total_cmp(&other.w))
    }
}

/// Open set kept sorted by `(f, w)` from largest to smallest, so the best entry is popped off the
/// back. Among equal keys the most recently inserted entry comes out first.
#[derive(Default, Debug)]
struct Frontier {
    entries: Vec<OpenEntry>,
}

impl Frontier {
    fn push(&mut self, entry: OpenEntry) {
        let ix = self
            .entries
            .partition_point(|e| e.key_cmp(&entry) != Ordering::Less);
        self.entries.insert(ix, entry);
    }

    fn pop(&mut self) -> Option<OpenEntry> {
        self.entries.pop()
    }
}

fn reverse_path<N: Clone>(nodes: &FxIndexMap<N, SearchNode<N>>, start: usize) -> Vec<N> {
    let mut path: Vec<N> = std::iter::successors(Some(start), |&i| {
        nodes.get_index(i).and_then(|(_, node)| node.parent)
    })
    .filter_map(|i| nodes.get_index(i).map(|(cell, _)| cell.clone()))
    .collect();
    path.reverse();
    path
}

/// Searches from `start` until `success` holds for a popped node.
///
/// A node's record is only replaced when a strictly cheaper way to reach it is found; there is no
/// separate closed set. Open entries left behind by a replaced record are dropped when popped.
/// `tie_break` is called exactly once per accepted successor, in expansion order, which lets it
/// carry state across the whole search.
pub fn astar_waypoints<N, FN, IN, FH, FW, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut tie_break: FW,
    mut success: FS,
) -> SearchOutcome<N>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, i32)>,
    FH: FnMut(&N) -> f64,
    FW: FnMut(&N) -> f64,
    FS: FnMut(&N) -> bool,
{
    let mut nodes: FxIndexMap<N, SearchNode<N>> = FxIndexMap::default();
    nodes.insert(
        start.clone(),
        SearchNode {
            cell: start.clone(),
            g: 0,
            h: 0.0,
            f: 0.0,
            w: 0.0,
            parent: None,
            is_open: true,
        },
    );
    let mut frontier = Frontier::default();
    frontier.push(OpenEntry {
        f: 0.0,
        w: 0.0,
        g: 0,
        index: 0,
    });
    let mut expansions = 0;

    while let Some(OpenEntry { g, index, .. }) = frontier.pop() {
        let successors = {
            let Some((node, record)) = nodes.get_index_mut(index) else {
                continue;
            };
            // Superseded by a cheaper record for the same node.
            if g > record.g {
                continue;
            }
            record.is_open = false;
            if success(node) {
                let path = reverse_path(&nodes, index);
                debug!(
                    "Goal reached after {} expansions, {} nodes in table",
                    expansions,
                    nodes.len()
                );
                return SearchOutcome {
                    path,
                    nodes,
                    expansions,
                };
            }
            expansions += 1;
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = g + move_cost;
            let (f, w, n) = match nodes.entry(successor) {
                Vacant(e) => {
                    let h = heuristic(e.key());
                    let w = tie_break(e.key());
                    let n = e.index();
                    let node = SearchNode::open(e.key().clone(), new_cost, h, w, index);
                    let f = node.f;
                    e.insert(node);
                    (f, w, n)
                }
                Occupied(mut e) => {
                    if e.get().g <= new_cost {
                        continue;
                    }
                    let h = heuristic(e.key());
                    let w = tie_break(e.key());
                    let n = e.index();
                    let node = SearchNode::open(e.key().clone(), new_cost, h, w, index);
                    let f = node.f;
                    e.insert(node);
                    (f, w, n)
                }
            };
            frontier.push(OpenEntry {
                f,
                w,
                g: new_cost,
                index: n,
            });
        }
    }
    debug!(
        "Open set exhausted after {} expansions, {} nodes in table",
        expansions,
        nodes.len()
    );
    SearchOutcome {
        path: Vec::new(),
        nodes,
        expansions,
    }
}
