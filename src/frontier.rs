//! Search nodes and the A* frontier.
//!
//! Nodes do not own their path. Every path is a chain of links in a [PathTree], so a child
//! shares all of its parent's steps and only the goal path is ever materialized. Nodes in the
//! [Frontier] are addressed by a [NodeId] handed out on insertion, which makes removal exact:
//! purging a node never touches another node that merely has the same fields.
use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexMap;
use itertools::Itertools;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Index of the last link of a path inside a [PathTree].
pub type PathIx = usize;

#[derive(Clone, Debug)]
struct PathLink {
    state: Point,
    parent: Option<PathIx>,
    len: i32,
}

/// Append-only store of paths with structural sharing. A path is identified by its last link,
/// `None` being the empty path.
#[derive(Clone, Debug, Default)]
pub struct PathTree {
    links: Vec<PathLink>,
}

impl PathTree {
    pub fn new() -> PathTree {
        PathTree::default()
    }

    /// Returns the path `path` followed by `state`. The original path stays valid.
    pub fn extend(&mut self, path: Option<PathIx>, state: Point) -> PathIx {
        let len = self.len(path) + 1;
        self.links.push(PathLink {
            state,
            parent: path,
            len,
        });
        self.links.len() - 1
    }

    /// Number of points on the path.
    pub fn len(&self, path: Option<PathIx>) -> i32 {
        path.map_or(0, |ix| self.links[ix].len)
    }

    /// Points on the path from its first to its last.
    pub fn to_vec(&self, path: Option<PathIx>) -> Vec<Point> {
        let mut points: Vec<Point> = std::iter::successors(path, |&ix| self.links[ix].parent)
            .map(|ix| self.links[ix].state)
            .collect();
        points.reverse();
        points
    }
}

/// A search candidate. `cost` always equals the length of `path`.
#[derive(Clone, Debug)]
pub struct Node {
    pub state: Point,
    pub heuristic: i32,
    pub path: Option<PathIx>,
    pub cost: i32,
}

impl Node {
    pub fn new(state: Point, heuristic: i32, path: Option<PathIx>, paths: &PathTree) -> Node {
        Node {
            state,
            heuristic,
            path,
            cost: paths.len(path),
        }
    }

    /// f(n) = h(n) + g(n)
    pub fn estimated_cost(&self) -> i32 {
        self.heuristic + self.cost
    }
}

/// Handle of a node stored in a [Frontier].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Member of a [CostGroup]: either the candidate under consideration, which is not in the
/// frontier, or a node already queued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Member {
    Candidate,
    Queued(NodeId),
}

/// All nodes sharing the candidate's state, together with the one of smallest cost.
#[derive(Clone, Debug)]
pub struct CostGroup {
    pub members: Vec<Member>,
    pub best: Member,
}

impl CostGroup {
    /// Queued members that lose against [best](Self::best) and should be purged.
    pub fn surplus(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.members
            .iter()
            .filter(move |member| **member != self.best)
            .filter_map(|member| match member {
                Member::Queued(id) => Some(*id),
                Member::Candidate => None,
            })
    }
}

/// Discovered but not yet expanded nodes, kept in insertion order. Every tie between nodes is
/// resolved in favour of the one inserted first.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    nodes: FxIndexMap<NodeId, Node>,
    next_id: usize,
}

impl Frontier {
    pub fn new() -> Frontier {
        Frontier::default()
    }

    /// Appends a node and returns its handle.
    pub fn add(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, node);
        id
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Removes and returns the earliest inserted node with the smallest f(n).
    pub fn retrieve(&mut self) -> Option<Node> {
        let ix = self
            .nodes
            .values()
            .position_min_by_key(|node| node.estimated_cost())?;
        self.nodes.shift_remove_index(ix).map(|(_, node)| node)
    }

    /// Groups `candidate` with every queued node of the same state and picks the member with
    /// the smallest cost. The candidate is considered first, so it wins ties.
    pub fn best_cost_group(&self, candidate: &Node) -> CostGroup {
        let mut members = vec![Member::Candidate];
        let mut best = Member::Candidate;
        let mut best_cost = candidate.cost;
        for (&id, node) in self.nodes.iter() {
            if node.state == candidate.state {
                members.push(Member::Queued(id));
                if node.cost < best_cost {
                    best = Member::Queued(id);
                    best_cost = node.cost;
                }
            }
        }
        CostGroup { members, best }
    }

    /// Removes exactly the nodes behind the given handles. Handles no longer in the frontier
    /// are ignored.
    pub fn purge<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = NodeId>,
    {
        for id in ids {
            self.nodes.shift_remove(&id);
        }
    }

    /// Number of queued nodes with the given state.
    pub fn count_state(&self, state: &Point) -> usize {
        self.nodes
            .values()
            .filter(|node| node.state == *state)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(paths: &mut PathTree, state: (i32, i32), heuristic: i32, steps: usize) -> Node {
        let mut path = None;
        for i in 0..steps {
            path = Some(paths.extend(path, Point::new(i as i32, 0)));
        }
        Node::new(Point::new(state.0, state.1), heuristic, path, paths)
    }

    #[test]
    fn paths_share_prefixes() {
        let mut paths = PathTree::new();
        let a = paths.extend(None, Point::new(0, 0));
        let b = paths.extend(Some(a), Point::new(1, 0));
        let c = paths.extend(Some(a), Point::new(1, 1));
        assert_eq!(paths.len(None), 0);
        assert_eq!(paths.len(Some(b)), 2);
        assert_eq!(paths.to_vec(Some(b)), vec![Point::new(0, 0), Point::new(1, 0)]);
        assert_eq!(paths.to_vec(Some(c)), vec![Point::new(0, 0), Point::new(1, 1)]);
        assert!(paths.to_vec(None).is_empty());
    }

    #[test]
    fn cost_is_path_length() {
        let mut paths = PathTree::new();
        let n = node(&mut paths, (3, 3), 4, 3);
        assert_eq!(n.cost, 3);
        assert_eq!(n.estimated_cost(), 7);
    }

    #[test]
    fn retrieve_prefers_earliest_minimum() {
        let mut paths = PathTree::new();
        let mut frontier = Frontier::new();
        assert!(frontier.retrieve().is_none());
        frontier.add(node(&mut paths, (0, 1), 5, 1));
        frontier.add(node(&mut paths, (1, 0), 3, 1));
        frontier.add(node(&mut paths, (1, 1), 2, 2));
        frontier.add(node(&mut paths, (2, 2), 1, 1));
        assert_eq!(frontier.retrieve().unwrap().state, Point::new(2, 2));
        // (1, 0) and (1, 1) both have f = 4, the first inserted wins.
        assert_eq!(frontier.retrieve().unwrap().state, Point::new(1, 0));
        assert_eq!(frontier.retrieve().unwrap().state, Point::new(1, 1));
        assert_eq!(frontier.retrieve().unwrap().state, Point::new(0, 1));
        assert!(frontier.is_empty());
    }

    #[test]
    fn candidate_wins_cost_ties() {
        let mut paths = PathTree::new();
        let mut frontier = Frontier::new();
        let queued = frontier.add(node(&mut paths, (4, 4), 1, 2));
        frontier.add(node(&mut paths, (5, 5), 1, 1));
        let candidate = node(&mut paths, (4, 4), 1, 2);
        let group = frontier.best_cost_group(&candidate);
        assert_eq!(group.members, vec![Member::Candidate, Member::Queued(queued)]);
        assert_eq!(group.best, Member::Candidate);
        assert_eq!(group.surplus().collect::<Vec<_>>(), vec![queued]);
    }

    #[test]
    fn cheaper_queued_node_is_kept() {
        let mut paths = PathTree::new();
        let mut frontier = Frontier::new();
        let expensive = frontier.add(node(&mut paths, (4, 4), 1, 5));
        let cheap = frontier.add(node(&mut paths, (4, 4), 1, 2));
        let cheap_twin = frontier.add(node(&mut paths, (4, 4), 1, 2));
        let candidate = node(&mut paths, (4, 4), 1, 3);
        let group = frontier.best_cost_group(&candidate);
        assert_eq!(group.best, Member::Queued(cheap));
        assert_eq!(
            group.surplus().collect::<Vec<_>>(),
            vec![expensive, cheap_twin]
        );
        frontier.purge(group.surplus());
        assert_eq!(frontier.count_state(&Point::new(4, 4)), 1);
        assert!(frontier.get(cheap).is_some());
    }

    /// Two nodes with identical fields are still different nodes.
    #[test]
    fn purge_is_by_handle() {
        let mut paths = PathTree::new();
        let mut frontier = Frontier::new();
        let first = frontier.add(node(&mut paths, (2, 3), 1, 1));
        let second = frontier.add(node(&mut paths, (2, 3), 1, 1));
        frontier.purge([second]);
        assert_eq!(frontier.len(), 1);
        assert!(frontier.get(first).is_some());
        assert!(frontier.get(second).is_none());
        // Purging a handle that is already gone changes nothing.
        frontier.purge([second]);
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn purge_keeps_insertion_order() {
        let mut paths = PathTree::new();
        let mut frontier = Frontier::new();
        frontier.add(node(&mut paths, (0, 0), 2, 1));
        let middle = frontier.add(node(&mut paths, (1, 0), 1, 1));
        frontier.add(node(&mut paths, (2, 0), 2, 1));
        frontier.purge([middle]);
        assert_eq!(frontier.retrieve().unwrap().state, Point::new(0, 0));
        assert_eq!(frontier.retrieve().unwrap().state, Point::new(2, 0));
    }
}
