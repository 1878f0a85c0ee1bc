//! Index-addressed merge tree built by average linkage.

use crate::similarity::DistanceMatrix;

/// Position of a node in [`Dendrogram::nodes`].
pub type NodeId = usize;

/// A leaf (one item) or the merge of two earlier nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeNode {
    /// Item indices under this node, left members first.
    pub members: Vec<usize>,
    /// Linkage distance at which the children joined. 0 for leaves.
    pub height: f64,
    pub children: Option<(NodeId, NodeId)>,
}

impl MergeNode {
    fn leaf(item: usize) -> Self {
        Self {
            members: vec![item],
            height: 0.0,
            children: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

/// The full merge history of one clustering call.
///
/// Leaves occupy ids `0..n` in item order; every merge appends one node.
#[derive(Debug, Clone, Default)]
pub struct Dendrogram {
    nodes: Vec<MergeNode>,
    root: Option<NodeId>,
}

impl Dendrogram {
    /// Repeatedly merges the two active clusters with the smallest mean
    /// cross-pair distance until one remains.
    ///
    /// Pairs are scanned in active-list order (`i < j`) with a strict `<`,
    /// so the first minimal pair wins. The merged node goes to the end of
    /// the active list.
    pub fn build(matrix: &DistanceMatrix) -> Self {
        let n = matrix.len();
        if n == 0 {
            return Self::default();
        }

        let mut nodes: Vec<MergeNode> = (0..n).map(MergeNode::leaf).collect();
        let mut active: Vec<NodeId> = (0..n).collect();

        while active.len() > 1 {
            let mut best = (0, 1);
            let mut best_distance = f64::INFINITY;
            for i in 0..active.len() {
                for j in (i + 1)..active.len() {
                    let d = average_linkage(&nodes[active[i]], &nodes[active[j]], matrix);
                    if d < best_distance {
                        best_distance = d;
                        best = (i, j);
                    }
                }
            }

            let (i, j) = best;
            let (left, right) = (active[i], active[j]);
            let mut members =
                Vec::with_capacity(nodes[left].members.len() + nodes[right].members.len());
            members.extend_from_slice(&nodes[left].members);
            members.extend_from_slice(&nodes[right].members);

            nodes.push(MergeNode {
                members,
                height: best_distance,
                children: Some((left, right)),
            });

            // j > i, so removing j first keeps i valid.
            active.remove(j);
            active.remove(i);
            active.push(nodes.len() - 1);
        }

        let root = active.first().copied();
        Self { nodes, root }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &MergeNode {
        &self.nodes[id]
    }

    pub fn nodes(&self) -> &[MergeNode] {
        &self.nodes
    }

    /// Number of leaves (original items).
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }
}

/// Mean distance over all cross pairs. Infinite when either side is empty.
fn average_linkage(a: &MergeNode, b: &MergeNode, matrix: &DistanceMatrix) -> f64 {
    let pairs = a.members.len() * b.members.len();
    if pairs == 0 {
        return f64::INFINITY;
    }
    let total: f64 = a
        .members
        .iter()
        .flat_map(|&i| b.members.iter().map(move |&j| matrix.get(i, j)))
        .sum();
    total / pairs as f64
}
