//! Slicing a dendrogram into a fixed number of clusters.

use super::dendrogram::{Dendrogram, NodeId};

impl Dendrogram {
    /// Splits the tree into at most `k` member lists.
    ///
    /// Starting from the root, `k - 1` times replaces the frontier node with
    /// the highest merge height (first on ties) by its two children, appended
    /// at the end of the frontier. Fewer than `k` lists come back when the
    /// tree runs out of internal nodes.
    pub fn cut(&self, k: usize) -> Vec<Vec<usize>> {
        let Some(root) = self.root() else {
            return Vec::new();
        };
        if k == 0 {
            return Vec::new();
        }

        let mut frontier: Vec<NodeId> = vec![root];
        for _ in 1..k {
            let Some(pos) = self.highest_splittable(&frontier) else {
                break;
            };
            let id = frontier.remove(pos);
            if let Some((left, right)) = self.node(id).children {
                frontier.push(left);
                frontier.push(right);
            }
        }

        frontier
            .into_iter()
            .map(|id| self.node(id).members.clone())
            .collect()
    }

    fn highest_splittable(&self, frontier: &[NodeId]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (pos, &id) in frontier.iter().enumerate() {
            let node = self.node(id);
            if node.is_leaf() {
                continue;
            }
            if best.map_or(true, |(_, h)| node.height > h) {
                best = Some((pos, node.height));
            }
        }
        best.map(|(pos, _)| pos)
    }
}
