use super::{Label, LabelId, NormalizationScale};
use crate::model::RouteCost;

/// append-only storage for every label created during a search, plus the per-node
/// frontier of labels that are still live.
///
/// a frontier never holds two labels where one dominates the other. labels removed
/// from a frontier stay in the arena so that predecessor chains through them can
/// still be walked.
#[derive(Debug, Clone)]
pub struct LabelArena {
    labels: Vec<Label>,
    live: Vec<bool>,
    frontiers: Vec<Vec<LabelId>>,
}

impl LabelArena {
    pub fn new(node_count: usize) -> LabelArena {
        LabelArena {
            labels: vec![],
            live: vec![],
            frontiers: vec![vec![]; node_count],
        }
    }

    /// adds the initial label at the search source, bypassing dominance checks.
    pub fn seed(&mut self, node: usize, cost: RouteCost) -> LabelId {
        let id = self.append(Label::seed(node, cost));
        self.frontiers[node].push(id);
        id
    }

    pub fn get(&self, id: LabelId) -> Option<&Label> {
        self.labels.get(id.0)
    }

    /// total number of labels ever created, live or not.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn is_live(&self, id: LabelId) -> bool {
        self.live.get(id.0).copied().unwrap_or(false)
    }

    /// live label ids at `node`, in frontier order.
    pub fn frontier(&self, node: usize) -> &[LabelId] {
        self.frontiers.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// live labels at `node`, in frontier order.
    pub fn frontier_labels(&self, node: usize) -> impl Iterator<Item = &Label> + '_ {
        self.frontier(node)
            .iter()
            .filter_map(|id| self.labels.get(id.0))
    }

    /// position of `id` within the frontier of `node`.
    pub fn position(&self, node: usize, id: LabelId) -> Option<usize> {
        self.frontier(node).iter().position(|other| *other == id)
    }

    /// inserts `label` into the frontier of its node unless an existing label dominates
    /// it. on insertion, every existing label the new one dominates is removed.
    ///
    /// # Returns
    ///
    /// the id of the inserted label, or None if it was dominated.
    pub fn insert_nondominated(&mut self, label: Label, epsilon: f64) -> Option<LabelId> {
        let node = label.node;
        let dominated = self
            .frontier_labels(node)
            .any(|existing| existing.cost.dominates(&label.cost, epsilon));
        if dominated {
            return None;
        }

        let id = self.append(label);
        let mut frontier = std::mem::take(&mut self.frontiers[node]);
        frontier.retain(|other| {
            let keep = !label.cost.dominates(&self.labels[other.0].cost, epsilon);
            if !keep {
                self.live[other.0] = false;
            }
            keep
        });
        frontier.push(id);
        self.frontiers[node] = frontier;
        Some(id)
    }

    /// limits the frontier at `node` to at most `k` labels once it grows past `k`.
    /// the survivors are the minimum-time label, the minimum-darkness label and the label
    /// with the lowest [`NormalizationScale::score`] given the node's lower bound `h`,
    /// deduplicated and kept in that order. ties go to the earliest frontier entry.
    pub fn cap(&mut self, node: usize, k: usize, h: &RouteCost, scale: &NormalizationScale) {
        let frontier = self.frontier(node);
        if frontier.len() <= k {
            return;
        }

        let labels = &self.labels;
        let cost = |i: usize| labels[frontier[i].0].cost;
        let (mut best_time, mut best_dark, mut best_bal) = (0, 0, 0);
        let mut best_score = scale.score(&cost(0), h);
        for i in 1..frontier.len() {
            let c = cost(i);
            if c.time < cost(best_time).time {
                best_time = i;
            }
            if c.dark < cost(best_dark).dark {
                best_dark = i;
            }
            let score = scale.score(&c, h);
            if score < best_score {
                best_score = score;
                best_bal = i;
            }
        }

        let mut capped = vec![frontier[best_time]];
        if best_dark != best_time {
            capped.push(frontier[best_dark]);
        }
        if best_bal != best_time && best_bal != best_dark {
            capped.push(frontier[best_bal]);
        }
        capped.truncate(k);

        for id in self.frontiers[node].iter() {
            self.live[id.0] = capped.contains(id);
        }
        self.frontiers[node] = capped;
    }

    fn append(&mut self, label: Label) -> LabelId {
        let id = LabelId(self.labels.len());
        self.labels.push(label);
        self.live.push(true);
        id
    }
}
