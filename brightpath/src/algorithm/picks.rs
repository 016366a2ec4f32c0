use super::{extraction::reconstruct_path, search::SearchResult};
use crate::model::{
    path::{Path, PickName},
    RouteCost,
};
use itertools::Itertools;

const DEGENERATE_RANGE: f64 = 1e-12;

/// positions of the chosen labels within the target frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickSelection {
    pub fastest: usize,
    pub best_lit: usize,
    pub balanced: usize,
}

impl PickSelection {
    pub fn iter(&self) -> impl Iterator<Item = (PickName, usize)> {
        [
            (PickName::Fastest, self.fastest),
            (PickName::BestLit, self.best_lit),
            (PickName::Balanced, self.balanced),
        ]
        .into_iter()
    }
}

/// chooses the fastest, best-lit and balanced labels from the target costs.
/// ties are resolved in favor of the first occurrence. returns None when `costs` is empty.
pub fn select_picks(costs: &[RouteCost]) -> Option<PickSelection> {
    let fastest = first_min_by(costs.iter().map(|c| c.time))?;
    let best_lit = first_min_by(costs.iter().map(|c| c.dark))?;
    let balanced = first_min_by(balanced_scores(costs).into_iter())?;
    Some(PickSelection {
        fastest,
        best_lit,
        balanced,
    })
}

/// distance of each cost to the ideal point after min-max normalizing both objectives
/// to `[0, 1]` over `costs`. an objective whose range is degenerate contributes `0`.
pub fn balanced_scores(costs: &[RouteCost]) -> Vec<f64> {
    let time_range = costs.iter().map(|c| c.time).minmax().into_option();
    let dark_range = costs.iter().map(|c| c.dark).minmax().into_option();
    costs
        .iter()
        .map(|c| {
            let n_time = normalize(c.time, time_range);
            let n_dark = normalize(c.dark, dark_range);
            n_time.hypot(n_dark)
        })
        .collect()
}

/// builds the three named paths from the target frontier of a finished search.
/// returns None when the search produced no label at the target.
pub fn pick_paths(result: &SearchResult) -> Option<Vec<Path>> {
    let frontier = result.arena.frontier(result.target);
    let costs: Vec<RouteCost> = result
        .arena
        .frontier_labels(result.target)
        .map(|l| l.cost)
        .collect();
    let selection = select_picks(&costs)?;
    let paths = selection
        .iter()
        .map(|(name, index)| Path {
            name,
            chosen_label_index: index,
            node_sequence: reconstruct_path(&result.arena, frontier[index]),
            total_time: costs[index].time,
            total_dark: costs[index].dark,
        })
        .collect();
    Some(paths)
}

fn normalize(x: f64, range: Option<(f64, f64)>) -> f64 {
    match range {
        Some((lo, hi)) if lo.is_finite() && hi.is_finite() && hi - lo >= DEGENERATE_RANGE => {
            (x - lo) / (hi - lo)
        }
        _ => 0.0,
    }
}

fn first_min_by(values: impl Iterator<Item = f64>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, v) in values.enumerate() {
        match best {
            Some((_, b)) if v >= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}
