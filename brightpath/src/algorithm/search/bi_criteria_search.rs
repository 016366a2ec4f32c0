use super::{FrontierItem, SearchResult, TerminationReason};
use crate::{
    algorithm::heuristic::LowerBounds,
    config::SearchConfig,
    model::{
        graph::StreetGraph,
        label::{Label, LabelArena, NormalizationScale},
        RouteCost,
    },
};
use std::{
    collections::BinaryHeap,
    time::{Duration, Instant},
};

/// NAMOA*-style label-setting search over (time, darkness).
///
/// the open set is ordered lexicographically on `f = g + h`. labels are kept per node
/// in a [`LabelArena`] frontier, pruned by Pareto dominance and capped at
/// [`SearchConfig::label_cap`] labels on non-target nodes. several slack rules from
/// [`SearchConfig`] skip expansions that are unlikely to improve the target set, so the
/// resulting target labels approximate the Pareto set and are not guaranteed complete.
/// with [`SearchConfig::exhaustive`] every pruning rule is off and the target frontier is
/// the full Pareto set.
pub struct BiCriteriaSearch<'a> {
    graph: &'a StreetGraph,
    bounds: &'a LowerBounds,
    source: usize,
    target: usize,
    config: &'a SearchConfig,
}

impl<'a> BiCriteriaSearch<'a> {
    pub fn new(
        graph: &'a StreetGraph,
        bounds: &'a LowerBounds,
        source: usize,
        target: usize,
        config: &'a SearchConfig,
    ) -> BiCriteriaSearch<'a> {
        BiCriteriaSearch {
            graph,
            bounds,
            source,
            target,
            config,
        }
    }

    pub fn run(&self) -> SearchResult {
        let n = self.graph.node_count();
        let (s, t) = (self.source, self.target);
        let eps = self.config.dominance_epsilon;
        let scale = NormalizationScale::new(self.bounds.get(s).time, self.bounds.get(s).dark);
        let deadline = self.config.max_runtime_ms.map(Duration::from_millis);
        let started = Instant::now();

        let mut arena = LabelArena::new(n);
        let mut open: BinaryHeap<FrontierItem> = BinaryHeap::new();
        let mut best_time = vec![f64::INFINITY; n];
        let mut closed = vec![false; n];
        let mut iterations: usize = 0;
        let mut termination = TerminationReason::Exhausted;

        let seed = arena.seed(s, RouteCost::default());
        open.push(FrontierItem::new(
            &RouteCost::default(),
            &self.bounds.get(s),
            s,
            seed,
        ));
        log::debug!("begin bi-criteria search from {s} to {t} over {n} nodes");

        while let Some(item) = open.pop() {
            if iterations >= self.config.max_iterations {
                termination = TerminationReason::IterationLimit;
                break;
            }
            if deadline.is_some_and(|d| started.elapsed() >= d) {
                termination = TerminationReason::Deadline;
                break;
            }
            iterations += 1;

            // lazy deletion: the label was pruned after this item was queued
            if !arena.is_live(item.label) {
                continue;
            }
            let u = item.node;
            if u == t {
                if arena.frontier(t).len() >= self.config.target_label_goal {
                    termination = TerminationReason::TargetLabelGoal;
                    break;
                }
                continue;
            }
            let current = match arena.get(item.label) {
                Some(label) => *label,
                None => continue,
            };

            if let Some(ratio) = self.config.closed_slack_ratio {
                if closed[u] && current.cost.time > best_time[u] * ratio {
                    continue;
                }
            }
            if let Some(ratio) = self.config.target_slack_ratio {
                let best_target_time = arena
                    .frontier_labels(t)
                    .map(|l| l.cost.time)
                    .reduce(f64::min);
                if best_target_time.is_some_and(|best| item.f_time.0 > best * ratio) {
                    continue;
                }
            }

            for adj in self.graph.neighbors(u) {
                let v = adj.dst;
                if !self.graph.is_traversable(v, s, t) {
                    continue;
                }
                let cost = current.cost.extend(adj.time, self.graph.darkness(u, v));
                if let Some(slack) = self.config.absolute_time_slack {
                    if cost.time > best_time[v] + slack {
                        continue;
                    }
                }
                let candidate = Label {
                    cost,
                    node: v,
                    predecessor: Some(item.label),
                };
                let id = match arena.insert_nondominated(candidate, eps) {
                    Some(id) => id,
                    None => continue,
                };
                let h = self.bounds.get(v);
                if v != t {
                    arena.cap(v, self.config.label_cap, &h, &scale);
                }
                if arena.position(v, id).is_none() {
                    continue;
                }
                best_time[v] = best_time[v].min(cost.time);
                if v != t {
                    open.push(FrontierItem::new(&cost, &h, v, id));
                }
            }
            closed[u] = true;
        }

        log::info!(
            "bi-criteria search finished after {iterations} iterations ({termination}) with {} labels at target, {} labels created",
            arena.frontier(t).len(),
            arena.len()
        );

        SearchResult {
            arena,
            source: s,
            target: t,
            iterations,
            termination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BiCriteriaSearch;
    use crate::{
        algorithm::{
            heuristic::LowerBounds,
            search::{SearchResult, TerminationReason},
        },
        config::SearchConfig,
        model::graph::{RawEdge, StreetGraph},
    };

    const EPS: f64 = 1e-12;

    fn build(
        node_count: usize,
        light: &[f64],
        crime: &[bool],
        edges: &[(usize, usize, f64)],
    ) -> StreetGraph {
        let edges: Vec<RawEdge> = edges.iter().copied().map(RawEdge::from).collect();
        StreetGraph::try_new(node_count, light, crime, &edges).expect("test invariant failed")
    }

    fn sample_graph() -> StreetGraph {
        build(
            6,
            &[1.0, 1.0, 1.0, 0.5, 1.0, 0.2],
            &[false, true, false, false, false, false],
            &[
                (0, 3, 3.0),
                (2, 3, 5.0),
                (2, 5, 2.0),
                (3, 5, 1.0),
                (5, 4, 1.0),
                (2, 4, 1.0),
            ],
        )
    }

    /// three disjoint routes from 0 to 3: fast and dark via 1, slow and lit via 2,
    /// and a compromise via 4.
    fn tradeoff_graph() -> StreetGraph {
        build(
            5,
            &[1.0, 0.0, 1.0, 1.0, 0.75],
            &[false; 5],
            &[
                (0, 1, 1.0),
                (1, 3, 1.0),
                (0, 2, 1.2),
                (2, 3, 1.2),
                (0, 4, 1.1),
                (4, 3, 1.1),
            ],
        )
    }

    /// 0 reaches 1 fast through the dark node 4, which closes 1 with best time 2. the lit
    /// detour through 2 arrives at 1 with time 3, past the 20% closed-node margin, although
    /// it leads to the only well-lit route to 3.
    fn closed_detour_graph() -> StreetGraph {
        build(
            5,
            &[0.5, 0.5, 1.0, 1.0, 0.0],
            &[false; 5],
            &[
                (0, 4, 1.0),
                (4, 1, 1.0),
                (0, 2, 1.5),
                (2, 1, 1.5),
                (1, 3, 1.0),
            ],
        )
    }

    /// two routes from 0 to 1: dark through 3 and lit through 2, scaled by `leg` and
    /// `lit_leg` per edge.
    fn two_route_graph(leg: f64, lit_leg: f64) -> StreetGraph {
        build(
            4,
            &[0.5, 0.5, 1.0, 0.0],
            &[false; 4],
            &[(0, 3, leg), (3, 1, leg), (0, 2, lit_leg), (2, 1, lit_leg)],
        )
    }

    fn search(graph: &StreetGraph, s: usize, t: usize, config: &SearchConfig) -> SearchResult {
        let bounds = LowerBounds::new(graph, t);
        BiCriteriaSearch::new(graph, &bounds, s, t, config).run()
    }

    fn target_costs(result: &SearchResult) -> Vec<(f64, f64)> {
        result
            .target_labels()
            .iter()
            .map(|l| (l.cost.time, l.cost.dark))
            .collect()
    }

    fn assert_costs(found: &[(f64, f64)], expected: &[(f64, f64)]) {
        assert_eq!(found.len(), expected.len(), "{found:?} != {expected:?}");
        for ((t, d), (et, ed)) in found.iter().zip(expected.iter()) {
            assert!((t - et).abs() < 1e-9, "time {t} != {et}");
            assert!((d - ed).abs() < 1e-9, "dark {d} != {ed}");
        }
    }

    #[test]
    fn test_sample_fastest_route() {
        let graph = sample_graph();
        let result = search(&graph, 0, 4, &SearchConfig::default());
        assert_eq!(result.termination, TerminationReason::Exhausted);
        let fastest = result
            .target_labels()
            .into_iter()
            .map(|l| l.cost.time)
            .reduce(f64::min)
            .expect("test failed");
        assert!((fastest - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_tradeoff_target_frontier() {
        let graph = tradeoff_graph();
        let result = search(&graph, 0, 3, &SearchConfig::default());
        let costs: Vec<(f64, f64)> = result
            .target_labels()
            .iter()
            .map(|l| (l.cost.time, l.cost.dark))
            .collect();
        assert_eq!(costs.len(), 3);
        let expected = [(2.0, 1.0), (2.2, 0.25), (2.4, 0.0)];
        for ((t, d), (et, ed)) in costs.iter().zip(expected.iter()) {
            assert!((t - et).abs() < 1e-9, "time {t} != {et}");
            assert!((d - ed).abs() < 1e-9, "dark {d} != {ed}");
        }
    }

    #[test]
    fn test_frontiers_are_antichains() {
        let cases = [
            (sample_graph(), 0, 4),
            (tradeoff_graph(), 0, 3),
            (sample_graph(), 2, 0),
        ];
        for (graph, s, t) in cases {
            let result = search(&graph, s, t, &SearchConfig::default());
            for node in 0..graph.node_count() {
                let labels: Vec<_> = result.arena.frontier_labels(node).collect();
                for a in labels.iter() {
                    for b in labels.iter() {
                        assert!(
                            !a.cost.dominates(&b.cost, EPS),
                            "node {node} holds a dominated label"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_label_cap_respected_on_non_target_nodes() {
        let config = SearchConfig {
            label_cap: 1,
            ..Default::default()
        };
        let graph = tradeoff_graph();
        let result = search(&graph, 0, 3, &config);
        for node in [0, 1, 2, 4] {
            assert!(result.arena.frontier(node).len() <= 1);
        }
        assert!(result.found_target());
    }

    #[test]
    fn test_forbidden_intermediate_never_visited() {
        // 0 - 1 - 2 is the only link, and 1 is crime-flagged
        let graph = build(
            3,
            &[1.0; 3],
            &[false, true, false],
            &[(0, 1, 1.0), (1, 2, 1.0)],
        );
        let result = search(&graph, 0, 2, &SearchConfig::default());
        assert!(!result.found_target());
        assert!(result.arena.frontier(1).is_empty());
    }

    #[test]
    fn test_iteration_limit() {
        let config = SearchConfig {
            max_iterations: 0,
            ..Default::default()
        };
        let result = search(&sample_graph(), 0, 4, &config);
        assert_eq!(result.termination, TerminationReason::IterationLimit);
        assert_eq!(result.iterations, 0);
        assert!(!result.found_target());
    }

    #[test]
    fn test_runtime_budget() {
        let config = SearchConfig {
            max_runtime_ms: Some(0),
            ..Default::default()
        };
        let result = search(&sample_graph(), 0, 4, &config);
        assert_eq!(result.termination, TerminationReason::Deadline);
        assert!(!result.found_target());
    }

    #[test]
    fn test_target_label_goal_when_source_is_target() {
        let config = SearchConfig {
            target_label_goal: 1,
            ..Default::default()
        };
        let result = search(&sample_graph(), 4, 4, &config);
        assert_eq!(result.termination, TerminationReason::TargetLabelGoal);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.arena.frontier(4).len(), 1);
    }

    #[test]
    fn test_source_equals_target_is_not_expanded() {
        let result = search(&sample_graph(), 4, 4, &SearchConfig::default());
        assert_eq!(result.termination, TerminationReason::Exhausted);
        assert_eq!(result.arena.len(), 1);
    }

    #[test]
    fn test_search_is_deterministic() {
        let graph = tradeoff_graph();
        let a = search(&graph, 0, 3, &SearchConfig::default());
        let b = search(&graph, 0, 3, &SearchConfig::default());
        assert_eq!(a.iterations, b.iterations);
        assert_eq!(a.arena.frontier(3), b.arena.frontier(3));
    }

    #[test]
    fn test_closed_node_slack_skips_slow_reexpansion() {
        let graph = closed_detour_graph();
        let pruned = search(&graph, 0, 3, &SearchConfig::default());
        assert_costs(&target_costs(&pruned), &[(3.0, 1.75)]);
        // the slow label still reaches node 1, it is only never expanded
        assert_eq!(pruned.arena.frontier(1).len(), 2);

        let config = SearchConfig {
            closed_slack_ratio: None,
            ..Default::default()
        };
        let relaxed = search(&graph, 0, 3, &config);
        assert_costs(&target_costs(&relaxed), &[(3.0, 1.75), (4.0, 0.75)]);
    }

    #[test]
    fn test_target_slack_skips_labels_far_behind_best_target_time() {
        // lit route takes 4, more than 1.5 times the dark route's 2
        let graph = two_route_graph(1.0, 2.0);
        let pruned = search(&graph, 0, 1, &SearchConfig::default());
        assert_costs(&target_costs(&pruned), &[(2.0, 1.5)]);

        let config = SearchConfig {
            target_slack_ratio: None,
            ..Default::default()
        };
        let relaxed = search(&graph, 0, 1, &config);
        assert_costs(&target_costs(&relaxed), &[(2.0, 1.5), (4.0, 0.5)]);
    }

    #[test]
    fn test_absolute_slack_rejects_long_detours() {
        // lit route takes 720, within 1.5 times the dark route's 500 but more than 200 over it
        let graph = two_route_graph(250.0, 360.0);
        let pruned = search(&graph, 0, 1, &SearchConfig::default());
        assert_costs(&target_costs(&pruned), &[(500.0, 1.5)]);

        let config = SearchConfig {
            absolute_time_slack: None,
            ..Default::default()
        };
        let relaxed = search(&graph, 0, 1, &config);
        assert_costs(&target_costs(&relaxed), &[(500.0, 1.5), (720.0, 0.5)]);

        let config = SearchConfig {
            absolute_time_slack: Some(250.0),
            ..Default::default()
        };
        let widened = search(&graph, 0, 1, &config);
        assert_eq!(widened.target_labels().len(), 2);
    }

    #[test]
    fn test_exhaustive_search_keeps_full_pareto_set() {
        let cases = [
            (closed_detour_graph(), 0, 3, vec![(3.0, 1.75), (4.0, 0.75)]),
            (two_route_graph(1.0, 2.0), 0, 1, vec![(2.0, 1.5), (4.0, 0.5)]),
            (two_route_graph(250.0, 360.0), 0, 1, vec![(500.0, 1.5), (720.0, 0.5)]),
        ];
        for (graph, s, t, pareto) in cases {
            let pruned = search(&graph, s, t, &SearchConfig::default());
            assert!(target_costs(&pruned).len() < pareto.len());

            let result = search(&graph, s, t, &SearchConfig::exhaustive());
            assert_eq!(result.termination, TerminationReason::Exhausted);
            assert_costs(&target_costs(&result), &pareto);
        }
    }

    #[test]
    fn test_exhaustive_search_agrees_when_nothing_is_pruned() {
        let graph = tradeoff_graph();
        let result = search(&graph, 0, 3, &SearchConfig::exhaustive());
        assert_costs(
            &target_costs(&result),
            &[(2.0, 1.0), (2.2, 0.25), (2.4, 0.0)],
        );
    }
}
