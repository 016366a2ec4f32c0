use crate::model::RouteError;
use serde::{Deserialize, Serialize};

/// tunable parameters of the bi-criteria search. the pruning thresholds trade
/// completeness of the target Pareto set for bounded runtime.
///
/// every field has a serde default so partial configuration files are accepted.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// max labels kept at a non-target node once its frontier grows past this size
    pub label_cap: usize,
    /// search stops when a target label is popped and this many target labels exist
    pub target_label_goal: usize,
    /// hard limit on priority queue pops
    pub max_iterations: usize,
    /// closed nodes are not re-expanded by labels slower than this multiple of the
    /// best time seen at the node. None disables the rule
    pub closed_slack_ratio: Option<f64>,
    /// labels whose estimated time exceeds this multiple of the best target time are
    /// not expanded. None disables the rule
    pub target_slack_ratio: Option<f64>,
    /// candidates slower than the best time seen at their node plus this amount are
    /// rejected. None disables the rule
    pub absolute_time_slack: Option<f64>,
    /// tolerance for dominance comparisons
    pub dominance_epsilon: f64,
    /// time reported by the placeholder route when the target is unreachable
    pub placeholder_time: f64,
    /// darkness reported by the placeholder route when the target is unreachable
    pub placeholder_dark: f64,
    /// optional wall-clock budget for the frontier search, in milliseconds
    pub max_runtime_ms: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            label_cap: 3,
            target_label_goal: 3,
            max_iterations: 1_000_000,
            closed_slack_ratio: Some(1.2),
            target_slack_ratio: Some(1.5),
            absolute_time_slack: Some(200.0),
            dominance_epsilon: 1e-12,
            placeholder_time: 1000.0,
            placeholder_dark: 500.0,
            max_runtime_ms: None,
        }
    }
}

impl SearchConfig {
    /// complete NAMOA* without pruning: no label cap, no slack rules, no early stop at
    /// the target and no iteration limit. the target frontier is the full Pareto set,
    /// at the price of unbounded label growth on dense graphs.
    pub fn exhaustive() -> SearchConfig {
        SearchConfig {
            label_cap: usize::MAX,
            target_label_goal: usize::MAX,
            max_iterations: usize::MAX,
            closed_slack_ratio: None,
            target_slack_ratio: None,
            absolute_time_slack: None,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), RouteError> {
        if self.label_cap == 0 {
            return Err(RouteError::ConfigurationError(String::from(
                "label_cap must be at least 1",
            )));
        }
        let thresholds = [
            ("closed_slack_ratio", self.closed_slack_ratio),
            ("target_slack_ratio", self.target_slack_ratio),
            ("absolute_time_slack", self.absolute_time_slack),
            ("dominance_epsilon", Some(self.dominance_epsilon)),
            ("placeholder_time", Some(self.placeholder_time)),
            ("placeholder_dark", Some(self.placeholder_dark)),
        ];
        for (name, value) in thresholds {
            let Some(value) = value else {
                continue;
            };
            if !value.is_finite() || value < 0.0 {
                return Err(RouteError::ConfigurationError(format!(
                    "{name} must be finite and non-negative, found {value}"
                )));
            }
        }
        Ok(())
    }
}

impl TryFrom<&String> for SearchConfig {
    type Error = RouteError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let conf: SearchConfig = if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f)?;
            toml::from_str(&s).map_err(|e| {
                RouteError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f)?;
            serde_json::from_str(&s)?
        } else {
            return Err(RouteError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )));
        };
        conf.validate()?;
        Ok(conf)
    }
}
