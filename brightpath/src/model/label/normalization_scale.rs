use crate::model::RouteCost;

/// reference scales used to compare time and darkness on an equal footing when a
/// node frontier is capped. computed once per search from the source lower bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizationScale {
    pub time_ref: f64,
    pub dark_ref: f64,
}

impl NormalizationScale {
    const MIN_REF: f64 = 1e-9;

    pub fn new(time_ref: f64, dark_ref: f64) -> NormalizationScale {
        NormalizationScale {
            time_ref: time_ref.max(Self::MIN_REF),
            dark_ref: dark_ref.max(Self::MIN_REF),
        }
    }

    /// euclidean norm of the estimated total cost `g + h` in reference units.
    pub fn score(&self, g: &RouteCost, h: &RouteCost) -> f64 {
        let n_time = (g.time + h.time) / self.time_ref;
        let n_dark = (g.dark + h.dark) / self.dark_ref;
        n_time.hypot(n_dark)
    }
}
