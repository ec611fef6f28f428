use serde::{Deserialize, Serialize};

/// A named line on a figure, with cached extents so range computation
/// doesn't rescan the points on every render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    points: Vec<(f64, f64)>,
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
}

impl Series {
    pub fn new(label: impl Into<String>, x: &[f64], y: &[f64]) -> Self {
        let xmin = x.iter().fold(f64::INFINITY, |a, &b| a.min(b));
        let xmax = x.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        let ymin = y.iter().fold(f64::INFINITY, |a, &b| a.min(b));
        let ymax = y.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        let points = x
            .iter()
            .copied()
            .zip(y.iter().copied())
            .collect();

        Self {
            label: label.into(),
            points,
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn x_range(&self) -> (f64, f64) {
        (self.xmin, self.xmax)
    }

    pub fn y_range(&self) -> (f64, f64) {
        (self.ymin, self.ymax)
    }
}
