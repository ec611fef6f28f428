use serde::{Deserialize, Serialize};

use crate::series::Series;

/// An explicit chart value: title, axis labels, and the series to draw.
/// Figures carry no backend state; rendering is a separate, stateless call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    width: u32,
    height: u32,
    series: Vec<Series>,
}

impl Figure {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            width: 800,
            height: 500,
            series: Vec::new(),
        }
    }

    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// A legend is drawn only when there is more than one line to tell apart.
    pub fn show_legend(&self) -> bool {
        self.series.len() > 1
    }

    /// X extent over all series, widened to a non-degenerate interval.
    pub fn x_range(&self) -> (f64, f64) {
        Self::pad(self.fold_range(Series::x_range))
    }

    /// Y extent over all series, widened to a non-degenerate interval.
    pub fn y_range(&self) -> (f64, f64) {
        Self::pad(self.fold_range(Series::y_range))
    }

    fn fold_range(&self, range: fn(&Series) -> (f64, f64)) -> (f64, f64) {
        self.series
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), series| {
                let (smin, smax) = range(series);
                (min.min(smin), max.max(smax))
            })
    }

    // plotters requires min < max, fails on constant channels otherwise
    fn pad((min, max): (f64, f64)) -> (f64, f64) {
        if !min.is_finite() || !max.is_finite() {
            (0.0, 1.0)
        } else if min == max {
            (min - 0.5, max + 0.5)
        } else {
            (min, max)
        }
    }
}
