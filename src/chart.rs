//! Probability bar chart: the data handed to the drawing surface, and the
//! surface seam itself.

use crate::error::ChartError;
use common::SeverityProbability;

/// Bar colours, reused in order when there are more bars than colours
pub const BAR_COLORS: [&str; 5] = [
    "rgba(255, 99, 132, 0.7)",
    "rgba(255, 159, 64, 0.7)",
    "rgba(255, 205, 86, 0.7)",
    "rgba(75, 192, 192, 0.7)",
    "rgba(54, 162, 235, 0.7)",
];

pub const DATASET_LABEL: &str = "Model Confidence (%)";
pub const AXIS_TITLE: &str = "Probability (%)";

/// A horizontal bar chart over the model's class probabilities
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartSpec {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<String>,
    pub dataset_label: String,
    pub axis_title: String,
    pub axis_min: f64,
    pub axis_max: f64,
    pub show_legend: bool,
    pub value_suffix: &'static str,
}

impl BarChartSpec {
    /// Splits the probabilities into parallel label/value sequences, keeping their order
    pub fn from_probabilities(probabilities: &[SeverityProbability]) -> Self {
        let labels = probabilities.iter().map(|p| p.class.clone()).collect();
        let values = probabilities.iter().map(|p| p.probability).collect();
        let colors = BAR_COLORS
            .iter()
            .cycle()
            .take(probabilities.len())
            .map(|color| color.to_string())
            .collect();

        Self {
            labels,
            values,
            colors,
            dataset_label: DATASET_LABEL.to_string(),
            axis_title: AXIS_TITLE.to_string(),
            axis_min: 0.0,
            axis_max: 100.0,
            show_legend: false,
            value_suffix: "%",
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Tooltip text for bar `index`, e.g. `" Model Confidence (%): 62.5%"`
    pub fn tooltip_label(&self, index: usize) -> Option<String> {
        self.values
            .get(index)
            .map(|value| format!(" {}: {}{}", self.dataset_label, value, self.value_suffix))
    }

    pub fn tooltip_labels(&self) -> Vec<String> {
        (0..self.len()).filter_map(|index| self.tooltip_label(index)).collect()
    }
}

/// Something that can draw a [`BarChartSpec`] and later tear it down.
///
/// The caller owns the returned handle and must pass it back to
/// [`ChartSurface::destroy`] before creating another chart.
pub trait ChartSurface {
    type Handle;

    fn create(&mut self, spec: &BarChartSpec) -> Result<Self::Handle, ChartError>;

    fn destroy(&mut self, handle: Self::Handle);
}
