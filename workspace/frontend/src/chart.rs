//! Plotly.js rendering of the probability chart.

use crashlens::{BarChartSpec, ChartError, ChartSurface};
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, catch)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = Plotly, catch)]
    fn purge(div_id: &str) -> Result<(), JsValue>;
}

/// Id of the `<div>` the probability chart is drawn into
pub const CHART_ELEMENT_ID: &str = "probability-chart";

/// Data, layout and config objects for `Plotly.newPlot`
#[derive(Debug, Clone, PartialEq)]
pub struct PlotlyFigure {
    pub data: Value,
    pub layout: Value,
    pub config: Value,
}

/// Horizontal bars, first class on top, fixed 0-100 axis, no legend.
pub fn plotly_figure(spec: &BarChartSpec) -> PlotlyFigure {
    let trace = json!([{
        "type": "bar",
        "orientation": "h",
        "name": spec.dataset_label,
        "x": spec.values,
        "y": spec.labels,
        "text": spec.tooltip_labels(),
        "textposition": "none",
        "hoverinfo": "text",
        "marker": {
            "color": spec.colors,
            "line": {"color": "rgba(255, 255, 255, 0)", "width": 1}
        }
    }]);

    let layout = json!({
        "showlegend": spec.show_legend,
        "margin": {"t": 10, "r": 10, "l": 160, "b": 40},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "xaxis": {
            "range": [spec.axis_min, spec.axis_max],
            "title": {"text": spec.axis_title}
        },
        "yaxis": {
            "autorange": "reversed",
            "tickfont": {"size": 10}
        }
    });

    let config = json!({"responsive": true, "displayModeBar": false});

    PlotlyFigure { data: trace, layout, config }
}

/// A chart currently drawn by Plotly
#[derive(Debug)]
pub struct PlotlyChart {
    div_id: String,
}

/// Draws into a fixed, already-mounted `<div>`
#[derive(Debug, Clone)]
pub struct PlotlyChartSurface {
    div_id: String,
}

impl PlotlyChartSurface {
    pub fn new(div_id: impl Into<String>) -> Self {
        Self { div_id: div_id.into() }
    }
}

impl Default for PlotlyChartSurface {
    fn default() -> Self {
        Self::new(CHART_ELEMENT_ID)
    }
}

fn to_js(value: &Value) -> Result<JsValue, ChartError> {
    js_sys::JSON::parse(&value.to_string())
        .map_err(|e| ChartError::Render(format!("invalid chart JSON: {:?}", e)))
}

impl ChartSurface for PlotlyChartSurface {
    type Handle = PlotlyChart;

    fn create(&mut self, spec: &BarChartSpec) -> Result<PlotlyChart, ChartError> {
        let present = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&self.div_id))
            .is_some();
        if !present {
            return Err(ChartError::Render(format!("chart container #{} not found", self.div_id)));
        }

        let figure = plotly_figure(spec);
        newPlot(
            &self.div_id,
            to_js(&figure.data)?,
            to_js(&figure.layout)?,
            to_js(&figure.config)?,
        )
        .map_err(|e| ChartError::Render(format!("Plotly.newPlot failed: {:?}", e)))?;

        log::debug!("Drew probability chart with {} bars", spec.len());
        Ok(PlotlyChart {
            div_id: self.div_id.clone(),
        })
    }

    fn destroy(&mut self, handle: PlotlyChart) {
        if let Err(e) = purge(&handle.div_id) {
            log::warn!("Plotly.purge failed for #{}: {:?}", handle.div_id, e);
        }
    }
}
