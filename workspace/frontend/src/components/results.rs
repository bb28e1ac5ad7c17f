use crashlens::Panel;
use yew::prelude::*;

use super::loading::{Loading, LoadingSize};
use crate::chart::CHART_ELEMENT_ID;

#[derive(Properties, PartialEq)]
pub struct ResultPanelProps {
    pub panel: Panel,
}

/// Prediction text, probability chart and cluster analysis.
///
/// The chart `<div>` is always mounted; Plotly draws into it directly.
#[function_component(ResultPanel)]
pub fn result_panel(props: &ResultPanelProps) -> Html {
    let panel = &props.panel;

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Predicted Severity"}</h2>
                    <div id="result-text" class="text-2xl font-bold">
                        {if panel.state.is_busy() {
                            html! { <Loading size={LoadingSize::Small} text={Some(panel.result_text.clone())} /> }
                        } else {
                            html! { <>{&panel.result_text}</> }
                        }}
                    </div>
                    <div id={CHART_ELEMENT_ID} class="chart-container" style="height: 260px;"></div>
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Accident Profile"}</h2>
                    <div id="cluster-num" class="text-xl font-semibold">{&panel.cluster_text}</div>
                    <p id="cluster-description" class="text-sm text-gray-600">{&panel.description_text}</p>
                </div>
            </div>
        </div>
    }
}
