use crashlens::{FormView, Orchestrator, Panel};
use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use super::form_fields::{
    SelectField, CONTRIBUTORY_CAUSES, DAYS_OF_WEEK, LIGHTING_CONDITIONS, WEATHER_CONDITIONS,
};
use super::results::ResultPanel;
use crate::api_client::prediction::HttpPredictionService;
use crate::chart::PlotlyChartSurface;
use crate::settings;
use crate::timer::BrowserTimer;

type FormOrchestrator = Orchestrator<HttpPredictionService, PlotlyChartSurface, BrowserTimer, PanelView>;

/// Publishes orchestrator panels into component state
struct PanelView {
    panel: UseStateHandle<Panel>,
}

impl FormView for PanelView {
    fn render(&mut self, panel: &Panel) {
        self.panel.set(panel.clone());
    }
}

/// Reads every text entry of the form, in document order. File inputs are skipped.
fn read_form_fields(form: &HtmlFormElement) -> Result<Vec<(String, String)>, JsValue> {
    let form_data = FormData::new_with_form(form)?;
    let entries = js_sys::try_iter(&form_data)?
        .ok_or_else(|| JsValue::from_str("FormData is not iterable"))?;

    let mut fields = Vec::new();
    for entry in entries {
        let entry: Array = entry?.unchecked_into();
        if let (Some(name), Some(value)) = (entry.get(0).as_string(), entry.get(1).as_string()) {
            fields.push((name, value));
        }
    }
    Ok(fields)
}

#[function_component(PredictionForm)]
pub fn prediction_form() -> Html {
    let form_ref = use_node_ref();
    let config = settings::get_settings().orchestrator_config();
    let panel = {
        let config = config.clone();
        use_state(move || Panel::idle(&config))
    };

    let orchestrator = {
        let panel = panel.clone();
        use_mut_ref(move || {
            log::trace!("Creating form orchestrator");
            FormOrchestrator::new(
                HttpPredictionService,
                PlotlyChartSurface::default(),
                BrowserTimer,
                PanelView { panel },
                config,
            )
        })
    };

    let on_submit = {
        let form_ref = form_ref.clone();
        let orchestrator = orchestrator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                log::error!("Prediction form is not mounted");
                return;
            };
            let fields = match read_form_fields(&form) {
                Ok(fields) => fields,
                Err(err) => {
                    log::error!("Failed to read form data: {:?}", err);
                    return;
                }
            };
            log::debug!("Submitting {} form fields", fields.len());

            let orchestrator = orchestrator.clone();
            spawn_local(async move {
                // A second submit while one is in flight is dropped
                let Ok(mut orchestrator) = orchestrator.try_borrow_mut() else {
                    log::warn!("Submission ignored: previous request still in flight");
                    return;
                };
                let outcome = orchestrator.handle_submit(fields).await;
                log::debug!("Submission finished: {:?}", outcome);
            });
        })
    };

    html! {
        <div class="space-y-6">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Accident Details"}</h2>
                    <form id="prediction-form" ref={form_ref} onsubmit={on_submit} class="space-y-4">
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                            <SelectField name="weather_condition" label="Weather" options={WEATHER_CONDITIONS} />
                            <SelectField name="lighting_condition" label="Lighting" options={LIGHTING_CONDITIONS} />
                            <SelectField name="prim_contributory_cause" label="Primary Cause" options={CONTRIBUTORY_CAUSES} />
                        </div>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            <div class="form-control">
                                <label class="label"><span class="label-text">{"Hour of Day (0-23)"}</span></label>
                                <input type="number" name="crash_hour" min="0" max="23" step="1" value="12" class="input input-bordered w-full" required={true} />
                            </div>
                            <SelectField name="crash_day_of_week" label="Day of Week" options={DAYS_OF_WEEK} />
                        </div>
                        <div class="flex justify-end">
                            <button
                                id="submit-button"
                                type="submit"
                                class="btn btn-primary"
                                disabled={!panel.submit_enabled}
                            >
                                {&panel.submit_label}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
            <ResultPanel panel={(*panel).clone()} />
        </div>
    }
}
