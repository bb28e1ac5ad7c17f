use yew::prelude::*;

mod components;
pub mod api_client;
pub mod chart;
pub mod settings;
pub mod timer;

use components::PredictionForm;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="min-h-screen bg-base-200">
            <div class="navbar bg-base-100 shadow-sm">
                <span class="text-xl font-bold px-4">{"CrashLens"}</span>
                <span class="text-sm text-gray-500">{"Accident severity prediction"}</span>
            </div>
            <main class="max-w-5xl mx-auto p-6">
                <PredictionForm />
            </main>
        </div>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== CrashLens Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
