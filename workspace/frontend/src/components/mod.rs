pub mod form_fields;
pub mod loading;
pub mod prediction_form;
pub mod results;

pub use prediction_form::PredictionForm;
