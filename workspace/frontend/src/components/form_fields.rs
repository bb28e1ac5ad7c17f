use yew::prelude::*;

/// `(value, label)` pairs for a `<select>`
pub type Options = &'static [(&'static str, &'static str)];

pub const WEATHER_CONDITIONS: Options = &[
    ("CLEAR", "Clear"),
    ("RAIN", "Rain"),
    ("SNOW", "Snow"),
    ("CLOUDY/OVERCAST", "Cloudy / Overcast"),
    ("FOG/SMOKE/HAZE", "Fog / Smoke / Haze"),
    ("FREEZING RAIN/DRIZZLE", "Freezing Rain / Drizzle"),
    ("SLEET/HAIL", "Sleet / Hail"),
    ("UNKNOWN", "Unknown"),
];

pub const LIGHTING_CONDITIONS: Options = &[
    ("DAYLIGHT", "Daylight"),
    ("DARKNESS, LIGHTED ROAD", "Darkness, Lighted Road"),
    ("DARKNESS", "Darkness"),
    ("DUSK", "Dusk"),
    ("DAWN", "Dawn"),
    ("UNKNOWN", "Unknown"),
];

pub const CONTRIBUTORY_CAUSES: Options = &[
    ("FAILING TO YIELD RIGHT-OF-WAY", "Failing to Yield Right-of-Way"),
    ("FOLLOWING TOO CLOSELY", "Following Too Closely"),
    ("DISREGARDING TRAFFIC SIGNALS", "Disregarding Traffic Signals"),
    ("IMPROPER OVERTAKING/PASSING", "Improper Overtaking / Passing"),
    ("IMPROPER TURNING/NO SIGNAL", "Improper Turning / No Signal"),
    ("FAILING TO REDUCE SPEED TO AVOID CRASH", "Failing to Reduce Speed"),
    ("DRIVING SKILLS/KNOWLEDGE/EXPERIENCE", "Driving Skills / Experience"),
    ("UNABLE TO DETERMINE", "Unable to Determine"),
];

/// Day-of-week codes as the crash dataset numbers them
pub const DAYS_OF_WEEK: Options = &[
    ("1", "Sunday"),
    ("2", "Monday"),
    ("3", "Tuesday"),
    ("4", "Wednesday"),
    ("5", "Thursday"),
    ("6", "Friday"),
    ("7", "Saturday"),
];

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub name: &'static str,
    pub label: &'static str,
    pub options: Options,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    html! {
        <div class="form-control">
            <label class="label"><span class="label-text">{props.label}</span></label>
            <select id={props.name} name={props.name} class="select select-bordered w-full">
                { for props.options.iter().map(|(value, label)| html! {
                    <option value={*value}>{*label}</option>
                })}
            </select>
        </div>
    }
}
