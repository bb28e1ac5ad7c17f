use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub size: LoadingSize,
    #[prop_or_default]
    pub text: Option<String>,
}

#[derive(Clone, PartialEq, Default)]
pub enum LoadingSize {
    #[default]
    Small,
    Medium,
}

impl LoadingSize {
    fn class(&self) -> &'static str {
        match self {
            LoadingSize::Small => "loading-sm",
            LoadingSize::Medium => "loading-md",
        }
    }
}

/// Inline spinner with optional caption, shown while a submission is in flight
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex items-center gap-3">
            <span class={classes!("loading", "loading-spinner", props.size.class())}></span>
            {if let Some(text) = &props.text {
                html! { <span class="text-sm text-gray-500">{text}</span> }
            } else {
                html! {}
            }}
        </div>
    }
}
