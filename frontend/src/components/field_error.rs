use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct FieldErrorProps {
    #[prop_or_default]
    pub message: Option<String>,
}

#[function_component(FieldError)]
pub fn field_error(props: &FieldErrorProps) -> Html {
    match &props.message {
        Some(message) => html! { <p class={styles::TEXT_ERROR}>{message}</p> },
        None => html! {},
    }
}

pub fn input_class(has_error: bool) -> &'static str {
    if has_error {
        styles::INPUT_ERROR
    } else {
        styles::INPUT
    }
}
