use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    pub error: String,
    pub success: String,
}

#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    html! {
        <>
            if !props.error.is_empty() {
                <div class={styles::ALERT_ERROR} role="alert">{&props.error}</div>
            }
            if !props.success.is_empty() {
                <div class={styles::ALERT_SUCCESS} role="status">{&props.success}</div>
            }
        </>
    }
}
