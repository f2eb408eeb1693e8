use yew::prelude::*;
use yew_router::prelude::Link;

use crate::base::Base;
use crate::{styles, Route};

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <Base>
            <div class={styles::CONTAINER_SM}>
                <h1 class={styles::TEXT_H2}>{"Page not found"}</h1>
                <Link<Route> to={Route::Dashboard} classes={styles::LINK}>{"Back to the dashboard"}</Link<Route>>
            </div>
        </Base>
    }
}
