use yew::prelude::*;
use yew_router::prelude::*;

use crate::{styles, Route};

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub children: Html,
}

#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900">
            <nav class={styles::NAV}>
                <div class={styles::NAV_INNER}>
                    <div class={styles::NAV_CONTENT}>
                        <Link<Route> to={Route::Dashboard} classes={styles::NAV_BRAND}>{"Mileage Log"}</Link<Route>>
                        <div class={styles::NAV_ITEMS}>
                            <Link<Route> to={Route::Trips} classes={styles::NAV_LINK}>{"Trips"}</Link<Route>>
                            <Link<Route> to={Route::NewTrip} classes={styles::NAV_LINK}>{"Add trip"}</Link<Route>>
                            <Link<Route> to={Route::Settings} classes={styles::NAV_LINK}>{"Settings"}</Link<Route>>
                        </div>
                    </div>
                </div>
            </nav>
            <main class="pb-8">{props.children.clone()}</main>
        </div>
    }
}
