pub mod api;
pub mod base;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::{
    dashboard::Dashboard,
    new_trip::NewTrip,
    not_found::NotFound,
    settings::Settings,
    trips::Trips,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Dashboard,
    #[at("/trips")] Trips,
    #[at("/trips/new")] NewTrip,
    #[at("/settings")] Settings,
    #[not_found]
    #[at("/404")] NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Dashboard => html! { <Dashboard /> },
        Route::Trips => html! { <Trips /> },
        Route::NewTrip => html! { <NewTrip /> },
        Route::Settings => html! { <Settings /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
