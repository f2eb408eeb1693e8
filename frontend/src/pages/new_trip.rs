use shared::models::Trip;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::base::Base;
use crate::components::TripFormView;
use crate::hooks::{use_clients, use_settings};
use crate::{styles, Route};

#[function_component(NewTrip)]
pub fn new_trip() -> Html {
    let clients = use_clients();
    let settings = use_settings();
    let navigator = use_navigator();

    let on_saved = Callback::from(move |trip: Trip| {
        log::debug!("Trip {} saved, returning to the log", trip.id);
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Trips);
        }
    });

    html! {
        <Base>
            <div class={styles::CONTAINER_SM}>
                <h1 class={styles::TEXT_H2}>{"Add trip"}</h1>
                if let Some(error) = clients.error.clone() {
                    <p class={styles::TEXT_HINT}>{format!("Clients unavailable: {}", error)}</p>
                }
                <div class={classes!(styles::CARD, "mt-4")}>
                    <TripFormView
                        clients={clients.data.clone().unwrap_or_default()}
                        rate_per_mile={settings.data.unwrap_or_default().rate_per_mile}
                        {on_saved}
                    />
                </div>
            </div>
        </Base>
    }
}
