use shared::mileage::{format_miles, total_miles};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::api;
use crate::base::Base;
use crate::components::{Alert, TripList};
use crate::hooks::{use_banner, use_trips};
use crate::{styles, Route};

#[function_component(Trips)]
pub fn trips() -> Html {
    let trips = use_trips();
    let banner = use_banner();
    let deleting = use_state(|| None::<i64>);

    let on_delete = {
        let reload = trips.reload.clone();
        let banner = banner.clone();
        let deleting = deleting.clone();
        Callback::from(move |id: i64| {
            if deleting.is_some() {
                return;
            }
            deleting.set(Some(id));

            let reload = reload.clone();
            let banner = banner.clone();
            let deleting = deleting.clone();
            spawn_local(async move {
                match api::delete_trip(id).await {
                    Ok(()) => {
                        banner.show_success.emit("Trip deleted".to_string());
                        reload.emit(());
                    }
                    Err(e) => banner.show_error.emit(format!("Could not delete trip: {}", e)),
                }
                deleting.set(None);
            });
        })
    };

    let list = trips.data.clone().unwrap_or_default();

    html! {
        <Base>
            <div class={styles::CONTAINER_LG}>
                <div class="flex items-center justify-between mb-4">
                    <div>
                        <h1 class={styles::TEXT_H1}>{"Trips"}</h1>
                        <p class={styles::TEXT_SMALL}>
                            {format!("{} trips · {}", list.len(), format_miles(total_miles(&list)))}
                        </p>
                    </div>
                    <Link<Route> to={Route::NewTrip} classes={styles::BUTTON_PRIMARY}>{"Add trip"}</Link<Route>>
                </div>

                <Alert error={banner.error.clone()} success={banner.success.clone()} />

                <div class={classes!(styles::CARD, "mt-4", "overflow-x-auto")}>
                    if trips.loading && trips.data.is_none() {
                        <p class={styles::TEXT_SMALL}>{"Loading..."}</p>
                    } else if let Some(error) = trips.error.clone() {
                        <div class={styles::ALERT_ERROR}>{error}</div>
                    } else {
                        <TripList trips={list} on_delete={Some(on_delete)} deleting={*deleting} />
                    }
                </div>
            </div>
        </Base>
    }
}
