use shared::mileage::monthly_totals;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::base::Base;
use crate::components::{SummaryCards, TripList};
use crate::hooks::{use_settings, use_summary, use_trips};
use crate::{styles, Route};

const RECENT_TRIPS: usize = 5;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let summary = use_summary();
    let trips = use_trips();
    let settings = use_settings();

    let rate = settings.data.unwrap_or_default().rate_per_mile;
    let trip_list = trips.data.clone().unwrap_or_default();

    // Fall back to totals computed from the trip list if the summary endpoint fails
    let months = match (&summary.data, &summary.error) {
        (Some(months), _) => months.clone(),
        (None, Some(_)) => monthly_totals(&trip_list, rate),
        (None, None) => Vec::new(),
    };

    html! {
        <Base>
            <div class={styles::CONTAINER_LG}>
                <div class="flex items-center justify-between">
                    <h1 class={styles::TEXT_H1}>{"Dashboard"}</h1>
                    <Link<Route> to={Route::NewTrip} classes={styles::BUTTON_PRIMARY}>{"Add trip"}</Link<Route>>
                </div>
                <p class={styles::TEXT_SMALL}>
                    {format!("Deductions estimated at ${:.3} per mile", rate)}
                </p>

                if summary.loading && trips.loading {
                    <p class={styles::TEXT_SMALL}>{"Loading..."}</p>
                } else {
                    <SummaryCards {months} />
                }

                <div class={classes!(styles::CARD, "mt-6")}>
                    <div class="flex items-center justify-between mb-4">
                        <h2 class={styles::CARD_TITLE}>{"Recent trips"}</h2>
                        <Link<Route> to={Route::Trips} classes={styles::LINK}>{"View all"}</Link<Route>>
                    </div>
                    if let Some(error) = trips.error.clone() {
                        <div class={styles::ALERT_ERROR}>{error}</div>
                    } else {
                        <TripList trips={trip_list} limit={Some(RECENT_TRIPS)} />
                    }
                </div>
            </div>
        </Base>
    }
}

