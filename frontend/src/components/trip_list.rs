use shared::dates::{format_trip_date_relative, get_time_ago};
use shared::mileage::format_miles;
use shared::models::Trip;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct TripListProps {
    pub trips: Vec<Trip>,
    #[prop_or_default]
    pub limit: Option<usize>,
    #[prop_or_default]
    pub on_delete: Option<Callback<i64>>,
    #[prop_or_default]
    pub deleting: Option<i64>,
}

#[function_component(TripList)]
pub fn trip_list(props: &TripListProps) -> Html {
    if props.trips.is_empty() {
        return html! {
            <p class={styles::TEXT_SMALL}>{"No trips recorded yet."}</p>
        };
    }

    // Newest first; ISO dates sort lexically
    let mut trips = props.trips.clone();
    trips.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    let shown = props.limit.unwrap_or(trips.len());

    html! {
        <table class={styles::TABLE}>
            <thead>
                <tr>
                    <th class={styles::TABLE_HEAD}>{"Date"}</th>
                    <th class={styles::TABLE_HEAD}>{"Client"}</th>
                    <th class={styles::TABLE_HEAD}>{"Purpose"}</th>
                    <th class={styles::TABLE_HEAD}>{"Route"}</th>
                    <th class={styles::TABLE_HEAD}>{"Miles"}</th>
                    if props.on_delete.is_some() {
                        <th class={styles::TABLE_HEAD}></th>
                    }
                </tr>
            </thead>
            <tbody>
                { for trips.iter().take(shown).map(|trip| trip_row(trip, props)) }
            </tbody>
        </table>
    }
}

fn trip_row(trip: &Trip, props: &TripListProps) -> Html {
    let added = trip
        .created_at
        .as_deref()
        .map(|created| format!("added {}", get_time_ago(created)));

    let route = match (trip.start_location.is_empty(), trip.end_location.is_empty()) {
        (false, false) => format!("{} → {}", trip.start_location, trip.end_location),
        (false, true) => trip.start_location.clone(),
        (true, false) => trip.end_location.clone(),
        (true, true) => String::new(),
    };

    let delete_button = props.on_delete.as_ref().map(|on_delete| {
        let on_delete = on_delete.clone();
        let id = trip.id;
        let busy = props.deleting == Some(id);
        html! {
            <td class={styles::TABLE_CELL}>
                <button
                    class={styles::BUTTON_DANGER_SMALL}
                    disabled={busy}
                    onclick={Callback::from(move |_: MouseEvent| on_delete.emit(id))}
                >
                    { if busy { "Deleting..." } else { "Delete" } }
                </button>
            </td>
        }
    });

    html! {
        <tr key={trip.id}>
            <td class={styles::TABLE_CELL}>
                <div>{format_trip_date_relative(&trip.date)}</div>
                if let Some(added) = added {
                    <div class={styles::TEXT_HINT}>{added}</div>
                }
            </td>
            <td class={styles::TABLE_CELL}>{trip.client_name.clone().unwrap_or_else(|| "—".to_string())}</td>
            <td class={styles::TABLE_CELL}>{&trip.purpose}</td>
            <td class={styles::TABLE_CELL}>{route}</td>
            <td class={styles::TABLE_CELL}>
                {format_miles(trip.miles)}
                if trip.round_trip {
                    <span class={styles::TEXT_HINT}>{" (round trip)"}</span>
                }
            </td>
            { for delete_button }
        </tr>
    }
}
