use shared::dates::{format_month_label, local_today};
use shared::mileage::{format_currency, format_miles};
use shared::models::MonthlySummary;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SummaryCardsProps {
    pub months: Vec<MonthlySummary>,
}

#[function_component(SummaryCards)]
pub fn summary_cards(props: &SummaryCardsProps) -> Html {
    let today = local_today();
    let current_month = today.format("%Y-%m").to_string();
    let year_prefix = today.format("%Y-").to_string();

    let this_month = props.months.iter().find(|m| m.month == current_month);
    let (year_miles, year_deduction) = props
        .months
        .iter()
        .filter(|m| m.month.starts_with(&year_prefix))
        .fold((0.0, 0.0), |(miles, deduction), m| {
            (miles + m.total_miles, deduction + m.estimated_deduction)
        });

    html! {
        <>
            <div class={styles::SECTION_GRID}>
                <div class={styles::CARD}>
                    <h3 class={styles::CARD_TITLE}>{"This month"}</h3>
                    <p class={styles::CARD_STAT}>
                        {format_miles(this_month.map_or(0.0, |m| m.total_miles))}
                    </p>
                    <p class={styles::CARD_TEXT}>
                        {format!("{} trips", this_month.map_or(0, |m| m.trip_count))}
                    </p>
                </div>
                <div class={styles::CARD}>
                    <h3 class={styles::CARD_TITLE}>{"Year to date"}</h3>
                    <p class={styles::CARD_STAT}>{format_miles(year_miles)}</p>
                </div>
                <div class={styles::CARD}>
                    <h3 class={styles::CARD_TITLE}>{"Estimated deduction"}</h3>
                    <p class={styles::CARD_STAT}>{format_currency(year_deduction)}</p>
                    <p class={styles::CARD_TEXT}>{"Year to date"}</p>
                </div>
            </div>

            if !props.months.is_empty() {
                <div class={styles::CARD}>
                    <h3 class={styles::CARD_TITLE}>{"By month"}</h3>
                    <table class={styles::TABLE}>
                        <thead>
                            <tr>
                                <th class={styles::TABLE_HEAD}>{"Month"}</th>
                                <th class={styles::TABLE_HEAD}>{"Trips"}</th>
                                <th class={styles::TABLE_HEAD}>{"Miles"}</th>
                                <th class={styles::TABLE_HEAD}>{"Deduction"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for props.months.iter().map(|m| html! {
                                <tr key={m.month.clone()}>
                                    <td class={styles::TABLE_CELL}>{format_month_label(&m.month)}</td>
                                    <td class={styles::TABLE_CELL}>{m.trip_count}</td>
                                    <td class={styles::TABLE_CELL}>{format_miles(m.total_miles)}</td>
                                    <td class={styles::TABLE_CELL}>{format_currency(m.estimated_deduction)}</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                </div>
            }
        </>
    }
}
