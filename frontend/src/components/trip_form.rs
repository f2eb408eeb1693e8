use shared::constants::SUBMIT_FAILED_ERROR;
use shared::form::{FormOptions, FormState};
use shared::forms::{FieldValue, TripField, TripForm};
use shared::mileage::{estimated_deduction, format_currency, format_miles};
use shared::models::{Client, NewTrip, Trip};
use shared::validation::validate_trip_form;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::field_error::{input_class, FieldError};
use super::Alert;
use crate::api;
use crate::hooks::{use_banner, use_form, UseFormHandle};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct TripFormProps {
    pub clients: Vec<Client>,
    pub rate_per_mile: f64,
    pub on_saved: Callback<Trip>,
}

fn text_input(
    form: &UseFormHandle<TripForm>,
    field: TripField,
    label: &'static str,
    input_type: &'static str,
    value: String,
    placeholder: &'static str,
) -> Html {
    let on_change = form.on_change(field);
    let oninput = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_change.emit(FieldValue::Text(input.value()));
    });
    let error = form.get_field_error(field);

    html! {
        <div>
            <label class={styles::TEXT_LABEL}>{label}</label>
            <input
                type={input_type}
                class={input_class(error.is_some())}
                {value}
                {placeholder}
                {oninput}
                step={(input_type == "number").then_some("0.1")}
            />
            <FieldError message={error} />
        </div>
    }
}

#[function_component(TripFormView)]
pub fn trip_form_view(props: &TripFormProps) -> Html {
    let banner = use_banner();

    let form = {
        let on_saved = props.on_saved.clone();
        use_form(
            || {
                FormState::new(TripForm::for_today())
                    .with_validator(validate_trip_form)
                    .with_options(
                        FormOptions::default()
                            .reset_on_success(true)
                            .transform(TripForm::normalized),
                    )
            },
            move |data: TripForm| {
                let on_saved = on_saved.clone();
                async move {
                    let new_trip = NewTrip::try_from(&data).map_err(|e| e.to_string())?;
                    let trip = api::create_trip(&new_trip).await.map_err(|e| e.to_string())?;
                    on_saved.emit(trip);
                    Ok(())
                }
            },
        )
    };

    let on_done = {
        let form = form.clone();
        let banner = banner.clone();
        Callback::from(move |ok: bool| {
            if ok {
                banner.show_success.emit("Trip saved".to_string());
            } else if form.is_valid() {
                // Validation passed, so the request itself failed
                banner.show_error.emit(SUBMIT_FAILED_ERROR.to_string());
            } else {
                banner.clear.emit(());
            }
        })
    };

    let data = form.data();

    let on_client_change = {
        let on_change = form.on_change(TripField::ClientId);
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(FieldValue::Text(select.value()));
        })
    };

    let on_round_trip_change = {
        let on_change = form.on_change(TripField::RoundTrip);
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(FieldValue::Flag(input.checked()));
        })
    };

    let on_notes_input = {
        let on_change = form.on_change(TripField::Notes);
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(FieldValue::Text(area.value()));
        })
    };

    let on_reset = {
        let form = form.clone();
        let banner = banner.clone();
        Callback::from(move |_: MouseEvent| {
            form.reset();
            banner.clear.emit(());
        })
    };

    let preview = data.effective_miles().filter(|miles| *miles > 0.0).map(|miles| {
        html! {
            <p class={styles::TEXT_HINT}>
                {format!(
                    "{} · estimated deduction {}",
                    format_miles(miles),
                    format_currency(estimated_deduction(miles, props.rate_per_mile))
                )}
            </p>
        }
    });

    let submitting = form.is_submitting();

    html! {
        <form class={styles::FORM} onsubmit={form.on_submit(on_done)}>
            <Alert error={banner.error.clone()} success={banner.success.clone()} />

            { text_input(&form, TripField::Date, "Date", "date", data.date.clone(), "") }

            <div>
                <label class={styles::TEXT_LABEL}>{"Client"}</label>
                <select class={styles::INPUT} onchange={on_client_change}>
                    <option value="" selected={data.client_id.is_empty()}>{"No client"}</option>
                    { for props.clients.iter().map(|client| {
                        let id = client.id.to_string();
                        html! {
                            <option value={id.clone()} selected={data.client_id == id}>
                                {&client.name}
                            </option>
                        }
                    })}
                </select>
            </div>

            { text_input(&form, TripField::Purpose, "Purpose", "text", data.purpose.clone(), "Client meeting") }
            { text_input(&form, TripField::StartLocation, "From", "text", data.start_location.clone(), "Office") }
            { text_input(&form, TripField::EndLocation, "To", "text", data.end_location.clone(), "Job site") }
            { text_input(&form, TripField::Miles, "Miles (one way)", "number", data.miles.clone(), "0.0") }

            <label class="flex items-center space-x-2">
                <input
                    type="checkbox"
                    class={styles::CHECKBOX}
                    checked={data.round_trip}
                    onchange={on_round_trip_change}
                />
                <span class={styles::TEXT_BODY}>{"Round trip"}</span>
            </label>
            { for preview }

            <div>
                <label class={styles::TEXT_LABEL}>{"Notes"}</label>
                <textarea
                    class={input_class(form.has_field_error(TripField::Notes))}
                    rows="3"
                    value={data.notes.clone()}
                    oninput={on_notes_input}
                />
                <FieldError message={form.get_field_error(TripField::Notes)} />
            </div>

            <div class="flex items-center justify-end space-x-3">
                <button
                    type="button"
                    class={styles::BUTTON_SECONDARY}
                    onclick={on_reset}
                    disabled={submitting || !form.is_dirty()}
                >
                    {"Clear"}
                </button>
                <button type="submit" class={styles::BUTTON_PRIMARY} disabled={submitting}>
                    { if submitting { "Saving..." } else { "Save trip" } }
                </button>
            </div>
        </form>
    }
}
