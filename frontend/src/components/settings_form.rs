use shared::constants::SUBMIT_FAILED_ERROR;
use shared::form::FormState;
use shared::forms::{SettingsField, SettingsForm};
use shared::mileage::{estimated_deduction, format_currency};
use shared::models::Settings;
use shared::validation::validate_settings_form;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::field_error::{input_class, FieldError};
use super::Alert;
use crate::api;
use crate::hooks::{use_banner, use_form};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SettingsFormProps {
    pub settings: Settings,
    pub on_saved: Callback<Settings>,
}

#[function_component(SettingsFormView)]
pub fn settings_form_view(props: &SettingsFormProps) -> Html {
    let banner = use_banner();

    let form = {
        let on_saved = props.on_saved.clone();
        let initial = SettingsForm::from(&props.settings);
        use_form(
            move || FormState::new(initial).with_validator(validate_settings_form),
            move |data: SettingsForm| {
                let on_saved = on_saved.clone();
                async move {
                    let settings = Settings::try_from(&data).map_err(|e| e.to_string())?;
                    let saved = api::update_settings(&settings).await.map_err(|e| e.to_string())?;
                    on_saved.emit(saved);
                    Ok(())
                }
            },
        )
    };

    // Rebase when the loaded settings change so fetched values are not "edits"
    {
        let form = form.clone();
        use_effect_with(props.settings, move |settings| {
            form.set_initial_data(SettingsForm::from(settings));
            || ()
        });
    }

    let on_done = {
        let form = form.clone();
        let banner = banner.clone();
        Callback::from(move |ok: bool| {
            if ok {
                form.set_initial_data(form.data());
                banner.show_success.emit("Settings saved".to_string());
            } else if form.is_valid() {
                banner.show_error.emit(SUBMIT_FAILED_ERROR.to_string());
            } else {
                banner.clear.emit(());
            }
        })
    };

    let oninput = {
        let on_change = form.on_change(SettingsField::RatePerMile);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    let data = form.data();
    let error = form.get_field_error(SettingsField::RatePerMile);
    let example = data
        .rate_per_mile
        .trim()
        .parse::<f64>()
        .ok()
        .map(|rate| format!("100 miles → {}", format_currency(estimated_deduction(100.0, rate))));
    let submitting = form.is_submitting();

    html! {
        <form class={styles::FORM} onsubmit={form.on_submit(on_done)}>
            <Alert error={banner.error.clone()} success={banner.success.clone()} />

            <div>
                <label class={styles::TEXT_LABEL}>{"Reimbursement rate ($ per mile)"}</label>
                <input
                    type="number"
                    step="0.001"
                    min="0"
                    class={input_class(error.is_some())}
                    value={data.rate_per_mile.clone()}
                    {oninput}
                />
                <FieldError message={error} />
                if let Some(example) = example {
                    <p class={styles::TEXT_HINT}>{example}</p>
                }
            </div>

            <div class="flex justify-end">
                <button
                    type="submit"
                    class={styles::BUTTON_PRIMARY}
                    disabled={submitting || !form.is_dirty()}
                >
                    { if submitting { "Saving..." } else { "Save settings" } }
                </button>
            </div>
        </form>
    }
}
