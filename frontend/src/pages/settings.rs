use shared::models::Settings as RateSettings;
use yew::prelude::*;

use crate::base::Base;
use crate::components::SettingsFormView;
use crate::hooks::use_settings;
use crate::styles;

#[function_component(Settings)]
pub fn settings() -> Html {
    let settings = use_settings();

    let on_saved = {
        let reload = settings.reload.clone();
        Callback::from(move |saved: RateSettings| {
            log::debug!("Saved rate {}", saved.rate_per_mile);
            reload.emit(());
        })
    };

    html! {
        <Base>
            <div class={styles::CONTAINER_SM}>
                <h1 class={styles::TEXT_H2}>{"Settings"}</h1>
                <p class={styles::TEXT_SMALL}>
                    {"The per-mile rate is used to estimate your tax deduction."}
                </p>
                <div class={classes!(styles::CARD, "mt-4")}>
                    if settings.loading && settings.data.is_none() {
                        <p class={styles::TEXT_SMALL}>{"Loading..."}</p>
                    } else {
                        if let Some(error) = settings.error.clone() {
                            <div class={styles::ALERT_ERROR}>
                                {format!("Could not load settings, showing the default rate: {}", error)}
                            </div>
                        }
                        <SettingsFormView
                            settings={settings.data.unwrap_or_default()}
                            {on_saved}
                        />
                    }
                </div>
            </div>
        </Base>
    }
}
