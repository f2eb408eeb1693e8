use gloo_timers::callback::Timeout;
use yew::prelude::*;

// Success banners dismiss themselves; errors stay until replaced
const SUCCESS_DISMISS_MS: u32 = 4000;

/// Page-level error/success messages shown above a form.
#[derive(Clone)]
pub struct BannerState {
    pub error: String,
    pub success: String,
    pub show_success: Callback<String>,
    pub show_error: Callback<String>,
    pub clear: Callback<()>,
}

#[hook]
pub fn use_banner() -> BannerState {
    let error = use_state(String::new);
    let success = use_state(String::new);
    // Bumped on every change so a stale timeout cannot clear a newer message
    let generation = use_mut_ref(|| 0u32);

    let show_success = {
        let success = success.clone();
        let error = error.clone();
        let generation = generation.clone();
        Callback::from(move |msg: String| {
            success.set(msg);
            error.set(String::new());

            *generation.borrow_mut() += 1;
            let shown = *generation.borrow();
            let success = success.clone();
            let generation = generation.clone();
            Timeout::new(SUCCESS_DISMISS_MS, move || {
                if *generation.borrow() == shown {
                    success.set(String::new());
                }
            })
            .forget();
        })
    };

    let show_error = {
        let error = error.clone();
        let success = success.clone();
        let generation = generation.clone();
        Callback::from(move |msg: String| {
            *generation.borrow_mut() += 1;
            error.set(msg);
            success.set(String::new());
        })
    };

    let clear = {
        let error = error.clone();
        let success = success.clone();
        Callback::from(move |_| {
            *generation.borrow_mut() += 1;
            error.set(String::new());
            success.set(String::new());
        })
    };

    BannerState {
        error: (*error).clone(),
        success: (*success).clone(),
        show_success,
        show_error,
        clear,
    }
}
