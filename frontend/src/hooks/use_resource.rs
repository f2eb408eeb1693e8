use std::future::Future;

use log::{debug, error};
use shared::models::{Client, MonthlySummary, Settings, Trip};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{self, ApiError};

#[derive(Clone, PartialEq)]
pub struct Resource<T> {
    pub loading: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub reload: Callback<()>,
}

/// Numbers requests so only the most recently started one may land.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    latest: u32,
}

impl RequestGeneration {
    pub fn start(&mut self) -> u32 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    pub fn is_current(&self, request: u32) -> bool {
        self.latest == request
    }
}

/// Fetches on mount and again whenever `reload` is emitted.
#[hook]
pub fn use_resource<T, F, Fut>(fetch: F) -> Resource<T>
where
    T: Clone + PartialEq + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let data = use_state(|| None::<T>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let generation = use_state(|| 0u32);
    let requests = use_mut_ref(RequestGeneration::default);

    {
        let data = data.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with(*generation, move |_| {
            loading.set(true);

            let id = requests.borrow_mut().start();
            let request = fetch();
            spawn_local(async move {
                let result = request.await;
                if !requests.borrow().is_current(id) {
                    debug!("Dropping response from superseded request {}", id);
                    return;
                }
                match result {
                    Ok(value) => {
                        data.set(Some(value));
                        error.set(None);
                    }
                    Err(e) => {
                        error!("Failed to load resource: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });

            || ()
        });
    }

    let reload = {
        let generation = generation.clone();
        Callback::from(move |_| generation.set(*generation + 1))
    };

    Resource {
        loading: *loading,
        data: (*data).clone(),
        error: (*error).clone(),
        reload,
    }
}

#[hook]
pub fn use_trips() -> Resource<Vec<Trip>> {
    use_resource(api::fetch_trips)
}

#[hook]
pub fn use_clients() -> Resource<Vec<Client>> {
    use_resource(api::fetch_clients)
}

#[hook]
pub fn use_settings() -> Resource<Settings> {
    use_resource(api::fetch_settings)
}

#[hook]
pub fn use_summary() -> Resource<Vec<MonthlySummary>> {
    use_resource(api::fetch_summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_request_is_current() {
        let mut requests = RequestGeneration::default();
        let first = requests.start();
        assert!(requests.is_current(first));

        let second = requests.start();
        assert!(!requests.is_current(first));
        assert!(requests.is_current(second));
    }

    #[test]
    fn test_late_response_from_earlier_reload_is_stale() {
        let mut requests = RequestGeneration::default();
        let after_first_delete = requests.start();
        let after_second_delete = requests.start();

        // The second reload resolves first, then the first one straggles in
        assert!(requests.is_current(after_second_delete));
        assert!(!requests.is_current(after_first_delete));
    }
}
