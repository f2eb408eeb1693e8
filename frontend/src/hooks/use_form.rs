use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use shared::form::{FieldErrors, FormModel, FormState, SubmitStep};
use wasm_bindgen_futures::spawn_local;
use web_sys::SubmitEvent;
use yew::prelude::*;

/// Component-side view of a [`FormState`]. Every mutation re-renders the
/// owning component.
pub struct UseFormHandle<T: FormModel> {
    state: Rc<RefCell<FormState<T>>>,
    update: UseForceUpdateHandle,
}

impl<T: FormModel> Clone for UseFormHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            update: self.update.clone(),
        }
    }
}

impl<T: FormModel> UseFormHandle<T> {
    fn mutate<R>(&self, f: impl FnOnce(&mut FormState<T>) -> R) -> R {
        let result = f(&mut self.state.borrow_mut());
        self.update.force_update();
        result
    }

    pub fn data(&self) -> T {
        self.state.borrow().data().clone()
    }

    pub fn errors(&self) -> FieldErrors<T::Field> {
        self.state.borrow().errors().clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.borrow().is_submitting()
    }

    pub fn is_submitted(&self) -> bool {
        self.state.borrow().is_submitted()
    }

    pub fn is_valid(&self) -> bool {
        self.state.borrow().is_valid()
    }

    pub fn is_dirty(&self) -> bool {
        self.state.borrow().is_dirty()
    }

    pub fn get_field_error(&self, field: T::Field) -> Option<String> {
        self.state.borrow().get_field_error(field).map(str::to_string)
    }

    pub fn has_field_error(&self, field: T::Field) -> bool {
        self.state.borrow().has_field_error(field)
    }

    pub fn set_field(&self, field: T::Field, value: T::Value) {
        self.mutate(|state| state.set_field(field, value));
    }

    pub fn handle_field_change(&self, field: T::Field, value: T::Value) {
        self.mutate(|state| state.handle_field_change(field, value));
    }

    pub fn set_data(&self, patch: impl FnOnce(&mut T)) {
        self.mutate(|state| state.set_data(patch));
    }

    pub fn update_data(&self, updater: impl FnOnce(&T) -> T) {
        self.mutate(|state| state.update_data(updater));
    }

    pub fn set_initial_data(&self, data: T) {
        self.mutate(|state| state.set_initial_data(data));
    }

    pub fn set_errors(&self, errors: FieldErrors<T::Field>) {
        self.mutate(|state| state.set_errors(errors));
    }

    pub fn clear_errors(&self) {
        self.mutate(FormState::clear_errors);
    }

    pub fn clear_field_error(&self, field: T::Field) {
        self.mutate(|state| state.clear_field_error(field));
    }

    pub fn reset(&self) {
        self.mutate(FormState::reset);
    }

    pub fn validate_form(&self) -> bool {
        self.mutate(FormState::validate_form)
    }

    /// Runs a submission; `on_done` receives the outcome once the submit
    /// future settles (immediately when validation fails).
    pub fn handle_submit(&self, event: Option<SubmitEvent>, on_done: Callback<bool>) {
        if let Some(event) = event {
            event.prevent_default();
        }

        if self.is_submitting() {
            log::debug!("Ignoring submit while a submission is in flight");
            return;
        }

        match self.mutate(FormState::begin_submit) {
            SubmitStep::Invalid => on_done.emit(false),
            SubmitStep::Complete => on_done.emit(true),
            SubmitStep::Pending(future) => {
                let handle = self.clone();
                spawn_local(async move {
                    let result = future.await;
                    let ok = handle.mutate(|state| state.finish_submit(result));
                    on_done.emit(ok);
                });
            }
        }
    }

    pub fn on_submit(&self, on_done: Callback<bool>) -> Callback<SubmitEvent> {
        let handle = self.clone();
        Callback::from(move |event: SubmitEvent| handle.handle_submit(Some(event), on_done.clone()))
    }

    pub fn on_change(&self, field: T::Field) -> Callback<T::Value>
    where
        T::Value: 'static,
    {
        let handle = self.clone();
        Callback::from(move |value: T::Value| handle.handle_field_change(field, value))
    }
}

/// Keeps one [`FormState`] alive for the component's lifetime. `init` runs
/// on the first render only; `submit` is refreshed every render so it
/// always sees current props.
#[hook]
pub fn use_form<T, I, F, Fut>(init: I, submit: F) -> UseFormHandle<T>
where
    T: FormModel,
    I: FnOnce() -> FormState<T>,
    F: Fn(T) -> Fut + 'static,
    Fut: Future<Output = Result<(), String>> + 'static,
{
    let state = use_mut_ref(init);
    let update = use_force_update();

    state.borrow_mut().set_submit_handler(submit);

    UseFormHandle { state, update }
}
