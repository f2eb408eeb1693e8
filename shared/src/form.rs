//! Generic form state.
//!
//! [`FormState`] owns one form's working record, its per-field errors and
//! the submission flags. It knows nothing about the DOM; the frontend's
//! `use_form` hook wraps it and drives re-renders.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use futures::future::LocalBoxFuture;
use log::{debug, error};

/// A record a form can edit one field at a time.
pub trait FormModel: Clone + PartialEq + 'static {
    type Field: Copy + Eq + Hash + Debug + 'static;
    type Value;

    fn set_field(&mut self, field: Self::Field, value: Self::Value);
}

pub type FieldErrors<F> = HashMap<F, String>;

/// Validator output: `None` marks a field as valid.
pub type ValidationResult<F> = HashMap<F, Option<String>>;

pub type Validator<T> = Box<dyn Fn(&T) -> ValidationResult<<T as FormModel>::Field>>;

pub type SubmitFuture = LocalBoxFuture<'static, Result<(), String>>;

pub type SubmitHandler<T> = Box<dyn Fn(T) -> SubmitFuture>;

pub struct FormOptions<T> {
    pub reset_on_success: bool,
    pub transform: Option<Box<dyn Fn(&T) -> T>>,
}

impl<T> Default for FormOptions<T> {
    fn default() -> Self {
        Self {
            reset_on_success: false,
            transform: None,
        }
    }
}

impl<T> FormOptions<T> {
    pub fn reset_on_success(mut self, reset: bool) -> Self {
        self.reset_on_success = reset;
        self
    }

    pub fn transform(mut self, transform: impl Fn(&T) -> T + 'static) -> Self {
        self.transform = Some(Box::new(transform));
        self
    }
}

/// Result of the synchronous half of a submission.
pub enum SubmitStep {
    Invalid,
    /// Valid, but there was nothing to call.
    Complete,
    Pending(SubmitFuture),
}

/// Clears `is_submitting` when dropped, so an abandoned submission
/// cannot leave the form stuck.
struct SubmittingGuard<'a, T: FormModel> {
    form: &'a mut FormState<T>,
}

impl<T: FormModel> Drop for SubmittingGuard<'_, T> {
    fn drop(&mut self) {
        self.form.is_submitting = false;
    }
}

pub struct FormState<T: FormModel> {
    data: T,
    initial: T,
    errors: FieldErrors<T::Field>,
    is_submitting: bool,
    is_submitted: bool,
    options: FormOptions<T>,
    validator: Option<Validator<T>>,
    submit: Option<SubmitHandler<T>>,
}

impl<T: FormModel> FormState<T> {
    pub fn new(initial: T) -> Self {
        Self {
            data: initial.clone(),
            initial,
            errors: HashMap::new(),
            is_submitting: false,
            is_submitted: false,
            options: FormOptions::default(),
            validator: None,
            submit: None,
        }
    }

    pub fn with_options(mut self, options: FormOptions<T>) -> Self {
        self.options = options;
        self
    }

    pub fn with_validator(
        mut self,
        validator: impl Fn(&T) -> ValidationResult<T::Field> + 'static,
    ) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    pub fn with_submit<F, Fut>(mut self, submit: F) -> Self
    where
        F: Fn(T) -> Fut + 'static,
        Fut: std::future::Future<Output = Result<(), String>> + 'static,
    {
        self.set_submit_handler(submit);
        self
    }

    /// Swaps the submit callback, e.g. when the host re-renders with fresh
    /// closures.
    pub fn set_submit_handler<F, Fut>(&mut self, submit: F)
    where
        F: Fn(T) -> Fut + 'static,
        Fut: std::future::Future<Output = Result<(), String>> + 'static,
    {
        self.submit = Some(Box::new(move |data| -> SubmitFuture { Box::pin(submit(data)) }));
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn initial_data(&self) -> &T {
        &self.initial
    }

    pub fn errors(&self) -> &FieldErrors<T::Field> {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.is_submitted
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.data != self.initial
    }

    pub fn set_field(&mut self, field: T::Field, value: T::Value) {
        self.data.set_field(field, value);
        self.errors.remove(&field);
    }

    pub fn handle_field_change(&mut self, field: T::Field, value: T::Value) {
        self.set_field(field, value);
    }

    /// Applies a partial update in place.
    pub fn set_data(&mut self, patch: impl FnOnce(&mut T)) {
        patch(&mut self.data);
    }

    /// Replaces the record with the updater's output.
    pub fn update_data(&mut self, updater: impl FnOnce(&T) -> T) {
        self.data = updater(&self.data);
    }

    pub fn replace_data(&mut self, data: T) {
        self.data = data;
    }

    /// Rebases both the working record and the snapshot, so freshly loaded
    /// defaults do not count as edits.
    pub fn set_initial_data(&mut self, data: T) {
        self.initial = data.clone();
        self.data = data;
    }

    pub fn set_errors(&mut self, errors: FieldErrors<T::Field>) {
        self.errors = errors;
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    pub fn clear_field_error(&mut self, field: T::Field) {
        self.errors.remove(&field);
    }

    pub fn get_field_error(&self, field: T::Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn has_field_error(&self, field: T::Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn reset(&mut self) {
        self.data = self.initial.clone();
        self.errors.clear();
        self.is_submitting = false;
        self.is_submitted = false;
    }

    pub fn validate_form(&mut self) -> bool {
        let Some(validator) = &self.validator else {
            return true;
        };

        self.errors = validator(&self.data)
            .into_iter()
            .filter_map(|(field, message)| message.map(|message| (field, message)))
            .collect();

        if !self.errors.is_empty() {
            debug!("Form validation failed for fields: {:?}", self.errors.keys());
        }
        self.errors.is_empty()
    }

    /// Marks the form submitted, validates, and starts the submit callback.
    /// A `Pending` result must be awaited and handed to [`Self::finish_submit`].
    pub fn begin_submit(&mut self) -> SubmitStep {
        self.is_submitted = true;

        if !self.validate_form() {
            return SubmitStep::Invalid;
        }

        let Some(submit) = &self.submit else {
            return SubmitStep::Complete;
        };

        let payload = match &self.options.transform {
            Some(transform) => transform(&self.data),
            None => self.data.clone(),
        };

        self.is_submitting = true;
        SubmitStep::Pending(submit(payload))
    }

    pub fn finish_submit(&mut self, result: Result<(), String>) -> bool {
        self.is_submitting = false;

        match result {
            Ok(()) => {
                if self.options.reset_on_success {
                    self.reset();
                }
                true
            }
            Err(e) => {
                error!("Form submission failed: {}", e);
                false
            }
        }
    }

    pub async fn handle_submit(&mut self) -> bool {
        match self.begin_submit() {
            SubmitStep::Invalid => false,
            SubmitStep::Complete => true,
            SubmitStep::Pending(future) => {
                let guard = SubmittingGuard { form: self };
                let result = future.await;
                guard.form.finish_submit(result)
            }
        }
    }
}
