//! Form validation.
//!
//! Every form field that can block submission implements [`Validate`]. A form
//! collects its fields into a [`Validator`] when it is built and asks it
//! before submitting.

/// A field able to report (and display) its own validity.
pub trait Validate {
    /// Check the field, updating whatever error display it owns.
    fn validate(&self) -> bool;
}

impl<F> Validate for F
where
    F: Fn() -> bool,
{
    fn validate(&self) -> bool {
        self()
    }
}

/// Aggregates the validity of all fields of one form.
#[derive(Default)]
pub struct Validator {
    fields: Vec<Box<dyn Validate>>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field: impl Validate + 'static) -> Self {
        self.fields.push(Box::new(field));
        self
    }

    /// Run every field, without short-circuiting, so each one shows its error.
    pub fn validate(&self) -> bool {
        self.fields
            .iter()
            .fold(true, |all_valid, field| field.validate() && all_valid)
    }
}
