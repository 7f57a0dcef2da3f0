//! Field validators
//!
//! Validators are registered per field name and run in registration order;
//! the first rejection wins.

use std::collections::HashMap;
use std::fmt;

use crate::error::ValidationError;
use crate::logic::url::{validate_url_scheme, validate_url_syntax};

pub const URL_FIELD: &str = "url";

pub type Validator = Box<dyn Fn(&str) -> Result<(), ValidationError>>;

#[derive(Default)]
pub struct ValidatorRegistry {
    fields: HashMap<String, Vec<Validator>>,
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Syntax and scheme validators for the url field
    pub fn for_urls(valid_schemes: Vec<String>) -> Self {
        let mut registry = Self::new();
        registry.register(URL_FIELD, validate_url_syntax);
        registry.register(URL_FIELD, move |url| validate_url_scheme(url, &valid_schemes));
        registry
    }

    pub fn register<F>(&mut self, field: &str, validator: F)
    where
        F: Fn(&str) -> Result<(), ValidationError> + 'static,
    {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(Box::new(validator));
    }

    pub fn count(&self, field: &str) -> usize {
        self.fields.get(field).map_or(0, Vec::len)
    }

    /// Run every validator of `field` against `value`
    pub fn validate(&self, field: &str, value: &str) -> Result<(), ValidationError> {
        if let Some(validators) = self.fields.get(field) {
            for validate in validators {
                validate(value)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<&str, usize> = self
            .fields
            .iter()
            .map(|(field, validators)| (field.as_str(), validators.len()))
            .collect();
        f.debug_struct("ValidatorRegistry")
            .field("fields", &counts)
            .finish()
    }
}
