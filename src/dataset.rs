//! In-memory dataset model.
//!
//! This module defines the labeled-array abstraction the classifier inspects:
//! a [`DataArray`] couples a numeric payload with an optional name and a map
//! of metadata attributes, and a [`Dataset`] is a named collection of arrays
//! (the unit that scatter- and quiver-style plots operate on).

use ndarray::{Array, IxDyn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{EkmanError, Result};

/// Possible metadata attribute values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// String attribute
    Text(String),
    /// Numeric attribute (stored as f64 for simplicity)
    Number(f64),
    /// Array of numbers
    NumberArray(Vec<f64>),
}

impl AttributeValue {
    /// The attribute as text, if it is string-valued
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Number(value)
    }
}

/// A labeled numeric array.
///
/// The name is optional: anonymous arrays are classified from their
/// attributes alone. Only string-valued attributes take part in
/// classification; everything else rides along untouched.
#[derive(Debug, Clone)]
pub struct DataArray {
    /// Name of the variable, if any
    pub name: Option<String>,
    /// Variable attributes
    pub attributes: HashMap<String, AttributeValue>,
    /// The numeric payload
    pub data: Array<f32, IxDyn>,
}

impl DataArray {
    /// Create a named array with no attributes
    pub fn new(name: impl Into<String>, data: Array<f32, IxDyn>) -> Self {
        Self {
            name: Some(name.into()),
            attributes: HashMap::new(),
            data,
        }
    }

    /// Create an anonymous array with no attributes
    pub fn anonymous(data: Array<f32, IxDyn>) -> Self {
        Self {
            name: None,
            attributes: HashMap::new(),
            data,
        }
    }

    /// Attach an attribute, builder-style
    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// The variable name, if present
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// A named collection of data arrays sharing one logical source
/// (e.g. the variables of a model output file).
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Dataset-level attributes
    pub attributes: HashMap<String, AttributeValue>,
    /// Variables by name
    pub variables: HashMap<String, DataArray>,
}

impl Dataset {
    /// Create an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variable under the given name.
    ///
    /// The array's own name is set to match, so classification of a variable
    /// pulled back out of a dataset sees the name it is stored under.
    pub fn insert(&mut self, name: impl Into<String>, mut array: DataArray) {
        let name = name.into();
        array.name = Some(name.clone());
        self.variables.insert(name, array);
    }

    /// Insert a variable, builder-style
    pub fn with_variable(mut self, name: impl Into<String>, array: DataArray) -> Self {
        self.insert(name, array);
        self
    }

    /// Get a variable by name
    pub fn get_variable(&self, name: &str) -> Option<&DataArray> {
        self.variables.get(name)
    }

    /// Get a variable by name with error handling
    pub fn get_variable_checked(&self, name: &str) -> Result<&DataArray> {
        self.variables
            .get(name)
            .ok_or_else(|| EkmanError::DataNotFound {
                message: format!("Variable not found: {}", name),
            })
    }

    /// Check if a variable exists
    pub fn has_variable(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }
}
