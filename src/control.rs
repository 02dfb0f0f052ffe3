//! Control descriptors and the control-type factory.
//!
//! A control is a UI input widget attached to a port, letting the user supply
//! a literal value while the port is unconnected. Each of the five built-in
//! kinds is produced by [`ControlFactory`], which merges a partial
//! [`ControlConfig`] over kind-specific defaults, running an optional
//! validator first. The built-ins are exposed through [`Controls`].

use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;

/// The five kinds of controls a port can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlType {
    Text,
    Select,
    Number,
    Checkbox,
    Multiselect,
}

impl ControlType {
    /// Get the type string for this control kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlType::Text => "text",
            ControlType::Select => "select",
            ControlType::Number => "number",
            ControlType::Checkbox => "checkbox",
            ControlType::Multiselect => "multiselect",
        }
    }

    /// Get all available control kinds.
    pub fn all() -> &'static [ControlType] {
        &[
            ControlType::Text,
            ControlType::Select,
            ControlType::Number,
            ControlType::Checkbox,
            ControlType::Multiselect,
        ]
    }

    /// The default value a control of this kind starts with.
    pub fn default_value(&self) -> ControlValue {
        match self {
            ControlType::Text | ControlType::Select => ControlValue::Text(String::new()),
            ControlType::Number => ControlValue::Number(0.0),
            ControlType::Checkbox => ControlValue::Bool(false),
            ControlType::Multiselect => ControlValue::List(Vec::new()),
        }
    }
}

impl std::fmt::Display for ControlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A literal value held by a control.
///
/// The shape varies by control kind: text and select carry a string, number
/// a float, checkbox a bool, multiselect a list of selected option values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ControlValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl ControlValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ControlValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            ControlValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ControlValue::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ControlValue::List(v) => Some(v),
            _ => None,
        }
    }
}

impl From<bool> for ControlValue {
    fn from(v: bool) -> Self {
        ControlValue::Bool(v)
    }
}

impl From<f64> for ControlValue {
    fn from(v: f64) -> Self {
        ControlValue::Number(v)
    }
}

impl From<&str> for ControlValue {
    fn from(v: &str) -> Self {
        ControlValue::Text(v.to_string())
    }
}

impl From<String> for ControlValue {
    fn from(v: String) -> Self {
        ControlValue::Text(v)
    }
}

impl From<Vec<String>> for ControlValue {
    fn from(v: Vec<String>) -> Self {
        ControlValue::List(v)
    }
}

/// A fully-built control, ready to be attached to a port type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlDescriptor {
    #[serde(rename = "type")]
    pub control_type: ControlType,
    pub label: String,
    pub name: String,
    pub default_value: ControlValue,
}

/// Partial control configuration supplied by the caller.
///
/// Unset fields fall back to the factory's defaults when the control is
/// built.
#[derive(Debug, Clone, Default)]
pub struct ControlConfig {
    pub label: Option<String>,
    pub name: Option<String>,
    pub default_value: Option<ControlValue>,
}

impl ControlConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<ControlValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

/// Validation hook invoked with the raw config before any merging happens.
pub type ControlValidator = fn(ControlType, &ControlConfig) -> ConfigResult<()>;

/// Factory for one control kind.
///
/// Holds the kind's default label/name/value and an optional validator. The
/// kind itself is fixed at construction and never user-overridable.
#[derive(Debug, Clone)]
pub struct ControlFactory {
    control_type: ControlType,
    label: String,
    name: String,
    default_value: ControlValue,
    validate: Option<ControlValidator>,
}

impl ControlFactory {
    /// Create a factory seeded with the kind's built-in defaults: the name
    /// equals the kind string, the label is empty, and the default value is
    /// [`ControlType::default_value`].
    pub fn new(control_type: ControlType) -> Self {
        Self {
            control_type,
            label: String::new(),
            name: control_type.as_str().to_string(),
            default_value: control_type.default_value(),
            validate: None,
        }
    }

    /// Replace the fallback label.
    pub fn default_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Replace the fallback name.
    pub fn default_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the fallback value.
    pub fn default_value(mut self, value: impl Into<ControlValue>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Attach a validator, invoked with the raw config on every build.
    pub fn validator(mut self, validate: ControlValidator) -> Self {
        self.validate = Some(validate);
        self
    }

    /// Build a descriptor by merging `config` over this factory's defaults.
    ///
    /// The validator, if any, runs first and sees the unmerged config.
    pub fn build(&self, config: ControlConfig) -> ConfigResult<ControlDescriptor> {
        if let Some(validate) = self.validate {
            validate(self.control_type, &config)?;
        }
        Ok(ControlDescriptor {
            control_type: self.control_type,
            label: config.label.unwrap_or_else(|| self.label.clone()),
            name: config.name.unwrap_or_else(|| self.name.clone()),
            default_value: config
                .default_value
                .unwrap_or_else(|| self.default_value.clone()),
        })
    }
}

/// The built-in control constructors, one per kind.
///
/// None of them attach a validator; the hook exists for downstream factories
/// with stricter kinds.
pub struct Controls;

impl Controls {
    pub fn text(config: ControlConfig) -> ConfigResult<ControlDescriptor> {
        ControlFactory::new(ControlType::Text).build(config)
    }

    pub fn select(config: ControlConfig) -> ConfigResult<ControlDescriptor> {
        ControlFactory::new(ControlType::Select).build(config)
    }

    pub fn number(config: ControlConfig) -> ConfigResult<ControlDescriptor> {
        ControlFactory::new(ControlType::Number).build(config)
    }

    pub fn checkbox(config: ControlConfig) -> ConfigResult<ControlDescriptor> {
        ControlFactory::new(ControlType::Checkbox).build(config)
    }

    pub fn multiselect(config: ControlConfig) -> ConfigResult<ControlDescriptor> {
        ControlFactory::new(ControlType::Multiselect).build(config)
    }
}
