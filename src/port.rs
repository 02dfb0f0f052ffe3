//! Port types and the port-builder snapshot.
//!
//! A port type declares a kind of connector: which other port types it
//! accepts, its color, and the controls shown while it is unconnected.
//! Node declarations embed lightweight [`PortReference`] values rather than
//! whole port types; [`PortBuilders`] hands those out inside
//! `inputs_with`/`outputs_with` closures.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::control::ControlDescriptor;
use crate::error::{ConfigError, ConfigResult};

/// A reference to a declared port type, embedded in a node's inputs/outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortReference {
    #[serde(rename = "type")]
    pub port_type: String,
    pub name: String,
    pub label: String,
}

impl PortReference {
    /// Override the name this port carries within its node.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Override the label shown next to this port.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// Declaration of a port type, passed to [`FlumeConfig::add_port_type`].
///
/// [`FlumeConfig::add_port_type`]: crate::registry::FlumeConfig::add_port_type
#[derive(Debug, Clone)]
pub struct PortTypeConfig {
    pub(crate) port_type: String,
    pub(crate) name: String,
    pub(crate) label: Option<String>,
    pub(crate) color: Option<Color>,
    pub(crate) accept_types: Option<Vec<String>>,
    pub(crate) controls: Vec<ControlDescriptor>,
}

impl PortTypeConfig {
    /// Start a declaration. `port_type` is the registry key; `name` is the
    /// default name port references inherit.
    pub fn new(port_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            port_type: port_type.into(),
            name: name.into(),
            label: None,
            color: None,
            accept_types: None,
            controls: Vec::new(),
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the full list of port types this port accepts connections from.
    ///
    /// Never calling this defaults to accepting only same-typed ports. An
    /// explicitly empty list means the port accepts nothing.
    pub fn accept_types(
        mut self,
        accept_types: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.accept_types = Some(accept_types.into_iter().map(Into::into).collect());
        self
    }

    /// Append one accepted port type.
    pub fn accept_type(mut self, port_type: impl Into<String>) -> Self {
        self.accept_types
            .get_or_insert_with(Vec::new)
            .push(port_type.into());
        self
    }

    /// Set the full list of controls shown while the port is unconnected.
    pub fn controls(mut self, controls: impl IntoIterator<Item = ControlDescriptor>) -> Self {
        self.controls = controls.into_iter().collect();
        self
    }

    /// Append one control.
    pub fn control(mut self, control: ControlDescriptor) -> Self {
        self.controls.push(control);
        self
    }
}

/// A validated, normalized port type as stored in the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortTypeDescriptor {
    #[serde(rename = "type")]
    pub port_type: String,
    pub name: String,
    pub label: String,
    pub color: Color,
    pub accept_types: Vec<String>,
    pub controls: Vec<ControlDescriptor>,
}

/// Snapshot of the declared port types, handed to node port closures.
///
/// Built from the registry's port types at the moment `add_node_type` runs,
/// so a node declared before a port type cannot reference that port type.
#[derive(Debug, Clone)]
pub struct PortBuilders {
    references: IndexMap<String, PortReference>,
}

impl PortBuilders {
    /// Snapshot the given port types.
    pub fn new(port_types: &IndexMap<String, PortTypeDescriptor>) -> Self {
        let references = port_types
            .values()
            .map(|port| {
                (
                    port.port_type.clone(),
                    PortReference {
                        port_type: port.port_type.clone(),
                        name: port.name.clone(),
                        label: port.label.clone(),
                    },
                )
            })
            .collect();
        Self { references }
    }

    /// Build a reference to the named port type, pre-filled with its
    /// registered name and label. Fails if the type was never declared.
    pub fn port(&self, port_type: &str) -> ConfigResult<PortReference> {
        self.references
            .get(port_type)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownPortType(port_type.to_string()))
    }

    /// Whether the named port type was declared at snapshot time.
    pub fn contains(&self, port_type: &str) -> bool {
        self.references.contains_key(port_type)
    }

    /// Iterate the declared port type keys, in declaration order.
    pub fn port_types(&self) -> impl Iterator<Item = &str> {
        self.references.keys().map(String::as_str)
    }
}
