//! Node types: declaration config and stored descriptor.
//!
//! A node type declares a kind of graph node: label, editing permissions,
//! and the input/output ports it exposes. Ports are given either as a ready
//! list of [`PortReference`]s or as a closure that receives the
//! [`PortBuilders`] snapshot — the two branches are modeled explicitly by
//! [`PortSpec`] and resolved before anything is stored.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;
use crate::port::{PortBuilders, PortReference};

/// Closure form of a port list, invoked with the port-builder snapshot.
pub type PortListFn = Box<dyn FnOnce(&PortBuilders) -> ConfigResult<Vec<PortReference>>>;

/// A node's port list: either given up front or built from declared port
/// types at registration time.
pub enum PortSpec {
    List(Vec<PortReference>),
    Build(PortListFn),
}

impl PortSpec {
    /// Resolve to a concrete port list. `List` passes through unchanged;
    /// `Build` runs the closure against the snapshot.
    pub fn resolve(self, builders: &PortBuilders) -> ConfigResult<Vec<PortReference>> {
        match self {
            PortSpec::List(ports) => Ok(ports),
            PortSpec::Build(build) => build(builders),
        }
    }
}

impl fmt::Debug for PortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortSpec::List(ports) => f.debug_tuple("List").field(ports).finish(),
            PortSpec::Build(_) => f.write_str("Build(..)"),
        }
    }
}

/// Declaration of a node type, passed to [`FlumeConfig::add_node_type`].
///
/// [`FlumeConfig::add_node_type`]: crate::registry::FlumeConfig::add_node_type
#[derive(Debug, Default)]
pub struct NodeTypeConfig {
    pub(crate) node_type: String,
    pub(crate) label: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) addable: Option<bool>,
    pub(crate) deletable: Option<bool>,
    pub(crate) initial_width: Option<f32>,
    pub(crate) inputs: Option<PortSpec>,
    pub(crate) outputs: Option<PortSpec>,
}

impl NodeTypeConfig {
    /// Start a declaration. `node_type` is the registry key.
    pub fn new(node_type: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            ..Self::default()
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether the user may add instances of this node from the editor menu.
    pub fn addable(mut self, addable: bool) -> Self {
        self.addable = Some(addable);
        self
    }

    /// Whether the user may delete instances of this node.
    pub fn deletable(mut self, deletable: bool) -> Self {
        self.deletable = Some(deletable);
        self
    }

    /// Initial on-screen width of the node, in pixels.
    pub fn initial_width(mut self, width: f32) -> Self {
        self.initial_width = Some(width);
        self
    }

    /// Declare inputs as a ready list of port references.
    pub fn inputs(mut self, ports: impl IntoIterator<Item = PortReference>) -> Self {
        self.inputs = Some(PortSpec::List(ports.into_iter().collect()));
        self
    }

    /// Declare inputs via a closure over the declared port types.
    pub fn inputs_with<F>(mut self, build: F) -> Self
    where
        F: FnOnce(&PortBuilders) -> ConfigResult<Vec<PortReference>> + 'static,
    {
        self.inputs = Some(PortSpec::Build(Box::new(build)));
        self
    }

    /// Declare outputs as a ready list of port references.
    pub fn outputs(mut self, ports: impl IntoIterator<Item = PortReference>) -> Self {
        self.outputs = Some(PortSpec::List(ports.into_iter().collect()));
        self
    }

    /// Declare outputs via a closure over the declared port types.
    pub fn outputs_with<F>(mut self, build: F) -> Self
    where
        F: FnOnce(&PortBuilders) -> ConfigResult<Vec<PortReference>> + 'static,
    {
        self.outputs = Some(PortSpec::Build(Box::new(build)));
        self
    }
}

/// A validated, normalized node type as stored in the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeTypeDescriptor {
    #[serde(rename = "type")]
    pub node_type: String,
    pub label: String,
    pub description: String,
    pub addable: bool,
    pub deletable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_width: Option<f32>,
    pub inputs: Vec<PortReference>,
    pub outputs: Vec<PortReference>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn test_port_spec_list_passes_through() {
        let builders = PortBuilders::new(&IndexMap::new());
        let ports = vec![PortReference {
            port_type: "num".to_string(),
            name: "a".to_string(),
            label: String::new(),
        }];
        let resolved = PortSpec::List(ports.clone()).resolve(&builders).unwrap();
        assert_eq!(resolved, ports);
    }

    #[test]
    fn test_port_spec_build_failure_propagates() {
        let builders = PortBuilders::new(&IndexMap::new());
        let spec = PortSpec::Build(Box::new(|builders| Ok(vec![builders.port("missing")?])));
        assert!(spec.resolve(&builders).is_err());
    }
}
