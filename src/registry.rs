//! The node/port type registry.
//!
//! [`FlumeConfig`] is the single source of truth for every node and port
//! type an editor knows about. It is assembled once at startup, grows
//! monotonically, and is then read by key from the rendering/execution
//! layer. A failed registration leaves the registry untouched.

use indexmap::IndexMap;

use crate::error::{ConfigError, ConfigResult};
use crate::node::{NodeTypeConfig, NodeTypeDescriptor, PortSpec};
use crate::port::{PortBuilders, PortReference, PortTypeConfig, PortTypeDescriptor};

/// Registry of declared node types and port types, keyed by type string.
///
/// Both maps preserve declaration order, which editor menus rely on.
#[derive(Debug, Clone, Default)]
pub struct FlumeConfig {
    node_types: IndexMap<String, NodeTypeDescriptor>,
    port_types: IndexMap<String, PortTypeDescriptor>,
}

impl FlumeConfig {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate, normalize, and store one node type.
    ///
    /// Inputs/outputs declared via `inputs_with`/`outputs_with` closures are
    /// resolved here against a snapshot of the currently declared port
    /// types. Returns the registry for chaining:
    ///
    /// ```
    /// # use flume_config::{ConfigError, FlumeConfig, NodeTypeConfig, PortTypeConfig};
    /// # fn main() -> Result<(), ConfigError> {
    /// let mut config = FlumeConfig::new();
    /// config
    ///     .add_port_type(PortTypeConfig::new("num", "Number"))?
    ///     .add_node_type(NodeTypeConfig::new("add"))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn add_node_type(&mut self, config: NodeTypeConfig) -> ConfigResult<&mut Self> {
        if self.node_types.contains_key(&config.node_type) {
            return Err(ConfigError::DuplicateNodeType(config.node_type));
        }

        let builders = PortBuilders::new(&self.port_types);
        let NodeTypeConfig {
            node_type,
            label,
            description,
            addable,
            deletable,
            initial_width,
            inputs,
            outputs,
        } = config;

        let inputs = resolve_ports(inputs, &builders)?;
        let outputs = resolve_ports(outputs, &builders)?;

        let descriptor = NodeTypeDescriptor {
            node_type: node_type.clone(),
            label: label.unwrap_or_default(),
            description: description.unwrap_or_default(),
            addable: addable.unwrap_or(true),
            deletable: deletable.unwrap_or(true),
            initial_width,
            inputs,
            outputs,
        };

        tracing::debug!(node_type = %node_type, "registered node type");
        self.node_types.insert(node_type, descriptor);
        Ok(self)
    }

    /// Validate, normalize, and store one port type.
    ///
    /// `accept_types` defaults to the port's own type when never set, so a
    /// port accepts only same-typed connections unless widened explicitly.
    pub fn add_port_type(&mut self, config: PortTypeConfig) -> ConfigResult<&mut Self> {
        if self.port_types.contains_key(&config.port_type) {
            return Err(ConfigError::DuplicatePortType(config.port_type));
        }

        let PortTypeConfig {
            port_type,
            name,
            label,
            color,
            accept_types,
            controls,
        } = config;

        let descriptor = PortTypeDescriptor {
            port_type: port_type.clone(),
            name,
            label: label.unwrap_or_default(),
            color: color.unwrap_or_default(),
            accept_types: accept_types.unwrap_or_else(|| vec![port_type.clone()]),
            controls,
        };

        tracing::debug!(port_type = %port_type, "registered port type");
        self.port_types.insert(port_type, descriptor);
        Ok(self)
    }

    /// All declared node types, in declaration order.
    pub fn node_types(&self) -> &IndexMap<String, NodeTypeDescriptor> {
        &self.node_types
    }

    /// All declared port types, in declaration order.
    pub fn port_types(&self) -> &IndexMap<String, PortTypeDescriptor> {
        &self.port_types
    }

    /// Look up one node type by its key.
    pub fn node_type(&self, node_type: &str) -> Option<&NodeTypeDescriptor> {
        self.node_types.get(node_type)
    }

    /// Look up one port type by its key.
    pub fn port_type(&self, port_type: &str) -> Option<&PortTypeDescriptor> {
        self.port_types.get(port_type)
    }
}

fn resolve_ports(
    spec: Option<PortSpec>,
    builders: &PortBuilders,
) -> ConfigResult<Vec<PortReference>> {
    match spec {
        Some(spec) => spec.resolve(builders),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_node_type_defaults() {
        let mut config = FlumeConfig::new();
        config.add_node_type(NodeTypeConfig::new("add")).unwrap();

        let node = config.node_type("add").unwrap();
        assert_eq!(node.node_type, "add");
        assert_eq!(node.label, "");
        assert_eq!(node.description, "");
        assert!(node.addable);
        assert!(node.deletable);
        assert_eq!(node.initial_width, None);
        assert!(node.inputs.is_empty());
        assert!(node.outputs.is_empty());
    }

    #[test]
    fn test_port_type_defaults() {
        let mut config = FlumeConfig::new();
        config
            .add_port_type(PortTypeConfig::new("num", "Number"))
            .unwrap();

        let port = config.port_type("num").unwrap();
        assert_eq!(port.port_type, "num");
        assert_eq!(port.name, "Number");
        assert_eq!(port.label, "");
        assert_eq!(port.color, Color::Grey);
        assert_eq!(port.accept_types, vec!["num".to_string()]);
        assert!(port.controls.is_empty());
    }

    #[test]
    fn test_duplicate_node_type_rejected() {
        let mut config = FlumeConfig::new();
        config
            .add_node_type(NodeTypeConfig::new("add").label("First"))
            .unwrap();

        let err = config
            .add_node_type(NodeTypeConfig::new("add").label("Second"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateNodeType(ref t) if t == "add"));

        // The first registration is untouched.
        assert_eq!(config.node_type("add").unwrap().label, "First");
        assert_eq!(config.node_types().len(), 1);
    }

    #[test]
    fn test_duplicate_port_type_rejected() {
        let mut config = FlumeConfig::new();
        config
            .add_port_type(PortTypeConfig::new("num", "Number"))
            .unwrap();

        let err = config
            .add_port_type(PortTypeConfig::new("num", "Numeric"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicatePortType(ref t) if t == "num"));
        assert_eq!(config.port_type("num").unwrap().name, "Number");
    }

    #[test]
    fn test_inputs_closure_sees_declared_ports() {
        let mut config = FlumeConfig::new();
        config
            .add_port_type(PortTypeConfig::new("num", "Number"))
            .unwrap();
        config
            .add_node_type(NodeTypeConfig::new("add").inputs_with(|ports| {
                Ok(vec![
                    ports.port("num")?.with_name("a"),
                    ports.port("num")?.with_name("b"),
                ])
            }))
            .unwrap();

        let node = config.node_type("add").unwrap();
        assert_eq!(node.inputs.len(), 2);
        assert_eq!(node.inputs[0].port_type, "num");
        assert_eq!(node.inputs[0].name, "a");
        assert_eq!(node.inputs[1].name, "b");
    }

    #[test]
    fn test_unresolved_port_fails_whole_registration() {
        let mut config = FlumeConfig::new();
        let err = config
            .add_node_type(
                NodeTypeConfig::new("add").inputs_with(|ports| Ok(vec![ports.port("num")?])),
            )
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownPortType(ref t) if t == "num"));
        assert!(config.node_type("add").is_none());
    }

    #[test]
    fn test_snapshot_excludes_later_port_types() {
        // A port type declared after the node does not exist in the node's
        // snapshot.
        let mut config = FlumeConfig::new();
        config
            .add_node_type(NodeTypeConfig::new("source").outputs_with(|ports| {
                assert!(!ports.contains("num"));
                Ok(Vec::new())
            }))
            .unwrap();
        config
            .add_port_type(PortTypeConfig::new("num", "Number"))
            .unwrap();
    }

    #[test]
    fn test_chaining_is_equivalent_to_separate_calls() {
        let mut chained = FlumeConfig::new();
        chained
            .add_port_type(PortTypeConfig::new("num", "Number"))
            .unwrap()
            .add_node_type(NodeTypeConfig::new("add"))
            .unwrap();

        let mut separate = FlumeConfig::new();
        separate
            .add_port_type(PortTypeConfig::new("num", "Number"))
            .unwrap();
        separate.add_node_type(NodeTypeConfig::new("add")).unwrap();

        assert_eq!(chained.port_types(), separate.port_types());
        assert_eq!(chained.node_types(), separate.node_types());
    }

    #[test]
    fn test_explicit_empty_accept_types_kept() {
        let mut config = FlumeConfig::new();
        config
            .add_port_type(
                PortTypeConfig::new("trigger", "Trigger").accept_types(Vec::<String>::new()),
            )
            .unwrap();
        assert!(config.port_type("trigger").unwrap().accept_types.is_empty());
    }

    // Property-based tests using proptest
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_distinct_keys_register_in_order(
            keys in prop::collection::hash_set("[a-z]{1,8}", 1..20)
        ) {
            let keys: Vec<String> = keys.into_iter().collect();
            let mut config = FlumeConfig::new();
            for key in &keys {
                config.add_port_type(PortTypeConfig::new(key, "Port")).unwrap();
            }

            let stored: Vec<&str> = config.port_types().keys().map(String::as_str).collect();
            let expected: Vec<&str> = keys.iter().map(String::as_str).collect();
            prop_assert_eq!(stored, expected);

            for key in &keys {
                prop_assert!(config.add_port_type(PortTypeConfig::new(key, "Port")).is_err());
            }
            prop_assert_eq!(config.port_types().len(), keys.len());
        }
    }
}
