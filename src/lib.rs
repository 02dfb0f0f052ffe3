//! # flume-config: node and port type registry for a visual node editor
//!
//! A host application declares *node types* (boxes with typed input/output
//! ports) and *port types* (typed connectors with associated UI controls).
//! Each declaration is validated and normalized into an immutable descriptor
//! held by the [`FlumeConfig`] registry, which the rendering/graph-execution
//! layer later reads by key. Assembly happens once at startup; the registry
//! only grows and is treated as read-only afterwards.
//!
//! ## Architecture
//!
//! - **[`FlumeConfig`]**: the registry — `add_node_type`/`add_port_type`
//!   validate, normalize, store, and return the registry for chaining
//! - **[`PortBuilders`]**: per-registration snapshot of declared port types,
//!   handed to `inputs_with`/`outputs_with` closures
//! - **[`Controls`]** / **[`ControlFactory`]**: build control descriptors by
//!   merging partial configs over kind defaults
//! - **[`Color`]**: named color tokens for port tinting
//!
//! ## Example
//!
//! ```
//! use flume_config::{
//!     Color, ConfigError, ControlConfig, Controls, FlumeConfig, NodeTypeConfig, PortTypeConfig,
//! };
//!
//! # fn main() -> Result<(), ConfigError> {
//! let mut config = FlumeConfig::new();
//! config
//!     .add_port_type(
//!         PortTypeConfig::new("number", "Number")
//!             .label("Number")
//!             .color(Color::Red)
//!             .control(Controls::number(ControlConfig::new().name("value"))?),
//!     )?
//!     .add_node_type(
//!         NodeTypeConfig::new("add")
//!             .label("Add")
//!             .description("Adds two numbers")
//!             .inputs_with(|ports| {
//!                 Ok(vec![
//!                     ports.port("number")?.with_name("a"),
//!                     ports.port("number")?.with_name("b"),
//!                 ])
//!             })
//!             .outputs_with(|ports| Ok(vec![ports.port("number")?.with_name("sum")])),
//!     )?;
//!
//! let add = config.node_type("add").unwrap();
//! assert_eq!(add.inputs.len(), 2);
//! assert_eq!(config.port_type("number").unwrap().accept_types, ["number"]);
//! # Ok(())
//! # }
//! ```

pub mod color;
pub mod control;
pub mod error;
pub mod node;
pub mod port;
pub mod registry;

// Re-export commonly used types
pub use color::Color;
pub use control::{
    ControlConfig, ControlDescriptor, ControlFactory, ControlType, ControlValidator, ControlValue,
    Controls,
};
pub use error::{ConfigError, ConfigResult};
pub use node::{NodeTypeConfig, NodeTypeDescriptor, PortListFn, PortSpec};
pub use port::{PortBuilders, PortReference, PortTypeConfig, PortTypeDescriptor};
pub use registry::FlumeConfig;
