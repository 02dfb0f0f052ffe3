//! Test data builders for registry declarations

use flume_config::{Color, ControlConfig, Controls, PortTypeConfig};

/// A "number" port with a number control, the way an arithmetic editor
/// would declare it.
pub fn number_port() -> PortTypeConfig {
    PortTypeConfig::new("number", "Number")
        .label("Number")
        .color(Color::Red)
        .control(
            Controls::number(ControlConfig::new().name("number").label("Number"))
                .expect("built-in control"),
        )
}

/// A "string" port with a text control.
pub fn string_port() -> PortTypeConfig {
    PortTypeConfig::new("string", "String")
        .label("Text")
        .color(Color::Green)
        .control(
            Controls::text(ControlConfig::new().name("string").label("Text"))
                .expect("built-in control"),
        )
}

/// A "boolean" port with a checkbox control, accepting booleans and numbers.
pub fn boolean_port() -> PortTypeConfig {
    PortTypeConfig::new("boolean", "True/False")
        .label("True/False")
        .color(Color::Blue)
        .accept_types(["boolean", "number"])
        .control(
            Controls::checkbox(ControlConfig::new().name("boolean").label("True/False"))
                .expect("built-in control"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_register_side_by_side() {
        let mut config = flume_config::FlumeConfig::new();
        config
            .add_port_type(number_port())
            .unwrap()
            .add_port_type(string_port())
            .unwrap()
            .add_port_type(boolean_port())
            .unwrap();
        assert_eq!(config.port_types().len(), 3);
    }
}
