//! Interface text generation
//!
//! Renders each receiver type as a Go interface block:
//!
//! ```text
//! // BoxInterface is an interface for the Box struct
//! type BoxInterface interface {
//!     Get() string
//! }
//!
//! ```

use crate::config::default_indent;
use crate::core::{InterfaceSet, Method};

pub struct InterfaceGenerator {
    indent: String,
}

impl Default for InterfaceGenerator {
    fn default() -> Self {
        Self::new(default_indent())
    }
}

impl InterfaceGenerator {
    pub fn new(indent: impl Into<String>) -> Self {
        Self {
            indent: indent.into(),
        }
    }

    /// One block per receiver type, in key order, each followed by a blank line
    pub fn generate(&self, set: &InterfaceSet) -> String {
        set.iter()
            .map(|(_, receiver)| self.render_block(&receiver.name, &receiver.methods))
            .collect()
    }

    pub fn render_block(&self, name: &str, methods: &[Method]) -> String {
        let mut out = format!(
            "// {name}Interface is an interface for the {name} struct\n\
             type {name}Interface interface {{\n"
        );
        for method in methods {
            out.push_str(&self.indent);
            out.push_str(&render_signature(method));
            out.push('\n');
        }
        out.push_str("}\n\n");
        out
    }
}

/// Render the generated text with the default four-space indent
pub fn generate_interfaces(set: &InterfaceSet) -> String {
    InterfaceGenerator::default().generate(set)
}

/// `Name(params)` followed by nothing, ` T`, or ` (T1, T2)` depending on
/// the number of results
pub fn render_signature(method: &Method) -> String {
    let params = method.params.join(", ");
    match method.results.as_slice() {
        [] => format!("{}({})", method.name, params),
        [single] => format!("{}({}) {}", method.name, params, single),
        many => format!("{}({}) ({})", method.name, params, many.join(", ")),
    }
}
