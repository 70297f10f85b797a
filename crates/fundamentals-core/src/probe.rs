//! Variable Probes: address and storage-size reports for local primitives
//!
//! A [`Probe`] borrows a local, so the address it reports is the address of
//! the caller's variable, not of a copy.

use serde::{Deserialize, Serialize};
use std::mem;

/// A primitive the showcase knows how to label and print
pub trait Primitive: Copy {
    /// Label used in the value/size line (e.g. "Integer")
    const LABEL: &'static str;

    /// Value as a console stream would print it
    fn render(&self) -> String;
}

impl Primitive for i32 {
    const LABEL: &'static str = "Integer";

    fn render(&self) -> String {
        self.to_string()
    }
}

impl Primitive for f32 {
    const LABEL: &'static str = "Float";

    fn render(&self) -> String {
        self.to_string()
    }
}

impl Primitive for bool {
    const LABEL: &'static str = "Boolean";

    // Numeric, like a stream without boolalpha.
    fn render(&self) -> String {
        u8::from(*self).to_string()
    }
}

/// Serializable snapshot of one probed variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableRecord {
    pub name: String,
    pub label: String,
    pub value: String,
    pub address: usize,
    pub size: usize,
}

/// Object-safe view of a probe
pub trait Diagnostic {
    fn name(&self) -> &str;

    fn label(&self) -> &'static str;

    fn value_text(&self) -> String;

    /// Storage size in bytes
    fn size(&self) -> usize;

    fn address(&self) -> usize;

    /// `Address of <name>: <ptr>`
    fn address_line(&self) -> String;

    /// `<Label>: <value> Size: <n> bytes`
    fn size_line(&self) -> String {
        format!(
            "{}: {} Size: {} bytes",
            self.label(),
            self.value_text(),
            self.size()
        )
    }

    fn record(&self) -> VariableRecord {
        VariableRecord {
            name: self.name().to_string(),
            label: self.label().to_string(),
            value: self.value_text(),
            address: self.address(),
            size: self.size(),
        }
    }
}

/// Borrowed view of a named local variable
#[derive(Debug, Clone, Copy)]
pub struct Probe<'a, T: Primitive> {
    name: &'static str,
    value: &'a T,
}

impl<'a, T: Primitive> Probe<'a, T> {
    pub fn new(name: &'static str, value: &'a T) -> Self {
        Self { name, value }
    }

    pub fn get(&self) -> T {
        *self.value
    }
}

impl<T: Primitive> Diagnostic for Probe<'_, T> {
    fn name(&self) -> &str {
        self.name
    }

    fn label(&self) -> &'static str {
        T::LABEL
    }

    fn value_text(&self) -> String {
        self.value.render()
    }

    fn size(&self) -> usize {
        mem::size_of::<T>()
    }

    fn address(&self) -> usize {
        self.value as *const T as usize
    }

    fn address_line(&self) -> String {
        format!("Address of {}: {:p}", self.name, self.value)
    }
}
