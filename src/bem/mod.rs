//! BEM class-name formatting.
//!
//! Joins a block with an optional element (`block-element`) and an optional
//! modifier (`block--modifier`). Both suffixes may be combined, giving
//! `block-element--modifier`.

pub mod descriptor;

pub use descriptor::{Block, Descriptor};

use crate::error::{ClassError, Result};

/// Format a descriptor into a single BEM class name.
///
/// Non-empty positional `element`/`modifier` arguments win over the fields of
/// a [`Block`] record. Fails with [`ClassError::InvalidDescriptor`] when the
/// resolved block name is empty.
pub fn format(descriptor: impl Into<Descriptor>, element: &str, modifier: &str) -> Result<String> {
    let (block, element, modifier) = match descriptor.into() {
        Descriptor::Name(name) => (name, element.to_string(), modifier.to_string()),
        Descriptor::Parts(parts) => (parts.join("-"), element.to_string(), modifier.to_string()),
        Descriptor::Block(record) => (
            record.block,
            positional_or(element, record.element),
            positional_or(modifier, record.modifier),
        ),
    };

    if block.is_empty() {
        return Err(ClassError::InvalidDescriptor(
            "block name must not be empty".into(),
        ));
    }

    let mut class = block;
    if !element.is_empty() {
        class.push('-');
        class.push_str(&element);
    }
    if !modifier.is_empty() {
        class.push_str("--");
        class.push_str(&modifier);
    }
    Ok(class)
}

fn positional_or(positional: &str, field: Option<String>) -> String {
    if positional.is_empty() {
        field.unwrap_or_default()
    } else {
        positional.to_string()
    }
}
