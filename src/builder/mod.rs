//! Accumulates BEM class names for a single element.
//!
//! A builder starts from a primary class and then takes secondary classes,
//! modifiers of the primary class, and conditional class maps:
//!
//! ```
//! use bemkit::{ClassBuilder, ClassMap};
//!
//! let mut classes = ClassBuilder::new("button", "pre-")?;
//! classes
//!     .add_modifier("large")
//!     .map_classes(&ClassMap::from([("is-active", true), ("is-disabled", false)]));
//! assert_eq!(classes.to_string(), "pre-button pre-button--large is-active");
//! # Ok::<(), bemkit::ClassError>(())
//! ```
//!
//! Builders only ever append. They are meant to live for one render and be
//! thrown away once stringified; they are not synchronized for shared mutation.

pub mod class_map;
pub mod param;

pub use class_map::{ClassMap, Value};
pub use param::Param;

use std::fmt;

use crate::bem::{self, Descriptor};
use crate::error::{ClassError, Result};

/// Map keys starting with this sigil name a modifier of the primary class.
pub const MODIFIER_SIGIL: char = '@';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassBuilder {
    prefix: String,
    primary_class: String,
    classes: Vec<String>,
}

impl ClassBuilder {
    /// Start a builder from its primary class.
    ///
    /// The prefix is prepended to the primary class and to every secondary
    /// class added with `apply_prefix`. Fails with
    /// [`ClassError::MissingPrimaryClass`] when the primary descriptor does
    /// not resolve to a name.
    pub fn new(primary: impl Into<Descriptor>, prefix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();
        let primary = bem::format(primary, "", "").map_err(|_| ClassError::MissingPrimaryClass)?;
        let primary_class = format!("{prefix}{primary}");

        Ok(Self {
            prefix,
            classes: vec![primary_class.clone()],
            primary_class,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The prefixed primary class that modifiers are derived from.
    pub fn primary_class(&self) -> &str {
        &self.primary_class
    }

    /// Classes in emission order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Format and append a secondary class.
    pub fn add_class(
        &mut self,
        block: impl Into<Descriptor>,
        element: &str,
        modifier: &str,
        apply_prefix: bool,
    ) -> Result<&mut Self> {
        let class = bem::format(block, element, modifier)?;
        let class = if apply_prefix {
            format!("{}{}", self.prefix, class)
        } else {
            class
        };
        self.push(class);
        Ok(self)
    }

    /// Append a modifier of the primary class, e.g. `unique--inverse`.
    ///
    /// Never re-prefixed since the primary class already carries the prefix.
    pub fn add_modifier(&mut self, modifier: &str) -> &mut Self {
        let class = if modifier.is_empty() {
            self.primary_class.clone()
        } else {
            format!("{}--{}", self.primary_class, modifier)
        };
        self.push(class);
        self
    }

    /// Append every key whose value is truthy, in map order.
    ///
    /// `@name` keys become modifiers of the primary class; any other key is
    /// appended verbatim, without BEM formatting or prefix.
    pub fn map_classes(&mut self, classes: &ClassMap) -> &mut Self {
        for (key, value) in classes.iter() {
            if !value.is_truthy() {
                tracing::debug!(class = key, "skipping falsy class");
                continue;
            }
            match key.strip_prefix(MODIFIER_SIGIL) {
                Some(modifier) => {
                    self.add_modifier(modifier);
                }
                None => self.push(key.to_string()),
            }
        }
        self
    }

    /// Route each parameter to [`add_class`](Self::add_class) or
    /// [`map_classes`](Self::map_classes) depending on its shape.
    ///
    /// A record counts as a block descriptor when it has a truthy `block`
    /// entry, so a class map that happens to contain a `block` key is read as
    /// a descriptor. A typed [`Block`](crate::bem::Block) with an empty block
    /// name follows the same rule and is read as a class map.
    /// [`Param::Ignored`] is skipped.
    pub fn map_params<I>(&mut self, params: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Param>,
    {
        for param in params {
            match param.into() {
                Param::Class(Descriptor::Block(record)) if record.block.is_empty() => {
                    self.map_classes(&ClassMap::from(record));
                }
                Param::Class(descriptor) => {
                    self.add_class(descriptor, "", "", true)?;
                }
                Param::Record(record) => match record.block_record() {
                    Some(block) => {
                        self.add_class(block, "", "", true)?;
                    }
                    None => {
                        self.map_classes(&record);
                    }
                },
                Param::Ignored => tracing::debug!("ignoring unrecognized class parameter"),
            }
        }
        Ok(self)
    }

    fn push(&mut self, class: String) {
        tracing::trace!(%class, "adding class");
        self.classes.push(class);
    }
}

impl fmt::Display for ClassBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.classes.join(" ").trim())
    }
}

impl From<ClassBuilder> for String {
    fn from(builder: ClassBuilder) -> Self {
        builder.to_string()
    }
}
