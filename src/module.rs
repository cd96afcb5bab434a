//! Per-component class formatting.
//!
//! A [`Module`] pairs a component name with its generated class names and
//! formats the class string for the component root or one of its children.

use crate::bem::Descriptor;
use crate::builder::{ClassBuilder, Param};
use crate::error::{ClassError, Result};
use crate::names::{generate_class_names, ClassNames};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    name: String,
    class_names: ClassNames,
}

impl Module {
    pub fn new<S: AsRef<str>>(
        namespace: &str,
        name: impl Into<String>,
        block: impl Into<Descriptor>,
        elements: &[S],
    ) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            class_names: generate_class_names(namespace, block, elements)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class_names(&self) -> &ClassNames {
        &self.class_names
    }

    /// Class string for the component root: its block class followed by
    /// whatever `params` add.
    pub fn format_class<I>(&self, params: I) -> Result<String>
    where
        I: IntoIterator,
        I::Item: Into<Param>,
    {
        build(self.class_names.default_class(), params)
    }

    /// Class string for one of the component's elements.
    pub fn format_child_class<I>(&self, element: &str, params: I) -> Result<String>
    where
        I: IntoIterator,
        I::Item: Into<Param>,
    {
        let class = self
            .class_names
            .get(element)
            .ok_or_else(|| ClassError::UnknownElement {
                module: self.name.clone(),
                element: element.to_string(),
            })?;
        build(class, params)
    }
}

fn build<I>(primary: &str, params: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: Into<Param>,
{
    let mut builder = ClassBuilder::new(primary, "")?;
    builder.map_params(params)?;
    Ok(builder.to_string())
}
