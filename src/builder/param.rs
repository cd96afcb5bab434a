//! Heterogeneous arguments accepted by `ClassBuilder::map_params`.

use crate::bem::{Block, Descriptor};

use super::class_map::ClassMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    /// Added as a secondary class.
    Class(Descriptor),
    /// A block record when it holds a truthy `block` entry, otherwise a
    /// class map.
    Record(ClassMap),
    /// Anything else; skipped without error.
    Ignored,
}

impl From<Descriptor> for Param {
    fn from(descriptor: Descriptor) -> Self {
        Param::Class(descriptor)
    }
}

impl From<&str> for Param {
    fn from(name: &str) -> Self {
        Param::Class(name.into())
    }
}

impl From<String> for Param {
    fn from(name: String) -> Self {
        Param::Class(name.into())
    }
}

impl From<Vec<&str>> for Param {
    fn from(parts: Vec<&str>) -> Self {
        Param::Class(parts.into())
    }
}

impl From<Vec<String>> for Param {
    fn from(parts: Vec<String>) -> Self {
        Param::Class(parts.into())
    }
}

impl<const N: usize> From<[&str; N]> for Param {
    fn from(parts: [&str; N]) -> Self {
        Param::Class(parts.into())
    }
}

impl From<Block> for Param {
    fn from(block: Block) -> Self {
        Param::Class(block.into())
    }
}

impl From<ClassMap> for Param {
    fn from(map: ClassMap) -> Self {
        Param::Record(map)
    }
}

impl<T: Into<Param>> From<Option<T>> for Param {
    fn from(param: Option<T>) -> Self {
        param.map_or(Param::Ignored, Into::into)
    }
}
