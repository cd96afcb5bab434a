//! The three shapes a BEM block can be described with.

/// A block given as a structured record.
///
/// `element` and `modifier` are only consulted when the positional
/// arguments passed to [`format`](super::format) are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub block: String,
    pub element: Option<String>,
    pub modifier: Option<String>,
}

impl Block {
    pub fn new(block: impl Into<String>) -> Self {
        Self {
            block: block.into(),
            element: None,
            modifier: None,
        }
    }

    pub fn element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }

    pub fn modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifier = Some(modifier.into());
        self
    }
}

/// Input accepted wherever a block name is expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Descriptor {
    /// A plain class name, used as-is.
    Name(String),
    /// Fragments joined with `-` to form the block name.
    Parts(Vec<String>),
    /// A record carrying its own element and modifier.
    Block(Block),
}

impl From<&str> for Descriptor {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Descriptor {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<&String> for Descriptor {
    fn from(name: &String) -> Self {
        Self::Name(name.clone())
    }
}

impl From<Vec<String>> for Descriptor {
    fn from(parts: Vec<String>) -> Self {
        Self::Parts(parts)
    }
}

impl From<Vec<&str>> for Descriptor {
    fn from(parts: Vec<&str>) -> Self {
        Self::Parts(parts.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Descriptor {
    fn from(parts: &[&str]) -> Self {
        Self::Parts(parts.iter().map(|p| p.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Descriptor {
    fn from(parts: [&str; N]) -> Self {
        Self::Parts(parts.iter().map(|p| p.to_string()).collect())
    }
}

impl From<Block> for Descriptor {
    fn from(block: Block) -> Self {
        Self::Block(block)
    }
}

impl From<&Descriptor> for Descriptor {
    fn from(descriptor: &Descriptor) -> Self {
        descriptor.clone()
    }
}
