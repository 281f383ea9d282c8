//! Configuration options for tree serialization

/// Output markup flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Void elements close with `>`, boolean attributes may be minimized
    #[default]
    Html,
    /// Void elements self-close with ` />`, attributes always carry a value
    Xhtml,
}

/// Default nesting limit for recursive serialization
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options for tree serialization
#[derive(Debug, Clone)]
pub struct SerializeOptions {
    /// Output flavor (html or xhtml)
    pub format: Format,

    /// Deepest element nesting accepted before giving up
    pub max_depth: usize,
}

impl SerializeOptions {
    pub fn html() -> Self {
        Self::default()
    }

    pub fn xhtml() -> Self {
        Self {
            format: Format::Xhtml,
            ..Self::default()
        }
    }
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            format: Format::Html,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
