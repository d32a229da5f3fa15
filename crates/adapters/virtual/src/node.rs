//! Virtual document nodes.

use std::collections::BTreeMap;
use std::fmt;

use vitrine_app::ports::ImageSource;

/// Handle to a node of a [`VirtualPage`](crate::VirtualPage).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Description of an element to add to a virtual page.
#[derive(Debug, Clone, Default)]
pub struct NodeSpec {
    pub(crate) id: Option<String>,
    pub(crate) classes: Vec<String>,
    pub(crate) attributes: BTreeMap<String, String>,
    pub(crate) image: Option<ImageSource>,
}

impl NodeSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Element with the given `id` attribute.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self::new().id(id)
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Give the element a descendant `<img>`.
    #[must_use]
    pub fn image(mut self, src: impl Into<String>, alt: impl Into<String>) -> Self {
        self.image = Some(ImageSource {
            src: src.into(),
            alt: alt.into(),
        });
        self
    }
}

/// Mutable state of one element.
#[derive(Debug, Clone, Default)]
pub(crate) struct Node {
    pub(crate) id: Option<String>,
    pub(crate) classes: Vec<String>,
    pub(crate) attributes: BTreeMap<String, String>,
    pub(crate) styles: BTreeMap<String, String>,
    pub(crate) text: String,
    pub(crate) image: Option<ImageSource>,
}

impl From<NodeSpec> for Node {
    fn from(spec: NodeSpec) -> Self {
        Self {
            id: spec.id,
            classes: spec.classes,
            attributes: spec.attributes,
            image: spec.image,
            ..Self::default()
        }
    }
}

impl Node {
    pub(crate) fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub(crate) fn add_class(&mut self, class: &str) {
        if !class.is_empty() && !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub(crate) fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }
}
