//! View identifiers
//!
//! Views on the device are addressed either by a single resource view id
//! or by an accessibility-id pair; the agent's `queryview` verb takes the
//! id type followed by the ids themselves.

/// How a [`ViewRef`]'s ids are to be interpreted by the agent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    /// A single resource view id
    ViewId,

    /// A (node id, window id) accessibility pair
    AccessibilityIds,
}

impl IdKind {
    /// The id-type token the wire protocol uses
    pub fn as_str(self) -> &'static str {
        match self {
            IdKind::ViewId => "viewid",
            IdKind::AccessibilityIds => "accessibilityids",
        }
    }
}

/// A handle to an on-screen view, as returned by
/// [`crate::client::MonkeyClient::get_root_view`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRef {
    kind: IdKind,
    ids: Vec<String>,
}

impl ViewRef {
    /// Create a view reference from an id kind and its ids
    pub fn new(kind: IdKind, ids: Vec<String>) -> Self {
        Self { kind, ids }
    }

    pub fn kind(&self) -> IdKind {
        self.kind
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}
