//! Reading and writing `pom.xml` descriptors
//!
//! Only the parts of a descriptor that branch versioning touches are modeled:
//! coordinates, the parent reference, module paths and profile ids. A model
//! read from text keeps that text, so writing it back changes nothing but the
//! version elements.

pub mod reader;
pub mod writer;

pub use reader::{parse_model, read_model};
pub use writer::{render_model, write_model};

/// The `<parent>` reference of a descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parent {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub relative_path: Option<String>,
}

/// Project descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub packaging: Option<String>,
    pub parent: Option<Parent>,
    pub modules: Vec<String>,
    pub profiles: Vec<String>,
    pub(crate) source: Option<String>,
}

impl Model {
    /// Text this model was parsed from, if any
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Effective form: group and version inherited from the parent
    /// reference when not declared. The result carries no source text.
    pub fn resolved(&self) -> Model {
        let parent = self.parent.as_ref();
        Model {
            group_id: self
                .group_id
                .clone()
                .or_else(|| parent.and_then(|p| p.group_id.clone())),
            version: self
                .version
                .clone()
                .or_else(|| parent.and_then(|p| p.version.clone())),
            source: None,
            ..self.clone()
        }
    }

    pub(crate) fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}
