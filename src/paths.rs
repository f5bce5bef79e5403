//! Facilities for locating mismatches within checked values.
use std::fmt::{self, Write};

/// A single step of an [`ErrorPath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathChunk {
    /// Object field access by name.
    Field(String),
    /// Zero-based array index access.
    Index(usize),
}

/// The location of the first mismatch inside a nested value.
///
/// Renders in dot/bracket notation, read left to right in descent order:
/// each object-field step as `.<fieldName>` and each array-element step as
/// `[<index>]`, e.g. `.foo[1].bar`. Field names are written verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorPath(Vec<PathChunk>);

impl ErrorPath {
    /// The path steps, outermost first.
    #[must_use]
    pub fn chunks(&self) -> &[PathChunk] {
        &self.0
    }

    /// Whether the path has no steps, i.e. it points at the checked value
    /// itself.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ErrorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in &self.0 {
            match chunk {
                PathChunk::Field(name) => {
                    f.write_char('.')?;
                    f.write_str(name)?;
                }
                PathChunk::Index(index) => {
                    f.write_char('[')?;
                    f.write_str(itoa::Buffer::new().format(*index))?;
                    f.write_char(']')?;
                }
            }
        }
        Ok(())
    }
}

impl serde::Serialize for ErrorPath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<Vec<PathChunk>> for ErrorPath {
    #[inline]
    fn from(chunks: Vec<PathChunk>) -> Self {
        ErrorPath(chunks)
    }
}

/// A borrowed location segment used while descending.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Segment<'a> {
    Field(&'a str),
    Index(usize),
}

impl<'a> From<&'a str> for Segment<'a> {
    #[inline]
    fn from(name: &'a str) -> Self {
        Segment::Field(name)
    }
}

impl<'a> From<&'a String> for Segment<'a> {
    #[inline]
    fn from(name: &'a String) -> Self {
        Segment::Field(name)
    }
}

impl From<usize> for Segment<'_> {
    #[inline]
    fn from(index: usize) -> Self {
        Segment::Index(index)
    }
}

/// The current location within the checked value.
///
/// Built incrementally on the stack as a parent-linked list, so the descent
/// allocates nothing; a full [`ErrorPath`] is materialized only at a failure
/// site.
#[derive(Debug)]
pub(crate) struct InstancePath<'a> {
    segment: Option<Segment<'a>>,
    parent: Option<&'a InstancePath<'a>>,
}

impl<'a> InstancePath<'a> {
    /// The root location: the checked value itself.
    pub(crate) const fn new() -> Self {
        InstancePath {
            segment: None,
            parent: None,
        }
    }

    /// Extend the location with one more step.
    #[inline]
    pub(crate) fn push(&'a self, segment: impl Into<Segment<'a>>) -> Self {
        InstancePath {
            segment: Some(segment.into()),
            parent: Some(self),
        }
    }

    /// Materialize the location, outermost step first. `None` at the root:
    /// a mismatch of the checked value itself carries no path.
    pub(crate) fn to_error_path(&self) -> Option<ErrorPath> {
        let mut chunks = Vec::new();
        let mut current = Some(self);
        while let Some(node) = current {
            if let Some(segment) = node.segment {
                chunks.push(match segment {
                    Segment::Field(name) => PathChunk::Field(name.to_string()),
                    Segment::Index(index) => PathChunk::Index(index),
                });
            }
            current = node.parent;
        }
        if chunks.is_empty() {
            return None;
        }
        chunks.reverse();
        Some(ErrorPath(chunks))
    }
}
