//! Structural locations inside nested raw input.

use core::fmt;
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// One step into a nested value: an object member or an array element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl PathSegment {
    /// Keys that can be written after a dot (`user.name`); everything else
    /// is written in brackets (`headers[content-type]`).
    fn is_dot_key(key: &str) -> bool {
        let mut chars = key.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() || first == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            },
            _ => false,
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_owned())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// Ordered chain of segments, outermost first.
///
/// Composite validators build paths from the inside out: each level
/// [`prepend`](Path::prepend)s its own segment to the errors raised below it,
/// so the finished path reads outer-to-inner.
///
/// # Examples
///
/// ```
/// use value_rail::types::Path;
///
/// let mut path = Path::from_segments(["email"]);
/// path.prepend(2usize);
/// path.prepend("users");
/// assert_eq!(path.to_string(), "users[2].email");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path {
    segments: SmallVec<[PathSegment; 4]>,
}

impl Path {
    /// The empty path, used by errors raised at the top level.
    #[inline]
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PathSegment>,
    {
        Self { segments: segments.into_iter().map(Into::into).collect() }
    }

    /// Inserts `segment` in front of the existing segments.
    #[inline]
    pub fn prepend(&mut self, segment: impl Into<PathSegment>) {
        self.segments.insert(0, segment.into());
    }

    /// Appends `segment` after the existing segments.
    #[inline]
    pub fn push(&mut self, segment: impl Into<PathSegment>) {
        self.segments.push(segment.into());
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, PathSegment> {
        self.segments.iter()
    }

    /// The innermost segment, if any.
    #[inline]
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if PathSegment::is_dot_key(key) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(key)?;
                },
                PathSegment::Key(key) => write!(f, "[{key}]")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl<S: Into<PathSegment>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_segments(iter)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathSegment;
    type IntoIter = core::slice::Iter<'a, PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[cfg(feature = "serde")]
impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
