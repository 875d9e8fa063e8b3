//! Static reflective wall segments.

use super::geometry::Planar;
use super::states::NVec2;
use crate::error::{Result, SimError};

/// Directed segment from `origin` to `origin + span`
///
/// The outward normal (`span` rotated by +90°, unit length) is computed once
/// at construction, which is also where a zero-length span is rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    origin: NVec2,
    span: NVec2,
    normal: NVec2,
}

impl Boundary {
    pub fn new(origin: NVec2, span: NVec2) -> Result<Self> {
        let normal = span.perpendicular_normal().map_err(|_| {
            SimError::DegenerateGeometry(format!(
                "boundary at ({}, {}) has a zero-length span",
                origin.x, origin.y
            ))
        })?;
        Ok(Self { origin, span, normal })
    }

    pub fn origin(&self) -> NVec2 {
        self.origin
    }

    pub fn span(&self) -> NVec2 {
        self.span
    }

    pub fn end(&self) -> NVec2 {
        self.origin + self.span
    }

    /// Unit normal on the counter-clockwise side of `span`
    pub fn normal(&self) -> NVec2 {
        self.normal
    }

    /// Extent test used by the reflection pass: the distance of `x` from the
    /// coordinate origin must lie strictly between the distances of the two
    /// end points. This is only a real "within the segment" test for
    /// segments lined up with the coordinate origin.
    pub fn spans(&self, x: &NVec2) -> bool {
        let d = x.length();
        self.origin.length() < d && d < self.end().length()
    }
}
