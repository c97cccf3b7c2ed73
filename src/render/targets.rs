//! Output buffers for a draw call.

use crate::buffer::{Buffer, DepthBuffer};
use crate::color::Color;

/// The depth value meaning "nothing drawn yet": the far end of NDC z.
/// Clear depth buffers to this before a frame.
pub const FAR_DEPTH: f32 = 1.0;

/// Borrowed views of the caller-owned output buffers.
///
/// Only the color target is mandatory. All bound targets must share the
/// color target's dimensions; the pipeline checks this once per draw call
/// and treats a mismatch as a precondition violation.
///
/// Without a depth target every covered pixel writes unconditionally
/// (painter's order). With one, a pixel is written only when its
/// interpolated depth is strictly smaller than the stored value, so the
/// nearest surface wins and the earliest-drawn triangle wins depth ties.
pub struct RenderTargets<'a> {
    pub color: &'a mut Buffer<Color>,
    pub depth: Option<&'a mut DepthBuffer>,
    /// Normal visualization: world normals mapped from [-1, 1] to [0, 1].
    pub normal: Option<&'a mut Buffer<Color>>,
    /// UV visualization: interpolated UVs in the red/green channels.
    pub uv: Option<&'a mut Buffer<Color>>,
}

impl<'a> RenderTargets<'a> {
    pub fn new(color: &'a mut Buffer<Color>) -> Self {
        Self {
            color,
            depth: None,
            normal: None,
            uv: None,
        }
    }

    pub fn with_depth(mut self, depth: &'a mut DepthBuffer) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn with_normal(mut self, normal: &'a mut Buffer<Color>) -> Self {
        self.normal = Some(normal);
        self
    }

    pub fn with_uv(mut self, uv: &'a mut Buffer<Color>) -> Self {
        self.uv = Some(uv);
        self
    }

    /// Asserts that every bound target matches the color target's size.
    pub(crate) fn check_dimensions(&self) {
        let (width, height) = (self.color.width(), self.color.height());
        if let Some(depth) = &self.depth {
            assert_eq!(
                (depth.width(), depth.height()),
                (width, height),
                "depth target size mismatch"
            );
        }
        if let Some(normal) = &self.normal {
            assert_eq!(
                (normal.width(), normal.height()),
                (width, height),
                "normal target size mismatch"
            );
        }
        if let Some(uv) = &self.uv {
            assert_eq!(
                (uv.width(), uv.height()),
                (width, height),
                "uv target size mismatch"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;

    #[test]
    fn matching_dimensions_pass() {
        let mut color = Buffer::new(4, 4, color::BLACK);
        let mut depth = DepthBuffer::new(4, 4, FAR_DEPTH);
        RenderTargets::new(&mut color)
            .with_depth(&mut depth)
            .check_dimensions();
    }

    #[test]
    #[should_panic(expected = "depth target size mismatch")]
    fn mismatched_depth_target_is_rejected() {
        let mut color = Buffer::new(4, 4, color::BLACK);
        let mut depth = DepthBuffer::new(4, 5, FAR_DEPTH);
        RenderTargets::new(&mut color)
            .with_depth(&mut depth)
            .check_dimensions();
    }
}
