//! Frame metadata contract.

use crate::aspect::{Resolution, Sar};

/// The frame-handle surface the composition consumes.
///
/// Frames move through the pipeline by value; `with_sar` is a metadata tag,
/// not a pixel operation.
pub trait VideoFrame: Sized {
    /// Frame dimensions in pixels.
    fn resolution(&self) -> Resolution;

    /// Sample aspect ratio carried by the frame, `None` when untagged.
    fn sar(&self) -> Option<Sar>;

    /// The same frame tagged with a sample aspect ratio.
    fn with_sar(self, sar: Sar) -> Self;
}
