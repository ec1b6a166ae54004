//! Aspect correction geometry.
//!
//! Computes the crop window, shift, and output SAR tag that make a resample
//! to a target resolution preserve the displayed aspect ratio. Pure geometry
//! on `f64` — no pixel operations, no allocations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use zenscale::{correct, CropWindow, Resolution, Sar};
//!
//! // 16:9 source into a 2:1 target: trim height, keep center.
//! let source = Resolution::new(1920, 1080);
//! let c = correct(
//!     source,
//!     Sar::SQUARE,
//!     Resolution::new(1920, 960),
//!     CropWindow::full(source),
//!     None,
//!     false,
//! );
//!
//! assert_eq!(c.crop.top, 60.0);
//! assert_eq!(c.crop.height, 960.0);
//! assert_eq!(c.sar_tag, None);
//! ```

use crate::aspect::{CropWindow, Resolution, Sar};

/// DAR differences at or below this are treated as equal.
pub const DAR_EPSILON: f64 = 1e-9;

/// Output of [`correct`]: the window to sample, the shift to pass to the
/// resampler, and the SAR tag to apply to the result frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Correction {
    /// Corrected crop window.
    pub crop: CropWindow,
    /// `(vertical, horizontal)` shift, equal to the window origin.
    pub shift: (f64, f64),
    /// SAR to tag the output frame with, when the correction neutralized
    /// non-square source pixels.
    pub sar_tag: Option<Sar>,
}

/// Correct a crop window so resampling it to `target` preserves the
/// displayed aspect ratio.
///
/// The source DAR comes from the full source resolution under a square-pixel
/// reading; the trim applies to the crop window extents. When `source_sar`
/// is non-square and no DAR was forced (`dar_forced`), the target DAR is
/// recomputed to neutralize the pixel distortion and the output is tagged
/// square. The trim is a symmetric center-crop on exactly one axis; a
/// negative excess grows the window verbatim, and an out-of-bounds window is
/// the resampler's concern. Never fails.
pub fn correct(
    source: Resolution,
    source_sar: Sar,
    target: Resolution,
    crop: CropWindow,
    dar: Option<f64>,
    dar_forced: bool,
) -> Correction {
    let src_dar = source.ratio();
    let mut out_dar = dar.unwrap_or_else(|| target.ratio());
    let mut sar_tag = None;

    if !source_sar.is_square() && !dar_forced {
        let sar = source_sar.as_f64();
        let (tw, th) = (target.width as f64, target.height as f64);
        out_dar = if sar > 1.0 {
            (tw / sar) / th
        } else {
            tw / (th * sar)
        };
        sar_tag = Some(Sar::SQUARE);
    }

    let mut crop = crop;
    if (src_dar - out_dar).abs() > DAR_EPSILON {
        if src_dar > out_dar {
            let excess = crop.width - crop.height * out_dar;
            crop.left += excess / 2.0;
            crop.width -= excess;
        } else {
            let excess = crop.height - crop.width / out_dar;
            crop.top += excess / 2.0;
            crop.height -= excess;
        }
    }

    Correction {
        shift: (crop.top, crop.left),
        crop,
        sar_tag,
    }
}
