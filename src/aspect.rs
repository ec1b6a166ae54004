//! Aspect ratio value types and crop window geometry.
//!
//! [`Sar`] and [`Dar`] are reduced positive rationals. [`CropWindow`] is a
//! sub-pixel region of a source frame. Pure values — no pixel operations,
//! no allocations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use zenscale::{Dar, Resolution, Sar};
//!
//! let sar = Sar::new(8, 9).unwrap();
//! let dar = Dar::of(Resolution::new(720, 480), sar).unwrap();
//!
//! // 720×480 at 8:9 samples displays as 4:3
//! assert_eq!(dar, Dar::new(4, 3).unwrap());
//! ```

use core::fmt;

#[cfg(not(feature = "std"))]
use num_traits::Float;

/// Frame dimensions in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Resolution {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Resolution {
    /// Create a resolution. Dimensions are not validated here; operations
    /// that require non-zero extents return [`AspectError::ZeroDimension`].
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width divided by height as `f64`.
    pub fn ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Denominator used when approximating a float ratio as a rational.
const FLOAT_RATIO_DEN: u64 = 1_000_000;

fn ratio_from_float(value: f64) -> Result<(u64, u64), AspectError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AspectError::NonPositiveRatio { value });
    }
    let scaled = value * FLOAT_RATIO_DEN as f64;
    if scaled < 1.0 || scaled > u64::MAX as f64 {
        return Err(AspectError::UnrepresentableRatio { value });
    }
    let num = scaled.round() as u64;
    let g = gcd(num, FLOAT_RATIO_DEN);
    Ok((num / g, FLOAT_RATIO_DEN / g))
}

/// Sample aspect ratio: width to height of a single pixel.
///
/// Always stored reduced. `1:1` means square pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Sar {
    num: u64,
    den: u64,
}

impl Sar {
    /// Square pixels.
    pub const SQUARE: Sar = Sar { num: 1, den: 1 };

    /// Create a reduced ratio. Errors when either term is zero.
    pub fn new(num: u64, den: u64) -> Result<Self, AspectError> {
        if num == 0 || den == 0 {
            return Err(AspectError::ZeroRatio { num, den });
        }
        let g = gcd(num, den);
        Ok(Self {
            num: num / g,
            den: den / g,
        })
    }

    /// Approximate a float ratio as a reduced rational.
    ///
    /// Errors when the value is non-finite, non-positive, or too large to
    /// represent.
    pub fn from_float(value: f64) -> Result<Self, AspectError> {
        let (num, den) = ratio_from_float(value)?;
        Ok(Self { num, den })
    }

    /// Numerator of the reduced ratio.
    pub const fn num(&self) -> u64 {
        self.num
    }

    /// Denominator of the reduced ratio.
    pub const fn den(&self) -> u64 {
        self.den
    }

    /// The ratio as `f64`.
    pub fn as_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// True for square pixels (`1:1`).
    pub const fn is_square(&self) -> bool {
        self.num == self.den
    }
}

impl fmt::Display for Sar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.num, self.den)
    }
}

/// Display aspect ratio: width to height of the displayed picture.
///
/// Always stored reduced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dar {
    num: u64,
    den: u64,
}

impl Dar {
    /// Create a reduced ratio. Errors when either term is zero.
    pub fn new(num: u64, den: u64) -> Result<Self, AspectError> {
        if num == 0 || den == 0 {
            return Err(AspectError::ZeroRatio { num, den });
        }
        let g = gcd(num, den);
        Ok(Self {
            num: num / g,
            den: den / g,
        })
    }

    /// Approximate a float ratio as a reduced rational.
    ///
    /// Errors when the value is non-finite, non-positive, or too large to
    /// represent.
    pub fn from_float(value: f64) -> Result<Self, AspectError> {
        let (num, den) = ratio_from_float(value)?;
        Ok(Self { num, den })
    }

    /// Ratio of a resolution, assuming square pixels.
    ///
    /// Errors when either dimension is zero.
    pub fn from_res(res: Resolution) -> Result<Self, AspectError> {
        if res.width == 0 || res.height == 0 {
            return Err(AspectError::ZeroDimension { res });
        }
        Self::new(res.width as u64, res.height as u64)
    }

    /// Displayed ratio of a resolution with the given sample aspect ratio.
    ///
    /// A 720×480 frame with 8:9 samples displays as 4:3. Errors when either
    /// dimension is zero.
    pub fn of(res: Resolution, sar: Sar) -> Result<Self, AspectError> {
        if res.width == 0 || res.height == 0 {
            return Err(AspectError::ZeroDimension { res });
        }
        Self::new(res.width as u64 * sar.num, res.height as u64 * sar.den)
    }

    /// Numerator of the reduced ratio.
    pub const fn num(&self) -> u64 {
        self.num
    }

    /// Denominator of the reduced ratio.
    pub const fn den(&self) -> u64 {
        self.den
    }

    /// The ratio as `f64`.
    pub fn as_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl fmt::Display for Dar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.num, self.den)
    }
}

/// Sub-pixel region of a source frame.
///
/// `top`/`left` are offsets from the frame origin; `width`/`height` are the
/// region extents. All values are `f64` so aspect correction can trim by
/// fractional amounts without rounding.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CropWindow {
    /// Offset from the top edge.
    pub top: f64,
    /// Offset from the left edge.
    pub left: f64,
    /// Region width.
    pub width: f64,
    /// Region height.
    pub height: f64,
}

impl CropWindow {
    /// The whole frame, no offset.
    pub fn full(res: Resolution) -> Self {
        Self {
            top: 0.0,
            left: 0.0,
            width: res.width as f64,
            height: res.height as f64,
        }
    }

    /// Center of the window in frame coordinates.
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Partial crop override. Unset fields fall back to the shift offsets and
/// the full source extents when resolved.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CropSpec {
    /// Offset from the top edge, overrides the vertical shift.
    pub top: Option<f64>,
    /// Offset from the left edge, overrides the horizontal shift.
    pub left: Option<f64>,
    /// Region width, defaults to the source width.
    pub width: Option<f64>,
    /// Region height, defaults to the source height.
    pub height: Option<f64>,
}

impl CropSpec {
    /// No overrides; resolves to the shifted full frame.
    pub const fn none() -> Self {
        Self {
            top: None,
            left: None,
            width: None,
            height: None,
        }
    }

    /// Resolve against a `(vertical, horizontal)` shift and source size.
    pub fn resolve(&self, shift: (f64, f64), source: Resolution) -> CropWindow {
        CropWindow {
            top: self.top.unwrap_or(shift.0),
            left: self.left.unwrap_or(shift.1),
            width: self.width.unwrap_or(source.width as f64),
            height: self.height.unwrap_or(source.height as f64),
        }
    }
}

/// Errors from aspect value construction.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum AspectError {
    /// A ratio term was zero.
    #[error("aspect ratio {num}:{den} has a zero term")]
    ZeroRatio {
        /// Numerator as given.
        num: u64,
        /// Denominator as given.
        den: u64,
    },
    /// A resolution dimension was zero.
    #[error("resolution {res} has a zero dimension")]
    ZeroDimension {
        /// The offending resolution.
        res: Resolution,
    },
    /// A float ratio was non-finite or not positive.
    #[error("ratio {value} is not a positive finite number")]
    NonPositiveRatio {
        /// The offending value.
        value: f64,
    },
    /// A float ratio was too extreme to approximate as a rational.
    #[error("ratio {value} cannot be represented as a rational")]
    UnrepresentableRatio {
        /// The offending value.
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    // ───────────────────────── rational reduction ─────────────────────────

    #[test]
    fn sar_reduces_on_construction() {
        let sar = Sar::new(16, 18).unwrap();
        assert_eq!((sar.num(), sar.den()), (8, 9));
    }

    #[test]
    fn sar_rejects_zero_terms() {
        assert_eq!(
            Sar::new(0, 9),
            Err(AspectError::ZeroRatio { num: 0, den: 9 })
        );
        assert_eq!(
            Sar::new(8, 0),
            Err(AspectError::ZeroRatio { num: 8, den: 0 })
        );
    }

    #[test]
    fn square_sar_detection() {
        assert!(Sar::SQUARE.is_square());
        assert!(Sar::new(3, 3).unwrap().is_square());
        assert!(!Sar::new(8, 9).unwrap().is_square());
    }

    #[test]
    fn dar_from_resolution_reduces() {
        let dar = Dar::from_res(Resolution::new(1920, 1080)).unwrap();
        assert_eq!((dar.num(), dar.den()), (16, 9));
    }

    #[test]
    fn dar_from_zero_resolution_fails() {
        let res = Resolution::new(0, 1080);
        assert_eq!(Dar::from_res(res), Err(AspectError::ZeroDimension { res }));
    }

    #[test]
    fn dar_of_resolution_and_sar() {
        let sar = Sar::new(8, 9).unwrap();
        let dar = Dar::of(Resolution::new(720, 480), sar).unwrap();
        assert_eq!(dar, Dar::new(4, 3).unwrap());
    }

    // ───────────────────────── float approximation ─────────────────────────

    #[test]
    fn from_float_round_trips_simple_ratios() {
        let dar = Dar::from_float(1.5).unwrap();
        assert_eq!(dar, Dar::new(3, 2).unwrap());

        let sar = Sar::from_float(0.5).unwrap();
        assert_eq!(sar, Sar::new(1, 2).unwrap());
    }

    #[test]
    fn from_float_rejects_bad_values() {
        assert!(matches!(
            Dar::from_float(0.0),
            Err(AspectError::NonPositiveRatio { .. })
        ));
        assert!(matches!(
            Dar::from_float(-1.5),
            Err(AspectError::NonPositiveRatio { .. })
        ));
        assert!(matches!(
            Dar::from_float(f64::NAN),
            Err(AspectError::NonPositiveRatio { .. })
        ));
        assert!(matches!(
            Dar::from_float(f64::INFINITY),
            Err(AspectError::NonPositiveRatio { .. })
        ));
        assert!(matches!(
            Sar::from_float(1e-12),
            Err(AspectError::UnrepresentableRatio { .. })
        ));
    }

    #[test]
    fn as_f64_matches_ratio() {
        assert_eq!(Sar::new(8, 9).unwrap().as_f64(), 8.0 / 9.0);
        assert_eq!(Dar::new(16, 9).unwrap().as_f64(), 16.0 / 9.0);
    }

    // ───────────────────────── crop windows ─────────────────────────

    #[test]
    fn full_window_covers_frame() {
        let win = CropWindow::full(Resolution::new(1920, 1080));
        assert_eq!(
            win,
            CropWindow {
                top: 0.0,
                left: 0.0,
                width: 1920.0,
                height: 1080.0
            }
        );
        assert_eq!(win.center(), (960.0, 540.0));
    }

    #[test]
    fn crop_spec_defaults_to_shift_and_source() {
        let spec = CropSpec::none();
        let win = spec.resolve((2.5, -1.0), Resolution::new(1280, 720));
        assert_eq!(
            win,
            CropWindow {
                top: 2.5,
                left: -1.0,
                width: 1280.0,
                height: 720.0
            }
        );
    }

    #[test]
    fn crop_spec_overrides_take_precedence() {
        let spec = CropSpec {
            top: Some(10.0),
            left: None,
            width: Some(640.0),
            height: None,
        };
        let win = spec.resolve((0.0, 3.0), Resolution::new(1280, 720));
        assert_eq!(
            win,
            CropWindow {
                top: 10.0,
                left: 3.0,
                width: 640.0,
                height: 720.0
            }
        );
    }

    #[test]
    fn display_formats() {
        assert_eq!(Resolution::new(720, 480).to_string(), "720x480");
        assert_eq!(Sar::new(8, 9).unwrap().to_string(), "8:9");
        assert_eq!(Dar::new(16, 9).unwrap().to_string(), "16:9");
    }
}
