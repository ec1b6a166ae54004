//! Kernel composition: one public `scale`/`descale` entry point stacking
//! linear-light execution (outer) and aspect correction (middle) around a
//! primitive resample operation (inner).
//!
//! Concrete kernels implement [`Resampler`] — the primitive pair plus
//! optional linear-space specializations opted in through
//! [`LinearSupport`] — and receive [`Kernel`] through its blanket impl.
//!
//! # Example
//!
//! ```
//! use zenscale::{Dar, ScaleOptions, Sigmoid};
//!
//! let options = ScaleOptions::new()
//!     .dar(Dar::new(16, 9).unwrap())
//!     .sigmoid(Sigmoid::Enabled);
//! assert!(options.sigmoid.is_active());
//! ```

use crate::aspect::{CropSpec, CropWindow, Dar, Resolution, Sar};
use crate::correct::correct;
use crate::frame::VideoFrame;
use crate::linear::{LinearConfig, LinearLight, LinearSupport, Sigmoid};
use crate::params::{self, AspectOverride};

/// Arguments handed to the primitive resample operation.
///
/// `shift` always equals the crop window origin `(top, left)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResampleArgs {
    /// Output resolution.
    pub target: Resolution,
    /// `(vertical, horizontal)` sub-pixel shift.
    pub shift: (f64, f64),
    /// Source window to sample.
    pub crop: CropWindow,
}

/// Per-call options for [`Kernel::scale`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScaleOptions {
    /// `(vertical, horizontal)` shift; crop fields override it per axis.
    pub shift: (f64, f64),
    /// Partial crop override, resolved against the shift and source size.
    pub crop: CropSpec,
    /// SAR override; `None` defers to `keep_ar`.
    pub sar: Option<AspectOverride<Sar>>,
    /// DAR override; `None` defers to `keep_ar`.
    pub dar: Option<AspectOverride<Dar>>,
    /// Shorthand: auto-derive both unset axes.
    pub keep_ar: bool,
    /// Request linear-light execution.
    pub linear: bool,
    /// Sigmoid companding; an active value forces linear execution.
    pub sigmoid: Sigmoid,
}

impl ScaleOptions {
    /// Defaults: no shift, no crop, no overrides, non-linear.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `(vertical, horizontal)` shift.
    pub fn shift(mut self, shift: (f64, f64)) -> Self {
        self.shift = shift;
        self
    }

    /// Set the partial crop override.
    pub fn crop(mut self, crop: CropSpec) -> Self {
        self.crop = crop;
        self
    }

    /// Set the SAR override. Accepts a [`Sar`] or a bool
    /// (`true` = auto-derive, `false` = disable).
    pub fn sar(mut self, sar: impl Into<AspectOverride<Sar>>) -> Self {
        self.sar = Some(sar.into());
        self
    }

    /// Set the DAR override. Accepts a [`Dar`] or a bool
    /// (`true` = auto-derive, `false` = disable).
    pub fn dar(mut self, dar: impl Into<AspectOverride<Dar>>) -> Self {
        self.dar = Some(dar.into());
        self
    }

    /// Set the aspect-preservation shorthand.
    pub fn keep_ar(mut self, keep_ar: bool) -> Self {
        self.keep_ar = keep_ar;
        self
    }

    /// Request linear-light execution.
    pub fn linear(mut self, linear: bool) -> Self {
        self.linear = linear;
        self
    }

    /// Set sigmoid companding.
    pub fn sigmoid(mut self, sigmoid: Sigmoid) -> Self {
        self.sigmoid = sigmoid;
        self
    }
}

/// Per-call options for [`Kernel::descale`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DescaleOptions {
    /// `(vertical, horizontal)` sub-pixel shift.
    pub shift: (f64, f64),
    /// Request linear-light execution.
    pub linear: bool,
    /// Sigmoid companding; an active value forces linear execution.
    pub sigmoid: Sigmoid,
}

impl DescaleOptions {
    /// Defaults: no shift, non-linear.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `(vertical, horizontal)` shift.
    pub fn shift(mut self, shift: (f64, f64)) -> Self {
        self.shift = shift;
        self
    }

    /// Request linear-light execution.
    pub fn linear(mut self, linear: bool) -> Self {
        self.linear = linear;
        self
    }

    /// Set sigmoid companding.
    pub fn sigmoid(mut self, sigmoid: Sigmoid) -> Self {
        self.sigmoid = sigmoid;
        self
    }
}

/// Failure of a composed `scale`/`descale` call.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum ScaleError<K, T> {
    /// The primitive resample operation failed.
    #[error("resample kernel failed: {0}")]
    Resample(K),
    /// The linear-light conversion failed on entry or exit.
    #[error("linear-light transfer failed: {0}")]
    Transfer(T),
}

/// Conversion error of a resampler's frame type.
pub type TransferErrorOf<R> = <<R as Resampler>::Frame as LinearLight>::Error;

/// Composed error of a resampler: primitive or transfer failure.
pub type KernelError<R> = ScaleError<<R as Resampler>::Error, TransferErrorOf<R>>;

/// Result of a composed `scale`/`descale` call.
pub type KernelResult<R> = Result<<R as Resampler>::Frame, KernelError<R>>;

/// The primitive operations a concrete kernel supplies.
///
/// `resample` maps a source window onto a target resolution; `invert`
/// reverses a previous resample. The `_linear` variants default to the
/// plain primitives; a kernel that truly specializes them must also report
/// so through [`linear_support`](Self::linear_support), which is what opts
/// the specialization into the composed path.
pub trait Resampler {
    /// Frame type moved through the pipeline.
    type Frame: VideoFrame + LinearLight;
    /// Primitive failure.
    type Error;

    /// Resample a source window onto the target resolution.
    fn resample(&self, frame: Self::Frame, args: &ResampleArgs)
    -> Result<Self::Frame, Self::Error>;

    /// Invert a previous resample back to the target (native) resolution.
    fn invert(&self, frame: Self::Frame, args: &ResampleArgs) -> Result<Self::Frame, Self::Error>;

    /// Which operations the `_linear` variants truly specialize.
    fn linear_support(&self) -> LinearSupport {
        LinearSupport::NONE
    }

    /// Instance-baked linear-light defaults.
    fn linear_config(&self) -> LinearConfig {
        LinearConfig::default()
    }

    /// Linear-space resample specialization.
    fn resample_linear(
        &self,
        frame: Self::Frame,
        args: &ResampleArgs,
    ) -> Result<Self::Frame, Self::Error> {
        self.resample(frame, args)
    }

    /// Linear-space invert specialization.
    fn invert_linear(
        &self,
        frame: Self::Frame,
        args: &ResampleArgs,
    ) -> Result<Self::Frame, Self::Error> {
        self.invert(frame, args)
    }
}

/// Decide whether the linear scope runs and with which sigmoid.
///
/// Instance-baked sigmoid replaces the call's value; instance-baked linear
/// OR-combines with the call's flag; an active sigmoid forces linear; a
/// specialized operation forces the scope even when linear was not
/// requested.
fn effective_linear(
    config: LinearConfig,
    linear: bool,
    sigmoid: Sigmoid,
    specialized: bool,
) -> Option<Sigmoid> {
    let sigmoid = config.sigmoid.unwrap_or(sigmoid);
    let linear = config.linear.unwrap_or(false) || linear || sigmoid.is_active();
    (linear || specialized).then_some(sigmoid)
}

fn scale_inner<R: Resampler + ?Sized>(
    kernel: &R,
    frame: R::Frame,
    target: Resolution,
    options: &ScaleOptions,
    specialized: bool,
) -> Result<R::Frame, R::Error> {
    let source = frame.resolution();
    let resolved = params::resolve(options.sar, options.dar, options.keep_ar);

    let source_sar = resolved
        .sar
        .resolve_or(Sar::SQUARE)
        .or_else(|| frame.sar())
        .unwrap_or(Sar::SQUARE);

    let dar_forced = resolved.dar.is_explicit();
    let dar = match resolved.dar {
        AspectOverride::Auto => None,
        AspectOverride::Disabled => Some(source.ratio()),
        AspectOverride::Explicit(d) => Some(d.as_f64()),
    };

    let crop = options.crop.resolve(options.shift, source);
    let correction = correct(source, source_sar, target, crop, dar, dar_forced);

    let args = ResampleArgs {
        target,
        shift: correction.shift,
        crop: correction.crop,
    };
    let out = if specialized {
        kernel.resample_linear(frame, &args)?
    } else {
        kernel.resample(frame, &args)?
    };
    Ok(match correction.sar_tag {
        Some(tag) => out.with_sar(tag),
        None => out,
    })
}

/// Composed public surface, blanket-implemented for every [`Resampler`].
///
/// `scale` resolves aspect overrides, corrects the crop window, and runs
/// the primitive, all inside the linear scope when one is active. `descale`
/// carries shift and linearity only; aspect correction is a scale-side
/// concern.
pub trait Kernel: Resampler {
    /// Scale `frame` to `target` with aspect correction.
    fn scale(&self, frame: Self::Frame, target: Resolution, options: &ScaleOptions) -> KernelResult<Self> {
        let specialized = self.linear_support().scale;
        match effective_linear(
            self.linear_config(),
            options.linear,
            options.sigmoid,
            specialized,
        ) {
            None => scale_inner(self, frame, target, options, false).map_err(ScaleError::Resample),
            Some(sigmoid) => {
                let frame = frame.to_linear(sigmoid).map_err(ScaleError::Transfer)?;
                let out = scale_inner(self, frame, target, options, specialized)
                    .map_err(ScaleError::Resample)?;
                out.from_linear(sigmoid).map_err(ScaleError::Transfer)
            }
        }
    }

    /// Invert a previous scale, recovering the `target` native resolution.
    fn descale(
        &self,
        frame: Self::Frame,
        target: Resolution,
        options: &DescaleOptions,
    ) -> KernelResult<Self> {
        let specialized = self.linear_support().descale;
        let source = frame.resolution();
        let args = ResampleArgs {
            target,
            shift: options.shift,
            crop: CropWindow {
                top: options.shift.0,
                left: options.shift.1,
                width: source.width as f64,
                height: source.height as f64,
            },
        };
        match effective_linear(
            self.linear_config(),
            options.linear,
            options.sigmoid,
            specialized,
        ) {
            None => self.invert(frame, &args).map_err(ScaleError::Resample),
            Some(sigmoid) => {
                let frame = frame.to_linear(sigmoid).map_err(ScaleError::Transfer)?;
                let out = if specialized {
                    self.invert_linear(frame, &args)
                } else {
                    self.invert(frame, &args)
                }
                .map_err(ScaleError::Resample)?;
                out.from_linear(sigmoid).map_err(ScaleError::Transfer)
            }
        }
    }
}

impl<R: Resampler> Kernel for R {}
