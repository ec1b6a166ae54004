//! Aspect-ratio correction and linear-light composition for pluggable video
//! resampling kernels.
//!
//! Pure geometry and composition — no pixel operations, `no_std` compatible
//! core. The resampling math and the color-space conversion live behind the
//! [`Resampler`] and [`LinearLight`] traits; this crate decides *what* they
//! are asked to do.
//!
//! # Modules
//!
//! - [`aspect`] — SAR/DAR rationals, resolutions, crop windows
//! - [`params`] — tri-state aspect overrides and the `keep_ar` shorthand
//! - [`correct`] — the center-crop aspect correction geometry
//! - [`linear`] — linear-light strategy types and the scoped-transform trait
//! - [`frame`] — the frame-metadata contract
//! - [`kernel`] — the composed `scale`/`descale` surface
//! - [`registry`] — shared default kernel instances (std only)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod aspect;
pub mod correct;
pub mod frame;
pub mod kernel;
pub mod linear;
pub mod params;
#[cfg(feature = "std")]
pub mod registry;

// Re-exports: core types from each module
pub use aspect::{AspectError, CropSpec, CropWindow, Dar, Resolution, Sar};
pub use correct::{Correction, DAR_EPSILON, correct};
pub use frame::VideoFrame;
pub use kernel::{
    DescaleOptions, Kernel, KernelError, KernelResult, ResampleArgs, Resampler, ScaleError,
    ScaleOptions,
};
pub use linear::{LinearConfig, LinearLight, LinearSupport, Sigmoid};
pub use params::{AspectOverride, ResolveWarning, ResolvedAspectParams, resolve};
#[cfg(feature = "std")]
pub use registry::default_instance;
