//! Linear-light execution strategy types.
//!
//! [`LinearLight`] is the scoped-transform contract the composition invokes:
//! enter linear light, run the primitive, leave linear light. [`Sigmoid`]
//! selects optional sigmoid companding inside that scope, [`LinearConfig`]
//! bakes per-instance defaults, and [`LinearSupport`] is the capability
//! query kernels answer to opt their specialized linear operations in.

/// Sigmoid companding applied around a linear-light resample.
///
/// An active sigmoid forces the linear path; companding in a non-linear
/// representation is meaningless.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Sigmoid {
    /// No companding.
    #[default]
    Disabled,
    /// Companding with the conversion's default curve.
    Enabled,
    /// Companding with explicit curve bounds.
    Custom {
        /// Lower slope bound.
        low: f64,
        /// Upper slope bound.
        high: f64,
    },
}

impl Sigmoid {
    /// True unless disabled.
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

/// Per-instance defaults for the linear-light strategy.
///
/// A kernel instance constructed with baked settings reports them here;
/// a baked `sigmoid` replaces the per-call value, a baked `linear` is
/// OR-combined with the per-call flag.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LinearConfig {
    /// Baked linear-light request, `None` when the call decides.
    pub linear: Option<bool>,
    /// Baked sigmoid setting, `None` when the call decides.
    pub sigmoid: Option<Sigmoid>,
}

/// Which operations a kernel specializes for linear light.
///
/// The composition consults this instead of probing: a specialized
/// operation's existence forces the linear path for that operation even
/// when the caller did not request it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LinearSupport {
    /// `resample_linear` is a real specialization.
    pub scale: bool,
    /// `invert_linear` is a real specialization.
    pub descale: bool,
}

impl LinearSupport {
    /// No specialized operations.
    pub const NONE: LinearSupport = LinearSupport {
        scale: false,
        descale: false,
    };

    /// Scale-side specialization only.
    pub const SCALE: LinearSupport = LinearSupport {
        scale: true,
        descale: false,
    };

    /// Descale-side specialization only.
    pub const DESCALE: LinearSupport = LinearSupport {
        scale: false,
        descale: true,
    };

    /// Both operations specialized.
    pub const BOTH: LinearSupport = LinearSupport {
        scale: true,
        descale: true,
    };
}

/// Scoped linear-light transform on a frame.
///
/// The composition calls [`to_linear`](Self::to_linear) before the primitive
/// and [`from_linear`](Self::from_linear) on its output. Implementations
/// derive the working format from the frame itself; both directions receive
/// the same [`Sigmoid`] so companding applied on entry is undone on exit.
/// When the primitive fails between the two calls its error propagates
/// unchanged and the linearized temporary is simply dropped.
pub trait LinearLight: Sized {
    /// Conversion failure.
    type Error;

    /// Convert into linear light, optionally sigmoid-companded.
    fn to_linear(self, sigmoid: Sigmoid) -> Result<Self, Self::Error>;

    /// Convert back out of linear light, undoing the same companding.
    fn from_linear(self, sigmoid: Sigmoid) -> Result<Self, Self::Error>;
}
