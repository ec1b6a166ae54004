//! Aspect override resolution.
//!
//! Callers express SAR and DAR intent per axis as a tri-state: derive
//! automatically, pin to a fallback, or force an explicit value. [`resolve`]
//! normalizes a partial override set plus the `keep_ar` shorthand into
//! [`ResolvedAspectParams`] for the corrector.

use crate::aspect::{Dar, Sar};

/// Per-axis aspect override.
///
/// `Auto` derives the value from source or target at correction time,
/// `Disabled` pins the axis to a caller-chosen fallback, `Explicit` forces
/// a concrete value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AspectOverride<T> {
    /// Derive from source/target metadata at correction time.
    #[default]
    Auto,
    /// Ignore metadata; use the fallback value the resolving site supplies.
    Disabled,
    /// Use exactly this value.
    Explicit(T),
}

impl<T> AspectOverride<T> {
    /// Resolve against a fallback: `Auto` stays unset, `Disabled` takes the
    /// fallback, `Explicit` takes its value.
    pub fn resolve_or(self, fallback: T) -> Option<T> {
        match self {
            Self::Auto => None,
            Self::Disabled => Some(fallback),
            Self::Explicit(value) => Some(value),
        }
    }

    /// True only for `Explicit`.
    pub const fn is_explicit(&self) -> bool {
        matches!(self, Self::Explicit(_))
    }
}

impl<T> From<bool> for AspectOverride<T> {
    /// `true` means auto-derive, `false` means disable.
    fn from(enabled: bool) -> Self {
        if enabled { Self::Auto } else { Self::Disabled }
    }
}

impl From<Sar> for AspectOverride<Sar> {
    fn from(value: Sar) -> Self {
        Self::Explicit(value)
    }
}

impl From<Dar> for AspectOverride<Dar> {
    fn from(value: Dar) -> Self {
        Self::Explicit(value)
    }
}

/// Non-fatal condition noticed while resolving overrides.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResolveWarning {
    /// `keep_ar` was requested together with explicit values for both SAR
    /// and DAR; the explicit values win and `keep_ar` has no effect.
    KeepArIgnored,
}

/// Output of [`resolve`], consumed by the corrector.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResolvedAspectParams {
    /// Resolved SAR override.
    pub sar: AspectOverride<Sar>,
    /// Resolved DAR override.
    pub dar: AspectOverride<Dar>,
    /// Whether aspect preservation was requested.
    pub keep_ar: bool,
    /// Warning raised during resolution, if any.
    pub warning: Option<ResolveWarning>,
}

/// Normalize a partial override set.
///
/// An unset axis (`None`) defaults to the value of `keep_ar` itself, so
/// `keep_ar` is shorthand for "auto-derive both axes unless overridden".
/// Supplying explicit values for both axes together with `keep_ar = true`
/// is contradictory; the explicit values win, and the contradiction is
/// logged and recorded as a [`ResolveWarning`]. Never fails.
pub fn resolve(
    sar: Option<AspectOverride<Sar>>,
    dar: Option<AspectOverride<Dar>>,
    keep_ar: bool,
) -> ResolvedAspectParams {
    let mut warning = None;
    if keep_ar
        && let (Some(s), Some(d)) = (&sar, &dar)
        && s.is_explicit()
        && d.is_explicit()
    {
        tracing::warn!("keep_ar ignored: explicit sar and dar both supplied");
        warning = Some(ResolveWarning::KeepArIgnored);
    }
    ResolvedAspectParams {
        sar: sar.unwrap_or_else(|| AspectOverride::from(keep_ar)),
        dar: dar.unwrap_or_else(|| AspectOverride::from(keep_ar)),
        keep_ar,
        warning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspect::{Dar, Sar};

    // ───────────────────────── tri-state resolution ─────────────────────────

    #[test]
    fn auto_resolves_to_unset() {
        assert_eq!(AspectOverride::<Sar>::Auto.resolve_or(Sar::SQUARE), None);
    }

    #[test]
    fn disabled_resolves_to_fallback() {
        assert_eq!(
            AspectOverride::<Sar>::Disabled.resolve_or(Sar::SQUARE),
            Some(Sar::SQUARE)
        );
    }

    #[test]
    fn explicit_resolves_to_its_value() {
        let sar = Sar::new(8, 9).unwrap();
        assert_eq!(
            AspectOverride::Explicit(sar).resolve_or(Sar::SQUARE),
            Some(sar)
        );
    }

    #[test]
    fn bool_conversion() {
        assert_eq!(AspectOverride::<Sar>::from(true), AspectOverride::Auto);
        assert_eq!(AspectOverride::<Sar>::from(false), AspectOverride::Disabled);
    }

    // ───────────────────────── keep_ar defaulting ─────────────────────────

    #[test]
    fn unset_axes_follow_keep_ar_true() {
        let resolved = resolve(None, None, true);
        assert_eq!(resolved.sar, AspectOverride::Auto);
        assert_eq!(resolved.dar, AspectOverride::Auto);
        assert!(resolved.keep_ar);
        assert_eq!(resolved.warning, None);
    }

    #[test]
    fn unset_axes_follow_keep_ar_false() {
        let resolved = resolve(None, None, false);
        assert_eq!(resolved.sar, AspectOverride::Disabled);
        assert_eq!(resolved.dar, AspectOverride::Disabled);
        assert!(!resolved.keep_ar);
    }

    #[test]
    fn set_axis_is_untouched() {
        let dar = Dar::new(16, 9).unwrap();
        let resolved = resolve(None, Some(AspectOverride::Explicit(dar)), false);
        assert_eq!(resolved.sar, AspectOverride::Disabled);
        assert_eq!(resolved.dar, AspectOverride::Explicit(dar));
    }

    // ───────────────────────── contradiction warning ─────────────────────────

    #[test]
    fn contradictory_request_warns_and_keeps_explicit_values() {
        let sar = Sar::new(8, 9).unwrap();
        let dar = Dar::new(4, 3).unwrap();
        let resolved = resolve(
            Some(AspectOverride::Explicit(sar)),
            Some(AspectOverride::Explicit(dar)),
            true,
        );
        assert_eq!(resolved.warning, Some(ResolveWarning::KeepArIgnored));
        assert_eq!(resolved.sar, AspectOverride::Explicit(sar));
        assert_eq!(resolved.dar, AspectOverride::Explicit(dar));
    }

    #[test]
    fn single_explicit_axis_does_not_warn() {
        let dar = Dar::new(16, 9).unwrap();
        let resolved = resolve(None, Some(AspectOverride::Explicit(dar)), true);
        assert_eq!(resolved.warning, None);
    }

    #[test]
    fn no_warning_without_keep_ar() {
        let sar = Sar::new(8, 9).unwrap();
        let dar = Dar::new(4, 3).unwrap();
        let resolved = resolve(
            Some(AspectOverride::Explicit(sar)),
            Some(AspectOverride::Explicit(dar)),
            false,
        );
        assert_eq!(resolved.warning, None);
    }
}
