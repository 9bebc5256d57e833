// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A height expressed relative to the host's parent rather than in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum RelativeSize {
    /// A percentage of the parent's height, e.g. `50.0` for half.
    Percent(f64),
    /// Fill whatever space the parent gives the host.
    #[default]
    Fill,
}

impl RelativeSize {
    /// The size as a fraction of the parent (`1.0` for [`RelativeSize::Fill`]).
    ///
    /// Negative and non-finite percentages resolve to `0.0`.
    #[must_use]
    pub fn fraction(self) -> f64 {
        match self {
            Self::Percent(p) if p.is_finite() && p > 0.0 => p / 100.0,
            Self::Percent(_) => 0.0,
            Self::Fill => 1.0,
        }
    }
}

/// How tall the scrollable host is.
///
/// A fixed height is used as the viewport extent directly. A relative height
/// is only known once the host has been laid out, so the tracker observes the
/// host's content box and uses whatever height it reports.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContainerHeight {
    /// A fixed height in logical pixels.
    Fixed(f64),
    /// A height resolved by the host's layout.
    Relative(RelativeSize),
}

impl ContainerHeight {
    /// Returns `true` if this height needs a resize subscription.
    #[must_use]
    pub fn is_observed(&self) -> bool {
        matches!(self, Self::Relative(_))
    }

    /// The fixed pixel height, if any. Negative and non-finite values read as `0.0`.
    #[must_use]
    pub fn fixed(&self) -> Option<f64> {
        match *self {
            Self::Fixed(px) if px.is_finite() && px > 0.0 => Some(px),
            Self::Fixed(_) => Some(0.0),
            Self::Relative(_) => None,
        }
    }
}

impl Default for ContainerHeight {
    fn default() -> Self {
        Self::Relative(RelativeSize::Fill)
    }
}

impl From<f64> for ContainerHeight {
    fn from(px: f64) -> Self {
        Self::Fixed(px)
    }
}

impl From<RelativeSize> for ContainerHeight {
    fn from(size: RelativeSize) -> Self {
        Self::Relative(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_relative_heights_are_observed() {
        assert!(!ContainerHeight::from(300.0).is_observed());
        assert!(ContainerHeight::from(RelativeSize::Percent(50.0)).is_observed());
        assert!(ContainerHeight::default().is_observed());
    }

    #[test]
    fn fixed_heights_are_sanitized() {
        assert_eq!(ContainerHeight::Fixed(300.0).fixed(), Some(300.0));
        assert_eq!(ContainerHeight::Fixed(-5.0).fixed(), Some(0.0));
        assert_eq!(ContainerHeight::Fixed(f64::NAN).fixed(), Some(0.0));
        assert_eq!(ContainerHeight::Relative(RelativeSize::Fill).fixed(), None);
    }

    #[test]
    fn relative_fraction() {
        assert_eq!(RelativeSize::Percent(50.0).fraction(), 0.5);
        assert_eq!(RelativeSize::Percent(-1.0).fraction(), 0.0);
        assert_eq!(RelativeSize::Fill.fraction(), 1.0);
    }
}
