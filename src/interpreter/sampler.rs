use ordered_float::OrderedFloat;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::core::{Environment, EvalResult},
    util::num::usize_to_f64_checked,
};

/// Smallest step, relative to `f64::EPSILON` at the bounds' magnitude, that
/// keeps rounded sample points strictly increasing.
const MIN_STEP_IN_EPSILONS: f64 = 4.0;

/// The interval and resolution a function is sampled at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRange {
    /// Lower bound, sampled exactly.
    pub x_min: f64,
    /// Upper bound, sampled up to rounding.
    pub x_max: f64,
    /// Number of evenly spaced sample points, at least 2.
    pub count: usize,
}

impl Default for PlotRange {
    fn default() -> Self {
        Self { x_min: -10.0,
               x_max: 10.0,
               count: 500, }
    }
}

impl PlotRange {
    /// Checks that the range can be sampled.
    ///
    /// # Errors
    /// `InvalidRange` when a bound is not finite, when `x_min >= x_max`,
    /// when fewer than two points are requested, or when the points would be
    /// too close together to tell apart.
    ///
    /// # Example
    /// ```
    /// use plotcalc::PlotRange;
    ///
    /// let range = PlotRange { x_min: 1e16,
    ///                         x_max: 1e16 + 8.0,
    ///                         count: 100 };
    /// assert!(range.validate().is_err());
    /// ```
    pub fn validate(&self) -> EvalResult<()> {
        let invalid = |details: String| Err(RuntimeError::InvalidRange { details });

        if !self.x_min.is_finite() || !self.x_max.is_finite() {
            return invalid(format!("bounds must be finite, got [{}, {}]", self.x_min, self.x_max));
        }
        if self.x_min >= self.x_max {
            return invalid(format!("x_min ({}) must be less than x_max ({})",
                                   self.x_min, self.x_max));
        }
        if self.count < 2 {
            return invalid(format!("at least 2 points are needed, got {}", self.count));
        }
        self.step().map(|_| ())
    }

    /// Distance between neighbouring sample points.
    ///
    /// The step must stay clear of the rounding error of `x_min + i * step`
    /// at the bounds' magnitude, so that every sampled `x` is distinct.
    fn step(&self) -> EvalResult<f64> {
        let intervals = usize_to_f64_checked(self.count - 1, RuntimeError::InvalidRange {
            details: format!("too many points: {}", self.count),
        })?;
        let step = (self.x_max - self.x_min) / intervals;
        if !step.is_finite() {
            return Err(RuntimeError::InvalidRange { details: format!("[{}, {}] is too wide",
                                                                     self.x_min, self.x_max) });
        }

        let magnitude = self.x_min.abs().max(self.x_max.abs());
        if step <= MIN_STEP_IN_EPSILONS * magnitude * f64::EPSILON {
            return Err(RuntimeError::InvalidRange { details: format!("[{}, {}] is too narrow for {} distinct points",
                                                                     self.x_min, self.x_max, self.count) });
        }
        Ok(step)
    }
}

/// An ordered series of plottable points.
///
/// Points are in strictly ascending `x` order and every coordinate is finite;
/// the sampler is the only producer, and it never stores a NaN, an infinity
/// or a repeated `x`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotSeries {
    points: Vec<(f64, f64)>,
}

impl PlotSeries {
    /// Appends a point; non-finite points are refused and reported as
    /// `false`.
    fn push(&mut self, x: f64, y: f64) -> bool {
        if x.is_finite() && y.is_finite() {
            self.points.push((x, y));
            true
        } else {
            false
        }
    }

    /// The `(x, y)` pairs, in ascending `x` order.
    #[must_use]
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Just the `x` coordinates.
    #[must_use]
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|&(x, _)| x).collect()
    }

    /// Just the `y` coordinates.
    #[must_use]
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|&(_, y)| y).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest and largest `y`, for scaling a plot's vertical axis.
    #[must_use]
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        let ys = self.points.iter().map(|&(_, y)| OrderedFloat(y));
        let min = ys.clone().min()?;
        let max = ys.max()?;
        Some((min.into_inner(), max.into_inner()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (f64, f64)> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a PlotSeries {
    type IntoIter = std::slice::Iter<'a, (f64, f64)>;
    type Item = &'a (f64, f64);

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for PlotSeries {
    type IntoIter = std::vec::IntoIter<(f64, f64)>;
    type Item = (f64, f64);

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

/// Evaluates `expr` at `range.count` evenly spaced points of
/// `[range.x_min, range.x_max]`.
///
/// Point `i` is `x_min + i * step` with `step = (x_max - x_min) / (count - 1)`.
/// Each point is evaluated in a fresh copy of `env` with `var_name` bound to
/// it. A point whose evaluation fails (a pole, a domain error, a division by
/// zero) is skipped; the rest of the curve is still produced.
///
/// # Errors
/// - `InvalidRange` if the range is rejected by [`PlotRange::validate`].
/// - `EmptyDomain` if no point evaluated successfully.
pub fn sample(expr: &Expr,
              env: &Environment,
              var_name: &str,
              range: &PlotRange)
              -> EvalResult<PlotSeries> {
    range.validate()?;
    let step = range.step()?;

    let mut series = PlotSeries::default();
    let mut skipped = 0usize;

    let mut index = 0.0;
    for _ in 0..range.count {
        let x = range.x_min + index * step;
        index += 1.0;
        match env.clone().with_variable(var_name, x).eval(expr) {
            Ok(y) if series.push(x, y) => {},
            Ok(y) => {
                log::trace!("skipping non-finite point ({x}, {y})");
                skipped += 1;
            },
            Err(e) => {
                log::trace!("skipping x = {x}: {e}");
                skipped += 1;
            },
        }
    }

    log::debug!("sampled {} points over [{}, {}], skipped {skipped}",
                series.len(),
                range.x_min,
                range.x_max);

    if series.is_empty() {
        return Err(RuntimeError::EmptyDomain { x_min: range.x_min,
                                               x_max: range.x_max, });
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ErrorKind,
        interpreter::{
            lexer::tokenize,
            normalizer::{Flavor, normalize},
            parser::core::parse,
        },
    };

    fn compile(text: &str) -> Expr {
        let canonical = normalize(text, Flavor::Grapher).expect("normalize");
        parse(&tokenize(&canonical).expect("tokenize"), canonical.len()).expect("parse")
    }

    fn sample_grapher(text: &str, x_min: f64, x_max: f64, count: usize) -> EvalResult<PlotSeries> {
        sample(&compile(text),
               &Environment::grapher(),
               "x",
               &PlotRange { x_min,
                            x_max,
                            count })
    }

    #[test]
    fn evenly_spaced_points_in_ascending_order() {
        let series = sample_grapher("x^2", -5.0, 5.0, 11).unwrap();
        assert_eq!(series.len(), 11);
        assert_eq!(series.points()[0], (-5.0, 25.0));
        assert_eq!(series.points()[5], (0.0, 0.0));
        assert_eq!(series.points()[10], (5.0, 25.0));
        assert!(series.xs().windows(2).all(|w| w[0] < w[1]));
        assert_eq!(series.y_bounds(), Some((0.0, 25.0)));
    }

    #[test]
    fn undefined_points_are_skipped() {
        let series = sample_grapher("sqrt(x)", -2.0, 2.0, 5).unwrap();
        assert_eq!(series.xs(), vec![0.0, 1.0, 2.0]);

        let series = sample_grapher("1/x", -1.0, 1.0, 3).unwrap();
        assert_eq!(series.points(), &[(-1.0, -1.0), (1.0, 1.0)]);
    }

    #[test]
    fn nothing_evaluable_is_an_empty_domain() {
        let err = sample_grapher("sqrt(x)", -10.0, -1.0, 10).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyDomain);
    }

    #[test]
    fn invalid_ranges_are_rejected() {
        let kind = |x_min, x_max, count| sample_grapher("x", x_min, x_max, count).unwrap_err().kind();
        assert_eq!(kind(1.0, 1.0, 10), ErrorKind::InvalidRange);
        assert_eq!(kind(2.0, 1.0, 10), ErrorKind::InvalidRange);
        assert_eq!(kind(0.0, 1.0, 1), ErrorKind::InvalidRange);
        assert_eq!(kind(f64::NEG_INFINITY, 1.0, 10), ErrorKind::InvalidRange);
        assert_eq!(kind(-f64::MAX, f64::MAX, 10), ErrorKind::InvalidRange);
    }

    #[test]
    fn points_too_close_to_tell_apart_are_rejected() {
        let err = sample_grapher("x", 1e16, 1e16 + 8.0, 100).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);

        let err = sample_grapher("x", 0.0, 5e-324, 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
    }

    #[test]
    fn narrow_ranges_away_from_the_limit_keep_distinct_points() {
        let series = sample_grapher("x", 1e6, 1e6 + 1e-6, 100).unwrap();
        assert_eq!(series.len(), 100);
        assert!(series.xs().windows(2).all(|w| w[0] < w[1]));

        let series = sample_grapher("x", 1e-300, 2e-300, 50).unwrap();
        assert!(series.xs().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn default_range_matches_grapher_defaults() {
        let range = PlotRange::default();
        assert_eq!((range.x_min, range.x_max, range.count), (-10.0, 10.0, 500));
        assert_eq!(range.validate(), Ok(()));
    }

    #[test]
    fn caller_environment_is_untouched() {
        let env = Environment::grapher();
        sample(&compile("x"), &env, "x", &PlotRange::default()).unwrap();
        assert_eq!(env, Environment::grapher());
    }
}
