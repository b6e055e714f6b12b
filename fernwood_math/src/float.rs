// Scalar float operations, generic over the working width.
//
// The [`FloatExt`] trait is sealed and implemented for exactly `f32` and
// `f64` through one macro, so each formula is written once but compiled
// with per-width literals and per-width intrinsics. Callers either use the
// methods directly on a concrete float, or write functions generic over
// `T: FloatExt`.
//
// Error strategy (there is no error type):
// - Guarded: `snapped`, `smoothstep`, `wrap`, `pingpong`, and the time
//   ratios inside `cubic_interpolate_in_time` detect a zero or near-zero
//   denominator and substitute a documented fallback.
// - Unguarded: `inverse_lerp` with `from == to`, or `%` with a zero
//   divisor, propagate ±infinity or NaN per IEEE-754. Adding guards there
//   would change results for callers that rely on the raw arithmetic.
// - Clamped: `ease` normalizes its progress input to [0, 1] before use.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Scalar math operations shared by `f32` and `f64`.
///
/// Sealed: the two implementations are generated by macro and no further
/// ones are possible. Weights and curve parameters take the same width as
/// the value — there is no implicit widening anywhere in the trait.
pub trait FloatExt:
    sealed::Sealed
    + Copy
    + Debug
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
{
    /// Tolerance used by [`approx_eq`](FloatExt::approx_eq) and
    /// [`is_zero_approx`](FloatExt::is_zero_approx).
    const CMP_EPSILON: Self;

    /// IEEE-754 positive infinity in this width.
    const INF: Self;

    /// Archimedes' constant.
    const PI: Self;

    /// One full turn in radians, `2 * PI`.
    const TAU: Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Rounds upward, toward positive infinity.
    fn ceil(self) -> Self;

    /// Rounds downward, toward negative infinity.
    fn floor(self) -> Self;

    /// Rounds to the nearest whole number, halfway cases away from zero.
    fn round(self) -> Self;

    /// 1 for positive values, -1 for negative values, 0 for zero.
    ///
    /// NaN yields 0: it compares false against both signs.
    fn sign(self) -> Self;

    /// Rounds to the nearest multiple of `step`.
    ///
    /// A `step` of zero returns the value unchanged. Also usable to round
    /// to a fixed number of decimals (`x.snapped(0.01)`).
    fn snapped(self, step: Self) -> Self;

    /// Floating-point modulus that shares the sign of `y` instead of the
    /// dividend's.
    ///
    /// Always non-negative when `y > 0`, for any sign of `self`. The plain
    /// remainder (sign of the dividend, `fmod` semantics) is Rust's native
    /// `%` operator; this crate does not wrap it.
    fn fposmod(self, y: Self) -> Self;

    /// Linear interpolation from `self` to `to` by `weight`.
    ///
    /// `weight` is not clamped: values outside [0, 1] extrapolate. The
    /// inverse operation is [`inverse_lerp`](FloatExt::inverse_lerp).
    fn lerp(self, to: Self, weight: Self) -> Self;

    /// The interpolation factor that [`lerp`](FloatExt::lerp) would need to
    /// produce `weight` over the range `self..to`.
    ///
    /// Unguarded: `self == to` divides by zero and propagates ±infinity or
    /// NaN. Results outside [0, 1] indicate `weight` lies outside the range.
    fn inverse_lerp(self, to: Self, weight: Self) -> Self;

    /// Maps `self` from the range `(istart, istop)` to `(ostart, ostop)`.
    ///
    /// Composes `inverse_lerp` and `lerp`, and extrapolates like both.
    fn remap(self, istart: Self, istop: Self, ostart: Self, ostop: Self) -> Self;

    /// Catmull-Rom cubic interpolation from `self` to `to`, shaped by the
    /// neighboring control values `pre` and `post`.
    fn cubic_interpolate(self, to: Self, pre: Self, post: Self, weight: Self) -> Self;

    /// Time-parameterized cubic interpolation (Barry-Goldman).
    ///
    /// `pre_t`, `to_t`, and `post_t` are the knot times of `pre`, `to`, and
    /// `post` relative to `self` at time zero; uneven spacing produces a
    /// smoother curve than [`cubic_interpolate`](FloatExt::cubic_interpolate).
    /// Each internal time ratio substitutes a fixed fallback fraction when
    /// its denominator is exactly zero, so coinciding knot times never
    /// produce NaN.
    #[allow(clippy::too_many_arguments)]
    fn cubic_interpolate_in_time(
        self,
        to: Self,
        pre: Self,
        post: Self,
        weight: Self,
        to_t: Self,
        pre_t: Self,
        post_t: Self,
    ) -> Self;

    /// Point at `t` on the cubic Bézier curve from `self` to `end`, shaped
    /// by `control_1` and `control_2`.
    ///
    /// Evaluated through the Bernstein-basis expansion; `t` outside [0, 1]
    /// extrapolates.
    fn bezier_interpolate(self, control_1: Self, control_2: Self, end: Self, t: Self) -> Self;

    /// Derivative at `t` of the same cubic Bézier curve, for tangent and
    /// velocity queries.
    fn bezier_derivative(self, control_1: Self, control_2: Self, end: Self, t: Self) -> Self;

    /// Exponent-based easing of a progress value.
    ///
    /// `self` is clamped to [0, 1] first, then shaped by `curve`:
    /// - `0 < curve < 1`: ease-out.
    /// - `curve >= 1`: ease-in (`curve == 1` is linear).
    /// - `curve < 0`: ease in-out, piecewise at 0.5 with exponent `|curve|`.
    /// - `curve == 0`: constant 0.
    fn ease(self, curve: Self) -> Self;

    /// Cubic Hermite smoothstep of `x` across the edges `self..to`.
    ///
    /// Returns 0 below the lower edge, 1 above the upper edge, and an
    /// S-curve in between. If the edges are approximately equal the lower
    /// edge is returned unchanged, avoiding a near-zero division.
    fn smoothstep(self, to: Self, x: Self) -> Self;

    /// Steps from `self` toward `to` by at most `delta`, snapping exactly
    /// to `to` when the remaining distance is within `delta`.
    ///
    /// A negative `delta` moves away from `to` instead.
    fn move_toward(self, to: Self, delta: Self) -> Self;

    /// Wraps into the half-open interval `[min, max)`.
    ///
    /// If the interval is approximately empty, returns `min`. A result that
    /// lands approximately on `max` through float rounding is snapped to
    /// `min`, preserving the half-open invariant.
    fn wrap(self, min: Self, max: Self) -> Self;

    /// Triangle-wave reflection of `self` into `[0, length]`.
    ///
    /// Returns 0 when `length` is zero; a negative `length` reflects into
    /// the corresponding positive range.
    fn pingpong(self, length: Self) -> Self;

    /// Approximate equality with a tolerance that scales with magnitude.
    ///
    /// Exact equality short-circuits first, which makes equal infinities
    /// compare equal. Otherwise the tolerance is
    /// `max(CMP_EPSILON, CMP_EPSILON * |self|)`: relative for large values,
    /// absolute near zero.
    fn approx_eq(self, other: Self) -> bool;

    /// `|self| < CMP_EPSILON`. Cheaper than comparing against zero with
    /// [`approx_eq`](FloatExt::approx_eq).
    fn is_zero_approx(self) -> bool;

    /// Neither NaN nor infinite.
    fn is_finite(self) -> bool;

    /// Positive or negative infinity.
    fn is_infinite(self) -> bool;

    /// Not a number.
    fn is_nan(self) -> bool;

    /// Converts linear audio energy to decibels.
    ///
    /// The scale factor is `20 / ln 10`. An energy of zero yields negative
    /// infinity and negative energies yield NaN, per the logarithm.
    fn linear_to_db(self) -> Self;

    /// Converts decibels to linear audio energy. Inverse of
    /// [`linear_to_db`](FloatExt::linear_to_db); 0 dB is unity gain.
    fn db_to_linear(self) -> Self;

    /// Degrees to radians.
    fn deg_to_rad(self) -> Self;

    /// Radians to degrees.
    fn rad_to_deg(self) -> Self;

    /// Signed difference from `self` to the angle `to`, in `[-PI, PI]`.
    ///
    /// When the angles are exactly opposite, returns `-PI` if `self` is
    /// smaller than `to` and `PI` otherwise.
    fn angle_difference(self, to: Self) -> Self;

    /// Linear interpolation between two angles in radians, along the
    /// shortest arc — correct when the angles wrap around `TAU`.
    fn lerp_angle(self, to: Self, weight: Self) -> Self;

    /// Rotates from `self` toward the angle `to` by at most `delta`
    /// radians, wrap-aware and never overshooting.
    ///
    /// A negative `delta` rotates away from `to`, stopping at the opposite
    /// angle (`PI` away) rather than winding further.
    fn rotate_toward(self, to: Self, delta: Self) -> Self;

    /// Position of the first significant digit after the decimal point,
    /// up to 9; whole numbers (and anything smaller than 1e-10) yield 0.
    fn step_decimals(self) -> usize;
}

/// Clamps `value` into `[min, max]`.
///
/// Generic over anything comparable, so it serves integers as well as
/// floats. If `min > max` the result is unspecified but no panic occurs —
/// unlike the inherent float `clamp`, which asserts its bounds.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

macro_rules! impl_float_ext {
    ($t:ty, $pi:expr, $tau:expr) => {
        impl FloatExt for $t {
            const CMP_EPSILON: $t = 0.00001;
            const INF: $t = <$t>::INFINITY;
            const PI: $t = $pi;
            const TAU: $t = $tau;

            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            fn ceil(self) -> Self {
                <$t>::ceil(self)
            }

            fn floor(self) -> Self {
                <$t>::floor(self)
            }

            fn round(self) -> Self {
                <$t>::round(self)
            }

            fn sign(self) -> Self {
                if self > 0.0 {
                    1.0
                } else if self < 0.0 {
                    -1.0
                } else {
                    0.0
                }
            }

            fn snapped(self, step: Self) -> Self {
                if step != 0.0 {
                    (self / step + 0.5).floor() * step
                } else {
                    self
                }
            }

            fn fposmod(self, y: Self) -> Self {
                let mut value = self % y;
                if (value < 0.0 && y > 0.0) || (value > 0.0 && y < 0.0) {
                    value += y;
                }
                // Flushes -0.0 to +0.0.
                value + 0.0
            }

            fn lerp(self, to: Self, weight: Self) -> Self {
                self + (to - self) * weight
            }

            fn inverse_lerp(self, to: Self, weight: Self) -> Self {
                (weight - self) / (to - self)
            }

            fn remap(self, istart: Self, istop: Self, ostart: Self, ostop: Self) -> Self {
                ostart.lerp(ostop, istart.inverse_lerp(istop, self))
            }

            fn cubic_interpolate(self, to: Self, pre: Self, post: Self, weight: Self) -> Self {
                0.5 * ((self * 2.0)
                    + (-pre + to) * weight
                    + (2.0 * pre - 5.0 * self + 4.0 * to - post) * (weight * weight)
                    + (-pre + 3.0 * self - 3.0 * to + post) * (weight * weight * weight))
            }

            #[allow(clippy::too_many_arguments)]
            fn cubic_interpolate_in_time(
                self,
                to: Self,
                pre: Self,
                post: Self,
                weight: Self,
                to_t: Self,
                pre_t: Self,
                post_t: Self,
            ) -> Self {
                // Barry-Goldman method. `lerp(0, to_t, weight)` reduces to
                // the product exactly.
                let t = to_t * weight;
                let a1 = pre.lerp(self, if pre_t == 0.0 {
                    0.0
                } else {
                    (t - pre_t) / -pre_t
                });
                let a2 = self.lerp(to, if to_t == 0.0 { 0.5 } else { t / to_t });
                let a3 = to.lerp(post, if post_t - to_t == 0.0 {
                    1.0
                } else {
                    (t - to_t) / (post_t - to_t)
                });
                let b1 = a1.lerp(a2, if to_t - pre_t == 0.0 {
                    0.0
                } else {
                    (t - pre_t) / (to_t - pre_t)
                });
                let b2 = a2.lerp(a3, if post_t == 0.0 { 1.0 } else { t / post_t });
                b1.lerp(b2, if to_t == 0.0 { 0.5 } else { t / to_t })
            }

            fn bezier_interpolate(
                self,
                control_1: Self,
                control_2: Self,
                end: Self,
                t: Self,
            ) -> Self {
                // Bernstein basis, expanded.
                let omt = 1.0 - t;
                let omt2 = omt * omt;
                let omt3 = omt2 * omt;
                let t2 = t * t;
                let t3 = t2 * t;
                self * omt3 + control_1 * omt2 * t * 3.0 + control_2 * omt * t2 * 3.0 + end * t3
            }

            fn bezier_derivative(
                self,
                control_1: Self,
                control_2: Self,
                end: Self,
                t: Self,
            ) -> Self {
                let omt = 1.0 - t;
                let omt2 = omt * omt;
                let t2 = t * t;
                (control_1 - self) * 3.0 * omt2
                    + (control_2 - control_1) * 6.0 * omt * t
                    + (end - control_2) * 3.0 * t2
            }

            fn ease(self, curve: Self) -> Self {
                let x = if self < 0.0 {
                    0.0
                } else if self > 1.0 {
                    1.0
                } else {
                    self
                };
                if curve > 0.0 {
                    if curve < 1.0 {
                        1.0 - (1.0 - x).powf(1.0 / curve)
                    } else {
                        x.powf(curve)
                    }
                } else if curve < 0.0 {
                    // Ease in-out: each half re-based to [0, 1].
                    if x < 0.5 {
                        (x * 2.0).powf(-curve) * 0.5
                    } else {
                        (1.0 - (1.0 - (x - 0.5) * 2.0).powf(-curve)) * 0.5 + 0.5
                    }
                } else {
                    // No ease.
                    0.0
                }
            }

            fn smoothstep(self, to: Self, x: Self) -> Self {
                if self.approx_eq(to) {
                    return self;
                }
                let s = ((x - self) / (to - self)).clamp(0.0, 1.0);
                s * s * (3.0 - 2.0 * s)
            }

            fn move_toward(self, to: Self, delta: Self) -> Self {
                if (to - self).abs() <= delta {
                    to
                } else {
                    self + (to - self).sign() * delta
                }
            }

            fn wrap(self, min: Self, max: Self) -> Self {
                let diff = max - min;
                if diff.is_zero_approx() {
                    return min;
                }
                let result = self - diff * ((self - min) / diff).floor();
                if result.approx_eq(max) {
                    min
                } else {
                    result
                }
            }

            fn pingpong(self, length: Self) -> Self {
                if length == 0.0 {
                    return 0.0;
                }
                let cycle = (self - length) / (length * 2.0);
                ((cycle - cycle.floor()) * length * 2.0 - length).abs()
            }

            fn approx_eq(self, other: Self) -> bool {
                // Exact equality first, required to handle infinities.
                if self == other {
                    return true;
                }
                let tolerance = (Self::CMP_EPSILON * self.abs()).max(Self::CMP_EPSILON);
                (self - other).abs() < tolerance
            }

            fn is_zero_approx(self) -> bool {
                self.abs() < Self::CMP_EPSILON
            }

            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }

            fn is_infinite(self) -> bool {
                <$t>::is_infinite(self)
            }

            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }

            fn linear_to_db(self) -> Self {
                // 20 / ln 10.
                self.ln() * 8.6858896380650365530225783783321
            }

            fn db_to_linear(self) -> Self {
                // ln 10 / 20.
                (self * 0.11512925464970228420089957273422).exp()
            }

            fn deg_to_rad(self) -> Self {
                self * (Self::PI / 180.0)
            }

            fn rad_to_deg(self) -> Self {
                self * (180.0 / Self::PI)
            }

            fn angle_difference(self, to: Self) -> Self {
                let difference = (to - self) % Self::TAU;
                (2.0 * difference) % Self::TAU - difference
            }

            fn lerp_angle(self, to: Self, weight: Self) -> Self {
                self + self.angle_difference(to) * weight
            }

            fn rotate_toward(self, to: Self, delta: Self) -> Self {
                let difference = self.angle_difference(to);
                let abs_difference = difference.abs();
                // With a negative delta, stop at the opposite angle: PI is
                // the largest possible angular distance.
                self + clamp(delta, abs_difference - Self::PI, abs_difference)
                    * if difference >= 0.0 { 1.0 } else { -1.0 }
            }

            fn step_decimals(self) -> usize {
                // Thresholds compensate for accumulated float error, hence
                // 0.9999 rather than 1.0.
                const SD: [$t; 10] = [
                    0.9999,
                    0.09999,
                    0.009999,
                    0.0009999,
                    0.00009999,
                    0.000009999,
                    0.0000009999,
                    0.00000009999,
                    0.000000009999,
                    0.0000000009999,
                ];
                let abs = self.abs();
                let decs = abs - (abs as i64) as $t;
                for (i, threshold) in SD.iter().enumerate() {
                    if decs >= *threshold {
                        return i;
                    }
                }
                0
            }
        }
    };
}

impl_float_ext!(f32, std::f32::consts::PI, std::f32::consts::TAU);
impl_float_ext!(f64, std::f64::consts::PI, std::f64::consts::TAU);
