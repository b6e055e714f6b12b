// Integer counterparts of the float wrapping and snapping helpers.
//
// All on `i64`; narrower widths widen losslessly at the call site. These
// exist so grid and index arithmetic does not have to round-trip through
// floats (with one documented exception in `snapped`).

/// Integer modulus that shares the sign of `y` instead of the dividend's.
///
/// Always non-negative when `y > 0`. Panics on `y == 0`, like `%`.
pub fn posmod(x: i64, y: i64) -> i64 {
    let mut value = x % y;
    if (value < 0 && y > 0) || (value > 0 && y < 0) {
        value += y;
    }
    value
}

/// Wraps `value` into the half-open interval `[min, max)`.
///
/// An empty interval returns `min`.
pub fn wrap(value: i64, min: i64, max: i64) -> i64 {
    let diff = max - min;
    if diff == 0 {
        return min;
    }
    min + (((value - min) % diff) + diff) % diff
}

/// Rounds `x` to the nearest multiple of `step`; zero `step` is the
/// identity.
///
/// The quotient is rounded in `f64`, which is exact for magnitudes below
/// 2^53.
pub fn snapped(x: i64, step: i64) -> i64 {
    if step != 0 {
        (x as f64 / step as f64).round() as i64 * step
    } else {
        x
    }
}

/// Smallest power of two not less than `x`.
///
/// Values of `x` that are zero or negative yield 0, except `i64::MIN`,
/// which wraps back to itself — a quirk of the bit-smearing construction
/// that callers in range never observe.
pub fn nearest_power_of_2(x: i64) -> i64 {
    let mut x = x.wrapping_sub(1);
    x |= x >> 1;
    x |= x >> 2;
    x |= x >> 4;
    x |= x >> 8;
    x |= x >> 16;
    x |= x >> 32;
    x.wrapping_add(1)
}
