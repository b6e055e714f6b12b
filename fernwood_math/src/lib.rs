// fernwood_math — scalar math helpers for game code.
//
// Interpolation, easing, wrapping, approximate comparison, and audio unit
// conversion for `f32` and `f64`, written once and instantiated per width
// through the [`FloatExt`] extension trait. Every operation is a total
// function over its floating-point domain: no I/O, no allocation, no error
// types, no shared state. Degenerate inputs either hit an explicit guard
// with a documented fallback, or propagate NaN/infinity per IEEE-754 —
// which one applies is part of each operation's contract.
//
// Module overview:
// - `float.rs`: The `FloatExt` trait — rounding, interpolation (linear,
//               cubic, Bézier), easing, wrapping, angle helpers, decibel
//               conversion — plus the non-panicking `clamp` free function.
// - `int.rs`:   The `i64` counterparts — `posmod`, `wrap`, `snapped`,
//               `nearest_power_of_2`.
//
// Randomness lives in the companion crate `fernwood_prng`: sampling is a
// method on an explicitly owned generator, never a process-global source.
//
// Width discipline: formulas are expanded by macro per width so that `f32`
// math never takes a detour through `f64`. Constants are spelled at full
// precision and rounded once per width by the compiler.

pub mod float;
pub mod int;

pub use float::{FloatExt, clamp};
