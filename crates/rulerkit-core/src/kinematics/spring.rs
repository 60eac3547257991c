//! Critically damped spring with a zero target.
//!
//! `x(t) = e^(-βt) (c1 + c2 t)` with `c2 = v0 + β c1`, where `c1` is the
//! initial displacement and `v0` the initial velocity. Unit mass,
//! stiffness 100, so `β = 10`.

/// Spring stiffness (unit mass).
pub const STIFFNESS: f64 = 100.0;

/// Half the damping coefficient; `sqrt(STIFFNESS)` for critical damping.
const BETA: f64 = 10.0;

/// Displacement (px) treated as "at rest" when sizing the animation.
const EPSILON: f64 = 0.1;

/// Displacement after `t` seconds.
pub fn value(t: f64, v0: f64, displacement: f64) -> f64 {
    let c1 = displacement;
    let c2 = v0 + BETA * c1;
    (-BETA * t).exp() * (c1 + c2 * t)
}

/// Velocity after `t` seconds.
pub fn velocity(t: f64, v0: f64, displacement: f64) -> f64 {
    let c1 = displacement;
    let c2 = v0 + BETA * c1;
    (-BETA * t).exp() * (c2 - BETA * (c1 + c2 * t))
}

/// How long the spring needs before its displacement is negligible.
pub fn duration(v0: f64, displacement: f64) -> f64 {
    if v0 == 0.0 && displacement == 0.0 {
        return 0.0;
    }
    let c1 = displacement.abs();
    let c2 = (v0 + BETA * displacement).abs();

    let from_displacement = if c1 > 0.0 {
        (2.0 * c1 / EPSILON).ln() / BETA
    } else {
        0.0
    };
    let from_velocity = if c2 > 0.0 {
        2.0 / BETA * (4.0 * c2 / (EPSILON * BETA)).ln()
    } else {
        0.0
    };

    from_displacement.max(from_velocity).max(0.0)
}
