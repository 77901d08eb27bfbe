use crate::pos::Pos;

/// Point on the edge `a -> b` where the linearly interpolated field value
/// equals `threshold`.
///
/// Returns `None` when the two values are equal or the crossing is not a
/// finite point. Callers drop the segment in that case.
pub fn interpolate(
    a: Pos,
    b: Pos,
    value_a: f64,
    value_b: f64,
    threshold: f64,
) -> Option<Pos> {
    debug_assert!(
        (value_a >= threshold) != (value_b >= threshold),
        "corners on the same side of the threshold: {value_a}, {value_b}"
    );

    let delta = value_b - value_a;
    if delta == 0. {
        tracing::trace!(?a, ?b, value_a, "flat edge");
        return None;
    }

    let t = (threshold - value_a) / delta;
    let p = a.lerp(b, t);
    if !p.is_finite() {
        tracing::trace!(?a, ?b, value_a, value_b, "non-finite crossing");
        return None;
    }

    Some(p)
}
