/// Floor division for a positive divisor (rounds toward negative infinity).
pub(crate) fn floor_div(num: i64, den: i64) -> i64 {
    debug_assert!(den > 0);
    num.div_euclid(den)
}

/// Truncating mean of three 8-bit channels.
pub(crate) fn mean3_u8(a: u8, b: u8, c: u8) -> u8 {
    ((u16::from(a) + u16::from(b) + u16::from(c)) / 3) as u8
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

/// `trunc(v)` as an integer pixel coordinate, saturating at the `i64` range.
pub(crate) fn trunc_i64(v: f64) -> i64 {
    v.trunc() as i64
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
