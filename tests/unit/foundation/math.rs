use super::*;

#[test]
fn floor_div_rounds_toward_negative_infinity() {
    assert_eq!(floor_div(7, 2), 3);
    assert_eq!(floor_div(-7, 2), -4);
    assert_eq!(floor_div(-6, 3), -2);
    assert_eq!(floor_div(0, 5), 0);
}

#[test]
fn mean3_never_overflows() {
    assert_eq!(mean3_u8(255, 255, 255), 255);
    assert_eq!(mean3_u8(0, 0, 2), 0);
}

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(128, 255), 128);
    assert_eq!(mul_div255_u16(0, 200), 0);
}

#[test]
fn trunc_rounds_toward_zero() {
    assert_eq!(trunc_i64(2.9), 2);
    assert_eq!(trunc_i64(-2.9), -2);
}
