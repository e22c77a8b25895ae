/// Blend coefficients for cubic interpolation between four neighbouring
/// points of an oversampled filter table.
///
/// These are not the textbook cubic-spline weights; they are MMSE-optimal
/// when the table holds a sinc. The third coefficient is derived from the
/// other three so the four always sum to exactly one.
#[inline]
pub fn cubic_coef(frac: f32) -> [f32; 4] {
    let f2 = frac * frac;
    let f3 = f2 * frac;
    let c0 = -0.16667 * frac + 0.16667 * f3;
    let c1 = frac + 0.5 * f2 - 0.5 * f3;
    let c3 = -0.33333 * frac + 0.5 * f2 - 0.16667 * f3;
    let c2 = 1.0 - c0 - c1 - c3;
    [c0, c1, c2, c3]
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck::{quickcheck, TestResult};

    #[test]
    fn passes_through_at_integer_positions() {
        // At frac == 0 only the sample at the table offset itself remains.
        assert_eq!(cubic_coef(0.0), [0.0, 0.0, 1.0, 0.0]);
    }

    quickcheck! {
        fn coefficients_sum_to_one(frac: u16) -> TestResult {
            let frac = frac as f32 / u16::MAX as f32;
            let sum: f32 = cubic_coef(frac).iter().sum();
            TestResult::from_bool((sum - 1.0).abs() < 1e-6)
        }

        fn interpolates_constants_exactly(frac: u16, value: i16) -> TestResult {
            let frac = frac as f32 / u16::MAX as f32;
            let value = value as f32 / 256.0;
            let out: f32 = cubic_coef(frac).iter().map(|c| c * value).sum();
            TestResult::from_bool((out - value).abs() < 1e-4 * value.abs().max(1.0))
        }
    }
}
