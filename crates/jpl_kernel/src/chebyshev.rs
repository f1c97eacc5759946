//! Chebyshev series evaluation for SPK Type 2 records.
//!
//! A Type 2 record stores one Chebyshev expansion per Cartesian component.
//! Position comes from the series itself and velocity from its derivative,
//! so both are produced in one pass.

/// Evaluate `sum(c_k * T_k(s))` and `sum(c_k * T_k'(s))` together.
///
/// `s` is the normalised time in `[-1, 1]`. Uses the three-term
/// recurrences
///
/// ```text
/// T_k(s)  = 2s T_{k-1}(s) - T_{k-2}(s)
/// T_k'(s) = 2 T_{k-1}(s) + 2s T_{k-1}'(s) - T_{k-2}'(s)
/// ```
pub fn evaluate_with_rate(coeffs: &[f64], s: f64) -> (f64, f64) {
    match coeffs {
        [] => (0.0, 0.0),
        [c0] => (*c0, 0.0),
        [c0, c1, rest @ ..] => {
            let two_s = 2.0 * s;
            let (mut t_prev, mut t_curr) = (1.0, s);
            let (mut dt_prev, mut dt_curr) = (0.0, 1.0);
            let mut value = c0 + c1 * s;
            let mut rate = *c1;

            for &c in rest {
                let t_next = two_s * t_curr - t_prev;
                let dt_next = 2.0 * t_curr + two_s * dt_curr - dt_prev;
                value += c * t_next;
                rate += c * dt_next;
                t_prev = t_curr;
                t_curr = t_next;
                dt_prev = dt_curr;
                dt_curr = dt_next;
            }

            (value, rate)
        }
    }
}
