use crate::DfError;

/// Floating point type used throughout the system.
pub type Real = f64;

/// One tolerance for everything.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, DfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(DfError::NonFinite { what, value: v })
    }
}

/// True when every value in the slice is a number (not NaN).
///
/// Damage series containing NaN make the failure time unknowable, so
/// downstream derivations bail out on the first undefined entry.
pub fn all_defined(values: &[Real]) -> bool {
    values.iter().all(|v| !v.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn all_defined_flags_nan_anywhere() {
        assert!(all_defined(&[0.0, 0.5, 1.0]));
        assert!(!all_defined(&[0.5, Real::NAN, 0.9]));
        assert!(all_defined(&[]));
        // Infinities are defined, just not finite.
        assert!(all_defined(&[Real::INFINITY]));
    }

    proptest::proptest! {
        #[test]
        fn nearly_equal_is_symmetric(a in -1e6_f64..1e6, b in -1e6_f64..1e6) {
            let tol = Tolerances::default();
            proptest::prop_assert_eq!(nearly_equal(a, b, tol), nearly_equal(b, a, tol));
        }

        #[test]
        fn finite_values_pass_ensure_finite(v in -1e12_f64..1e12) {
            proptest::prop_assert!(ensure_finite(v, "value").is_ok());
        }
    }
}
