//! Scalar trait shared by the real and complex sparse array variants.

use std::fmt::Debug;

use num_complex::Complex64;
use num_traits::Zero;

/// Trait for scalar entry types of a sparse array.
///
/// Dense expansion only needs an additive identity (the fill value),
/// copyability and equality. `from_f64` lets generic code produce
/// values for either instantiation.
pub trait Scalar:
    Clone + Copy + Debug + Default + PartialEq + Zero + Send + Sync + 'static
{
    /// Create a scalar from f64.
    fn from_f64(val: f64) -> Self;

    /// Check if this type is complex.
    fn is_complex_type() -> bool;
}

impl Scalar for f64 {
    #[inline]
    fn from_f64(val: f64) -> Self {
        val
    }

    #[inline]
    fn is_complex_type() -> bool {
        false
    }
}

impl Scalar for Complex64 {
    #[inline]
    fn from_f64(val: f64) -> Self {
        Complex64::new(val, 0.0)
    }

    #[inline]
    fn is_complex_type() -> bool {
        true
    }
}

/// Macro to generate f64 and Complex64 test variants from a generic test function.
///
/// # Example
///
/// ```ignore
/// fn test_operation_generic<T: Scalar>() {
///     // test implementation
/// }
///
/// manybody_sparse::scalar_tests!(test_operation, test_operation_generic);
/// // Generates:
/// // #[test] fn test_operation_f64() { test_operation_generic::<f64>(); }
/// // #[test] fn test_operation_c64() { test_operation_generic::<Complex64>(); }
/// ```
#[macro_export]
macro_rules! scalar_tests {
    ($name:ident, $test_fn:ident) => {
        paste::paste! {
            #[test]
            fn [<$name _f64>]() {
                $test_fn::<f64>();
            }

            #[test]
            fn [<$name _c64>]() {
                $test_fn::<num_complex::Complex64>();
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_f64() {
        let x: f64 = Scalar::from_f64(3.0);
        assert_eq!(x, 3.0);
        assert_eq!(f64::zero(), 0.0);
        assert!(!f64::is_complex_type());
    }

    #[test]
    fn test_scalar_c64() {
        let z: Complex64 = Scalar::from_f64(3.0);
        assert_eq!(z, Complex64::new(3.0, 0.0));
        assert_eq!(Complex64::zero(), Complex64::new(0.0, 0.0));
        assert!(Complex64::is_complex_type());
    }
}
