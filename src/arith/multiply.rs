//! Element-wise multiplication of two f64 arrays.

use crate::data::DynArrayView;
use crate::error::{ArithError, Operand};
use ndarray::{Array1, ArrayViewD};

/// Multiplies two arrays of arbitrary type, checking the element type first.
///
/// Both inputs must hold `f64` elements; anything else is a
/// `TypeMismatch`, `x` being checked before `y`. Shapes may differ as long as
/// the total element counts match.
pub fn multiply_arrays(x: &DynArrayView<'_>, y: &DynArrayView<'_>) -> Result<Array1<f64>, ArithError> {
    let x = x.as_f64(Operand::X).inspect_err(log_rejection)?;
    let y = y.as_f64(Operand::Y).inspect_err(log_rejection)?;
    mult_array_views(x, y)
}

/// Multiplies two f64 views element by element.
///
/// Each input is read in row-major order, so logical shape does not affect
/// the result. Produces a new flat array; the inputs are left untouched.
pub fn mult_array_views(x: ArrayViewD<'_, f64>, y: ArrayViewD<'_, f64>) -> Result<Array1<f64>, ArithError> {
    if x.len() != y.len() {
        let err = ArithError::ShapeMismatch {
            x_len: x.len(),
            y_len: y.len(),
            x_shape: x.shape().to_vec(),
            y_shape: y.shape().to_vec(),
        };
        log_rejection(&err);
        return Err(err);
    }

    let product: Vec<f64> = match (x.as_slice(), y.as_slice()) {
        (Some(xs), Some(ys)) => xs.iter().zip(ys).map(|(a, b)| a * b).collect(),
        _ => x.iter().zip(y.iter()).map(|(a, b)| a * b).collect(),
    };

    tracing::trace!(len = product.len(), "multiplied arrays");
    Ok(Array1::from_vec(product))
}

fn log_rejection(err: &ArithError) {
    match err {
        ArithError::TypeMismatch {
            operand,
            expected,
            found,
        } => {
            tracing::debug!(%operand, %expected, %found, "rejected array element type");
        }
        ArithError::ShapeMismatch { x_len, y_len, .. } => {
            tracing::debug!(x_len, y_len, "rejected arrays with different element counts");
        }
        other => tracing::debug!(error = %other, "rejected arrays"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DType;
    use ndarray::{arr1, ArrayD, IxDyn};

    fn f64_array(shape: &[usize], values: &[f64]) -> ArrayD<f64> {
        ArrayD::from_shape_vec(IxDyn(shape), values.to_vec()).unwrap()
    }

    #[test]
    fn test_multiply() {
        let a = f64_array(&[4], &[1.0, 2.0, 3.0, 4.0]);
        let b = f64_array(&[4], &[5.0, 6.0, 7.0, 8.0]);

        let c = multiply_arrays(&a.view().into(), &b.view().into()).unwrap();

        assert_eq!(c, arr1(&[5.0, 12.0, 21.0, 32.0]));
        assert_eq!(c.sum(), 70.0);
    }

    #[test]
    fn test_shape_does_not_matter() {
        let values_a = [1.0, 2.0, 3.0, 4.0];
        let values_b = [5.0, 6.0, 7.0, 8.0];
        let flat = multiply_arrays(
            &f64_array(&[4], &values_a).view().into(),
            &f64_array(&[4], &values_b).view().into(),
        )
        .unwrap();

        let square = multiply_arrays(
            &f64_array(&[2, 2], &values_a).view().into(),
            &f64_array(&[2, 2], &values_b).view().into(),
        )
        .unwrap();
        assert_eq!(square, flat);
        assert_eq!(square.sum(), 70.0);

        // Different dimensionality on each side, same element count.
        let mixed = multiply_arrays(
            &f64_array(&[2, 2], &values_a).view().into(),
            &f64_array(&[4, 1], &values_b).view().into(),
        )
        .unwrap();
        assert_eq!(mixed, flat);
    }

    #[test]
    fn test_non_contiguous_view() {
        let a = f64_array(&[2, 2], &[1.0, 2.0, 3.0, 4.0]);
        let b = f64_array(&[2, 2], &[1.0, 1.0, 1.0, 1.0]);

        // Transposed view is read in its own row-major order.
        let c = mult_array_views(a.t(), b.view()).unwrap();
        assert_eq!(c, arr1(&[1.0, 3.0, 2.0, 4.0]));
    }

    #[test]
    fn test_dtype_is_strict() {
        let x = ArrayD::from_shape_vec(IxDyn(&[4]), vec![1i32, 2, 3, 4]).unwrap();
        let y = ArrayD::from_shape_vec(IxDyn(&[4]), vec![5i32, 6, 7, 8]).unwrap();

        let err = multiply_arrays(&x.view().into(), &y.view().into()).unwrap_err();
        assert_eq!(
            err,
            ArithError::TypeMismatch {
                operand: Operand::X,
                expected: DType::F64,
                found: DType::I32,
            }
        );
    }

    #[test]
    fn test_second_operand_type_checked() {
        let x = f64_array(&[2], &[1.0, 2.0]);
        let y = ArrayD::from_shape_vec(IxDyn(&[2]), vec![1.0f32, 2.0]).unwrap();

        let err = multiply_arrays(&x.view().into(), &y.view().into()).unwrap_err();
        assert!(matches!(
            err,
            ArithError::TypeMismatch {
                operand: Operand::Y,
                found: DType::F32,
                ..
            }
        ));
    }

    #[test]
    fn test_type_checked_before_count() {
        let x = f64_array(&[3], &[1.0, 2.0, 3.0]);
        let y = ArrayD::from_shape_vec(IxDyn(&[2]), vec![1i64, 2]).unwrap();

        let err = multiply_arrays(&x.view().into(), &y.view().into()).unwrap_err();
        assert!(matches!(err, ArithError::TypeMismatch { .. }));
    }

    #[test]
    fn test_count_mismatch() {
        let x = f64_array(&[2, 2], &[1.0, 2.0, 3.0, 4.0]);
        let y = f64_array(&[3], &[1.0, 2.0, 3.0]);

        let err = multiply_arrays(&x.view().into(), &y.view().into()).unwrap_err();
        assert_eq!(
            err,
            ArithError::ShapeMismatch {
                x_len: 4,
                y_len: 3,
                x_shape: vec![2, 2],
                y_shape: vec![3],
            }
        );
    }

    #[test]
    fn test_empty() {
        let x = f64_array(&[0], &[]);
        let y = f64_array(&[0, 3], &[]);
        let c = multiply_arrays(&x.view().into(), &y.view().into()).unwrap();
        assert!(c.is_empty());
    }

    #[test]
    fn test_inputs_untouched() {
        let a = f64_array(&[3], &[1.5, -2.0, 0.25]);
        let b = f64_array(&[3], &[2.0, 3.0, 4.0]);
        let before = (a.clone(), b.clone());

        let c = mult_array_views(a.view(), b.view()).unwrap();

        assert_eq!(c, arr1(&[3.0, -6.0, 1.0]));
        assert_eq!((a, b), before);
    }
}
