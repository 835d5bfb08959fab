use crate::creation::constant;
use crate::error::MicrogradError;
use crate::value::Value;
use approx::relative_eq;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(MicrogradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(MicrogradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: f(x+eps): {value_plus:?}, f(x-eps): {value_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        value_plus: f64,
        value_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Gradient check needs at least one input.")]
    EmptyInput,
}

/// Estimates d(func)/d(input_i) for every input with central differences:
/// `(f(x + eps) - f(x - eps)) / (2 * eps)`.
///
/// `func` receives fresh leaves built from the (perturbed) inputs on every call.
pub fn finite_difference<F>(func: F, inputs: &[f64], epsilon: f64) -> Result<Vec<f64>, GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, MicrogradError>,
{
    let eval = |point: &[f64]| -> Result<f64, GradCheckError> {
        let leaves: Vec<Value> = point.iter().map(|&x| constant(x)).collect();
        func(&leaves).map(|out| out.data()).map_err(GradCheckError::ForwardPassError)
    };

    let mut numerical = Vec::with_capacity(inputs.len());
    for i in 0..inputs.len() {
        let mut plus = inputs.to_vec();
        plus[i] += epsilon;
        let mut minus = inputs.to_vec();
        minus[i] -= epsilon;

        let value_plus = eval(&plus)?;
        let value_minus = eval(&minus)?;
        let grad = (value_plus - value_minus) / (2.0 * epsilon);
        if !grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                value_plus,
                value_minus,
            });
        }
        numerical.push(grad);
    }
    Ok(numerical)
}

/// Checks analytical gradients against numerical gradients using finite differences.
///
/// Builds one leaf per entry of `inputs`, runs `func` and a backward pass from its
/// output, then compares every leaf's gradient with [`finite_difference`]. A pair
/// passes when it is within `tolerance` absolutely or relatively.
pub fn check_grad<F>(func: F, inputs: &[f64], epsilon: f64, tolerance: f64) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, MicrogradError>,
{
    if inputs.is_empty() {
        return Err(GradCheckError::EmptyInput);
    }

    // --- Analytical gradients ---
    let leaves: Vec<Value> = inputs.iter().map(|&x| constant(x)).collect();
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    output.backward().map_err(GradCheckError::BackwardPassError)?;
    let analytical: Vec<f64> = leaves.iter().map(Value::grad).collect();

    // --- Numerical gradients ---
    let numerical = finite_difference(&func, inputs, epsilon)?;

    for (i, (&analytical_grad, &numerical_grad)) in analytical.iter().zip(numerical.iter()).enumerate() {
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }
        if !relative_eq!(analytical_grad, numerical_grad, epsilon = tolerance, max_relative = tolerance) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }
    debug!("check_grad: {} input(s) within tolerance {}", inputs.len(), tolerance);
    Ok(())
}
