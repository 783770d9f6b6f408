use crate::core::matrix::NumMatrix;
use crate::core::vector::NumVector;

/// Inverse-frequency weight per vocabulary term over the trace presence matrix.
///
/// With `N` = trace step count and `nt` = number of trace steps containing
/// term `t`:
///
/// ```text
/// weight[t] = 1 - nt / N
/// ```
///
/// A bounded [0, 1] variant of inverse document frequency: terms appearing in
/// few steps score near 1, ubiquitous terms near 0. The classic logarithmic
/// IDF must not be substituted here — the region-extraction triggers assume
/// this range.
pub fn trace_idf_vector(trace_presence: &NumMatrix) -> NumVector {
    let steps = trace_presence.rows();
    let mut frequency = NumVector::zeros(trace_presence.cols());
    for i in 0..steps {
        frequency = frequency.add(&trace_presence.row(i));
    }

    let mut idf = NumVector::zeros(trace_presence.cols());
    for j in 0..idf.len() {
        idf.set(j, 1.0 - frequency.get(j) / steps as f64);
    }
    idf
}
