/// A dense vector of `f64` values with a length fixed at construction.
///
/// Arithmetic operations are pure: they allocate and return a new vector,
/// leaving both operands untouched. Only the explicit setters (`set`, `fill`)
/// mutate in place. Binary operations on vectors of different lengths are
/// programming errors and panic.
#[derive(Debug, Clone, PartialEq)]
pub struct NumVector {
    values: Vec<f64>,
}

impl NumVector {
    /// Create a zero vector of the given length.
    pub fn zeros(len: usize) -> Self {
        Self {
            values: vec![0.0; len],
        }
    }

    /// Create a vector filled with `value`.
    pub fn filled(len: usize, value: f64) -> Self {
        Self {
            values: vec![value; len],
        }
    }

    /// Create a vector from existing values.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize) -> f64 {
        self.values[i]
    }

    #[inline]
    pub fn set(&mut self, i: usize, value: f64) {
        self.values[i] = value;
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: f64) {
        self.values.fill(value);
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Element-wise sum. Panics on length mismatch.
    pub fn add(&self, other: &NumVector) -> NumVector {
        assert_eq!(self.len(), other.len(), "vector length mismatch");
        NumVector::from_values(
            self.values
                .iter()
                .zip(&other.values)
                .map(|(a, b)| a + b)
                .collect(),
        )
    }

    /// Element-wise difference. Panics on length mismatch.
    pub fn sub(&self, other: &NumVector) -> NumVector {
        assert_eq!(self.len(), other.len(), "vector length mismatch");
        NumVector::from_values(
            self.values
                .iter()
                .zip(&other.values)
                .map(|(a, b)| a - b)
                .collect(),
        )
    }

    /// Element-wise product. Panics on length mismatch.
    pub fn mul(&self, other: &NumVector) -> NumVector {
        assert_eq!(self.len(), other.len(), "vector length mismatch");
        NumVector::from_values(
            self.values
                .iter()
                .zip(&other.values)
                .map(|(a, b)| a * b)
                .collect(),
        )
    }

    /// Multiply every element by a scalar.
    pub fn scale(&self, scalar: f64) -> NumVector {
        NumVector::from_values(self.values.iter().map(|v| v * scalar).collect())
    }

    /// Add a scalar to every element.
    pub fn add_scalar(&self, scalar: f64) -> NumVector {
        NumVector::from_values(self.values.iter().map(|v| v + scalar).collect())
    }

    /// Dot product. Panics on length mismatch.
    pub fn dot(&self, other: &NumVector) -> f64 {
        assert_eq!(self.len(), other.len(), "vector length mismatch");
        self.values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| a * b)
            .sum()
    }

    /// L0 norm: the number of strictly positive elements.
    pub fn l0_norm(&self) -> usize {
        self.values.iter().filter(|&&v| v > 0.0).count()
    }

    /// L1 norm: the sum of absolute values.
    pub fn l1_norm(&self) -> f64 {
        self.values.iter().map(|v| v.abs()).sum()
    }

    /// L2 (Euclidean) norm.
    pub fn l2_norm(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// L1 distance to another vector. Panics on length mismatch.
    pub fn l1_distance(&self, other: &NumVector) -> f64 {
        assert_eq!(self.len(), other.len(), "vector length mismatch");
        self.values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| (a - b).abs())
            .sum()
    }

    /// L2 distance to another vector. Panics on length mismatch.
    pub fn l2_distance(&self, other: &NumVector) -> f64 {
        assert_eq!(self.len(), other.len(), "vector length mismatch");
        self.values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }

    /// The largest element value, treating all-negative vectors as 0.
    ///
    /// Scores in this crate are non-negative, so the 0 floor matches the
    /// normalization contract below.
    pub fn max(&self) -> f64 {
        self.values.iter().fold(0.0, |acc, &v| acc.max(v))
    }

    /// Linearly rescale so the maximum element equals `target`.
    ///
    /// An all-zero vector stays all-zero; no division by zero occurs.
    pub fn normalize(&self, target: f64) -> NumVector {
        let max = self.max();
        if max == 0.0 {
            NumVector::zeros(self.len())
        } else {
            self.scale(target / max)
        }
    }

    /// Boolean complement over a presence mask: 0 becomes 1, nonzero becomes 0.
    pub fn invert(&self) -> NumVector {
        NumVector::from_values(
            self.values
                .iter()
                .map(|&v| if v == 0.0 { 1.0 } else { 0.0 })
                .collect(),
        )
    }

    /// Map each element to 1 if it is strictly greater than `threshold`, else 0.
    pub fn binarize(&self, threshold: f64) -> NumVector {
        NumVector::from_values(
            self.values
                .iter()
                .map(|&v| if v > threshold { 1.0 } else { 0.0 })
                .collect(),
        )
    }

    /// Mean of all elements. Zero for an empty vector.
    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            0.0
        } else {
            self.values.iter().sum::<f64>() / self.values.len() as f64
        }
    }

    pub fn is_all_zero(&self) -> bool {
        self.values.iter().all(|&v| v == 0.0)
    }
}
