use crate::core::vector::NumVector;

/// A dense row-major matrix of `f64` values.
///
/// Row and column counts are fixed at construction. Rows and columns are
/// exposed as [`NumVector`] copies; setters write a vector back into place.
/// As with vectors, arithmetic is pure and dimension mismatches panic.
#[derive(Debug, Clone, PartialEq)]
pub struct NumMatrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl NumMatrix {
    /// Create a zero matrix with the given dimensions.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            values: vec![0.0; rows * cols],
        }
    }

    /// Build a matrix from row vectors. All rows must have equal length.
    pub fn from_rows(rows: Vec<NumVector>) -> Self {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, NumVector::len);
        let mut m = NumMatrix::zeros(n_rows, n_cols);
        for (i, row) in rows.into_iter().enumerate() {
            m.set_row(i, &row);
        }
        m
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.rows && j < self.cols, "matrix index out of bounds");
        self.values[i * self.cols + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        assert!(i < self.rows && j < self.cols, "matrix index out of bounds");
        self.values[i * self.cols + j] = value;
    }

    /// Copy of row `i` as a vector.
    pub fn row(&self, i: usize) -> NumVector {
        assert!(i < self.rows, "row index out of bounds");
        NumVector::from_values(self.values[i * self.cols..(i + 1) * self.cols].to_vec())
    }

    /// Copy of column `j` as a vector.
    pub fn column(&self, j: usize) -> NumVector {
        assert!(j < self.cols, "column index out of bounds");
        NumVector::from_values((0..self.rows).map(|i| self.get(i, j)).collect())
    }

    /// Overwrite row `i`. Panics if the vector length differs from the column count.
    pub fn set_row(&mut self, i: usize, row: &NumVector) {
        assert_eq!(row.len(), self.cols, "row length mismatch");
        self.values[i * self.cols..(i + 1) * self.cols].copy_from_slice(row.as_slice());
    }

    /// Overwrite column `j`. Panics if the vector length differs from the row count.
    pub fn set_column(&mut self, j: usize, column: &NumVector) {
        assert_eq!(column.len(), self.rows, "column length mismatch");
        for i in 0..self.rows {
            self.set(i, j, column.get(i));
        }
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: f64) {
        self.values.fill(value);
    }

    pub fn transpose(&self) -> NumMatrix {
        let mut t = NumMatrix::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                t.set(j, i, self.get(i, j));
            }
        }
        t
    }

    /// Element-wise sum. Panics on dimension mismatch.
    pub fn add(&self, other: &NumMatrix) -> NumMatrix {
        assert_eq!(
            (self.rows, self.cols),
            (other.rows, other.cols),
            "matrix dimension mismatch"
        );
        let mut out = self.clone();
        for (a, b) in out.values.iter_mut().zip(&other.values) {
            *a += b;
        }
        out
    }

    /// Element-wise difference. Panics on dimension mismatch.
    pub fn sub(&self, other: &NumMatrix) -> NumMatrix {
        assert_eq!(
            (self.rows, self.cols),
            (other.rows, other.cols),
            "matrix dimension mismatch"
        );
        let mut out = self.clone();
        for (a, b) in out.values.iter_mut().zip(&other.values) {
            *a -= b;
        }
        out
    }

    /// Element-wise product. Panics on dimension mismatch.
    pub fn mul_elementwise(&self, other: &NumMatrix) -> NumMatrix {
        assert_eq!(
            (self.rows, self.cols),
            (other.rows, other.cols),
            "matrix dimension mismatch"
        );
        let mut out = self.clone();
        for (a, b) in out.values.iter_mut().zip(&other.values) {
            *a *= b;
        }
        out
    }

    /// Matrix product `self * other`. Panics unless `self.cols == other.rows`.
    pub fn mul(&self, other: &NumMatrix) -> NumMatrix {
        assert_eq!(self.cols, other.rows, "matrix dimension mismatch");
        let mut out = NumMatrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for k in 0..self.cols {
                let a = self.get(i, k);
                if a == 0.0 {
                    continue;
                }
                for j in 0..other.cols {
                    out.set(i, j, out.get(i, j) + a * other.get(k, j));
                }
            }
        }
        out
    }

    /// The largest cell value, floored at 0 (cells are non-negative scores).
    pub fn max(&self) -> f64 {
        self.values.iter().fold(0.0, |acc, &v| acc.max(v))
    }

    /// Linearly rescale so the maximum cell equals `target`.
    ///
    /// An all-zero matrix stays all-zero.
    pub fn normalize(&self, target: f64) -> NumMatrix {
        let max = self.max();
        if max == 0.0 {
            NumMatrix::zeros(self.rows, self.cols)
        } else {
            let factor = target / max;
            let mut out = self.clone();
            for v in &mut out.values {
                *v *= factor;
            }
            out
        }
    }
}
