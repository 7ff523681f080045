use std::fmt;

#[derive(Debug, PartialEq)]
pub enum TensorError {
    ShapeOverflow,
    ShapeMismatch { expected: usize, got: usize },
}

impl fmt::Display for TensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TensorError::ShapeOverflow => write!(f, "shape dimensions overflow when multiplied"),
            TensorError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {expected} elements, got {got}")
            }
        }
    }
}

impl std::error::Error for TensorError {}

/// A dense n-dimensional array with an explicit shape.
///
/// Data is stored flat in row-major order. Construction validates that the
/// shape product matches the data length, so a `Tensor` handed out by this
/// crate always has a consistent shape.
#[derive(Clone, PartialEq)]
pub struct Tensor<T> {
    pub shape: Vec<usize>,
    pub data: Vec<T>,
}

impl<T: fmt::Debug> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape)
            .field("data", &self.data)
            .finish()
    }
}

fn shape_product(shape: &[usize]) -> Result<usize, TensorError> {
    let mut product: usize = 1;
    for &dim in shape {
        product = product.checked_mul(dim).ok_or(TensorError::ShapeOverflow)?;
    }
    Ok(product)
}

impl<T> Tensor<T> {
    pub fn new(shape: Vec<usize>, data: Vec<T>) -> Result<Self, TensorError> {
        let product = shape_product(&shape)?;

        if product != data.len() {
            return Err(TensorError::ShapeMismatch {
                expected: product,
                got: data.len(),
            });
        }

        Ok(Self { shape, data })
    }

    /// Build a 2D tensor of shape `[rows.len(), row_len]` from equal-length
    /// rows. Fails with `ShapeMismatch` on the first row whose length differs
    /// from `row_len`. An empty `rows` yields a valid `[0, row_len]` tensor.
    pub fn from_rows(rows: Vec<Vec<T>>, row_len: usize) -> Result<Self, TensorError> {
        let num_rows = rows.len();
        let mut data = Vec::with_capacity(num_rows * row_len);
        for row in rows {
            if row.len() != row_len {
                return Err(TensorError::ShapeMismatch {
                    expected: row_len,
                    got: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            shape: vec![num_rows, row_len],
            data,
        })
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row `i` of a 2D tensor as a slice, or `None` if out of range.
    ///
    /// Panics if the tensor is not 2-dimensional.
    pub fn row(&self, i: usize) -> Option<&[T]> {
        assert_eq!(self.ndim(), 2, "row() requires a 2D tensor");
        let width = self.shape[1];
        if i >= self.shape[0] {
            return None;
        }
        Some(&self.data[i * width..(i + 1) * width])
    }
}

impl<T: Default + Clone> Tensor<T> {
    pub fn zeros(shape: Vec<usize>) -> Result<Self, TensorError> {
        let product = shape_product(&shape)?;
        let data = vec![T::default(); product];
        Ok(Self { shape, data })
    }
}
