//! Coordinate-list sparse arrays and their dense expansion.

use mdarray::{DynRank, Shape, Tensor};
use num_complex::Complex64;

use crate::error::{Result, SparseArrayError};
use crate::scalar::Scalar;

/// Product of the dimension extents (empty product = 1), checked against
/// usize overflow.
fn dense_len_checked(dims: &[usize]) -> Result<usize> {
    let mut len: usize = 1;
    for &d in dims {
        len = len
            .checked_mul(d)
            .ok_or_else(|| SparseArrayError::DenseSizeOverflow {
                dims: dims.to_vec(),
            })?;
    }
    Ok(len)
}

/// Row-major strides: the last axis varies fastest.
fn row_major_strides(dims: &[usize]) -> Result<Vec<usize>> {
    let rank = dims.len();
    let mut strides = vec![1usize; rank];
    for d in (0..rank.saturating_sub(1)).rev() {
        strides[d] = strides[d + 1]
            .checked_mul(dims[d + 1])
            .ok_or_else(|| SparseArrayError::DenseSizeOverflow {
                dims: dims.to_vec(),
            })?;
    }
    Ok(strides)
}

/// Coordinate-list sparse multidimensional array.
///
/// Stores only the non-zero entries of a multidimensional array: a flat
/// list of `nnz` values plus an `nnz x rank` coordinate matrix (flattened
/// row by row) giving each value's position, and the extent of each axis.
/// Entries at coordinates not listed are implicitly zero.
///
/// Entry order carries no structural meaning (coordinates need not be
/// sorted), but it is the write order of the dense expansion: when two
/// entries share a coordinate, the later one wins.
///
/// The array owns its three backing buffers for its entire lifetime and
/// releases them exactly once when dropped. Use [`SparseArray::into_parts`]
/// to hand the buffers back to a caller instead.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseArray<T> {
    values: Vec<T>,
    indices: Vec<usize>,
    dims: Vec<usize>,
}

/// Sparse array with real (f64) entries.
pub type SparseArrayF64 = SparseArray<f64>;

/// Sparse array with complex (Complex64) entries.
pub type SparseArrayC64 = SparseArray<Complex64>;

impl<T> SparseArray<T> {
    /// Create a sparse array from its three backing buffers, validating
    /// the coordinate matrix shape and every coordinate bound.
    ///
    /// `indices` is the flattened `nnz x rank` coordinate matrix: entry
    /// `k`'s coordinate along axis `d` is `indices[k * rank + d]`.
    ///
    /// # Errors
    /// [`SparseArrayError::InvalidIndicesLength`] if `indices.len()` is
    /// not `values.len() * dims.len()`;
    /// [`SparseArrayError::MalformedSparseArray`] if any coordinate
    /// component is out of bounds for its axis.
    pub fn from_parts(dims: Vec<usize>, indices: Vec<usize>, values: Vec<T>) -> Result<Self> {
        let array = Self {
            values,
            indices,
            dims,
        };
        array.validate()?;
        Ok(array)
    }

    /// Create a sparse array without validating the coordinate matrix.
    ///
    /// For producers that enumerate in-bounds coordinates by construction
    /// (e.g. selection-rule generators). No undefined behavior can result:
    /// a malformed value surfaces later as an error from the expansion
    /// routines or [`SparseArray::validate`].
    #[must_use]
    pub fn from_parts_unchecked(dims: Vec<usize>, indices: Vec<usize>, values: Vec<T>) -> Self {
        Self {
            values,
            indices,
            dims,
        }
    }

    /// Create an all-zero sparse array (`nnz = 0`) with the given dimensions.
    #[must_use]
    pub fn empty(dims: Vec<usize>) -> Self {
        Self {
            values: Vec::new(),
            indices: Vec::new(),
            dims,
        }
    }

    /// Extent of each axis.
    #[inline]
    #[must_use]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Number of axes.
    #[inline]
    #[must_use]
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Number of stored entries.
    #[inline]
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// True if no entries are stored.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Stored entry values, in entry order.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Number of elements of the fully materialized array.
    ///
    /// The empty product is 1, so a rank-0 array has dense length 1
    /// (a single scalar).
    ///
    /// # Errors
    /// [`SparseArrayError::DenseSizeOverflow`] if the product exceeds usize.
    pub fn dense_len(&self) -> Result<usize> {
        dense_len_checked(&self.dims)
    }

    /// Iterate over `(coordinate, value)` pairs in entry order.
    pub fn iter(&self) -> impl Iterator<Item = (&[usize], &T)> {
        let rank = self.rank();
        (0..self.nnz()).map(move |k| (&self.indices[k * rank..(k + 1) * rank], &self.values[k]))
    }

    /// Check the coordinate matrix shape and every coordinate bound.
    ///
    /// `from_parts` runs this on construction; values built with
    /// `from_parts_unchecked` can be checked here before use.
    pub fn validate(&self) -> Result<()> {
        let rank = self.rank();
        let nnz = self.nnz();
        let expected = nnz.saturating_mul(rank);
        if self.indices.len() != expected {
            return Err(SparseArrayError::InvalidIndicesLength {
                expected,
                actual: self.indices.len(),
            });
        }
        for entry in 0..nnz {
            let coord = &self.indices[entry * rank..(entry + 1) * rank];
            for (axis, (&index, &extent)) in coord.iter().zip(self.dims.iter()).enumerate() {
                if index >= extent {
                    return Err(SparseArrayError::MalformedSparseArray {
                        entry,
                        axis,
                        index,
                        extent,
                    });
                }
            }
        }
        Ok(())
    }

    /// Consume the array and return `(dims, indices, values)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<usize>, Vec<usize>, Vec<T>) {
        (self.dims, self.indices, self.values)
    }
}

impl<T: Scalar> SparseArray<T> {
    /// Expand into a caller-owned dense buffer in row-major layout.
    ///
    /// Every element of `out` is first set to zero, so the result is
    /// correct regardless of the buffer's prior contents. Each stored
    /// entry is then written at its row-major offset in entry order;
    /// entries sharing a coordinate overwrite, last one wins.
    ///
    /// On error the buffer is left untouched: the array is validated and
    /// the buffer length checked before any element is written.
    ///
    /// # Errors
    /// [`SparseArrayError::DimensionMismatch`] if `out.len()` differs from
    /// [`SparseArray::dense_len`];
    /// [`SparseArrayError::MalformedSparseArray`] if any stored coordinate
    /// is out of bounds.
    pub fn to_dense_into(&self, out: &mut [T]) -> Result<()> {
        let dense_len = self.dense_len()?;
        if out.len() != dense_len {
            return Err(SparseArrayError::DimensionMismatch {
                expected: dense_len,
                actual: out.len(),
            });
        }
        self.validate()?;
        let strides = row_major_strides(&self.dims)?;

        out.fill(T::zero());
        for (coord, &value) in self.iter() {
            // In bounds after validate: the offset is at most
            // sum((dims[d] - 1) * strides[d]) = dense_len - 1.
            let offset: usize = coord.iter().zip(strides.iter()).map(|(&c, &s)| c * s).sum();
            out[offset] = value;
        }
        Ok(())
    }

    /// Expand into a freshly allocated row-major dense buffer.
    ///
    /// # Errors
    /// Same conditions as [`SparseArray::to_dense_into`].
    pub fn to_dense(&self) -> Result<Vec<T>> {
        let mut out = vec![T::zero(); self.dense_len()?];
        self.to_dense_into(&mut out)?;
        Ok(out)
    }

    /// Expand into a dyn-rank tensor with this array's shape, for direct
    /// use by dense numeric kernels.
    ///
    /// # Errors
    /// Same conditions as [`SparseArray::to_dense_into`].
    pub fn to_dense_tensor(&self) -> Result<Tensor<T, DynRank>> {
        let dense = self.to_dense()?;
        Ok(Tensor::from(dense).into_shape(DynRank::from_dims(&self.dims)))
    }
}
