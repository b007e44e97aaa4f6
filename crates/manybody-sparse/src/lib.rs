//! Coordinate-format sparse multidimensional arrays with dense expansion.
//!
//! High-rank tensors arising in many-particle quantum systems are
//! frequently sparse: most entries vanish exactly by symmetry or
//! selection rules. This crate provides the coordinate-list (COO)
//! representation for such arrays and the deterministic expansion into a
//! fully materialized dense buffer for downstream linear-algebra kernels.
//!
//! # Overview
//!
//! The single core type is [`SparseArray<T>`], generic over the scalar
//! entry type via the [`Scalar`] trait and instantiated for real and
//! complex double precision as [`SparseArrayF64`] and [`SparseArrayC64`].
//! It owns three buffers: the stored values, a flattened `nnz x rank`
//! coordinate matrix, and the extent of each axis. Ownership replaces a
//! manual destructor: the buffers are released exactly once when the
//! array is dropped.
//!
//! Dense expansion uses row-major linear addressing (last axis varies
//! fastest), zero-fills the output before writing, and resolves
//! duplicate coordinates by letting the last entry in encounter order
//! win.
//!
//! # Quick Start
//!
//! ```
//! use manybody_sparse::SparseArrayF64;
//!
//! // 2 x 3 array holding 0.5 at (0, 1) and -1.0 at (1, 2)
//! let a = SparseArrayF64::from_parts(
//!     vec![2, 3],
//!     vec![0, 1, 1, 2],
//!     vec![0.5, -1.0],
//! )
//! .unwrap();
//!
//! assert_eq!(a.nnz(), 2);
//! assert_eq!(a.rank(), 2);
//!
//! let dense = a.to_dense().unwrap();
//! assert_eq!(dense, vec![0.0, 0.5, 0.0, 0.0, 0.0, -1.0]);
//! ```
//!
//! # Complex Entries
//!
//! ```
//! use manybody_sparse::SparseArrayC64;
//! use num_complex::Complex64;
//!
//! let a = SparseArrayC64::from_parts(
//!     vec![2, 2],
//!     vec![1, 0],
//!     vec![Complex64::new(0.0, 1.0)],
//! )
//! .unwrap();
//!
//! let dense = a.to_dense().unwrap();
//! assert_eq!(dense[2], Complex64::new(0.0, 1.0));
//! ```
//!
//! # Expanding into a Caller-Owned Buffer
//!
//! [`SparseArray::to_dense_into`] writes into a pre-sized buffer the
//! caller owns, so hot loops can reuse one allocation:
//!
//! ```
//! use manybody_sparse::SparseArrayF64;
//!
//! let a = SparseArrayF64::from_parts(vec![2, 2], vec![0, 0], vec![3.0]).unwrap();
//! let mut buf = vec![f64::NAN; 4]; // prior contents are irrelevant
//! a.to_dense_into(&mut buf).unwrap();
//! assert_eq!(buf, vec![3.0, 0.0, 0.0, 0.0]);
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result`] with [`SparseArrayError`]:
//!
//! ```
//! use manybody_sparse::{SparseArrayError, SparseArrayF64};
//!
//! // Coordinate out of bounds for its axis
//! let result = SparseArrayF64::from_parts(vec![2], vec![5], vec![1.0]);
//! assert!(matches!(
//!     result,
//!     Err(SparseArrayError::MalformedSparseArray { .. })
//! ));
//!
//! // Output buffer sized incorrectly
//! let a = SparseArrayF64::empty(vec![2, 3]);
//! let mut buf = vec![0.0; 5];
//! assert!(matches!(
//!     a.to_dense_into(&mut buf),
//!     Err(SparseArrayError::DimensionMismatch { .. })
//! ));
//! ```

mod error;
mod scalar;
mod sparse_array;

pub use error::{Result, SparseArrayError};
pub use scalar::Scalar;
pub use sparse_array::{SparseArray, SparseArrayC64, SparseArrayF64};
