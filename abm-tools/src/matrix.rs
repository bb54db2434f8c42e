//! Nested matrices of fixed shape.
//!
//! [`make_matrix`] builds a nested container whose dimensions follow a
//! shape such as `[2, 3]` (two rows of three leaves). Every leaf is a
//! separate call to the leaf factory, so factories that return fresh
//! mutable values never produce aliased leaves.
//!
//! The container type is pluggable through [`NestedContainer`]. The
//! default is [`Matrix`].

use crate::error::{Error, ShapeError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

/// A container that can be assembled level by level by the matrix builder.
///
/// The innermost dimension is built with [`from_leaves`](Self::from_leaves),
/// every outer dimension with [`from_children`](Self::from_children).
pub trait NestedContainer<T>: Sized {
    /// Build the innermost level from its leaves, in order.
    fn from_leaves(leaves: Vec<T>) -> Self;

    /// Build an outer level from already built sub-containers, in order.
    fn from_children(children: Vec<Self>) -> Self;
}

/// Default nested container: rows of leaves inside grids of rows.
///
/// Serializes as plain nested JSON arrays. Nested arrays alone do not say
/// where the grid ends and the leaves begin, so reading one back goes
/// through [`Matrix::from_value`] with the number of dimensions.
///
/// # Examples
///
/// ```
/// use abm_tools::make_matrix;
///
/// let m = make_matrix(&[2, 3], || 0u8).unwrap();
/// assert_eq!(m.len(), 2);
/// assert_eq!(m.leaf_count(), 6);
/// assert_eq!(m.to_string(), "[[0, 0, 0], [0, 0, 0]]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Matrix<T> {
    /// The innermost dimension.
    Row(Vec<T>),
    /// An outer dimension holding sub-matrices.
    Grid(Vec<Matrix<T>>),
}

impl<T> NestedContainer<T> for Matrix<T> {
    fn from_leaves(leaves: Vec<T>) -> Self {
        Self::Row(leaves)
    }

    fn from_children(children: Vec<Self>) -> Self {
        Self::Grid(children)
    }
}

impl<T> Matrix<T> {
    /// Number of top-level elements.
    pub fn len(&self) -> usize {
        match self {
            Self::Row(leaves) => leaves.len(),
            Self::Grid(children) => children.len(),
        }
    }

    /// Whether there are no top-level elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of leaves across all levels.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Row(leaves) => leaves.len(),
            Self::Grid(children) => children.iter().map(Matrix::leaf_count).sum(),
        }
    }

    /// Dimensions read along the first element of each level.
    ///
    /// A zero-sized dimension hides every dimension inside it.
    pub fn shape(&self) -> Vec<usize> {
        let mut shape = vec![self.len()];
        if let Self::Grid(children) = self {
            if let Some(first) = children.first() {
                shape.extend(first.shape());
            }
        }
        shape
    }

    /// Leaf at a full multi-index, or `None` if the index is out of range
    /// or does not reach a leaf.
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        match (self, index.split_first()) {
            (Self::Row(leaves), Some((&i, []))) => leaves.get(i),
            (Self::Grid(children), Some((&i, rest))) => children.get(i)?.get(rest),
            _ => None,
        }
    }

    /// Mutable leaf at a full multi-index.
    pub fn get_mut(&mut self, index: &[usize]) -> Option<&mut T> {
        match (self, index.split_first()) {
            (Self::Row(leaves), Some((&i, []))) => leaves.get_mut(i),
            (Self::Grid(children), Some((&i, rest))) => children.get_mut(i)?.get_mut(rest),
            _ => None,
        }
    }

    /// Iterate over all leaves in row-major order.
    pub fn leaves(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        match self {
            Self::Row(leaves) => Box::new(leaves.iter()),
            Self::Grid(children) => Box::new(children.iter().flat_map(Matrix::leaves)),
        }
    }

    /// Consume the matrix into its leaves in row-major order.
    pub fn into_leaves(self) -> Vec<T> {
        match self {
            Self::Row(leaves) => leaves,
            Self::Grid(children) => children.into_iter().flat_map(Matrix::into_leaves).collect(),
        }
    }
}

impl<T: DeserializeOwned> Matrix<T> {
    /// Read a matrix of `depth` dimensions from nested JSON arrays.
    ///
    /// The outer `depth - 1` levels must be arrays; everything one level
    /// further in is deserialized as a leaf, even if it is an array itself.
    ///
    /// ```
    /// use abm_tools::{Matrix, make_matrix_default};
    /// use serde_json::Value;
    ///
    /// let m: Matrix<Value> = make_matrix_default(&[2, 2]).unwrap();
    /// let json = serde_json::to_value(&m).unwrap();
    /// assert_eq!(Matrix::from_value(json, 2).unwrap(), m);
    /// ```
    pub fn from_value(value: Value, depth: usize) -> Result<Self, Error> {
        if depth == 0 {
            return Err(ShapeError::Empty.into());
        }
        let Value::Array(items) = value else {
            return Err(ShapeError::NotAnArray { depth }.into());
        };
        match depth {
            1 => {
                let leaves = items
                    .into_iter()
                    .map(serde_json::from_value)
                    .collect::<Result<Vec<T>, _>>()?;
                Ok(Self::Row(leaves))
            }
            _ => {
                let children = items
                    .into_iter()
                    .map(|item| Self::from_value(item, depth - 1))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self::Grid(children))
            }
        }
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        match self {
            Self::Row(leaves) => {
                for (i, leaf) in leaves.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{leaf}")?;
                }
            }
            Self::Grid(children) => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{child}")?;
                }
            }
        }
        f.write_str("]")
    }
}

/// Build a [`Matrix`] of the given shape, calling `leaf` once per position.
///
/// Fails with [`ShapeError::Empty`] when `shape` has no dimensions.
pub fn make_matrix<T>(shape: &[usize], leaf: impl FnMut() -> T) -> Result<Matrix<T>, ShapeError> {
    make_matrix_in(shape, leaf)
}

/// Build a [`Matrix`] whose leaves are the absence value of `T`
/// (`None` for options, `null` for JSON values).
pub fn make_matrix_default<T: Default>(shape: &[usize]) -> Result<Matrix<T>, ShapeError> {
    make_matrix_in(shape, T::default)
}

/// Build a [`Matrix`] where the leaf factory receives each leaf's
/// multi-index, e.g. to create grid locations.
pub fn make_matrix_indexed<T>(
    shape: &[usize],
    leaf: impl FnMut(&[usize]) -> T,
) -> Result<Matrix<T>, ShapeError> {
    make_matrix_indexed_in(shape, leaf)
}

/// Build into a caller-chosen container type.
pub fn make_matrix_in<C, T>(shape: &[usize], mut leaf: impl FnMut() -> T) -> Result<C, ShapeError>
where
    C: NestedContainer<T>,
{
    make_matrix_indexed_in(shape, |_| leaf())
}

/// Build into a caller-chosen container type with an index-aware leaf factory.
pub fn make_matrix_indexed_in<C, T>(
    shape: &[usize],
    mut leaf: impl FnMut(&[usize]) -> T,
) -> Result<C, ShapeError>
where
    C: NestedContainer<T>,
{
    let (&dim, rest) = shape.split_first().ok_or(ShapeError::Empty)?;
    let mut position = Vec::with_capacity(shape.len());
    let built = build_level(dim, rest, &mut leaf, &mut position);
    tracing::debug!(
        ?shape,
        leaves = shape.iter().product::<usize>(),
        "built nested matrix"
    );
    Ok(built)
}

fn build_level<C, T, F>(dim: usize, rest: &[usize], leaf: &mut F, position: &mut Vec<usize>) -> C
where
    C: NestedContainer<T>,
    F: FnMut(&[usize]) -> T,
{
    match rest.split_first() {
        None => {
            let mut leaves = Vec::with_capacity(dim);
            for i in 0..dim {
                position.push(i);
                leaves.push(leaf(position.as_slice()));
                position.pop();
            }
            C::from_leaves(leaves)
        }
        Some((&next, rest)) => {
            let mut children = Vec::with_capacity(dim);
            for i in 0..dim {
                position.push(i);
                children.push(build_level(next, rest, leaf, position));
                position.pop();
            }
            C::from_children(children)
        }
    }
}
