//! Owned and borrowed row-major buffers.

use crate::error::GridError;
use crate::layout::{flat_index, row_major_strides};
use crate::traits::{FieldRead, FieldWrite};
use gtcomp_core::Element;
use smallvec::SmallVec;

/// Buffer shape. Inline up to rank 4, which covers every buffer the
/// engine accepts plus the common rank mistakes it must report.
pub type Shape = SmallVec<[usize; 4]>;

fn check_len(shape: &[usize], len: usize) -> Result<(), GridError> {
    if shape.iter().product::<usize>() != len {
        return Err(GridError::LengthMismatch {
            shape: shape.to_vec(),
            len,
        });
    }
    Ok(())
}

/// An owned, dense, row-major buffer of arbitrary rank.
#[derive(Clone, Debug, PartialEq)]
pub struct Field<T> {
    shape: Shape,
    data: Vec<T>,
}

impl<T: Element> Field<T> {
    /// Create a buffer of `shape` with every cell set to `fill`.
    pub fn new(shape: &[usize], fill: T) -> Self {
        let len = shape.iter().product();
        Self {
            shape: Shape::from_slice(shape),
            data: vec![fill; len],
        }
    }

    /// Wrap existing row-major storage.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::LengthMismatch`] if `data.len()` is not the
    /// product of `shape`.
    pub fn from_vec(shape: &[usize], data: Vec<T>) -> Result<Self, GridError> {
        check_len(shape, data.len())?;
        Ok(Self {
            shape: Shape::from_slice(shape),
            data,
        })
    }

    /// Create a buffer whose cells are computed from their index.
    ///
    /// `f` is called once per cell in row-major order.
    pub fn from_fn(shape: &[usize], mut f: impl FnMut(&[usize]) -> T) -> Self {
        let len: usize = shape.iter().product();
        let mut data = Vec::with_capacity(len);
        let mut index: Shape = SmallVec::from_elem(0, shape.len());
        for _ in 0..len {
            data.push(f(&index));
            // Odometer increment, last axis fastest.
            for axis in (0..shape.len()).rev() {
                index[axis] += 1;
                if index[axis] < shape[axis] {
                    break;
                }
                index[axis] = 0;
            }
        }
        Self {
            shape: Shape::from_slice(shape),
            data,
        }
    }

    /// Element at a multi-dimensional index, or `None` if out of bounds.
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        flat_index(&self.shape, index).map(|i| &self.data[i])
    }

    /// Mutable element at a multi-dimensional index.
    pub fn get_mut(&mut self, index: &[usize]) -> Option<&mut T> {
        flat_index(&self.shape, index).map(move |i| &mut self.data[i])
    }

    /// Overwrite the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] if `index` is outside the buffer.
    pub fn set(&mut self, index: &[usize], value: T) -> Result<(), GridError> {
        let i = flat_index(&self.shape, index).ok_or_else(|| GridError::IndexOutOfBounds {
            index: index.to_vec(),
            shape: self.shape.to_vec(),
        })?;
        self.data[i] = value;
        Ok(())
    }

    /// Row-major strides of this buffer.
    pub fn strides(&self) -> Shape {
        row_major_strides(&self.shape)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Contents in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Borrow this buffer as a [`FieldRef`].
    pub fn as_field_ref(&self) -> FieldRef<'_, T> {
        FieldRef {
            shape: self.shape.clone(),
            data: &self.data,
        }
    }

    /// Borrow this buffer as a [`FieldMut`].
    pub fn as_field_mut(&mut self) -> FieldMut<'_, T> {
        FieldMut {
            shape: self.shape.clone(),
            data: &mut self.data,
        }
    }

    /// Consume the buffer, returning its row-major storage.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Element> FieldRead<T> for Field<T> {
    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn data(&self) -> &[T] {
        &self.data
    }
}

impl<T: Element> FieldWrite<T> for Field<T> {
    fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

/// A read-only row-major buffer over caller-owned storage.
#[derive(Clone, Debug)]
pub struct FieldRef<'a, T> {
    shape: Shape,
    data: &'a [T],
}

impl<'a, T: Element> FieldRef<'a, T> {
    /// Wrap a slice as a buffer of `shape`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::LengthMismatch`] if `data.len()` is not the
    /// product of `shape`.
    pub fn new(shape: &[usize], data: &'a [T]) -> Result<Self, GridError> {
        check_len(shape, data.len())?;
        Ok(Self {
            shape: Shape::from_slice(shape),
            data,
        })
    }
}

impl<T: Element> FieldRead<T> for FieldRef<'_, T> {
    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn data(&self) -> &[T] {
        self.data
    }
}

/// A writable row-major buffer over caller-owned storage.
///
/// Used to write into memory the engine does not own (for example a
/// numpy array) without an intermediate copy.
#[derive(Debug)]
pub struct FieldMut<'a, T> {
    shape: Shape,
    data: &'a mut [T],
}

impl<'a, T: Element> FieldMut<'a, T> {
    /// Wrap a mutable slice as a buffer of `shape`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::LengthMismatch`] if `data.len()` is not the
    /// product of `shape`.
    pub fn new(shape: &[usize], data: &'a mut [T]) -> Result<Self, GridError> {
        check_len(shape, data.len())?;
        Ok(Self {
            shape: Shape::from_slice(shape),
            data,
        })
    }
}

impl<T: Element> FieldRead<T> for FieldMut<'_, T> {
    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn data(&self) -> &[T] {
        self.data
    }
}

impl<T: Element> FieldWrite<T> for FieldMut<'_, T> {
    fn data_mut(&mut self) -> &mut [T] {
        self.data
    }
}
