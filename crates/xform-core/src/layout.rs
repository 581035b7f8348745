//! Column-major storage layout for 4x4 matrices.
//!
//! Matrices are uploaded to the GPU as 16 consecutive floats walking
//! down each column before moving to the next one:
//!
//! ```text
//! | m[0]  m[4]  m[8]   m[12] |
//! | m[1]  m[5]  m[9]   m[13] |
//! | m[2]  m[6]  m[10]  m[14] |
//! | m[3]  m[7]  m[11]  m[15] |
//! ```
//!
//! Every element access in `xform-math` goes through [`offset`] so the
//! layout cannot drift to row-major.

/// Rows (and columns) of a 4x4 matrix.
pub const MAT4_DIM: usize = 4;

/// Number of scalars stored for a 4x4 matrix.
pub const MAT4_LEN: usize = MAT4_DIM * MAT4_DIM;

/// Maps a zero-based `(row, col)` pair to its flat column-major offset.
///
/// # Panics
///
/// If `row` or `col` is not below [`MAT4_DIM`]. An unchecked `(4, 0)`
/// would land on `(0, 1)`.
///
/// # Example
///
/// ```rust
/// use xform_core::offset;
///
/// assert_eq!(offset(0, 0), 0);
/// assert_eq!(offset(1, 0), 1);
/// assert_eq!(offset(0, 3), 12);
/// assert_eq!(offset(3, 3), 15);
/// ```
#[inline]
pub const fn offset(row: usize, col: usize) -> usize {
    assert!(row < MAT4_DIM && col < MAT4_DIM, "matrix index out of range");
    col * MAT4_DIM + row
}

/// Inverse of [`offset`]: flat index to `(row, col)`.
#[inline]
pub const fn row_col(offset: usize) -> (usize, usize) {
    assert!(offset < MAT4_LEN, "matrix offset out of range");
    (offset % MAT4_DIM, offset / MAT4_DIM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_column_major() {
        // Translation lives in the last column
        assert_eq!(offset(0, 3), 12);
        assert_eq!(offset(1, 3), 13);
        assert_eq!(offset(2, 3), 14);
        // Bottom row
        assert_eq!(offset(3, 0), 3);
        assert_eq!(offset(3, 2), 11);
    }

    #[test]
    fn test_row_col_inverts_offset() {
        for i in 0..MAT4_LEN {
            let (r, c) = row_col(i);
            assert_eq!(offset(r, c), i);
        }
    }

    #[test]
    #[should_panic(expected = "matrix index out of range")]
    fn test_offset_rejects_row_past_end() {
        offset(4, 0);
    }

    #[test]
    #[should_panic(expected = "matrix index out of range")]
    fn test_offset_rejects_col_past_end() {
        offset(0, 4);
    }
}
