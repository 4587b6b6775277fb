//! Literal construction of vectors.

/// Builds a [`Vector`](crate::Vector) on the global heap, like `vec!`.
///
/// | Pattern | Meaning |
/// |---------|---------|
/// | `vector![]` | empty |
/// | `vector![a, b, c]` | the listed elements, capacity 3 |
/// | `vector![value; n]` | `n` clones of `value` |
///
/// ```
/// use contig_core::vector;
///
/// let v = vector![9, -8, 0, 101, 1];
/// assert_eq!(v.len(), 5);
/// assert_eq!(*v.front(), 9);
///
/// let filled = vector![28.563; 4];
/// assert_eq!(filled.capacity(), 4);
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::Vector::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::Vector::from_elem($n, &$elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Vector::from([$($x),+])
    };
}
