//! The [`Element`] scalar bound.

use std::fmt::Debug;

/// A fixed-width numeric scalar that can be stored in a field buffer.
///
/// Stencil updates only move values around, so no arithmetic is
/// required. The bound exists to keep buffer element types plain data:
/// copyable, comparable for tests, and shareable across threads.
pub trait Element: Copy + PartialEq + Debug + Send + Sync + 'static {}

macro_rules! impl_element {
    ($($t:ty),* $(,)?) => {
        $(impl Element for $t {})*
    };
}

impl_element!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_element<T: Element>() {}

    #[test]
    fn numeric_primitives_are_elements() {
        assert_element::<f32>();
        assert_element::<f64>();
        assert_element::<i32>();
        assert_element::<u8>();
        assert_element::<u64>();
    }
}
