//! Argument cases for [`Suite::it_each`](crate::Suite::it_each).

use std::fmt::Display;

/// A single row of arguments for a parameterized test.
///
/// The label is appended to the test description as `"<desc> [<label>]"`, where the label
/// joins every value with a `,` and no spaces.
pub trait EachCase: Clone + 'static {
    fn label(&self) -> String;
}

macro_rules! impl_each_case {
    [$(($($ty:ident $idx:tt),+)),* $(,)?] => {$(
        impl<$($ty: Display + Clone + 'static),+> EachCase for ($($ty,)+) {
            fn label(&self) -> String {
                [$(self.$idx.to_string()),+].join(",")
            }
        }
    )*};
}

impl_each_case![
    (A 0),
    (A 0, B 1),
    (A 0, B 1, C 2),
    (A 0, B 1, C 2, D 3),
    (A 0, B 1, C 2, D 3, E 4),
    (A 0, B 1, C 2, D 3, E 4, F 5),
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6),
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7),
];

fn join<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

impl<T: Display + Clone + 'static, const N: usize> EachCase for [T; N] {
    fn label(&self) -> String {
        join(self)
    }
}

impl<T: Display + Clone + 'static> EachCase for Vec<T> {
    fn label(&self) -> String {
        join(self)
    }
}
