use std::fmt::Debug;

/// Argument tuples a timed function can be called with.
///
/// Each element is rendered with its `Debug` form and the results are joined
/// with `", "`, so `(0, 10, 3)` renders as `0, 10, 3`.
///
/// ```
/// use timing::Args;
///
/// assert_eq!((0, 10, 3).render(), "0, 10, 3");
/// assert_eq!((1_000_000u64,).render(), "1000000");
/// assert_eq!(("a", 'b').render(), r#""a", 'b'"#);
/// assert_eq!(().render(), "");
/// ```
pub trait Args {
    fn render(&self) -> String;
}

impl Args for () {
    fn render(&self) -> String {
        String::new()
    }
}

macro_rules! impl_args {
    ($($idx:tt $name:ident),+) => {
        impl<$($name: Debug),+> Args for ($($name,)+) {
            fn render(&self) -> String {
                [$(format!("{:?}", self.$idx)),+].join(", ")
            }
        }
    };
}

impl_args!(0 A);
impl_args!(0 A, 1 B);
impl_args!(0 A, 1 B, 2 C);
impl_args!(0 A, 1 B, 2 C, 3 D);
impl_args!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_args!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
