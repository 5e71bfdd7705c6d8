use std::{borrow::Cow, fmt};

/// Positional arguments substituted into placeholders, in order.
///
/// Each argument is rendered with its [`Display`](fmt::Display) form.
/// Use [`format_url!`](crate::format_url!) to pass values of different types.
pub trait Args {
    fn arg(&mut self, index: usize) -> Option<Cow<'_, str>>;
}
impl Args for () {
    fn arg(&mut self, _index: usize) -> Option<Cow<'_, str>> {
        None
    }
}
impl<T: fmt::Display> Args for &[T] {
    fn arg(&mut self, index: usize) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.get(index)?.to_string()))
    }
}
impl<T: fmt::Display, const N: usize> Args for &[T; N] {
    fn arg(&mut self, index: usize) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.get(index)?.to_string()))
    }
}
impl<T: fmt::Display> Args for &Vec<T> {
    fn arg(&mut self, index: usize) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.get(index)?.to_string()))
    }
}
