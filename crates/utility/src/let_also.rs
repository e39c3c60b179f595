/// Passes a value into a closure, so that results can be wrapped at the end of
/// a method chain.
pub trait LetAlso: Sized {
    fn let_owned<R, F: FnOnce(Self) -> R>(self, f: F) -> R {
        f(self)
    }
}

impl<T> LetAlso for T {}
