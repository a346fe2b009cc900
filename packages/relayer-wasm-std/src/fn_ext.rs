/// Pipes a value into a function, so that chains like `result?.then(Ok)` read left to right.
pub trait FnExt {
    fn then<F, T>(self, func: F) -> T
    where
        F: FnOnce(Self) -> T,
        Self: Sized,
    {
        func(self)
    }
}

impl<T> FnExt for T {}
