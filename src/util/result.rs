use std::error::Error;

pub(crate) trait ResultExtension<T> {
    /// Unwraps an [`Ok`] value, or panics with the message of the error itself. This backs the
    /// panicking shorthands that sit beside each `try_` method.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{error}"),
        }
    }
}
