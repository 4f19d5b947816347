pub(crate) trait OptionExtension<T> {
    /// Acts similarly to [`Option::unwrap`] but with [`unreachable!`] in the none branch, marking a
    /// call site where the list's length and its chain of links are known to agree.
    ///
    /// No panics annotation is used, to allow it to pass the clippy lint. The semantics are that
    /// if used, the caller is stating that None is impossible.
    fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None => unreachable!("link missing from a chain of known length"),
        }
    }
}
