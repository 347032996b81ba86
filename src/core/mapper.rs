use std::marker::PhantomData;

/// Mapping written out at compile time between two concrete types.
///
/// This is the strategy with no runtime lookup at all: every field assignment is
/// ordinary Rust code. Implement [`map`](Mapper::map) by hand, or use
/// [`FromMapper`] when a `From<&S>` conversion already exists.
pub trait Mapper<S, T> {
    fn map(&self, source: &S) -> T;

    fn map_list(&self, sources: &[S]) -> Vec<T> {
        sources.iter().map(|source| self.map(source)).collect()
    }
}

/// [`Mapper`] backed by a `From<&S>` implementation of the target.
pub struct FromMapper<S, T> {
    _pd: PhantomData<fn(&S) -> T>,
}

impl<S, T> FromMapper<S, T> {
    pub fn new() -> Self {
        Self { _pd: PhantomData }
    }
}

impl<S, T> Default for FromMapper<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, T> Mapper<S, T> for FromMapper<S, T>
where
    for<'a> T: From<&'a S>,
{
    fn map(&self, source: &S) -> T {
        T::from(source)
    }
}
