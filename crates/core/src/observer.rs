/// Receives solver events and optionally returns a control action.
///
/// Solvers define their own event and action types. Returning `None` lets
/// the solver continue unchanged.
///
/// `()` is the no-op observer, and any `FnMut(&E) -> Option<A>` closure is an
/// observer.
pub trait Observer<E, A> {
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}
