/// A type that collects the steps taken by the simplifier.
///
/// [`StepCollector`] is implemented for the unit type `()`, for callers that only care about the
/// final expression, and for [`Vec`], for callers that want the full trace of rule applications.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        self.push(step);
    }
}
