//! Dependency-tracked effects

/// Runs a body only when its dependency value differs from the previous run.
///
/// Components use this to reconcile local state with props: call [`Effect::run`]
/// from both `create` and `update` with the props the state derives from.
#[derive(Debug, Clone)]
pub struct Effect<D> {
    last: Option<D>,
}

impl<D> Default for Effect<D> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<D: PartialEq + Clone> Effect<D> {
    /// Create an effect that has never run
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `body` if `deps` changed since the last run (always on the first).
    /// Returns whether the body ran.
    pub fn run<F>(&mut self, deps: D, body: F) -> bool
    where
        F: FnOnce(&D),
    {
        if self.last.as_ref() == Some(&deps) {
            return false;
        }
        body(&deps);
        self.last = Some(deps);
        true
    }

    /// Dependencies seen on the last run
    pub fn last_deps(&self) -> Option<&D> {
        self.last.as_ref()
    }
}
