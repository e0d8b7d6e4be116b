/// Loading status of a remotely-fetched value.
///
/// Replaces the `(data, loading, error)` field triple: an empty loaded
/// collection and a collection that has not arrived yet are different
/// states, and a consumer must not reconcile against the former thinking
/// it is the latter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState<T> {
    /// The fetch has not resolved yet.
    Loading,
    /// The fetch resolved; the value may be legitimately empty.
    Loaded(T),
    /// The fetch failed. The message is display text.
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadState<U> {
        match self {
            LoadState::Loading => LoadState::Loading,
            LoadState::Loaded(value) => LoadState::Loaded(f(value)),
            LoadState::Failed(message) => LoadState::Failed(message),
        }
    }
}
