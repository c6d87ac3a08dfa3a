//! Loading state for components backed by a remote call.

/// What a remote-backed component currently shows
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RemoteData<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Error(String),
}

/// Input to [`RemoteData::transition`]
#[derive(Debug, Clone, PartialEq)]
pub enum FetchEvent<T> {
    Start,
    Succeeded(T),
    Failed(String),
    Reset,
}

impl<T> RemoteData<T> {
    /// Next state for `event`.
    ///
    /// Results are only accepted while loading; one arriving after a reset
    /// (or a second one for the same request) is dropped.
    pub fn transition(self, event: FetchEvent<T>) -> Self {
        match (self, event) {
            (_, FetchEvent::Start) => RemoteData::Loading,
            (_, FetchEvent::Reset) => RemoteData::Idle,
            (RemoteData::Loading, FetchEvent::Succeeded(data)) => RemoteData::Success(data),
            (RemoteData::Loading, FetchEvent::Failed(reason)) => RemoteData::Error(reason),
            (state, _) => state,
        }
    }

    /// Drive a single request from start to its outcome
    pub fn from_result<E: std::fmt::Display>(result: std::result::Result<T, E>) -> Self {
        let outcome = match result {
            Ok(data) => FetchEvent::Succeeded(data),
            Err(err) => FetchEvent::Failed(err.to_string()),
        };
        RemoteData::Idle
            .transition(FetchEvent::Start)
            .transition(outcome)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteData::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            RemoteData::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RemoteData::Error(reason) => Some(reason),
            _ => None,
        }
    }
}
