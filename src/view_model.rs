/// The lifecycle of exactly one logical fetch.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum FetchingState<T> {
    #[default]
    Fetching,
    Fetched(T),
    Error(String),
}

impl<T> FetchingState<T> {
    pub fn is_fetching(&self) -> bool {
        matches!(self, FetchingState::Fetching)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            FetchingState::Fetched(value) => Some(value),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchingState::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> From<Result<T, String>> for FetchingState<T> {
    fn from(value: Result<T, String>) -> Self {
        match value {
            Ok(value) => FetchingState::Fetched(value),
            Err(message) => FetchingState::Error(message),
        }
    }
}
