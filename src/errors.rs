use thiserror::Error;

/// Errors that can occur when operating on the list.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SListError {
    #[error("list is empty")]
    EmptyCollection,

    #[error("element not found")]
    NotFound,
}
