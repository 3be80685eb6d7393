#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) id: usize,
    pub(crate) next: Option<usize>,
    pub(crate) value: Option<T>,
}

impl<T> Node<T> {
    pub(crate) fn sentinel(id: usize) -> Self {
        Node {
            id,
            next: None,
            value: None,
        }
    }

    pub(crate) fn with_value(id: usize, value: T, next: Option<usize>) -> Self {
        Node {
            id,
            next,
            value: Some(value),
        }
    }

    /// Does this node carry a user value? Only the sentinel does not.
    pub(crate) fn is_live(&self) -> bool {
        self.value.is_some()
    }
}
