/// Opaque position of an element inside one [`SList`](crate::SList).
///
/// Node ids are never reused, so a handle to an erased element simply stops
/// resolving instead of pointing at some other value. Ids are numbered per
/// list, so a handle from one list (or from the list a clone was taken of)
/// may name an unrelated element in another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(pub(crate) usize);

impl Handle {
    /// Returns the raw numeric identifier for debugging or external maps.
    pub fn as_raw(&self) -> usize {
        self.0
    }
}
