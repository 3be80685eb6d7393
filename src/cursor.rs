use crate::{handle::Handle, s_list::SList};

/// Read-only forward cursor over an [`SList`].
///
/// Starts at the first element; the end position is one past the tail.
pub struct Cursor<'a, T> {
    list: &'a SList<T>,
    current: Option<usize>,
}

/// Forward cursor that can modify the element under it.
pub struct CursorMut<'a, T> {
    list: &'a mut SList<T>,
    current: Option<usize>,
}

impl<T> SList<T> {
    /// Cursor positioned at the first element.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor {
            current: self.first(),
            list: self,
        }
    }

    /// Mutable cursor positioned at the first element.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            current: self.first(),
            list: self,
        }
    }
}

impl<'a, T> Cursor<'a, T> {
    /// Element under the cursor, `None` at the end.
    pub fn current(&self) -> Option<&'a T> {
        let list = self.list;
        self.current.and_then(|id| list.get(Handle(id)))
    }

    /// Handle of the element under the cursor.
    pub fn handle(&self) -> Option<Handle> {
        self.current.map(Handle)
    }

    /// Step to the next element. No-op at the end.
    pub fn move_next(&mut self) {
        if let Some(id) = self.current {
            self.current = self.list.successor(id);
        }
    }

    /// Is the cursor one past the tail?
    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Cursor {
            list: self.list,
            current: self.current,
        }
    }
}

impl<'a, T> CursorMut<'a, T> {
    /// Element under the cursor, `None` at the end.
    pub fn current(&self) -> Option<&T> {
        self.current.and_then(|id| self.list.get(Handle(id)))
    }

    /// Mutable access to the element under the cursor.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        match self.current {
            Some(id) => self.list.get_mut(Handle(id)),
            None => None,
        }
    }

    /// Handle of the element under the cursor.
    pub fn handle(&self) -> Option<Handle> {
        self.current.map(Handle)
    }

    /// Step to the next element. No-op at the end.
    pub fn move_next(&mut self) {
        if let Some(id) = self.current {
            self.current = self.list.successor(id);
        }
    }

    /// Is the cursor one past the tail?
    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }
}

#[cfg(test)]
mod tests {
    use crate::SList;

    #[test]
    fn walks_to_end() {
        let list = SList::from([1, 2, 3]);
        let mut cursor = list.cursor();
        let mut seen = Vec::new();
        while !cursor.is_at_end() {
            seen.push(*cursor.current().unwrap());
            cursor.move_next();
        }
        assert_eq!(seen, vec![1, 2, 3]);

        cursor.move_next();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.handle(), None);
    }

    #[test]
    fn empty_list_cursor_starts_at_end() {
        let list: SList<u8> = SList::new();
        assert!(list.cursor().is_at_end());
    }

    #[test]
    fn each_cursor_starts_fresh() {
        let list = SList::from(["a", "b"]);
        let mut first = list.cursor();
        first.move_next();
        assert_eq!(first.current(), Some(&"b"));
        assert_eq!(list.cursor().current(), Some(&"a"));
    }

    #[test]
    fn handle_matches_find() {
        let list = SList::from([5, 6, 7]);
        let mut cursor = list.cursor();
        cursor.move_next();
        let handle = cursor.handle().unwrap();
        assert_eq!(Some(handle), list.find(&6).unwrap());
        // push order 5, 6, 7 issues ids 1, 2, 3
        assert_eq!(handle.as_raw(), 2);
    }

    #[test]
    fn cursor_mut_edits_in_place() {
        let mut list = SList::from([1, 2, 3]);
        let mut cursor = list.cursor_mut();
        while !cursor.is_at_end() {
            if let Some(v) = cursor.current_mut() {
                *v += 100;
            }
            cursor.move_next();
        }
        assert!(cursor.current().is_none());
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![101, 102, 103]);
    }
}
