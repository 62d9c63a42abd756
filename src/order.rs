//! Ordered file list
//!
//! A doubly-linked sequence of [`FileEntry`] values stored in an arena.
//! Entries are addressed by [`EntryId`] handles that stay valid while the
//! entry is moved around, so a held selection keeps pointing at the same
//! file after it has been relocated.

use std::path::{Path, PathBuf};

/// One file queued for merging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path to the file on disk
    pub path: PathBuf,
}

impl FileEntry {
    /// File name used for display, falling back to the full path
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Stable handle to an entry in an [`OrderedFileList`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(usize);

#[derive(Debug, Clone)]
struct Node {
    entry: FileEntry,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Ordered sequence of files with O(1) adjacent moves
#[derive(Debug, Clone, Default)]
pub struct OrderedFileList {
    nodes: Vec<Node>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl OrderedFileList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from paths, keeping their order
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut list = Self::new();
        for path in paths {
            list.push_back(path);
        }
        list
    }

    /// Append a new entry and return its handle
    pub fn push_back(&mut self, path: impl Into<PathBuf>) -> EntryId {
        let index = self.nodes.len();
        self.nodes.push(Node {
            entry: FileEntry { path: path.into() },
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        EntryId(index)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn first(&self) -> Option<EntryId> {
        self.head.map(EntryId)
    }

    pub fn last(&self) -> Option<EntryId> {
        self.tail.map(EntryId)
    }

    /// Entry immediately before `id`, if any
    pub fn prev(&self, id: EntryId) -> Option<EntryId> {
        self.nodes.get(id.0).and_then(|node| node.prev).map(EntryId)
    }

    /// Entry immediately after `id`, if any
    pub fn next(&self, id: EntryId) -> Option<EntryId> {
        self.nodes.get(id.0).and_then(|node| node.next).map(EntryId)
    }

    pub fn get(&self, id: EntryId) -> Option<&FileEntry> {
        self.nodes.get(id.0).map(|node| &node.entry)
    }

    /// Iterate entries in list order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    /// Paths in list order
    pub fn paths(&self) -> Vec<PathBuf> {
        self.iter().map(|(_, entry)| entry.path.clone()).collect()
    }

    /// Move `id` one place towards the front.
    ///
    /// Returns `false` without touching the list when `id` is already first.
    pub fn move_entry_forward(&mut self, id: EntryId) -> bool {
        let Some(prev) = self.prev(id) else {
            return false;
        };
        self.unlink(id.0);
        self.link_before(id.0, prev.0);
        true
    }

    /// Move `id` one place towards the back.
    ///
    /// Returns `false` without touching the list when `id` is already last.
    pub fn move_entry_backward(&mut self, id: EntryId) -> bool {
        let Some(next) = self.next(id) else {
            return false;
        };
        self.unlink(id.0);
        self.link_after(id.0, next.0);
        true
    }

    fn unlink(&mut self, index: usize) {
        let Node { prev, next, .. } = self.nodes[index];
        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }
        self.nodes[index].prev = None;
        self.nodes[index].next = None;
    }

    fn link_before(&mut self, index: usize, anchor: usize) {
        let before = self.nodes[anchor].prev;
        self.nodes[index].prev = before;
        self.nodes[index].next = Some(anchor);
        self.nodes[anchor].prev = Some(index);
        match before {
            Some(b) => self.nodes[b].next = Some(index),
            None => self.head = Some(index),
        }
    }

    fn link_after(&mut self, index: usize, anchor: usize) {
        let after = self.nodes[anchor].next;
        self.nodes[index].next = after;
        self.nodes[index].prev = Some(anchor);
        self.nodes[anchor].next = Some(index);
        match after {
            Some(a) => self.nodes[a].prev = Some(index),
            None => self.tail = Some(index),
        }
    }
}

/// In-order iterator over an [`OrderedFileList`]
pub struct Iter<'a> {
    list: &'a OrderedFileList,
    cursor: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (EntryId, &'a FileEntry);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor?;
        let node = &self.list.nodes[index];
        self.cursor = node.next;
        Some((EntryId(index), &node.entry))
    }
}

impl<'a> IntoIterator for &'a OrderedFileList {
    type Item = (EntryId, &'a FileEntry);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Names of the files in `list`, in order
pub fn display_names(list: &OrderedFileList) -> Vec<String> {
    list.iter().map(|(_, entry)| entry.display_name()).collect()
}

/// Directory holding `path`, or the current directory for bare file names
pub fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &OrderedFileList) -> Vec<String> {
        display_names(list)
    }

    fn abcd() -> (OrderedFileList, Vec<EntryId>) {
        let mut list = OrderedFileList::new();
        let ids = ["a.pdf", "b.pdf", "c.pdf", "d.pdf"]
            .iter()
            .map(|name| list.push_back(*name))
            .collect();
        (list, ids)
    }

    #[test]
    fn test_from_paths_keeps_order() {
        let list = OrderedFileList::from_paths(["b.pdf", "a.pdf", "c.pdf"]);
        assert_eq!(names(&list), vec!["b.pdf", "a.pdf", "c.pdf"]);
        assert_eq!(list.len(), 3);
        assert!(!list.is_empty());
    }

    #[test]
    fn test_move_first_forward_is_noop() {
        let (mut list, ids) = abcd();
        assert!(!list.move_entry_forward(ids[0]));
        assert_eq!(names(&list), vec!["a.pdf", "b.pdf", "c.pdf", "d.pdf"]);
    }

    #[test]
    fn test_move_last_backward_is_noop() {
        let (mut list, ids) = abcd();
        assert!(!list.move_entry_backward(ids[3]));
        assert_eq!(names(&list), vec!["a.pdf", "b.pdf", "c.pdf", "d.pdf"]);
    }

    #[test]
    fn test_move_forward_then_backward_restores_order() {
        let (mut list, ids) = abcd();
        assert!(list.move_entry_forward(ids[2]));
        assert_eq!(names(&list), vec!["a.pdf", "c.pdf", "b.pdf", "d.pdf"]);
        assert!(list.move_entry_backward(ids[2]));
        assert_eq!(names(&list), vec!["a.pdf", "b.pdf", "c.pdf", "d.pdf"]);
    }

    #[test]
    fn test_move_to_front_updates_head() {
        let (mut list, ids) = abcd();
        list.move_entry_forward(ids[1]);
        assert_eq!(list.first(), Some(ids[1]));
        assert_eq!(list.prev(ids[1]), None);
        assert_eq!(list.next(ids[1]), Some(ids[0]));
        assert_eq!(list.prev(ids[0]), Some(ids[1]));
    }

    #[test]
    fn test_move_to_back_updates_tail() {
        let (mut list, ids) = abcd();
        list.move_entry_backward(ids[2]);
        assert_eq!(list.last(), Some(ids[2]));
        assert_eq!(list.next(ids[2]), None);
        assert_eq!(list.prev(ids[2]), Some(ids[3]));
        assert_eq!(names(&list), vec!["a.pdf", "b.pdf", "d.pdf", "c.pdf"]);
    }

    #[test]
    fn test_handle_follows_entry_across_moves() {
        let (mut list, ids) = abcd();
        for _ in 0..3 {
            list.move_entry_backward(ids[0]);
        }
        assert_eq!(list.last(), Some(ids[0]));
        assert_eq!(list.get(ids[0]).map(|e| e.display_name()), Some("a.pdf".to_string()));
    }

    #[test]
    fn test_moving_one_entry_keeps_others_in_order() {
        let (mut list, ids) = abcd();
        let moves = [true, true, false, true, false, false, false];
        for forward in moves {
            if forward {
                list.move_entry_forward(ids[2]);
            } else {
                list.move_entry_backward(ids[2]);
            }
            let others: Vec<String> = list
                .iter()
                .filter(|(id, _)| *id != ids[2])
                .map(|(_, entry)| entry.display_name())
                .collect();
            assert_eq!(others, vec!["a.pdf", "b.pdf", "d.pdf"]);
            assert_eq!(list.iter().count(), 4);
        }
    }

    #[test]
    fn test_duplicate_paths_are_distinct_entries() {
        let mut list = OrderedFileList::new();
        let first = list.push_back("same.pdf");
        let second = list.push_back("same.pdf");
        assert_ne!(first, second);
        list.move_entry_forward(second);
        assert_eq!(list.first(), Some(second));
        assert_eq!(list.last(), Some(first));
    }

    #[test]
    fn test_single_entry_moves_are_noops() {
        let mut list = OrderedFileList::from_paths(["only.pdf"]);
        let id = list.first().unwrap();
        assert!(!list.move_entry_forward(id));
        assert!(!list.move_entry_backward(id));
        assert_eq!(list.first(), list.last());
    }

    #[test]
    fn test_parent_dir_of_bare_name_is_current_dir() {
        assert_eq!(parent_dir(Path::new("a.pdf")), PathBuf::from("."));
        assert_eq!(parent_dir(Path::new("docs/a.pdf")), PathBuf::from("docs"));
    }
}
