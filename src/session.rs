//! Interactive reorder session
//!
//! A two-state machine over an [`OrderedFileList`]. While navigating, Up and
//! Down move the selection; while relocating, they move the selected entry
//! itself. Toggle flips between the two and Confirm ends the session.

use tracing::debug;

use crate::error::{Error, Result};
use crate::input::{Key, KeySource};
use crate::order::{EntryId, OrderedFileList};
use crate::render::{draw, Renderer};

/// Whether arrow keys move the selection or the selected entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Up/Down change which entry is selected
    #[default]
    Navigating,
    /// Up/Down move the selected entry through the list
    Relocating,
}

impl Mode {
    fn toggled(self) -> Self {
        match self {
            Mode::Navigating => Mode::Relocating,
            Mode::Relocating => Mode::Navigating,
        }
    }
}

/// Outcome of feeding one key to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep reading keys
    Continue,
    /// User accepted the current order
    Confirmed,
}

/// Selection and mode for one reorder session
#[derive(Debug, Clone)]
pub struct ReorderSession {
    selected: EntryId,
    mode: Mode,
}

impl ReorderSession {
    /// Start navigating at the first entry of `list`
    pub fn new(list: &OrderedFileList) -> Result<Self> {
        let selected = list.first().ok_or(Error::NoInputFiles)?;
        Ok(Self {
            selected,
            mode: Mode::Navigating,
        })
    }

    pub fn selected(&self) -> EntryId {
        self.selected
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_relocating(&self) -> bool {
        self.mode == Mode::Relocating
    }

    /// Apply one key to the list and selection
    pub fn handle(&mut self, list: &mut OrderedFileList, key: Key) -> Transition {
        match (self.mode, key) {
            (_, Key::Confirm) => return Transition::Confirmed,
            (_, Key::Toggle) => self.mode = self.mode.toggled(),
            (Mode::Navigating, Key::Up) => {
                if let Some(prev) = list.prev(self.selected) {
                    self.selected = prev;
                }
            }
            (Mode::Navigating, Key::Down) => {
                if let Some(next) = list.next(self.selected) {
                    self.selected = next;
                }
            }
            (Mode::Relocating, Key::Up) => {
                list.move_entry_forward(self.selected);
            }
            (Mode::Relocating, Key::Down) => {
                list.move_entry_backward(self.selected);
            }
            (_, Key::Other) => {}
        }
        debug!(?key, mode = ?self.mode, selected = ?self.selected, "reorder transition");
        Transition::Continue
    }
}

/// Run the render/read/apply loop until the user confirms
///
/// `keys` is told when the session begins and ends, even if the loop fails.
pub fn run_session<K, R>(list: &mut OrderedFileList, keys: &mut K, renderer: &mut R) -> Result<()>
where
    K: KeySource + ?Sized,
    R: Renderer + ?Sized,
{
    let mut session = ReorderSession::new(list)?;
    keys.begin_session()?;
    let result = session_loop(&mut session, list, keys, renderer);
    keys.end_session();
    result
}

fn session_loop<K, R>(
    session: &mut ReorderSession,
    list: &mut OrderedFileList,
    keys: &mut K,
    renderer: &mut R,
) -> Result<()>
where
    K: KeySource + ?Sized,
    R: Renderer + ?Sized,
{
    loop {
        draw(renderer, list, session)?;
        let key = keys.next_key()?;
        if session.handle(list, key) == Transition::Confirmed {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::display_names;

    fn bac() -> OrderedFileList {
        OrderedFileList::from_paths(["b.pdf", "a.pdf", "c.pdf"])
    }

    fn feed(session: &mut ReorderSession, list: &mut OrderedFileList, keys: &[Key]) {
        for key in keys {
            assert_eq!(session.handle(list, *key), Transition::Continue);
        }
    }

    #[test]
    fn test_starts_navigating_on_first_entry() {
        let list = bac();
        let session = ReorderSession::new(&list).unwrap();
        assert_eq!(session.mode(), Mode::Navigating);
        assert_eq!(Some(session.selected()), list.first());
    }

    #[test]
    fn test_empty_list_is_rejected() {
        let list = OrderedFileList::new();
        assert!(matches!(ReorderSession::new(&list), Err(Error::NoInputFiles)));
    }

    /// Scripted keys that record session boundaries
    struct ScriptedKeys {
        keys: Vec<Key>,
        begun: usize,
        ended: usize,
        active_reads: usize,
    }

    impl ScriptedKeys {
        fn new(keys: &[Key]) -> Self {
            Self {
                keys: keys.iter().rev().copied().collect(),
                begun: 0,
                ended: 0,
                active_reads: 0,
            }
        }
    }

    impl KeySource for ScriptedKeys {
        fn next_key(&mut self) -> Result<Key> {
            if self.begun > self.ended {
                self.active_reads += 1;
            }
            self.keys.pop().ok_or(Error::InputClosed)
        }

        fn begin_session(&mut self) -> Result<()> {
            self.begun += 1;
            Ok(())
        }

        fn end_session(&mut self) {
            self.ended += 1;
        }
    }

    struct NullRenderer;

    impl Renderer for NullRenderer {
        fn begin_frame(&mut self) -> Result<()> {
            Ok(())
        }

        fn line(&mut self, _text: &str, _style: crate::render::StyleHint) -> Result<()> {
            Ok(())
        }

        fn end_frame(&mut self) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_session_reads_every_key_inside_one_session() {
        let mut list = bac();
        let mut keys = ScriptedKeys::new(&[Key::Down, Key::Toggle, Key::Up, Key::Confirm]);

        run_session(&mut list, &mut keys, &mut NullRenderer).unwrap();

        assert_eq!((keys.begun, keys.ended), (1, 1));
        assert_eq!(keys.active_reads, 4);
        assert_eq!(display_names(&list), vec!["a.pdf", "b.pdf", "c.pdf"]);
    }

    #[test]
    fn test_session_ends_even_when_input_runs_out() {
        let mut list = bac();
        let mut keys = ScriptedKeys::new(&[Key::Down]);

        let result = run_session(&mut list, &mut keys, &mut NullRenderer);

        assert!(matches!(result, Err(Error::InputClosed)));
        assert_eq!((keys.begun, keys.ended), (1, 1));
    }

    #[test]
    fn test_empty_list_never_begins_a_session() {
        let mut list = OrderedFileList::new();
        let mut keys = ScriptedKeys::new(&[Key::Confirm]);

        let result = run_session(&mut list, &mut keys, &mut NullRenderer);

        assert!(matches!(result, Err(Error::NoInputFiles)));
        assert_eq!(keys.begun, 0);
    }

    #[test]
    fn test_navigation_stops_at_edges() {
        let mut list = bac();
        let mut session = ReorderSession::new(&list).unwrap();
        feed(&mut session, &mut list, &[Key::Up]);
        assert_eq!(Some(session.selected()), list.first());

        feed(&mut session, &mut list, &[Key::Down, Key::Down, Key::Down, Key::Down]);
        assert_eq!(Some(session.selected()), list.last());
        assert_eq!(display_names(&list), vec!["b.pdf", "a.pdf", "c.pdf"]);
    }

    #[test]
    fn test_toggle_flips_mode_and_keeps_selection() {
        let mut list = bac();
        let mut session = ReorderSession::new(&list).unwrap();
        feed(&mut session, &mut list, &[Key::Down]);
        let selected = session.selected();

        feed(&mut session, &mut list, &[Key::Toggle]);
        assert!(session.is_relocating());
        assert_eq!(session.selected(), selected);

        feed(&mut session, &mut list, &[Key::Toggle]);
        assert_eq!(session.mode(), Mode::Navigating);
        assert_eq!(session.selected(), selected);
    }

    #[test]
    fn test_relocating_down_swaps_with_successor() {
        let mut list = bac();
        let mut session = ReorderSession::new(&list).unwrap();
        let b = session.selected();
        feed(&mut session, &mut list, &[Key::Toggle, Key::Down]);
        assert_eq!(display_names(&list), vec!["a.pdf", "b.pdf", "c.pdf"]);
        assert_eq!(session.selected(), b);
    }

    #[test]
    fn test_relocating_down_then_up_restores_order() {
        let mut list = bac();
        let mut session = ReorderSession::new(&list).unwrap();
        feed(&mut session, &mut list, &[Key::Toggle, Key::Down, Key::Up]);
        assert_eq!(display_names(&list), vec!["b.pdf", "a.pdf", "c.pdf"]);
    }

    #[test]
    fn test_relocating_past_edges_is_noop() {
        let mut list = bac();
        let mut session = ReorderSession::new(&list).unwrap();
        let b = session.selected();
        feed(&mut session, &mut list, &[Key::Toggle, Key::Up]);
        assert_eq!(display_names(&list), vec!["b.pdf", "a.pdf", "c.pdf"]);

        feed(&mut session, &mut list, &[Key::Down, Key::Down, Key::Down, Key::Down]);
        assert_eq!(display_names(&list), vec!["a.pdf", "c.pdf", "b.pdf"]);
        assert_eq!(session.selected(), b);
        assert_eq!(list.last(), Some(b));
    }

    #[test]
    fn test_other_keys_change_nothing() {
        let mut list = bac();
        let mut session = ReorderSession::new(&list).unwrap();
        feed(&mut session, &mut list, &[Key::Other, Key::Other]);
        assert_eq!(session.mode(), Mode::Navigating);
        assert_eq!(Some(session.selected()), list.first());
        assert_eq!(display_names(&list), vec!["b.pdf", "a.pdf", "c.pdf"]);
    }

    #[test]
    fn test_confirm_ends_session_in_either_mode() {
        let mut list = bac();
        let mut session = ReorderSession::new(&list).unwrap();
        assert_eq!(session.handle(&mut list, Key::Confirm), Transition::Confirmed);
        session.handle(&mut list, Key::Toggle);
        assert_eq!(session.handle(&mut list, Key::Confirm), Transition::Confirmed);
    }
}
