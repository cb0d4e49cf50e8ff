//! keyboard input.
//!
//! the watcher runs on its own thread, blocked on the keyboard, and cancels the monitor when the
//! cancel key is pressed.

use {
    crate::cancel::Cancel,
    crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    std::{collections::VecDeque, io, thread},
};


/// a key press, as far as the monitor is concerned.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Key {
    /// the cancel key.
    Escape,
    /// ctrl-c. raw mode delivers this as a key rather than a signal.
    Interrupt,
    Other,
}

/// a source of key presses.
pub trait Keys {
    /// blocks until a key is pressed.
    fn next_key(&mut self) -> io::Result<Key>;
}

/// key presses read from the terminal.
#[derive(Default)]
pub struct TerminalKeys;

/// replays a fixed sequence of keys, then fails.
#[allow(dead_code, reason = "this is a testing utility.")]
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
}

/// spawns the input watcher.
///
/// the watcher exits once it has cancelled the monitor. it is not joined on shutdown, since it may
/// be blocked on the keyboard; exiting the process ends it.
pub fn spawn<K>(keys: K, cancel: Cancel) -> io::Result<thread::JoinHandle<()>>
where
    K: Keys + Send + 'static,
{
    thread::Builder::new()
        .name("input".to_owned())
        .spawn(move || watch(keys, cancel))
}

fn watch(mut keys: impl Keys, cancel: Cancel) {
    loop {
        match keys.next_key() {
            Ok(Key::Escape) => {
                log::debug!("cancel key pressed");
                break;
            }
            Ok(Key::Interrupt) => {
                log::debug!("interrupted from the keyboard");
                break;
            }
            // something else stopped the monitor.
            Ok(Key::Other) if cancel.is_cancelled() => return,
            Ok(Key::Other) => continue,
            Err(error) => {
                log::error!("failed to read keyboard input: {error}");
                break;
            }
        }
    }

    cancel.cancel();
}

// === impl TerminalKeys ===

impl Keys for TerminalKeys {
    fn next_key(&mut self) -> io::Result<Key> {
        loop {
            let Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) = event::read()?
            else {
                continue;
            };

            return Ok(match code {
                KeyCode::Esc => Key::Escape,
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Key::Interrupt,
                _ => Key::Other,
            });
        }
    }
}

impl<K: Keys + ?Sized> Keys for &mut K {
    fn next_key(&mut self) -> io::Result<Key> {
        (**self).next_key()
    }
}

// === impl ScriptedKeys ===

#[allow(dead_code, reason = "this is a testing utility.")]
impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }
}

impl Keys for ScriptedKeys {
    fn next_key(&mut self) -> io::Result<Key> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more keys"))
    }
}
