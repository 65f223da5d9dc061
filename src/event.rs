use std::io;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};

#[derive(Clone, Debug)]
pub enum Event {
    Key(KeyEvent),
    Resize,
}

/// Blocks until the terminal delivers a key press or a resize. There is no
/// tick: the screen only changes in response to the user.
pub fn next_event() -> io::Result<Event> {
    loop {
        match event::read()? {
            CrosstermEvent::Key(key) => return Ok(Event::Key(key)),
            CrosstermEvent::Resize(_, _) => return Ok(Event::Resize),
            _ => {}
        }
    }
}
