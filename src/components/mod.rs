pub mod claim;
pub mod labels;
pub mod withdraw;

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;

/// A flow control that reacts to key and paste events and emits actions.
pub trait Component {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<()>;

    fn handle_paste(&mut self, _text: &str) -> Result<()> {
        Ok(())
    }
}
