pub mod clipboard;
pub mod copy;
pub mod script;

pub use clipboard::{Clipboard, ClipboardError};
pub use copy::CopyControl;
pub use script::{render_block, strip, wrap};
