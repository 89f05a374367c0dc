pub mod logging;
pub mod terminal;

pub use logging::init_logging;
pub use terminal::{mask_token, message_preview};
