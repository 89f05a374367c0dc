pub mod apply;
pub mod pattern;

pub use apply::SelectionFilter;
pub use pattern::ChannelPattern;
