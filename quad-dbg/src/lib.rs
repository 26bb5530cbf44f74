mod screendump;
mod screenlog;

pub use screendump::*;
pub use screenlog::*;
