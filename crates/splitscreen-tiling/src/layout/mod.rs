mod calculation;
mod types;

pub use calculation::layout;
pub use types::*;
