pub mod layout;

pub use layout::{layout, Arrangement, LayoutEngine};
