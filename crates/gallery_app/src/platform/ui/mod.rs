pub mod constants;
pub mod grid;
pub mod layout;
pub mod render;
