pub mod fallback;
pub mod grid;
pub mod panel;
pub mod table;
pub mod upload;
