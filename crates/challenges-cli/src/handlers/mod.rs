pub mod catalog;
pub mod window;
