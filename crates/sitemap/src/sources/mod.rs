pub mod catalog;
pub mod category;
pub mod root;
