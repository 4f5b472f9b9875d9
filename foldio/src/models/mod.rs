pub mod entry;
pub mod notification;
pub mod tree;
pub mod ui;
