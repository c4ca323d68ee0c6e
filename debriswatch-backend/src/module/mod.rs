pub mod catalog;
pub mod detect;
