pub mod catalog;
pub mod content;
pub mod gallery;
pub mod media;
pub mod orders;
