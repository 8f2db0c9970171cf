pub mod artwork;
pub mod color;
pub mod crop;
pub mod error;
pub mod gallery;
pub mod mural;
pub mod order;
pub mod section;
pub mod slug;
