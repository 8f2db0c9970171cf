// keep public for OpenAPI docs
pub mod art_pieces;
pub mod auth;
pub mod gallery;
pub mod health;
pub mod media;
pub mod murals;
pub mod orders;
pub mod sections;
