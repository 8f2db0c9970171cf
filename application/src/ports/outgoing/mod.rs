pub mod art_store;
pub mod blocking_task;
pub mod email_sender;
pub mod image_codec;
pub mod mural_store;
pub mod object_storage;
pub mod palette_extractor;
pub mod password_hasher;
pub mod section_store;
