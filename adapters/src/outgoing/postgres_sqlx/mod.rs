pub mod art_store_postgres;
pub mod mural_store_postgres;
pub mod section_store_postgres;
pub mod utils;
