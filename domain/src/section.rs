/// Editable heading content for one public page, keyed by slug
/// (e.g. `alchemical-art-pieces`, `murals`).
#[derive(Debug, Clone)]
pub struct Section {
    pub slug: String,
    pub title: String,
    pub description: String,
}
