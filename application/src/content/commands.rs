use crate::error::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct MuralDraft {
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub year: Option<i32>,
    pub display_order: i32,
}

impl MuralDraft {
    pub fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::ValidationError {
                message: "mural title is required".to_string(),
            });
        }
        Ok(())
    }
}
