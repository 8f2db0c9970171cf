use crate::error::{AppError, AppResult};
use domain::artwork::ArtworkStatus;
use domain::slug::slugify;

/// Incoming shape for creating or updating a piece. Media fields are
/// managed by the media pipeline and never set from a draft.
#[derive(Debug, Clone)]
pub struct ArtPieceDraft {
    pub slug: Option<String>,
    pub name: String,
    pub description: String,
    pub dimensions: Option<String>,
    pub price: Option<f64>,
    pub year: Option<i32>,
    pub status: ArtworkStatus,
    pub video_url: Option<String>,
}

impl ArtPieceDraft {
    /// An explicit slug wins; otherwise one is derived from the name.
    /// A name that slugifies to nothing cannot be addressed by URL.
    pub fn resolve_slug(&self) -> AppResult<String> {
        let slug = match &self.slug {
            Some(s) if !s.trim().is_empty() => slugify(s),
            _ => slugify(&self.name),
        };
        if slug.is_empty() {
            return Err(AppError::ValidationError {
                message: "piece name must contain at least one alphanumeric character".to_string(),
            });
        }
        Ok(slug)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn draft(name: &str) -> ArtPieceDraft {
        ArtPieceDraft {
            slug: None,
            name: name.to_string(),
            description: String::new(),
            dimensions: None,
            price: None,
            year: None,
            status: ArtworkStatus::Available,
            video_url: None,
        }
    }

    #[test]
    fn derives_slug_from_name() {
        assert_eq!(draft("Vetrarsól í Reykjavík").resolve_slug().unwrap(), "vetrarsol-i-reykjavik");
    }

    #[test]
    fn explicit_slug_wins_but_is_normalized() {
        let mut d = draft("Some Name");
        d.slug = Some("My Custom SLUG!".to_string());
        assert_eq!(d.resolve_slug().unwrap(), "my-custom-slug");
    }

    #[test]
    fn unsluggable_name_is_rejected() {
        assert!(draft("!!!").resolve_slug().is_err());
        assert!(draft("").resolve_slug().is_err());
    }
}
