use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
#[cfg(feature = "docs")]
use utoipa::ToSchema;

use crate::artwork::{ArtPiece, ArtworkStatus};
use crate::error::{DomainError, DomainResult};

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    CreatedAt,
    Name,
    Price,
    Year,
}

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ArtworkStatus),
}

impl StatusFilter {
    pub fn parse(value: &str) -> DomainResult<Self> {
        if value == "all" {
            return Ok(Self::All);
        }
        ArtworkStatus::parse(value).map(Self::Only)
    }

    #[must_use]
    pub fn matches(&self, status: ArtworkStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }
}

/// Conjunction of a case-insensitive name substring match and a status
/// match, mirroring the admin list editor's two controls.
#[derive(Debug, Clone, Default)]
pub struct GalleryFilter {
    pub search: Option<String>,
    pub status: StatusFilter,
}

impl GalleryFilter {
    #[must_use]
    pub fn matches(&self, piece: &ArtPiece) -> bool {
        let matches_search = self.search.as_deref().is_none_or(|term| {
            piece
                .name
                .to_lowercase()
                .contains(&term.to_lowercase())
        });
        matches_search && self.status.matches(piece.status)
    }
}

fn compare_by_key(a: &ArtPiece, b: &ArtPiece, key: SortKey) -> Ordering {
    match key {
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        // missing numeric fields sort as zero
        SortKey::Price => a
            .price
            .unwrap_or(0.0)
            .total_cmp(&b.price.unwrap_or(0.0)),
        SortKey::Year => a.year.unwrap_or(0).cmp(&b.year.unwrap_or(0)),
    }
}

/// Filtered, sorted snapshot of `pieces`. Input order survives exact
/// key ties (stable sort); the input itself is never mutated.
#[must_use]
pub fn filter_and_sort(
    pieces: &[ArtPiece],
    filter: &GalleryFilter,
    key: SortKey,
    direction: SortDirection,
) -> Vec<ArtPiece> {
    let mut view: Vec<ArtPiece> = pieces
        .iter()
        .filter(|piece| filter.matches(piece))
        .cloned()
        .collect();

    view.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, key);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    view
}

/// Fixed public-gallery policy: available pieces first, then
/// commissions, then sold, each group newest-first.
pub const PUBLIC_STATUS_ORDER: [ArtworkStatus; 3] = [
    ArtworkStatus::Available,
    ArtworkStatus::Commission,
    ArtworkStatus::Sold,
];

#[must_use]
pub fn public_gallery_order(pieces: &[ArtPiece]) -> Vec<ArtPiece> {
    let mut ordered = Vec::with_capacity(pieces.len());
    for status in PUBLIC_STATUS_ORDER {
        let group = GalleryFilter {
            search: None,
            status: StatusFilter::Only(status),
        };
        ordered.extend(filter_and_sort(
            pieces,
            &group,
            SortKey::CreatedAt,
            SortDirection::Desc,
        ));
    }
    ordered
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::artwork::ArtPieceId;
    use time::OffsetDateTime;

    fn piece(name: &str, status: ArtworkStatus, price: Option<f64>, day: i64) -> ArtPiece {
        ArtPiece {
            id: ArtPieceId::new(),
            slug: crate::slug::slugify(name),
            name: name.to_string(),
            description: String::new(),
            dimensions: None,
            price,
            year: None,
            status,
            video_url: None,
            main_image: String::new(),
            images: Vec::new(),
            palette: Vec::new(),
            created_at: OffsetDateTime::from_unix_timestamp(day * 86_400).unwrap(),
        }
    }

    #[test]
    fn status_filter_keeps_matching_only() {
        let pieces = vec![
            piece("B", ArtworkStatus::Sold, Some(10.0), 1),
            piece("A", ArtworkStatus::Available, Some(5.0), 2),
        ];
        let filter = GalleryFilter {
            search: None,
            status: StatusFilter::Only(ArtworkStatus::Available),
        };
        let view = filter_and_sort(&pieces, &filter, SortKey::Name, SortDirection::Asc);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "A");
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let pieces = vec![
            piece("Vetrarsól", ArtworkStatus::Available, None, 1),
            piece("Sumarnótt", ArtworkStatus::Available, None, 2),
        ];
        let filter = GalleryFilter {
            search: Some("VETRAR".to_string()),
            status: StatusFilter::All,
        };
        let view = filter_and_sort(&pieces, &filter, SortKey::Name, SortDirection::Asc);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Vetrarsól");
    }

    #[test]
    fn price_sort_both_directions() {
        let pieces = vec![
            piece("a", ArtworkStatus::Available, Some(30.0), 1),
            piece("b", ArtworkStatus::Available, Some(10.0), 2),
            piece("c", ArtworkStatus::Available, Some(20.0), 3),
        ];
        let filter = GalleryFilter::default();

        let asc = filter_and_sort(&pieces, &filter, SortKey::Price, SortDirection::Asc);
        let prices: Vec<f64> = asc.iter().map(|p| p.price.unwrap()).collect();
        assert_eq!(prices, [10.0, 20.0, 30.0]);

        let desc = filter_and_sort(&pieces, &filter, SortKey::Price, SortDirection::Desc);
        let prices: Vec<f64> = desc.iter().map(|p| p.price.unwrap()).collect();
        assert_eq!(prices, [30.0, 20.0, 10.0]);
    }

    #[test]
    fn missing_price_sorts_as_zero() {
        let pieces = vec![
            piece("a", ArtworkStatus::Available, Some(5.0), 1),
            piece("b", ArtworkStatus::Available, None, 2),
        ];
        let view = filter_and_sort(
            &pieces,
            &GalleryFilter::default(),
            SortKey::Price,
            SortDirection::Asc,
        );
        assert_eq!(view[0].name, "b");
    }

    #[test]
    fn ties_keep_input_order() {
        let pieces = vec![
            piece("first", ArtworkStatus::Available, Some(10.0), 1),
            piece("second", ArtworkStatus::Available, Some(10.0), 2),
            piece("third", ArtworkStatus::Available, Some(10.0), 3),
        ];
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let view = filter_and_sort(&pieces, &GalleryFilter::default(), SortKey::Price, direction);
            let names: Vec<&str> = view.iter().map(|p| p.name.as_str()).collect();
            assert_eq!(names, ["first", "second", "third"]);
        }
    }

    #[test]
    fn public_order_groups_then_newest_first() {
        let pieces = vec![
            piece("old sold", ArtworkStatus::Sold, None, 1),
            piece("old available", ArtworkStatus::Available, None, 2),
            piece("commission", ArtworkStatus::Commission, None, 3),
            piece("new available", ArtworkStatus::Available, None, 4),
            piece("new sold", ArtworkStatus::Sold, None, 5),
        ];
        let ordered = public_gallery_order(&pieces);
        let names: Vec<&str> = ordered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "new available",
                "old available",
                "commission",
                "new sold",
                "old sold"
            ]
        );
    }

    #[test]
    fn input_not_mutated() {
        let pieces = vec![
            piece("z", ArtworkStatus::Available, Some(2.0), 1),
            piece("a", ArtworkStatus::Available, Some(1.0), 2),
        ];
        let _ = filter_and_sort(
            &pieces,
            &GalleryFilter::default(),
            SortKey::Name,
            SortDirection::Asc,
        );
        assert_eq!(pieces[0].name, "z");
    }
}
