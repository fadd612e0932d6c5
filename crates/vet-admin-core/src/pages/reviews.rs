//! Reviews page: moderation of public reviews.

use serde::Serialize;

use super::{average_rounded, FilterControls, Page};
use crate::error::PanelResult;
use crate::filter::{distinct_values, FilterSpec, Options};
use crate::models::{Review, Visibility};
use crate::view::CollectionView;

pub const REVIEW_REVIEWER: &str = "reviewer";
pub const REVIEW_TYPE: &str = "type";
pub const REVIEW_VISIBILITY: &str = "visibility";

fn reviewer_fields(review: &Review) -> Vec<&str> {
    vec![review.reviewer.as_str(), review.email.as_str()]
}

fn kind(review: &Review) -> &str {
    &review.kind
}

fn visibility(review: &Review) -> &str {
    review.visibility().as_str()
}

pub fn review_filters() -> FilterSpec<Review> {
    FilterSpec::new()
        .text(REVIEW_REVIEWER, reviewer_fields)
        .choice(REVIEW_TYPE, kind, Options::Derived)
        .choice(
            REVIEW_VISIBILITY,
            visibility,
            Options::closed::<Visibility>(),
        )
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReviewStats {
    pub total: usize,
    pub shown: usize,
    pub hidden: usize,
    pub average_rating: f64,
}

pub struct ReviewsPage {
    reviews: CollectionView<Review>,
}

impl ReviewsPage {
    pub fn new(reviews: Vec<Review>) -> Self {
        Self {
            reviews: CollectionView::new(reviews, review_filters()),
        }
    }

    /// Search reviewer name and email.
    pub fn search_reviewer(&mut self, query: &str) -> PanelResult<()> {
        self.set_text(REVIEW_REVIEWER, query)
    }

    pub fn filter_type(&mut self, kind: Option<&str>) -> PanelResult<()> {
        self.select(REVIEW_TYPE, kind)
    }

    pub fn filter_visibility(&mut self, visibility: Option<Visibility>) -> PanelResult<()> {
        self.select(REVIEW_VISIBILITY, visibility.map(|v| v.as_str()))
    }

    pub fn type_options(&self) -> Vec<String> {
        distinct_values(self.reviews.records(), kind)
    }

    /// Publish a hidden review or hide a published one.
    pub fn toggle_visibility(&mut self, id: u32) -> PanelResult<&Review> {
        self.reviews
            .update(&id, |review| review.visible = !review.visible)
    }

    pub fn stats(&self) -> ReviewStats {
        let records = self.reviews.records();
        let shown = records.iter().filter(|r| r.visible).count();
        ReviewStats {
            total: records.len(),
            shown,
            hidden: records.len() - shown,
            average_rating: average_rounded(records.iter().map(|r| f64::from(r.rating))),
        }
    }
}

impl Page for ReviewsPage {
    type Record = Review;

    fn collection(&self) -> &CollectionView<Review> {
        &self.reviews
    }

    fn collection_mut(&mut self) -> &mut CollectionView<Review> {
        &mut self.reviews
    }
}
