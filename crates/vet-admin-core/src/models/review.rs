//! Review models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Record;

wire_enum! {
    /// Whether a review is published on the public site.
    pub enum Visibility {
        Shown => "shown",
        Hidden => "hidden",
    }
}

/// A review left by a pet parent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    pub id: u32,
    pub reviewer: String,
    pub email: String,
    /// What was reviewed (e.g., "Dr. Whiskers (Vet)")
    pub target: String,
    /// Review category (e.g., "Vet")
    #[serde(rename = "type")]
    pub kind: String,
    /// Star rating, 1-5
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
    pub visible: bool,
}

impl Record for Review {
    type Id = u32;
    const KIND: &'static str = "Review";

    fn id(&self) -> &u32 {
        &self.id
    }
}

impl Review {
    pub fn visibility(&self) -> Visibility {
        if self.visible {
            Visibility::Shown
        } else {
            Visibility::Hidden
        }
    }
}
