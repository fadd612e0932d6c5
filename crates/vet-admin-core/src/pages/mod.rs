//! Page state containers.
//!
//! Each list page owns one [`CollectionView`] built from its own filter spec,
//! plus typed filter setters, page statistics and (for donations, reviews and
//! moderators) the mutations that page offers.

mod appointments;
mod doctors;
mod donations;
mod moderators;
mod pet_parents;
mod reviews;

pub use appointments::*;
pub use doctors::*;
pub use donations::*;
pub use moderators::*;
pub use pet_parents::*;
pub use reviews::*;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PanelResult;
use crate::filter::FilterState;
use crate::models::Record;
use crate::view::CollectionView;

/// The list pages of the admin panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKind {
    Appointments,
    Doctors,
    PetParents,
    Donations,
    Reviews,
    Moderators,
}

/// A page backed by a filtered collection.
pub trait Page {
    type Record: Record;

    fn collection(&self) -> &CollectionView<Self::Record>;

    fn collection_mut(&mut self) -> &mut CollectionView<Self::Record>;

    /// Records passing the page's current filters.
    fn view(&self) -> Vec<&Self::Record> {
        self.collection().view()
    }
}

/// Filter controls shared by every page, addressed by key.
///
/// Object safe, so a caller can drive any page through `&mut dyn FilterControls`.
pub trait FilterControls {
    fn set_text(&mut self, key: &str, query: &str) -> PanelResult<()>;

    fn select(&mut self, key: &str, value: Option<&str>) -> PanelResult<()>;

    fn set_date(&mut self, key: &str, date: Option<NaiveDate>) -> PanelResult<()>;

    fn clear_filters(&mut self);

    /// Whether the "Clear" action should be offered.
    fn has_active_filters(&self) -> bool;

    /// Option list for a choice key.
    fn options(&self, key: &str) -> PanelResult<Vec<String>>;

    fn filter_state(&self) -> &FilterState;
}

impl<P: Page> FilterControls for P {
    fn set_text(&mut self, key: &str, query: &str) -> PanelResult<()> {
        self.collection_mut().set_text(key, query)
    }

    fn select(&mut self, key: &str, value: Option<&str>) -> PanelResult<()> {
        self.collection_mut().select(key, value)
    }

    fn set_date(&mut self, key: &str, date: Option<NaiveDate>) -> PanelResult<()> {
        self.collection_mut().set_date(key, date)
    }

    fn clear_filters(&mut self) {
        self.collection_mut().clear_filters()
    }

    fn has_active_filters(&self) -> bool {
        self.collection().has_active_filters()
    }

    fn options(&self, key: &str) -> PanelResult<Vec<String>> {
        self.collection().options(key)
    }

    fn filter_state(&self) -> &FilterState {
        self.collection().state()
    }
}

/// Mean rounded to one decimal place; 0 for no values.
fn average_rounded<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return 0.0;
    }
    (sum / count as f64 * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_rounded() {
        assert_eq!(average_rounded([4.8, 4.6, 4.9]), 4.8);
        assert_eq!(average_rounded([5.0, 3.0]), 4.0);
        assert_eq!(average_rounded(Vec::<f64>::new()), 0.0);
    }

    #[test]
    fn test_page_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&PageKind::PetParents).unwrap(),
            "\"pet-parents\""
        );
    }
}
