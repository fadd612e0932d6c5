//! Pet parent (owner) and pet models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Address, Record};

wire_enum! {
    /// Account status of a pet parent.
    pub enum PetParentStatus {
        Active => "active",
        Inactive => "inactive",
        Blocked => "blocked",
    }
}

wire_enum! {
    /// Preferred payment method.
    pub enum PaymentMethod {
        Cash => "cash",
        Card => "card",
        Insurance => "insurance",
    }
}

wire_enum! {
    pub enum PetGender {
        Male => "male",
        Female => "female",
    }
}

wire_enum! {
    /// Current health status of a pet.
    pub enum PetHealth {
        Healthy => "healthy",
        Treatment => "treatment",
        Critical => "critical",
    }
}

/// A pet owner with their registered pets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PetParent {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub profile_image: String,
    pub address: Address,
    pub emergency_contact: EmergencyContact,
    pub pets: Vec<Pet>,
    pub registration_date: NaiveDate,
    pub total_visits: u32,
    /// Lifetime spend in currency units
    pub total_spent: f64,
    pub status: PetParentStatus,
    /// Name of the preferred doctor, if any
    pub preferred_doctor: Option<String>,
    pub notes: String,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

/// A pet registered to a pet parent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: String,
    pub name: String,
    /// Species (e.g., "Dog", "Cat")
    pub species: String,
    pub breed: String,
    /// Age in years
    pub age: u32,
    pub gender: PetGender,
    /// Weight in kg
    pub weight: f64,
    pub color: String,
    pub microchip_id: Option<String>,
    pub profile_image: String,
    pub medical_history: MedicalHistory,
    pub status: PetHealth,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MedicalHistory {
    pub vaccinations: Vec<String>,
    pub allergies: Vec<String>,
    pub medications: Vec<String>,
    pub last_visit: NaiveDate,
}

impl Record for PetParent {
    type Id = String;
    const KIND: &'static str = "Pet parent";

    fn id(&self) -> &String {
        &self.id
    }
}

impl PetParent {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Pets currently under treatment or in critical condition.
    pub fn pets_needing_care(&self) -> impl Iterator<Item = &Pet> {
        self.pets
            .iter()
            .filter(|pet| !matches!(pet.status, PetHealth::Healthy))
    }
}
