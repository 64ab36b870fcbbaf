//! Medical speciality enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Medical specialities available for doctors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "speciality", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Speciality {
    Surgery,
    FamilyMedicine,
    Psychiatry,
    Pediatrics,
    Geriatrics,
}

impl Speciality {
    /// Return the speciality as an uppercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Surgery => "SURGERY",
            Self::FamilyMedicine => "FAMILY_MEDICINE",
            Self::Psychiatry => "PSYCHIATRY",
            Self::Pediatrics => "PEDIATRICS",
            Self::Geriatrics => "GERIATRICS",
        }
    }
}

impl fmt::Display for Speciality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Speciality {
    type Err = clinic_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SURGERY" => Ok(Self::Surgery),
            "FAMILY_MEDICINE" => Ok(Self::FamilyMedicine),
            "PSYCHIATRY" => Ok(Self::Psychiatry),
            "PEDIATRICS" => Ok(Self::Pediatrics),
            "GERIATRICS" => Ok(Self::Geriatrics),
            _ => Err(clinic_core::AppError::validation(format!(
                "Invalid speciality: '{s}'"
            ))),
        }
    }
}
