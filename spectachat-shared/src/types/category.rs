use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Represents the fixed topic taxonomy questions are filed under.
///
/// Stored as its kebab-case string form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Prescription,
    NonPrescription,
    Frames,
    Lenses,
    Brands,
    Providers,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Prescription,
        Category::NonPrescription,
        Category::Frames,
        Category::Lenses,
        Category::Brands,
        Category::Providers,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Prescription => "prescription",
            Category::NonPrescription => "non-prescription",
            Category::Frames => "frames",
            Category::Lenses => "lenses",
            Category::Brands => "brands",
            Category::Providers => "providers",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| s.to_owned())
    }
}
