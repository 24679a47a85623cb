use serde::{Deserialize, Deserializer, Serialize};

/// Land-use designation of a parcel.
///
/// The four named classes are the ones offered for updates. Anything else the
/// backend returns (legacy codes) round-trips unchanged through `Other`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ZoningType {
    Residential,
    Commercial,
    Industrial,
    Planned,
    Other(String),
}

impl ZoningType {
    /// Classes a user may pick as the new zoning for a selection.
    pub const CHOICES: [ZoningType; 4] = [
        ZoningType::Residential,
        ZoningType::Commercial,
        ZoningType::Industrial,
        ZoningType::Planned,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ZoningType::Residential => "Residential",
            ZoningType::Commercial => "Commercial",
            ZoningType::Industrial => "Industrial",
            ZoningType::Planned => "Planned",
            ZoningType::Other(s) => s.as_str(),
        }
    }

    /// Parses a zoning label. Blank input is "no zoning", not a legacy value.
    pub fn parse(s: &str) -> Option<Self> {
        if s.trim().is_empty() {
            return None;
        }
        Some(Self::from(s.to_string()))
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ZoningType::Other(_))
    }
}

impl From<String> for ZoningType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Residential" => ZoningType::Residential,
            "Commercial" => ZoningType::Commercial,
            "Industrial" => ZoningType::Industrial,
            "Planned" => ZoningType::Planned,
            _ => ZoningType::Other(s),
        }
    }
}

impl From<ZoningType> for String {
    fn from(z: ZoningType) -> Self {
        match z {
            ZoningType::Other(s) => s,
            named => named.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ZoningType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deserializes an optional zoning label, mapping `null`, missing and blank
/// strings to `None`.
pub(crate) fn deserialize_optional_zoning<'de, D>(de: D) -> Result<Option<ZoningType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(de)?;
    Ok(raw.as_deref().and_then(ZoningType::parse))
}
