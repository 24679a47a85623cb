use serde::{Deserialize, Serialize};

/// Backend-assigned parcel identifier.
///
/// Stable across fetches; used as the selection key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParcelId(pub i64);

impl ParcelId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ParcelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ParcelId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(ParcelId)
    }
}

#[cfg(test)]
mod tests {
    use super::ParcelId;

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&vec![ParcelId(1), ParcelId(42)]).unwrap();
        assert_eq!(json, "[1,42]");
        let back: Vec<ParcelId> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![ParcelId(1), ParcelId(42)]);
    }

    #[test]
    fn parses_from_text() {
        assert_eq!(" 17 ".parse::<ParcelId>().unwrap(), ParcelId(17));
        assert!("abc".parse::<ParcelId>().is_err());
    }
}
