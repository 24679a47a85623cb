use foundation::{LatLng, ParcelId};

use crate::parcel::Parcel;
use crate::zoning::ZoningType;

/// The parcel currently described by the information panel.
#[derive(Debug, Clone, PartialEq)]
pub struct FocusRecord {
    pub parcel_id: ParcelId,
    pub position: LatLng,
    pub zoning_type: Option<ZoningType>,
    /// Square meters; missing area is zero.
    pub area: f64,
    pub address: Option<String>,
    pub usedesc: Option<String>,
}

impl FocusRecord {
    /// Derives the focus record for `parcel`. `None` when the parcel has no
    /// vertices to anchor on.
    pub fn from_parcel(parcel: &Parcel) -> Option<Self> {
        let position = parcel.anchor()?;
        Some(Self {
            parcel_id: parcel.id,
            position,
            zoning_type: parcel.zoning_type.clone(),
            area: parcel.area_or_zero(),
            address: parcel.full_address.clone(),
            usedesc: parcel.usedesc.clone(),
        })
    }

    pub fn latitude(&self) -> f64 {
        self.position.lat
    }

    pub fn longitude(&self) -> f64 {
        self.position.lng
    }
}

#[cfg(test)]
mod tests {
    use super::FocusRecord;
    use crate::parcel::Parcel;
    use crate::zoning::ZoningType;
    use foundation::{LatLng, ParcelId};

    #[test]
    fn derived_from_parcel() {
        let mut p = Parcel::new(
            ParcelId(3),
            vec![LatLng::new(5.0, 5.0), LatLng::new(5.0, 6.0), LatLng::new(6.0, 6.0)],
        )
        .with_zoning(ZoningType::Industrial);
        p.usedesc = Some("WAREHOUSE".to_string());

        let f = FocusRecord::from_parcel(&p).unwrap();
        assert_eq!(f.parcel_id, ParcelId(3));
        assert_eq!(f.latitude(), 5.0);
        assert_eq!(f.longitude(), 6.0);
        assert_eq!(f.zoning_type, Some(ZoningType::Industrial));
        assert_eq!(f.area, 0.0);
        assert_eq!(f.usedesc.as_deref(), Some("WAREHOUSE"));
    }
}
