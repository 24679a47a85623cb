use foundation::{LatLng, ParcelId};
use parcels::{Parcel, ParcelStore};

/// Finds the parcel under `point`.
///
/// Ordering contract:
/// - When polygons overlap, the one drawn last (latest in backend order) wins,
///   matching what the user sees on top.
/// - Rings with fewer than three vertices cannot be hit.
pub fn pick_parcel(store: &ParcelStore, point: LatLng) -> Option<ParcelId> {
    let mut hit = None;
    for parcel in store.iter() {
        let inside = parcel.bounds().is_some_and(|b| b.contains(point)) && ring_contains(parcel, point);
        if inside {
            hit = Some(parcel.id);
        }
    }
    hit
}

/// Even-odd ray casting in lat/lng space.
fn ring_contains(parcel: &Parcel, point: LatLng) -> bool {
    let ring = &parcel.coordinates;
    if ring.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (a, b) = (ring[i], ring[j]);
        if (a.lat > point.lat) != (b.lat > point.lat) {
            let cross_lng = a.lng + (point.lat - a.lat) * (b.lng - a.lng) / (b.lat - a.lat);
            if point.lng < cross_lng {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::pick_parcel;
    use foundation::{LatLng, ParcelId};
    use parcels::{Parcel, ParcelStore};

    fn square(id: i64, lat0: f64, lng0: f64, size: f64) -> Parcel {
        Parcel::new(
            ParcelId(id),
            vec![
                LatLng::new(lat0, lng0),
                LatLng::new(lat0, lng0 + size),
                LatLng::new(lat0 + size, lng0 + size),
                LatLng::new(lat0 + size, lng0),
                LatLng::new(lat0, lng0),
            ],
        )
    }

    #[test]
    fn hits_containing_parcel() {
        let store = ParcelStore::from_parcels(vec![square(1, 0.0, 0.0, 1.0), square(2, 5.0, 5.0, 1.0)]);
        assert_eq!(pick_parcel(&store, LatLng::new(0.5, 0.5)), Some(ParcelId(1)));
        assert_eq!(pick_parcel(&store, LatLng::new(5.2, 5.9)), Some(ParcelId(2)));
        assert_eq!(pick_parcel(&store, LatLng::new(3.0, 3.0)), None);
    }

    #[test]
    fn topmost_overlapping_parcel_wins() {
        let store = ParcelStore::from_parcels(vec![square(1, 0.0, 0.0, 2.0), square(2, 1.0, 1.0, 2.0)]);
        assert_eq!(pick_parcel(&store, LatLng::new(1.5, 1.5)), Some(ParcelId(2)));
        assert_eq!(pick_parcel(&store, LatLng::new(0.5, 0.5)), Some(ParcelId(1)));
    }

    #[test]
    fn degenerate_rings_are_not_pickable() {
        let store = ParcelStore::from_parcels(vec![Parcel::new(
            ParcelId(1),
            vec![LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0)],
        )]);
        assert_eq!(pick_parcel(&store, LatLng::new(0.5, 0.5)), None);
    }
}
