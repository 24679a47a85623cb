use crate::latlng::LatLng;

/// Axis-aligned lat/lng box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LatLngBounds {
    pub min: LatLng,
    pub max: LatLng,
}

impl LatLngBounds {
    pub fn new(min: LatLng, max: LatLng) -> Self {
        LatLngBounds { min, max }
    }

    /// Smallest box containing every point, or `None` for an empty input.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a LatLng>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let mut b = LatLngBounds::new(first, first);
        for p in iter {
            b.extend(*p);
        }
        Some(b)
    }

    pub fn extend(&mut self, p: LatLng) {
        self.min.lat = self.min.lat.min(p.lat);
        self.min.lng = self.min.lng.min(p.lng);
        self.max.lat = self.max.lat.max(p.lat);
        self.max.lng = self.max.lng.max(p.lng);
    }

    pub fn contains(&self, p: LatLng) -> bool {
        p.lat >= self.min.lat && p.lat <= self.max.lat && p.lng >= self.min.lng && p.lng <= self.max.lng
    }
}

#[cfg(test)]
mod tests {
    use super::LatLngBounds;
    use crate::latlng::LatLng;

    #[test]
    fn bounds_of_points() {
        let pts = [
            LatLng::new(1.0, 5.0),
            LatLng::new(-2.0, 7.0),
            LatLng::new(0.5, 6.0),
        ];
        let b = LatLngBounds::from_points(&pts).unwrap();
        assert_eq!(b.min, LatLng::new(-2.0, 5.0));
        assert_eq!(b.max, LatLng::new(1.0, 7.0));
        assert!(b.contains(LatLng::new(0.0, 6.0)));
        assert!(!b.contains(LatLng::new(3.0, 6.0)));
    }

    #[test]
    fn empty_input_has_no_bounds() {
        let pts: [LatLng; 0] = [];
        assert!(LatLngBounds::from_points(&pts).is_none());
    }
}
