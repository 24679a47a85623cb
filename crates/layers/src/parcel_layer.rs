use foundation::{LatLng, ParcelId};
use parcels::{ParcelStore, SelectionModel};

use crate::layer::{Layer, LayerId};
use crate::symbology::{StrokeStyle, Theme};

/// Polygon overlay of every parcel in the store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ParcelLayer {
    id: LayerId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParcelShape {
    pub id: ParcelId,
    pub ring: Vec<LatLng>,
    pub style: StrokeStyle,
    pub selected: bool,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParcelLayerSnapshot {
    /// Draw order: backend order, so later parcels paint over earlier ones.
    pub shapes: Vec<ParcelShape>,
}

impl ParcelLayerSnapshot {
    pub fn shape(&self, id: ParcelId) -> Option<&ParcelShape> {
        self.shapes.iter().find(|s| s.id == id)
    }
}

impl ParcelLayer {
    pub fn new(id: u64) -> Self {
        Self { id: LayerId(id) }
    }

    pub fn extract(
        &self,
        store: &ParcelStore,
        selection: &SelectionModel,
        hovered: Option<ParcelId>,
        theme: Theme,
    ) -> ParcelLayerSnapshot {
        let shapes = store
            .iter()
            .map(|parcel| {
                let selected = selection.contains(parcel.id);
                ParcelShape {
                    id: parcel.id,
                    ring: parcel.coordinates.clone(),
                    style: StrokeStyle::for_parcel(selected, hovered == Some(parcel.id), theme),
                    selected,
                }
            })
            .collect();
        ParcelLayerSnapshot { shapes }
    }
}

impl Layer for ParcelLayer {
    fn id(&self) -> LayerId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::ParcelLayer;
    use crate::symbology::{HOVER_WEIGHT, Rgb, Theme};
    use foundation::{LatLng, ParcelId};
    use parcels::{Parcel, ParcelStore, SelectionModel};

    fn store() -> ParcelStore {
        ParcelStore::from_parcels(vec![
            Parcel::new(ParcelId(1), vec![LatLng::new(0.0, 0.0)]),
            Parcel::new(ParcelId(2), vec![LatLng::new(1.0, 1.0)]),
            Parcel::new(ParcelId(3), vec![LatLng::new(2.0, 2.0)]),
        ])
    }

    #[test]
    fn styles_reflect_selection_hover_and_theme() {
        let store = store();
        let mut selection = SelectionModel::new();
        selection.toggle(ParcelId(2), &store).unwrap();

        let snap = ParcelLayer::new(1).extract(&store, &selection, Some(ParcelId(3)), Theme::Dark);
        assert_eq!(snap.shapes.len(), 3);
        assert_eq!(snap.shape(ParcelId(1)).unwrap().style.color, Rgb::SKY_BLUE);
        assert_eq!(snap.shape(ParcelId(2)).unwrap().style.color, Rgb::BLUE);
        assert!(snap.shape(ParcelId(2)).unwrap().selected);
        let hovered = snap.shape(ParcelId(3)).unwrap();
        assert_eq!(hovered.style.color, Rgb::ORANGE);
        assert_eq!(hovered.style.weight, HOVER_WEIGHT);
    }

    #[test]
    fn empty_store_draws_nothing() {
        let snap = ParcelLayer::new(1).extract(
            &ParcelStore::new(),
            &SelectionModel::new(),
            None,
            Theme::Light,
        );
        assert!(snap.shapes.is_empty());
    }
}
