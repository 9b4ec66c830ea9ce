//! DOM-free state behind the incident map: viewport, place selection,
//! marker registry, city shortcuts and click tracking.

pub mod cities;
pub mod click;
pub mod geo;
pub mod markers;
pub mod place;
pub mod selection;
pub mod settings;
pub mod state;
pub mod viewport;

pub use cities::{CityShortcut, CityTable, CITY_CHOICES, CITY_ZOOM};
pub use geo::{CanvasSize, LatLong, MapBounds};
pub use place::{Category, MarkerStyle, Place, PlaceId};
pub use selection::{Selection, MIN_SELECTED_ZOOM};
pub use settings::MapSettings;
pub use state::{InfoAnchor, MapEvent, MapState};
pub use viewport::Viewport;
