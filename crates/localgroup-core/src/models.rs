pub mod galaxy;
pub mod metadata;

pub use galaxy::{
    distance_uncertainty, galaxy_id, EquatorialCoordinates, GalaxyRecord, Position3d,
    DISTANCE_UNCERTAINTY_FRACTION,
};
pub use metadata::{Metadata, SourceEntry};
