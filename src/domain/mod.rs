pub mod aliases;
pub mod coerce;
pub mod description;
pub mod images;
pub mod navigation;
pub mod normalize;
pub mod property;

pub use description::{segment, split_location, LocationSplit, SegmentedDescription};
pub use normalize::{normalize, unwrap_envelope};
pub use property::{BeAware, PropertyData};
