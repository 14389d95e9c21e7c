pub mod axis_transform;
pub mod chart_transform;
pub mod clipping;
pub mod mapping;
pub mod notifier;
pub mod orientation;
pub mod primitives;
pub mod range;
pub mod scale;
pub mod spacing;
pub mod types;

pub use axis_transform::{AxisFn, AxisTransform, CustomAxisTransform};
pub use chart_transform::{ChartTransform, ChartTransformConfig};
pub use clipping::ClippingPolicy;
pub use mapping::CoordinateMapping;
pub(crate) use mapping::validate_view_size;
pub use notifier::{ChangeListener, ChangeNotifier, ListenerId, TransformWatch};
pub use orientation::Orientation;
pub use primitives::{datetime_to_model_seconds, model_seconds_to_datetime};
pub use range::Range;
pub use scale::{LinearMap, interpolate};
pub use spacing::{
    MAX_SPACING_POSITIONS, SpacingBorders, SpacingPosition,
};
pub use types::{Vector2, ViewRect};
