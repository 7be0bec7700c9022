mod label_layout_builder;
mod label_settings;
mod layer;
mod layer_settings;
mod store;

pub use label_layout_builder::build_label;
pub use label_settings::{
    LabelRole, LabelSettings, LabelStyle, LabelStyleBuilder, TextGenerator, default_label_text,
};
pub use layer::LineTextLayer;
pub use layer_settings::{LineTextLayerSettings, MarkerDotSettings};
pub use store::{LabelElement, LayerStore, LineElement, MarkerElement, PlacementRecord};
