mod binding;
mod payload;
mod theme;

pub use binding::{BindingOptions, ChartBinding, UpdateOutcome, UpdatePolicy};
pub use payload::{
    ATTR_DATA, ATTR_SERIES, ATTR_TEMPLATE, PayloadShape, RawPayload, extract_raw, merge_config,
};
pub use theme::dark_layout_template;
