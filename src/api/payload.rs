use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{BindError, BindResult};
use crate::host::HostElement;

/// Attribute holding the structural template (layout, axis styling, colors).
pub const ATTR_TEMPLATE: &str = "data-chart-template";
/// Attribute holding a series payload, merged into the template under `"series"`.
pub const ATTR_SERIES: &str = "data-chart-series";
/// Attribute holding a full figure payload, merged under `"data"`.
pub const ATTR_DATA: &str = "data-chart-data";

/// Which element attributes a binding reads and where the payload lands in the
/// merged configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadShape {
    pub template_attr: String,
    pub payload_attr: String,
    pub payload_key: String,
}

impl PayloadShape {
    /// Template plus series attributes; payload overlays the template under `"series"`.
    #[must_use]
    pub fn series() -> Self {
        Self {
            template_attr: ATTR_TEMPLATE.to_owned(),
            payload_attr: ATTR_SERIES.to_owned(),
            payload_key: "series".to_owned(),
        }
    }

    /// Single figure attribute; payload lands under `"data"` next to the layout template.
    #[must_use]
    pub fn figure() -> Self {
        Self {
            template_attr: ATTR_TEMPLATE.to_owned(),
            payload_attr: ATTR_DATA.to_owned(),
            payload_key: "data".to_owned(),
        }
    }
}

/// Raw attribute text lifted off an element, before any deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawPayload<'a> {
    pub template: Option<&'a str>,
    pub payload: &'a str,
}

/// Reads the shape's attributes off the element. The payload attribute is
/// required; the template attribute is optional.
pub fn extract_raw<'a>(
    element: &'a dyn HostElement,
    shape: &PayloadShape,
) -> BindResult<RawPayload<'a>> {
    let payload = element
        .attribute(&shape.payload_attr)
        .ok_or_else(|| BindError::MissingAttribute(shape.payload_attr.clone()))?;
    Ok(RawPayload {
        template: element.attribute(&shape.template_attr),
        payload,
    })
}

/// Builds the merged configuration: the template object with the parsed
/// payload inserted under `payload_key`, overwriting any colliding key.
///
/// An absent template falls back to `fallback_template`, else to `{}`. Both
/// inputs are deserialized before anything is combined, so a parse failure
/// never yields a partially merged value.
pub fn merge_config(
    template_raw: Option<&str>,
    payload_raw: &str,
    payload_key: &str,
    fallback_template: Option<&Value>,
) -> BindResult<Value> {
    let mut merged = match template_raw {
        Some(text) => into_object(serde_json::from_str(text)?, "template")?,
        None => match fallback_template {
            Some(value) => into_object(value.clone(), "fallback template")?,
            None => Map::new(),
        },
    };
    let payload: Value = serde_json::from_str(payload_raw)?;
    merged.insert(payload_key.to_owned(), payload);
    Ok(Value::Object(merged))
}

fn into_object(value: Value, what: &str) -> BindResult<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(BindError::InvalidPayload(format!(
            "{what} must be a json object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
