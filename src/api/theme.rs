use serde_json::{Value, json};

/// Built-in dark layout template: near-black paper, slightly lighter plot
/// area, white text, grey grid and axis lines.
///
/// Figure-shaped bindings without a template attribute use this as their
/// fallback so charts land on a dark dashboard without per-element styling.
#[must_use]
pub fn dark_layout_template() -> Value {
    json!({
        "paper_bgcolor": "rgb(10,10,10)",
        "plot_bgcolor": "rgb(20,20,20)",
        "font": {
            "color": "rgb(255,255,255)"
        },
        "xaxis": {
            "gridcolor": "rgb(80,80,80)",
            "linecolor": "rgb(80,80,80)"
        },
        "yaxis": {
            "gridcolor": "rgb(80,80,80)",
            "linecolor": "rgb(80,80,80)"
        }
    })
}
