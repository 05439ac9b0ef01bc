// SPDX-License-Identifier: MIT OR Apache-2.0
//! GLSL literal formatting.

use crate::generator::GenerateError;
use shadergraph_graph::Value;

/// Format a float with six decimals, then drop trailing zeros and a
/// trailing decimal point (`4.0` -> `4`, `4.5` -> `4.5`).
pub fn format_float(value: f32) -> Result<String, GenerateError> {
    if !value.is_finite() {
        return Err(GenerateError::NonFiniteLiteral(value));
    }

    let mut text = format!("{value:.6}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text.remove(0);
    }
    Ok(text)
}

fn format_components(constructor: &str, components: &[f32]) -> Result<String, GenerateError> {
    let components = components
        .iter()
        .map(|&c| format_float(c))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!("{constructor}({})", components.join(", ")))
}

/// Format a value as a GLSL expression
pub fn format_value(value: &Value) -> Result<String, GenerateError> {
    match value {
        Value::Bool(b) => Ok(b.to_string()),
        Value::Int32(i) => Ok(i.to_string()),
        Value::Float32(f) => format_float(*f),
        Value::Vector2f32(v) => format_components("vec2", v),
        Value::Vector3f32(v) => format_components("vec3", v),
        Value::Vector4f32(v) => format_components("vec4", v),
        Value::Matrix4x4f32(m) => format_components("mat4", m),
    }
}
