// SPDX-License-Identifier: MIT OR Apache-2.0
//! Rules for user-chosen names.
//!
//! Generated GLSL declares statement results as `<prefix>_<n>`, stage
//! interface variables as `in_<n>` / `out_<n>`, uniform instances as
//! `ub_<id>` and the push-constant instance as `pc`. Names given to constant
//! variables and block members must stay out of that namespace.

use crate::value::DataType;

/// Prefixes of generated `<prefix>_<n>` names, besides data type names
const GENERATED_PREFIXES: &[&str] = &[
    "in", "out", "add", "sub", "mul", "div", "vec2", "vec3", "vec4", "cos", "sin", "tan", "max",
    "min", "cross", "dot", "texture",
];

/// Names used verbatim by generated code
const GENERATED_NAMES: &[&str] = &["main", "pc", "PushConstants"];

/// GLSL keywords a declaration could plausibly collide with
const KEYWORDS: &[&str] = &[
    "attribute", "break", "buffer", "case", "const", "continue", "default", "discard", "do",
    "else", "false", "flat", "for", "highp", "if", "in", "inout", "layout", "lowp", "mediump",
    "out", "precision", "return", "struct", "switch", "true", "uniform", "void", "while",
];

/// Whether `name` is a well-formed GLSL identifier.
///
/// GLSL reserves identifiers containing `__`.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !name.contains("__")
}

/// Whether `name` belongs to GLSL or to names the generator produces
pub fn is_reserved(name: &str) -> bool {
    if name.starts_with("gl_") || name.starts_with("ub_") || name.starts_with("UniformBlock_") {
        return true;
    }
    if GENERATED_NAMES.contains(&name) || KEYWORDS.contains(&name) {
        return true;
    }
    if DataType::all().iter().any(|t| t.glsl_name() == name) {
        return true;
    }

    let Some((prefix, counter)) = name.rsplit_once('_') else {
        return false;
    };
    !counter.is_empty()
        && counter.bytes().all(|b| b.is_ascii_digit())
        && (GENERATED_PREFIXES.contains(&prefix) || DataType::all().iter().any(|t| t.glsl_name() == prefix))
}

/// Whether `name` can be given to a constant variable or block member
pub fn is_usable_name(name: &str) -> bool {
    is_identifier(name) && !is_reserved(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{ArithmeticOperator, FunctionKind};

    #[test]
    fn test_identifiers() {
        assert!(is_identifier("albedo"));
        assert!(is_identifier("_tint2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2d"));
        assert!(!is_identifier("light color"));
        assert!(!is_identifier("a__b"));
    }

    #[test]
    fn test_generated_names_are_reserved() {
        for name in ["cos_0", "mul_12", "float_3", "vec4_1", "in_0", "out_7", "texture_2"] {
            assert!(is_reserved(name), "{name}");
        }
        for name in ["pc", "ub_0", "ub_1_albedo", "UniformBlock_4", "gl_Position", "main", "float"] {
            assert!(is_reserved(name), "{name}");
        }
    }

    #[test]
    fn test_ordinary_names_are_usable() {
        for name in ["GAMMA", "tint", "cos_table", "mul_", "time", "uv", "in0"] {
            assert!(is_usable_name(name), "{name}");
        }
    }

    #[test]
    fn test_prefixes_cover_every_node_name() {
        let functions = [
            FunctionKind::CreateVec2,
            FunctionKind::CreateVec3,
            FunctionKind::CreateVec4,
            FunctionKind::Cos(DataType::Float32),
            FunctionKind::Sin(DataType::Float32),
            FunctionKind::Tan(DataType::Float32),
            FunctionKind::Max(DataType::Float32),
            FunctionKind::Min(DataType::Float32),
            FunctionKind::Cross,
            FunctionKind::Dot(DataType::Vector3f32),
            FunctionKind::Texture,
        ];
        for function in functions {
            assert!(GENERATED_PREFIXES.contains(&function.name()), "{}", function.name());
        }
        for operator in [
            ArithmeticOperator::Addition,
            ArithmeticOperator::Subtraction,
            ArithmeticOperator::Multiplication,
            ArithmeticOperator::Division,
        ] {
            assert!(GENERATED_PREFIXES.contains(&operator.name()));
        }
    }
}
