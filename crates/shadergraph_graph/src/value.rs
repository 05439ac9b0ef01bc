// SPDX-License-Identifier: MIT OR Apache-2.0
//! Data types that flow through pins and the values they carry.

use serde::{Deserialize, Serialize};

/// Data type carried by a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    /// Boolean value
    Bool,
    /// 32-bit signed integer
    Int32,
    /// 32-bit float
    Float32,
    /// 2D float vector
    Vector2f32,
    /// 3D float vector
    Vector3f32,
    /// 4D float vector
    Vector4f32,
    /// 4x4 float matrix, column-major
    Matrix4x4f32,
    /// Combined 2D image sampler (opaque, no literal form)
    Sampler2D,
}

impl DataType {
    /// Get all data types
    pub fn all() -> &'static [DataType] {
        &[
            DataType::Bool,
            DataType::Int32,
            DataType::Float32,
            DataType::Vector2f32,
            DataType::Vector3f32,
            DataType::Vector4f32,
            DataType::Matrix4x4f32,
            DataType::Sampler2D,
        ]
    }

    /// GLSL spelling of this type
    pub fn glsl_name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int32 => "int",
            Self::Float32 => "float",
            Self::Vector2f32 => "vec2",
            Self::Vector3f32 => "vec3",
            Self::Vector4f32 => "vec4",
            Self::Matrix4x4f32 => "mat4",
            Self::Sampler2D => "sampler2D",
        }
    }

    /// Whether this is a float vector (vec2, vec3 or vec4)
    pub fn is_float_vector(self) -> bool {
        matches!(self, Self::Vector2f32 | Self::Vector3f32 | Self::Vector4f32)
    }

    /// Whether this is float or a float vector
    pub fn is_float_like(self) -> bool {
        self == Self::Float32 || self.is_float_vector()
    }

    /// Whether arithmetic operators apply to this type
    pub fn is_arithmetic(self) -> bool {
        matches!(self, Self::Int32 | Self::Matrix4x4f32) || self.is_float_like()
    }

    /// Whether values of this type can be written as literals
    pub fn is_opaque(self) -> bool {
        self == Self::Sampler2D
    }

    /// std430 `(size, alignment)` in bytes, `None` for opaque types
    pub fn std430_layout(self) -> Option<(u32, u32)> {
        match self {
            Self::Bool | Self::Int32 | Self::Float32 => Some((4, 4)),
            Self::Vector2f32 => Some((8, 8)),
            Self::Vector3f32 => Some((12, 16)),
            Self::Vector4f32 => Some((16, 16)),
            Self::Matrix4x4f32 => Some((64, 16)),
            Self::Sampler2D => None,
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glsl_name())
    }
}

/// A literal value for constants and input-pin defaults
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Boolean
    Bool(bool),
    /// Integer
    Int32(i32),
    /// Float
    Float32(f32),
    /// 2D vector
    Vector2f32([f32; 2]),
    /// 3D vector
    Vector3f32([f32; 3]),
    /// 4D vector
    Vector4f32([f32; 4]),
    /// 4x4 matrix, column-major
    Matrix4x4f32([f32; 16]),
}

impl Value {
    /// The 4x4 identity matrix
    pub const IDENTITY: Value = Value::Matrix4x4f32([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    /// Get the data type of this value
    pub fn data_type(&self) -> DataType {
        match self {
            Self::Bool(_) => DataType::Bool,
            Self::Int32(_) => DataType::Int32,
            Self::Float32(_) => DataType::Float32,
            Self::Vector2f32(_) => DataType::Vector2f32,
            Self::Vector3f32(_) => DataType::Vector3f32,
            Self::Vector4f32(_) => DataType::Vector4f32,
            Self::Matrix4x4f32(_) => DataType::Matrix4x4f32,
        }
    }

    /// Initial default for an input pin of the given type.
    ///
    /// Numbers and vectors are zero, booleans `false` and matrices identity.
    /// Opaque types have no default.
    pub fn zero(data_type: DataType) -> Option<Value> {
        match data_type {
            DataType::Bool => Some(Self::Bool(false)),
            DataType::Int32 => Some(Self::Int32(0)),
            DataType::Float32 => Some(Self::Float32(0.0)),
            DataType::Vector2f32 => Some(Self::Vector2f32([0.0; 2])),
            DataType::Vector3f32 => Some(Self::Vector3f32([0.0; 3])),
            DataType::Vector4f32 => Some(Self::Vector4f32([0.0; 4])),
            DataType::Matrix4x4f32 => Some(Self::IDENTITY),
            DataType::Sampler2D => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int32(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float32(value)
    }
}

impl From<[f32; 2]> for Value {
    fn from(value: [f32; 2]) -> Self {
        Self::Vector2f32(value)
    }
}

impl From<[f32; 3]> for Value {
    fn from(value: [f32; 3]) -> Self {
        Self::Vector3f32(value)
    }
}

impl From<[f32; 4]> for Value {
    fn from(value: [f32; 4]) -> Self {
        Self::Vector4f32(value)
    }
}

impl From<[f32; 16]> for Value {
    fn from(value: [f32; 16]) -> Self {
        Self::Matrix4x4f32(value)
    }
}
