// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node definitions for the shader graph.
//!
//! A node's kind fixes its pin layout at construction: the number of input
//! and output pins and their data types never change afterwards.

use crate::pin::{Pin, PinDirection, PinId};
use crate::script::GraphError;
use crate::value::{DataType, Value};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Create a new random node ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// Built-in functions available as graph nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionKind {
    /// `vec2(x, y)`
    CreateVec2,
    /// `vec3(x, y, z)`
    CreateVec3,
    /// `vec4(x, y, z, w)`
    CreateVec4,
    /// Cosine over float or a float vector
    Cos(DataType),
    /// Sine over float or a float vector
    Sin(DataType),
    /// Tangent over float or a float vector
    Tan(DataType),
    /// Component-wise maximum
    Max(DataType),
    /// Component-wise minimum
    Min(DataType),
    /// Cross product of two vec3
    Cross,
    /// Dot product of two float vectors
    Dot(DataType),
    /// Sample a 2D texture at a UV coordinate
    Texture,
}

impl FunctionKind {
    /// GLSL call name, also used as the generated variable prefix
    pub fn name(self) -> &'static str {
        match self {
            Self::CreateVec2 => "vec2",
            Self::CreateVec3 => "vec3",
            Self::CreateVec4 => "vec4",
            Self::Cos(_) => "cos",
            Self::Sin(_) => "sin",
            Self::Tan(_) => "tan",
            Self::Max(_) => "max",
            Self::Min(_) => "min",
            Self::Cross => "cross",
            Self::Dot(_) => "dot",
            Self::Texture => "texture",
        }
    }

    /// Input pin types and output pin type
    pub fn signature(self) -> Result<(Vec<DataType>, DataType), GraphError> {
        use DataType::*;

        let signature = match self {
            Self::CreateVec2 => (vec![Float32; 2], Vector2f32),
            Self::CreateVec3 => (vec![Float32; 3], Vector3f32),
            Self::CreateVec4 => (vec![Float32; 4], Vector4f32),
            Self::Cos(t) | Self::Sin(t) | Self::Tan(t) if t.is_float_like() => (vec![t], t),
            Self::Max(t) | Self::Min(t) if t == Int32 || t.is_float_like() => (vec![t, t], t),
            Self::Cross => (vec![Vector3f32; 2], Vector3f32),
            Self::Dot(t) if t.is_float_vector() => (vec![t, t], Float32),
            Self::Texture => (vec![Sampler2D, Vector2f32], Vector4f32),
            Self::Cos(t) | Self::Sin(t) | Self::Tan(t) | Self::Max(t) | Self::Min(t) | Self::Dot(t) => {
                return Err(GraphError::UnsupportedFunctionType {
                    function: self.name(),
                    data_type: t,
                });
            }
        };
        Ok(signature)
    }
}

/// Arithmetic operators available as graph nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArithmeticOperator {
    /// `a + b`
    Addition,
    /// `a - b`
    Subtraction,
    /// `a * b`
    Multiplication,
    /// `a / b`
    Division,
}

impl ArithmeticOperator {
    /// Generated variable prefix
    pub fn name(self) -> &'static str {
        match self {
            Self::Addition => "add",
            Self::Subtraction => "sub",
            Self::Multiplication => "mul",
            Self::Division => "div",
        }
    }

    /// Infix GLSL symbol
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Addition => "+",
            Self::Subtraction => "-",
            Self::Multiplication => "*",
            Self::Division => "/",
        }
    }

    /// Result type for the given operand types, `None` if not allowed
    pub fn result_type(self, lhs: DataType, rhs: DataType) -> Option<DataType> {
        use DataType::*;

        if !lhs.is_arithmetic() || !rhs.is_arithmetic() {
            return None;
        }
        match (lhs, rhs) {
            _ if lhs == rhs => Some(lhs),
            (Float32, other) | (other, Float32) if other != Int32 => Some(other),
            (Matrix4x4f32, Vector4f32) | (Vector4f32, Matrix4x4f32) if self == Self::Multiplication => {
                Some(Vector4f32)
            }
            _ => None,
        }
    }
}

/// Role of a variable node at the stage boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum VariableKind {
    /// Named global constant
    Constant(Value),
    /// Stage input, read-only
    Input,
    /// Stage output, write-only
    Output,
    /// Uniform or push-constant member, read-only
    Uniform,
}

/// Payload of a variable node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    /// Variable role
    pub kind: VariableKind,
    /// Declared name
    pub name: String,
}

/// Node kind with its kind-specific payload
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Literal value
    Constant(Value),
    /// Built-in function call
    Function(FunctionKind),
    /// Binary arithmetic
    Operator(ArithmeticOperator),
    /// Interface, uniform or constant variable
    Variable(Variable),
    /// Clip-space position written by a vertex stage
    VertexOutput,
}

/// A node instance in the graph
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    kind: NodeKind,
    inputs: Vec<Pin>,
    outputs: Vec<Pin>,
}

impl Node {
    fn with_pins(kind: NodeKind, inputs: &[DataType], outputs: &[DataType]) -> Self {
        let id = NodeId::new();
        Self {
            id,
            kind,
            inputs: inputs
                .iter()
                .enumerate()
                .map(|(i, &t)| Pin::new(PinId::input(id, i), t))
                .collect(),
            outputs: outputs
                .iter()
                .enumerate()
                .map(|(i, &t)| Pin::new(PinId::output(id, i), t))
                .collect(),
        }
    }

    pub(crate) fn constant(value: Value) -> Self {
        Self::with_pins(NodeKind::Constant(value), &[], &[value.data_type()])
    }

    pub(crate) fn function(function: FunctionKind) -> Result<Self, GraphError> {
        let (inputs, output) = function.signature()?;
        Ok(Self::with_pins(NodeKind::Function(function), &inputs, &[output]))
    }

    pub(crate) fn operator(
        operator: ArithmeticOperator,
        lhs: DataType,
        rhs: DataType,
    ) -> Result<Self, GraphError> {
        let output = operator
            .result_type(lhs, rhs)
            .ok_or(GraphError::UnsupportedOperands { operator, lhs, rhs })?;
        Ok(Self::with_pins(NodeKind::Operator(operator), &[lhs, rhs], &[output]))
    }

    pub(crate) fn new_variable(kind: VariableKind, name: String, data_type: DataType) -> Self {
        let variable = NodeKind::Variable(Variable { kind, name });
        match kind {
            VariableKind::Output => Self::with_pins(variable, &[data_type], &[]),
            _ => Self::with_pins(variable, &[], &[data_type]),
        }
    }

    pub(crate) fn vertex_output() -> Self {
        let mut node = Self::with_pins(NodeKind::VertexOutput, &[DataType::Vector4f32], &[]);
        node.inputs[0].set_default_value(Value::Vector4f32([0.0, 0.0, 0.0, 1.0]));
        node
    }

    /// Unique instance ID
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Kind and payload
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Input pins in declaration order
    pub fn inputs(&self) -> &[Pin] {
        &self.inputs
    }

    /// Output pins in declaration order
    pub fn outputs(&self) -> &[Pin] {
        &self.outputs
    }

    /// Get an input pin by index
    pub fn input(&self, index: usize) -> Option<&Pin> {
        self.inputs.get(index)
    }

    /// Get an output pin by index
    pub fn output(&self, index: usize) -> Option<&Pin> {
        self.outputs.get(index)
    }

    /// Get a pin by handle
    pub fn pin(&self, pin: PinId) -> Option<&Pin> {
        if pin.node != self.id {
            return None;
        }
        match pin.direction {
            PinDirection::In => self.inputs.get(pin.index),
            PinDirection::Out => self.outputs.get(pin.index),
        }
    }

    pub(crate) fn pin_mut(&mut self, pin: PinId) -> Option<&mut Pin> {
        if pin.node != self.id {
            return None;
        }
        match pin.direction {
            PinDirection::In => self.inputs.get_mut(pin.index),
            PinDirection::Out => self.outputs.get_mut(pin.index),
        }
    }

    /// Get all pins
    pub fn pins(&self) -> impl Iterator<Item = &Pin> {
        self.inputs.iter().chain(self.outputs.iter())
    }

    /// Variable payload, if this is a variable node
    pub fn variable(&self) -> Option<&Variable> {
        match &self.kind {
            NodeKind::Variable(variable) => Some(variable),
            _ => None,
        }
    }

    pub(crate) fn set_constant(&mut self, value: Value) -> Result<(), GraphError> {
        let NodeKind::Constant(current) = &mut self.kind else {
            return Err(GraphError::NotAConstant(self.id));
        };
        if current.data_type() != value.data_type() {
            return Err(GraphError::TypeMismatch {
                expected: current.data_type(),
                found: value.data_type(),
            });
        }
        *current = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_signatures() {
        let (inputs, output) = FunctionKind::Dot(DataType::Vector3f32).signature().unwrap();
        assert_eq!(inputs, vec![DataType::Vector3f32; 2]);
        assert_eq!(output, DataType::Float32);

        let (inputs, output) = FunctionKind::Cos(DataType::Vector4f32).signature().unwrap();
        assert_eq!(inputs, vec![DataType::Vector4f32]);
        assert_eq!(output, DataType::Vector4f32);

        let (inputs, _) = FunctionKind::CreateVec4.signature().unwrap();
        assert_eq!(inputs.len(), 4);
    }

    #[test]
    fn test_function_rejects_unsupported_types() {
        assert!(FunctionKind::Cos(DataType::Bool).signature().is_err());
        assert!(FunctionKind::Dot(DataType::Float32).signature().is_err());
        assert!(FunctionKind::Max(DataType::Matrix4x4f32).signature().is_err());
        assert!(FunctionKind::Max(DataType::Int32).signature().is_ok());
    }

    #[test]
    fn test_operator_result_types() {
        use ArithmeticOperator::*;
        use DataType::*;

        assert_eq!(Addition.result_type(Vector4f32, Vector4f32), Some(Vector4f32));
        assert_eq!(Multiplication.result_type(Matrix4x4f32, Vector4f32), Some(Vector4f32));
        assert_eq!(Addition.result_type(Matrix4x4f32, Vector4f32), None);
        assert_eq!(Division.result_type(Vector3f32, Float32), Some(Vector3f32));
        assert_eq!(Subtraction.result_type(Float32, Vector2f32), Some(Vector2f32));
        assert_eq!(Addition.result_type(Int32, Float32), None);
        assert_eq!(Addition.result_type(Bool, Bool), None);
        assert_eq!(Addition.result_type(Vector2f32, Vector3f32), None);
    }

    #[test]
    fn test_operator_node_shape() {
        let node = Node::operator(
            ArithmeticOperator::Addition,
            DataType::Vector2f32,
            DataType::Vector2f32,
        )
        .unwrap();
        assert_eq!(node.inputs().len(), 2);
        assert_eq!(node.outputs().len(), 1);
        assert_eq!(node.outputs()[0].data_type(), DataType::Vector2f32);
    }

    #[test]
    fn test_variable_pin_layout() {
        let output = Node::new_variable(VariableKind::Output, "color".into(), DataType::Vector4f32);
        assert_eq!(output.inputs().len(), 1);
        assert!(output.outputs().is_empty());
        assert_eq!(output.variable().map(|v| v.name.as_str()), Some("color"));

        let input = Node::new_variable(VariableKind::Input, "uv".into(), DataType::Vector2f32);
        assert!(input.inputs().is_empty());
        assert_eq!(input.outputs().len(), 1);
    }

    #[test]
    fn test_set_constant_keeps_type() {
        let mut node = Node::constant(Value::Float32(1.0));
        assert!(node.set_constant(Value::Float32(2.0)).is_ok());
        assert!(node.set_constant(Value::Int32(2)).is_err());
        assert_eq!(node.kind(), &NodeKind::Constant(Value::Float32(2.0)));
    }

    #[test]
    fn test_pin_lookup_checks_owner() {
        let node = Node::constant(Value::Bool(true));
        assert!(node.pin(PinId::output(node.id(), 0)).is_some());
        assert!(node.pin(PinId::output(NodeId::new(), 0)).is_none());
        assert!(node.pin(PinId::input(node.id(), 0)).is_none());
    }
}
