// SPDX-License-Identifier: MIT OR Apache-2.0
//! Per-stage script owning nodes, pins and interface blocks.

use crate::block::{BlockId, BlockMember, InterfaceBlock, PUSH_CONSTANT_BUDGET};
use crate::naming::is_usable_name;
use crate::node::{ArithmeticOperator, FunctionKind, Node, NodeId, VariableKind};
use crate::pin::{Pin, PinDirection, PinId};
use crate::value::{DataType, Value};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Shader stage a script belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShaderStage {
    /// Vertex stage
    Vertex,
    /// Fragment stage
    Fragment,
}

impl ShaderStage {
    /// Conventional file extension for generated sources
    pub fn file_extension(self) -> &'static str {
        match self {
            Self::Vertex => "vert",
            Self::Fragment => "frag",
        }
    }
}

/// The node graph of one shader stage
#[derive(Debug, Clone)]
pub struct Script {
    /// Script name, used in diagnostics
    pub name: String,
    stage: ShaderStage,
    /// Nodes in the script
    nodes: IndexMap<NodeId, Node>,
    input: InterfaceBlock,
    output: InterfaceBlock,
    push_constants: InterfaceBlock,
    /// Uniform blocks in registration order
    uniform_blocks: IndexMap<u32, InterfaceBlock>,
    /// Global constant variables in creation order
    constants: Vec<NodeId>,
    vertex_output: Option<NodeId>,
}

impl Script {
    /// Create an empty script for `stage`
    pub fn new(name: impl Into<String>, stage: ShaderStage) -> Self {
        let mut nodes = IndexMap::new();
        let vertex_output = (stage == ShaderStage::Vertex).then(|| {
            let node = Node::vertex_output();
            let id = node.id();
            nodes.insert(id, node);
            id
        });

        Self {
            name: name.into(),
            stage,
            nodes,
            input: InterfaceBlock::new(BlockId::Input),
            output: InterfaceBlock::new(BlockId::Output),
            push_constants: InterfaceBlock::new(BlockId::PushConstant),
            uniform_blocks: IndexMap::new(),
            constants: Vec::new(),
            vertex_output,
        }
    }

    /// Create an empty vertex script
    pub fn vertex(name: impl Into<String>) -> Self {
        Self::new(name, ShaderStage::Vertex)
    }

    /// Create an empty fragment script
    pub fn fragment(name: impl Into<String>) -> Self {
        Self::new(name, ShaderStage::Fragment)
    }

    /// Stage of this script
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    fn add_node(&mut self, node: Node) -> NodeId {
        let id = node.id();
        self.nodes.insert(id, node);
        id
    }

    /// Add a constant node holding `value`
    pub fn create_constant_node(&mut self, value: impl Into<Value>) -> NodeId {
        self.add_node(Node::constant(value.into()))
    }

    /// Add a function node
    pub fn create_function_node(&mut self, function: FunctionKind) -> Result<NodeId, GraphError> {
        let node = Node::function(function)?;
        Ok(self.add_node(node))
    }

    /// Add an arithmetic operator node with the given operand types
    pub fn create_operator_node(
        &mut self,
        operator: ArithmeticOperator,
        lhs: DataType,
        rhs: DataType,
    ) -> Result<NodeId, GraphError> {
        let node = Node::operator(operator, lhs, rhs)?;
        Ok(self.add_node(node))
    }

    /// Add a named global constant variable.
    ///
    /// The name must be a GLSL identifier that no other constant variable
    /// uses and that generated code does not claim.
    pub fn create_constant_variable(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<NodeId, GraphError> {
        let name = name.into();
        if !is_usable_name(&name) {
            return Err(GraphError::InvalidName(name));
        }
        let taken = self
            .constants
            .iter()
            .filter_map(|id| self.nodes.get(id)?.variable())
            .any(|variable| variable.name == name);
        if taken {
            return Err(GraphError::DuplicateName(name));
        }

        let value = value.into();
        let node = Node::new_variable(VariableKind::Constant(value), name, value.data_type());
        let id = self.add_node(node);
        self.constants.push(id);
        Ok(id)
    }

    /// Remove a node after severing all of its connections.
    ///
    /// Returns `false` without changing anything for unknown nodes and for
    /// nodes owned by an interface block or the vertex output.
    pub fn destroy_node(&mut self, node_id: NodeId) -> bool {
        if !self.nodes.contains_key(&node_id) || self.is_owned_by_block(node_id) {
            return false;
        }

        let pins: Vec<PinId> = self.nodes[&node_id].pins().map(Pin::id).collect();
        for pin in pins {
            self.disconnect(pin);
        }
        self.constants.retain(|id| *id != node_id);
        self.nodes.shift_remove(&node_id);
        tracing::trace!("Destroyed node {:?} in script '{}'", node_id, self.name);
        true
    }

    fn is_owned_by_block(&self, node_id: NodeId) -> bool {
        self.vertex_output == Some(node_id)
            || self.input.contains_node(node_id)
            || self.output.contains_node(node_id)
            || self.push_constants.contains_node(node_id)
            || self.uniform_blocks.values().any(|b| b.contains_node(node_id))
    }

    /// Register a uniform block; `None` if `id` is already taken
    pub fn create_uniform_block(&mut self, id: u32) -> Option<BlockId> {
        if self.uniform_blocks.contains_key(&id) {
            tracing::debug!("Uniform block {} already exists in script '{}'", id, self.name);
            return None;
        }
        let block_id = BlockId::Uniform(id);
        self.uniform_blocks.insert(id, InterfaceBlock::new(block_id));
        Some(block_id)
    }

    /// Append a member to an interface block, creating its variable node.
    ///
    /// Member names follow the same rules as constant variable names and
    /// must be unique within the block.
    pub fn add_member(
        &mut self,
        block_id: BlockId,
        name: impl Into<String>,
        data_type: DataType,
    ) -> Result<NodeId, GraphError> {
        let name = name.into();
        let block = self.block(block_id).ok_or(GraphError::BlockNotFound(block_id))?;

        if !is_usable_name(&name) {
            return Err(GraphError::InvalidName(name));
        }
        if block.member_by_name(&name).is_some() {
            return Err(GraphError::DuplicateName(name));
        }
        if data_type.is_opaque() && !matches!(block_id, BlockId::Uniform(_)) {
            return Err(GraphError::OpaqueMember { block: block_id, data_type });
        }
        let offset = match block_id {
            BlockId::PushConstant => Some(
                block
                    .next_push_constant_offset(data_type)
                    .ok_or(GraphError::PushConstantBudget(PUSH_CONSTANT_BUDGET))?,
            ),
            _ => None,
        };
        let kind = match block_id {
            BlockId::Input => VariableKind::Input,
            BlockId::Output => VariableKind::Output,
            BlockId::PushConstant | BlockId::Uniform(_) => VariableKind::Uniform,
        };

        let node = self.add_node(Node::new_variable(kind, name.clone(), data_type));
        let member = BlockMember {
            name,
            data_type,
            node,
            offset,
        };
        match block_id {
            BlockId::Input => self.input.push(member),
            BlockId::Output => self.output.push(member),
            BlockId::PushConstant => self.push_constants.push(member),
            BlockId::Uniform(id) => {
                if let Some(block) = self.uniform_blocks.get_mut(&id) {
                    block.push(member);
                }
            }
        }
        Ok(node)
    }

    /// Stage input block
    pub fn input_interface(&self) -> &InterfaceBlock {
        &self.input
    }

    /// Stage output block
    pub fn output_interface(&self) -> &InterfaceBlock {
        &self.output
    }

    /// Push-constant block
    pub fn push_constant_interface(&self) -> &InterfaceBlock {
        &self.push_constants
    }

    /// Uniform blocks in registration order
    pub fn uniform_blocks(&self) -> impl Iterator<Item = &InterfaceBlock> {
        self.uniform_blocks.values()
    }

    /// Get a uniform block by id
    pub fn uniform_block(&self, id: u32) -> Option<&InterfaceBlock> {
        self.uniform_blocks.get(&id)
    }

    /// Get any block by id
    pub fn block(&self, block_id: BlockId) -> Option<&InterfaceBlock> {
        match block_id {
            BlockId::Input => Some(&self.input),
            BlockId::Output => Some(&self.output),
            BlockId::PushConstant => Some(&self.push_constants),
            BlockId::Uniform(id) => self.uniform_blocks.get(&id),
        }
    }

    /// Global constant variables in creation order
    pub fn constant_variables(&self) -> &[NodeId] {
        &self.constants
    }

    /// The vertex output node (`gl_Position`); `None` for fragment scripts
    pub fn vertex_output_variable(&self) -> Option<NodeId> {
        self.vertex_output
    }

    /// Get a node by ID
    pub fn node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(&node_id)
    }

    /// Get all nodes
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Get the number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Check if a node belongs to this script
    pub fn contains(&self, node_id: NodeId) -> bool {
        self.nodes.contains_key(&node_id)
    }

    /// Get a pin by handle
    pub fn pin(&self, pin: PinId) -> Option<&Pin> {
        self.nodes.get(&pin.node)?.pin(pin)
    }

    fn pin_mut(&mut self, pin: PinId) -> Option<&mut Pin> {
        self.nodes.get_mut(&pin.node)?.pin_mut(pin)
    }

    /// Connect an output pin to an input pin of the same data type.
    ///
    /// A previous connection of `input` is removed first. On error the graph
    /// is left unchanged.
    pub fn connect(&mut self, output: PinId, input: PinId) -> Result<(), GraphError> {
        let source = self.pin(output).ok_or(GraphError::PinNotFound(output))?;
        let target = self.pin(input).ok_or(GraphError::PinNotFound(input))?;

        if source.direction() != PinDirection::Out || target.direction() != PinDirection::In {
            return Err(GraphError::DirectionMismatch { output, input });
        }
        if source.data_type() != target.data_type() {
            return Err(GraphError::TypeMismatch {
                expected: target.data_type(),
                found: source.data_type(),
            });
        }

        self.disconnect(input);
        if let Some(pin) = self.pin_mut(input) {
            pin.set_connection(Some(output));
        }
        if let Some(pin) = self.pin_mut(output) {
            pin.add_fan_out(input);
        }
        Ok(())
    }

    /// Remove every edge touching `pin` from both endpoints
    pub fn disconnect(&mut self, pin: PinId) {
        match pin.direction {
            PinDirection::In => {
                let upstream = self.pin_mut(pin).and_then(Pin::take_connection);
                if let Some(source) = upstream.and_then(|p| self.pin_mut(p)) {
                    source.remove_fan_out(pin);
                }
            }
            PinDirection::Out => {
                let downstream = self.pin_mut(pin).map(Pin::take_fan_out).unwrap_or_default();
                for target in downstream {
                    if let Some(target) = self.pin_mut(target) {
                        target.set_connection(None);
                    }
                }
            }
        }
    }

    /// Upstream output pin of an input pin
    pub fn connection(&self, input: PinId) -> Option<PinId> {
        self.pin(input)?.connection()
    }

    /// Set the value an unconnected input pin falls back to
    pub fn set_default_value(&mut self, input: PinId, value: impl Into<Value>) -> Result<(), GraphError> {
        let value = value.into();
        let pin = self.pin_mut(input).ok_or(GraphError::PinNotFound(input))?;
        if pin.direction() != PinDirection::In {
            return Err(GraphError::NotAnInput(input));
        }
        if pin.data_type() != value.data_type() {
            return Err(GraphError::TypeMismatch {
                expected: pin.data_type(),
                found: value.data_type(),
            });
        }
        pin.set_default_value(value);
        Ok(())
    }

    /// Replace the value of a constant node; the data type may not change
    pub fn set_constant_value(&mut self, node_id: NodeId, value: impl Into<Value>) -> Result<(), GraphError> {
        self.nodes
            .get_mut(&node_id)
            .ok_or(GraphError::NodeNotFound(node_id))?
            .set_constant(value.into())
    }

    /// Check that `next` can follow this stage: this stage's outputs match
    /// `next`'s inputs and uniform blocks sharing an id have the same layout.
    pub fn check_linkage(&self, next: &Script) -> bool {
        self.output.check_compatibility(&next.input)
            && self.uniform_blocks.iter().all(|(id, block)| {
                next.uniform_blocks
                    .get(id)
                    .map_or(true, |other| block.check_compatibility(other))
            })
    }
}

/// Error when mutating a script
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// Node not found
    #[error("Node not found: {0:?}")]
    NodeNotFound(NodeId),

    /// Pin not found
    #[error("Pin not found: {0:?}")]
    PinNotFound(PinId),

    /// Block not found
    #[error("Interface block not found: {0:?}")]
    BlockNotFound(BlockId),

    /// Uniform block id already registered.
    ///
    /// [`Script::create_uniform_block`] reports this case as `None`; callers
    /// that propagate errors map it to this variant.
    #[error("Uniform block {0} already exists")]
    DuplicateUniformBlock(u32),

    /// Name is not an identifier or is claimed by generated code
    #[error("'{0}' is not a usable variable name")]
    InvalidName(String),

    /// Name already used in the same namespace
    #[error("Name '{0}' is already in use")]
    DuplicateName(String),

    /// Pin directions do not form an output to input edge
    #[error("Cannot connect {output:?} to {input:?}: expected an output and an input pin")]
    DirectionMismatch {
        /// Intended source
        output: PinId,
        /// Intended target
        input: PinId,
    },

    /// Data types differ
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Type required by the receiving side
        expected: DataType,
        /// Type offered
        found: DataType,
    },

    /// Default values only apply to input pins
    #[error("Not an input pin: {0:?}")]
    NotAnInput(PinId),

    /// Node is not a constant
    #[error("Not a constant node: {0:?}")]
    NotAConstant(NodeId),

    /// Function does not accept this data type
    #[error("Function '{function}' does not support {data_type}")]
    UnsupportedFunctionType {
        /// Function name
        function: &'static str,
        /// Rejected type
        data_type: DataType,
    },

    /// Operator does not accept these operand types
    #[error("Operator {operator:?} does not support {lhs} and {rhs}")]
    UnsupportedOperands {
        /// Operator
        operator: ArithmeticOperator,
        /// Left operand type
        lhs: DataType,
        /// Right operand type
        rhs: DataType,
    },

    /// Opaque types only live in uniform blocks
    #[error("{data_type} members are not allowed in {block:?}")]
    OpaqueMember {
        /// Target block
        block: BlockId,
        /// Rejected type
        data_type: DataType,
    },

    /// Push-constant block is full
    #[error("Push constants exceed the {0} byte budget")]
    PushConstantBudget(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cos_script() -> (Script, NodeId, NodeId) {
        let mut script = Script::fragment("test");
        let constant = script.create_constant_node([1.0f32, 2.0, 3.0, 4.0]);
        let cos = script
            .create_function_node(FunctionKind::Cos(DataType::Vector4f32))
            .unwrap();
        (script, constant, cos)
    }

    #[test]
    fn test_connect_and_disconnect() {
        let (mut script, constant, cos) = cos_script();
        let out = PinId::output(constant, 0);
        let input = PinId::input(cos, 0);

        script.connect(out, input).unwrap();
        assert_eq!(script.connection(input), Some(out));
        assert_eq!(script.pin(out).unwrap().connections(), &[input]);

        script.disconnect(input);
        assert_eq!(script.connection(input), None);
        assert!(script.pin(out).unwrap().connections().is_empty());

        // No-op when unconnected
        script.disconnect(input);
        script.disconnect(out);
    }

    #[test]
    fn test_disconnect_output_clears_fan_out() {
        let mut script = Script::fragment("test");
        let constant = script.create_constant_node(1.5f32);
        let add = script
            .create_operator_node(ArithmeticOperator::Addition, DataType::Float32, DataType::Float32)
            .unwrap();
        let out = PinId::output(constant, 0);

        script.connect(out, PinId::input(add, 0)).unwrap();
        script.connect(out, PinId::input(add, 1)).unwrap();
        assert_eq!(script.pin(out).unwrap().connections().len(), 2);

        script.disconnect(out);
        assert_eq!(script.connection(PinId::input(add, 0)), None);
        assert_eq!(script.connection(PinId::input(add, 1)), None);
    }

    #[test]
    fn test_connect_rejects_every_type_mismatch() {
        for &from in DataType::all() {
            for &to in DataType::all() {
                let mut script = Script::fragment("test");
                script.create_uniform_block(0);
                let source = script.add_member(BlockId::Uniform(0), "src", from).unwrap();
                let target = if to == DataType::Sampler2D {
                    script.create_function_node(FunctionKind::Texture).unwrap()
                } else {
                    script.add_member(BlockId::Output, "dst", to).unwrap()
                };
                let output = PinId::output(source, 0);
                let input = PinId::input(target, 0);

                let result = script.connect(output, input);
                assert_eq!(result.is_ok(), from == to, "{from} -> {to}");
                if from != to {
                    assert_eq!(script.connection(input), None);
                    assert!(script.pin(output).unwrap().connections().is_empty());
                }
            }
        }
    }

    #[test]
    fn test_connect_replaces_previous_edge() {
        let (mut script, first, cos) = cos_script();
        let second = script.create_constant_node([0.0f32; 4]);
        let input = PinId::input(cos, 0);

        script.connect(PinId::output(first, 0), input).unwrap();
        script.connect(PinId::output(second, 0), input).unwrap();

        assert_eq!(script.connection(input), Some(PinId::output(second, 0)));
        assert!(script.pin(PinId::output(first, 0)).unwrap().connections().is_empty());
    }

    #[test]
    fn test_connect_rejects_wrong_direction() {
        let (mut script, constant, cos) = cos_script();
        let result = script.connect(PinId::output(cos, 0), PinId::output(constant, 0));
        assert!(matches!(result, Err(GraphError::DirectionMismatch { .. })));
        let result = script.connect(PinId::input(cos, 0), PinId::input(cos, 0));
        assert!(matches!(result, Err(GraphError::DirectionMismatch { .. })));
    }

    #[test]
    fn test_destroy_node_leaves_no_dangling_edges() {
        let (mut script, constant, cos) = cos_script();
        let out = script.add_member(BlockId::Output, "color", DataType::Vector4f32).unwrap();
        script.connect(PinId::output(constant, 0), PinId::input(cos, 0)).unwrap();
        script.connect(PinId::output(cos, 0), PinId::input(out, 0)).unwrap();

        assert!(script.destroy_node(cos));
        assert!(!script.contains(cos));
        for node in script.nodes() {
            for pin in node.pins() {
                assert!(!pin.references(PinId::input(cos, 0)));
                assert!(!pin.references(PinId::output(cos, 0)));
                assert!(pin.connections().iter().all(|p| p.node != cos));
            }
        }
        assert!(!script.destroy_node(cos));
    }

    #[test]
    fn test_destroy_refuses_block_members() {
        let mut script = Script::vertex("test");
        let position = script.add_member(BlockId::Input, "position", DataType::Vector3f32).unwrap();
        assert!(!script.destroy_node(position));
        let vertex_output = script.vertex_output_variable().unwrap();
        assert!(!script.destroy_node(vertex_output));
        assert!(!script.destroy_node(NodeId::new()));
    }

    #[test]
    fn test_duplicate_uniform_block_id() {
        let mut script = Script::fragment("test");
        assert_eq!(script.create_uniform_block(5), Some(BlockId::Uniform(5)));
        assert_eq!(script.create_uniform_block(5), None);
        assert_eq!(script.uniform_blocks().count(), 1);
        assert_eq!(script.uniform_block(5).unwrap().uniform_id(), Some(5));
    }

    #[test]
    fn test_vertex_output_only_for_vertex_stage() {
        let vertex = Script::vertex("v");
        let node = vertex.vertex_output_variable().unwrap();
        let pin = vertex.pin(PinId::input(node, 0)).unwrap();
        assert_eq!(pin.data_type(), DataType::Vector4f32);
        assert_eq!(pin.default_value(), Some(&Value::Vector4f32([0.0, 0.0, 0.0, 1.0])));

        assert!(Script::fragment("f").vertex_output_variable().is_none());
    }

    #[test]
    fn test_add_member_rules() {
        let mut script = Script::fragment("test");
        assert!(matches!(
            script.add_member(BlockId::Uniform(3), "x", DataType::Float32),
            Err(GraphError::BlockNotFound(_))
        ));
        assert!(matches!(
            script.add_member(BlockId::Input, "tex", DataType::Sampler2D),
            Err(GraphError::OpaqueMember { .. })
        ));

        script.add_member(BlockId::PushConstant, "mvp", DataType::Matrix4x4f32).unwrap();
        script.add_member(BlockId::PushConstant, "model", DataType::Matrix4x4f32).unwrap();
        assert_eq!(
            script.add_member(BlockId::PushConstant, "extra", DataType::Float32),
            Err(GraphError::PushConstantBudget(PUSH_CONSTANT_BUDGET))
        );
        assert_eq!(script.push_constant_interface().len(), 2);
        assert_eq!(script.push_constant_interface().member(1).unwrap().offset, Some(64));
    }

    #[test]
    fn test_set_default_value() {
        let (mut script, constant, cos) = cos_script();
        let input = PinId::input(cos, 0);

        script.set_default_value(input, [2.1f32, 3.5, 4.7, 5.2]).unwrap();
        assert_eq!(
            script.pin(input).unwrap().default_value(),
            Some(&Value::Vector4f32([2.1, 3.5, 4.7, 5.2]))
        );
        assert!(script.set_default_value(input, 1.0f32).is_err());
        assert_eq!(
            script.set_default_value(PinId::output(constant, 0), [0.0f32; 4]),
            Err(GraphError::NotAnInput(PinId::output(constant, 0)))
        );
    }

    #[test]
    fn test_check_linkage() {
        let mut vertex = Script::vertex("v");
        let mut fragment = Script::fragment("f");
        vertex.add_member(BlockId::Output, "uv", DataType::Vector2f32).unwrap();
        fragment.add_member(BlockId::Input, "uv", DataType::Vector2f32).unwrap();
        assert!(vertex.check_linkage(&fragment));

        vertex.create_uniform_block(0);
        fragment.create_uniform_block(0);
        vertex.add_member(BlockId::Uniform(0), "tint", DataType::Vector4f32).unwrap();
        fragment.add_member(BlockId::Uniform(0), "tint", DataType::Vector3f32).unwrap();
        assert!(!vertex.check_linkage(&fragment));
    }

    #[test]
    fn test_constant_variable_lifecycle() {
        let mut script = Script::fragment("test");
        let gamma = script.create_constant_variable("GAMMA", 2.2f32).unwrap();
        assert_eq!(script.constant_variables(), &[gamma]);
        assert!(script.destroy_node(gamma));
        assert!(script.constant_variables().is_empty());
    }

    #[test]
    fn test_constant_variable_names() {
        let mut script = Script::fragment("test");
        script.create_constant_variable("GAMMA", 2.2f32).unwrap();
        assert_eq!(
            script.create_constant_variable("GAMMA", 1.0f32),
            Err(GraphError::DuplicateName("GAMMA".to_string()))
        );
        for name in ["cos_0", "out_1", "pc", "ub_0", "gl_FragCoord", "2x", ""] {
            assert_eq!(
                script.create_constant_variable(name, 1.0f32),
                Err(GraphError::InvalidName(name.to_string()))
            );
        }
        assert_eq!(script.constant_variables().len(), 1);
    }

    #[test]
    fn test_destroyed_constant_frees_its_name() {
        let mut script = Script::fragment("test");
        let gamma = script.create_constant_variable("GAMMA", 2.2f32).unwrap();
        assert!(script.destroy_node(gamma));
        assert!(script.create_constant_variable("GAMMA", 2.4f32).is_ok());
    }

    #[test]
    fn test_member_names() {
        let mut script = Script::fragment("test");
        let block = script.create_uniform_block(0).unwrap();
        script.add_member(block, "x", DataType::Float32).unwrap();
        assert_eq!(
            script.add_member(block, "x", DataType::Vector2f32),
            Err(GraphError::DuplicateName("x".to_string()))
        );
        assert_eq!(
            script.add_member(BlockId::Output, "gl_Position", DataType::Vector4f32),
            Err(GraphError::InvalidName("gl_Position".to_string()))
        );
        assert_eq!(script.uniform_block(0).unwrap().len(), 1);
        let nodes = script.node_count();

        // The same name is fine in another block.
        script.add_member(BlockId::Input, "x", DataType::Float32).unwrap();
        assert_eq!(script.node_count(), nodes + 1);
    }

    #[test]
    fn test_duplicate_uniform_block_error() {
        let mut script = Script::fragment("test");
        script.create_uniform_block(5);
        let result = script
            .create_uniform_block(5)
            .ok_or(GraphError::DuplicateUniformBlock(5));
        assert_eq!(result.unwrap_err().to_string(), "Uniform block 5 already exists");
    }
}
