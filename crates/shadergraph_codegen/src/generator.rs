// SPDX-License-Identifier: MIT OR Apache-2.0
//! GLSL generation from a script.
//!
//! Declarations are emitted in dependency order by an iterative post-order
//! walk starting at every stage output. Output pins that were already
//! resolved are looked up in a visited table, so a node feeding several
//! consumers is declared once and the walk stays linear in nodes + edges.

use crate::literal::format_value;
use crate::settings::GeneratorSettings;
use shadergraph_graph::{
    BlockId, DataType, InterfaceBlock, Node, NodeId, NodeKind, Pin, PinId, Script, Variable,
    VariableKind,
};
use std::collections::HashMap;
use std::fmt::Write;

/// Name the vertex output is bound to
pub const VERTEX_OUTPUT_NAME: &str = "gl_Position";

/// Generate GLSL for `script` with default settings
pub fn generate_glsl(script: &Script) -> Result<Vec<u8>, GenerateError> {
    GlslGenerator::default().generate(script)
}

/// GLSL generator
#[derive(Debug, Clone, Default)]
pub struct GlslGenerator {
    settings: GeneratorSettings,
}

impl GlslGenerator {
    /// Create a generator with the given settings
    pub fn new(settings: GeneratorSettings) -> Self {
        Self { settings }
    }

    /// Get the settings
    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Generate GLSL source bytes for `script`.
    ///
    /// Either the complete source is returned or an error; partial output is
    /// never handed out.
    pub fn generate(&self, script: &Script) -> Result<Vec<u8>, GenerateError> {
        tracing::debug!(
            "Generating GLSL for {:?} script '{}' ({} nodes)",
            script.stage(),
            script.name,
            script.node_count()
        );

        let mut emitter = Emitter::new(script);
        match emitter.emit_script(&self.settings) {
            Ok(()) => {
                tracing::debug!(
                    "Generated {} bytes of GLSL for '{}' ({} statements)",
                    emitter.source.len(),
                    script.name,
                    emitter.counter
                );
                Ok(emitter.source.into_bytes())
            }
            Err(e) => {
                tracing::warn!("GLSL generation for '{}' failed: {}", script.name, e);
                Err(e)
            }
        }
    }
}

/// Entry of the visited table
#[derive(Debug, Clone)]
enum Visit {
    /// On the traversal stack, not yet declared
    Pending,
    /// Declared under this name
    Named(String),
}

/// Traversal frame: a node and the expressions of its resolved inputs
struct Frame<'s> {
    node: &'s Node,
    args: Vec<String>,
}

struct Emitter<'s> {
    script: &'s Script,
    source: String,
    visited: HashMap<PinId, Visit>,
    counter: usize,
}

impl<'s> Emitter<'s> {
    fn new(script: &'s Script) -> Self {
        Self {
            script,
            source: String::new(),
            visited: HashMap::new(),
            counter: 0,
        }
    }

    fn bind(&mut self, node: NodeId, name: String) {
        self.visited.insert(PinId::output(node, 0), Visit::Named(name));
    }

    fn emit_script(&mut self, settings: &GeneratorSettings) -> Result<(), GenerateError> {
        writeln!(self.source, "#version {}", settings.glsl_version)?;
        for extension in &settings.extensions {
            writeln!(self.source, "#extension {extension} : enable")?;
        }

        let script = self.script;
        for (i, member) in script.input_interface().members().iter().enumerate() {
            writeln!(
                self.source,
                "layout(location = {i}) in {} in_{i};",
                member.data_type
            )?;
            self.bind(member.node, format!("in_{i}"));
        }

        for (set, block) in script.uniform_blocks().enumerate() {
            self.emit_uniform_block(set, block)?;
        }
        self.emit_push_constants(script.push_constant_interface())?;

        for (i, member) in script.output_interface().members().iter().enumerate() {
            writeln!(
                self.source,
                "layout(location = {i}) out {} out_{i};",
                member.data_type
            )?;
        }

        for &node_id in script.constant_variables() {
            let Some(variable) = script.node(node_id).and_then(Node::variable) else {
                continue;
            };
            if let VariableKind::Constant(value) = &variable.kind {
                writeln!(
                    self.source,
                    "const {} {} = {};",
                    value.data_type(),
                    variable.name,
                    format_value(value)?
                )?;
                self.bind(node_id, variable.name.clone());
            }
        }

        self.source.push_str("void main(){\n");
        for (i, member) in script.output_interface().members().iter().enumerate() {
            self.emit_target(member.node, &format!("out_{i}"))?;
        }
        if let Some(node_id) = script.vertex_output_variable() {
            self.emit_target(node_id, VERTEX_OUTPUT_NAME)?;
        }
        self.source.push_str("}\n");
        Ok(())
    }

    fn emit_uniform_block(&mut self, set: usize, block: &InterfaceBlock) -> Result<(), GenerateError> {
        let BlockId::Uniform(id) = block.id() else {
            return Ok(());
        };
        let instance = format!("ub_{id}");

        let (samplers, values): (Vec<_>, Vec<_>) = block
            .members()
            .iter()
            .partition(|m| m.data_type.is_opaque());

        if !values.is_empty() {
            writeln!(
                self.source,
                "layout(set = {set}, binding = 0) uniform UniformBlock_{id} {{"
            )?;
            for member in &values {
                writeln!(self.source, "{} {};", member.data_type, member.name)?;
                self.bind(member.node, format!("{instance}.{}", member.name));
            }
            writeln!(self.source, "}} {instance};")?;
        }

        for (binding, member) in (1..).zip(&samplers) {
            let name = format!("{instance}_{}", member.name);
            writeln!(
                self.source,
                "layout(set = {set}, binding = {binding}) uniform {} {name};",
                member.data_type
            )?;
            self.bind(member.node, name);
        }
        Ok(())
    }

    fn emit_push_constants(&mut self, block: &InterfaceBlock) -> Result<(), GenerateError> {
        if block.is_empty() {
            return Ok(());
        }

        self.source.push_str("layout(push_constant) uniform PushConstants {\n");
        for member in block.members() {
            let offset = member.offset.unwrap_or_default();
            writeln!(
                self.source,
                "layout(offset = {offset}) {} {};",
                member.data_type, member.name
            )?;
            self.bind(member.node, format!("pc.{}", member.name));
        }
        self.source.push_str("} pc;\n");
        Ok(())
    }

    /// Resolve everything feeding the single input of `node_id` (an output
    /// variable or the vertex output) and assign it to `target`.
    fn emit_target(&mut self, node_id: NodeId, target: &str) -> Result<(), GenerateError> {
        let script = self.script;
        let node = script
            .node(node_id)
            .ok_or(GenerateError::DanglingPin(PinId::input(node_id, 0)))?;

        let mut stack = vec![Frame {
            node,
            args: Vec::with_capacity(1),
        }];

        while let Some(frame) = stack.last_mut() {
            let node: &'s Node = frame.node;
            if let Some(pin) = node.inputs().get(frame.args.len()) {
                match pin.connection() {
                    None => frame.args.push(format_default(pin)?),
                    Some(upstream) => match self.lookup(upstream)? {
                        Some(name) => frame.args.push(name),
                        None => {
                            let next = self.enter(upstream)?;
                            stack.push(next);
                        }
                    },
                }
                continue;
            }

            let Some(frame) = stack.pop() else {
                break;
            };
            let name = self.emit_frame(frame, target)?;
            if let Some(parent) = stack.last_mut() {
                parent.args.push(name);
            }
        }
        Ok(())
    }

    fn lookup(&self, pin: PinId) -> Result<Option<String>, GenerateError> {
        match self.visited.get(&pin) {
            Some(Visit::Named(name)) => Ok(Some(name.clone())),
            Some(Visit::Pending) => Err(GenerateError::CyclicDependency(pin.node)),
            None => Ok(None),
        }
    }

    /// Mark `upstream` as pending and open a frame for its node
    fn enter(&mut self, upstream: PinId) -> Result<Frame<'s>, GenerateError> {
        let node = self
            .script
            .node(upstream.node)
            .ok_or(GenerateError::DanglingPin(upstream))?;
        self.visited.insert(upstream, Visit::Pending);
        Ok(Frame {
            node,
            args: Vec::with_capacity(node.inputs().len()),
        })
    }

    /// Emit the statement for a fully resolved frame and return the name
    /// its value is available under.
    fn emit_frame(&mut self, frame: Frame<'s>, target: &str) -> Result<String, GenerateError> {
        let Frame { node, args } = frame;

        let (prefix, rhs) = match node.kind() {
            NodeKind::VertexOutput
            | NodeKind::Variable(Variable {
                kind: VariableKind::Output,
                ..
            }) => {
                writeln!(self.source, "{target} = {};", args[0])?;
                return Ok(target.to_string());
            }
            NodeKind::Constant(value) => (value.data_type().glsl_name(), format_value(value)?),
            NodeKind::Function(function) => {
                (function.name(), format!("{}({})", function.name(), args.join(", ")))
            }
            NodeKind::Operator(operator) => (
                operator.name(),
                format!("{} {} {}", args[0], operator.symbol(), args[1]),
            ),
            NodeKind::Variable(variable) => {
                return Err(GenerateError::UnboundVariable(variable.name.clone()));
            }
        };

        let output = node
            .output(0)
            .ok_or(GenerateError::DanglingPin(PinId::output(node.id(), 0)))?;
        let name = format!("{prefix}_{}", self.counter);
        self.counter += 1;

        writeln!(self.source, "{} {name} = {rhs};", output.data_type())?;
        tracing::trace!("Declared {} for node {:?}", name, node.id());
        self.visited.insert(output.id(), Visit::Named(name.clone()));
        Ok(name)
    }
}

/// Error that aborts GLSL generation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerateError {
    /// NaN and infinities have no GLSL literal
    #[error("Float literal {0} has no GLSL representation")]
    NonFiniteLiteral(f32),

    /// Unconnected input whose type has no literal form
    #[error("Input pin {pin:?} of type {data_type} is unconnected and has no default value")]
    MissingDefault {
        /// Offending pin
        pin: PinId,
        /// Its data type
        data_type: DataType,
    },

    /// The walk reached a node that is still waiting for its inputs
    #[error("Cyclic dependency through node {0:?}")]
    CyclicDependency(NodeId),

    /// An input, uniform or constant variable no block declares
    #[error("Variable '{0}' is not declared by any interface block")]
    UnboundVariable(String),

    /// A pin handle points at a node missing from the script
    #[error("Pin {0:?} refers to a node outside the script")]
    DanglingPin(PinId),

    /// Writing the source failed
    #[error("Failed to write GLSL source: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Format a pin's default value the way the generator would
pub fn format_default(pin: &Pin) -> Result<String, GenerateError> {
    match pin.default_value() {
        Some(value) => format_value(value),
        None => Err(GenerateError::MissingDefault {
            pin: pin.id(),
            data_type: pin.data_type(),
        }),
    }
}
