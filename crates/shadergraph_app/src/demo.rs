// SPDX-License-Identifier: MIT OR Apache-2.0
//! Bundled demo material: a textured surface whose brightness pulses over
//! time.

use shadergraph_graph::{
    ArithmeticOperator, BlockId, DataType, FunctionKind, GraphError, NodeId, PinId, Script,
};

/// Uniform block shared by both stages
pub const FRAME_BLOCK: u32 = 0;
/// Fragment-only material uniforms
pub const MATERIAL_BLOCK: u32 = 1;

fn out(node: NodeId) -> PinId {
    PinId::output(node, 0)
}

/// Declare the shared frame block and return its `time` member
fn frame_block(script: &mut Script) -> Result<NodeId, GraphError> {
    let block = script
        .create_uniform_block(FRAME_BLOCK)
        .ok_or(GraphError::DuplicateUniformBlock(FRAME_BLOCK))?;
    script.add_member(block, "time", DataType::Float32)
}

/// Vertex stage: transforms the position by the push-constant MVP and passes
/// the UV through.
pub fn build_vertex(name: &str) -> Result<Script, GraphError> {
    let mut script = Script::vertex(name);
    let position = script.add_member(BlockId::Input, "position", DataType::Vector4f32)?;
    let uv_in = script.add_member(BlockId::Input, "uv", DataType::Vector2f32)?;
    let mvp = script.add_member(BlockId::PushConstant, "mvp", DataType::Matrix4x4f32)?;
    frame_block(&mut script)?;
    let uv_out = script.add_member(BlockId::Output, "uv", DataType::Vector2f32)?;

    let transform = script.create_operator_node(
        ArithmeticOperator::Multiplication,
        DataType::Matrix4x4f32,
        DataType::Vector4f32,
    )?;
    script.connect(out(mvp), PinId::input(transform, 0))?;
    script.connect(out(position), PinId::input(transform, 1))?;
    if let Some(gl_position) = script.vertex_output_variable() {
        script.connect(out(transform), PinId::input(gl_position, 0))?;
    }
    script.connect(out(uv_in), PinId::input(uv_out, 0))?;
    Ok(script)
}

/// Fragment stage: `texture(albedo, uv) * tint * (0.75 + 0.25 * sin(time))`
pub fn build_fragment(name: &str) -> Result<Script, GraphError> {
    let mut script = Script::fragment(name);
    let uv = script.add_member(BlockId::Input, "uv", DataType::Vector2f32)?;
    let time = frame_block(&mut script)?;
    let material = script
        .create_uniform_block(MATERIAL_BLOCK)
        .ok_or(GraphError::DuplicateUniformBlock(MATERIAL_BLOCK))?;
    let tint = script.add_member(material, "tint", DataType::Vector4f32)?;
    let albedo = script.add_member(material, "albedo", DataType::Sampler2D)?;
    let color = script.add_member(BlockId::Output, "color", DataType::Vector4f32)?;

    let texture = script.create_function_node(FunctionKind::Texture)?;
    script.connect(out(albedo), PinId::input(texture, 0))?;
    script.connect(out(uv), PinId::input(texture, 1))?;

    let tinted = script.create_operator_node(
        ArithmeticOperator::Multiplication,
        DataType::Vector4f32,
        DataType::Vector4f32,
    )?;
    script.connect(out(texture), PinId::input(tinted, 0))?;
    script.connect(out(tint), PinId::input(tinted, 1))?;

    let wave = script.create_function_node(FunctionKind::Sin(DataType::Float32))?;
    script.connect(out(time), PinId::input(wave, 0))?;

    let amplitude = script.create_operator_node(
        ArithmeticOperator::Multiplication,
        DataType::Float32,
        DataType::Float32,
    )?;
    script.set_default_value(PinId::input(amplitude, 0), 0.25f32)?;
    script.connect(out(wave), PinId::input(amplitude, 1))?;

    let brightness = script.create_operator_node(
        ArithmeticOperator::Addition,
        DataType::Float32,
        DataType::Float32,
    )?;
    let base = script.create_constant_node(0.75f32);
    script.connect(out(base), PinId::input(brightness, 0))?;
    script.connect(out(amplitude), PinId::input(brightness, 1))?;

    let shaded = script.create_operator_node(
        ArithmeticOperator::Multiplication,
        DataType::Vector4f32,
        DataType::Float32,
    )?;
    script.connect(out(tinted), PinId::input(shaded, 0))?;
    script.connect(out(brightness), PinId::input(shaded, 1))?;
    script.connect(out(shaded), PinId::input(color, 0))?;
    Ok(script)
}
