// SPDX-License-Identifier: MIT OR Apache-2.0
//! GLSL code generation for shader node graphs.
//!
//! This crate lowers a [`Script`](shadergraph_graph::Script) to GLSL source:
//! - Interface, uniform and push-constant declarations
//! - Dependency-ordered statements with shared sub-expressions declared once
//! - Literal defaults for unconnected inputs
//!
//! The generated bytes can optionally be handed to an external SPIR-V
//! compiler through [`spirv::convert_glsl_to_spirv`].

pub mod literal;
pub mod settings;
pub mod generator;
pub mod spirv;

pub use generator::{format_default, generate_glsl, GenerateError, GlslGenerator};
pub use literal::{format_float, format_value};
pub use settings::{GeneratorSettings, SettingsError};
pub use spirv::{convert_glsl_to_spirv, ensure_initialized, SpirvCompiler};
