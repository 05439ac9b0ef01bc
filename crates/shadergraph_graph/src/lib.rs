// SPDX-License-Identifier: MIT OR Apache-2.0
//! Shader node graph.
//!
//! This crate provides the intermediate representation that shader code
//! generation consumes:
//! - Typed input/output pins with default values
//! - Constant, function, operator, variable and vertex-output nodes
//! - Input, output, push-constant and uniform interface blocks
//! - One script per shader stage owning all of the above
//!
//! ## Architecture
//!
//! A [`Script`] owns its nodes in an insertion-ordered map keyed by
//! [`NodeId`]. Pins belong to their node and refer to peers through
//! [`PinId`] handles, so destroying a node only has to sever the edges its
//! pins list.

pub mod value;
pub mod pin;
pub mod node;
pub mod block;
pub mod naming;
pub mod script;

pub use value::{DataType, Value};
pub use pin::{Pin, PinDirection, PinId};
pub use node::{ArithmeticOperator, FunctionKind, Node, NodeId, NodeKind, Variable, VariableKind};
pub use block::{BlockId, BlockMember, InterfaceBlock, PUSH_CONSTANT_BUDGET};
pub use script::{GraphError, Script, ShaderStage};
