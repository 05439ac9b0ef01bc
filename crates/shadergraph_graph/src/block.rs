// SPDX-License-Identifier: MIT OR Apache-2.0
//! Interface blocks: the ordered variables crossing a stage boundary.

use crate::node::NodeId;
use crate::value::DataType;
use serde::{Deserialize, Serialize};

/// Byte budget of the push-constant block
pub const PUSH_CONSTANT_BUDGET: u32 = 128;

/// Identifies one of a script's interface blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockId {
    /// Stage inputs
    Input,
    /// Stage outputs
    Output,
    /// Push constants
    PushConstant,
    /// Uniform block, correlated across stages by id
    Uniform(u32),
}

/// A member variable of an interface block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMember {
    /// Member name
    pub name: String,
    /// Member data type
    pub data_type: DataType,
    /// Variable node backing this member
    pub node: NodeId,
    /// Byte offset (push constants only)
    pub offset: Option<u32>,
}

/// Ordered collection of members; the order defines locations and offsets
#[derive(Debug, Clone)]
pub struct InterfaceBlock {
    id: BlockId,
    members: Vec<BlockMember>,
}

impl InterfaceBlock {
    pub(crate) fn new(id: BlockId) -> Self {
        Self {
            id,
            members: Vec::new(),
        }
    }

    /// Block identifier
    pub fn id(&self) -> BlockId {
        self.id
    }

    /// Uniform id, `None` for input/output/push-constant blocks
    pub fn uniform_id(&self) -> Option<u32> {
        match self.id {
            BlockId::Uniform(id) => Some(id),
            _ => None,
        }
    }

    /// Members in declaration order
    pub fn members(&self) -> &[BlockMember] {
        &self.members
    }

    /// Get a member by index
    pub fn member(&self, index: usize) -> Option<&BlockMember> {
        self.members.get(index)
    }

    /// Find a member by name
    pub fn member_by_name(&self, name: &str) -> Option<&BlockMember> {
        self.members.iter().find(|m| m.name == name)
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the block has no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Check if the block has a member backed by `node`
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.members.iter().any(|m| m.node == node)
    }

    /// Used bytes, for push constants
    pub fn size_in_bytes(&self) -> u32 {
        self.members
            .iter()
            .filter_map(|m| Some(m.offset? + m.data_type.std430_layout()?.0))
            .max()
            .unwrap_or(0)
    }

    /// Structural compatibility with the matching block of another stage:
    /// same member count and same data types in declaration order.
    pub fn check_compatibility(&self, other: &InterfaceBlock) -> bool {
        self.members.len() == other.members.len()
            && self
                .members
                .iter()
                .zip(&other.members)
                .all(|(a, b)| a.data_type == b.data_type)
    }

    /// Offset the next member of `data_type` would get, if it fits the
    /// push-constant budget
    pub(crate) fn next_push_constant_offset(&self, data_type: DataType) -> Option<u32> {
        let (size, align) = data_type.std430_layout()?;
        let offset = self.size_in_bytes().div_ceil(align) * align;
        (offset + size <= PUSH_CONSTANT_BUDGET).then_some(offset)
    }

    pub(crate) fn push(&mut self, member: BlockMember) {
        self.members.push(member);
    }
}
