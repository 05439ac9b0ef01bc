// SPDX-License-Identifier: MIT OR Apache-2.0
//! Pin definitions for node inputs/outputs.

use crate::node::NodeId;
use crate::value::{DataType, Value};
use serde::{Deserialize, Serialize};

/// Pin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PinDirection {
    /// Input pin, consumes a value
    In,
    /// Output pin, produces a value
    Out,
}

/// Stable handle to a pin: owning node, direction and position in the
/// node's pin list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PinId {
    /// Owning node
    pub node: NodeId,
    /// Pin direction
    pub direction: PinDirection,
    /// Index into the node's input or output pins
    pub index: usize,
}

impl PinId {
    /// Handle to the `index`-th input pin of `node`
    pub fn input(node: NodeId, index: usize) -> Self {
        Self {
            node,
            direction: PinDirection::In,
            index,
        }
    }

    /// Handle to the `index`-th output pin of `node`
    pub fn output(node: NodeId, index: usize) -> Self {
        Self {
            node,
            direction: PinDirection::Out,
            index,
        }
    }
}

/// A typed connection point on a node
#[derive(Debug, Clone)]
pub struct Pin {
    id: PinId,
    data_type: DataType,
    default_value: Option<Value>,
    /// Upstream output pin (inputs only)
    connection: Option<PinId>,
    /// Downstream input pins (outputs only)
    fan_out: Vec<PinId>,
}

impl Pin {
    pub(crate) fn new(id: PinId, data_type: DataType) -> Self {
        let default_value = match id.direction {
            PinDirection::In => Value::zero(data_type),
            PinDirection::Out => None,
        };
        Self {
            id,
            data_type,
            default_value,
            connection: None,
            fan_out: Vec::new(),
        }
    }

    /// Handle of this pin
    pub fn id(&self) -> PinId {
        self.id
    }

    /// Owning node
    pub fn node(&self) -> NodeId {
        self.id.node
    }

    /// Direction of this pin
    pub fn direction(&self) -> PinDirection {
        self.id.direction
    }

    /// Data type of this pin
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Value used when an input pin is left unconnected
    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// Upstream output pin of an input pin
    pub fn connection(&self) -> Option<PinId> {
        self.connection
    }

    /// Downstream input pins of an output pin
    pub fn connections(&self) -> &[PinId] {
        &self.fan_out
    }

    /// Check if any edge touches this pin
    pub fn is_connected(&self) -> bool {
        self.connection.is_some() || !self.fan_out.is_empty()
    }

    /// Check if this pin references `other` as an edge endpoint
    pub fn references(&self, other: PinId) -> bool {
        self.connection == Some(other) || self.fan_out.contains(&other)
    }

    pub(crate) fn set_default_value(&mut self, value: Value) {
        self.default_value = Some(value);
    }

    pub(crate) fn set_connection(&mut self, upstream: Option<PinId>) {
        self.connection = upstream;
    }

    pub(crate) fn take_connection(&mut self) -> Option<PinId> {
        self.connection.take()
    }

    pub(crate) fn add_fan_out(&mut self, downstream: PinId) {
        if !self.fan_out.contains(&downstream) {
            self.fan_out.push(downstream);
        }
    }

    pub(crate) fn remove_fan_out(&mut self, downstream: PinId) {
        self.fan_out.retain(|p| *p != downstream);
    }

    pub(crate) fn take_fan_out(&mut self) -> Vec<PinId> {
        std::mem::take(&mut self.fan_out)
    }
}
