//! Task placement constraints and strategies.
//!
//! Constraints are hard rules restricting which container instances are
//! eligible for a task; strategies are soft ranking rules choosing among the
//! eligible instances. Both are modeled as sum types so that rendering is an
//! exhaustive match, and both serialize directly into the shape CloudFormation
//! expects inside `PlacementConstraints` / `PlacementStrategies`.
//!
//! The builder preserves call order and permits duplicates; ECS applies
//! entries in the order they appear.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Instance attribute tokens built into the ECS agent.
///
/// `MemberOf` expressions and `Spread` fields accept arbitrary attribute keys;
/// these constants cover the attributes every container instance reports.
pub struct BuiltInAttributes;

impl BuiltInAttributes {
    pub const AVAILABILITY_ZONE: &'static str = "attribute:ecs.availability-zone";
    pub const INSTANCE_ID: &'static str = "instanceId";
    pub const INSTANCE_TYPE: &'static str = "attribute:ecs.instance-type";
    pub const AMI_ID: &'static str = "attribute:ecs.ami-id";
}

/// The instance resource a binpack strategy consolidates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinPackResource {
    Cpu,
    Memory,
}

impl BinPackResource {
    /// The lowercase field name rendered into the strategy.
    pub fn field_name(self) -> &'static str {
        match self {
            BinPackResource::Cpu => "cpu",
            BinPackResource::Memory => "memory",
        }
    }
}

/// A hard rule restricting which container instances may run the task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementConstraint {
    /// Every task on a different container instance.
    DistinctInstance,
    /// Only instances matching a cluster query language expression. The
    /// expression is emitted verbatim; its syntax is validated by ECS, not here.
    MemberOf(String),
}

impl Serialize for PlacementConstraint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PlacementConstraint::DistinctInstance => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("Type", "distinctInstance")?;
                map.end()
            }
            PlacementConstraint::MemberOf(expression) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("Type", "memberOf")?;
                map.serialize_entry("Expression", expression)?;
                map.end()
            }
        }
    }
}

/// A soft ranking rule choosing among eligible container instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementStrategy {
    /// Place tasks on instances at random.
    Random,
    /// Spread tasks evenly across the values of an instance attribute.
    Spread(String),
    /// Pack tasks onto the fewest instances by CPU or memory headroom.
    BinPack(BinPackResource),
}

impl Serialize for PlacementStrategy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PlacementStrategy::Random => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("Type", "random")?;
                map.end()
            }
            PlacementStrategy::Spread(field) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("Type", "spread")?;
                map.serialize_entry("Field", field)?;
                map.end()
            }
            PlacementStrategy::BinPack(resource) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("Type", "binpack")?;
                map.serialize_entry("Field", resource.field_name())?;
                map.end()
            }
        }
    }
}
