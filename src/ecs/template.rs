//! The rendered `AWS::ECS::Service` resource record.
//!
//! These types are the write-once output of the service builder: a resource
//! entry in the shape an external provisioning engine consumes. Field names
//! serialize in PascalCase to match the CloudFormation resource schema, and
//! optional sections (`DesiredCount`, `NetworkConfiguration`) are omitted
//! entirely rather than rendered as null.
//!
//! # Output Formats
//!
//! - [`ServiceResource::to_json`] - Pretty-printed JSON
//! - [`ServiceResource::to_file`] - JSON or YAML chosen by file extension

use anyhow::{anyhow, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::ecs::placement::{PlacementConstraint, PlacementStrategy};

/// How the service schedules tasks across the cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchedulingStrategy {
    /// Maintain a desired number of task copies.
    Replica,
    /// Exactly one task per eligible container instance.
    Daemon,
}

/// The infrastructure the service's tasks launch onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LaunchType {
    Ec2,
    Fargate,
}

/// Whether tasks in an `awsvpc` service receive public IP addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AssignPublicIp {
    Disabled,
    Enabled,
}

/// Rolling-deployment bounds on running task count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeploymentConfiguration {
    pub maximum_percent: u32,
    pub minimum_healthy_percent: u32,
}

impl Default for DeploymentConfiguration {
    fn default() -> Self {
        Self {
            maximum_percent: 200,
            minimum_healthy_percent: 50,
        }
    }
}

/// The `awsvpc` networking block of a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AwsvpcConfiguration {
    pub assign_public_ip: AssignPublicIp,
    pub security_groups: Vec<String>,
    pub subnets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkConfiguration {
    pub awsvpc_configuration: AwsvpcConfiguration,
}

/// The property set of an `AWS::ECS::Service` resource.
///
/// Load balancer attachments are outside this construct's scope, so
/// `LoadBalancers` stays a list of open-ended values and renders as `[]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceProperties {
    pub cluster: String,

    pub task_definition: String,

    pub deployment_configuration: DeploymentConfiguration,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_count: Option<u32>,

    pub launch_type: LaunchType,

    pub load_balancers: Vec<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_configuration: Option<NetworkConfiguration>,

    pub placement_constraints: Vec<PlacementConstraint>,

    pub placement_strategies: Vec<PlacementStrategy>,

    pub scheduling_strategy: SchedulingStrategy,
}

/// A complete resource record: type name plus properties.
///
/// Built exactly once by [`crate::ecs::service::EcsService::build`] and
/// immutable from the caller's point of view; it is a snapshot, not a handle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceResource {
    #[serde(rename = "Type")]
    pub resource_type: String,

    pub properties: ServiceProperties,
}

impl ServiceResource {
    /// Render the resource record as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| anyhow!("Failed to serialize JSON: {}", e))
    }

    /// Save the resource record to a JSON or YAML file.
    ///
    /// The output format is determined by the file extension: YAML for `.yaml`
    /// and `.yml`, JSON for everything else.
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        let content = match extension.as_deref() {
            Some("yaml") | Some("yml") => serde_yaml::to_string(self)?,
            _ => serde_json::to_string_pretty(self)?,
        };

        fs::write(path, content)?;
        Ok(())
    }
}
