//! The ECS service specification builder.
//!
//! [`EcsService`] is a two-phase object. Construction validates the supplied
//! configuration and computes derived fields (scheduling strategy, desired
//! count, network configuration). Placement calls then mutate the draft in
//! place, and [`EcsService::build`] finalizes it into an immutable
//! [`ServiceResource`]. Nothing here performs I/O; every operation either
//! returns or fails with [`ConfigError`].
//!
//! # Validation
//!
//! Cross-field rules live in a flat list of independent validators run over
//! the configuration at construction and again at finalization:
//!
//! - `daemon` and `desired_count` are mutually exclusive
//! - the task definition must have at least one container attached
//!
//! Placement strategies are additionally rejected call-by-call on daemon
//! services, since a daemon runs exactly one task per eligible instance and
//! has nothing for a strategy to rank.

use thiserror::Error;
use tracing::debug;

use crate::ecs::cluster::Cluster;
use crate::ecs::placement::{BinPackResource, PlacementConstraint, PlacementStrategy};
use crate::ecs::task_definition::{NetworkMode, TaskDefinition};
use crate::ecs::template::{
    AssignPublicIp, AwsvpcConfiguration, DeploymentConfiguration, LaunchType,
    NetworkConfiguration, SchedulingStrategy, ServiceProperties, ServiceResource,
};

/// A static configuration error, raised at the violating call.
///
/// These are never transient: the same configuration always fails the same
/// way, so there is nothing to retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("daemon services do not take a desired count; one task runs per eligible instance")]
    DaemonWithDesiredCount,

    #[error("task definition `{0}` has no containers; attach at least one before creating a service")]
    NoContainers(String),

    #[error("daemon services do not take placement strategies")]
    DaemonPlacementStrategy,
}

/// Configuration for an [`EcsService`].
#[derive(Debug, Clone)]
pub struct EcsServiceProps {
    pub cluster: Cluster,
    pub task_definition: TaskDefinition,
    /// Number of task copies to maintain. Defaults to 1; must stay unset when
    /// `daemon` is true.
    pub desired_count: Option<u32>,
    /// Run one task on every eligible container instance instead of
    /// maintaining a count.
    pub daemon: bool,
}

type Validator = fn(&EcsServiceProps) -> Result<(), ConfigError>;

/// Cross-field rules checked at construction and again at finalization.
const VALIDATORS: &[Validator] = &[daemon_excludes_desired_count, task_definition_has_containers];

fn daemon_excludes_desired_count(props: &EcsServiceProps) -> Result<(), ConfigError> {
    if props.daemon && props.desired_count.is_some() {
        return Err(ConfigError::DaemonWithDesiredCount);
    }
    Ok(())
}

fn task_definition_has_containers(props: &EcsServiceProps) -> Result<(), ConfigError> {
    if props.task_definition.container_count() == 0 {
        return Err(ConfigError::NoContainers(
            props.task_definition.family().to_string(),
        ));
    }
    Ok(())
}

fn validate(props: &EcsServiceProps) -> Result<(), ConfigError> {
    for validator in VALIDATORS {
        validator(props)?;
    }
    Ok(())
}

/// A declarative request to run and maintain copies of a task on a cluster.
///
/// The draft is exclusively owned by its caller; placement calls append in
/// call order and duplicates are preserved. Call [`EcsService::build`] to
/// finalize.
#[derive(Debug, Clone)]
pub struct EcsService {
    name: String,
    props: EcsServiceProps,
    scheduling_strategy: SchedulingStrategy,
    desired_count: Option<u32>,
    network_configuration: Option<NetworkConfiguration>,
    placement_constraints: Vec<PlacementConstraint>,
    placement_strategies: Vec<PlacementStrategy>,
}

impl EcsService {
    /// Validate the configuration and start a service draft.
    ///
    /// Daemon services get the `DAEMON` scheduling strategy and no desired
    /// count; replica services default to a desired count of 1. When the task
    /// definition uses the `awsvpc` network mode, a dedicated security group
    /// is allocated from the cluster's VPC and the network configuration is
    /// populated with it and the VPC's private subnets, public IP assignment
    /// disabled.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `daemon` and `desired_count` are both set,
    /// or if the task definition has no containers attached.
    pub fn new(name: &str, props: EcsServiceProps) -> Result<Self, ConfigError> {
        validate(&props)?;

        let scheduling_strategy = if props.daemon {
            SchedulingStrategy::Daemon
        } else {
            SchedulingStrategy::Replica
        };
        let desired_count = if props.daemon {
            None
        } else {
            Some(props.desired_count.unwrap_or(1))
        };
        debug!(
            "Service {} scheduling strategy {:?}, desired count {:?}",
            name, scheduling_strategy, desired_count
        );

        let network_configuration = match props.task_definition.network_mode() {
            NetworkMode::AwsVpc => {
                let vpc = props.cluster.vpc();
                Some(NetworkConfiguration {
                    awsvpc_configuration: AwsvpcConfiguration {
                        assign_public_ip: AssignPublicIp::Disabled,
                        security_groups: vec![vpc.allocate_security_group(name)],
                        subnets: vpc.private_subnets().to_vec(),
                    },
                })
            }
            _ => None,
        };

        Ok(Self {
            name: name.to_string(),
            props,
            scheduling_strategy,
            desired_count,
            network_configuration,
            placement_constraints: Vec::new(),
            placement_strategies: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scheduling_strategy(&self) -> SchedulingStrategy {
        self.scheduling_strategy
    }

    /// Constrain every task to a different container instance.
    pub fn place_on_distinct_instances(&mut self) {
        self.placement_constraints
            .push(PlacementConstraint::DistinctInstance);
    }

    /// Constrain tasks to instances matching a cluster query expression.
    ///
    /// The expression is carried verbatim; ECS validates the query language.
    pub fn place_on_member_of(&mut self, expression: &str) {
        self.placement_constraints
            .push(PlacementConstraint::MemberOf(expression.to_string()));
    }

    /// Place tasks on eligible instances at random.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DaemonPlacementStrategy`] on a daemon service.
    pub fn place_randomly(&mut self) -> Result<(), ConfigError> {
        self.push_strategy(PlacementStrategy::Random)
    }

    /// Spread tasks evenly across the values of an instance attribute, e.g.
    /// [`crate::ecs::placement::BuiltInAttributes::AVAILABILITY_ZONE`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DaemonPlacementStrategy`] on a daemon service.
    pub fn place_spread_across(&mut self, field: &str) -> Result<(), ConfigError> {
        self.push_strategy(PlacementStrategy::Spread(field.to_string()))
    }

    /// Pack tasks onto the fewest instances by the given resource.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DaemonPlacementStrategy`] on a daemon service.
    pub fn place_packed_by(&mut self, resource: BinPackResource) -> Result<(), ConfigError> {
        self.push_strategy(PlacementStrategy::BinPack(resource))
    }

    fn push_strategy(&mut self, strategy: PlacementStrategy) -> Result<(), ConfigError> {
        if self.props.daemon {
            return Err(ConfigError::DaemonPlacementStrategy);
        }
        self.placement_strategies.push(strategy);
        Ok(())
    }

    /// Finalize the draft into an immutable resource record.
    ///
    /// Constraints and strategies are rendered in call order.
    /// `NetworkConfiguration` appears only for `awsvpc` task definitions and
    /// `DesiredCount` only for replica services.
    ///
    /// # Errors
    ///
    /// Re-runs the configuration validators; a draft that passed construction
    /// always passes here.
    pub fn build(self) -> Result<ServiceResource, ConfigError> {
        validate(&self.props)?;
        debug!(
            "Building AWS::ECS::Service {} with {} constraints, {} strategies",
            self.name,
            self.placement_constraints.len(),
            self.placement_strategies.len()
        );

        Ok(ServiceResource {
            resource_type: "AWS::ECS::Service".to_string(),
            properties: ServiceProperties {
                cluster: self.props.cluster.name().to_string(),
                task_definition: self.props.task_definition.family().to_string(),
                deployment_configuration: DeploymentConfiguration::default(),
                desired_count: self.desired_count,
                launch_type: LaunchType::Ec2,
                load_balancers: Vec::new(),
                network_configuration: self.network_configuration,
                placement_constraints: self.placement_constraints,
                placement_strategies: self.placement_strategies,
                scheduling_strategy: self.scheduling_strategy,
            },
        })
    }
}
