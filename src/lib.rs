//! ECS Construct - Typed ECS Service Specification Builder
//!
//! This crate compiles high-level Amazon ECS service configuration into a declarative
//! CloudFormation resource record (`AWS::ECS::Service`). It is a pure, synchronous
//! configuration-to-template compiler: you assemble a service from a cluster, a task
//! definition, and placement rules, and the builder validates the combination and
//! produces an immutable resource descriptor for an external provisioning engine.
//!
//! # Core Features
//!
//! - **Cross-field validation**: Daemon scheduling, desired counts, and placement
//!   strategies are checked for mutual compatibility before any template is produced
//! - **Placement modeling**: Constraints and strategies as exhaustively-matchable
//!   sum types rather than loose string constants
//! - **Awsvpc networking**: Automatic security-group allocation and subnet wiring
//!   when the task definition uses the `awsvpc` network mode
//! - **Multi-format output**: Serialize the resource record to JSON or YAML
//!
//! # What this crate does not do
//!
//! It never talks to AWS. Provisioning, reconciliation, and network topology
//! resolution belong to the engine that consumes the rendered template. Cluster,
//! subnet, and security-group identifiers are opaque reference tokens.
//!
//! # Getting Started
//!
//! ```rust
//! use ecs_construct::ecs::cluster::{Cluster, Vpc};
//! use ecs_construct::ecs::service::{EcsService, EcsServiceProps};
//! use ecs_construct::ecs::task_definition::{ContainerImage, TaskDefinition};
//!
//! let vpc = Vpc::new("MyVpc");
//! let cluster = Cluster::new("EcsCluster", vpc);
//! let mut task_definition = TaskDefinition::new("EcsTaskDef");
//! task_definition.add_container(
//!     "web",
//!     ContainerImage::from_registry("amazon/amazon-ecs-sample"),
//!     512,
//! );
//!
//! let service = EcsService::new(
//!     "EcsService",
//!     EcsServiceProps {
//!         cluster,
//!         task_definition,
//!         desired_count: None,
//!         daemon: false,
//!     },
//! )?;
//! let resource = service.build()?;
//! println!("{}", resource.to_json()?);
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(clippy::all, rust_2018_idioms)]

pub mod ecs;
