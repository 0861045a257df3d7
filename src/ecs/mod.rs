//! Core modules for the ECS service construct.
//!
//! This module contains the data models and the builder that translate service
//! configuration into a CloudFormation resource record.
//!
//! # Module Organization
//!
//! ## Collaborators
//! - [`cluster`] - Cluster and VPC reference models (subnets, security-group allocation)
//! - [`task_definition`] - Task definitions, container definitions, and network modes
//!
//! ## Service Specification
//! - [`placement`] - Placement constraints, strategies, and built-in attribute tokens
//! - [`service`] - The [`service::EcsService`] builder and its validation rules
//! - [`template`] - The rendered `AWS::ECS::Service` resource record
//!
//! # Architecture
//!
//! The builder follows a two-phase pattern: a mutable draft assembled through
//! [`service::EcsService`], finalized exactly once into an immutable
//! [`template::ServiceResource`] by [`service::EcsService::build`].

pub mod cluster;
pub mod placement;
pub mod service;
pub mod task_definition;
pub mod template;
