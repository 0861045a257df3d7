//! Task definition and container models.
//!
//! A task definition is the template describing the containers a service runs
//! together. The service builder consumes two facts from it: the Docker network
//! mode, which decides whether a `NetworkConfiguration` block is rendered, and
//! the container count, which must be non-zero before a service can reference
//! the definition.

/// Docker networking mode for the tasks of a task definition.
///
/// `AwsVpc` gives each task its own elastic network interface; services built
/// from such a definition receive a dedicated security group and subnet list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NetworkMode {
    /// Docker's default bridge network on the container instance.
    #[default]
    Bridge,
    /// A dedicated elastic network interface per task.
    AwsVpc,
    /// The container instance's own network stack.
    Host,
    /// No external connectivity.
    None,
}

/// A container image reference.
///
/// Only the repository string is modeled; registry authentication and digest
/// resolution happen in the provisioning engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerImage {
    image_name: String,
}

impl ContainerImage {
    /// Reference an image by repository name, e.g. a Docker Hub
    /// `amazon/amazon-ecs-sample` or a full registry path.
    pub fn from_registry(image_name: &str) -> Self {
        Self {
            image_name: image_name.to_string(),
        }
    }

    pub fn image_name(&self) -> &str {
        &self.image_name
    }
}

/// One container attached to a task definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerDefinition {
    pub name: String,
    pub image: ContainerImage,
    pub memory_limit_mib: u32,
}

/// A template describing one or more containers to run together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDefinition {
    family: String,
    network_mode: NetworkMode,
    containers: Vec<ContainerDefinition>,
}

impl TaskDefinition {
    /// Create a task definition with the default bridge network mode.
    pub fn new(family: &str) -> Self {
        Self::with_network_mode(family, NetworkMode::default())
    }

    pub fn with_network_mode(family: &str, network_mode: NetworkMode) -> Self {
        Self {
            family: family.to_string(),
            network_mode,
            containers: Vec::new(),
        }
    }

    /// Attach a container to this task definition.
    ///
    /// At least one container must be attached before the definition can back
    /// a service.
    pub fn add_container(&mut self, name: &str, image: ContainerImage, memory_limit_mib: u32) {
        self.containers.push(ContainerDefinition {
            name: name.to_string(),
            image,
            memory_limit_mib,
        });
    }

    /// The reference token emitted into the `TaskDefinition` property.
    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn network_mode(&self) -> NetworkMode {
        self.network_mode
    }

    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    pub fn containers(&self) -> &[ContainerDefinition] {
        &self.containers
    }
}
