//! Cluster and VPC reference models.
//!
//! These are deliberately thin: the construct only needs enough of the network
//! collaborator to wire an `awsvpc` service into subnets and a security group.
//! Every identifier here is an opaque reference token resolved later by the
//! provisioning engine, never an actual cloud resource.

use tracing::debug;

/// A VPC reference supplying private subnets and per-service security groups.
///
/// The default constructor models the common three-availability-zone layout,
/// deriving one private subnet token per zone from the VPC name. Use
/// [`Vpc::with_subnets`] when the caller already knows the exact subnet
/// references to place tasks into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vpc {
    name: String,
    private_subnets: Vec<String>,
}

impl Vpc {
    /// Create a VPC reference with three derived private subnet tokens.
    pub fn new(name: &str) -> Self {
        let private_subnets = (1..=3)
            .map(|az| format!("{name}PrivateSubnet{az}"))
            .collect();
        Self {
            name: name.to_string(),
            private_subnets,
        }
    }

    /// Create a VPC reference with caller-supplied private subnet tokens.
    pub fn with_subnets(name: &str, private_subnets: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            private_subnets,
        }
    }

    /// The VPC name used to derive dependent reference tokens.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Private subnet reference tokens, in availability-zone order.
    pub fn private_subnets(&self) -> &[String] {
        &self.private_subnets
    }

    /// Allocate a dedicated security group for the named scope.
    ///
    /// Provisioning is out of scope for this crate, so allocation means minting
    /// a deterministic reference token tied to the requesting scope. Each
    /// `awsvpc` service gets its own group so that ingress rules added later
    /// apply to exactly one service.
    pub fn allocate_security_group(&self, scope: &str) -> String {
        let group = format!("{scope}SecurityGroup");
        debug!("Allocated security group {} in VPC {}", group, self.name);
        group
    }
}

/// A reference to the ECS cluster a service runs on.
///
/// The cluster carries its [`Vpc`] so the service builder can reach the
/// network collaborator without any global lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    name: String,
    vpc: Vpc,
}

impl Cluster {
    pub fn new(name: &str, vpc: Vpc) -> Self {
        Self {
            name: name.to_string(),
            vpc,
        }
    }

    /// The reference token emitted into the `Cluster` property.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vpc(&self) -> &Vpc {
        &self.vpc
    }
}
