//! The category catalog.
//!
//! A [`Category`] is the tag a script attaches to each node to say what kind
//! of thing it illustrates; the renderer maps it to a shape and fill color
//! (the icon analogue). The catalog is closed and covers the resources the
//! RouteClouds diagrams draw: AWS primitives, Kubernetes objects, delivery
//! tooling, and the application stack.

/// Provider family a category belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Aws,
    Kubernetes,
    Tooling,
    Programming,
    Generic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    // AWS
    Users,
    Eks,
    Ec2,
    Rds,
    Alb,
    Elb,
    InternetGateway,
    NatGateway,
    Vpc,
    PublicSubnet,
    PrivateSubnet,
    IamRole,
    Oidc,
    Ecr,
    SecurityGroup,
    // Kubernetes
    Pod,
    Deployment,
    KubeService,
    Ingress,
    KubeNode,
    HorizontalPodAutoscaler,
    ConfigMap,
    KubeSecret,
    Job,
    // Delivery tooling
    Github,
    GithubActions,
    Docker,
    Terraform,
    Prometheus,
    Grafana,
    // Application stack
    React,
    NodeJs,
    TypeScript,
    Sql,
    // Anything without a dedicated icon
    Blank,
}

impl Category {
    pub fn provider(self) -> Provider {
        match self {
            Category::Users
            | Category::Eks
            | Category::Ec2
            | Category::Rds
            | Category::Alb
            | Category::Elb
            | Category::InternetGateway
            | Category::NatGateway
            | Category::Vpc
            | Category::PublicSubnet
            | Category::PrivateSubnet
            | Category::IamRole
            | Category::Oidc
            | Category::Ecr
            | Category::SecurityGroup => Provider::Aws,
            Category::Pod
            | Category::Deployment
            | Category::KubeService
            | Category::Ingress
            | Category::KubeNode
            | Category::HorizontalPodAutoscaler
            | Category::ConfigMap
            | Category::KubeSecret
            | Category::Job => Provider::Kubernetes,
            Category::Github
            | Category::GithubActions
            | Category::Docker
            | Category::Terraform
            | Category::Prometheus
            | Category::Grafana => Provider::Tooling,
            Category::React | Category::NodeJs | Category::TypeScript | Category::Sql => {
                Provider::Programming
            }
            Category::Blank => Provider::Generic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_group_by_provider() {
        assert_eq!(Category::Eks.provider(), Provider::Aws);
        assert_eq!(Category::Pod.provider(), Provider::Kubernetes);
        assert_eq!(Category::Terraform.provider(), Provider::Tooling);
        assert_eq!(Category::React.provider(), Provider::Programming);
        assert_eq!(Category::Blank.provider(), Provider::Generic);
    }
}
