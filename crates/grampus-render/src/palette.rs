use grampus_core::Category;
#[cfg(test)]
use grampus_core::Provider;

/// Shape + fill selected by a node's category (the icon analogue).
#[derive(Debug, Clone, Copy)]
pub(crate) struct NodeVisual {
    pub shape: &'static str,
    pub fill: &'static str,
}

/// Cluster fills cycle through these by nesting depth, matching the upstream
/// diagram tooling's boundary palette.
pub(crate) const CLUSTER_FILLS: [&str; 4] = ["#E5F5FD", "#EBF3E7", "#ECE8F6", "#FDF7E3"];

pub(crate) const CLUSTER_BORDER: &str = "#AEB6BE";

pub(crate) fn node_visual(category: Category) -> NodeVisual {
    // Fills stay light so the shared dark font color remains readable.
    let (shape, fill) = match category {
        Category::Users => ("ellipse", "#ECEFF1"),
        Category::Eks | Category::Ec2 => ("box3d", "#FFD9A8"),
        Category::Rds => ("cylinder", "#BBDEFB"),
        Category::Alb | Category::Elb => ("box", "#E1D5F7"),
        Category::InternetGateway | Category::NatGateway => ("diamond", "#E1D5F7"),
        Category::Vpc | Category::PublicSubnet | Category::PrivateSubnet => ("folder", "#E1D5F7"),
        Category::IamRole | Category::Oidc | Category::SecurityGroup => ("octagon", "#F8C8C8"),
        Category::Ecr => ("component", "#FFD9A8"),
        Category::Pod => ("box", "#CFE2FF"),
        Category::Deployment => ("tab", "#CFE2FF"),
        Category::KubeService => ("ellipse", "#CFE2FF"),
        Category::Ingress => ("house", "#CFE2FF"),
        Category::KubeNode => ("box3d", "#CFE2FF"),
        Category::HorizontalPodAutoscaler => ("component", "#CFE2FF"),
        Category::ConfigMap | Category::KubeSecret => ("note", "#CFE2FF"),
        Category::Job => ("cds", "#CFE2FF"),
        Category::Github => ("box", "#E5E7E9"),
        Category::GithubActions => ("cds", "#D5F5E3"),
        Category::Docker => ("box", "#D6EAF8"),
        Category::Terraform => ("box", "#E8DAEF"),
        Category::Prometheus | Category::Grafana => ("box", "#FDEBD0"),
        Category::React => ("box", "#D1F2EB"),
        Category::NodeJs => ("box", "#D4EFDF"),
        Category::TypeScript => ("box", "#D6EAF8"),
        Category::Sql => ("cylinder", "#EBF5FB"),
        Category::Blank => ("box", "white"),
    };
    NodeVisual { shape, fill }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn databases_are_cylinders() {
        assert_eq!(node_visual(Category::Rds).shape, "cylinder");
        assert_eq!(node_visual(Category::Sql).shape, "cylinder");
    }

    #[test]
    fn every_provider_family_has_a_distinct_look() {
        let aws = node_visual(Category::Eks).fill;
        let k8s = node_visual(Category::Pod).fill;
        let generic = node_visual(Category::Blank).fill;
        assert_ne!(aws, k8s);
        assert_ne!(k8s, generic);
        // Sanity-check the provider grouping stays aligned with the palette.
        assert_eq!(Category::Eks.provider(), Provider::Aws);
    }
}
