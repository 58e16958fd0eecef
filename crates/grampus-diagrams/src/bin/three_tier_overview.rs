//! End-to-end view of the 3-tier EKS architecture: CI/CD via GitHub OIDC,
//! the VPC and subnet layout, the Kubernetes namespace, and the optional
//! monitoring stack.

use grampus_core::{
    Category, DiagramOptions, DiagramSession, EdgeDir, EdgeStyle, LineStyle, Theme,
};
use grampus_diagrams::{ScriptResult, finish};

fn main() {
    finish(run());
}

fn uses() -> EdgeStyle {
    EdgeStyle::labeled("uses")
        .with_color("grey")
        .with_line(LineStyle::Dashed)
        .with_dir(EdgeDir::None)
}

fn run() -> ScriptResult {
    let mut diag = DiagramSession::open(
        "AWS 3-Tier EKS Architecture",
        DiagramOptions::new()
            .with_filename("aws_3_tier_eks_architecture")
            .with_theme(Theme {
                title_font_size: 12,
                background: "transparent".to_string(),
                ..Theme::default()
            }),
    )?;

    let developer = diag.node("developer", Category::Github, "Developer")?;

    diag.begin_cluster("GitHub");
    let github_repo = diag.node("github-repo", Category::Github, "3-Tier App Repo")?;
    let github_actions = diag.node("github-actions", Category::GithubActions, "CI/CD Pipeline")?;
    diag.end_cluster()?;

    diag.begin_cluster("AWS Cloud");
    let oidc_provider = diag.node("oidc-provider", Category::Oidc, "GitHub OIDC Provider")?;
    let ci_cd_role = diag.node("ci-cd-role", Category::IamRole, "GitHub Actions Role (IRSA)")?;

    diag.begin_cluster("VPC");
    let vpc = diag.node("vpc", Category::Vpc, "VPC")?;
    let igw = diag.node("igw", Category::InternetGateway, "Internet Gateway")?;

    diag.begin_cluster("Public Subnets");
    let public_subnet_1 = diag.node("public-subnet-1", Category::PublicSubnet, "Public Subnet 1")?;
    let public_subnet_2 = diag.node("public-subnet-2", Category::PublicSubnet, "Public Subnet 2")?;
    let alb = diag.node("alb", Category::Elb, "ALB")?;
    diag.end_cluster()?;

    diag.begin_cluster("Private Subnets");
    let private_subnet_1 = diag.node(
        "private-subnet-1",
        Category::PrivateSubnet,
        "Private Subnet 1",
    )?;
    let private_subnet_2 = diag.node(
        "private-subnet-2",
        Category::PrivateSubnet,
        "Private Subnet 2",
    )?;
    let nat_gateway = diag.node("nat-gateway", Category::NatGateway, "NAT Gateway")?;

    diag.begin_cluster("EKS Cluster");
    let eks_cluster = diag.node("eks-cluster", Category::Eks, "EKS Control Plane")?;

    diag.begin_cluster("EKS Managed Node Group");
    diag.node("node-1", Category::KubeNode, "Node 1")?;
    diag.node("node-2", Category::KubeNode, "Node 2")?;
    diag.end_cluster()?;

    diag.begin_cluster("Kubernetes Resources (3-tier-app-eks Namespace)");
    let ingress = diag.node("ingress", Category::Ingress, "Ingress")?;

    diag.begin_cluster("Frontend Tier");
    let frontend_svc = diag.node("frontend-svc", Category::KubeService, "frontend-svc")?;
    let frontend_deploy = diag.node("frontend-deploy", Category::Deployment, "frontend-deploy")?;
    diag.end_cluster()?;

    diag.begin_cluster("Backend Tier");
    let backend_svc = diag.node("backend-svc", Category::KubeService, "backend-svc")?;
    let backend_deploy = diag.node("backend-deploy", Category::Deployment, "backend-deploy")?;
    let hpa = diag.node("hpa", Category::HorizontalPodAutoscaler, "HPA")?;
    diag.end_cluster()?;

    diag.begin_cluster("Data & Config");
    let db_service = diag.node("db-service", Category::KubeService, "db-external-svc")?;
    let secrets = diag.node("secrets", Category::KubeSecret, "DB Secrets")?;
    let configmap = diag.node("configmap", Category::ConfigMap, "App Config")?;
    let migration_job = diag.node("migration-job", Category::Job, "Migration Job")?;
    diag.end_cluster()?;
    diag.end_cluster()?; // namespace
    diag.end_cluster()?; // EKS cluster

    diag.begin_cluster("Database Tier");
    let rds_instance = diag.node("rds", Category::Rds, "PostgreSQL RDS")?;
    diag.end_cluster()?;
    diag.end_cluster()?; // private subnets
    diag.end_cluster()?; // VPC

    let ecr = diag.node("ecr", Category::Ecr, "ECR Image Registry")?;

    diag.begin_cluster("Monitoring Namespace");
    let monitoring_ingress = diag.node("monitoring-ingress", Category::Ingress, "Monitoring Ingress")?;
    let prometheus = diag.node("prometheus", Category::Prometheus, "Prometheus")?;
    let grafana = diag.node("grafana", Category::Grafana, "Grafana")?;
    diag.end_cluster()?;
    diag.end_cluster()?; // AWS cloud

    // CI/CD flow.
    diag.edge(&developer, &github_repo, EdgeStyle::labeled("push/pr"))?;
    diag.edge(&github_repo, &github_actions, EdgeStyle::labeled("trigger"))?;
    diag.edge(
        &github_actions,
        &oidc_provider,
        EdgeStyle::labeled("assume role via OIDC"),
    )?;
    diag.edge(&oidc_provider, &ci_cd_role, EdgeStyle::new())?;
    diag.edge(&ci_cd_role, &eks_cluster, EdgeStyle::labeled("grants permission"))?;
    diag.edge(&ci_cd_role, &ecr, EdgeStyle::labeled("grants permission"))?;
    diag.edge(&github_actions, &ecr, EdgeStyle::labeled("build & push image"))?;
    diag.edge(&github_actions, &eks_cluster, EdgeStyle::labeled("kubectl apply"))?;

    // Traffic flow.
    diag.edge(&igw, &alb, EdgeStyle::new())?;
    diag.edge(&alb, &ingress, EdgeStyle::new())?;
    diag.edge(&ingress, &frontend_svc, EdgeStyle::labeled("/"))?;
    diag.edge(&frontend_svc, &frontend_deploy, EdgeStyle::new())?;
    diag.edge(&ingress, &backend_svc, EdgeStyle::labeled("/api"))?;
    diag.edge(&backend_svc, &backend_deploy, EdgeStyle::new())?;
    diag.edge(&frontend_deploy, &backend_svc, EdgeStyle::labeled("calls API"))?;
    diag.edge(&backend_deploy, &db_service, EdgeStyle::labeled("connects to"))?;
    diag.edge(&db_service, &rds_instance, EdgeStyle::new())?;

    // Kubernetes resource relations.
    diag.edge(
        &backend_deploy,
        &hpa,
        EdgeStyle::new().with_color("darkgreen").with_dir(EdgeDir::Back),
    )?;
    diag.edge(&backend_deploy, &secrets, uses())?;
    diag.edge(&backend_deploy, &configmap, uses())?;
    diag.edge(&migration_job, &secrets, uses())?;
    diag.edge(&migration_job, &configmap, uses())?;
    diag.edge(&migration_job, &rds_instance, EdgeStyle::labeled("migrates schema"))?;

    // Network relations.
    diag.connect([&vpc], [&public_subnet_1, &public_subnet_2], EdgeStyle::new())?;
    diag.connect([&vpc], [&private_subnet_1, &private_subnet_2], EdgeStyle::new())?;
    diag.connect(
        [&public_subnet_1, &public_subnet_2],
        [&nat_gateway],
        EdgeStyle::new(),
    )?;
    diag.connect(
        [&nat_gateway],
        [&private_subnet_1, &private_subnet_2],
        EdgeStyle::new(),
    )?;

    // Monitoring flow.
    diag.edge(&alb, &monitoring_ingress, EdgeStyle::new())?;
    diag.edge(&monitoring_ingress, &prometheus, EdgeStyle::new())?;
    diag.edge(&monitoring_ingress, &grafana, EdgeStyle::new())?;
    diag.edge(&prometheus, &backend_svc, EdgeStyle::labeled("scrapes"))?;
    diag.edge(&grafana, &prometheus, EdgeStyle::labeled("queries"))?;

    let path = grampus_render::render(diag)?;
    Ok(vec![path])
}
