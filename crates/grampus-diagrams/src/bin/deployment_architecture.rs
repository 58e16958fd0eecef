//! Complete deployment architecture of the RouteClouds 3-tier e-commerce
//! application on AWS EKS: traffic flow from the internet down to the
//! database, plus the CI/CD image path.

use grampus_core::{Category, DiagramSession, Direction, EdgeStyle};
use grampus_diagrams::{ScriptResult, finish, house_options};

fn main() {
    finish(run());
}

fn run() -> ScriptResult {
    let mut diag = DiagramSession::open(
        "RouteClouds E-Commerce - Complete Deployment Architecture",
        house_options(Direction::TopBottom).with_filename("routeclouds_deployment_architecture"),
    )?;

    let users = diag.node("users", Category::Users, "Internet Users")?;

    diag.begin_cluster("CI/CD Pipeline");
    let github = diag.node("github", Category::GithubActions, "GitHub Actions")?;
    let docker_hub = diag.node("docker-hub", Category::Docker, "Docker Hub\nawsfreetier30")?;
    diag.end_cluster()?;

    diag.begin_cluster("AWS Cloud (us-east-1)");
    diag.begin_cluster("VPC: vpc-0a3065aa3dd1bd913");
    let igw = diag.node("igw", Category::InternetGateway, "Internet Gateway")?;

    diag.begin_cluster("Public Subnets");
    let alb = diag.node("alb", Category::Alb, "Application Load Balancer")?;
    diag.node("nat", Category::NatGateway, "NAT Gateway")?;
    diag.end_cluster()?;

    diag.begin_cluster("Private Subnets");
    diag.begin_cluster("EKS Cluster: routeclouds-prod-cluster");
    let eks_control = diag.node("eks-control", Category::Eks, "EKS Control Plane")?;

    diag.begin_cluster("Managed Node Group");
    let node1 = diag.node("node-1", Category::Ec2, "Worker Node 1\nt3.medium")?;
    let node2 = diag.node("node-2", Category::Ec2, "Worker Node 2\nt3.medium")?;
    diag.end_cluster()?;

    diag.begin_cluster("Namespace: routeclouds-ns");
    diag.begin_cluster("Frontend Tier");
    let frontend_svc = diag.node(
        "frontend-svc",
        Category::KubeService,
        "Frontend Service\nClusterIP",
    )?;
    let frontend_deploy = diag.node(
        "frontend-deploy",
        Category::Deployment,
        "Frontend Deployment",
    )?;
    let frontend_pod1 = diag.node(
        "frontend-pod-1",
        Category::Pod,
        "Frontend Pod 1\nReact + Vite\nPort: 80",
    )?;
    let frontend_pod2 = diag.node(
        "frontend-pod-2",
        Category::Pod,
        "Frontend Pod 2\nReact + Vite\nPort: 80",
    )?;
    diag.end_cluster()?;

    diag.begin_cluster("Backend Tier");
    let backend_svc = diag.node(
        "backend-svc",
        Category::KubeService,
        "Backend Service\nClusterIP",
    )?;
    let backend_deploy = diag.node("backend-deploy", Category::Deployment, "Backend Deployment")?;
    let backend_pod1 = diag.node(
        "backend-pod-1",
        Category::Pod,
        "Backend Pod 1\nNode.js + Express\nPort: 8000",
    )?;
    let backend_pod2 = diag.node(
        "backend-pod-2",
        Category::Pod,
        "Backend Pod 2\nNode.js + Express\nPort: 8000",
    )?;
    diag.end_cluster()?;

    let ingress = diag.node("ingress", Category::Ingress, "AWS Load Balancer\nController")?;
    diag.end_cluster()?; // namespace
    diag.end_cluster()?; // EKS cluster

    diag.begin_cluster("Database Subnet");
    let rds = diag.node(
        "rds",
        Category::Rds,
        "RDS PostgreSQL\nrouteclouds_ecommerce_db\nPort: 5432",
    )?;
    diag.end_cluster()?;

    diag.end_cluster()?; // private subnets
    diag.end_cluster()?; // VPC
    diag.end_cluster()?; // AWS cloud

    // External traffic down to the services.
    diag.edge(&users, &igw, EdgeStyle::labeled("HTTPS/HTTP\nPort: 80, 443"))?;
    diag.edge(&igw, &alb, EdgeStyle::labeled("Load Balance"))?;
    diag.edge(&alb, &ingress, EdgeStyle::labeled("Ingress Rules"))?;
    diag.edge(&ingress, &frontend_svc, EdgeStyle::labeled("/ path\nPort: 80"))?;
    diag.edge(
        &ingress,
        &backend_svc,
        EdgeStyle::labeled("/api path\nPort: 8000"),
    )?;

    // Services through deployments to pods.
    diag.edge(&frontend_svc, &frontend_deploy, EdgeStyle::new())?;
    diag.edge(&backend_svc, &backend_deploy, EdgeStyle::new())?;
    diag.connect(
        [&frontend_deploy],
        [&frontend_pod1, &frontend_pod2],
        EdgeStyle::new(),
    )?;
    diag.connect(
        [&backend_deploy],
        [&backend_pod1, &backend_pod2],
        EdgeStyle::new(),
    )?;

    // Backend to database.
    diag.edge(&backend_pod1, &rds, EdgeStyle::labeled("SQL Queries\nPort: 5432"))?;
    diag.edge(&backend_pod2, &rds, EdgeStyle::labeled("SQL Queries\nPort: 5432"))?;

    // Node management and pod scheduling.
    diag.connect([&eks_control], [&node1, &node2], EdgeStyle::labeled("Manage"))?;
    diag.connect(
        [&frontend_pod1, &frontend_pod2, &backend_pod1, &backend_pod2],
        [&node1, &node2],
        EdgeStyle::new(),
    )?;

    // CI/CD image path.
    diag.edge(&github, &docker_hub, EdgeStyle::labeled("Build & Push\nImages"))?;
    diag.connect(
        [&docker_hub],
        [&frontend_deploy, &backend_deploy],
        EdgeStyle::labeled("Pull Images"),
    )?;

    let path = grampus_render::render(diag)?;
    Ok(vec![path])
}
