//! Security-group architecture of the RouteClouds EKS deployment, based on
//! the recorded security-group analysis: one boundary per group, traffic
//! flows labelled with the allowed protocols/ports, and the known public
//! database exposure called out in red. A second, separate diagram renders
//! the legend.

use grampus_core::{
    Category, DiagramOptions, DiagramSession, Direction, EdgeStyle, LineStyle, OutputFormat, Theme,
};
use grampus_diagrams::{ScriptResult, finish, house_theme};

fn main() {
    finish(run());
}

fn run() -> ScriptResult {
    let architecture = architecture_diagram()?;
    let legend = legend_diagram()?;
    Ok(vec![
        grampus_render::render(architecture)?,
        grampus_render::render(legend)?,
    ])
}

fn architecture_diagram() -> Result<DiagramSession, grampus_core::Error> {
    let mut diag = DiagramSession::open(
        "RouteClouds EKS Security Group Architecture",
        DiagramOptions::new()
            .with_direction(Direction::LeftRight)
            .with_filename("routeclouds_security_group_architecture")
            .with_theme(Theme {
                rank_sep: 1.0,
                ..house_theme()
            }),
    )?;

    let internet = diag.node("internet", Category::Users, "Internet")?;

    diag.begin_cluster("VPC: routeclouds-vpc");
    let igw = diag.node("igw", Category::InternetGateway, "Internet Gateway")?;

    diag.begin_cluster("App LB Security Group\nsg-04fb7bcc9a38ec5bd");
    diag.node(
        "app-lb-sg",
        Category::SecurityGroup,
        "k8s-routeclouds-app-0d8d19d336",
    )?;
    let app_lb = diag.node("app-lb", Category::Ingress, "Application Ingress")?;
    diag.end_cluster()?;

    diag.begin_cluster("Shared LB Security Group\nsg-04cce232dcd1fb94e");
    diag.node(
        "shared-lb-sg",
        Category::SecurityGroup,
        "k8s-traffic-routeclouds-eks-cluster-fb83cad852",
    )?;
    let shared_lb = diag.node("shared-lb", Category::Elb, "Shared Load Balancer")?;
    diag.end_cluster()?;

    diag.begin_cluster("EKS Cluster: routeclouds-eks-cluster");
    diag.begin_cluster("Control Plane Security Group\nsg-0a2172ac09fcb8b08");
    let control_plane_sg = diag.node(
        "control-plane-sg",
        Category::SecurityGroup,
        "eks-cluster-sg-routeclouds-eks-cluster-536903144",
    )?;
    let control_plane = diag.node("control-plane", Category::Eks, "EKS Control Plane")?;
    diag.end_cluster()?;

    diag.begin_cluster("Cluster Security Group\nsg-07dac932c272e2161");
    let cluster_sg = diag.node("cluster-sg", Category::SecurityGroup, "routeclouds-eks-cluster-sg")?;
    let api_server = diag.node("api-server", Category::Eks, "Kubernetes API Server")?;
    diag.end_cluster()?;

    diag.begin_cluster("Node Security Group\nsg-03f55598554824f73");
    let node_sg = diag.node(
        "node-sg",
        Category::SecurityGroup,
        "routeclouds-eks-cluster-node-2025070705415142120000000a",
    )?;
    diag.node("pod-1", Category::Pod, "App Pod 1")?;
    diag.node("pod-2", Category::Pod, "App Pod 2")?;
    diag.node("pod-3", Category::Pod, "App Pod 3")?;
    diag.end_cluster()?;
    diag.end_cluster()?; // EKS cluster

    diag.begin_cluster("RDS Security Group\nsg-028044234144db4c1");
    let rds_sg = diag.node("rds-sg", Category::SecurityGroup, "dev-rds-sg")?;
    let db = diag.node("db", Category::Rds, "PostgreSQL Database")?;
    diag.end_cluster()?;
    diag.end_cluster()?; // VPC

    // Internet to the load balancers.
    diag.edge(&internet, &igw, EdgeStyle::labeled("HTTP/HTTPS\nPorts: 80, 443"))?;
    diag.edge(&igw, &app_lb, EdgeStyle::labeled("HTTP/HTTPS"))?;
    diag.edge(&igw, &shared_lb, EdgeStyle::labeled("HTTP/HTTPS"))?;

    // Load balancers to the nodes.
    diag.edge(&shared_lb, &node_sg, EdgeStyle::labeled("TCP 80-8000"))?;
    diag.edge(&app_lb, &node_sg, EdgeStyle::labeled("App Traffic"))?;

    // Node and API-server traffic, both directions.
    diag.edge(&node_sg, &cluster_sg, EdgeStyle::labeled("TCP 443"))?;
    diag.edge(&cluster_sg, &node_sg, EdgeStyle::labeled("TCP 443, 10250"))?;

    // Control-plane communication, including the self-referencing rule.
    diag.edge(
        &control_plane_sg,
        &control_plane_sg,
        EdgeStyle::labeled("All protocols (self)"),
    )?;
    diag.edge(&control_plane, &api_server, EdgeStyle::labeled("Management"))?;

    // Nodes to the database.
    diag.edge(&node_sg, &cluster_sg, EdgeStyle::labeled("Via Cluster SG"))?;
    diag.edge(&cluster_sg, &rds_sg, EdgeStyle::labeled("TCP 5432"))?;
    diag.edge(&rds_sg, &db, EdgeStyle::new())?;

    // The finding that motivated this diagram: the database is reachable
    // from the internet.
    diag.edge(
        &internet,
        &rds_sg,
        EdgeStyle::labeled("SECURITY CONCERN:\nPublic Access\nTCP 5432")
            .with_color("red")
            .with_line(LineStyle::Dashed),
    )?;

    Ok(diag)
}

fn legend_diagram() -> Result<DiagramSession, grampus_core::Error> {
    let mut diag = DiagramSession::open(
        "RouteClouds Security Group Architecture Legend",
        DiagramOptions::new()
            .with_direction(Direction::TopBottom)
            .with_format(OutputFormat::Png)
            .with_filename("routeclouds_sg_architecture_legend")
            .with_theme(Theme {
                title_font_size: 14,
                ..Theme::default()
            }),
    )?;

    diag.begin_cluster("Legend");
    diag.node("security-group", Category::SecurityGroup, "Security Group")?;

    diag.begin_cluster("Components");
    diag.node("external-entity", Category::Users, "External Entity")?;
    diag.node("aws-service", Category::Elb, "AWS Service")?;
    diag.node("kubernetes-resource", Category::Pod, "Kubernetes Resource")?;
    diag.end_cluster()?;

    diag.begin_cluster("Security Concerns");
    diag.node(
        "security-vulnerability",
        Category::Blank,
        "Security Vulnerability\n(red, dashed)",
    )?;
    diag.end_cluster()?;

    diag.begin_cluster("Traffic Flow");
    diag.node(
        "allowed-traffic",
        Category::Blank,
        "Allowed Traffic\nProtocol: Port(s)",
    )?;
    diag.end_cluster()?;
    diag.end_cluster()?; // legend

    Ok(diag)
}
