//! Step-by-step walkthrough of the RouteClouds Terraform codebase: which
//! file feeds which resource group, from `terraform.tfvars` down to
//! `output.tf`.

use grampus_core::{Category, DiagramOptions, DiagramSession, Direction, EdgeDir, EdgeStyle};
use grampus_diagrams::{ScriptResult, finish};

fn main() {
    finish(run());
}

fn run() -> ScriptResult {
    let mut diag = DiagramSession::open(
        "RouteClouds Terraform Infra Code Workflow (Step-by-Step)",
        DiagramOptions::new().with_direction(Direction::TopBottom),
    )?;

    // Step 1: variables and data sources.
    let tfvars = diag.node("tfvars", Category::Blank, "Step 1: terraform.tfvars")?;
    let variables = diag.node("variables", Category::Blank, "Step 1: variables.tf")?;
    let data = diag.node("data", Category::Blank, "Step 1: data.tf")?;

    diag.begin_cluster("Step 2: Network (network.tf)");
    let vpc = diag.node("vpc", Category::Vpc, "routeclouds-vpc")?;
    let pub_subnet = diag.node("pub-subnet", Category::PublicSubnet, "Public Subnets")?;
    let priv_subnet = diag.node("priv-subnet", Category::PrivateSubnet, "Private Subnets")?;
    let nat = diag.node("nat", Category::NatGateway, "NAT Gateway")?;
    diag.connect([&vpc], [&pub_subnet, &priv_subnet], EdgeStyle::new())?;
    diag.edge(&pub_subnet, &nat, EdgeStyle::new())?;
    diag.edge(&priv_subnet, &nat, EdgeStyle::new())?;
    diag.end_cluster()?;

    diag.begin_cluster("Step 3: EKS (eks.tf)");
    let eks = diag.node("eks", Category::Eks, "routeclouds-eks-cluster")?;
    let eks_nodes = diag.node("eks-nodes", Category::Eks, "routeclouds-node-group")?;
    diag.edge(&eks, &eks_nodes, EdgeStyle::new())?;
    diag.end_cluster()?;

    diag.begin_cluster("Step 5: OIDC/GitHub (oidc.tf, modules/oidc/)");
    let oidc_role = diag.node("oidc-role", Category::IamRole, "OIDC IAM Role")?;
    let github = diag.node("github", Category::GithubActions, "GitHub Actions")?;
    diag.edge(&oidc_role, &github, EdgeStyle::new())?;
    diag.end_cluster()?;

    let output = diag.node("output", Category::Blank, "Step 6: output.tf")?;

    // Workflow order.
    diag.edge(&tfvars, &variables, EdgeStyle::new())?;
    diag.connect([&variables], [&vpc, &eks, &oidc_role], EdgeStyle::new())?;
    diag.connect([&data], [&vpc, &eks], EdgeStyle::new())?;
    diag.edge(&vpc, &eks, EdgeStyle::new())?;
    diag.edge(&eks, &oidc_role, EdgeStyle::new())?;
    diag.edge(&oidc_role, &github, EdgeStyle::new())?;
    diag.connect(
        [&output],
        [&oidc_role, &eks],
        EdgeStyle::new().with_dir(EdgeDir::Back),
    )?;

    // Optional helper scripts feeding the OIDC role.
    let helper = diag.node("helper", Category::Blank, "aws-oidc-github-cli/")?;
    diag.edge(&helper, &oidc_role, EdgeStyle::new())?;

    let path = grampus_render::render(diag)?;
    Ok(vec![path])
}
