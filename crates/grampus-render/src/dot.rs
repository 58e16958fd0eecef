//! DOT serialization.
//!
//! The session's graph is written out exactly as declared: nodes in
//! declaration order, clusters as nested `subgraph cluster_N` blocks, edges
//! last. The engine owns everything visual beyond the attributes set here.

use crate::palette;
use grampus_core::{DiagramSession, Edge, EdgeDir, LineStyle, Node};

/// Serializes the session's graph to DOT.
pub fn dot_source(session: &DiagramSession) -> String {
    let theme = &session.options().theme;
    let mut out = String::new();
    out.push_str("digraph {\n");
    out.push_str(&format!(
        "    graph [label={label}, rankdir=\"{rankdir}\", fontname={font}, fontsize=\"{size}\", fontcolor={color}, bgcolor={bg}, pad=\"{pad}\", nodesep=\"{nodesep}\", ranksep=\"{ranksep}\", splines=\"{splines}\"];\n",
        label = quote(session.title()),
        rankdir = session.options().direction.as_rankdir(),
        font = quote(&theme.font_name),
        size = theme.title_font_size,
        color = quote(&theme.font_color),
        bg = quote(&theme.background),
        pad = theme.pad,
        nodesep = theme.node_sep,
        ranksep = theme.rank_sep,
        splines = theme.splines.as_dot(),
    ));
    out.push_str(&format!(
        "    node [shape=\"box\", style=\"rounded,filled\", fillcolor=\"white\", fontname={font}, fontsize=\"{size}\", fontcolor={color}, width=\"{width}\", height=\"{height}\"];\n",
        font = quote(&theme.font_name),
        size = theme.node_font_size,
        color = quote(&theme.font_color),
        width = theme.node_width,
        height = theme.node_height,
    ));
    out.push_str(&format!(
        "    edge [fontname={font}, fontsize=\"{size}\", fontcolor={color}];\n",
        font = quote(&theme.font_name),
        size = theme.edge_font_size,
        color = quote(&theme.font_color),
    ));

    let nodes: Vec<&Node> = session.nodes().values().collect();
    let cluster_count = session.clusters().len();

    let mut members: Vec<Vec<usize>> = vec![Vec::new(); cluster_count];
    let mut top_level: Vec<usize> = Vec::new();
    for (idx, node) in nodes.iter().enumerate() {
        match node.cluster {
            Some(c) => members[c].push(idx),
            None => top_level.push(idx),
        }
    }

    let mut children: Vec<Vec<usize>> = vec![Vec::new(); cluster_count];
    let mut roots: Vec<usize> = Vec::new();
    for (idx, cluster) in session.clusters().iter().enumerate() {
        match cluster.parent {
            Some(p) => children[p].push(idx),
            None => roots.push(idx),
        }
    }

    for &idx in &top_level {
        push_node(&mut out, idx, nodes[idx], 1);
    }
    for &root in &roots {
        push_cluster(&mut out, session, &nodes, &members, &children, root, 0, 1);
    }
    for edge in session.edges() {
        push_edge(&mut out, edge);
    }

    out.push_str("}\n");
    out
}

fn push_node(out: &mut String, idx: usize, node: &Node, indent: usize) {
    let visual = palette::node_visual(node.category);
    out.push_str(&format!(
        "{pad}n{idx} [label={label}, shape=\"{shape}\", fillcolor={fill}];\n",
        pad = "    ".repeat(indent),
        label = quote(&node.label),
        shape = visual.shape,
        fill = quote(visual.fill),
    ));
}

#[allow(clippy::too_many_arguments)]
fn push_cluster(
    out: &mut String,
    session: &DiagramSession,
    nodes: &[&Node],
    members: &[Vec<usize>],
    children: &[Vec<usize>],
    idx: usize,
    depth: usize,
    indent: usize,
) {
    let pad = "    ".repeat(indent);
    let fill = palette::CLUSTER_FILLS[depth % palette::CLUSTER_FILLS.len()];
    out.push_str(&format!("{pad}subgraph cluster_{idx} {{\n"));
    out.push_str(&format!(
        "{pad}    graph [label={label}, labeljust=\"l\", style=\"rounded\", bgcolor={bg}, pencolor={pen}, fontsize=\"12\"];\n",
        label = quote(&session.clusters()[idx].label),
        bg = quote(fill),
        pen = quote(palette::CLUSTER_BORDER),
    ));
    for &member in &members[idx] {
        push_node(out, member, nodes[member], indent + 1);
    }
    for &child in &children[idx] {
        push_cluster(out, session, nodes, members, children, child, depth + 1, indent + 1);
    }
    out.push_str(&format!("{pad}}}\n"));
}

fn push_edge(out: &mut String, edge: &Edge) {
    let mut attrs: Vec<String> = Vec::new();
    if let Some(label) = &edge.style.label {
        attrs.push(format!("label={}", quote(label)));
    }
    if let Some(color) = &edge.style.color {
        attrs.push(format!("color={}", quote(color)));
    }
    if edge.style.line != LineStyle::Solid {
        attrs.push(format!("style=\"{}\"", edge.style.line.as_dot()));
    }
    if edge.style.dir != EdgeDir::Forward {
        attrs.push(format!("dir=\"{}\"", edge.style.dir.as_dot()));
    }
    if attrs.is_empty() {
        out.push_str(&format!("    n{} -> n{};\n", edge.from, edge.to));
    } else {
        out.push_str(&format!(
            "    n{} -> n{} [{}];\n",
            edge.from,
            edge.to,
            attrs.join(", ")
        ));
    }
}

/// Quotes a DOT string literal. Newlines become `\n` so multi-line labels
/// survive the round trip to the engine.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use grampus_core::{Category, DiagramOptions, DiagramSession, Direction, EdgeStyle};

    fn session(direction: Direction) -> DiagramSession {
        DiagramSession::open(
            "Sample",
            DiagramOptions::default().with_direction(direction),
        )
        .unwrap()
    }

    #[test]
    fn graph_attributes_come_from_the_options() {
        let s = session(Direction::TopBottom);
        let dot = dot_source(&s);
        assert!(dot.starts_with("digraph {\n"));
        assert!(dot.contains("rankdir=\"TB\""));
        assert!(dot.contains("splines=\"ortho\""));
        assert!(dot.contains("label=\"Sample\""));
    }

    #[test]
    fn nodes_are_emitted_in_declaration_order() {
        let mut s = session(Direction::LeftRight);
        s.node("first", Category::Users, "First").unwrap();
        s.node("second", Category::Rds, "Second").unwrap();
        let dot = dot_source(&s);
        let first = dot.find("n0 [label=\"First\"").unwrap();
        let second = dot.find("n1 [label=\"Second\"").unwrap();
        assert!(first < second);
        assert!(dot.contains("shape=\"cylinder\""));
    }

    #[test]
    fn clusters_nest_as_subgraphs() {
        let mut s = session(Direction::TopBottom);
        s.begin_cluster("Outer");
        s.node("a", Category::Eks, "A").unwrap();
        s.begin_cluster("Inner");
        s.node("b", Category::Pod, "B").unwrap();
        s.end_cluster().unwrap();
        s.end_cluster().unwrap();

        let dot = dot_source(&s);
        let outer = dot.find("subgraph cluster_0 {").unwrap();
        let inner = dot.find("subgraph cluster_1 {").unwrap();
        assert!(outer < inner);
        assert!(dot.contains("label=\"Outer\""));
        assert!(dot.contains("label=\"Inner\""));
        // Depth 0 and depth 1 pick different boundary fills.
        assert!(dot.contains("bgcolor=\"#E5F5FD\""));
        assert!(dot.contains("bgcolor=\"#EBF3E7\""));
    }

    #[test]
    fn edge_attributes_are_emitted_only_when_set() {
        let mut s = session(Direction::LeftRight);
        let a = s.node("a", Category::Pod, "A").unwrap();
        let b = s.node("b", Category::Pod, "B").unwrap();
        s.edge(&a, &b, EdgeStyle::new()).unwrap();
        s.edge(
            &a,
            &b,
            EdgeStyle::labeled("uses")
                .with_color("grey")
                .with_line(grampus_core::LineStyle::Dashed)
                .with_dir(grampus_core::EdgeDir::None),
        )
        .unwrap();

        let dot = dot_source(&s);
        assert!(dot.contains("    n0 -> n1;\n"));
        assert!(dot.contains(
            "    n0 -> n1 [label=\"uses\", color=\"grey\", style=\"dashed\", dir=\"none\"];\n"
        ));
    }

    #[test]
    fn labels_are_escaped_for_dot() {
        let mut s = session(Direction::LeftRight);
        s.node("tricky", Category::Blank, "say \"hi\"\nback\\slash")
            .unwrap();
        let dot = dot_source(&s);
        assert!(dot.contains(r#"label="say \"hi\"\nback\\slash""#));
    }

    #[test]
    fn cross_product_connect_emits_every_pair() {
        let mut s = session(Direction::TopBottom);
        let a = s.node("a", Category::Deployment, "A").unwrap();
        let p1 = s.node("p1", Category::Pod, "P1").unwrap();
        let p2 = s.node("p2", Category::Pod, "P2").unwrap();
        s.connect([&a], [&p1, &p2], EdgeStyle::new()).unwrap();
        let dot = dot_source(&s);
        assert_eq!(dot.matches(" -> ").count(), 2);
    }
}
