//! Graphviz DOT serializer.
//!
//! Produces the graph description handed to the external renderer:
//!   cloudmappr map snapshot.json          # writes network_map.dot, renders it
//!   dot -Tpng network_map.dot -o map.png  # manual rendering
//!
//! Output is deterministic for a given model: statements follow entity
//! kind grouping (networks, subnets, instances, load balancers), each in
//! model order, with every node emitted before the edge that attaches
//! it. An edge whose endpoint is not a known node is skipped outright.

use cloudmappr_common::model::entity::Topology;

/// Renders `topology` as a DOT digraph.
pub fn serialize(topology: &Topology) -> String {
    let mut out = String::with_capacity(2048);
    out.push_str("digraph cloudmappr {\n");
    out.push_str("  rankdir=LR;\n");
    out.push_str("  node [fontsize=10];\n");

    for network in &topology.networks {
        let label: String = format!("VPC\\n{}\\n{}", escape(&network.name), escape(&network.cidr));
        out.push_str(&format!(
            "  {} [label=\"{}\", shape=box, style=filled, fillcolor=\"#E0E0E0\"];\n",
            node_id("vpc_", &network.id),
            label,
        ));
    }

    for subnet in &topology.subnets {
        let label: String = format!(
            "Subnet\\n{}\\n{}\\nAZ: {}",
            escape(&subnet.name),
            escape(&subnet.cidr),
            escape(&subnet.availability_zone),
        );
        let subnet_node: String = node_id("subnet_", &subnet.id);
        out.push_str(&format!(
            "  {} [label=\"{}\", shape=ellipse, style=filled, fillcolor=\"#FFD700\"];\n",
            subnet_node, label,
        ));
        if topology.has_network(&subnet.network_id) {
            out.push_str(&format!(
                "  {} -> {};\n",
                node_id("vpc_", &subnet.network_id),
                subnet_node,
            ));
        }
    }

    for instance in &topology.instances {
        let label: String = format!(
            "EC2\\n{}\\n{}",
            escape(&instance.name),
            escape(instance.display_address()),
        );
        let instance_node: String = node_id("instance_", &instance.id);
        out.push_str(&format!(
            "  {} [label=\"{}\", shape=circle, style=filled, fillcolor=\"#90EE90\"];\n",
            instance_node, label,
        ));
        if topology.has_subnet(&instance.subnet_id) {
            out.push_str(&format!(
                "  {} -> {};\n",
                node_id("subnet_", &instance.subnet_id),
                instance_node,
            ));
        }
    }

    for balancer in &topology.load_balancers {
        let label: String = format!(
            "LB\\n{}\\n({})",
            escape(&balancer.name),
            escape(&balancer.scheme),
        );
        let balancer_node: String = node_id("lb_", &balancer.arn);
        out.push_str(&format!(
            "  {} [label=\"{}\", shape=diamond, style=filled, fillcolor=\"#FFB6C1\"];\n",
            balancer_node, label,
        ));
        if topology.has_network(&balancer.network_id) {
            out.push_str(&format!(
                "  {} -> {};\n",
                node_id("vpc_", &balancer.network_id),
                balancer_node,
            ));
        }
    }

    out.push_str("}\n");
    out
}

/// Node identifier: type prefix plus the natural id with every colon
/// replaced. Colons are ambiguous in DOT identifiers (port syntax); this
/// is the only transform applied.
fn node_id(prefix: &str, natural: &str) -> String {
    format!("{prefix}{}", natural.replace(':', "_"))
}

/// Escapes label text so arbitrary display names cannot break out of the
/// quoted DOT string.
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
