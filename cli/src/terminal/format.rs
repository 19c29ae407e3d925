use cloudmappr_common::model::entity::{Network, Topology};
use cloudmappr_common::model::findings::{Finding, Severity};
use colored::*;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::High => colors::SEVERITY_HIGH,
        Severity::Medium => colors::SEVERITY_MEDIUM,
        Severity::Low => colors::SEVERITY_LOW,
    }
}

/// One report line: `[severity] kind: details (Resource: resource)`.
pub fn finding_line(finding: &Finding) -> String {
    let badge: ColoredString = format!("[{}]", finding.severity)
        .color(severity_color(finding.severity))
        .bold();
    format!(
        "{} {}: {} ({}: {})",
        badge,
        finding.kind.as_str().color(colors::PRIMARY),
        finding.details,
        "Resource".color(colors::SEPARATOR),
        finding.resource,
    )
}

pub fn network_details(network: &Network, topology: &Topology) -> Vec<Detail> {
    let subnets: usize = topology
        .subnets
        .iter()
        .filter(|subnet| subnet.network_id == network.id)
        .count();
    let instances: usize = topology
        .instances
        .iter()
        .filter(|instance| instance.network_id == network.id)
        .count();
    let balancers: usize = topology
        .load_balancers
        .iter()
        .filter(|balancer| balancer.network_id == network.id)
        .count();

    let mut details: Vec<Detail> = vec![
        ("CIDR".to_string(), network.cidr.as_str().color(colors::CIDR)),
        ("Subnets".to_string(), subnets.to_string().normal()),
        ("Hosts".to_string(), instances.to_string().normal()),
    ];

    if balancers > 0 {
        details.push(("LBs".to_string(), balancers.to_string().normal()));
    }

    details
}
