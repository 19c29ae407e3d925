//! Security-risk heuristics over an assembled topology.
//!
//! Two rules run on every model, in a fixed order, and their findings
//! are concatenated as produced. There is no deduplication and no
//! severity re-sort; callers get findings in model order. The pass is
//! pure and cannot fail: an empty topology yields an empty list.

use cloudmappr_common::model::entity::Topology;
use cloudmappr_common::model::findings::{Finding, Severity};

/// The world-open IPv4 range, matched literally.
const WORLD_OPEN: &str = "0.0.0.0/0";

/// Ports flagged when opened to the world.
///
/// `0` is in the set because it is also what a rule without an explicit
/// port assembles to, so every world-open rule with no port restriction
/// gets flagged. That conflates "no port given" with "port zero" and is
/// a known source of false positives, kept on purpose: guessing which
/// one the rule meant would hide real exposure.
const SENSITIVE_PORTS: [i32; 5] = [22, 3389, 21, 23, 0];

/// Evaluates every risk rule against `topology`.
///
/// Open-ingress findings come first, in security group > rule > range
/// order; the fleet-level exposure finding, if any, is last.
pub fn analyze(topology: &Topology) -> Vec<Finding> {
    let mut findings: Vec<Finding> = Vec::new();
    open_ingress_findings(topology, &mut findings);
    public_exposure_finding(topology, &mut findings);
    findings
}

/// Rule: a security group rule opening a sensitive port to `0.0.0.0/0`.
///
/// One finding per matching range string, attributed to the group's
/// display name. Duplicate ranges produce duplicate findings.
fn open_ingress_findings(topology: &Topology, findings: &mut Vec<Finding>) {
    for group in &topology.security_groups {
        for rule in &group.rules {
            for range in &rule.ip_ranges {
                if range == WORLD_OPEN && SENSITIVE_PORTS.contains(&rule.from_port) {
                    findings.push(Finding {
                        kind: "Open Security Group".into(),
                        resource: group.name.clone(),
                        details: format!("Port {} open to {}", rule.from_port, WORLD_OPEN),
                        severity: Severity::High,
                    });
                }
            }
        }
    }
}

/// Rule: instances reachable from the internet with no load balancer in
/// front of them.
///
/// A fleet-level observation, emitted at most once per run and never
/// attributed to a single instance.
fn public_exposure_finding(topology: &Topology, findings: &mut Vec<Finding>) {
    let has_public_instance: bool = topology
        .instances
        .iter()
        .any(|instance| instance.public_address.is_some());

    if has_public_instance && topology.load_balancers.is_empty() {
        findings.push(Finding {
            kind: "Direct Public Exposure".into(),
            resource: "EC2 Instances".into(),
            details: "Instances exposed directly to internet (no load balancer)".into(),
            severity: Severity::Medium,
        });
    }
}
