#![cfg(test)]
use cloudmappr_common::model::entity::Topology;
use cloudmappr_common::model::findings::{Finding, Severity};
use cloudmappr_core::source::{InventorySource, SnapshotFile};
use cloudmappr_core::{analysis, assembly, graph};

/// Writes a snapshot JSON to disk and runs it through the same
/// file-backed source the CLI uses.
async fn topology_from_json(snapshot_json: &str) -> Topology {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("snapshot.json");
    std::fs::write(&path, snapshot_json).expect("write snapshot");

    let source = SnapshotFile::new(&path);
    let snapshot = source.fetch().await.expect("snapshot parses");
    assembly::assemble(snapshot)
}

const BASELINE: &str = r#"{
    "vpcs": [{"vpcId": "vpc-1", "cidrBlock": "10.0.0.0/16"}],
    "subnets": [{
        "subnetId": "sn-1",
        "vpcId": "vpc-1",
        "cidrBlock": "10.0.1.0/24",
        "availabilityZone": "us-east-1a"
    }],
    "instances": [{
        "instanceId": "i-1",
        "vpcId": "vpc-1",
        "subnetId": "sn-1",
        "privateIpAddress": "10.0.1.5",
        "state": "running"
    }],
    "securityGroups": [],
    "loadBalancers": []
}"#;

#[tokio::test]
async fn private_only_topology_is_clean_and_fully_drawn() {
    let topology = topology_from_json(BASELINE).await;

    let findings = analysis::analyze(&topology);
    assert!(findings.is_empty(), "unexpected findings: {findings:?}");

    let text = graph::serialize(&topology);
    assert_eq!(text.matches("[label=").count(), 3, "one node per entity");
    assert_eq!(text.matches("->").count(), 2);
    assert!(text.contains("vpc_vpc-1 -> subnet_sn-1;"));
    assert!(text.contains("subnet_sn-1 -> instance_i-1;"));
    assert!(!text.contains("lb_"));
}

#[tokio::test]
async fn public_instance_without_balancer_is_reported_once() {
    let snapshot_json = BASELINE.replace(
        "\"privateIpAddress\": \"10.0.1.5\",",
        "\"privateIpAddress\": \"10.0.1.5\",\n        \"publicIpAddress\": \"3.3.3.3\",",
    );
    let topology = topology_from_json(&snapshot_json).await;

    let findings = analysis::analyze(&topology);
    assert_eq!(findings.len(), 1);
    let finding: &Finding = &findings[0];
    assert_eq!(finding.kind, "Direct Public Exposure");
    assert_eq!(finding.resource, "EC2 Instances");
    assert_eq!(finding.severity, Severity::Medium);
    assert_eq!(
        finding.to_string(),
        "[Medium] Direct Public Exposure: Instances exposed directly to internet \
         (no load balancer) (Resource: EC2 Instances)"
    );

    // The graph label picks the public address up as well.
    let text = graph::serialize(&topology);
    assert!(text.contains("EC2\\nUnnamed\\n3.3.3.3"));
}

#[tokio::test]
async fn world_open_rules_and_exposure_report_in_rule_order() {
    let topology = topology_from_json(
        r#"{
            "vpcs": [{"vpcId": "vpc-1", "cidrBlock": "10.0.0.0/16"}],
            "subnets": [],
            "instances": [{
                "instanceId": "i-1",
                "vpcId": "vpc-1",
                "subnetId": "sn-1",
                "privateIpAddress": "10.0.1.5",
                "publicIpAddress": "3.3.3.3",
                "state": "running"
            }],
            "securityGroups": [{
                "groupId": "sg-1",
                "groupName": "web-sg",
                "ipPermissions": [
                    {"fromPort": 443, "ipRanges": [{"cidrIp": "0.0.0.0/0"}]},
                    {"ipRanges": [{"cidrIp": "0.0.0.0/0"}]}
                ]
            }],
            "loadBalancers": []
        }"#,
    )
    .await;

    let findings = analysis::analyze(&topology);
    let lines: Vec<String> = findings.iter().map(Finding::to_string).collect();
    assert_eq!(
        lines,
        vec![
            // The portless rule assembled to fromPort 0, which is in the
            // sensitive set; 443 is not.
            "[High] Open Security Group: Port 0 open to 0.0.0.0/0 (Resource: web-sg)",
            "[Medium] Direct Public Exposure: Instances exposed directly to internet \
             (no load balancer) (Resource: EC2 Instances)",
        ]
    );
}

#[tokio::test]
async fn load_balancer_presence_suppresses_the_exposure_finding() {
    let snapshot_json = BASELINE
        .replace(
            "\"privateIpAddress\": \"10.0.1.5\",",
            "\"privateIpAddress\": \"10.0.1.5\",\n        \"publicIpAddress\": \"3.3.3.3\",",
        )
        .replace(
            "\"loadBalancers\": []",
            r#""loadBalancers": [{
                "loadBalancerArn": "arn:aws:elb:abc",
                "loadBalancerName": "edge",
                "vpcId": "vpc-1",
                "scheme": "internet-facing",
                "type": "application"
            }]"#,
        );
    let topology = topology_from_json(&snapshot_json).await;

    assert!(analysis::analyze(&topology).is_empty());

    // The balancer shows up in the graph with its colon-free identifier.
    let text = graph::serialize(&topology);
    assert!(text.contains("lb_arn_aws_elb_abc [label=\"LB\\nedge\\n(internet-facing)\""));
    assert!(text.contains("vpc_vpc-1 -> lb_arn_aws_elb_abc;"));
}

#[tokio::test]
async fn dropped_records_leave_no_trace_in_graph_or_inventory() {
    let topology = topology_from_json(
        r#"{
            "vpcs": [{"vpcId": "vpc-1", "cidrBlock": "10.0.0.0/16"}],
            "subnets": [{
                "subnetId": "sn-broken",
                "vpcId": "vpc-1",
                "cidrBlock": "10.0.9.0/24"
            }],
            "instances": [{
                "instanceId": "i-stopped",
                "vpcId": "vpc-1",
                "subnetId": "sn-broken",
                "privateIpAddress": "10.0.9.9",
                "state": "stopped"
            }],
            "securityGroups": []
        }"#,
    )
    .await;

    assert!(topology.subnets.is_empty());
    assert!(topology.instances.is_empty());
    // Absent loadBalancers key behaves like a denied listing.
    assert!(topology.load_balancers.is_empty());

    let text = graph::serialize(&topology);
    assert!(!text.contains("sn-broken"));
    assert!(!text.contains("i-stopped"));

    let inventory = serde_json::to_string_pretty(&topology).expect("inventory serializes");
    assert!(!inventory.contains("sn-broken"));
    assert!(inventory.contains("\"vpc-1\""));
}

#[tokio::test]
async fn serializer_output_is_stable_across_runs() {
    let first = graph::serialize(&topology_from_json(BASELINE).await);
    let second = graph::serialize(&topology_from_json(BASELINE).await);
    assert_eq!(first, second, "same snapshot must serialize byte-identically");
}
