//! Topology assembly.
//!
//! Turns one provider-shaped snapshot into the typed model every later
//! pass consumes. The policy is lossy but robust: a record missing any
//! required field is dropped silently rather than failing the run, and
//! nothing downstream ever sees a partial record. Instances additionally
//! have to be in the `"running"` lifecycle state; anything else is not
//! represented in the model at all.

use cloudmappr_common::error::StageError;
use cloudmappr_common::model::entity::{
    Instance, LoadBalancer, Network, SecurityGroup, SgRule, Subnet, Topology,
};
use cloudmappr_common::model::snapshot::{
    RawInstance, RawLoadBalancer, RawPermission, RawSecurityGroup, RawSnapshot, RawSubnet, RawTag,
    RawVpc,
};
use cloudmappr_common::warn;

use crate::source::InventorySource;

const RUNNING_STATE: &str = "running";
const DEFAULT_NAME: &str = "Unnamed";

/// Fetches a snapshot from `source` and assembles it.
///
/// The fetch is the only fallible step; assembly itself cannot fail.
pub async fn build_topology(source: &dyn InventorySource) -> Result<Topology, StageError> {
    let snapshot: RawSnapshot = source.fetch().await.map_err(StageError::Snapshot)?;
    Ok(assemble(snapshot))
}

/// Assembles the typed topology out of raw provider records.
pub fn assemble(snapshot: RawSnapshot) -> Topology {
    let networks: Vec<Network> = snapshot.vpcs.into_iter().filter_map(network_record).collect();
    let subnets: Vec<Subnet> = snapshot
        .subnets
        .into_iter()
        .filter_map(subnet_record)
        .collect();
    let instances: Vec<Instance> = snapshot
        .instances
        .into_iter()
        .filter_map(instance_record)
        .collect();
    let security_groups: Vec<SecurityGroup> = snapshot
        .security_groups
        .into_iter()
        .filter_map(security_group_record)
        .collect();

    // A denied or missing listing is not a failure; the run continues
    // with zero load balancers.
    let load_balancers: Vec<LoadBalancer> = match snapshot.load_balancers {
        Some(raw) => raw.into_iter().filter_map(load_balancer_record).collect(),
        None => {
            warn!("load balancer listing unavailable, continuing without load balancers");
            Vec::new()
        }
    };

    Topology::new(networks, subnets, instances, security_groups, load_balancers)
}

/// Resolves a display name from the tag set: the first `"Name"` tag that
/// actually carries a value wins. A `"Name"` tag with an absent value is
/// skipped, so a later complete one can still match.
fn display_name(tags: &[RawTag]) -> String {
    tags.iter()
        .find_map(|tag| match (&tag.key, &tag.value) {
            (Some(key), Some(value)) if key == "Name" => Some(value.clone()),
            _ => None,
        })
        .unwrap_or_else(|| DEFAULT_NAME.to_string())
}

fn network_record(raw: RawVpc) -> Option<Network> {
    let name: String = display_name(&raw.tags);
    Some(Network {
        id: raw.vpc_id?,
        cidr: raw.cidr_block?,
        name,
    })
}

fn subnet_record(raw: RawSubnet) -> Option<Subnet> {
    let name: String = display_name(&raw.tags);
    Some(Subnet {
        id: raw.subnet_id?,
        network_id: raw.vpc_id?,
        cidr: raw.cidr_block?,
        availability_zone: raw.availability_zone?,
        name,
    })
}

fn instance_record(raw: RawInstance) -> Option<Instance> {
    if raw.state.as_deref() != Some(RUNNING_STATE) {
        return None;
    }

    let name: String = display_name(&raw.tags);
    let security_group_ids: Vec<String> = raw
        .security_groups
        .into_iter()
        .filter_map(|group| group.group_id)
        .collect();

    Some(Instance {
        id: raw.instance_id?,
        network_id: raw.vpc_id?,
        subnet_id: raw.subnet_id?,
        private_address: raw.private_ip_address?,
        public_address: raw.public_ip_address,
        security_group_ids,
        name,
    })
}

fn security_group_record(raw: RawSecurityGroup) -> Option<SecurityGroup> {
    let rules: Vec<SgRule> = raw.ip_permissions.into_iter().map(rule_record).collect();
    Some(SecurityGroup {
        id: raw.group_id?,
        name: raw.group_name?,
        description: raw.description.unwrap_or_default(),
        rules,
    })
}

fn rule_record(raw: RawPermission) -> SgRule {
    SgRule {
        from_port: raw.from_port.unwrap_or(0),
        ip_ranges: raw
            .ip_ranges
            .into_iter()
            .filter_map(|range| range.cidr_ip)
            .collect(),
    }
}

fn load_balancer_record(raw: RawLoadBalancer) -> Option<LoadBalancer> {
    Some(LoadBalancer {
        arn: raw.load_balancer_arn?,
        name: raw.load_balancer_name?,
        network_id: raw.vpc_id?,
        scheme: raw.scheme.unwrap_or_default(),
        kind: raw.kind.unwrap_or_default(),
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use cloudmappr_common::model::snapshot::{RawGroupRef, RawIpRange};

    fn tag(key: &str, value: &str) -> RawTag {
        RawTag {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }

    fn running_instance(id: &str) -> RawInstance {
        RawInstance {
            instance_id: Some(id.into()),
            vpc_id: Some("vpc-1".into()),
            subnet_id: Some("sn-1".into()),
            private_ip_address: Some("10.0.1.5".into()),
            public_ip_address: None,
            state: Some("running".into()),
            security_groups: Vec::new(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn incomplete_records_are_dropped_per_entity() {
        let snapshot = RawSnapshot {
            vpcs: vec![
                RawVpc {
                    vpc_id: Some("vpc-1".into()),
                    cidr_block: Some("10.0.0.0/16".into()),
                    tags: Vec::new(),
                },
                RawVpc {
                    vpc_id: Some("vpc-2".into()),
                    cidr_block: None,
                    tags: Vec::new(),
                },
            ],
            subnets: vec![RawSubnet {
                subnet_id: Some("sn-1".into()),
                vpc_id: Some("vpc-1".into()),
                cidr_block: Some("10.0.1.0/24".into()),
                availability_zone: None,
                tags: Vec::new(),
            }],
            security_groups: vec![RawSecurityGroup {
                group_id: Some("sg-1".into()),
                group_name: None,
                description: None,
                ip_permissions: Vec::new(),
            }],
            load_balancers: Some(vec![RawLoadBalancer {
                load_balancer_arn: Some("arn:aws:elb:abc".into()),
                load_balancer_name: Some("edge".into()),
                vpc_id: None,
                scheme: Some("internet-facing".into()),
                kind: Some("application".into()),
            }]),
            ..Default::default()
        };

        let topology = assemble(snapshot);
        assert_eq!(topology.networks.len(), 1);
        assert_eq!(topology.networks[0].id, "vpc-1");
        // Subnet lacked its availability zone, group its name, balancer
        // its network reference.
        assert!(topology.subnets.is_empty());
        assert!(topology.security_groups.is_empty());
        assert!(topology.load_balancers.is_empty());
    }

    #[test]
    fn only_running_instances_are_admitted() {
        let mut stopped = running_instance("i-2");
        stopped.state = Some("stopped".into());
        let mut stateless = running_instance("i-3");
        stateless.state = None;

        let snapshot = RawSnapshot {
            instances: vec![running_instance("i-1"), stopped, stateless],
            ..Default::default()
        };

        let topology = assemble(snapshot);
        assert_eq!(topology.instances.len(), 1);
        assert_eq!(topology.instances[0].id, "i-1");
    }

    #[test]
    fn instance_missing_private_address_is_dropped() {
        let mut incomplete = running_instance("i-1");
        incomplete.private_ip_address = None;

        let snapshot = RawSnapshot {
            instances: vec![incomplete],
            ..Default::default()
        };

        assert!(assemble(snapshot).instances.is_empty());
    }

    #[test]
    fn absent_public_address_stays_absent() {
        let mut public = running_instance("i-1");
        public.public_ip_address = Some("3.3.3.3".into());

        let snapshot = RawSnapshot {
            instances: vec![running_instance("i-0"), public],
            ..Default::default()
        };

        let topology = assemble(snapshot);
        assert_eq!(topology.instances[0].public_address, None);
        assert_eq!(topology.instances[1].public_address.as_deref(), Some("3.3.3.3"));
    }

    #[test]
    fn security_group_references_keep_present_ids_in_order() {
        let mut instance = running_instance("i-1");
        instance.security_groups = vec![
            RawGroupRef {
                group_id: Some("sg-b".into()),
            },
            RawGroupRef { group_id: None },
            RawGroupRef {
                group_id: Some("sg-a".into()),
            },
        ];

        let snapshot = RawSnapshot {
            instances: vec![instance],
            ..Default::default()
        };

        let topology = assemble(snapshot);
        assert_eq!(topology.instances[0].security_group_ids, vec!["sg-b", "sg-a"]);
    }

    #[test]
    fn name_tag_resolution() {
        // No "Name" key at all resolves to the default.
        assert_eq!(display_name(&[tag("Env", "prod")]), "Unnamed");
        assert_eq!(display_name(&[tag("Name", "web-1")]), "web-1");
        // A "Name" tag with an absent value is skipped, the next
        // complete one wins.
        let tags = vec![
            RawTag {
                key: Some("Name".into()),
                value: None,
            },
            tag("Name", "web-2"),
        ];
        assert_eq!(display_name(&tags), "web-2");
        // First complete match wins over later ones.
        assert_eq!(
            display_name(&[tag("Name", "first"), tag("Name", "second")]),
            "first"
        );
    }

    #[test]
    fn rule_defaults_and_range_filtering() {
        let snapshot = RawSnapshot {
            security_groups: vec![RawSecurityGroup {
                group_id: Some("sg-1".into()),
                group_name: Some("web-sg".into()),
                description: None,
                ip_permissions: vec![RawPermission {
                    from_port: None,
                    ip_ranges: vec![
                        RawIpRange {
                            cidr_ip: Some("0.0.0.0/0".into()),
                        },
                        RawIpRange { cidr_ip: None },
                    ],
                }],
            }],
            ..Default::default()
        };

        let topology = assemble(snapshot);
        let group = &topology.security_groups[0];
        assert_eq!(group.description, "");
        assert_eq!(group.rules[0].from_port, 0);
        assert_eq!(group.rules[0].ip_ranges, vec!["0.0.0.0/0"]);
    }

    #[test]
    fn denied_load_balancer_listing_degrades_to_empty() {
        let snapshot = RawSnapshot {
            vpcs: vec![RawVpc {
                vpc_id: Some("vpc-1".into()),
                cidr_block: Some("10.0.0.0/16".into()),
                tags: Vec::new(),
            }],
            load_balancers: None,
            ..Default::default()
        };

        let topology = assemble(snapshot);
        assert!(topology.load_balancers.is_empty());
        assert_eq!(topology.networks.len(), 1);
    }

    #[test]
    fn snapshot_order_is_preserved() {
        let snapshot = RawSnapshot {
            vpcs: vec![
                RawVpc {
                    vpc_id: Some("vpc-b".into()),
                    cidr_block: Some("10.1.0.0/16".into()),
                    tags: Vec::new(),
                },
                RawVpc {
                    vpc_id: Some("vpc-a".into()),
                    cidr_block: Some("10.0.0.0/16".into()),
                    tags: Vec::new(),
                },
            ],
            ..Default::default()
        };

        let topology = assemble(snapshot);
        let ids: Vec<&str> = topology.networks.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["vpc-b", "vpc-a"]);
    }
}
