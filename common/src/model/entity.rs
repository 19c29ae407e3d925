//! The assembled topology: typed entities plus the container that owns
//! them for the duration of one run.
//!
//! Entities are plain data. Relationships stay as id strings resolved
//! through the container's lookup maps, so a reference to an entity that
//! was dropped during assembly degrades to "no match" instead of a fault.
//! Identifiers are opaque, case-sensitive strings; collections keep the
//! order the snapshot presented.

use std::collections::HashMap;

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub id: String,
    pub cidr: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subnet {
    pub id: String,
    pub network_id: String,
    pub cidr: String,
    pub availability_zone: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    pub id: String,
    pub network_id: String,
    pub subnet_id: String,
    pub private_address: String,
    /// `None` means the instance has no public address. This is the only
    /// sentinel; an empty string would be a (strange) real address.
    pub public_address: Option<String>,
    pub security_group_ids: Vec<String>,
    pub name: String,
}

impl Instance {
    /// The address shown on graph labels: public when present, private
    /// otherwise.
    pub fn display_address(&self) -> &str {
        self.public_address.as_deref().unwrap_or(&self.private_address)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityGroup {
    pub id: String,
    pub name: String,
    pub description: String,
    pub rules: Vec<SgRule>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SgRule {
    /// Lowest port the rule opens. `0` doubles as the default for rules
    /// that carried no port at all, which the analysis pass knowingly
    /// treats as sensitive.
    pub from_port: i32,
    pub ip_ranges: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancer {
    pub arn: String,
    pub name: String,
    pub network_id: String,
    pub scheme: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Everything one snapshot assembled into. Built once per run, read-only
/// afterwards.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Topology {
    pub networks: Vec<Network>,
    pub subnets: Vec<Subnet>,
    pub instances: Vec<Instance>,
    pub security_groups: Vec<SecurityGroup>,
    pub load_balancers: Vec<LoadBalancer>,

    #[serde(skip)]
    network_index: HashMap<String, usize>,
    #[serde(skip)]
    subnet_index: HashMap<String, usize>,
}

impl Topology {
    pub fn new(
        networks: Vec<Network>,
        subnets: Vec<Subnet>,
        instances: Vec<Instance>,
        security_groups: Vec<SecurityGroup>,
        load_balancers: Vec<LoadBalancer>,
    ) -> Self {
        let network_index: HashMap<String, usize> = networks
            .iter()
            .enumerate()
            .map(|(idx, network)| (network.id.clone(), idx))
            .collect();
        let subnet_index: HashMap<String, usize> = subnets
            .iter()
            .enumerate()
            .map(|(idx, subnet)| (subnet.id.clone(), idx))
            .collect();

        Self {
            networks,
            subnets,
            instances,
            security_groups,
            load_balancers,
            network_index,
            subnet_index,
        }
    }

    pub fn network(&self, id: &str) -> Option<&Network> {
        self.network_index.get(id).map(|idx| &self.networks[*idx])
    }

    pub fn subnet(&self, id: &str) -> Option<&Subnet> {
        self.subnet_index.get(id).map(|idx| &self.subnets[*idx])
    }

    pub fn has_network(&self, id: &str) -> bool {
        self.network_index.contains_key(id)
    }

    pub fn has_subnet(&self, id: &str) -> bool {
        self.subnet_index.contains_key(id)
    }

    /// Total number of entities across all five collections.
    pub fn resource_count(&self) -> usize {
        self.networks.len()
            + self.subnets.len()
            + self.instances.len()
            + self.security_groups.len()
            + self.load_balancers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resource_count() == 0
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
