//! Provider-shaped inventory records.
//!
//! These mirror the wire shapes the cloud provider hands back: every
//! field is optional, names follow the provider's casing, and nothing is
//! validated here. Assembly decides which records are complete enough to
//! keep.

use serde::Deserialize;

/// One full inventory snapshot, as delivered by an inventory source.
///
/// `load_balancers` is `None` when the listing itself was unavailable
/// (for example, access denied at the source). That case degrades to an
/// empty collection during assembly; it is not an error.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSnapshot {
    pub vpcs: Vec<RawVpc>,
    pub subnets: Vec<RawSubnet>,
    pub instances: Vec<RawInstance>,
    pub security_groups: Vec<RawSecurityGroup>,
    pub load_balancers: Option<Vec<RawLoadBalancer>>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawVpc {
    pub vpc_id: Option<String>,
    pub cidr_block: Option<String>,
    pub tags: Vec<RawTag>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSubnet {
    pub subnet_id: Option<String>,
    pub vpc_id: Option<String>,
    pub cidr_block: Option<String>,
    pub availability_zone: Option<String>,
    pub tags: Vec<RawTag>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawInstance {
    pub instance_id: Option<String>,
    pub vpc_id: Option<String>,
    pub subnet_id: Option<String>,
    pub private_ip_address: Option<String>,
    pub public_ip_address: Option<String>,
    /// Lifecycle state name, e.g. `"running"`, `"stopped"`.
    pub state: Option<String>,
    pub security_groups: Vec<RawGroupRef>,
    pub tags: Vec<RawTag>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawGroupRef {
    pub group_id: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSecurityGroup {
    pub group_id: Option<String>,
    pub group_name: Option<String>,
    pub description: Option<String>,
    pub ip_permissions: Vec<RawPermission>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPermission {
    pub from_port: Option<i32>,
    pub ip_ranges: Vec<RawIpRange>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawIpRange {
    pub cidr_ip: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawLoadBalancer {
    pub load_balancer_arn: Option<String>,
    pub load_balancer_name: Option<String>,
    pub vpc_id: Option<String>,
    pub scheme: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTag {
    pub key: Option<String>,
    pub value: Option<String>,
}
