use crate::client::ZabbixClient;
use crate::error::{Error, Result};
use crate::jsonrpc::{Host, HostGroup};
use std::fmt;
use tracing::{debug, info};

/// What a maintenance period is created for.
#[derive(PartialEq, Debug, Clone)]
pub enum Target {
    Host { hostid: String, name: String },
    HostGroup { groupid: String, name: String },
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Host { name, .. } => write!(f, "host {}", name),
            Target::HostGroup { name, .. } => write!(f, "host group {}", name),
        }
    }
}

fn single_host(name: &str, mut hosts: Vec<Host>) -> Result<Host> {
    match hosts.len() {
        0 => Err(Error::HostNotFound(name.to_string())),
        1 => Ok(hosts.remove(0)),
        count => Err(Error::AmbiguousHost {
            name: name.to_string(),
            count,
        }),
    }
}

/// Group with the fewest members. On a tie the earliest group wins.
pub fn smallest_group(groups: Vec<HostGroup>) -> Option<HostGroup> {
    let mut smallest: Option<HostGroup> = None;
    for group in groups {
        debug!(group = %group.name, members = group.hosts.len(), "candidate host group");
        let fewer = smallest
            .as_ref()
            .map_or(true, |current| group.hosts.len() < current.hosts.len());
        if fewer {
            smallest = Some(group);
        }
    }
    smallest
}

pub fn resolve_host(client: &ZabbixClient, name: &str) -> Result<Host> {
    let host = single_host(name, client.host_get(name)?)?;
    info!(host = %host.host, hostid = %host.hostid, "resolved host");
    Ok(host)
}

pub fn resolve_target(client: &ZabbixClient, name: &str, by_group: bool) -> Result<Target> {
    let host = resolve_host(client, name)?;
    if !by_group {
        return Ok(Target::Host {
            hostid: host.hostid,
            name: host.host,
        });
    }

    let groups = client.hostgroup_get_with_members(&host.hostid)?;
    let group = smallest_group(groups).ok_or_else(|| Error::NoHostGroup(host.host.clone()))?;
    info!(
        group = %group.name,
        members = group.hosts.len(),
        "selected smallest host group"
    );
    Ok(Target::HostGroup {
        groupid: group.groupid,
        name: group.name,
    })
}
