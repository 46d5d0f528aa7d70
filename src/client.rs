use crate::config::Config;
use crate::error::{Error, Result};
use crate::jsonrpc;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use std::cell::Cell;
use std::time::Duration;
use tracing::debug;

const TIMEOUT: Duration = Duration::from_secs(30);

pub struct ZabbixClient {
    url: Url,
    token: String,
    http: reqwest::blocking::Client,
    next_id: Cell<u64>,
}

impl ZabbixClient {
    pub fn new(config: &Config, allow_invalid_certs: bool) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .danger_accept_invalid_certs(allow_invalid_certs)
            .connect_timeout(TIMEOUT)
            .timeout(TIMEOUT)
            .build()?;
        Ok(ZabbixClient {
            url: config.api_url(),
            token: config.token.clone(),
            http,
            next_id: Cell::new(1),
        })
    }

    pub fn call<P, R>(&self, method: &str, params: P) -> Result<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        debug!(method, id, url = %self.url, "calling Zabbix API");

        let request = jsonrpc::Request {
            jsonrpc: jsonrpc::VERSION,
            method,
            params,
            id,
        };
        let response = self
            .http
            .post(self.url.clone())
            .bearer_auth(&self.token)
            .json(&request)
            .send()?
            .error_for_status()?;

        response.json::<jsonrpc::Response<R>>()?.into_result()
    }

    pub fn host_get(&self, name: &str) -> Result<Vec<jsonrpc::Host>> {
        self.call(
            "host.get",
            json!({
                "output": ["hostid", "host"],
                "filter": { "host": [name] },
            }),
        )
    }

    /// Groups containing `hostid`, each with its full member list.
    pub fn hostgroup_get_with_members(&self, hostid: &str) -> Result<Vec<jsonrpc::HostGroup>> {
        self.call(
            "hostgroup.get",
            json!({
                "output": ["groupid", "name"],
                "hostids": [hostid],
                "selectHosts": ["hostid"],
            }),
        )
    }

    pub fn maintenance_create(&self, params: &jsonrpc::MaintenanceCreate) -> Result<String> {
        let created: jsonrpc::MaintenanceIds = self.call("maintenance.create", params)?;
        created
            .maintenanceids
            .into_iter()
            .next()
            .ok_or_else(|| Error::MalformedResponse("no maintenance id returned".to_string()))
    }
}
