use crate::error::Error;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

pub const VERSION: &str = "2.0";

#[derive(Debug, Serialize)]
pub struct Request<'a, P> {
    pub jsonrpc: &'static str,
    pub method: &'a str,
    pub params: P,
    pub id: u64,
}

#[derive(Debug, Deserialize)]
pub struct Response<R> {
    pub result: Option<R>,
    pub error: Option<RpcError>,
}

#[derive(PartialEq, Debug, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Value,
}

impl<R> Response<R> {
    pub fn into_result(self) -> Result<R, Error> {
        match (self.result, self.error) {
            (_, Some(error)) => Err(Error::Api {
                code: error.code,
                message: error.message,
                data: match error.data {
                    Value::String(text) => text,
                    Value::Null => String::new(),
                    other => other.to_string(),
                },
            }),
            (Some(result), None) => Ok(result),
            (None, None) => Err(Error::MalformedResponse(
                "neither result nor error present".to_string(),
            )),
        }
    }
}

#[derive(PartialEq, Debug, Clone, Deserialize, Serialize)]
pub struct HostId {
    pub hostid: String,
}

#[derive(PartialEq, Debug, Clone, Deserialize, Serialize)]
pub struct GroupId {
    pub groupid: String,
}

#[derive(PartialEq, Debug, Deserialize)]
pub struct Host {
    pub hostid: String,
    pub host: String,
}

#[derive(PartialEq, Debug, Deserialize)]
pub struct HostGroup {
    pub groupid: String,
    pub name: String,
    #[serde(default)]
    pub hosts: Vec<HostId>,
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum MaintenanceType {
    WithDataCollection = 0,
    WithoutDataCollection = 1,
}

impl Serialize for MaintenanceType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// Zabbix `timeperiod_type` for a window that runs once.
pub const TIMEPERIOD_ONE_TIME_ONLY: u8 = 0;

#[derive(PartialEq, Debug, Serialize)]
pub struct TimePeriod {
    pub timeperiod_type: u8,
    pub start_date: i64,
    pub period: u64,
}

/// Parameters of `maintenance.create`. Exactly one of `hosts` or `groups` is non-empty.
#[derive(PartialEq, Debug, Serialize)]
pub struct MaintenanceCreate {
    pub name: String,
    pub active_since: i64,
    pub active_till: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hosts: Vec<HostId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<GroupId>,
    pub timeperiods: Vec<TimePeriod>,
    pub maintenance_type: MaintenanceType,
    pub description: String,
}

#[derive(PartialEq, Debug, Deserialize)]
pub struct MaintenanceIds {
    pub maintenanceids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::{Host, HostGroup, HostId, MaintenanceIds, MaintenanceType, Response};
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn test_deserialize_host_result() {
        let data = r#"{"jsonrpc":"2.0","result":[{"hostid":"10084","host":"Zabbix server"}],"id":1}"#;
        let response: Response<Vec<Host>> = serde_json::from_str(data).unwrap();
        let hosts = response.into_result().unwrap();
        assert_eq!(
            hosts,
            vec![Host {
                hostid: String::from("10084"),
                host: String::from("Zabbix server"),
            }]
        );
    }

    #[test]
    fn test_deserialize_hostgroup_with_members() {
        let data = r#"[{"groupid":"4","name":"Zabbix servers","hosts":[{"hostid":"10084"},{"hostid":"10085"}]}]"#;
        let groups: Vec<HostGroup> = serde_json::from_str(data).unwrap();
        assert_eq!(groups[0].name, "Zabbix servers");
        assert_eq!(
            groups[0].hosts,
            vec![
                HostId {
                    hostid: String::from("10084")
                },
                HostId {
                    hostid: String::from("10085")
                },
            ]
        );
    }

    #[test]
    fn test_error_response_becomes_api_error() {
        let data = r#"{"jsonrpc":"2.0","error":{"code":-32602,"message":"Invalid params.","data":"Not authorized."},"id":1}"#;
        let response: Response<MaintenanceIds> = serde_json::from_str(data).unwrap();
        match response.into_result() {
            Err(Error::Api {
                code,
                message,
                data,
            }) => {
                assert_eq!(code, -32602);
                assert_eq!(message, "Invalid params.");
                assert_eq!(data, "Not authorized.");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_empty_response_is_malformed() {
        let response: Response<MaintenanceIds> =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":1}"#).unwrap();
        assert!(matches!(
            response.into_result(),
            Err(Error::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_serialize_maintenance_type() {
        assert_eq!(
            serde_json::to_value(MaintenanceType::WithDataCollection).unwrap(),
            json!(0)
        );
        assert_eq!(
            serde_json::to_value(MaintenanceType::WithoutDataCollection).unwrap(),
            json!(1)
        );
    }
}
