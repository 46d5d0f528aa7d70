use crate::error::{Error, Result};
use crate::jsonrpc::{
    GroupId, HostId, MaintenanceCreate, MaintenanceType, TimePeriod, TIMEPERIOD_ONE_TIME_ONLY,
};
use crate::resolver::Target;
use chrono::{DateTime, TimeZone};
use std::convert::TryFrom;
use std::fmt::Display;
use std::num::NonZeroU64;

pub const DEFAULT_PERIOD: NonZeroU64 = match NonZeroU64::new(3600) {
    Some(period) => period,
    None => panic!("default period must be positive"),
};
pub const DEFAULT_USER: &str = "unknown user";

/// Zabbix stores `active_since` and `active_till` as signed 32-bit timestamps.
pub const MAX_TIMESTAMP: i64 = i32::MAX as i64;

/// Longest period that can still end inside the Zabbix timestamp range.
pub const MAX_PERIOD_SECS: u64 = MAX_TIMESTAMP as u64;

/// User supplied settings of a one-shot maintenance window.
#[derive(Debug, Clone)]
pub struct MaintenanceSpec {
    pub period: NonZeroU64,
    pub data_collection: bool,
    pub user: String,
}

impl Default for MaintenanceSpec {
    fn default() -> Self {
        MaintenanceSpec {
            period: DEFAULT_PERIOD,
            data_collection: true,
            user: String::from(DEFAULT_USER),
        }
    }
}

impl MaintenanceSpec {
    pub fn maintenance_type(&self) -> MaintenanceType {
        if self.data_collection {
            MaintenanceType::WithDataCollection
        } else {
            MaintenanceType::WithoutDataCollection
        }
    }

    /// Request parameters for a window of `period` seconds starting at `now`.
    pub fn build<Tz>(&self, target: &Target, now: DateTime<Tz>) -> Result<MaintenanceCreate>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let active_since = now.timestamp();
        let period = self.period.get();
        let active_till = i64::try_from(period)
            .ok()
            .and_then(|secs| active_since.checked_add(secs))
            .filter(|till| *till <= MAX_TIMESTAMP)
            .ok_or(Error::PeriodOutOfRange(period))?;
        let since = now.format("%Y-%m-%d %H:%M");

        let (name, hosts, groups) = match target {
            Target::Host { hostid, name } => (
                format!("Maintenance period for the host {} since {}", name, since),
                vec![HostId {
                    hostid: hostid.clone(),
                }],
                Vec::new(),
            ),
            Target::HostGroup { groupid, name } => (
                format!("Maintenance period for the hostgroup {} since {}", name, since),
                Vec::new(),
                vec![GroupId {
                    groupid: groupid.clone(),
                }],
            ),
        };

        Ok(MaintenanceCreate {
            name,
            active_since,
            active_till,
            hosts,
            groups,
            timeperiods: vec![TimePeriod {
                timeperiod_type: TIMEPERIOD_ONE_TIME_ONLY,
                start_date: active_since,
                period,
            }],
            maintenance_type: self.maintenance_type(),
            description: format!(
                "The maintenance period was created using set_maintenance by {}.",
                self.user
            ),
        })
    }
}
