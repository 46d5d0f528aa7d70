use crate::error::Error;
use crate::resolver::Target;
use tracing::{error, info};

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum ExitCode {
    Ok = 0,
    Usage = 1,
    Config = 2,
    Resolution = 3,
    Api = 4,
}

/// A maintenance period that was accepted by the API.
#[derive(Debug)]
pub struct Created {
    pub maintenanceid: String,
    pub target: Target,
}

pub trait Termination {
    fn exitcode(&self) -> ExitCode;

    fn report(&self);
}

impl Termination for Created {
    fn exitcode(&self) -> ExitCode {
        ExitCode::Ok
    }

    fn report(&self) {
        info!(
            maintenanceid = %self.maintenanceid,
            "the maintenance period for the {} was successfully created",
            self.target
        );
        println!("{}", self.maintenanceid);
    }
}

impl Termination for Error {
    fn exitcode(&self) -> ExitCode {
        match self {
            Error::PeriodOutOfRange(_) => ExitCode::Usage,
            Error::Config(_) => ExitCode::Config,
            Error::HostNotFound(_) | Error::AmbiguousHost { .. } | Error::NoHostGroup(_) => {
                ExitCode::Resolution
            }
            Error::Api { .. } | Error::Http(_) | Error::MalformedResponse(_) => ExitCode::Api,
        }
    }

    fn report(&self) {
        error!("failed to create the maintenance period: {}", self);
    }
}

pub fn terminate<T, E>(result: Result<T, E>) -> !
where
    T: Termination,
    E: Termination,
{
    let code = match result {
        Ok(termination) => {
            termination.report();
            termination.exitcode()
        }
        Err(termination) => {
            termination.report();
            termination.exitcode()
        }
    };
    std::process::exit(code as i32);
}

#[cfg(test)]
mod tests {
    use super::{ExitCode, Termination};
    use crate::config::ConfigError;
    use crate::error::Error;

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(
            Error::from(ConfigError::MissingKey("TOKEN_AUTH")).exitcode(),
            ExitCode::Config
        );
        assert_eq!(
            Error::PeriodOutOfRange(u64::MAX).exitcode(),
            ExitCode::Usage
        );
        assert_eq!(
            Error::HostNotFound(String::from("ghost")).exitcode(),
            ExitCode::Resolution
        );
        assert_eq!(
            Error::MalformedResponse(String::new()).exitcode(),
            ExitCode::Api
        );
        assert_ne!(
            Error::NoHostGroup(String::from("web01")).exitcode() as i32,
            0
        );
    }
}
