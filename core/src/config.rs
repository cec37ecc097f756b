use clap::Args;

pub const DEFAULT_REGION: &str = "eu-west-2";
pub const DEFAULT_TABLE: &str = "Task-Tracker";

/// Where the tasks live and how to authenticate against them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub region: String,
    pub table_name: String,
    pub credentials: Option<ParameterNames>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            table_name: DEFAULT_TABLE.to_string(),
            credentials: None,
        }
    }
}

/// Names of the two parameter store entries holding the access key pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterNames {
    pub access_key_id: String,
    pub secret_access_key: String,
}

/// Store options shared by the command-line and web binaries.
#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// AWS region hosting the table
    #[arg(long, env = "TASK_TRACKER_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// DynamoDB table holding the tasks
    #[arg(long = "table", env = "TASK_TRACKER_TABLE", default_value = DEFAULT_TABLE)]
    pub table_name: String,

    /// Parameter store name of the access key id
    #[arg(long, env = "TASK_TRACKER_ACCESS_KEY_PARAM", requires = "secret_key_param")]
    pub access_key_param: Option<String>,

    /// Parameter store name of the secret access key
    #[arg(long, env = "TASK_TRACKER_SECRET_KEY_PARAM", requires = "access_key_param")]
    pub secret_key_param: Option<String>,
}

impl StoreArgs {
    pub fn into_config(self) -> StoreConfig {
        let credentials = match (self.access_key_param, self.secret_key_param) {
            (Some(access_key_id), Some(secret_access_key)) => Some(ParameterNames {
                access_key_id,
                secret_access_key,
            }),
            _ => None,
        };
        StoreConfig {
            region: self.region,
            table_name: self.table_name,
            credentials,
        }
    }
}
