use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use crate::error::{Error, Result};
use crate::model::task::Task;
use crate::repository::traits::TaskRepository;

pub const ATTR_TASK_ID: &str = "TaskID";
pub const ATTR_TASK_NAME: &str = "Task Name";
pub const ATTR_TASK_DETAILS: &str = "Task Details";
pub const ATTR_COMPLETION_DATE: &str = "Completion Date";

pub type Item = HashMap<String, AttributeValue>;

#[derive(Clone)]
pub struct DynamoTaskRepository {
    client: Client,
    table_name: String,
}

impl DynamoTaskRepository {
    pub fn new(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }
}

pub fn task_to_item(task: &Task) -> Item {
    HashMap::from([
        (ATTR_TASK_ID.to_string(), AttributeValue::S(task.task_id.clone())),
        (ATTR_TASK_NAME.to_string(), AttributeValue::S(task.task_name.clone())),
        (ATTR_TASK_DETAILS.to_string(), AttributeValue::S(task.task_details.clone())),
        (
            ATTR_COMPLETION_DATE.to_string(),
            AttributeValue::S(task.completion_date.clone()),
        ),
    ])
}

pub fn task_from_item(item: &Item) -> Result<Task> {
    Ok(Task {
        task_id: string_attr(item, ATTR_TASK_ID)?,
        task_name: string_attr(item, ATTR_TASK_NAME)?,
        task_details: string_attr(item, ATTR_TASK_DETAILS)?,
        completion_date: string_attr(item, ATTR_COMPLETION_DATE)?,
    })
}

fn string_attr(item: &Item, attribute: &'static str) -> Result<String> {
    item.get(attribute)
        .and_then(|value| value.as_s().ok())
        .cloned()
        .ok_or(Error::MalformedItem { attribute })
}

impl TaskRepository for DynamoTaskRepository {
    async fn list(&self) -> Result<Vec<Task>> {
        let mut tasks = Vec::new();
        let mut start_key: Option<Item> = None;

        // Keep scanning until the service stops handing back a continuation key.
        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(aws_sdk_dynamodb::Error::from)?;

            for item in output.items() {
                tasks.push(task_from_item(item)?);
            }

            match output.last_evaluated_key() {
                Some(key) if !key.is_empty() => start_key = Some(key.clone()),
                _ => break,
            }
        }

        log::debug!("scanned {} tasks from {}", tasks.len(), self.table_name);
        Ok(tasks)
    }

    async fn put(&self, task: &Task) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(task_to_item(task)))
            .send()
            .await
            .map_err(aws_sdk_dynamodb::Error::from)?;
        log::debug!("put task {} into {}", task.task_id, self.table_name);
        Ok(())
    }

    async fn delete(&self, task_id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(ATTR_TASK_ID, AttributeValue::S(task_id.to_string()))
            .send()
            .await
            .map_err(aws_sdk_dynamodb::Error::from)?;
        log::debug!("deleted task {task_id} from {}", self.table_name);
        Ok(())
    }
}
