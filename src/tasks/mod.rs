//! Task operations against the Taskhub backend
//!
//! Thin typed wrappers over the shared fetch helper, one per endpoint. The
//! access token, when stored, is attached to every call; an expired or
//! revoked token is simply rejected by the backend and surfaces as the
//! uniform API error.

mod types;

use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Error;
use crate::fetch::{Fetch, FetchBuilder};
use crate::session::SessionStore;

pub use types::*;

/// Client for task CRUD and filtering
pub struct TasksClient {
    /// The base URL for the backend
    url: String,

    /// HTTP client used for requests
    client: Client,

    /// The session store shared with the rest of the client
    store: Arc<dyn SessionStore>,
}

impl TasksClient {
    /// Create a new tasks client
    pub(crate) fn new(url: &str, client: Client, store: Arc<dyn SessionStore>) -> Self {
        Self {
            url: url.to_string(),
            client,
            store,
        }
    }

    fn tasks_url(&self, path: &str) -> String {
        format!("{}/api/tasks{}", self.url, path)
    }

    fn authorize<'a>(&self, builder: FetchBuilder<'a>) -> FetchBuilder<'a> {
        match self.store.access_token() {
            Some(token) => builder.bearer_auth(&token),
            None => builder,
        }
    }

    /// Create a new task
    pub async fn create(&self, task: TaskCreate) -> Result<Task, Error> {
        let url = self.tasks_url("");

        self.authorize(Fetch::post(&self.client, &url))
            .json(&task)?
            .execute::<Task>()
            .await
    }

    /// List the authenticated user's tasks, optionally filtered
    ///
    /// The aggregate counts in the response are returned as-is from the
    /// backend.
    pub async fn list(&self, filter: Option<TaskFilter>) -> Result<TaskListResponse, Error> {
        let url = self.tasks_url("");

        let mut builder = self.authorize(Fetch::get(&self.client, &url));
        if let Some(filter) = filter {
            let mut params = HashMap::new();
            params.insert("filter".to_string(), filter.as_str().to_string());
            builder = builder.query(params);
        }

        builder.execute::<TaskListResponse>().await
    }

    /// Get a single task by ID
    pub async fn get(&self, id: i64) -> Result<Task, Error> {
        let url = self.tasks_url(&format!("/{}", id));

        self.authorize(Fetch::get(&self.client, &url))
            .execute::<Task>()
            .await
    }

    /// Update an existing task
    pub async fn update(&self, id: i64, update: TaskUpdate) -> Result<Task, Error> {
        let url = self.tasks_url(&format!("/{}", id));

        self.authorize(Fetch::put(&self.client, &url))
            .json(&update)?
            .execute::<Task>()
            .await
    }

    /// Toggle a task's completion state
    pub async fn toggle_complete(&self, id: i64) -> Result<Task, Error> {
        let url = self.tasks_url(&format!("/{}/complete", id));

        self.authorize(Fetch::patch(&self.client, &url))
            .execute::<Task>()
            .await
    }

    /// Delete a task
    ///
    /// Goes through the shared request path like every other write, so a
    /// failed deletion surfaces the uniform API error rather than passing
    /// silently.
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        let url = self.tasks_url(&format!("/{}", id));

        self.authorize(Fetch::delete(&self.client, &url))
            .execute_empty()
            .await
    }
}
