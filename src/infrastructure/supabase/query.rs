use reqwest::header::{HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::client::{error_for_status, SupabaseClient, SupabaseError};

const PREFER: &str = "Prefer";
const RETURN_MINIMAL: &str = "return=minimal";
const RETURN_REPRESENTATION: &str = "return=representation";
/// PostgREST media type for a single-object (exactly one row) response.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Entry point for one table's reads and writes.
pub struct TableQuery<'a> {
    client: &'a SupabaseClient,
    table: &'a str,
}

impl<'a> TableQuery<'a> {
    pub(crate) fn new(client: &'a SupabaseClient, table: &'a str) -> Self {
        TableQuery { client, table }
    }

    /// Read rows. `columns` uses PostgREST select syntax, including embedded
    /// resources, e.g. `"id, title, project_tech_stacks (skill_id, skills (id, skill))"`.
    pub fn select(self, columns: &str) -> SelectQuery<'a> {
        SelectQuery {
            client: self.client,
            table: self.table,
            columns: columns.to_string(),
            order: None,
            filters: Vec::new(),
        }
    }

    pub fn insert<P: Serialize>(self, payload: &P) -> InsertQuery<'a> {
        InsertQuery {
            client: self.client,
            table: self.table,
            body: serde_json::to_value(payload),
            returning: None,
        }
    }

    pub fn update<P: Serialize>(self, payload: &P) -> UpdateQuery<'a> {
        UpdateQuery {
            client: self.client,
            table: self.table,
            body: serde_json::to_value(payload),
            filters: Vec::new(),
        }
    }

    pub fn delete(self) -> DeleteQuery<'a> {
        DeleteQuery {
            client: self.client,
            table: self.table,
            filters: Vec::new(),
        }
    }
}

pub struct SelectQuery<'a> {
    client: &'a SupabaseClient,
    table: &'a str,
    columns: String,
    order: Option<(String, bool)>,
    filters: Vec<(String, String)>,
}

impl<'a> SelectQuery<'a> {
    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        self.order = Some((column.to_string(), ascending));
        self
    }

    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", value.to_string())));
        self
    }

    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>, SupabaseError> {
        let mut params: Vec<(String, String)> = vec![("select".to_string(), self.columns)];
        if let Some((column, ascending)) = self.order {
            let direction = if ascending { "asc" } else { "desc" };
            params.push(("order".to_string(), format!("{column}.{direction}")));
        }
        params.extend(self.filters);

        let response = self.client.http
            .get(format!("{}/{}", self.client.rest_base, self.table))
            .query(&params)
            .send()
            .await
            .map_err(|e| SupabaseError::Transport(e.to_string()))?;

        error_for_status(response)
            .await?
            .json::<Vec<T>>()
            .await
            .map_err(|e| SupabaseError::Decode(e.to_string()))
    }
}

pub struct InsertQuery<'a> {
    client: &'a SupabaseClient,
    table: &'a str,
    body: Result<Value, serde_json::Error>,
    returning: Option<&'a str>,
}

impl<'a> InsertQuery<'a> {
    /// Columns to return from `single`; defaults to every column.
    pub fn returning(mut self, columns: &'a str) -> Self {
        self.returning = Some(columns);
        self
    }

    /// Insert and discard the response body.
    pub async fn execute(self) -> Result<(), SupabaseError> {
        let body = self.body.map_err(|e| SupabaseError::Serialize(e.to_string()))?;

        let response = self.client.http
            .post(format!("{}/{}", self.client.rest_base, self.table))
            .header(PREFER, RETURN_MINIMAL)
            .json(&body)
            .send()
            .await
            .map_err(|e| SupabaseError::Transport(e.to_string()))?;

        error_for_status(response).await.map(|_| ())
    }

    /// Insert and return the inserted row as a single object.
    pub async fn single<T: DeserializeOwned>(self) -> Result<T, SupabaseError> {
        let body = self.body.map_err(|e| SupabaseError::Serialize(e.to_string()))?;
        let columns = self.returning.unwrap_or("*");

        let response = self.client.http
            .post(format!("{}/{}", self.client.rest_base, self.table))
            .header(PREFER, RETURN_REPRESENTATION)
            .header(ACCEPT, HeaderValue::from_static(SINGLE_OBJECT))
            .query(&[("select", columns)])
            .json(&body)
            .send()
            .await
            .map_err(|e| SupabaseError::Transport(e.to_string()))?;

        error_for_status(response)
            .await?
            .json::<T>()
            .await
            .map_err(|e| SupabaseError::Decode(e.to_string()))
    }
}

pub struct UpdateQuery<'a> {
    client: &'a SupabaseClient,
    table: &'a str,
    body: Result<Value, serde_json::Error>,
    filters: Vec<(String, String)>,
}

impl<'a> UpdateQuery<'a> {
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", value.to_string())));
        self
    }

    pub async fn execute(self) -> Result<(), SupabaseError> {
        if self.filters.is_empty() {
            return Err(SupabaseError::MissingFilter("update"));
        }
        let body = self.body.map_err(|e| SupabaseError::Serialize(e.to_string()))?;

        let response = self.client.http
            .patch(format!("{}/{}", self.client.rest_base, self.table))
            .header(PREFER, RETURN_MINIMAL)
            .query(&self.filters)
            .json(&body)
            .send()
            .await
            .map_err(|e| SupabaseError::Transport(e.to_string()))?;

        error_for_status(response).await.map(|_| ())
    }
}

pub struct DeleteQuery<'a> {
    client: &'a SupabaseClient,
    table: &'a str,
    filters: Vec<(String, String)>,
}

impl<'a> DeleteQuery<'a> {
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", value.to_string())));
        self
    }

    pub async fn execute(self) -> Result<(), SupabaseError> {
        if self.filters.is_empty() {
            return Err(SupabaseError::MissingFilter("delete"));
        }

        let response = self.client.http
            .delete(format!("{}/{}", self.client.rest_base, self.table))
            .header(PREFER, RETURN_MINIMAL)
            .query(&self.filters)
            .send()
            .await
            .map_err(|e| SupabaseError::Transport(e.to_string()))?;

        error_for_status(response).await.map(|_| ())
    }
}
