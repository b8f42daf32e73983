//! Table queries against the `/rest/v1` API.
//!
//! Filters follow the platform's query-string grammar: `col=eq.value`,
//! `col=in.(a,b)`, `order=col.desc`, `limit=n`, and `select=` with nested
//! relation expansion such as `*,teacher:teachers(name,email)`.

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Display;
use tracing::instrument;

use crate::client::{RemoteClient, send};
use crate::error::RemoteError;

const RETURN_REPRESENTATION: &str = "return=representation";

#[derive(Debug)]
pub struct Query<'a> {
    client: &'a RemoteClient,
    table: String,
    params: Vec<(String, String)>,
}

impl<'a> Query<'a> {
    pub(crate) fn new(client: &'a RemoteClient, table: String) -> Self {
        Self {
            client,
            table,
            params: Vec::new(),
        }
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.params.push(("select".into(), columns.into()));
        self
    }

    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.params.push((column.into(), format!("eq.{}", value)));
        self
    }

    /// Case-insensitive equality. Pattern characters in `value` match literally.
    pub fn eq_ignore_case(mut self, column: &str, value: &str) -> Self {
        let mut escaped = String::with_capacity(value.len());
        for c in value.chars() {
            if matches!(c, '\\' | '%' | '_') {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        self.params.push((column.into(), format!("ilike.{}", escaped)));
        self
    }

    /// Pattern match; `*` is the wildcard.
    pub fn like(mut self, column: &str, pattern: &str) -> Self {
        self.params.push((column.into(), format!("like.{}", pattern)));
        self
    }

    pub fn in_list<V: Display>(mut self, column: &str, values: &[V]) -> Self {
        let list = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.params.push((column.into(), format!("in.({})", list)));
        self
    }

    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        let direction = if ascending { "asc" } else { "desc" };
        self.params
            .push(("order".into(), format!("{}.{}", column, direction)));
        self
    }

    pub fn limit(mut self, count: usize) -> Self {
        self.params.push(("limit".into(), count.to_string()));
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    fn request(&self, method: Method) -> Result<reqwest::RequestBuilder, RemoteError> {
        let path = format!("/rest/v1/{}", self.table);
        Ok(self.client.request(method, &path)?.query(&self.params))
    }

    /// All matching rows.
    #[instrument(skip(self), fields(table = %self.table))]
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>, RemoteError> {
        let response = send(self.request(Method::GET)?).await?;
        Ok(response.json().await?)
    }

    /// First matching row, or [`RemoteError::NotFound`].
    pub async fn fetch_one<T: DeserializeOwned>(self) -> Result<T, RemoteError> {
        let table = self.table.clone();
        self.fetch_optional()
            .await?
            .ok_or(RemoteError::NotFound(table))
    }

    pub async fn fetch_optional<T: DeserializeOwned>(self) -> Result<Option<T>, RemoteError> {
        let rows: Vec<T> = self.limit(1).fetch().await?;
        Ok(rows.into_iter().next())
    }

    /// Inserts one row and returns it as stored, shaped by any `select`.
    #[instrument(skip(self, row), fields(table = %self.table))]
    pub async fn insert<B, T>(self, row: &B) -> Result<T, RemoteError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .request(Method::POST)?
            .header("Prefer", RETURN_REPRESENTATION)
            .json(row);
        let rows: Vec<T> = send(request).await?.json().await?;
        rows.into_iter().next().ok_or_else(|| RemoteError::Api {
            status: 500,
            message: format!("Insert into {} returned no row", self.table),
        })
    }

    /// Bulk insert in one request; rows come back as stored.
    #[instrument(skip(self, rows), fields(table = %self.table, rows = rows.len()))]
    pub async fn insert_many<B, T>(self, rows: &[B]) -> Result<Vec<T>, RemoteError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let request = self
            .request(Method::POST)?
            .header("Prefer", RETURN_REPRESENTATION)
            .json(rows);
        Ok(send(request).await?.json().await?)
    }

    /// Updates the filtered row and returns it. No match is [`RemoteError::NotFound`].
    #[instrument(skip(self, changes), fields(table = %self.table))]
    pub async fn update<B, T>(self, changes: &B) -> Result<T, RemoteError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .request(Method::PATCH)?
            .header("Prefer", RETURN_REPRESENTATION)
            .json(changes);
        let rows: Vec<T> = send(request).await?.json().await?;
        rows.into_iter()
            .next()
            .ok_or(RemoteError::NotFound(self.table))
    }

    /// Deletes the filtered rows. Deleting nothing is [`RemoteError::NotFound`].
    pub async fn delete(self) -> Result<(), RemoteError> {
        let table = self.table.clone();
        match self.delete_many().await? {
            0 => Err(RemoteError::NotFound(table)),
            _ => Ok(()),
        }
    }

    /// Deletes the filtered rows and returns how many went.
    #[instrument(skip(self), fields(table = %self.table))]
    pub async fn delete_many(self) -> Result<usize, RemoteError> {
        let request = self
            .request(Method::DELETE)?
            .header("Prefer", RETURN_REPRESENTATION);
        let rows: Vec<serde_json::Value> = send(request).await?.json().await?;
        Ok(rows.len())
    }
}
