//! Raw dump of the live course table.

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::Value;
use tracing::{debug, error};
use yew::prelude::*;

use crate::components::{Layout, render_page};
use crate::error::StoreError;
use crate::store::{Row, StoreFactory};

pub const FETCH_FAILED_MESSAGE: &str = "Unable to load courses.";

/// Result of one listing render.
#[derive(Debug)]
pub enum ListingOutcome {
    /// Pretty-printed rows; `[]` for an empty table.
    Rows { count: usize, body: String },
    Failed(StoreError),
}

impl ListingOutcome {
    pub fn status(&self) -> StatusCode {
        match self {
            ListingOutcome::Rows { .. } => StatusCode::OK,
            ListingOutcome::Failed(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub async fn render_html(&self, year: i32) -> String {
        let body = match self {
            ListingOutcome::Rows { body, .. } => ListingBody::Rows(body.clone()),
            ListingOutcome::Failed(_) => ListingBody::Failed,
        };
        render_page::<ListingDocument>(ListingDocumentProps { body, year }).await
    }
}

/// What the listing page shows; the failure cause stays in the logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingBody {
    Rows(String),
    Failed,
}

#[derive(Properties, PartialEq)]
pub struct ListingDocumentProps {
    pub body: ListingBody,
    pub year: i32,
}

#[function_component(ListingDocument)]
pub fn listing_document(props: &ListingDocumentProps) -> Html {
    let content = match &props.body {
        ListingBody::Rows(rows) => html! { <pre>{ rows.clone() }</pre> },
        ListingBody::Failed => html! { <p class="error" role="alert">{ FETCH_FAILED_MESSAGE }</p> },
    };
    html! {
        <Layout title="Courses | UISyllabi" year={props.year}>
            <section class="listing">{ content }</section>
        </Layout>
    }
}

pub struct ListingPage {
    stores: Arc<dyn StoreFactory>,
    table: String,
}

impl ListingPage {
    pub fn new(stores: Arc<dyn StoreFactory>, table: impl Into<String>) -> Self {
        Self {
            stores,
            table: table.into(),
        }
    }

    /// One client acquisition and one read; failures are folded into the
    /// outcome.
    pub async fn render(&self) -> ListingOutcome {
        let fetched = self.fetch().await.and_then(|rows| {
            let count = rows.len();
            let body = serialize_rows(rows).map_err(StoreError::Encode)?;
            Ok((count, body))
        });
        match fetched {
            Ok((count, body)) => {
                debug!("fetched {} rows from {}", count, self.table);
                ListingOutcome::Rows { count, body }
            }
            Err(e) => {
                error!("failed to fetch {}: {}", self.table, e);
                ListingOutcome::Failed(e)
            }
        }
    }

    async fn fetch(&self) -> Result<Vec<Row>, StoreError> {
        let store = self.stores.connect().await?;
        store.fetch_all(&self.table).await
    }
}

/// Pretty JSON with object keys sorted at every depth.
pub fn serialize_rows(rows: Vec<Row>) -> Result<String, serde_json::Error> {
    let value = sorted(Value::Array(rows.into_iter().map(Value::Object).collect()));
    serde_json::to_string_pretty(&value)
}

fn sorted(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(entries.into_iter().map(|(k, v)| (k, sorted(v))).collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sorted).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn row(value: Value) -> Row {
        match value {
            Value::Object(map) => map,
            _ => panic!("row must be an object"),
        }
    }

    #[test]
    fn test_empty_rows() {
        assert_eq!(serialize_rows(Vec::new()).unwrap(), "[]");
    }

    #[test]
    fn test_single_course_exact_output() {
        let rows = vec![row(json!({
            "id": "chem-1110",
            "code": "CHEM:1110",
            "name": "Principles of Chemistry I",
            "department": "Chemistry",
            "lastUpdated": "2025-04-15"
        }))];

        let expected = r#"[
  {
    "code": "CHEM:1110",
    "department": "Chemistry",
    "id": "chem-1110",
    "lastUpdated": "2025-04-15",
    "name": "Principles of Chemistry I"
  }
]"#;
        assert_eq!(serialize_rows(rows).unwrap(), expected);
    }

    #[test]
    fn test_nested_keys_sorted() {
        let rows = vec![row(json!({"z": {"b": 1, "a": [ {"d": 0, "c": 0} ]}, "a": null}))];
        let out = serialize_rows(rows).unwrap();
        let a = out.find("\"a\": null").unwrap();
        let z = out.find("\"z\"").unwrap();
        assert!(a < z);
        assert!(out.find("\"c\"").unwrap() < out.find("\"d\"").unwrap());
    }

    #[tokio::test]
    async fn test_failed_page_hides_cause() {
        let outcome = ListingOutcome::Failed(StoreError::Status {
            status: 401,
            body: "secret detail".to_string(),
        });
        assert_eq!(outcome.status(), StatusCode::BAD_GATEWAY);
        let html = outcome.render_html(2025).await;
        assert!(html.contains(FETCH_FAILED_MESSAGE));
        assert!(html.contains("role=\"alert\""));
        assert!(!html.contains("secret detail"));
        assert!(!html.contains("<pre>"));
    }

    #[tokio::test]
    async fn test_encode_failure_is_not_an_empty_table() {
        let cause = serde_json::from_str::<Value>("{").unwrap_err();
        let outcome = ListingOutcome::Failed(StoreError::Encode(cause));
        assert_eq!(outcome.status(), StatusCode::BAD_GATEWAY);
        let html = outcome.render_html(2025).await;
        assert!(html.contains(FETCH_FAILED_MESSAGE));
        assert!(!html.contains("[]"));
    }

    #[tokio::test]
    async fn test_rows_are_escaped_in_pre() {
        let body = serialize_rows(vec![row(json!({"name": "<i>x</i>"}))]).unwrap();
        let html = ListingOutcome::Rows { count: 1, body }.render_html(2025).await;
        assert!(html.contains("<pre>"));
        assert!(html.contains("&lt;i&gt;x&lt;/i&gt;"));
        assert!(!html.contains("<i>x</i>"));
        assert!(html.contains("Courses | UISyllabi"));
    }
}
