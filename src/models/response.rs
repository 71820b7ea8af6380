//! Response envelopes

use serde::{Deserialize, Serialize};

use super::row::Row;

/// Envelope shared by most mutating endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResultEnvelope<T> {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub result_code: i64,
    pub result: T,
}

/// Envelope without a result payload (email, delete)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StatusEnvelope {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub result_code: i64,
}

/// Envelope of list endpoints
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct IndexEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// `result` of an insert: one object when a single row was sent, a list otherwise
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

/// Rows created or updated by a batch call, in submission order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    /// e.g. "SUCCESS"
    pub message: String,
    pub result_code: i64,
    pub rows: Vec<Row>,
}

impl BatchResult {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_ids(&self) -> Vec<i64> {
        self.rows.iter().map(|row| row.id).collect()
    }
}

impl From<ResultEnvelope<OneOrMany<Row>>> for BatchResult {
    fn from(envelope: ResultEnvelope<OneOrMany<Row>>) -> Self {
        Self {
            message: envelope.message,
            result_code: envelope.result_code,
            rows: envelope.result.into_vec(),
        }
    }
}

impl From<ResultEnvelope<Vec<Row>>> for BatchResult {
    fn from(envelope: ResultEnvelope<Vec<Row>>) -> Self {
        Self {
            message: envelope.message,
            result_code: envelope.result_code,
            rows: envelope.result,
        }
    }
}

/// Row created by a single-row insert
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SingleRowResult {
    pub message: String,
    pub result_code: i64,
    pub row: Row,
}

impl From<ResultEnvelope<Row>> for SingleRowResult {
    fn from(envelope: ResultEnvelope<Row>) -> Self {
        Self {
            message: envelope.message,
            result_code: envelope.result_code,
            row: envelope.result,
        }
    }
}
