//! Scripted transport shared by the integration tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use smartsheet_sdk::{ApiRequest, ApiResponse, SmartsheetClient, Transport, TransportError};

/// Answers requests from a queue of canned responses and records what was sent
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn client(self: &Arc<Self>) -> SmartsheetClient {
        SmartsheetClient::from_shared(Arc::clone(self) as Arc<dyn Transport>)
    }

    pub fn respond(&self, value: serde_json::Value) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse::ok_json(&value)));
    }

    pub fn fail(&self, error: TransportError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for ScriptedTransport {
    fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Connection("no response scripted".to_string())))
    }
}

/// Sheet with an Address, a Level marker and a Status column
pub fn sites_sheet() -> serde_json::Value {
    serde_json::json!({
        "id": 1849449510135684_i64,
        "name": "Sites",
        "totalRowCount": 2,
        "workspace": {"id": 55, "name": "Facilities"},
        "columns": [
            {"id": 100, "index": 0, "title": "Address", "type": "TEXT_NUMBER", "primary": true},
            {"id": 101, "index": 1, "title": "Level", "type": "TEXT_NUMBER"},
            {"id": 102, "index": 2, "title": "Status", "type": "PICKLIST", "options": ["Red", "Yellow", "Green"]}
        ],
        "rows": [
            {"id": 900, "rowNumber": 1, "cells": [
                {"columnId": 100, "value": "400 Ringo"},
                {"columnId": 101, "value": "0"},
                {"columnId": 102, "value": "Green"}
            ]},
            {"id": 901, "rowNumber": 2, "parentId": 900, "cells": [
                {"columnId": 100, "value": "Unit 1"},
                {"columnId": 101, "value": "1"}
            ]}
        ]
    })
}

/// Created row as echoed by an insert call
pub fn created_row(id: i64, address: &str, level: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "cells": [
            {"columnId": 100, "value": address},
            {"columnId": 101, "value": level}
        ]
    })
}

pub fn success(result: serde_json::Value) -> serde_json::Value {
    serde_json::json!({"message": "SUCCESS", "resultCode": 0, "result": result})
}
