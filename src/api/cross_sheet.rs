//! Cross-sheet references

use crate::client::SmartsheetClient;
use crate::error::SmartsheetResult;
use crate::models::CrossSheetReference;
use crate::models::response::{IndexEnvelope, ResultEnvelope};
use crate::transport::ApiRequest;

impl SmartsheetClient {
    /// Create a named reference in `sheet_id` to a range of another sheet
    ///
    /// Formulas in `sheet_id` can then use `{name}` to read the range.
    pub fn create_cross_sheet_reference(
        &self,
        sheet_id: i64,
        reference: &CrossSheetReference,
    ) -> SmartsheetResult<CrossSheetReference> {
        let request = ApiRequest::post(format!("/sheets/{}/crosssheetreferences", sheet_id))
            .json(reference, "create cross-sheet reference")?;
        let envelope: ResultEnvelope<CrossSheetReference> =
            self.execute(request)?.json("create cross-sheet reference")?;
        tracing::info!(
            "Created cross-sheet reference '{}' in sheet {}",
            envelope.result.name,
            sheet_id
        );
        Ok(envelope.result)
    }

    /// References defined in a sheet
    pub fn list_cross_sheet_references(&self, sheet_id: i64) -> SmartsheetResult<Vec<CrossSheetReference>> {
        let request = ApiRequest::get(format!("/sheets/{}/crosssheetreferences", sheet_id));
        let index: IndexEnvelope<CrossSheetReference> =
            self.execute(request)?.json("list cross-sheet references")?;
        Ok(index.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::Method;
    use crate::transport::mock::MockTransport;

    #[test]
    fn test_create_reference() {
        let transport = MockTransport::new();
        transport.push_json(serde_json::json!({
            "message": "SUCCESS", "resultCode": 0,
            "result": {"id": 6, "name": "Rates", "sourceSheetId": 5, "startColumnId": 10, "endColumnId": 11, "status": "OK"}
        }));
        let client = transport.client();

        let created = client
            .create_cross_sheet_reference(1, &CrossSheetReference::columns("Rates", 5, 10, 11))
            .unwrap();
        assert_eq!(created.id, Some(6));
        assert_eq!(created.status.as_deref(), Some("OK"));

        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/sheets/1/crosssheetreferences");
        assert_eq!(request.json_body().unwrap()["sourceSheetId"], 5);
    }

    #[test]
    fn test_list_references() {
        let transport = MockTransport::new();
        transport.push_json(serde_json::json!({
            "pageNumber": 1, "totalCount": 2,
            "data": [
                {"id": 6, "name": "Rates", "sourceSheetId": 5, "startColumnId": 10, "endColumnId": 11},
                {"id": 7, "name": "Stock", "sourceSheetId": 8, "startColumnId": 1, "endColumnId": 1}
            ]
        }));
        let client = transport.client();

        let references = client.list_cross_sheet_references(1).unwrap();
        let names: Vec<_> = references.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Rates", "Stock"]);
    }
}
