use serde::Serialize;

use crate::error::BridgeError;

/// Normalised outcome of a bridge action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionResult<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ActionResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    pub fn into_result(self) -> Result<Option<T>, String> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.data),
        }
    }
}

impl ActionResult<()> {
    /// Success without a payload (`{"success": true}`).
    pub fn done() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
        }
    }

    /// Like the `From` conversion, but a unit success carries no `data`.
    pub fn from_unit(result: Result<(), BridgeError>) -> Self {
        match result {
            Ok(()) => ActionResult::done(),
            Err(err) => ActionResult::failed(err.to_string()),
        }
    }
}

impl<T> From<Result<T, BridgeError>> for ActionResult<T> {
    fn from(result: Result<T, BridgeError>) -> Self {
        match result {
            Ok(data) => ActionResult::ok(data),
            Err(err) => ActionResult::failed(err.to_string()),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::Collection;

    #[test]
    fn success_omits_error() {
        let json = serde_json::to_value(ActionResult::ok(vec![1, 2])).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true, "data": [1, 2] }));
    }

    #[test]
    fn unit_success_has_no_data() {
        let json = serde_json::to_value(ActionResult::from_unit(Ok(()))).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true }));
    }

    #[test]
    fn api_error_is_formatted_with_status_and_body() {
        let result: ActionResult<()> = ActionResult::from_unit(Err(BridgeError::Api {
            status: 400,
            body: r#"{"error":"Question and answer are required"}"#.to_string(),
        }));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "error": r#"API Error: 400 - {"error":"Question and answer are required"}"#,
            })
        );
    }

    #[test]
    fn not_reorderable_message() {
        let err = BridgeError::NotReorderable {
            collection: Collection::Banners,
        };
        assert_eq!(err.to_string(), "banners cannot be reordered");
    }
}
