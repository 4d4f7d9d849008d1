use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;

/// Browser-facing background-removal request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveBackgroundRequest {
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveBackgroundResponse {
    pub image_url: String,
}

/// Body forwarded to the provider's prediction endpoint.
#[derive(Debug, Serialize)]
pub struct PredictionRequest {
    pub version: String,
    pub input: PredictionInput,
}

#[derive(Debug, Serialize)]
pub struct PredictionInput {
    pub image: String,
}

/// Provider prediction result. `output` is a URL string or an array of
/// URLs depending on the model version; both shapes occur in the wild.
#[derive(Debug, Deserialize)]
pub struct PredictionResponse {
    pub output: Option<Value>,
    pub error: Option<String>,
}

impl PredictionResponse {
    /// Transport success does not imply content success: a prediction
    /// without an output image is a failure.
    pub fn into_output(self) -> Result<String, AppError> {
        if let Some(err) = self.error.filter(|e| !e.is_empty()) {
            return Err(AppError::Processing(format!(
                "provider reported a prediction error: {}",
                err
            )));
        }

        let missing = || AppError::Processing("provider response contained no output image".into());

        match self.output.ok_or_else(missing)? {
            Value::String(url) if !url.is_empty() => Ok(url),
            Value::Array(items) => items
                .into_iter()
                .find_map(|v| v.as_str().map(str::to_owned))
                .ok_or_else(missing),
            _ => Err(missing()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> PredictionResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn string_output_is_accepted() {
        let out = parse(r#"{"output":"https://cdn/cut.png"}"#).into_output().unwrap();
        assert_eq!(out, "https://cdn/cut.png");
    }

    #[test]
    fn array_output_takes_the_first_url() {
        let out = parse(r#"{"output":["https://cdn/a.png","https://cdn/b.png"]}"#)
            .into_output()
            .unwrap();
        assert_eq!(out, "https://cdn/a.png");
    }

    #[test]
    fn missing_output_is_a_processing_error() {
        let err = parse(r#"{"status":"succeeded"}"#).into_output().unwrap_err();
        assert!(matches!(err, AppError::Processing(_)));
    }

    #[test]
    fn empty_or_malformed_output_is_a_processing_error() {
        assert!(parse(r#"{"output":""}"#).into_output().is_err());
        assert!(parse(r#"{"output":[]}"#).into_output().is_err());
        assert!(parse(r#"{"output":{"not":"a url"}}"#).into_output().is_err());
    }

    #[test]
    fn provider_error_field_wins_over_output() {
        let err = parse(r#"{"output":"https://cdn/x.png","error":"NSFW content"}"#)
            .into_output()
            .unwrap_err();
        assert!(err.to_string().contains("NSFW content"));
    }
}
