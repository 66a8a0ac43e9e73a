/// Inference backend access
///
/// The backend is behind a trait so the submission workflows can be
/// exercised in tests with a fake, without a network. The real
/// implementation speaks multipart HTTP via reqwest.
use reqwest::multipart::{Form, Part};

use crate::config::PREDICT_ENDPOINT;
use crate::error::AppError;

use super::normalize::normalize_response;
use super::types::{
    ComparisonRequest, ComparisonResult, ImagePart, PredictionRequest, PredictionResult,
    RawCompareResponse,
};

/// The two operations the external inference service offers.
#[allow(async_fn_in_trait)]
pub trait InferenceBackend {
    async fn predict(&self, request: PredictionRequest) -> Result<PredictionResult, AppError>;

    async fn compare(&self, request: ComparisonRequest) -> Result<RawCompareResponse, AppError>;
}

/// Submit a validated comparison and fold the response into the display
/// shape. The only path by which a comparison reaches the network.
pub async fn submit_comparison<B: InferenceBackend>(
    backend: &B,
    request: ComparisonRequest,
) -> Result<ComparisonResult, AppError> {
    let raw = backend.compare(request).await?;
    Ok(normalize_response(raw))
}

/// Production backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new() -> Self {
        HttpBackend {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn multipart_image(image: ImagePart) -> Result<Part, AppError> {
    Part::bytes(image.bytes)
        .file_name(image.filename)
        .mime_str(image.mime)
        .map_err(|err| AppError::unexpected(err.to_string()))
}

impl InferenceBackend for HttpBackend {
    async fn predict(&self, request: PredictionRequest) -> Result<PredictionResult, AppError> {
        let form = Form::new().part("image", multipart_image(request.image)?);

        let response = self
            .client
            .post(PREDICT_ENDPOINT)
            .multipart(form)
            .send()
            .await
            .map_err(|err| {
                eprintln!("⚠️  Predict request failed: {err}");
                AppError::transport("Prediction failed")
            })?;

        if !response.status().is_success() {
            eprintln!("⚠️  Predict endpoint returned {}", response.status());
            return Err(AppError::transport("Prediction failed"));
        }

        response
            .json::<PredictionResult>()
            .await
            .map_err(|err| AppError::unexpected(err.to_string()))
    }

    async fn compare(&self, request: ComparisonRequest) -> Result<RawCompareResponse, AppError> {
        let ComparisonRequest { endpoint, images } = request;
        let [img1, img2, img3, img4] = images;

        let form = Form::new()
            .part("img1", multipart_image(img1)?)
            .part("img2", multipart_image(img2)?)
            .part("img3", multipart_image(img3)?)
            .part("img4", multipart_image(img4)?);

        let response = self
            .client
            .post(&endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|err| {
                eprintln!("⚠️  Compare request failed: {err}");
                AppError::transport("Comparison failed")
            })?;

        if !response.status().is_success() {
            eprintln!("⚠️  Compare endpoint returned {}", response.status());
            return Err(AppError::transport("Comparison failed"));
        }

        response
            .json::<RawCompareResponse>()
            .await
            .map_err(|err| AppError::unexpected(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Canned backend that counts how often it is hit.
    struct FakeBackend {
        compare_calls: AtomicUsize,
        response: RawCompareResponse,
    }

    impl FakeBackend {
        fn legacy(score1: f64, score2: f64) -> Self {
            FakeBackend {
                compare_calls: AtomicUsize::new(0),
                response: RawCompareResponse {
                    success: None,
                    timestamp: None,
                    pair1: None,
                    pair2: None,
                    pair1_similarity: Some(score1),
                    pair2_similarity: Some(score2),
                    analysis: None,
                    cross_comparison: None,
                    summary: None,
                },
            }
        }
    }

    impl InferenceBackend for FakeBackend {
        async fn predict(
            &self,
            _request: PredictionRequest,
        ) -> Result<PredictionResult, AppError> {
            Ok(PredictionResult {
                model1_prediction: Some("labrador".to_string()),
                model2_prediction: Some("golden retriever".to_string()),
            })
        }

        async fn compare(
            &self,
            _request: ComparisonRequest,
        ) -> Result<RawCompareResponse, AppError> {
            self.compare_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.response.clone())
        }
    }

    fn part(name: &str) -> ImagePart {
        ImagePart {
            filename: name.to_string(),
            bytes: vec![0x89, 0x50, 0x4E, 0x47],
            mime: "image/png",
        }
    }

    fn full_request() -> ComparisonRequest {
        let config = Config {
            api_base_url: Some("https://api.example.com".to_string()),
        };
        ComparisonRequest::new(
            &config,
            [
                Some(part("m1.png")),
                Some(part("f1.png")),
                Some(part("m2.png")),
                Some(part("f2.png")),
            ],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_submit_comparison_normalizes_legacy_response() {
        let backend = FakeBackend::legacy(0.97, 0.60);

        let result = submit_comparison(&backend, full_request()).await.unwrap();

        assert_eq!(backend.compare_calls.load(Ordering::SeqCst), 1);
        assert_eq!(result.pair1.match_status, "Excellent");
        assert_eq!(result.pair2.match_status, "Low");
        assert_eq!(result.summary.unwrap().overall_confidence, "Very High");
    }

    #[tokio::test]
    async fn test_invalid_submission_never_reaches_the_backend() {
        let backend = FakeBackend::legacy(0.5, 0.5);
        let config = Config {
            api_base_url: Some("https://api.example.com".to_string()),
        };

        // Three slots filled: request construction fails, so there is
        // nothing to hand to the backend at all.
        let request = ComparisonRequest::new(
            &config,
            [Some(part("m1.png")), Some(part("f1.png")), Some(part("m2.png")), None],
        );

        assert!(request.is_err());
        assert_eq!(backend.compare_calls.load(Ordering::SeqCst), 0);
    }
}
