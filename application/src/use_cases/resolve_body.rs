//! Resolve Body use case.
//!
//! The generation fallback policy: ask the generator for a reply body at
//! most once, and turn every failure into an [`UnavailableReason`] instead
//! of an error. Callers supply their own fallback text.

use crate::config::RoutingParams;
use crate::ports::text_generator::{GenerationError, TextGenerator};
use drlegal_domain::{AreaClassifier, GenerationOutcome, GenerationRequest, Lexicon, UnavailableReason};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Use case for obtaining a generated reply body.
#[derive(Clone)]
pub struct ResolveBodyUseCase {
    generator: Arc<dyn TextGenerator>,
    lexicon: Arc<Lexicon>,
    params: RoutingParams,
}

impl ResolveBodyUseCase {
    pub fn new(generator: Arc<dyn TextGenerator>, lexicon: Arc<Lexicon>) -> Self {
        Self {
            generator,
            lexicon,
            params: RoutingParams::default(),
        }
    }

    pub fn with_params(mut self, params: RoutingParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &RoutingParams {
        &self.params
    }

    /// Resolve a body for `text`.
    ///
    /// 1. No credential: `Unavailable(MissingCredential)`, generator untouched
    /// 2. One call bounded by `params.timeout`, no retries
    /// 3. Transport/status/timeout failures: `Unavailable(TransportError)`
    /// 4. Unreadable or blank payload: `Unavailable(MalformedResponse)`
    /// 5. Otherwise `Success` with the trimmed body and the classified area
    pub async fn execute(&self, text: &str) -> GenerationOutcome {
        if !self.generator.has_credential() {
            error!("Generator credential not configured; skipping generation");
            return GenerationOutcome::Unavailable(UnavailableReason::MissingCredential);
        }

        let request = GenerationRequest::new(text);
        debug!(
            "Requesting generation (max_tokens={}, temperature={})",
            self.params.max_tokens, self.params.temperature
        );

        let call = self.generator.generate(&request, self.params.sampling());
        let result = match tokio::time::timeout(self.params.timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(GenerationError::Timeout),
        };

        match result {
            Ok(body) => {
                let body = body.trim();
                if body.is_empty() {
                    warn!("Generator returned an empty body");
                    return GenerationOutcome::Unavailable(UnavailableReason::MalformedResponse);
                }
                let area = AreaClassifier::new(&self.lexicon).classify(text);
                info!("Generated reply for area {}", area);
                GenerationOutcome::Success {
                    body: body.to_string(),
                    area,
                }
            }
            Err(e) => {
                error!("Generator call failed: {}", e);
                GenerationOutcome::Unavailable(e.unavailable_reason())
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ports::text_generator::SamplingParams;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    // ==================== Test Mocks ====================

    pub(crate) enum StubBehavior {
        Reply(String),
        Fail(fn() -> GenerationError),
        Hang,
    }

    pub(crate) struct StubGenerator {
        credential: bool,
        behavior: StubBehavior,
        pub calls: AtomicUsize,
        pub last_params: Mutex<Option<SamplingParams>>,
    }

    impl StubGenerator {
        pub(crate) fn replying(text: &str) -> Self {
            Self::with(true, StubBehavior::Reply(text.to_string()))
        }

        pub(crate) fn failing(err: fn() -> GenerationError) -> Self {
            Self::with(true, StubBehavior::Fail(err))
        }

        pub(crate) fn without_credential() -> Self {
            Self::with(false, StubBehavior::Reply("should not be used".to_string()))
        }

        pub(crate) fn hanging() -> Self {
            Self::with(true, StubBehavior::Hang)
        }

        fn with(credential: bool, behavior: StubBehavior) -> Self {
            Self {
                credential,
                behavior,
                calls: AtomicUsize::new(0),
                last_params: Mutex::new(None),
            }
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        fn has_credential(&self) -> bool {
            self.credential
        }

        async fn generate(
            &self,
            _request: &GenerationRequest,
            params: SamplingParams,
        ) -> Result<String, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_params.lock().unwrap() = Some(params);
            match &self.behavior {
                StubBehavior::Reply(text) => Ok(text.clone()),
                StubBehavior::Fail(err) => Err(err()),
                StubBehavior::Hang => {
                    tokio::time::sleep(Duration::from_secs(60)).await;
                    Ok("too late".to_string())
                }
            }
        }
    }

    fn use_case(generator: Arc<StubGenerator>) -> ResolveBodyUseCase {
        ResolveBodyUseCase::new(generator, Arc::new(Lexicon::standard().clone()))
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_missing_credential_never_calls_generator() {
        let generator = Arc::new(StubGenerator::without_credential());
        let outcome = use_case(generator.clone()).execute("Fui demitido").await;

        assert_eq!(
            outcome,
            GenerationOutcome::Unavailable(UnavailableReason::MissingCredential)
        );
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_success_trims_body_and_classifies() {
        let generator = Arc::new(StubGenerator::replying("  Você tem direito! Fale conosco.\n"));
        let outcome = use_case(generator.clone())
            .execute("Fui demitido sem justa causa, tenho direito a horas extras?")
            .await;

        match outcome {
            GenerationOutcome::Success { body, area } => {
                assert_eq!(body, "Você tem direito! Fale conosco.");
                assert_eq!(area.as_str(), "Direito Trabalhista");
            }
            other => panic!("Expected Success, got {:?}", other),
        }
        assert_eq!(generator.call_count(), 1);
    }

    #[tokio::test]
    async fn test_transport_error_is_single_attempt() {
        let generator = Arc::new(StubGenerator::failing(|| {
            GenerationError::ConnectionError("connection refused".to_string())
        }));
        let outcome = use_case(generator.clone()).execute("golpe").await;

        assert_eq!(outcome.unavailable_reason(), Some(UnavailableReason::TransportError));
        assert_eq!(generator.call_count(), 1);
    }

    #[tokio::test]
    async fn test_http_status_is_transport_error() {
        let generator = Arc::new(StubGenerator::failing(|| GenerationError::HttpStatus {
            status: 500,
            message: "internal".to_string(),
        }));
        let outcome = use_case(generator).execute("golpe").await;
        assert_eq!(outcome.unavailable_reason(), Some(UnavailableReason::TransportError));
    }

    #[tokio::test]
    async fn test_malformed_response() {
        let generator = Arc::new(StubGenerator::failing(|| {
            GenerationError::MalformedResponse("missing choices".to_string())
        }));
        let outcome = use_case(generator).execute("golpe").await;
        assert_eq!(
            outcome.unavailable_reason(),
            Some(UnavailableReason::MalformedResponse)
        );
    }

    #[tokio::test]
    async fn test_blank_body_is_malformed() {
        let generator = Arc::new(StubGenerator::replying("   "));
        let outcome = use_case(generator).execute("golpe").await;
        assert_eq!(
            outcome.unavailable_reason(),
            Some(UnavailableReason::MalformedResponse)
        );
    }

    #[tokio::test]
    async fn test_timeout_is_transport_error() {
        let generator = Arc::new(StubGenerator::hanging());
        let outcome = use_case(generator.clone())
            .with_params(RoutingParams::default().with_timeout(Duration::from_millis(20)))
            .execute("golpe")
            .await;

        assert_eq!(outcome.unavailable_reason(), Some(UnavailableReason::TransportError));
        assert_eq!(generator.call_count(), 1);
    }

    #[tokio::test]
    async fn test_sampling_params_are_forwarded() {
        let generator = Arc::new(StubGenerator::replying("ok"));
        use_case(generator.clone())
            .with_params(RoutingParams::default().with_max_tokens(50).with_temperature(0.2))
            .execute("golpe")
            .await;

        let params = generator.last_params.lock().unwrap().unwrap();
        assert_eq!(params.max_tokens, 50);
        assert!((params.temperature - 0.2).abs() < f32::EPSILON);
    }
}
