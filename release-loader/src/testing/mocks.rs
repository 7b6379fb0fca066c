use crate::error::{LoaderError, Result};
use crate::traits::ReleaseSource;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

type FailureFactory = Arc<dyn Fn() -> LoaderError + Send + Sync>;

/// Mock release source for testing
#[derive(Clone)]
pub struct MockReleaseSource {
    pub body: String,
    failure: Option<FailureFactory>,
    calls: Arc<AtomicUsize>,
}

impl MockReleaseSource {
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            failure: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing<F>(failure: F) -> Self
    where
        F: Fn() -> LoaderError + Send + Sync + 'static,
    {
        Self {
            failure: Some(Arc::new(failure)),
            ..Self::with_body("")
        }
    }

    /// Number of fetches made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ReleaseSource for MockReleaseSource {
    async fn fetch_releases(&self) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(failure) => Err(failure()),
            None => Ok(self.body.clone()),
        }
    }

    fn describe(&self) -> String {
        "mock release source".to_string()
    }
}
