use crate::error::Result;
use std::future::Future;

/// Trait for anything that can hand back the raw release-list payload
pub trait ReleaseSource: Send + Sync {
    /// Fetch the release list body; non-success responses are errors
    fn fetch_releases(&self) -> impl Future<Output = Result<String>> + Send;

    /// Where the releases come from, used in log events
    fn describe(&self) -> String;
}
