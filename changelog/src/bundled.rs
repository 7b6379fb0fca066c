//! Changelog data shipped with the binary.
//!
//! This list is what readers see before a live fetch completes, and what
//! they keep seeing when the fetch fails.

use crate::types::{ChangeCategory, ChangelogEntry, Changes};
use once_cell::sync::Lazy;

/// Canonical page listing every published release
pub const RELEASES_PAGE_URL: &str = "https://github.com/yafatek/mxp-protocol/releases";

static BUNDLED_ENTRIES: Lazy<Vec<ChangelogEntry>> = Lazy::new(|| vec![initial_release()]);

fn bucket(category: ChangeCategory, items: &[&str]) -> (ChangeCategory, Vec<String>) {
    (category, items.iter().map(|item| (*item).to_string()).collect())
}

fn initial_release() -> ChangelogEntry {
    let changes: Changes = [
        bucket(
            ChangeCategory::Added,
            &[
                "Initial release of MXP Protocol",
                "Complete wire format specification (32-byte header, cache-aligned)",
                "11 message types (Register, Discover, Heartbeat, Call, Response, Event, Stream operations, Ack, Error)",
                "Zero-copy message encoding/decoding with XXHash3 checksums",
                "QUIC transport layer using Quinn",
                "Built-in distributed tracing (trace IDs in every message)",
                "Comprehensive test suite (14 passing tests)",
                "Performance benchmarks",
                "Example: ping-pong message exchange",
                "Full documentation and SPEC.md",
                "GitHub Actions CI/CD (tests, clippy, formatting, security audit)",
                "Automatic crates.io publishing on tag",
            ],
        ),
        bucket(
            ChangeCategory::Performance,
            &[
                "Message encode/decode: < 100μs (average ~14μs)",
                "Sub-millisecond latency target",
                "100K+ messages/sec throughput capacity",
            ],
        ),
        bucket(
            ChangeCategory::Documentation,
            &[
                "Complete README with protocol overview",
                "SPEC.md with detailed wire format",
                "API documentation with examples",
                "Contributing guidelines",
                "Code of Conduct",
            ],
        ),
    ]
    .into_iter()
    .collect();

    ChangelogEntry::new("0.1.0", "2025-11-01", changes)
        .expect("Bundled release date must be a valid calendar date")
        .with_link(format!("{RELEASES_PAGE_URL}/tag/v0.1.0"))
}

/// Returns a fresh copy of the bundled changelog, newest release first
#[must_use]
pub fn bundled_entries() -> Vec<ChangelogEntry> {
    BUNDLED_ENTRIES.clone()
}
