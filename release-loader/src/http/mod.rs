pub mod client;

pub use client::GitHubReleaseClient;
