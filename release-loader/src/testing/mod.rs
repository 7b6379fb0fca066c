pub mod mocks;

pub use mocks::MockReleaseSource;
