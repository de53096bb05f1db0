pub mod client;

pub use client::{ProbeClient, ProbeResponse};
