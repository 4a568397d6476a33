mod client;
mod credentials;
pub mod xml;

pub use client::TerminologyClient;
pub use credentials::{CredentialStore, Credentials, EnvCredentialStore, StaticCredentialStore};
pub use xml::{SegmentResponse, Segments};
