//! 平台抽象 Trait

mod credential_store;

pub use credential_store::{API_KEY_FIELD, CredentialStore, InMemoryCredentialStore};
