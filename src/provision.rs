//! Assistant provisioning: one remote create call, optionally recorded locally.

use crate::error::ProvisionError;
use crate::openai::AssistantApi;
use crate::registry::Registry;
use crate::types::{AssistantRecord, AssistantSpec};
use anyhow::Context;
use std::path::Path;
use tracing::{error, info, warn};

/// Result of [`Provisioner::create_or_replace`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub record: AssistantRecord,
    /// Identifier previously registered under the label. It still exists on
    /// the remote service.
    pub previous: Option<String>,
}

/// Creates assistants through an [`AssistantApi`].
pub struct Provisioner<A> {
    api: A,
}

impl<A: AssistantApi> Provisioner<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Validate `spec` and create it remotely. No retry is attempted.
    ///
    /// Not idempotent: each call creates a new remote assistant.
    pub async fn provision(&self, spec: &AssistantSpec) -> Result<AssistantRecord, ProvisionError> {
        spec.validate()?;

        let record = self.api.create_assistant(spec).await?;
        if record.id.is_empty() {
            return Err(ProvisionError::Decode("assistant response has no id".into()));
        }

        info!("Created assistant '{}' -> {}", spec.name, record.id);
        Ok(record)
    }

    /// Create a new assistant and point `label` at it in `registry`.
    ///
    /// The registry is only changed in memory; the caller saves it.
    pub async fn create_or_replace(
        &self,
        label: &str,
        spec: &AssistantSpec,
        registry: &mut Registry,
    ) -> Result<Replacement, ProvisionError> {
        let record = self.provision(spec).await?;
        let previous = registry.insert(label, record.id.clone());

        if let Some(old) = &previous {
            warn!(
                "Label '{}' was registered to {}; that assistant is superseded but not deleted",
                label, old
            );
        }

        Ok(Replacement { record, previous })
    }

    /// Load the registry at `registry_path`, create the assistant, point
    /// `label` at it and write the registry back.
    ///
    /// The registry is read before the remote call, so an unreadable or
    /// malformed file stops the run without creating anything upstream. A
    /// failed save after a successful create leaves the new assistant
    /// unrecorded; its id is logged and carried in the error.
    pub async fn provision_and_record(
        &self,
        label: &str,
        spec: &AssistantSpec,
        registry_path: &Path,
    ) -> anyhow::Result<Replacement> {
        let mut registry = Registry::load(registry_path)?;

        let replacement = self
            .create_or_replace(label, spec, &mut registry)
            .await
            .context("Failed to create assistant")?;

        if let Err(e) = registry.save(registry_path) {
            error!(
                "Assistant {} was created but could not be recorded; it is orphaned on the remote service",
                replacement.record.id
            );
            return Err(anyhow::Error::new(e)
                .context(format!("Assistant {} was not recorded", replacement.record.id)));
        }

        info!("Recorded {} -> {} in {:?}", label, replacement.record.id, registry_path);
        Ok(replacement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryError;
    use crate::instructions::math_tutor_spec;
    use crate::types::ToolDeclaration;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    /// Stub remote that hands out `asst_test{n}` ids.
    #[derive(Default)]
    struct StubApi {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl AssistantApi for StubApi {
        async fn create_assistant(
            &self,
            spec: &AssistantSpec,
        ) -> Result<AssistantRecord, ProvisionError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            let mut record = AssistantRecord::new(format!("asst_test{n}"));
            record.model = Some(spec.model.clone());
            Ok(record)
        }
    }

    struct FailingApi;

    #[async_trait]
    impl AssistantApi for FailingApi {
        async fn create_assistant(
            &self,
            _spec: &AssistantSpec,
        ) -> Result<AssistantRecord, ProvisionError> {
            Err(ProvisionError::Credential("OPENAI_API_KEY is not set".into()))
        }
    }

    fn spec() -> AssistantSpec {
        math_tutor_spec("Math Tutor And Weather Bot", "gpt-4-1106-preview")
    }

    #[tokio::test]
    async fn provision_returns_remote_record() {
        let provisioner = Provisioner::new(StubApi::default());
        let record = provisioner.provision(&spec()).await.unwrap();
        assert_eq!(record.id, "asst_test1");
        assert_eq!(record.model.as_deref(), Some("gpt-4-1106-preview"));
    }

    #[tokio::test]
    async fn invalid_spec_never_reaches_the_remote() {
        let api = StubApi::default();
        let provisioner = Provisioner::new(api);
        let mut bad = spec();
        bad.tools.push(bad.tools[1].clone());

        let err = provisioner.provision(&bad).await.unwrap_err();
        assert!(matches!(err, ProvisionError::Validation(ref e) if e.field == "tools"));
        assert_eq!(provisioner.api.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn remote_errors_propagate_unchanged() {
        let provisioner = Provisioner::new(FailingApi);
        let err = provisioner.provision(&spec()).await.unwrap_err();
        assert!(matches!(err, ProvisionError::Credential(_)));
    }

    #[tokio::test]
    async fn create_or_replace_reports_superseded_id() {
        let provisioner = Provisioner::new(StubApi::default());
        let mut registry = Registry::new();

        let first = provisioner
            .create_or_replace("bot", &spec(), &mut registry)
            .await
            .unwrap();
        assert_eq!(first.previous, None);

        let second = provisioner
            .create_or_replace("bot", &spec(), &mut registry)
            .await
            .unwrap();
        assert_eq!(second.record.id, "asst_test2");
        assert_eq!(second.previous.as_deref(), Some("asst_test1"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("bot"), Some("asst_test2"));
    }

    #[tokio::test]
    async fn code_interpreter_only_spec_is_accepted() {
        let provisioner = Provisioner::new(StubApi::default());
        let mut s = spec();
        s.tools = vec![ToolDeclaration::CodeInterpreter];
        assert!(provisioner.provision(&s).await.is_ok());
    }

    #[tokio::test]
    async fn malformed_registry_stops_before_remote_call() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("assistants.json");
        std::fs::write(&path, "{ truncated").unwrap();

        let provisioner = Provisioner::new(StubApi::default());
        let err = provisioner
            .provision_and_record("bot", &spec(), &path)
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<RegistryError>(),
            Some(RegistryError::Malformed { .. })
        ));
        assert_eq!(provisioner.api.calls.load(Ordering::SeqCst), 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ truncated");
    }

    #[tokio::test]
    async fn failed_save_after_create_is_an_error_naming_the_orphan() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("assistants.json");

        let provisioner = Provisioner::new(StubApi::default());
        let err = provisioner
            .provision_and_record("bot", &spec(), &path)
            .await
            .unwrap_err();

        assert_eq!(provisioner.api.calls.load(Ordering::SeqCst), 1);
        assert!(err.to_string().contains("asst_test1"));
        assert!(matches!(
            err.downcast_ref::<RegistryError>(),
            Some(RegistryError::Io { .. })
        ));
    }

    #[tokio::test]
    async fn provision_and_record_writes_the_registry() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("assistants.json");

        let provisioner = Provisioner::new(StubApi::default());
        let replacement = provisioner
            .provision_and_record("math_tutor_and_weather_bot", &spec(), &path)
            .await
            .unwrap();

        assert_eq!(replacement.record.id, "asst_test1");
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            r#"{"math_tutor_and_weather_bot": "asst_test1"}"#
        );
    }
}
