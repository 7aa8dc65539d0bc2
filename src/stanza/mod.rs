//! Stanza catalogue: the Nomad job specification as entity definitions.
//!
//! Each submodule declares a family of stanzas. `declare` is the single
//! entry point the schema registry uses; the match is exhaustive so a new
//! `EntityKind` does not compile until it has a definition here.

mod docker;
mod job;
mod lifecycle;
mod placement;
mod task;

use crate::schema::{EntityDef, EntityKind, Instance, ValidationError, construct_value};
use serde_json::Value;

pub(crate) fn declare(kind: EntityKind) -> EntityDef {
    match kind {
        EntityKind::Job => job::job(),
        EntityKind::Group => job::group(),
        EntityKind::Task => job::task(),
        EntityKind::Artifact => task::artifact(),
        EntityKind::Affinity => placement::affinity(),
        EntityKind::CheckRestart => task::check_restart(),
        EntityKind::Check => task::check(),
        EntityKind::Constraint => placement::constraint(),
        EntityKind::Device => task::device(),
        EntityKind::DispatchPayload => task::dispatch_payload(),
        EntityKind::EphemeralDisk => lifecycle::ephemeral_disk(),
        EntityKind::Logs => task::logs(),
        EntityKind::Migrate => lifecycle::migrate(),
        EntityKind::NetworkPort => task::network_port(),
        EntityKind::Network => task::network(),
        EntityKind::Parameterized => lifecycle::parameterized(),
        EntityKind::Periodic => lifecycle::periodic(),
        EntityKind::Reschedule => lifecycle::reschedule(),
        EntityKind::Resources => task::resources(),
        EntityKind::Restart => lifecycle::restart(),
        EntityKind::Service => task::service(),
        EntityKind::SpreadTarget => placement::spread_target(),
        EntityKind::Spread => placement::spread(),
        EntityKind::Template => task::template(),
        EntityKind::Update => lifecycle::update(),
        EntityKind::Vault => task::vault(),
        EntityKind::DockerMount => docker::docker_mount(),
        EntityKind::DockerDevice => docker::docker_device(),
        EntityKind::DockerConfigAuth => docker::docker_config_auth(),
        EntityKind::DockerConfigLogging => docker::docker_config_logging(),
        EntityKind::DockerConfig => docker::docker_config(),
    }
}

/// A validated job: the only thing the serializer accepts as a root.
#[derive(Debug, Clone, PartialEq)]
pub struct Job(Instance);

impl Job {
    pub fn from_value(raw: &Value) -> Result<Self, ValidationError> {
        construct_value(EntityKind::Job, raw).map(Job)
    }

    /// Parse JSON text and validate it. JSON syntax errors surface via anyhow.
    pub fn from_json_str(text: &str) -> crate::Result<Self> {
        let raw: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(&raw)?)
    }

    pub fn id(&self) -> &str {
        self.0.id().unwrap_or_default()
    }

    pub fn instance(&self) -> &Instance {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AttrValue, Literal};
    use serde_json::json;

    #[test]
    fn job_from_json_applies_defaults() {
        let job = Job::from_json_str(r#"{ "id": "web", "datacenters": ["dc1"], "group": [] }"#).unwrap();
        assert_eq!(job.id(), "web");
        assert_eq!(job.instance().literal("type"), Some(&Literal::from("service")));
        assert_eq!(job.instance().literal("region"), Some(&Literal::from("global")));
        assert_eq!(job.instance().literal("priority"), Some(&Literal::Integer(50)));
        assert_eq!(job.instance().get("group"), Some(&AttrValue::Entities(vec![])));
    }

    #[test]
    fn job_requires_datacenters_and_groups() {
        assert!(Job::from_value(&json!({ "id": "web", "group": [] })).is_err());
        assert!(Job::from_value(&json!({ "id": "web", "datacenters": [] })).is_err());
        assert!(Job::from_json_str("{ not json").is_err());
    }

    #[test]
    fn job_type_is_enumerated() {
        let raw = json!({ "id": "web", "type": "daemon", "datacenters": ["dc1"], "group": [] });
        let err = Job::from_value(&raw).unwrap_err();
        assert!(matches!(err, ValidationError::ConstraintViolation { ref name, .. } if name == "type"));
    }
}
