//! Entity kinds and the process-wide definition registry.
//!
//! The registry is built once, on first use, from the stanza catalogue and is
//! read-only afterwards. It is indexed by discriminant, so `ALL` must list the
//! kinds in declaration order.

use crate::schema::EntityDef;
use crate::stanza;
use std::fmt;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityKind {
    Job,
    Group,
    Task,
    Artifact,
    Affinity,
    CheckRestart,
    Check,
    Constraint,
    Device,
    DispatchPayload,
    EphemeralDisk,
    Logs,
    Migrate,
    NetworkPort,
    Network,
    Parameterized,
    Periodic,
    Reschedule,
    Resources,
    Restart,
    Service,
    SpreadTarget,
    Spread,
    Template,
    Update,
    Vault,
    DockerMount,
    DockerDevice,
    DockerConfigAuth,
    DockerConfigLogging,
    DockerConfig,
}

static REGISTRY: LazyLock<[EntityDef; EntityKind::ALL.len()]> =
    LazyLock::new(|| EntityKind::ALL.map(stanza::declare));

impl EntityKind {
    pub const ALL: [EntityKind; 31] = [
        EntityKind::Job,
        EntityKind::Group,
        EntityKind::Task,
        EntityKind::Artifact,
        EntityKind::Affinity,
        EntityKind::CheckRestart,
        EntityKind::Check,
        EntityKind::Constraint,
        EntityKind::Device,
        EntityKind::DispatchPayload,
        EntityKind::EphemeralDisk,
        EntityKind::Logs,
        EntityKind::Migrate,
        EntityKind::NetworkPort,
        EntityKind::Network,
        EntityKind::Parameterized,
        EntityKind::Periodic,
        EntityKind::Reschedule,
        EntityKind::Resources,
        EntityKind::Restart,
        EntityKind::Service,
        EntityKind::SpreadTarget,
        EntityKind::Spread,
        EntityKind::Template,
        EntityKind::Update,
        EntityKind::Vault,
        EntityKind::DockerMount,
        EntityKind::DockerDevice,
        EntityKind::DockerConfigAuth,
        EntityKind::DockerConfigLogging,
        EntityKind::DockerConfig,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Job => "Job",
            EntityKind::Group => "Group",
            EntityKind::Task => "Task",
            EntityKind::Artifact => "Artifact",
            EntityKind::Affinity => "Affinity",
            EntityKind::CheckRestart => "CheckRestart",
            EntityKind::Check => "Check",
            EntityKind::Constraint => "Constraint",
            EntityKind::Device => "Device",
            EntityKind::DispatchPayload => "DispatchPayload",
            EntityKind::EphemeralDisk => "EphemeralDisk",
            EntityKind::Logs => "Logs",
            EntityKind::Migrate => "Migrate",
            EntityKind::NetworkPort => "NetworkPort",
            EntityKind::Network => "Network",
            EntityKind::Parameterized => "Parameterized",
            EntityKind::Periodic => "Periodic",
            EntityKind::Reschedule => "Reschedule",
            EntityKind::Resources => "Resources",
            EntityKind::Restart => "Restart",
            EntityKind::Service => "Service",
            EntityKind::SpreadTarget => "SpreadTarget",
            EntityKind::Spread => "Spread",
            EntityKind::Template => "Template",
            EntityKind::Update => "Update",
            EntityKind::Vault => "Vault",
            EntityKind::DockerMount => "DockerMount",
            EntityKind::DockerDevice => "DockerDevice",
            EntityKind::DockerConfigAuth => "DockerConfigAuth",
            EntityKind::DockerConfigLogging => "DockerConfigLogging",
            EntityKind::DockerConfig => "DockerConfig",
        }
    }

    pub fn definition(self) -> &'static EntityDef {
        &REGISTRY[self as usize]
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
