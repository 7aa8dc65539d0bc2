//! The job -> group -> task spine.

use crate::schema::{AttrDef, EntityDef, EntityKind, MapOf, Scalar};

const META: MapOf = MapOf::Scalar(Scalar::CoercibleStr);

pub(crate) fn job() -> EntityDef {
    EntityDef::define(
        EntityKind::Job,
        vec![
            AttrDef::string("id"),
            AttrDef::string("type")
                .one_of(&["service", "system", "batch"])
                .default("service"),
            AttrDef::string("region").default("global"),
            AttrDef::list("datacenters", Scalar::Str),
            AttrDef::string("namespace").optional(),
            AttrDef::integer("priority").range(1, 100).default(50),
            AttrDef::boolean("all_at_once").optional(),
            AttrDef::entities("constraint", EntityKind::Constraint).optional(),
            AttrDef::entities("affinity", EntityKind::Affinity).optional(),
            AttrDef::entities("spread", EntityKind::Spread).optional(),
            AttrDef::entity("update", EntityKind::Update).optional(),
            AttrDef::entity("migrate", EntityKind::Migrate).optional(),
            AttrDef::entity("reschedule", EntityKind::Reschedule).optional(),
            AttrDef::entity("parameterized", EntityKind::Parameterized).optional(),
            AttrDef::entity("periodic", EntityKind::Periodic).optional(),
            AttrDef::entities("group", EntityKind::Group),
            AttrDef::map("meta", META).optional(),
            AttrDef::entity("vault", EntityKind::Vault).optional(),
            AttrDef::string("vault_token").optional(),
        ],
    )
}

pub(crate) fn group() -> EntityDef {
    EntityDef::define(
        EntityKind::Group,
        vec![
            AttrDef::string("id"),
            AttrDef::integer("count").min(1).default(1),
            AttrDef::entities("constraint", EntityKind::Constraint).optional(),
            AttrDef::entities("affinity", EntityKind::Affinity).optional(),
            AttrDef::entities("spread", EntityKind::Spread).optional(),
            AttrDef::entity("update", EntityKind::Update).optional(),
            AttrDef::entity("migrate", EntityKind::Migrate).optional(),
            AttrDef::entity("reschedule", EntityKind::Reschedule).optional(),
            AttrDef::entity("restart", EntityKind::Restart).optional(),
            AttrDef::entity("ephemeral_disk", EntityKind::EphemeralDisk).optional(),
            AttrDef::entities("task", EntityKind::Task),
            AttrDef::map("meta", META).optional(),
            AttrDef::entity("vault", EntityKind::Vault).optional(),
        ],
    )
}

pub(crate) fn task() -> EntityDef {
    EntityDef::define(
        EntityKind::Task,
        vec![
            AttrDef::string("id"),
            AttrDef::boolean("leader").optional(),
            AttrDef::string("kill_timeout").duration().default("5s"),
            AttrDef::string("kill_signal").optional(),
            AttrDef::string("shutdown_delay").duration().default("0s"),
            AttrDef::entities("constraint", EntityKind::Constraint).optional(),
            AttrDef::entities("affinity", EntityKind::Affinity).optional(),
            AttrDef::string("driver"),
            AttrDef::string("user").optional(),
            AttrDef::entity("config", EntityKind::DockerConfig).optional(),
            AttrDef::map("env", META).optional(),
            AttrDef::entity("dispatch_payload", EntityKind::DispatchPayload).optional(),
            AttrDef::entities("artifact", EntityKind::Artifact).optional(),
            AttrDef::entities("template", EntityKind::Template).optional(),
            AttrDef::entity("resources", EntityKind::Resources),
            AttrDef::entities("service", EntityKind::Service).optional(),
            AttrDef::entity("logs", EntityKind::Logs).optional(),
            AttrDef::map("meta", META).optional(),
            AttrDef::entity("vault", EntityKind::Vault).optional(),
        ],
    )
}
