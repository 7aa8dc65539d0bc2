//! Deployment and rescheduling behaviour, plus job-level run modes.

use crate::schema::{AttrDef, EntityDef, EntityKind, Scalar};

pub(crate) fn update() -> EntityDef {
    EntityDef::define(
        EntityKind::Update,
        vec![
            AttrDef::integer("max_parallel").min(0).default(0),
            AttrDef::string("health_check")
                .one_of(&["checks", "task_states", "manual"])
                .default("checks"),
            AttrDef::string("min_healthy_time").duration().default("10s"),
            AttrDef::string("healthy_deadline").duration().default("5m"),
            AttrDef::string("progress_deadline").duration().default("10m"),
            AttrDef::boolean("auto_revert").default(false),
            AttrDef::boolean("auto_promote").default(false),
            AttrDef::integer("canary").min(0).default(0),
            AttrDef::string("stagger").duration().default("30s"),
        ],
    )
}

pub(crate) fn migrate() -> EntityDef {
    EntityDef::define(
        EntityKind::Migrate,
        vec![
            AttrDef::integer("max_parallel").min(0).default(1),
            AttrDef::string("health_check")
                .one_of(&["checks", "task_states"])
                .default("checks"),
            AttrDef::string("min_healthy_time").duration().default("10s"),
            AttrDef::string("healthy_deadline").duration().default("5m"),
        ],
    )
}

pub(crate) fn reschedule() -> EntityDef {
    EntityDef::define(
        EntityKind::Reschedule,
        vec![
            AttrDef::integer("attempts").min(0).optional(),
            AttrDef::string("interval").duration().optional(),
            AttrDef::string("delay").duration(),
            AttrDef::string("delay_function").one_of(&["constant", "exponential", "fibonacci"]),
            AttrDef::string("max_delay").duration().optional(),
            AttrDef::boolean("unlimited"),
        ],
    )
}

pub(crate) fn restart() -> EntityDef {
    EntityDef::define(
        EntityKind::Restart,
        vec![
            AttrDef::integer("attempts").min(0).optional(),
            AttrDef::string("delay").duration().default("15s"),
            AttrDef::string("interval").duration().optional(),
            AttrDef::string("mode").one_of(&["delay", "fail"]).default("fail"),
        ],
    )
}

pub(crate) fn ephemeral_disk() -> EntityDef {
    EntityDef::define(
        EntityKind::EphemeralDisk,
        vec![
            AttrDef::boolean("migrate").default(false),
            AttrDef::integer("size").min(0).default(300),
            AttrDef::boolean("sticky").default(false),
        ],
    )
}

pub(crate) fn parameterized() -> EntityDef {
    EntityDef::define(
        EntityKind::Parameterized,
        vec![
            AttrDef::string("payload")
                .one_of(&["optional", "required", "forbidden"])
                .default("optional"),
            AttrDef::list("meta_required", Scalar::Str).optional(),
            AttrDef::list("meta_optional", Scalar::Str).optional(),
        ],
    )
}

pub(crate) fn periodic() -> EntityDef {
    EntityDef::define(
        EntityKind::Periodic,
        vec![
            AttrDef::string("cron"),
            AttrDef::boolean("prohibit_overlap").default(false),
            AttrDef::string("time_zone").default("UTC"),
        ],
    )
}
