//! Everything that hangs off a task: files, secrets, resources, services.

use crate::schema::{AttrDef, EntityDef, EntityKind, Format, MapOf, Scalar};

pub(crate) fn artifact() -> EntityDef {
    EntityDef::define(
        EntityKind::Artifact,
        vec![
            AttrDef::string("source"),
            AttrDef::string("destination").optional(),
            AttrDef::coercible_string("mode").optional(),
            AttrDef::map("options", MapOf::Scalar(Scalar::CoercibleStr)).optional(),
        ],
    )
}

pub(crate) fn template() -> EntityDef {
    EntityDef::define(
        EntityKind::Template,
        vec![
            AttrDef::string("data").optional(),
            AttrDef::string("source").optional(),
            AttrDef::string("destination"),
            AttrDef::string("perms").format(Format::FileMode).default("644"),
            AttrDef::string("change_mode")
                .one_of(&["noop", "restart", "signal"])
                .default("restart"),
            AttrDef::string("change_signal").optional(),
            AttrDef::string("splay").duration().default("5s"),
            AttrDef::string("left_delimiter").optional(),
            AttrDef::string("right_delimiter").optional(),
            AttrDef::boolean("env").optional(),
            AttrDef::string("vault_grace").duration().optional(),
        ],
    )
}

pub(crate) fn vault() -> EntityDef {
    EntityDef::define(
        EntityKind::Vault,
        vec![
            AttrDef::list("policies", Scalar::Str),
            AttrDef::string("change_mode")
                .one_of(&["noop", "restart", "signal"])
                .default("restart"),
            AttrDef::string("change_signal").optional(),
            AttrDef::boolean("env").default(true),
        ],
    )
}

pub(crate) fn logs() -> EntityDef {
    EntityDef::define(
        EntityKind::Logs,
        vec![
            AttrDef::integer("max_files").min(1).default(10),
            AttrDef::integer("max_file_size").min(1).default(10),
        ],
    )
}

pub(crate) fn dispatch_payload() -> EntityDef {
    EntityDef::define(EntityKind::DispatchPayload, vec![AttrDef::string("file")])
}

pub(crate) fn resources() -> EntityDef {
    EntityDef::define(
        EntityKind::Resources,
        vec![
            AttrDef::integer("cpu").min(1).default(100),
            AttrDef::integer("memory").min(1).default(300),
            AttrDef::entity("network", EntityKind::Network).optional(),
            AttrDef::entities("device", EntityKind::Device).optional(),
        ],
    )
}

pub(crate) fn network() -> EntityDef {
    EntityDef::define(
        EntityKind::Network,
        vec![
            AttrDef::integer("mbits").min(1).default(10),
            AttrDef::entities("port", EntityKind::NetworkPort).optional(),
        ],
    )
}

pub(crate) fn network_port() -> EntityDef {
    EntityDef::define(
        EntityKind::NetworkPort,
        vec![
            AttrDef::string("id"),
            AttrDef::integer("static").range(0, 65535).optional(),
        ],
    )
}

pub(crate) fn device() -> EntityDef {
    EntityDef::define(
        EntityKind::Device,
        vec![
            AttrDef::string("id"),
            AttrDef::integer("count").min(1).default(1),
            AttrDef::entities("constraint", EntityKind::Constraint).optional(),
            AttrDef::entities("affinity", EntityKind::Affinity).optional(),
        ],
    )
}

pub(crate) fn service() -> EntityDef {
    EntityDef::define(
        EntityKind::Service,
        vec![
            AttrDef::string("name").optional(),
            AttrDef::coercible_string("port").optional(),
            AttrDef::list("tags", Scalar::Str).optional(),
            AttrDef::list("canary_tags", Scalar::Str).optional(),
            AttrDef::string("address_mode")
                .one_of(&["auto", "driver", "host"])
                .optional(),
            AttrDef::entities("check", EntityKind::Check).optional(),
        ],
    )
}

pub(crate) fn check() -> EntityDef {
    EntityDef::define(
        EntityKind::Check,
        vec![
            AttrDef::string("name").optional(),
            AttrDef::string("type").one_of(&["grpc", "http", "script", "tcp"]),
            AttrDef::coercible_string("port").optional(),
            AttrDef::string("protocol").one_of(&["http", "https"]).optional(),
            AttrDef::string("path").optional(),
            AttrDef::string("interval").duration(),
            AttrDef::string("timeout").duration(),
            AttrDef::string("command").optional(),
            AttrDef::list("args", Scalar::Str).optional(),
            AttrDef::string("grpc_service").optional(),
            AttrDef::boolean("grpc_use_tls").optional(),
            AttrDef::boolean("tls_skip_verify").optional(),
            AttrDef::string("method").optional(),
            AttrDef::map("header", MapOf::List(Scalar::CoercibleStr)).optional(),
            AttrDef::entity("check_restart", EntityKind::CheckRestart).optional(),
            AttrDef::string("initial_status")
                .one_of(&["passing", "warning", "critical"])
                .optional(),
            AttrDef::string("address_mode").optional(),
        ],
    )
}

pub(crate) fn check_restart() -> EntityDef {
    EntityDef::define(
        EntityKind::CheckRestart,
        vec![
            AttrDef::integer("limit").min(0).default(0),
            AttrDef::string("grace").duration().default("1s"),
            AttrDef::boolean("ignore_warnings").default(false),
        ],
    )
}
