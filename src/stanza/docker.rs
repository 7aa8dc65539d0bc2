//! Docker driver `config` block.

use crate::schema::{AttrDef, EntityDef, EntityKind, MapOf, Scalar};

const STRING_MAP: MapOf = MapOf::Scalar(Scalar::CoercibleStr);

pub(crate) fn docker_config() -> EntityDef {
    EntityDef::define(
        EntityKind::DockerConfig,
        vec![
            AttrDef::string("image"),
            AttrDef::boolean("force_pull").optional(),
            AttrDef::string("entrypoint").optional(),
            AttrDef::string("command").optional(),
            AttrDef::list("args", Scalar::Str).optional(),
            AttrDef::string("work_dir").optional(),
            AttrDef::string("volume_driver").optional(),
            AttrDef::list("volumes", Scalar::Str).optional(),
            AttrDef::entities("mounts", EntityKind::DockerMount).optional(),
            AttrDef::entities("devices", EntityKind::DockerDevice).optional(),
            AttrDef::map("port_map", MapOf::Scalar(Scalar::CoercibleInt)).optional(),
            AttrDef::list("network_aliases", Scalar::Str).optional(),
            AttrDef::string("network_mode").optional(),
            AttrDef::string("mac_address").optional(),
            AttrDef::string("ipv4_address").optional(),
            AttrDef::string("ipv6_address").optional(),
            AttrDef::boolean("advertise_ipv6_address").optional(),
            AttrDef::map("sysctl", STRING_MAP).optional(),
            AttrDef::map("ulimit", STRING_MAP).optional(),
            AttrDef::boolean("privileged").optional(),
            AttrDef::entity("auth", EntityKind::DockerConfigAuth).optional(),
            AttrDef::boolean("auth_soft_fail").optional(),
            AttrDef::list("cap_add", Scalar::Str).optional(),
            AttrDef::list("cap_drop", Scalar::Str).optional(),
            AttrDef::integer("cpu_cfs_period").min(1).optional(),
            AttrDef::boolean("cpu_hard_limit").optional(),
            AttrDef::list("dns_options", Scalar::Str).optional(),
            AttrDef::list("dns_search_domains", Scalar::Str).optional(),
            AttrDef::list("dns_servers", Scalar::Str).optional(),
            AttrDef::list("extra_hosts", Scalar::Str).optional(),
            AttrDef::string("hostname").optional(),
            AttrDef::boolean("interactive").optional(),
            AttrDef::string("ipc_mode").optional(),
            AttrDef::map("labels", STRING_MAP).optional(),
            AttrDef::string("load").optional(),
            AttrDef::entity("logging", EntityKind::DockerConfigLogging).optional(),
            AttrDef::string("pid_mode").optional(),
            AttrDef::integer("pids_limit").min(1).optional(),
            AttrDef::boolean("readonly_rootfs").optional(),
            AttrDef::list("security_opt", Scalar::Str).optional(),
            AttrDef::integer("shm_size").min(1).optional(),
            AttrDef::map("storage_opt", STRING_MAP).optional(),
            AttrDef::boolean("tty").optional(),
            AttrDef::string("userns_mode").optional(),
            AttrDef::string("uts_mode").optional(),
        ],
    )
}

pub(crate) fn docker_mount() -> EntityDef {
    EntityDef::define(
        EntityKind::DockerMount,
        vec![
            AttrDef::string("type").optional(),
            AttrDef::string("source").optional(),
            AttrDef::string("target"),
            AttrDef::boolean("readonly").optional(),
            AttrDef::map("volume_options", MapOf::Any).optional(),
            AttrDef::map("bind_options", MapOf::Any).optional(),
            AttrDef::map("tmpfs_options", MapOf::Any).optional(),
        ],
    )
}

pub(crate) fn docker_device() -> EntityDef {
    EntityDef::define(
        EntityKind::DockerDevice,
        vec![
            AttrDef::string("host_path"),
            AttrDef::string("container_path"),
            AttrDef::string("cgroup_permissions").optional(),
        ],
    )
}

pub(crate) fn docker_config_auth() -> EntityDef {
    EntityDef::define(
        EntityKind::DockerConfigAuth,
        vec![
            AttrDef::string("username").optional(),
            AttrDef::string("password").optional(),
            AttrDef::string("email").optional(),
            AttrDef::string("server_address").optional(),
        ],
    )
}

pub(crate) fn docker_config_logging() -> EntityDef {
    EntityDef::define(
        EntityKind::DockerConfigLogging,
        vec![
            AttrDef::string("type").optional(),
            AttrDef::map("config", STRING_MAP).optional(),
        ],
    )
}
