//! Scheduling placement: constraint, affinity, spread.

use crate::schema::{AttrDef, EntityDef, EntityKind};

pub(crate) fn constraint() -> EntityDef {
    EntityDef::define(
        EntityKind::Constraint,
        vec![
            AttrDef::string("attribute").optional(),
            AttrDef::string("operator")
                .one_of(&[
                    "=",
                    "!=",
                    ">",
                    ">=",
                    "<",
                    "<=",
                    "distinct_hosts",
                    "distinct_property",
                    "regexp",
                    "set_contains",
                    "version",
                    "is_set",
                    "is_not_set",
                ])
                .optional(),
            AttrDef::coercible_string("value").optional(),
        ],
    )
}

pub(crate) fn affinity() -> EntityDef {
    EntityDef::define(
        EntityKind::Affinity,
        vec![
            AttrDef::string("attribute").optional(),
            AttrDef::string("operator")
                .one_of(&[
                    "=",
                    "!=",
                    ">",
                    ">=",
                    "<",
                    "<=",
                    "regexp",
                    "set_contains_all",
                    "set_contains_any",
                    "version",
                ])
                .optional(),
            AttrDef::coercible_string("value").optional(),
            AttrDef::integer("weight").range(-100, 100).default(50),
        ],
    )
}

pub(crate) fn spread() -> EntityDef {
    EntityDef::define(
        EntityKind::Spread,
        vec![
            AttrDef::string("attribute"),
            AttrDef::integer("weight").range(0, 100),
            AttrDef::entities("target", EntityKind::SpreadTarget).optional(),
        ],
    )
}

pub(crate) fn spread_target() -> EntityDef {
    EntityDef::define(
        EntityKind::SpreadTarget,
        vec![
            AttrDef::string("id"),
            AttrDef::string("value").optional(),
            AttrDef::integer("percent").range(0, 100),
        ],
    )
}
