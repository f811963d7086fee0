// Domain layer: core models. No dependencies beyond std/serde.

pub mod model;
