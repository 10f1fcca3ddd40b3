// Domain layer: core models shared by the evaluator, advisor and dataset
// loader. No external dependencies beyond std/serde.

pub mod model;
