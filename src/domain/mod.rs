// Domain layer: the inspection report produced for each value.

pub mod model;
