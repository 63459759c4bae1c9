// Domain layer: transient values produced by one invocation.

pub mod model;
