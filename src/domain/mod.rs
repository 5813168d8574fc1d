// Domain layer: value types and ports. Depends only on std and serde_json.

pub mod model;
pub mod ports;
