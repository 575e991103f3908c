// Domain layer: records, API payloads, exclusion filter and the collaborator ports.

pub mod filter;
pub mod model;
pub mod ports;
