//! Route handlers organized by resource

pub mod health;
pub mod breeds;
pub mod kittens;

use serde::Serialize;

/// Id of a freshly created record
#[derive(Debug, Serialize)]
pub struct InstanceId {
    pub instance_id: i64,
}
