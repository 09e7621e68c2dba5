//! Boundary module — directional camera limits and their aggregation
//!
//! Limits are registered against a camera's `LimitRegistry`. Static limits
//! keep the position they were created with; dynamic limits are rewritten
//! every tick by a `Manipulator` living in a `ManipulatorTable`, and die
//! permanently once their manipulator is removed from that table.

mod limit_kind;
mod boundary_area;
mod manipulator;
mod limit;
mod limit_registry;
mod holder;
mod producer;

pub use limit_kind::LimitKind;
pub use boundary_area::{BoundaryArea, UNBOUNDED_MIN, UNBOUNDED_MAX};
pub use manipulator::{Manipulator, LimitUpdate, ManipulatorTable, ManipulatorKey};
pub use limit::Limit;
pub use limit_registry::{LimitRegistry, LimitKey, RegistryId};
pub use holder::BoundaryHolder;
pub use producer::{StaticBoundary, DynamicBoundary, DynamicBoundaryConfig, apply_edges};
