//! 领域层：实体、过滤条件与仓储接口

pub mod entities;
pub mod filters;
pub mod repositories;

pub use entities::*;
pub use filters::*;
pub use repositories::*;
