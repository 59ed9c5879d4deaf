//! warehouse-api - 供应商查询与入库单登记服务

pub mod api;
pub mod domain;
pub mod infrastructure;
