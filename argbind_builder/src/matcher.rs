mod core;
mod table;

pub(crate) use self::core::*;
pub(crate) use table::*;
