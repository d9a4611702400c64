mod base;
mod interface;
mod middleware;
mod printer;

pub use base::ParseError;
pub(crate) use base::*;
pub(crate) use interface::*;
pub use middleware::*;
pub(crate) use printer::*;
