pub use crate::color::*;
pub use crate::config::*;
pub use crate::cube::*;
pub use crate::derive::*;
pub use crate::r#move::*;
pub use crate::scramble::Scramble;
pub use crate::solve::*;
pub use crate::state::*;
pub use crate::stats::*;

#[cfg(test)]
pub use crate::test::*;

pub use enum_iterator::Sequence;
pub use serde::{Deserialize, Serialize};
pub use std::time::Duration;
