pub mod codec;
pub mod etl;
pub mod transformer;

pub use crate::domain::model::{RawRecord, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
