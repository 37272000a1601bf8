pub mod builder;
pub mod conversion;
pub mod document;
pub mod model;
pub mod samples;

pub use builder::*;
pub use conversion::*;
pub use document::FlowDocument;
pub use model::*;
