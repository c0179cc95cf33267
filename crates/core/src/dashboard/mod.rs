pub mod pipeline;
pub mod view;
