mod label;
mod label_arena;
mod label_id;
mod normalization_scale;

pub use label::Label;
pub use label_arena::LabelArena;
pub use label_id::LabelId;
pub use normalization_scale::NormalizationScale;
