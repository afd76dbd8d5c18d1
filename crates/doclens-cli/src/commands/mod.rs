pub mod ask;
pub mod grade;
pub mod quiz;
pub mod summarize;
pub mod terms;
pub mod validate;
