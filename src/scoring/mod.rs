pub mod accuracy;
pub mod edit_distance;
pub mod fluency;
pub mod normalize;
pub mod report;
