pub mod centroid;
pub mod zz;
