pub mod closest;
pub mod collide;
pub mod contact;
pub mod intersect;
pub mod raycast;

// Re-export key types
pub use contact::Contact2D;
