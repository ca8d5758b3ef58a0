pub mod coordinates;
pub mod point;
pub mod region;

pub use coordinates::Coordinates;
pub use point::PointSet;
pub use region::Region;
