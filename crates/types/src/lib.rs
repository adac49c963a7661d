pub mod course;
pub mod geometry;
pub mod profile;
pub mod template;

pub use course::CourseRecord;
pub use geometry::{Orientation, PageGeometry};
pub use profile::StudentProfile;
pub use template::{Grouping, TemplateSpec};
