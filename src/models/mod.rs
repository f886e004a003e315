pub mod glyph;
pub mod point;
pub mod raster;
pub mod region;
pub mod run;
pub mod section;

pub use glyph::{Glyph, GlyphLayer, SpotShape};
pub use point::{Point, PointI, Rect};
pub use raster::{BACKGROUND, BitRaster, GrayRaster, INK};
pub use region::{Region, StaffHeader};
pub use run::{Orientation, Run, RunTable};
pub use section::{Section, SectionRun};
