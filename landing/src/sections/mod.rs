// Shell chrome and building blocks shared by the pages

mod cards;
mod footer;
mod icons;
mod nav;
mod section_title;
mod testimonials;

pub use cards::{CaseStudyCard, MetricTile, ServiceDetail, ServicePreview};
pub use footer::Footer;
pub use icons::IconGlyph;
pub use nav::Nav;
pub use section_title::{Align, SectionTitle};
pub use testimonials::Testimonials;
