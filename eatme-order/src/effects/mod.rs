//! Arithmetic behind the site's cosmetic effects.
//!
//! The web crate owns the DOM side; everything here is plain data so it can be
//! unit tested without a browser.

pub mod counter;
pub mod konami;
pub mod layout;
pub mod particles;
pub mod rotation;

pub use counter::CounterTween;
pub use konami::KeySequenceDetector;
pub use layout::{
    is_on_screen, navbar_scrolled, parallax_transform, pointer_offset, smooth_scroll_target,
    stagger_delay,
};
pub use particles::{ParticleSpec, particle_field};
pub use rotation::Rotation;
