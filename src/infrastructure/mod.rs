//! Infrastructure layer
//!
//! Owns the scarce resource (the browser page) and only exposes capabilities:
//! the automation surface, the selector table behind it and bounded waits.

pub mod chrome_surface;
pub mod selectors;
pub mod surface;
pub mod waiter;

pub use chrome_surface::ChromeSurface;
pub use selectors::{Locator, SelectorTable, Target};
pub use surface::{Availability, AutomationSurface, Key};
pub use waiter::Waiter;
