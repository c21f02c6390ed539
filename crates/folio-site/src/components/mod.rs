//! UI components for the portfolio page.

mod about;
mod app;
mod avatar;
mod certifications;
mod console;
mod contact;
mod education;
mod floating;
mod footer;
mod globe;
mod hero;
mod navbar;
mod projects;
mod skills;
mod toast;
mod voice;

pub use about::*;
pub use app::*;
pub use avatar::*;
pub use certifications::*;
pub use console::*;
pub use contact::*;
pub use education::*;
pub use floating::*;
pub use footer::*;
pub use globe::*;
pub use hero::*;
pub use navbar::*;
pub use projects::*;
pub use skills::*;
pub use toast::*;
pub use voice::*;
