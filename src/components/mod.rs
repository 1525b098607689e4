//! Reusable UI components: the session guard shell, movie cards, and the
//! global loading/notice overlays.

pub mod loading_overlay;
pub mod movie_card;
pub mod notice_host;
pub mod protected_route;
