//! Use case implementations.

mod fetch_panel_use_case;
mod load_poster_use_case;

pub use fetch_panel_use_case::FetchPanelUseCase;
pub use load_poster_use_case::LoadPosterUseCase;
