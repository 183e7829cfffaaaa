//! Artgrid core: pure state machine for the paged artwork grid and its selection.
mod effect;
mod msg;
pub mod pagination;
mod record;
pub mod selection;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use pagination::ROWS_PER_PAGE;
pub use record::{Artwork, ArtworkId, PageData, RequestId};
pub use selection::{Selection, SelectionController};
pub use state::AppState;
pub use update::update;
pub use view_model::{AppViewModel, ArtworkRowView};
