//! Artgrid core: selection store, progressive selection and the pure update loop.
mod effect;
mod msg;
mod presenter;
mod progressive;
mod selection;
mod state;
mod types;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use presenter::{
    all_selected, header_state, selected_items_on_page, some_selected, HeaderCheckbox,
};
pub use progressive::{parse_select_count, ProgressiveSelection};
pub use selection::SelectionStore;
pub use state::AppState;
pub use types::{Artwork, ArtworkId, FetchId, Page};
pub use update::update;
pub use view_model::GridViewModel;
