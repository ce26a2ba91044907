//! Gallery core: pure selection state machine and view-model helpers.
mod effect;
mod msg;
mod record;
mod selection;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{Msg, PageChange};
pub use record::{ColumnField, Record, RecordId, RequestId};
pub use selection::{AutoSelectQueue, SelectionSet};
pub use state::{AppState, PageCursor, PAGE_SIZE};
pub use update::update;
pub use view_model::{AppViewModel, ColumnDef, CustomSelectView, RowView, COLUMNS};
