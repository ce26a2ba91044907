use crate::{AppState, Effect, Msg, PageCursor};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => {
            let page = state.cursor().page;
            vec![state.begin_fetch(page)]
        }
        Msg::PageChanged(change) => {
            let cursor = PageCursor {
                first: change.first,
                rows: change.rows,
                page: change.page.saturating_add(1),
            };
            // Fetches are keyed on the page number alone.
            if state.move_cursor(cursor) {
                vec![state.begin_fetch(cursor.page)]
            } else {
                Vec::new()
            }
        }
        Msg::SelectionChanged(page_selection) => {
            state.apply_page_selection(&page_selection);
            Vec::new()
        }
        Msg::CustomSelectToggled => {
            let open = !state.overlay_open();
            state.set_overlay_open(open);
            Vec::new()
        }
        Msg::CustomSelectClosed => {
            state.set_overlay_open(false);
            Vec::new()
        }
        Msg::CustomCountInput(raw) => {
            state.set_custom_input(&raw);
            Vec::new()
        }
        Msg::CustomSelectSubmitted => {
            if let Some(target) = state.custom_count().filter(|count| *count > 0) {
                state.start_auto_select(target);
            }
            Vec::new()
        }
        // Responses are applied in completion order; a late response for an
        // older page overwrites newer data.
        Msg::PageLoaded {
            records,
            total_records,
            ..
        } => {
            state.apply_page(records, total_records);
            Vec::new()
        }
        Msg::PageFailed { message, .. } => {
            state.apply_failure(message);
            Vec::new()
        }
    };

    (state, effects)
}
