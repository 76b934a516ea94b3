//! Drag gestures over board columns.
//!
//! Gestures are reduced to "begin over column X at index i" and "end over
//! column Y at index j". `DragSession` is the plain state machine, the
//! `DragGestures` trait is what an input binding drives, and the HTML5
//! drag-and-drop handlers below are the binding shipped with the board.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::config::DRAG_CLICK_SUPPRESS_MS;
use crate::core::models::ColumnId;

/// A position in one column. While hovering it names the card the dragged
/// one will be inserted before, counted with the dragged card still in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragSlot {
    pub column: ColumnId,
    pub index: usize,
}

/// Completed gesture, ready to apply to the board. `to.index` is counted
/// after the card has been taken out of its origin column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRequest {
    pub from: DragSlot,
    pub to: DragSlot,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragSession {
    origin: Option<DragSlot>,
    target: Option<DragSlot>,
}

impl DragSession {
    pub fn begin(&mut self, column: ColumnId, index: usize) {
        self.origin = Some(DragSlot { column, index });
        self.target = None;
    }

    pub fn hover(&mut self, column: ColumnId, index: usize) {
        if self.origin.is_some() {
            self.target = Some(DragSlot { column, index });
        }
    }

    pub fn leave(&mut self) {
        self.target = None;
    }

    /// Finish the gesture. No target means the drop landed outside every
    /// column and nothing moves.
    pub fn end(&mut self) -> Option<MoveRequest> {
        let origin = self.origin.take();
        let target = self.target.take();
        let (from, mut to) = (origin?, target?);
        if from.column == to.column && to.index > from.index {
            to.index -= 1;
        }
        Some(MoveRequest { from, to })
    }

    pub fn cancel(&mut self) {
        self.origin = None;
        self.target = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    pub fn origin(&self) -> Option<DragSlot> {
        self.origin
    }

    pub fn target(&self) -> Option<DragSlot> {
        self.target
    }
}

/// Anything that can report drag gestures over the board.
pub trait DragGestures {
    fn begin_gesture(&self, column: ColumnId, index: usize);
    fn hover_gesture(&self, column: ColumnId, index: usize);
    /// `over` is the slot under the pointer at release, if the binding knows it.
    fn end_gesture(&self, over: Option<DragSlot>);
    fn cancel_gesture(&self);
}

/// Reactive drag state shared by every column and card.
#[derive(Clone, Copy)]
pub struct BoardDnd {
    session: RwSignal<DragSession>,
    just_ended: RwSignal<bool>,
    on_drop: Callback<MoveRequest>,
}

impl BoardDnd {
    pub fn new(on_drop: Callback<MoveRequest>) -> Self {
        Self {
            session: RwSignal::new(DragSession::default()),
            just_ended: RwSignal::new(false),
            on_drop,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.with(|s| s.is_dragging())
    }

    pub fn is_origin(&self, column: ColumnId, index: usize) -> bool {
        self.session.with(|s| s.origin() == Some(DragSlot { column, index }))
    }

    pub fn is_target_column(&self, column: ColumnId) -> bool {
        self.session.with(|s| s.target().map(|t| t.column) == Some(column))
    }

    /// True for a short moment after a drop so the card under the pointer
    /// does not treat the release as a click.
    pub fn click_suppressed(&self) -> bool {
        self.just_ended.get_untracked()
    }

    /// Pointer over the card at `index`. Returns true when the event is part
    /// of a drag and must not reach the column underneath.
    pub fn over_card(&self, column: ColumnId, index: usize) -> bool {
        if !self.session.with_untracked(|s| s.is_dragging()) {
            return false;
        }
        self.hover_gesture(column, index);
        true
    }

    /// Pointer over a column's free space; dropping there appends. Returns
    /// true when the event must not reach the board.
    pub fn over_column(&self, column: ColumnId, len: usize) -> bool {
        if !self.session.with_untracked(|s| s.is_dragging()) {
            return false;
        }
        self.hover_gesture(column, len);
        true
    }

    /// Pointer between columns.
    pub fn over_board(&self) {
        if self.session.with_untracked(|s| s.target().is_some()) {
            self.session.update(|s| s.leave());
        }
    }

    fn finish(&self, over: Option<DragSlot>) -> Option<MoveRequest> {
        let mut request = None;
        self.session.update(|s| {
            if let Some(slot) = over {
                s.hover(slot.column, slot.index);
            }
            request = s.end();
        });
        request
    }

    fn suppress_clicks(&self) {
        self.just_ended.set(true);
        let just_ended = self.just_ended;
        Timeout::new(DRAG_CLICK_SUPPRESS_MS, move || just_ended.set(false)).forget();
    }
}

impl DragGestures for BoardDnd {
    fn begin_gesture(&self, column: ColumnId, index: usize) {
        self.session.update(|s| s.begin(column, index));
    }

    fn hover_gesture(&self, column: ColumnId, index: usize) {
        // Skip the write when nothing changed; dragover fires continuously
        let changed = self.session.with_untracked(|s| {
            s.is_dragging() && s.target() != Some(DragSlot { column, index })
        });
        if changed {
            self.session.update(|s| s.hover(column, index));
        }
    }

    fn end_gesture(&self, over: Option<DragSlot>) {
        let request = self.finish(over);
        self.suppress_clicks();
        match request {
            Some(request) => self.on_drop.run(request),
            None => log::debug!("Drag ended outside any column"),
        }
    }

    fn cancel_gesture(&self) {
        if self.session.with_untracked(|s| s.is_dragging()) {
            self.session.update(|s| s.cancel());
        }
    }
}

// HTML5 drag-and-drop binding

/// `dragstart` on a card.
pub fn make_on_dragstart(dnd: BoardDnd, column: ColumnId, index: usize, project_id: String) -> impl Fn(web_sys::DragEvent) + 'static {
    move |ev: web_sys::DragEvent| {
        if let Some(dt) = ev.data_transfer() {
            dt.set_effect_allowed("move");
            // Firefox will not start a drag without payload
            let _ = dt.set_data("text/plain", &project_id);
        }
        dnd.begin_gesture(column, index);
    }
}

/// `dragover` on a card: dropping here inserts before this card.
pub fn make_on_card_dragover(dnd: BoardDnd, column: ColumnId, index: usize) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        if dnd.over_card(column, index) {
            ev.prevent_default();
            ev.stop_propagation();
        }
    }
}

/// `dragover` on a column's free space: dropping here appends.
pub fn make_on_column_dragover(dnd: BoardDnd, column: ColumnId, len: Signal<usize>) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        if dnd.over_column(column, len.get_untracked()) {
            ev.prevent_default();
            ev.stop_propagation();
        }
    }
}

/// `dragover` outside every column clears the target.
pub fn make_on_board_dragover(dnd: BoardDnd) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| dnd.over_board()
}

/// `drop` on a column (cards bubble up to it).
pub fn make_on_drop(dnd: BoardDnd) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        dnd.end_gesture(None);
    }
}

/// `dragend` on a card. After a successful drop the session is already
/// closed; otherwise the gesture was abandoned.
pub fn make_on_dragend(dnd: BoardDnd) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| {
        dnd.cancel_gesture();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Board, Project};
    use chrono::Utc;

    #[test]
    fn drop_over_column_yields_move() {
        let mut session = DragSession::default();
        session.begin(ColumnId::New, 0);
        session.hover(ColumnId::Progress, 0);
        let request = session.end().unwrap();
        assert_eq!(request.from, DragSlot { column: ColumnId::New, index: 0 });
        assert_eq!(request.to, DragSlot { column: ColumnId::Progress, index: 0 });
        assert!(!session.is_dragging());
    }

    #[test]
    fn drop_without_destination_is_cancelled() {
        let mut session = DragSession::default();
        session.begin(ColumnId::New, 1);
        assert_eq!(session.end(), None);
        assert!(!session.is_dragging());
    }

    #[test]
    fn leaving_all_columns_clears_destination() {
        let mut session = DragSession::default();
        session.begin(ColumnId::Feedback, 2);
        session.hover(ColumnId::Completed, 0);
        session.leave();
        assert_eq!(session.end(), None);
    }

    #[test]
    fn hover_without_drag_is_ignored() {
        let mut session = DragSession::default();
        session.hover(ColumnId::Archived, 3);
        assert_eq!(session.target(), None);
        assert_eq!(session.end(), None);
    }

    #[test]
    fn last_hover_wins() {
        let mut session = DragSession::default();
        session.begin(ColumnId::New, 0);
        session.hover(ColumnId::New, 2);
        session.hover(ColumnId::Progress, 1);
        assert_eq!(session.end().map(|r| r.to), Some(DragSlot { column: ColumnId::Progress, index: 1 }));
    }

    #[test]
    fn same_column_slot_below_origin_accounts_for_removal() {
        let mut session = DragSession::default();
        session.begin(ColumnId::New, 0);
        session.hover(ColumnId::New, 2);
        assert_eq!(session.end().map(|r| r.to), Some(DragSlot { column: ColumnId::New, index: 1 }));

        session.begin(ColumnId::New, 2);
        session.hover(ColumnId::New, 0);
        assert_eq!(session.end().map(|r| r.to), Some(DragSlot { column: ColumnId::New, index: 0 }));
    }

    /// What sits under the pointer during a `dragover`.
    enum Under {
        Card { column: ColumnId, index: usize, len: usize },
        Column { column: ColumnId, len: usize },
        Gap,
    }

    // Runs the card, column, then board handlers the way the event bubbles
    fn drag_over(dnd: &BoardDnd, under: Under) {
        let consumed = match under {
            Under::Card { column, index, len } => dnd.over_card(column, index) || dnd.over_column(column, len),
            Under::Column { column, len } => dnd.over_column(column, len),
            Under::Gap => false,
        };
        if !consumed {
            dnd.over_board();
        }
    }

    fn dnd() -> BoardDnd {
        BoardDnd::new(Callback::new(|_: MoveRequest| {}))
    }

    #[test]
    fn drop_on_empty_column_appends() {
        let dnd = dnd();
        dnd.begin_gesture(ColumnId::New, 0);
        drag_over(&dnd, Under::Gap);
        drag_over(&dnd, Under::Column { column: ColumnId::Feedback, len: 0 });
        assert!(dnd.is_target_column(ColumnId::Feedback));
        drag_over(&dnd, Under::Column { column: ColumnId::Feedback, len: 0 });

        let request = dnd.finish(None).unwrap();
        assert_eq!(request.to, DragSlot { column: ColumnId::Feedback, index: 0 });
        assert!(!dnd.is_dragging());
    }

    #[test]
    fn drop_on_card_below_in_same_column_lands_before_it() {
        let mut board = Board::default();
        for id in ["a", "b", "c"] {
            let mut project = Project::draft(Utc::now());
            project.id = id.to_string();
            board.insert_new(project);
        }

        let dnd = dnd();
        dnd.begin_gesture(ColumnId::New, 0);
        drag_over(&dnd, Under::Card { column: ColumnId::New, index: 1, len: 3 });
        drag_over(&dnd, Under::Card { column: ColumnId::New, index: 2, len: 3 });
        let request = dnd.finish(None).unwrap();

        assert!(board.move_project(request.from.column, request.from.index, request.to.column, request.to.index, Utc::now()));
        let ids: Vec<_> = board.new.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn drop_on_column_space_in_same_column_appends() {
        let dnd = dnd();
        dnd.begin_gesture(ColumnId::Progress, 0);
        drag_over(&dnd, Under::Column { column: ColumnId::Progress, len: 3 });
        let request = dnd.finish(None).unwrap();
        assert_eq!(request.to, DragSlot { column: ColumnId::Progress, index: 2 });
    }

    #[test]
    fn leaving_to_the_gap_between_columns_cancels_the_drop() {
        let dnd = dnd();
        dnd.begin_gesture(ColumnId::New, 0);
        drag_over(&dnd, Under::Card { column: ColumnId::Completed, index: 0, len: 1 });
        drag_over(&dnd, Under::Gap);
        assert!(!dnd.is_target_column(ColumnId::Completed));
        assert_eq!(dnd.finish(None), None);
    }

    #[test]
    fn dragover_without_drag_is_left_to_the_browser() {
        let dnd = dnd();
        assert!(!dnd.over_card(ColumnId::New, 0));
        assert!(!dnd.over_column(ColumnId::New, 0));
        assert!(!dnd.is_dragging());
    }

    #[test]
    fn cancel_discards_gesture() {
        let mut session = DragSession::default();
        session.begin(ColumnId::New, 0);
        session.hover(ColumnId::Progress, 0);
        session.cancel();
        assert_eq!(session.end(), None);
    }
}
