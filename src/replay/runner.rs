//! Drives a [`SortableList`] from a [`Script`].
//!
//! The runner plays the host: it owns the items, lays them out after every
//! step, applies `ScrollBy` actions to its layout, and only forwards pointer
//! events whose listener is currently registered on its
//! [`RecordingSurface`].

use super::script::{Script, ScriptEvent, ScriptItem};
use super::surface::RecordingSurface;
use crate::app::{
    handle_event, Action, DragMode, EngineConfig, Event, ListenerKind, SortableList, Surface,
};
use crate::domain::{Point, Result, SortableError};
use crate::ui::{ListItem, StackLayout};
use serde::Serialize;
use std::collections::HashMap;
use std::rc::Rc;

/// What one script step did.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord {
    /// Zero-based position of the event in the script.
    pub step: usize,
    /// The scripted event, as written.
    pub event: ScriptEvent,
    /// Whether a listener was registered to receive the event.
    pub delivered: bool,
    /// Actions the engine returned. Empty for undelivered events.
    pub actions: Vec<Action>,
    /// Item ids after the step, placeholder excluded.
    pub order: Vec<String>,
    /// Engine mode after the step.
    pub mode: DragMode,
    /// Layout scroll offset after any `ScrollBy` was applied.
    pub scroll_y: f64,
}

/// The outcome of a whole script.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    /// Item ids once every event has been applied.
    pub final_order: Vec<String>,
    /// Final layout scroll offset.
    pub scroll_y: f64,
    /// Whether a `destroy` event ran.
    pub destroyed: bool,
    /// One record per scripted event, in order.
    pub steps: Vec<StepRecord>,
}

/// A headless host for one [`SortableList`] of [`ListItem`]s.
#[derive(Debug)]
pub struct Runner {
    list: SortableList<ListItem>,
    layout: StackLayout,
    surface: Rc<RecordingSurface>,
    items: HashMap<String, Rc<ListItem>>,
}

impl Runner {
    /// Builds the list from the script's initial items and lays it out.
    #[must_use]
    pub fn new(script: &Script, config: EngineConfig) -> Self {
        let surface = Rc::new(RecordingSurface::new(script.viewport_height));
        let items: Vec<Rc<ListItem>> = script.items.iter().map(new_item).collect();
        let by_id = items
            .iter()
            .map(|item| (item.id().to_string(), Rc::clone(item)))
            .collect();

        let dyn_surface: Rc<dyn Surface> = surface.clone();
        let list = SortableList::with_config(items, dyn_surface, config);

        let runner = Self {
            list,
            layout: StackLayout::new(script.list_width),
            surface,
            items: by_id,
        };
        runner.layout.reflow(&runner.list);
        runner
    }

    /// Runs every event of `script` against a fresh runner.
    ///
    /// # Errors
    ///
    /// [`SortableError::UnknownItem`] when a `remove` event names an id the
    /// script never introduced.
    pub fn run(script: &Script, config: EngineConfig) -> Result<ReplayReport> {
        let _span = tracing::info_span!("replay", events = script.events.len()).entered();

        let mut runner = Self::new(script, config);
        let steps = script
            .events
            .iter()
            .enumerate()
            .map(|(step, event)| runner.step(step, event))
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(steps = steps.len(), "replay finished");
        Ok(ReplayReport {
            final_order: runner.order(),
            scroll_y: runner.layout.scroll_y(),
            destroyed: runner.list.is_destroyed(),
            steps,
        })
    }

    /// Applies one scripted event, then reflows.
    ///
    /// # Errors
    ///
    /// [`SortableError::UnknownItem`] for a `remove` of an unknown id.
    pub fn step(&mut self, step: usize, event: &ScriptEvent) -> Result<StepRecord> {
        let _span = tracing::debug_span!("replay_step", step).entered();

        let (delivered, actions) = match event {
            ScriptEvent::Down { x, y } => self.dispatch(
                ListenerKind::ContainerPointerDown,
                Event::PointerDown(Point::new(*x, *y)),
            ),
            ScriptEvent::Move { x, y } => self.dispatch(
                ListenerKind::PagePointerMove,
                Event::PointerMove(Point::new(*x, *y)),
            ),
            ScriptEvent::Up { x, y } => self.dispatch(
                ListenerKind::PagePointerUp,
                Event::PointerUp(Point::new(*x, *y)),
            ),
            ScriptEvent::Cancel => {
                self.dispatch(ListenerKind::PagePointerUp, Event::PointerCancel)
            }
            ScriptEvent::Add(item) => {
                let item = self.item_for(item);
                self.list.add_item(item);
                (true, vec![])
            }
            ScriptEvent::Remove { id } => {
                let item = self
                    .items
                    .get(id)
                    .cloned()
                    .ok_or_else(|| SortableError::UnknownItem(id.clone()))?;
                let removed = self.list.remove_item(&item);
                tracing::debug!(id = %id, removed, "remove requested");
                (true, vec![])
            }
            ScriptEvent::Resize { height } => {
                self.surface.set_viewport_height(*height);
                (true, vec![])
            }
            ScriptEvent::Destroy => {
                self.list.destroy();
                (true, vec![])
            }
        };

        for action in &actions {
            if let Action::ScrollBy { dy } = action {
                let content = self.layout.content_height(&self.list);
                let viewport = self.surface.viewport_height();
                let applied = self.layout.scroll_by(*dy, content, viewport);
                tracing::trace!(requested = dy, applied, "viewport scrolled");
            }
        }
        self.layout.reflow(&self.list);

        Ok(StepRecord {
            step,
            event: event.clone(),
            delivered,
            actions,
            order: self.order(),
            mode: self.list.mode(),
            scroll_y: self.layout.scroll_y(),
        })
    }

    /// Current order as item ids.
    #[must_use]
    pub fn order(&self) -> Vec<String> {
        self.list
            .items()
            .iter()
            .map(|item| item.id().to_string())
            .collect()
    }

    /// The engine under replay.
    #[must_use]
    pub const fn list(&self) -> &SortableList<ListItem> {
        &self.list
    }

    /// The surface holding listener registrations and the viewport.
    #[must_use]
    pub fn surface(&self) -> &RecordingSurface {
        &self.surface
    }

    #[must_use]
    pub const fn layout(&self) -> &StackLayout {
        &self.layout
    }

    fn dispatch(&mut self, listener: ListenerKind, event: Event) -> (bool, Vec<Action>) {
        if !self.surface.is_listening(listener) {
            tracing::trace!(?listener, "no listener registered, event dropped");
            return (false, vec![]);
        }
        let (_, actions) = handle_event(&mut self.list, &event);
        (true, actions)
    }

    /// The known item with this id, or a new one.
    fn item_for(&mut self, entry: &ScriptItem) -> Rc<ListItem> {
        Rc::clone(
            self.items
                .entry(entry.id.clone())
                .or_insert_with(|| new_item(entry)),
        )
    }
}

fn new_item(entry: &ScriptItem) -> Rc<ListItem> {
    Rc::new(ListItem::new(entry.id.clone(), entry.label(), entry.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Script {
        Script::from_toml_str(
            r#"
            viewport_height = 400.0
            [[items]]
            id = "a"
            height = 50.0
            [[items]]
            id = "b"
            height = 50.0
            [[items]]
            id = "c"
            height = 50.0
            "#,
        )
        .unwrap()
    }

    #[test]
    fn page_events_are_dropped_without_a_drag() {
        let mut runner = Runner::new(&abc(), EngineConfig::default());
        let record = runner.step(0, &ScriptEvent::Move { x: 5.0, y: 10.0 }).unwrap();
        assert!(!record.delivered);
        assert_eq!(record.mode, DragMode::Idle);
    }

    #[test]
    fn drag_registers_and_releases_page_listeners() {
        let mut runner = Runner::new(&abc(), EngineConfig::default());
        assert_eq!(runner.surface().active_listeners(), vec![ListenerKind::ContainerPointerDown]);

        runner.step(0, &ScriptEvent::Down { x: 5.0, y: 10.0 }).unwrap();
        assert!(runner.surface().is_listening(ListenerKind::PagePointerMove));
        assert!(runner.surface().is_listening(ListenerKind::PagePointerUp));

        runner.step(1, &ScriptEvent::Up { x: 5.0, y: 10.0 }).unwrap();
        assert_eq!(runner.surface().active_listeners(), vec![ListenerKind::ContainerPointerDown]);
        assert_eq!(runner.order(), ["a", "b", "c"]);
    }

    #[test]
    fn removing_unknown_id_is_an_error() {
        let mut runner = Runner::new(&abc(), EngineConfig::default());
        let err = runner.step(0, &ScriptEvent::Remove { id: "zz".to_string() }).unwrap_err();
        assert!(matches!(err, SortableError::UnknownItem(id) if id == "zz"));
    }

    #[test]
    fn adding_a_known_id_moves_it_to_the_end() {
        let mut runner = Runner::new(&abc(), EngineConfig::default());
        let a = ScriptItem { id: "a".to_string(), label: None, height: 50.0 };
        runner.step(0, &ScriptEvent::Add(a)).unwrap();
        assert_eq!(runner.order(), ["b", "c", "a"]);
    }

    #[test]
    fn scroll_actions_move_the_layout() {
        let script = Script::from_toml_str(
            r#"
            viewport_height = 100.0
            [[items]]
            id = "a"
            height = 50.0
            [[items]]
            id = "b"
            height = 50.0
            [[items]]
            id = "c"
            height = 50.0
            [[items]]
            id = "d"
            height = 50.0
            "#,
        )
        .unwrap();
        let mut runner = Runner::new(&script, EngineConfig::default());

        runner.step(0, &ScriptEvent::Down { x: 5.0, y: 60.0 }).unwrap();
        let record = runner.step(1, &ScriptEvent::Move { x: 5.0, y: 95.0 }).unwrap();

        assert_eq!(record.actions, vec![Action::ScrollBy { dy: 10.0 }]);
        assert!((record.scroll_y - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn resize_updates_the_surface_viewport() {
        let mut runner = Runner::new(&abc(), EngineConfig::default());
        assert!((runner.surface().viewport_height() - 400.0).abs() < f64::EPSILON);

        let record = runner.step(0, &ScriptEvent::Resize { height: 120.0 }).unwrap();

        assert!(record.delivered);
        assert!(record.actions.is_empty());
        assert!((runner.surface().viewport_height() - 120.0).abs() < f64::EPSILON);
    }
}
