//! Property-based invariant tests for the reorder engine.
//!
//! Random sequences of add, remove, pointer-down (grab, delete or body),
//! move, up and cancel are applied to a list with lost-capture cancel
//! enabled. After every step:
//!
//! 1. `items()` holds every live item exactly once, and nothing else
//! 2. A placeholder exists exactly while the engine is dragging
//! 3. `remove_item` succeeds only for live items that are not being dragged

use proptest::prelude::*;
use sortable_list::{
    handle_event, Action, DragMode, EngineConfig, Event, ListItem, NullSurface, Point,
    SortableList, StackLayout,
};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

const ROW_HEIGHT: f64 = 50.0;
const WIDTH: f64 = 300.0;
const GRAB_X: f64 = 5.0;
const BODY_X: f64 = 150.0;
const DELETE_X: f64 = 290.0;
const IDS: u8 = 8;

// ── Strategies ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Add(u8),
    Remove(u8),
    Down(f64, f64),
    Move(f64),
    Up(f64),
    Cancel,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => (0..IDS).prop_map(Op::Add),
        1 => (0..IDS).prop_map(Op::Remove),
        3 => (prop_oneof![Just(GRAB_X), Just(BODY_X), Just(DELETE_X)], -20.0..450.0f64)
            .prop_map(|(x, y)| Op::Down(x, y)),
        4 => (-50.0..900.0f64).prop_map(Op::Move),
        2 => (-50.0..900.0f64).prop_map(Op::Up),
        1 => Just(Op::Cancel),
    ]
}

// ── Harness ─────────────────────────────────────────────────────────────

struct Model {
    list: SortableList<ListItem>,
    layout: StackLayout,
    known: HashMap<String, Rc<ListItem>>,
    live: BTreeSet<String>,
}

impl Model {
    fn new(initial: u8) -> Self {
        let mut known = HashMap::new();
        let items: Vec<_> = (0..initial)
            .map(|n| {
                let item = Rc::new(ListItem::new(id(n), id(n), ROW_HEIGHT));
                known.insert(id(n), Rc::clone(&item));
                item
            })
            .collect();
        let live = known.keys().cloned().collect();

        let config = EngineConfig {
            cancel_on_lost_capture: true,
            ..EngineConfig::default()
        };
        let list = SortableList::with_config(items, Rc::new(NullSurface), config);
        let layout = StackLayout::new(WIDTH);
        layout.reflow(&list);
        Self { list, layout, known, live }
    }

    fn order(&self) -> Vec<String> {
        self.list.items().iter().map(|item| item.id().to_string()).collect()
    }

    fn apply(&mut self, op: &Op) -> Result<(), TestCaseError> {
        match *op {
            Op::Add(n) => {
                let item = Rc::clone(
                    self.known
                        .entry(id(n))
                        .or_insert_with(|| Rc::new(ListItem::new(id(n), id(n), ROW_HEIGHT))),
                );
                self.list.add_item(item);
                self.live.insert(id(n));
            }
            Op::Remove(n) => {
                if let Some(item) = self.known.get(&id(n)).cloned() {
                    let expected = self.live.contains(&id(n)) && !self.list.is_dragging(&item);
                    let removed = self.list.remove_item(&item);
                    prop_assert_eq!(removed, expected);
                    if removed {
                        self.live.remove(&id(n));
                    }
                }
            }
            Op::Down(x, y) => {
                let before = self.order();
                let event = Event::PointerDown(Point::new(x, y));
                let (_, actions) = handle_event(&mut self.list, &event);
                for action in actions {
                    if let Action::Removed { index } = action {
                        prop_assert!(index < before.len());
                        self.live.remove(&before[index]);
                    }
                }
            }
            Op::Move(y) => {
                handle_event(&mut self.list, &Event::PointerMove(Point::new(GRAB_X, y)));
            }
            Op::Up(y) => {
                handle_event(&mut self.list, &Event::PointerUp(Point::new(GRAB_X, y)));
            }
            Op::Cancel => {
                handle_event(&mut self.list, &Event::PointerCancel);
            }
        }
        self.layout.reflow(&self.list);
        Ok(())
    }

    fn check(&self) -> Result<(), TestCaseError> {
        let order = self.order();
        let unique: BTreeSet<String> = order.iter().cloned().collect();
        prop_assert_eq!(unique.len(), order.len(), "duplicate item in {:?}", order);
        prop_assert_eq!(&unique, &self.live);
        prop_assert_eq!(self.list.len(), self.live.len());

        let dragging = self.list.mode() == DragMode::Dragging;
        prop_assert_eq!(self.list.placeholder_index().is_some(), dragging);
        Ok(())
    }
}

fn id(n: u8) -> String {
    format!("i{n}")
}

// ═══════════════════════════════════════════════════════════════════════
// 1-3. Every step keeps the sequence a permutation of the live items
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn items_stay_a_permutation_of_the_live_set(
        initial in 0..IDS,
        ops in prop::collection::vec(op_strategy(), 1..120),
    ) {
        let mut model = Model::new(initial);
        model.check()?;

        for op in &ops {
            model.apply(op)?;
            model.check()?;
        }
    }

    #[test]
    fn releasing_always_returns_to_idle(
        initial in 1..IDS,
        ops in prop::collection::vec(op_strategy(), 0..60),
        release_y in -50.0..900.0f64,
    ) {
        let mut model = Model::new(initial);
        for op in &ops {
            model.apply(op)?;
        }

        model.apply(&Op::Up(release_y))?;

        prop_assert_eq!(model.list.mode(), DragMode::Idle);
        prop_assert_eq!(model.list.placeholder_index(), None);
        model.check()?;
    }
}
