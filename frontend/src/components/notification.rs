use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use chrono::{DateTime, Local, Utc};
use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::use_event_with_window;

/// Delay before the enter transition starts, so the browser sees the initial state.
pub const ENTER_DELAY_MS: u32 = 100;
pub const DISPLAY_MS: u32 = 5000;
pub const EXIT_MS: u32 = 400;

/// Longest a notification stays in the container when nobody touches it.
pub const fn removal_deadline_ms() -> u32 {
    DISPLAY_MS + EXIT_MS
}

const CONTAINER_STYLE: &str = "position: fixed; top: 100px; right: 20px; z-index: 10000; pointer-events: none;";

const TOAST_STYLE: &str = "color: white; padding: 16px 24px; border-radius: 12px; margin-bottom: 12px; \
     transition: all 0.4s cubic-bezier(0.68, -0.55, 0.265, 1.55); pointer-events: auto; \
     box-shadow: 0 8px 25px rgba(0,0,0,0.2); font-weight: 500; max-width: 320px; \
     backdrop-filter: blur(10px); border: 1px solid rgba(255, 255, 255, 0.2); cursor: pointer;";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn background(self) -> &'static str {
        match self {
            Severity::Success => "linear-gradient(135deg, #4CAF50, #45a049)",
            Severity::Info => "linear-gradient(135deg, #2196F3, #1976D2)",
            Severity::Warning => "linear-gradient(135deg, #FF9800, #F57C00)",
            Severity::Error => "linear-gradient(135deg, #f44336, #d32f2f)",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Severity::Success => "notification--success",
            Severity::Info => "notification--info",
            Severity::Warning => "notification--warning",
            Severity::Error => "notification--error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Visible,
    Leaving,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
    pub phase: Phase,
}

impl Notification {
    pub fn new(id: NotificationId, message: String, severity: Severity, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            message,
            severity,
            created_at,
            phase: Phase::Entering,
        }
    }

    pub fn style(&self) -> String {
        let transform = match self.phase {
            Phase::Visible => "translateX(0) scale(1)",
            Phase::Entering | Phase::Leaving => "translateX(100%) scale(0.8)",
        };
        format!(
            "{} background: {}; transform: {};",
            TOAST_STYLE,
            self.severity.background(),
            transform
        )
    }
}

pub enum NotificationAction {
    Push(Notification),
    Show(NotificationId),
    Dismiss(NotificationId),
    Remove(NotificationId),
}

/// Notifications currently in the container, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationState {
    pub items: Vec<Notification>,
}

impl NotificationState {
    fn with_phase(&self, id: NotificationId, from: &[Phase], to: Phase) -> Vec<Notification> {
        self.items
            .iter()
            .cloned()
            .map(|mut item| {
                if item.id == id && from.contains(&item.phase) {
                    item.phase = to;
                }
                item
            })
            .collect()
    }
}

impl Reducible for NotificationState {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let items = match action {
            NotificationAction::Push(notification) => {
                let mut items = self.items.clone();
                items.push(notification);
                items
            }
            NotificationAction::Show(id) => self.with_phase(id, &[Phase::Entering], Phase::Visible),
            NotificationAction::Dismiss(id) => {
                self.with_phase(id, &[Phase::Entering, Phase::Visible], Phase::Leaving)
            }
            NotificationAction::Remove(id) => {
                self.items.iter().filter(|item| item.id != id).cloned().collect()
            }
        };
        Rc::new(Self { items })
    }
}

/// Timed transition of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Show,
    Dismiss,
    Remove,
}

impl Step {
    pub fn delay_ms(self) -> u32 {
        match self {
            Step::Show => ENTER_DELAY_MS,
            Step::Dismiss => DISPLAY_MS,
            Step::Remove => EXIT_MS,
        }
    }
}

struct Tracked<T> {
    timers: Vec<T>,
    leaving: bool,
}

/// Pending timers per notification. Whatever a method hands back is meant to be dropped,
/// which cancels it.
pub struct LifecycleBook<T> {
    entries: BTreeMap<NotificationId, Tracked<T>>,
}

impl<T> Default for LifecycleBook<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<T> LifecycleBook<T> {
    pub fn track(&mut self, id: NotificationId) {
        self.entries.insert(
            id,
            Tracked {
                timers: Vec::new(),
                leaving: false,
            },
        );
    }

    /// Stores a timer for a tracked notification; for an unknown one the timer comes back.
    pub fn add_timer(&mut self, id: NotificationId, timer: T) -> Option<T> {
        match self.entries.get_mut(&id) {
            Some(tracked) => {
                tracked.timers.push(timer);
                None
            }
            None => Some(timer),
        }
    }

    /// Marks a notification as leaving and returns its pending timers. `None` when it is
    /// already leaving or gone.
    pub fn begin_leaving(&mut self, id: NotificationId) -> Option<Vec<T>> {
        let tracked = self.entries.get_mut(&id)?;
        if tracked.leaving {
            return None;
        }
        tracked.leaving = true;
        Some(std::mem::take(&mut tracked.timers))
    }

    /// Tracks a new notification and arms its show and auto-dismiss timers.
    pub fn admit(&mut self, id: NotificationId, mut arm: impl FnMut(Step) -> T) {
        self.track(id);
        for step in [Step::Show, Step::Dismiss] {
            let rejected = self.add_timer(id, arm(step));
            drop(rejected);
        }
    }

    /// Cancels whatever the notification still had pending and arms its removal.
    /// Returns `false` when it was already leaving or gone.
    pub fn leave(&mut self, id: NotificationId, arm: impl FnOnce(Step) -> T) -> bool {
        let Some(cancelled) = self.begin_leaving(id) else {
            return false;
        };
        drop(cancelled);
        let rejected = self.add_timer(id, arm(Step::Remove));
        drop(rejected);
        true
    }

    pub fn finish(&mut self, id: NotificationId) -> Option<Vec<T>> {
        self.entries.remove(&id).map(|tracked| tracked.timers)
    }

    /// Notifications not yet leaving, in insertion order.
    pub fn visible(&self) -> Vec<NotificationId> {
        self.entries
            .iter()
            .filter(|(_, tracked)| !tracked.leaving)
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn clear(&mut self) -> Vec<T> {
        std::mem::take(&mut self.entries)
            .into_values()
            .flat_map(|tracked| tracked.timers)
            .collect()
    }
}

/// Handle for showing notifications, provided by [`NotificationProvider`].
#[derive(Clone)]
pub struct NotificationQueue {
    dispatcher: UseReducerDispatcher<NotificationState>,
    book: Rc<RefCell<LifecycleBook<Timeout>>>,
    next_id: Rc<Cell<u64>>,
}

impl PartialEq for NotificationQueue {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.book, &other.book)
    }
}

#[derive(Clone)]
struct WeakQueue {
    dispatcher: UseReducerDispatcher<NotificationState>,
    book: Weak<RefCell<LifecycleBook<Timeout>>>,
    next_id: Weak<Cell<u64>>,
}

impl WeakQueue {
    fn upgrade(&self) -> Option<NotificationQueue> {
        Some(NotificationQueue {
            dispatcher: self.dispatcher.clone(),
            book: self.book.upgrade()?,
            next_id: self.next_id.upgrade()?,
        })
    }
}

/// Returned by [`NotificationQueue::enqueue`]; does not keep the notification alive.
#[derive(Clone)]
pub struct NotificationHandle {
    id: NotificationId,
    queue: WeakQueue,
}

impl NotificationHandle {
    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn dismiss(&self) {
        if let Some(queue) = self.queue.upgrade() {
            queue.dismiss(self.id);
        }
    }
}

impl NotificationQueue {
    fn new(dispatcher: UseReducerDispatcher<NotificationState>) -> Self {
        Self {
            dispatcher,
            book: Rc::new(RefCell::new(LifecycleBook::default())),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    fn downgrade(&self) -> WeakQueue {
        WeakQueue {
            dispatcher: self.dispatcher.clone(),
            book: Rc::downgrade(&self.book),
            next_id: Rc::downgrade(&self.next_id),
        }
    }

    fn arm(&self, id: NotificationId, step: Step) -> Timeout {
        let queue = self.downgrade();
        Timeout::new(step.delay_ms(), move || {
            if let Some(queue) = queue.upgrade() {
                queue.advance(id, step);
            }
        })
    }

    fn advance(&self, id: NotificationId, step: Step) {
        match step {
            Step::Show => self.dispatcher.dispatch(NotificationAction::Show(id)),
            Step::Dismiss => self.dismiss(id),
            Step::Remove => self.remove(id),
        }
    }

    pub fn enqueue(&self, message: impl Into<String>, severity: Severity) -> NotificationHandle {
        let id = NotificationId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        let message = message.into();
        debug!("notification {:?} ({:?}): {}", id, severity, message);

        self.dispatcher.dispatch(NotificationAction::Push(Notification::new(
            id,
            message,
            severity,
            Utc::now(),
        )));
        self.book.borrow_mut().admit(id, |step| self.arm(id, step));

        NotificationHandle {
            id,
            queue: self.downgrade(),
        }
    }

    /// Starts the exit transition; the notification leaves the container once it ends.
    /// Dismissing twice, or after removal, does nothing.
    pub fn dismiss(&self, id: NotificationId) {
        let leaving = self.book.borrow_mut().leave(id, |step| self.arm(id, step));
        if leaving {
            self.dispatcher.dispatch(NotificationAction::Dismiss(id));
        }
    }

    pub fn dismiss_all(&self) {
        let visible = self.book.borrow().visible();
        for id in visible {
            self.dismiss(id);
        }
    }

    fn remove(&self, id: NotificationId) {
        let finished = self.book.borrow_mut().finish(id);
        self.dispatcher.dispatch(NotificationAction::Remove(id));
        drop(finished);
    }

    fn shutdown(&self) {
        let pending = self.book.borrow_mut().clear();
        debug!("notification queue closed, {} timers cancelled", pending.len());
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the single notification container and hands a [`NotificationQueue`] to its
/// children through context. Escape dismisses everything on screen.
#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let state = use_reducer(NotificationState::default);
    let queue = {
        let dispatcher = state.dispatcher();
        use_memo(move |_| NotificationQueue::new(dispatcher), ())
    };

    {
        let queue = (*queue).clone();
        use_effect_with_deps(move |_| move || queue.shutdown(), ());
    }

    {
        let queue = (*queue).clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                queue.dismiss_all();
            }
        });
    }

    html! {
        <ContextProvider<NotificationQueue> context={(*queue).clone()}>
            { props.children.clone() }
            <div id="notification-container" style={CONTAINER_STYLE}>
                { for state.items.iter().map(|item| {
                    let onclick = {
                        let queue = (*queue).clone();
                        let id = item.id;
                        Callback::from(move |_: MouseEvent| queue.dismiss(id))
                    };
                    let shown_at = item.created_at.with_timezone(&Local).format("%H:%M:%S").to_string();
                    html! {
                        <div
                            key={item.id.0}
                            class={classes!("notification", item.severity.class())}
                            style={item.style()}
                            title={shown_at}
                            {onclick}
                        >
                            { item.message.clone() }
                        </div>
                    }
                }) }
            </div>
        </ContextProvider<NotificationQueue>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: u64) -> Notification {
        Notification::new(NotificationId(id), format!("n{}", id), Severity::Success, Utc::now())
    }

    fn reduce(state: Rc<NotificationState>, action: NotificationAction) -> Rc<NotificationState> {
        state.reduce(action)
    }

    fn phases(state: &NotificationState) -> Vec<(u64, Phase)> {
        state.items.iter().map(|item| (item.id.0, item.phase)).collect()
    }

    #[test]
    fn lifecycle_runs_enter_visible_leave_remove() {
        let state = Rc::new(NotificationState::default());
        let state = reduce(state, NotificationAction::Push(note(1)));
        assert_eq!(phases(&state), vec![(1, Phase::Entering)]);

        let state = reduce(state, NotificationAction::Show(NotificationId(1)));
        assert_eq!(phases(&state), vec![(1, Phase::Visible)]);

        let state = reduce(state, NotificationAction::Dismiss(NotificationId(1)));
        assert_eq!(phases(&state), vec![(1, Phase::Leaving)]);

        let state = reduce(state, NotificationAction::Remove(NotificationId(1)));
        assert!(state.items.is_empty());
    }

    #[test]
    fn late_show_does_not_revive_a_leaving_notification() {
        let state = Rc::new(NotificationState::default());
        let state = reduce(state, NotificationAction::Push(note(1)));
        let state = reduce(state, NotificationAction::Dismiss(NotificationId(1)));
        let state = reduce(state, NotificationAction::Show(NotificationId(1)));
        assert_eq!(phases(&state), vec![(1, Phase::Leaving)]);
    }

    #[test]
    fn notifications_keep_insertion_order() {
        let mut state = Rc::new(NotificationState::default());
        for id in [3, 1, 2] {
            state = reduce(state, NotificationAction::Push(note(id)));
        }
        state = reduce(state, NotificationAction::Remove(NotificationId(1)));
        assert_eq!(
            phases(&state),
            vec![(3, Phase::Entering), (2, Phase::Entering)]
        );
    }

    #[test]
    fn repeated_messages_stack() {
        let mut state = Rc::new(NotificationState::default());
        for id in [1, 2] {
            let mut item = note(id);
            item.message = "Nutella Waffle ₹189".to_string();
            state = reduce(state, NotificationAction::Push(item));
        }
        state = reduce(state, NotificationAction::Show(NotificationId(2)));
        assert_eq!(
            phases(&state),
            vec![(1, Phase::Entering), (2, Phase::Visible)]
        );
    }

    #[test]
    fn style_follows_phase_and_severity() {
        let mut item = note(1);
        item.severity = Severity::Warning;
        assert!(item.style().contains("translateX(100%) scale(0.8)"));
        assert!(item.style().contains("#FF9800"));
        item.phase = Phase::Visible;
        assert!(item.style().contains("translateX(0) scale(1)"));
    }

    type Due = Rc<RefCell<BTreeMap<u64, (u32, NotificationId, Step)>>>;

    /// Stand-in for a `Timeout`: dropping it takes it off the clock.
    struct Armed {
        key: u64,
        due: Due,
    }

    impl Drop for Armed {
        fn drop(&mut self) {
            self.due.borrow_mut().remove(&self.key);
        }
    }

    /// Drives a [`LifecycleBook`] the way [`NotificationQueue`] does, on simulated time.
    #[derive(Default)]
    struct Clock {
        now: u32,
        next_key: u64,
        due: Due,
        book: LifecycleBook<Armed>,
        shown: Vec<(NotificationId, u32)>,
        removed: Vec<(NotificationId, u32)>,
    }

    fn arm(due: &Due, next_key: &mut u64, now: u32, id: NotificationId, step: Step) -> Armed {
        let key = *next_key;
        *next_key += 1;
        due.borrow_mut().insert(key, (now + step.delay_ms(), id, step));
        Armed { key, due: due.clone() }
    }

    impl Clock {
        fn enqueue(&mut self, id: NotificationId) {
            let (due, next_key, now) = (&self.due, &mut self.next_key, self.now);
            self.book.admit(id, |step| arm(due, next_key, now, id, step));
        }

        fn dismiss(&mut self, id: NotificationId) -> bool {
            let (due, next_key, now) = (&self.due, &mut self.next_key, self.now);
            self.book.leave(id, |step| arm(due, next_key, now, id, step))
        }

        fn advance_to(&mut self, until: u32) {
            loop {
                let next = {
                    let due = self.due.borrow();
                    let earliest = due
                        .iter()
                        .filter(|(_, (at, _, _))| *at <= until)
                        .min_by_key(|(key, (at, _, _))| (*at, **key))
                        .map(|(key, entry)| (*key, *entry));
                    earliest
                };
                let Some((key, (at, id, step))) = next else {
                    break;
                };
                self.due.borrow_mut().remove(&key);
                self.now = at;
                match step {
                    Step::Show => self.shown.push((id, at)),
                    Step::Dismiss => {
                        self.dismiss(id);
                    }
                    Step::Remove => {
                        let finished = self.book.finish(id);
                        drop(finished);
                        self.removed.push((id, at));
                    }
                }
            }
            self.now = until;
        }
    }

    #[test]
    fn untouched_notification_is_gone_within_deadline() {
        let id = NotificationId(0);
        let mut clock = Clock::default();
        clock.enqueue(id);

        clock.advance_to(removal_deadline_ms() - 1);
        assert_eq!(clock.shown, vec![(id, ENTER_DELAY_MS)]);
        assert!(clock.removed.is_empty());
        assert!(clock.book.visible().is_empty());

        clock.advance_to(removal_deadline_ms());
        assert_eq!(clock.removed, vec![(id, 5400)]);
        assert!(clock.due.borrow().is_empty());
    }

    #[test]
    fn click_removes_within_exit_time_and_cancels_auto_dismiss() {
        let id = NotificationId(0);
        let mut clock = Clock::default();
        clock.enqueue(id);

        clock.advance_to(1000);
        assert!(clock.dismiss(id));
        assert!(!clock.dismiss(id));

        clock.advance_to(1000 + EXIT_MS - 1);
        assert!(clock.removed.is_empty());
        clock.advance_to(1000 + EXIT_MS);
        assert_eq!(clock.removed, vec![(id, 1400)]);

        clock.advance_to(20_000);
        assert_eq!(clock.removed.len(), 1);
        assert!(clock.due.borrow().is_empty());
    }

    #[test]
    fn dismiss_before_show_skips_the_enter_transition() {
        let id = NotificationId(0);
        let mut clock = Clock::default();
        clock.enqueue(id);

        clock.advance_to(50);
        assert!(clock.dismiss(id));
        clock.advance_to(20_000);
        assert!(clock.shown.is_empty());
        assert_eq!(clock.removed, vec![(id, 450)]);
    }

    #[test]
    fn notifications_expire_independently() {
        let (first, second) = (NotificationId(0), NotificationId(1));
        let mut clock = Clock::default();
        clock.enqueue(first);
        clock.advance_to(2000);
        clock.enqueue(second);

        clock.advance_to(5400);
        assert_eq!(clock.removed, vec![(first, 5400)]);
        assert_eq!(clock.book.visible(), vec![second]);

        clock.advance_to(7400);
        assert_eq!(clock.removed, vec![(first, 5400), (second, 7400)]);
    }

    #[test]
    fn dismissal_hands_back_pending_timers_once() {
        let mut book = LifecycleBook::<&str>::default();
        let id = NotificationId(7);
        book.track(id);
        assert!(book.add_timer(id, "enter").is_none());
        assert!(book.add_timer(id, "auto-dismiss").is_none());

        assert_eq!(book.begin_leaving(id), Some(vec!["enter", "auto-dismiss"]));
        assert_eq!(book.begin_leaving(id), None);

        assert!(book.add_timer(id, "remove").is_none());
        assert_eq!(book.finish(id), Some(vec!["remove"]));
        assert_eq!(book.finish(id), None);
        assert!(book.visible().is_empty());
    }

    #[test]
    fn timers_for_unknown_notifications_are_rejected() {
        let mut book = LifecycleBook::<u32>::default();
        assert_eq!(book.add_timer(NotificationId(1), 5), Some(5));
    }

    #[test]
    fn dismiss_all_targets_only_visible() {
        let mut book = LifecycleBook::<u32>::default();
        for id in 0..4 {
            book.track(NotificationId(id));
        }
        book.begin_leaving(NotificationId(2));
        assert_eq!(
            book.visible(),
            vec![NotificationId(0), NotificationId(1), NotificationId(3)]
        );
        assert!(book.clear().is_empty());
        assert!(book.visible().is_empty());
    }
}
