use std::{cell::RefCell, rc::Rc};

use derive_ex::derive_ex;
use futures::Future;
use slabmap::SlabMap;
use tracing::debug;

use crate::{
    derive, Catalog, Category, DataSource, EngineConfig, InputError, PageNumber, RawTransition,
    RecordId, SortDirective, SortField, Subscription, Transition, View, ViewState,
};


type Subscriber = Rc<dyn Fn(&ViewState, &View)>;

/// Holds the current [`ViewState`] and its derived [`View`].
///
/// The state is only ever replaced as a whole, and the view is recomputed on each replacement,
/// so readers observe either the old pair or the new pair.
/// Cloning a `ViewStore` yields another handle to the same store.
#[derive_ex(Clone, bound())]
pub struct ViewStore(Rc<StoreNode>);

struct StoreNode {
    current: RefCell<Snapshot>,
    subscribers: RefCell<SlabMap<Subscriber>>,
}

#[derive(Clone)]
struct Snapshot {
    state: Rc<ViewState>,
    view: Rc<View>,
}
impl Snapshot {
    fn new(state: ViewState) -> Self {
        let view = derive(&state);
        Self {
            state: Rc::new(state),
            view: Rc::new(view),
        }
    }
}

impl ViewStore {
    pub fn new(config: EngineConfig) -> Self {
        Self(Rc::new(StoreNode {
            current: RefCell::new(Snapshot::new(ViewState::new(&config))),
            subscribers: RefCell::new(SlabMap::new()),
        }))
    }

    /// Current state.
    pub fn state(&self) -> Rc<ViewState> {
        self.0.current.borrow().state.clone()
    }

    /// View derived from the current state.
    pub fn view(&self) -> Rc<View> {
        self.0.current.borrow().view.clone()
    }

    /// Registers `f` to be called after every replacement of the state.
    ///
    /// `f` may read the store and dispatch further transitions.
    /// The last call every subscriber receives carries the current state.
    pub fn subscribe(&self, f: impl Fn(&ViewState, &View) + 'static) -> Subscription {
        let key = self.0.subscribers.borrow_mut().insert(Rc::new(f));
        Subscription::from_weak_fn(Rc::downgrade(&self.0), move |node: &StoreNode| {
            node.subscribers.borrow_mut().remove(key);
        })
    }

    /// Loads the collections from `source`, keeping filter, sort and page.
    pub fn load(&self, source: &(impl DataSource + ?Sized)) {
        let records = source.records();
        let categories = source.categories();
        debug!(
            records = records.len(),
            categories = categories.len(),
            "load"
        );
        let state = self.state().with_catalog(records, categories);
        self.replace(state);
    }

    /// Waits for `catalog` and loads it.
    ///
    /// Until `catalog` completes, the store holds no records.
    pub async fn load_async(&self, catalog: impl Future<Output = Catalog>) {
        let catalog = catalog.await;
        self.load(&catalog);
    }

    /// Applies `transition` to the current state.
    ///
    /// Returns `false`, leaving the store untouched, if `transition` targets a record that does not exist.
    pub fn dispatch(&self, transition: Transition) -> bool {
        let old = self.state();
        if let Some(id) = transition.target_record() {
            if old.record(id).is_none() {
                debug!(%id, ?transition, "record not found");
                return false;
            }
        }
        debug!(?transition, "dispatch");
        self.replace(old.apply(&transition));
        true
    }

    /// Validates `raw` against the current state, then applies it.
    pub fn dispatch_raw(&self, raw: &RawTransition) -> Result<bool, InputError> {
        let transition = raw.validate(&self.state())?;
        Ok(self.dispatch(transition))
    }

    pub fn select_category(&self, category: Category) {
        self.dispatch(Transition::SelectCategory(category));
    }
    pub fn set_search_query(&self, query: impl Into<String>) {
        self.dispatch(Transition::SetSearchQuery(query.into()));
    }
    pub fn set_sort(&self, sort: SortDirective) {
        self.dispatch(Transition::SetSort(sort));
    }
    pub fn sort_by(&self, field: SortField) {
        self.dispatch(Transition::SortBy(field));
    }
    pub fn select_page(&self, page: PageNumber) {
        self.dispatch(Transition::SelectPage(page));
    }
    pub fn toggle_flag(&self, id: RecordId) -> bool {
        self.dispatch(Transition::ToggleFlag(id))
    }
    pub fn remove_record(&self, id: RecordId) -> bool {
        self.dispatch(Transition::RemoveRecord(id))
    }

    fn replace(&self, state: ViewState) {
        let snapshot = Snapshot::new(state);
        *self.0.current.borrow_mut() = snapshot.clone();
        let subscribers: Vec<Subscriber> = self.0.subscribers.borrow().values().cloned().collect();
        for f in subscribers {
            f(&snapshot.state, &snapshot.view);
            // A nested replace has already notified everyone of a newer state.
            if !Rc::ptr_eq(&self.0.current.borrow().state, &snapshot.state) {
                break;
            }
        }
    }
}
impl Default for ViewStore {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
impl std::fmt::Debug for ViewStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0.current.try_borrow() {
            Ok(current) => std::fmt::Debug::fmt(&*current.state, f),
            Err(_) => write!(f, "<borrowed>"),
        }
    }
}
