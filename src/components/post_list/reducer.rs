use crate::environment::model::Post;
use crate::environment::types::DEFAULT_PAGE_LIMIT;
use crate::environment::Environment;
use crate::store::{Effect, MessageContext};
use crate::view_model::FetchingState;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct State {
    pub limit: usize,
    /// Starts at 1
    pub current_page: usize,
    pub fetching_state: FetchingState<Vec<Post>>,
    /// Accumulated over all pages. Only a first page response replaces it.
    pub posts: im::Vector<Post>,
    /// A page after the first one is in flight
    pub is_fetching_next: bool,
}

pub type ViewStore = crate::store::ViewStore<super::PostListReducer>;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    System(SystemAction),
    User(UserAction),
}

#[derive(Clone, Eq, PartialEq)]
pub enum SystemAction {
    ViewDidLoad,
    Fetch { page: usize, limit: usize },
    /// Index of the row that became visible
    DidScroll(usize),
    DidReceive(FetchingState<Vec<Post>>),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum UserAction {
    DidSelectPost(Post),
    Refresh,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DelegateEvent {
    OpenPostDetails(Post),
}

impl std::fmt::Debug for SystemAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ViewDidLoad => write!(f, "ViewDidLoad"),
            Self::Fetch { page, limit } => f
                .debug_struct("Fetch")
                .field("page", page)
                .field("limit", limit)
                .finish(),
            Self::DidScroll(arg0) => f.debug_tuple("DidScroll").field(arg0).finish(),
            Self::DidReceive(FetchingState::Fetched(posts)) => {
                write!(f, "DidReceive(Fetched({} posts))", posts.len())
            }
            Self::DidReceive(arg0) => f.debug_tuple("DidReceive").field(arg0).finish(),
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_LIMIT)
    }
}

impl State {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            current_page: 1,
            fetching_state: FetchingState::Fetching,
            posts: im::Vector::new(),
            is_fetching_next: false,
        }
    }

    /// Any page, first or later, is outstanding
    pub fn is_fetching(&self) -> bool {
        self.fetching_state.is_fetching() || self.is_fetching_next
    }

    fn is_last_row(&self, index: usize) -> bool {
        self.posts.len().checked_sub(1) == Some(index)
    }
}

fn fetch(page: usize, limit: usize) -> Action {
    Action::System(SystemAction::Fetch { page, limit })
}

pub fn reduce(
    context: &impl MessageContext<Action, DelegateEvent>,
    action: Action,
    state: &mut State,
    environment: &Environment,
) -> Effect<Action> {
    log::trace!("{action:?}");
    match action {
        Action::System(SystemAction::ViewDidLoad) => {
            Effect::action(fetch(state.current_page, state.limit))
        }
        Action::System(SystemAction::Fetch { page, limit }) => {
            if page == 1 {
                state.fetching_state = FetchingState::Fetching;
            } else {
                state.is_fetching_next = true;
            }
            log::debug!("fetching page {page} ({limit} per page)");
            let model = environment.model.clone();
            Effect::future(async move { model.posts(page, limit).await }, |result| {
                Action::System(SystemAction::DidReceive(result.into()))
            })
        }
        Action::System(SystemAction::DidScroll(index)) => {
            if !state.is_last_row(index) || state.is_fetching() {
                return Effect::NONE;
            }
            state.current_page += 1;
            Effect::action(fetch(state.current_page, state.limit))
        }
        Action::System(SystemAction::DidReceive(fetching_state)) => {
            state.is_fetching_next = false;
            if let Some(posts) = fetching_state.value() {
                if state.current_page == 1 {
                    state.posts = posts.iter().cloned().collect();
                } else {
                    state.posts.extend(posts.iter().cloned());
                }
            }
            state.fetching_state = fetching_state;
            Effect::NONE
        }
        Action::User(UserAction::DidSelectPost(post)) => {
            context.send_parent(DelegateEvent::OpenPostDetails(post));
            Effect::NONE
        }
        Action::User(UserAction::Refresh) => {
            if state.is_fetching() {
                return Effect::NONE;
            }
            state.current_page = 1;
            Effect::action(fetch(1, state.limit))
        }
    }
}
