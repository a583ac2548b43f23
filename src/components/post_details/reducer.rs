use crate::environment::model::{Comment, Post};
use crate::environment::Environment;
use crate::store::{Effect, MessageContext};
use crate::view_model::FetchingState;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct State {
    pub post: Post,
    pub comments: Vec<Comment>,
    pub fetching_state: FetchingState<Vec<Comment>>,
}

pub type ViewStore = crate::store::ViewStore<super::PostDetailsReducer>;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    System(SystemAction),
}

#[derive(Clone, Eq, PartialEq)]
pub enum SystemAction {
    ViewDidLoad,
    DidReceive(FetchingState<Vec<Comment>>),
}

impl std::fmt::Debug for SystemAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ViewDidLoad => write!(f, "ViewDidLoad"),
            Self::DidReceive(FetchingState::Fetched(comments)) => {
                write!(f, "DidReceive(Fetched({} comments))", comments.len())
            }
            Self::DidReceive(arg0) => f.debug_tuple("DidReceive").field(arg0).finish(),
        }
    }
}

impl State {
    pub fn new(post: Post) -> Self {
        Self {
            post,
            comments: Vec::new(),
            fetching_state: FetchingState::Fetching,
        }
    }

    pub fn title(&self) -> String {
        format!("Post {}", self.post.id)
    }
}

pub fn reduce(
    _context: &impl MessageContext<Action, ()>,
    action: Action,
    state: &mut State,
    environment: &Environment,
) -> Effect<Action> {
    log::trace!("{action:?}");
    match action {
        Action::System(SystemAction::ViewDidLoad) => {
            let post_id = state.post.id;
            log::debug!("fetching comments for {post_id}");
            let model = environment.model.clone();
            Effect::future(async move { model.comments(post_id).await }, |result| {
                Action::System(SystemAction::DidReceive(result.into()))
            })
        }
        Action::System(SystemAction::DidReceive(fetching_state)) => {
            if let Some(comments) = fetching_state.value() {
                state.comments = comments.clone();
            }
            state.fetching_state = fetching_state;
            Effect::NONE
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::environment::model::testing::{comment, model, post, MockService};
    use crate::environment::types::Config;
    use crate::store::types::testing::RecordingContext;

    fn environment(service: &Arc<MockService>) -> Environment {
        Environment::new(model(service), Config::default())
    }

    fn receive(fetching_state: FetchingState<Vec<Comment>>) -> Action {
        Action::System(SystemAction::DidReceive(fetching_state))
    }

    #[test]
    fn starts_out_fetching_with_no_comments() {
        let state = State::new(post(4));
        assert!(state.fetching_state.is_fetching());
        assert!(state.comments.is_empty());
        assert_eq!(state.title(), "Post 4");
    }

    #[tokio::test]
    async fn view_did_load_fetches_comments_of_the_post() {
        let service = Arc::new(MockService {
            comments: [(4, vec![comment(4, 1), comment(4, 2)])].into_iter().collect(),
            ..Default::default()
        });
        let context = RecordingContext::default();
        let mut state = State::new(post(4));
        let effect = reduce(
            &context,
            Action::System(SystemAction::ViewDidLoad),
            &mut state,
            &environment(&service),
        );
        assert_eq!(state, State::new(post(4)));

        let Effect::Future(future) = effect else {
            panic!("expected a future");
        };
        assert_eq!(
            future.await,
            receive(FetchingState::Fetched(vec![comment(4, 1), comment(4, 2)]))
        );
        assert_eq!(service.comment_calls(), vec![4]);
        assert!(context.messages().is_empty());
    }

    #[test]
    fn fetched_comments_are_applied() {
        let service = Arc::new(MockService::default());
        let context = RecordingContext::default();
        let mut state = State::new(post(1));
        let comments = vec![comment(1, 1)];
        let effect = reduce(
            &context,
            receive(FetchingState::Fetched(comments.clone())),
            &mut state,
            &environment(&service),
        );
        assert!(effect.is_none());
        assert_eq!(state.comments, comments);
        assert_eq!(state.fetching_state, FetchingState::Fetched(comments));
    }

    #[test]
    fn errors_keep_previous_comments() {
        let service = Arc::new(MockService::default());
        let context = RecordingContext::default();
        let mut state = State::new(post(1));
        state.comments = vec![comment(1, 1)];
        reduce(
            &context,
            receive(FetchingState::Error("offline".to_string())),
            &mut state,
            &environment(&service),
        );
        assert_eq!(state.comments, vec![comment(1, 1)]);
        assert_eq!(state.fetching_state.error_message(), Some("offline"));
    }

    #[tokio::test]
    async fn store_surfaces_failures_as_state() {
        let service = Arc::new(MockService {
            failing: true,
            ..Default::default()
        });
        let store = ViewStore::new(State::new(post(2)), environment(&service));
        store.send(Action::System(SystemAction::ViewDidLoad));

        let mut receiver = store.subscribe();
        let state = tokio::time::timeout(
            Duration::from_secs(2),
            receiver.wait_for(|s| !s.fetching_state.is_fetching()),
        )
        .await
        .expect("timed out")
        .expect("store closed")
        .clone();
        assert!(state
            .fetching_state
            .error_message()
            .unwrap()
            .starts_with("API Error: comments"));
        assert!(state.comments.is_empty());
        assert_eq!(service.comment_calls(), vec![2]);
    }
}
