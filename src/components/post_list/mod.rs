mod reducer;

pub use reducer::{reduce, Action, DelegateEvent, State, SystemAction, UserAction, ViewStore};

pub struct PostListReducer;

use crate::store::{Effect, MessageContext, Reducer};

impl Reducer for PostListReducer {
    type Action = reducer::Action;

    type DelegateMessage = reducer::DelegateEvent;

    type State = reducer::State;

    type Environment = crate::environment::Environment;

    fn reduce(
        context: &impl MessageContext<Self::Action, Self::DelegateMessage>,
        action: Self::Action,
        state: &mut Self::State,
        environment: &Self::Environment,
    ) -> Effect<Self::Action> {
        reducer::reduce(context, action, state, environment)
    }
}
