mod reducer;

pub use reducer::{reduce, Action, State, SystemAction, ViewStore};

pub struct PostDetailsReducer;

use crate::store::{Effect, MessageContext, Reducer};

impl Reducer for PostDetailsReducer {
    // The detail screen never navigates on its own
    type DelegateMessage = ();

    type Action = reducer::Action;

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
