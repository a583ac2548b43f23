use super::effect::Effect;
use super::types::MessageContext;

pub trait Reducer: Send + 'static {
    type Action: std::fmt::Debug + Send + 'static;

    /// One-shot messages for whoever owns the store (navigation and the like)
    type DelegateMessage: std::fmt::Debug + Send + 'static;

    type State: Clone + Send + Sync + 'static;

    type Environment: Clone + Send + Sync + 'static;

    fn reduce(
        context: &impl MessageContext<Self::Action, Self::DelegateMessage>,
        action: Self::Action,
        state: &mut Self::State,
        environment: &Self::Environment,
    ) -> Effect<Self::Action>;
}
