use std::collections::VecDeque;

use futures_util::future::BoxFuture;
use futures_util::{Future, FutureExt};

/// Side effects returned by a reducer. They are descriptions, the
/// [`super::ViewStore`] decides when and where they run.
pub enum Effect<A> {
    Nothing,
    /// Reduced right after the action that produced it, before any other
    /// queued action.
    Action(A),
    /// Runs as its own task; the output re-enters the store as an action.
    Future(BoxFuture<'static, A>),
    Multiple(Vec<Effect<A>>),
}

impl<A> Effect<A> {
    pub const NONE: Self = Effect::Nothing;

    pub fn action(action: A) -> Self {
        Effect::Action(action)
    }

    pub fn future<T, F, M>(future: F, mapper: M) -> Self
    where
        F: Future<Output = T> + Send + 'static,
        M: FnOnce(T) -> A + Send + 'static,
        A: Send + 'static,
    {
        Effect::Future(future.map(mapper).boxed())
    }

    pub fn merge2(a: Effect<A>, b: Effect<A>) -> Self {
        Effect::Multiple(vec![a, b])
    }

    #[cfg(test)]
    pub(crate) fn is_none(&self) -> bool {
        match self {
            Effect::Nothing => true,
            Effect::Multiple(effects) => effects.iter().all(Effect::is_none),
            _ => false,
        }
    }
}

impl<A: Send + 'static> Effect<A> {
    /// Immediate actions go to `pending`, futures are spawned and report
    /// back through `sender`.
    pub(crate) fn perform(self, pending: &mut VecDeque<A>, sender: &flume::Sender<A>) {
        match self {
            Effect::Nothing => {}
            Effect::Action(action) => pending.push_back(action),
            Effect::Future(future) => {
                let sender = sender.clone();
                tokio::spawn(async move {
                    let action = future.await;
                    if sender.send(action).is_err() {
                        log::debug!("store closed, dropping effect result");
                    }
                });
            }
            Effect::Multiple(effects) => {
                for effect in effects {
                    effect.perform(pending, sender);
                }
            }
        }
    }
}

impl<A: std::fmt::Debug> std::fmt::Debug for Effect<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nothing => write!(f, "Nothing"),
            Self::Action(arg0) => f.debug_tuple("Action").field(arg0).finish(),
            Self::Future(_) => write!(f, "Future"),
            Self::Multiple(arg0) => f.debug_tuple("Multiple").field(arg0).finish(),
        }
    }
}
