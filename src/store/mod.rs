//! A small unidirectional store. A [`Reducer`] owns the transitions, the
//! [`ViewStore`] owns the state and serializes every action onto a single
//! task. Asynchronous work is described as [`Effect`]s and comes back in as
//! actions.

pub mod effect;
pub mod reducer;
pub mod types;

use std::collections::VecDeque;

use tokio::sync::watch;
use tokio::task::JoinHandle;

pub use effect::Effect;
pub use reducer::Reducer;
pub use types::{MessageContext, StoreContext};

pub struct ViewStore<R: Reducer> {
    sender: flume::Sender<R::Action>,
    state: watch::Receiver<R::State>,
    delegate: flume::Receiver<R::DelegateMessage>,
    task: JoinHandle<()>,
}

impl<R: Reducer> ViewStore<R> {
    /// Must be called from within a Tokio runtime.
    pub fn new(state: R::State, environment: R::Environment) -> Self {
        let (sender, receiver) = flume::unbounded();
        let (delegate_sender, delegate) = flume::unbounded();
        let (publisher, observed) = watch::channel(state.clone());
        let task = tokio::spawn(run::<R>(
            state,
            environment,
            receiver,
            sender.clone(),
            publisher,
            StoreContext::new(delegate_sender),
        ));
        Self {
            sender,
            state: observed,
            delegate,
            task,
        }
    }

    /// Fire and forget. The action is reduced on the store's task.
    pub fn send(&self, action: R::Action) {
        if let Err(e) = self.sender.send(action) {
            log::error!("store is gone, could not send {:?}", e.into_inner());
        }
    }

    /// The latest published snapshot
    pub fn state(&self) -> R::State {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.state.clone()
    }

    /// Delegate messages are consumed once, by whichever receiver gets them
    /// first. Intended for a single subscriber.
    pub fn delegate(&self) -> flume::Receiver<R::DelegateMessage> {
        self.delegate.clone()
    }
}

impl<R: Reducer> Drop for ViewStore<R> {
    fn drop(&mut self) {
        // Running fetches are left alone, their results have nowhere to go.
        self.task.abort();
    }
}

async fn run<R: Reducer>(
    mut state: R::State,
    environment: R::Environment,
    receiver: flume::Receiver<R::Action>,
    sender: flume::Sender<R::Action>,
    publisher: watch::Sender<R::State>,
    context: StoreContext<R::Action, R::DelegateMessage>,
) {
    let mut pending = VecDeque::new();
    while let Ok(action) = receiver.recv_async().await {
        pending.push_back(action);
        while let Some(action) = pending.pop_front() {
            let effect = R::reduce(&context, action, &mut state, &environment);
            publisher.send_replace(state.clone());
            effect.perform(&mut pending, &sender);
        }
    }
}
