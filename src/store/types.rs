use std::marker::PhantomData;

pub trait MessageContext<Action, DelegateMessage> {
    /// Notify the owner of the store. Not part of the state.
    fn send_parent(&self, message: DelegateMessage);
}

/// The context handed to reducers running inside a [`super::ViewStore`]
pub struct StoreContext<Action, DelegateMessage> {
    delegate: flume::Sender<DelegateMessage>,
    _action: PhantomData<fn(Action)>,
}

impl<Action, DelegateMessage> StoreContext<Action, DelegateMessage> {
    pub fn new(delegate: flume::Sender<DelegateMessage>) -> Self {
        Self {
            delegate,
            _action: PhantomData,
        }
    }
}

impl<Action, DelegateMessage: std::fmt::Debug> MessageContext<Action, DelegateMessage>
    for StoreContext<Action, DelegateMessage>
{
    fn send_parent(&self, message: DelegateMessage) {
        if let Err(e) = self.delegate.send(message) {
            log::debug!("no delegate listening, dropped {:?}", e.into_inner());
        }
    }
}
