use crate::{
    state::{
        reducer::{AppState, Effect, Event, update},
        view::{View, view},
    },
    submit::transport::Transport,
};

/// Drives the reducer and carries out its effects on the calling thread.
///
/// A submission runs to completion inside [`Session::dispatch`] and its outcome is fed straight
/// back into the state. Requests are neither de-duplicated nor cancelled.
#[derive(Debug)]
pub struct Session<T: Transport> {
    state: AppState,
    transport: T,
    endpoint: String,
}

impl<T: Transport> Session<T> {
    /// Start from the initial state.
    pub fn new(transport: T, endpoint: impl Into<String>) -> Self {
        Self {
            state: AppState::default(),
            transport,
            endpoint: endpoint.into(),
        }
    }

    /// Apply `event`, then run any effect it produced.
    pub fn dispatch(&mut self, event: Event) {
        match update(&mut self.state, event) {
            Effect::None => {}
            Effect::Submit(request) => {
                let follow_up = match self.transport.post_form(&self.endpoint, &request) {
                    Ok(results) => Event::SubmissionSucceeded(results),
                    Err(err) => Event::SubmissionFailed(err.to_string()),
                };
                update(&mut self.state, follow_up);
            }
        }
    }

    /// Current state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Presentation of the current state.
    pub fn view(&self) -> View {
        view(&self.state)
    }

    /// Borrow the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Endpoint submissions are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(test)]
#[path = "../tests/unit/session/session.rs"]
mod tests;
