pub mod action;
pub mod service;
pub mod view;

pub use action::Action;
pub use view::View;

use booth::{Identity, Session};
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

pub struct Booth<I> {
    /// The one demo session shared by every connection.
    session: Mutex<Session<I>>,
}

impl<I> From<Session<I>> for Booth<I> {
    fn from(session: Session<I>) -> Self {
        Self { session: Mutex::new(session) }
    }
}

impl<I: Identity> Booth<I> {
    /// Applies the event to the session and renders the resulting screen. Rejected events
    /// surface as the view's alert rather than as an error.
    pub async fn on_action(&self, action: Action, now: DateTime<Utc>) -> View {
        let mut session = self.session.lock().await;
        let alert = match Self::apply(&mut *session, action, now) {
            Ok(alert) => alert,
            Err(err) => {
                log::warn!("rejected action: {err}");
                Some(err.to_string())
            }
        };
        View::render(&*session, now, alert)
    }

    fn apply(session: &mut Session<I>, action: Action, now: DateTime<Utc>) -> booth::Result<Option<String>> {
        match action {
            Action::Render => Ok(None),
            Action::ConnectWallet => {
                session.connect();
                Ok(None)
            }
            Action::SelectTab { tab } => session.select_tab(tab).map(|_| None),
            Action::Vote { poll, option } => {
                session.vote(poll, option)?;
                let n = option + 1;
                Ok(Some(format!("Vote cast for option {n}! Your vote is encrypted on-chain. (Demo Mode)")))
            }
            Action::SetTitle { title } => {
                session.set_title(title);
                Ok(None)
            }
            Action::SetDescription { description } => {
                session.set_description(description);
                Ok(None)
            }
            Action::SetOption { index, value } => session.update_option(index, value).map(|_| None),
            Action::AddOption => {
                if !session.add_option() {
                    log::debug!("draft already has the maximum number of options");
                }
                Ok(None)
            }
            Action::RemoveOption { index } => {
                if session.remove_option(index).is_none() {
                    log::debug!("option {index} was not removed");
                }
                Ok(None)
            }
            Action::SetDuration { hours } => session.set_duration(hours).map(|_| None),
            Action::SubmitPoll => {
                session.create_poll(now)?;
                Ok(Some(String::from("Poll created successfully! (Demo Mode)")))
            }
        }
    }
}
