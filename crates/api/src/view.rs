use booth::{
    model::{Draft, Poll, Tab, MAX_OPTIONS, MIN_OPTIONS},
    Session, TimeLeft,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const CONNECT_BANNER: &str = "Connect your wallet to create polls and vote";
pub const VOTE_RECEIPT: &str = "Your vote has been encrypted and recorded on-chain";
pub const EMPTY_TITLE: &str = "No polls available yet";
pub const EMPTY_HINT: &str = "Create the first poll to get started!";
pub const FOOTER: [&str; 2] = ["All votes are encrypted using FHEVM technology", "Built for Zama Developer Program • Demo Mode"];

/// The whole screen after an event has been handled.
#[derive(Debug, Serialize)]
pub struct View {
    /// Abbreviated address of the connected wallet.
    pub wallet: Option<String>,
    pub tab: Tab,
    /// Notice shown while no wallet is connected.
    pub banner: Option<&'static str>,
    /// Whether the "Create Poll" tab can be opened.
    pub create_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browse: Option<Browse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create: Option<Form>,
    /// Text of the blocking dialog raised by the last event.
    pub alert: Option<String>,
    pub footer: [&'static str; 2],
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Browse {
    Empty { title: &'static str, hint: &'static str },
    Polls { cards: Vec<Card> },
}

#[derive(Debug, Serialize)]
pub struct Card {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub time_left: String,
    pub creator: String,
    /// Whether the "Active" badge is shown.
    pub active: bool,
    pub options: Vec<Choice>,
    pub receipt: Option<&'static str>,
}

/// A single vote button.
#[derive(Debug, Serialize)]
pub struct Choice {
    pub label: String,
    pub disabled: bool,
    pub checked: bool,
}

/// The poll draft editor.
#[derive(Debug, Serialize)]
pub struct Form {
    pub title: String,
    pub description: String,
    pub options: Vec<Field>,
    pub can_add_option: bool,
    pub duration: u16,
    pub submit_disabled: bool,
}

#[derive(Debug, Serialize)]
pub struct Field {
    pub value: String,
    pub placeholder: String,
    pub removable: bool,
}

impl Card {
    fn new(poll: &Poll, connected: bool, now: DateTime<Utc>) -> Self {
        let disabled = !connected || poll.has_voted || !poll.is_active;
        let options = poll
            .options
            .iter()
            .map(|label| Choice { label: label.clone(), disabled, checked: poll.has_voted })
            .collect();
        Self {
            id: poll.id,
            title: poll.title.clone(),
            description: poll.description.clone(),
            time_left: TimeLeft::until(poll.end, now).to_string(),
            creator: poll.creator.abbreviate(),
            active: poll.is_active,
            options,
            receipt: poll.has_voted.then_some(VOTE_RECEIPT),
        }
    }
}

impl Form {
    fn new(draft: &Draft, connected: bool) -> Self {
        let removable = draft.options.len() > MIN_OPTIONS;
        let options = draft
            .options
            .iter()
            .enumerate()
            .map(|(i, value)| Field { value: value.clone(), placeholder: format!("Option {}", i + 1), removable })
            .collect();
        Self {
            title: draft.title.clone(),
            description: draft.description.clone(),
            options,
            can_add_option: draft.options.len() < MAX_OPTIONS,
            duration: draft.duration,
            submit_disabled: !connected,
        }
    }
}

impl View {
    pub fn render<I>(session: &Session<I>, now: DateTime<Utc>, alert: Option<String>) -> Self {
        let connected = session.is_connected();
        let tab = session.tab();

        let browse = (tab == Tab::Browse).then(|| {
            if session.polls().is_empty() {
                return Browse::Empty { title: EMPTY_TITLE, hint: EMPTY_HINT };
            }
            let cards = session.polls().iter().map(|poll| Card::new(poll, connected, now)).collect();
            Browse::Polls { cards }
        });
        let create = (tab == Tab::Create).then(|| Form::new(session.draft(), connected));

        Self {
            wallet: session.wallet().map(|addr| addr.abbreviate()),
            tab,
            banner: (!connected).then_some(CONNECT_BANNER),
            create_enabled: connected,
            browse,
            create,
            alert,
            footer: FOOTER,
        }
    }
}
