use booth::model::Tab;
use serde::Deserialize;

/// Every event the interface can raise. Each one maps onto exactly one session operation.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Re-render without touching the session.
    Render,
    ConnectWallet,
    SelectTab { tab: Tab },
    /// Vote on the `option`-th (zero-based) choice of the poll.
    Vote { poll: u32, option: usize },
    SetTitle { title: String },
    SetDescription { description: String },
    SetOption { index: usize, value: String },
    AddOption,
    RemoveOption { index: usize },
    SetDuration { hours: u16 },
    SubmitPoll,
}
