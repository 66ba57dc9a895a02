use core::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The operation needs a connected wallet.
    WalletNotConnected,
    UnknownPoll,
    UnknownOption,
    /// The wallet has already voted on this poll.
    AlreadyVoted,
    /// The poll no longer accepts votes.
    PollInactive,
    /// The draft has an empty title, description, or option.
    MissingFields,
    /// The requested voting window is out of bounds.
    InvalidDuration,
    /// Every poll identifier has been handed out.
    TooManyPolls,
    /// Arithmetic overflow occurred when computing the end of the voting window.
    TimeOverflow,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::WalletNotConnected => "Connect your wallet to create polls and vote",
            Self::UnknownPoll => "Poll not found.",
            Self::UnknownOption => "Option not found.",
            Self::AlreadyVoted => "You have already voted on this poll.",
            Self::PollInactive => "This poll is no longer active.",
            Self::MissingFields => "Please fill in all fields",
            Self::InvalidDuration => "Duration must be between 1 and 720 hours.",
            Self::TooManyPolls => "No more polls can be created in this session.",
            Self::TimeOverflow => "Oops! The poll end time could not be computed.",
        })
    }
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
