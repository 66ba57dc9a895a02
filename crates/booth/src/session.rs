use crate::{
    error::{Error, Result},
    identity::Identity,
    validator,
};
use chrono::{DateTime, Duration, Utc};
use model::{Address, Draft, Poll, Tab, MAX_DURATION, MAX_OPTIONS, MIN_DURATION, MIN_OPTIONS};

/// Everything the interface shows. All mutation goes through the methods below.
pub struct Session<I> {
    /// Source of the mock wallet address.
    identity: I,
    /// Address of the connected wallet, if any.
    wallet: Option<Address>,
    /// All polls in creation order.
    polls: Vec<Poll>,
    /// The poll currently being authored.
    draft: Draft,
    tab: Tab,
}

impl<I: Identity> Session<I> {
    pub fn new(identity: I) -> Self {
        Self::with_polls(identity, Vec::new())
    }

    pub fn with_polls(identity: I, polls: Vec<Poll>) -> Self {
        Self { identity, wallet: None, polls, draft: Draft::default(), tab: Tab::default() }
    }

    /// Simulates a wallet connection. Once connected, the same address is kept for the
    /// remainder of the session.
    pub fn connect(&mut self) -> &Address {
        let identity = &mut self.identity;
        self.wallet.get_or_insert_with(|| {
            let addr = identity.generate();
            log::info!("connected mock wallet {addr}");
            addr
        })
    }
}

impl<I> Session<I> {
    pub fn wallet(&self) -> Option<&Address> {
        self.wallet.as_ref()
    }

    pub fn is_connected(&self) -> bool {
        self.wallet.is_some()
    }

    pub fn polls(&self) -> &[Poll] {
        &self.polls
    }

    pub fn poll(&self, id: u32) -> Option<&Poll> {
        self.polls.iter().find(|poll| poll.id == id)
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Switches the visible tab. Only connected wallets may open the editor.
    pub fn select_tab(&mut self, tab: Tab) -> Result<()> {
        if tab == Tab::Create && !self.is_connected() {
            return Err(Error::WalletNotConnected);
        }
        log::debug!("switching to {tab:?} tab");
        self.tab = tab;
        Ok(())
    }

    /// Marks the poll as voted by the connected wallet. The per-option count is left untouched.
    pub fn vote(&mut self, id: u32, option: usize) -> Result<()> {
        if !self.is_connected() {
            return Err(Error::WalletNotConnected);
        }

        let poll = self.polls.iter_mut().find(|poll| poll.id == id).ok_or(Error::UnknownPoll)?;
        if option >= poll.options.len() {
            return Err(Error::UnknownOption);
        }
        if poll.has_voted {
            return Err(Error::AlreadyVoted);
        }
        if !poll.is_active {
            return Err(Error::PollInactive);
        }

        // TODO: Increment `poll.votes[option]` once it is settled whether tallies should be visible at all.
        poll.has_voted = true;
        log::info!("vote cast on poll {id} for option {option}");
        Ok(())
    }

    pub fn set_title(&mut self, title: String) {
        self.draft.title = title;
    }

    pub fn set_description(&mut self, description: String) {
        self.draft.description = description;
    }

    pub fn set_duration(&mut self, hours: u16) -> Result<()> {
        if !(MIN_DURATION..=MAX_DURATION).contains(&hours) {
            return Err(Error::InvalidDuration);
        }
        self.draft.duration = hours;
        Ok(())
    }

    /// Appends a blank option. Returns `false` when the draft is already full.
    pub fn add_option(&mut self) -> bool {
        if self.draft.options.len() >= MAX_OPTIONS {
            return false;
        }
        self.draft.options.push(String::new());
        true
    }

    /// Removes the option at `index`. Drafts never shrink below the minimum option count.
    pub fn remove_option(&mut self, index: usize) -> Option<String> {
        let options = &mut self.draft.options;
        if options.len() <= MIN_OPTIONS || index >= options.len() {
            return None;
        }
        Some(options.remove(index))
    }

    pub fn update_option(&mut self, index: usize, value: String) -> Result<()> {
        let option = self.draft.options.get_mut(index).ok_or(Error::UnknownOption)?;
        *option = value;
        Ok(())
    }

    /// Submits the draft as a new poll created by the connected wallet. On success, the
    /// draft is cleared and the interface returns to the poll list.
    pub fn create_poll(&mut self, now: DateTime<Utc>) -> Result<u32> {
        let creator = self.wallet.clone().ok_or(Error::WalletNotConnected)?;
        if !validator::is_complete(&self.draft) {
            log::warn!("rejected incomplete poll draft");
            return Err(Error::MissingFields);
        }

        let window = Duration::hours(self.draft.duration.into());
        let end = now.checked_add_signed(window).ok_or(Error::TimeOverflow)?;
        let id = u32::try_from(self.polls.len()).map_err(|_| Error::TooManyPolls)?;

        let Draft { title, description, options, .. } = core::mem::take(&mut self.draft);
        let options: Vec<_> = options.into_iter().filter(|opt| !opt.is_empty()).collect();
        self.polls.push(Poll {
            id,
            title,
            description,
            votes: vec![0; options.len()],
            options,
            start: now,
            end,
            creator,
            has_voted: false,
            finalized: false,
            is_active: true,
        });

        self.tab = Tab::Browse;
        log::info!("created poll {id}");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Fixed;
    use chrono::TimeZone;

    const WALLET: &str = "0x00112233445566778899aabbccddeeff";

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 1, 12, 0, 0).unwrap()
    }

    fn session() -> Session<Fixed> {
        Session::new(Fixed(Address::from(WALLET)))
    }

    fn connected() -> Session<Fixed> {
        let mut session = session();
        session.connect();
        session
    }

    fn fill(session: &mut Session<Fixed>, options: &[&str]) {
        session.set_title(String::from("T"));
        session.set_description(String::from("D"));
        while session.draft().options.len() < options.len() {
            assert!(session.add_option());
        }
        for (i, text) in options.iter().enumerate() {
            session.update_option(i, String::from(*text)).unwrap();
        }
    }

    #[test]
    fn connecting_is_idempotent() {
        let mut session = session();
        assert!(!session.is_connected());
        assert_eq!(session.connect().as_str(), WALLET);
        assert_eq!(session.connect().as_str(), WALLET);
        assert_eq!(session.wallet().map(Address::as_str), Some(WALLET));
    }

    #[test]
    fn create_tab_needs_wallet() {
        let mut session = session();
        assert_eq!(session.select_tab(Tab::Create), Err(Error::WalletNotConnected));
        assert_eq!(session.tab(), Tab::Browse);

        session.connect();
        session.select_tab(Tab::Create).unwrap();
        assert_eq!(session.tab(), Tab::Create);
        session.select_tab(Tab::Browse).unwrap();
        assert_eq!(session.tab(), Tab::Browse);
    }

    #[test]
    fn creates_poll_from_filled_draft() {
        let mut session = connected();
        session.select_tab(Tab::Create).unwrap();
        fill(&mut session, &["A", "B"]);

        let id = session.create_poll(now()).unwrap();
        assert_eq!(id, 0);
        assert_eq!(session.polls().len(), 1);

        let poll = session.poll(id).unwrap();
        assert_eq!(poll.title, "T");
        assert_eq!(poll.description, "D");
        assert_eq!(poll.options, ["A", "B"]);
        assert_eq!(poll.votes, [0, 0]);
        assert_eq!(poll.start, now());
        assert_eq!(poll.end, now() + Duration::hours(24));
        assert_eq!(poll.creator.as_str(), WALLET);
        assert!(!poll.has_voted);
        assert!(!poll.finalized);
        assert!(poll.is_active);

        // The editor resets and hands control back to the poll list.
        assert_eq!(session.draft(), &Draft::default());
        assert_eq!(session.tab(), Tab::Browse);
    }

    #[test]
    fn ids_follow_poll_count() {
        let mut session = connected();
        for expected in 0..3 {
            fill(&mut session, &["yes", "no", "maybe"]);
            assert_eq!(session.create_poll(now()).unwrap(), expected);
        }
        assert_eq!(session.polls().iter().map(|poll| poll.id).collect::<Vec<_>>(), [0, 1, 2]);
    }

    #[test]
    fn ids_continue_after_seeded_polls() {
        let polls = crate::seed::demo_polls(now()).unwrap();
        let mut session = Session::with_polls(Fixed(Address::from(WALLET)), polls);
        session.connect();
        fill(&mut session, &["A", "B"]);
        assert_eq!(session.create_poll(now()).unwrap(), 2);
    }

    #[test]
    fn custom_duration_sets_end() {
        let mut session = connected();
        fill(&mut session, &["A", "B"]);
        session.set_duration(720).unwrap();
        let id = session.create_poll(now()).unwrap();
        assert_eq!(session.poll(id).unwrap().end, now() + Duration::days(30));
    }

    #[test]
    fn rejects_out_of_bounds_duration() {
        let mut session = connected();
        assert_eq!(session.set_duration(0), Err(Error::InvalidDuration));
        assert_eq!(session.set_duration(721), Err(Error::InvalidDuration));
        assert_eq!(session.draft().duration, 24);
        session.set_duration(1).unwrap();
        assert_eq!(session.draft().duration, 1);
    }

    #[test]
    fn incomplete_drafts_leave_polls_unchanged() {
        let mut session = connected();
        assert_eq!(session.create_poll(now()), Err(Error::MissingFields));

        fill(&mut session, &["A", ""]);
        assert_eq!(session.create_poll(now()), Err(Error::MissingFields));

        fill(&mut session, &["A", "B"]);
        session.set_description(String::new());
        assert_eq!(session.create_poll(now()), Err(Error::MissingFields));

        assert!(session.polls().is_empty());
        // A rejected draft is kept for further editing.
        assert_eq!(session.draft().title, "T");
    }

    #[test]
    fn creation_needs_wallet() {
        let mut session = session();
        fill(&mut session, &["A", "B"]);
        assert_eq!(session.create_poll(now()), Err(Error::WalletNotConnected));
        assert!(session.polls().is_empty());
    }

    #[test]
    fn option_count_stays_within_bounds() {
        let mut session = session();
        assert_eq!(session.remove_option(0), None);
        assert_eq!(session.draft().options.len(), 2);

        for _ in 2..10 {
            assert!(session.add_option());
        }
        assert_eq!(session.draft().options.len(), 10);
        assert!(!session.add_option());
        assert_eq!(session.draft().options.len(), 10);
    }

    #[test]
    fn removes_the_selected_option() {
        let mut session = session();
        fill(&mut session, &["A", "B", "C"]);
        assert_eq!(session.remove_option(7), None);
        assert_eq!(session.remove_option(1).as_deref(), Some("B"));
        assert_eq!(session.draft().options, ["A", "C"]);
        assert_eq!(session.remove_option(0), None);
    }

    #[test]
    fn updating_missing_option_fails() {
        let mut session = session();
        assert_eq!(session.update_option(2, String::from("X")), Err(Error::UnknownOption));
        assert_eq!(session.draft().options, ["", ""]);
    }

    #[test]
    fn options_are_not_deduplicated() {
        let mut session = connected();
        fill(&mut session, &["same", "same"]);
        let id = session.create_poll(now()).unwrap();
        assert_eq!(session.poll(id).unwrap().options, ["same", "same"]);
    }

    #[test]
    fn voting_marks_poll_without_counting() {
        let polls = crate::seed::demo_polls(now()).unwrap();
        let mut session = Session::with_polls(Fixed(Address::from(WALLET)), polls);
        session.connect();

        session.vote(0, 2).unwrap();
        let poll = session.poll(0).unwrap();
        assert!(poll.has_voted);
        assert!(poll.votes.iter().all(|&count| count == 0));
        assert!(!session.poll(1).unwrap().has_voted);

        assert_eq!(session.vote(0, 1), Err(Error::AlreadyVoted));
        assert!(session.poll(0).unwrap().votes.iter().all(|&count| count == 0));
    }

    #[test]
    fn voting_is_guarded() {
        let polls = crate::seed::demo_polls(now()).unwrap();
        let mut session = Session::with_polls(Fixed(Address::from(WALLET)), polls);
        assert_eq!(session.vote(0, 0), Err(Error::WalletNotConnected));

        session.connect();
        assert_eq!(session.vote(9, 0), Err(Error::UnknownPoll));
        assert_eq!(session.vote(1, 3), Err(Error::UnknownOption));

        session.polls[1].is_active = false;
        assert_eq!(session.vote(1, 0), Err(Error::PollInactive));
        assert!(!session.poll(1).unwrap().has_voted);
    }

    #[test]
    fn ended_polls_still_accept_votes() {
        let mut session = connected();
        fill(&mut session, &["A", "B"]);
        session.set_duration(1).unwrap();
        let id = session.create_poll(now() - Duration::days(2)).unwrap();
        session.vote(id, 0).unwrap();
        assert!(session.poll(id).unwrap().has_voted);
    }
}
