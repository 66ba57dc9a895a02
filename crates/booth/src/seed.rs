use crate::error::{Error, Result};
use chrono::{DateTime, Duration, Utc};
use model::{Address, Poll};

struct Template {
    title: &'static str,
    description: &'static str,
    options: &'static [&'static str],
    /// Days since the poll opened.
    opened: i64,
    /// Days until the poll closes.
    closes: i64,
    creator: &'static str,
}

const DEMO: [Template; 2] = [
    Template {
        title: "Community Treasury Allocation",
        description: "Vote on how to allocate the community treasury funds for Q4 2025",
        options: &["Development", "Marketing", "Community Events", "Reserve Fund"],
        opened: 1,
        closes: 6,
        creator: "0x1234...5678",
    },
    Template {
        title: "Protocol Upgrade Proposal",
        description: "Should we implement the new privacy features in the next update?",
        options: &["Yes, implement now", "Yes, but after audit", "No, needs more research"],
        opened: 2,
        closes: 3,
        creator: "0xabcd...efgh",
    },
];

/// Builds the sample polls that a fresh demo session starts with, relative to `now`.
pub fn demo_polls(now: DateTime<Utc>) -> Result<Vec<Poll>> {
    let mut polls = Vec::with_capacity(DEMO.len());
    for (id, template) in (0..).zip(DEMO.iter()) {
        let start = now.checked_sub_signed(Duration::days(template.opened)).ok_or(Error::TimeOverflow)?;
        let end = now.checked_add_signed(Duration::days(template.closes)).ok_or(Error::TimeOverflow)?;
        let options: Vec<_> = template.options.iter().copied().map(String::from).collect();
        polls.push(Poll {
            id,
            title: String::from(template.title),
            description: String::from(template.description),
            votes: vec![0; options.len()],
            options,
            start,
            end,
            creator: Address::from(template.creator),
            has_voted: false,
            finalized: false,
            is_active: true,
        });
    }
    Ok(polls)
}
