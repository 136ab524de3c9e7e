//! Card list state and the group/sort pipeline behind the gallery grid.

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use messages::{CardsResponse, CharacterCard};

/// Sort field for cards within a source group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Lexicographic by character name.
    Name,
    /// By parsed creation timestamp.
    #[default]
    CreateDate,
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Active sort selection; defaults to newest-first by creation date.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// A character card as displayed, tagged with the source it came from.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Card {
    pub name: String,
    pub creator: Option<String>,
    pub description: String,
    pub create_date: Option<String>,
    pub source: String,
}

impl Card {
    /// Build a display card from a wire card plus its source bucket.
    ///
    /// An empty `creator` string means "unknown author" and is treated the
    /// same as an absent one.
    #[must_use]
    pub fn from_wire(card: CharacterCard, source: &str) -> Self {
        Self {
            name: card.data.name,
            creator: card.data.creator.filter(|creator| !creator.is_empty()),
            description: card.data.description,
            create_date: card.data.create_date,
            source: source.to_owned(),
        }
    }
}

/// In-memory card list plus the active sort.
#[derive(Clone, Debug, Default)]
pub struct CardsState {
    pub cards: Vec<Card>,
    pub sort: SortSpec,
}

impl CardsState {
    /// Replace the entire card list (startup fetch).
    pub fn load(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    /// Insert a newly extracted card at the front of the list.
    ///
    /// Prepending keeps the newest card first under the default
    /// date-descending sort even when its `create_date` is missing.
    pub fn add_card(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    /// Update the active sort.
    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) {
        self.sort = SortSpec { key, direction };
    }
}

/// Flatten the per-source REST response into display cards.
#[must_use]
pub fn flatten_response(response: CardsResponse) -> Vec<Card> {
    let mut cards = Vec::new();
    for source in response.sources {
        for card in source.cards {
            cards.push(Card::from_wire(card, &source.name));
        }
    }
    cards
}

/// One rendered source group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceGroup {
    pub name: String,
    pub cards: Vec<Card>,
}

/// Group cards by source and order each group by the active sort.
///
/// Groups come out in lexicographic source order; cards with an empty
/// source fall into the `"unknown"` group. In-group sorting is stable, so
/// cards that compare equal keep their insertion order.
#[must_use]
pub fn grouped(cards: &[Card], sort: SortSpec) -> Vec<SourceGroup> {
    let mut groups: BTreeMap<&str, Vec<Card>> = BTreeMap::new();
    for card in cards {
        let source = if card.source.is_empty() {
            "unknown"
        } else {
            card.source.as_str()
        };
        groups.entry(source).or_default().push(card.clone());
    }

    groups
        .into_iter()
        .map(|(name, mut cards)| {
            sort_cards(&mut cards, sort);
            SourceGroup {
                name: name.to_owned(),
                cards,
            }
        })
        .collect()
}

fn sort_cards(cards: &mut [Card], sort: SortSpec) {
    cards.sort_by(|a, b| {
        let ordering = match sort.key {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::CreateDate => parse_create_date(a.create_date.as_deref())
                .cmp(&parse_create_date(b.create_date.as_deref())),
        };
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Parse a creation timestamp into epoch milliseconds for ordering.
///
/// Sources format dates inconsistently, so RFC 3339, bare date-time, and
/// bare date forms are accepted, as are raw epoch values. Anything else
/// (including a missing date) orders before all parseable dates.
#[must_use]
pub fn parse_create_date(raw: Option<&str>) -> i64 {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return i64::MIN;
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.timestamp_millis();
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return parsed.and_utc().timestamp_millis();
        }
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return parsed
            .and_hms_opt(0, 0, 0)
            .map_or(i64::MIN, |midnight| midnight.and_utc().timestamp_millis());
    }
    if let Ok(epoch) = raw.parse::<i64>() {
        // Values this large are already milliseconds.
        return if epoch >= 1_000_000_000_000 {
            epoch
        } else {
            epoch.saturating_mul(1000)
        };
    }

    i64::MIN
}
