// "More cards" settings model - which featured cards the settings panel
// lists and how each toggle reads. Pure logic; the panel renders from this.

use serde::Serialize;

use crate::settings::NewTabSettings;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum CardKind {
    Together,
    Gemini,
    Binance,
    Rewards,
}

impl CardKind {
    /// Panel order.
    pub const ALL: [CardKind; 4] = [Self::Together, Self::Gemini, Self::Binance, Self::Rewards];
}

/// Cards the current build/region can offer. Rewards is always available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardSupport {
    pub together: bool,
    pub gemini: bool,
    pub binance: bool,
}

impl CardSupport {
    pub fn supports(&self, kind: CardKind) -> bool {
        match kind {
            CardKind::Together => self.together,
            CardKind::Gemini => self.gemini,
            CardKind::Binance => self.binance,
            CardKind::Rewards => true,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum CardTitle {
    /// Locale message key.
    Locale(&'static str),
    Literal(&'static str),
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CardEntry {
    pub kind: CardKind,
    pub title: CardTitle,
    pub description_key: &'static str,
    pub banner: &'static str,
    pub featured: bool,
    pub shown: bool,
    pub toggle_label_key: &'static str,
    pub floats: bool,
}

fn is_shown(settings: &NewTabSettings, kind: CardKind) -> bool {
    match kind {
        CardKind::Together => settings.show_together,
        CardKind::Gemini => settings.show_gemini,
        CardKind::Binance => settings.show_binance,
        CardKind::Rewards => settings.show_rewards,
    }
}

fn card_entry(kind: CardKind, shown: bool) -> CardEntry {
    let (title, description_key, banner) = match kind {
        CardKind::Together => (
            CardTitle::Locale("togetherWidgetTitle"),
            "togetherWidgetWelcomeTitle",
            "bravetogether.png",
        ),
        CardKind::Gemini => (CardTitle::Literal("Gemini"), "geminiWidgetDesc", "gemini.png"),
        CardKind::Binance => (CardTitle::Literal("Binance"), "binanceWidgetDesc", "binance.png"),
        CardKind::Rewards => (
            CardTitle::Locale("braveRewardsTitle"),
            "rewardsWidgetDesc",
            "braverewards.png",
        ),
    };
    let featured = kind == CardKind::Together;

    CardEntry {
        kind,
        title,
        description_key,
        banner,
        featured,
        shown,
        toggle_label_key: if shown { "hideWidget" } else { "addWidget" },
        floats: featured,
    }
}

/// Cards to list in the panel, in panel order, unsupported ones left out.
pub fn more_cards(settings: &NewTabSettings, support: &CardSupport) -> Vec<CardEntry> {
    CardKind::ALL
        .iter()
        .copied()
        .filter(|kind| support.supports(*kind))
        .map(|kind| card_entry(kind, is_shown(settings, kind)))
        .collect()
}

pub fn toggle_card(settings: &NewTabSettings, kind: CardKind) -> NewTabSettings {
    let mut next = settings.clone();
    let flag = match kind {
        CardKind::Together => &mut next.show_together,
        CardKind::Gemini => &mut next.show_gemini,
        CardKind::Binance => &mut next.show_binance,
        CardKind::Rewards => &mut next.show_rewards,
    };
    *flag = !*flag;
    log::debug!("[Settings] Card {:?} shown: {}", kind, *flag);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn all_supported() -> CardSupport {
        CardSupport {
            together: true,
            gemini: true,
            binance: true,
        }
    }

    #[test]
    fn test_panel_order() {
        let kinds: Vec<CardKind> = more_cards(&NewTabSettings::default(), &all_supported())
            .into_iter()
            .map(|c| c.kind)
            .collect();
        assert_eq!(kinds, CardKind::ALL.to_vec());
    }

    #[test]
    fn test_rewards_always_listed() {
        let cards = more_cards(&NewTabSettings::default(), &CardSupport::default());
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].kind, CardKind::Rewards);
        assert_eq!(cards[0].title, CardTitle::Locale("braveRewardsTitle"));
    }

    #[test]
    fn test_only_together_is_featured() {
        let cards = more_cards(&NewTabSettings::default(), &all_supported());
        for card in cards {
            assert_eq!(card.featured, card.kind == CardKind::Together);
            assert_eq!(card.floats, card.featured);
        }
    }

    #[rstest]
    #[case(true, "hideWidget")]
    #[case(false, "addWidget")]
    fn test_toggle_label_follows_shown(#[case] shown: bool, #[case] label: &str) {
        let settings = NewTabSettings {
            show_gemini: shown,
            ..NewTabSettings::default()
        };
        let support = CardSupport {
            gemini: true,
            ..CardSupport::default()
        };
        let gemini = more_cards(&settings, &support)
            .into_iter()
            .find(|c| c.kind == CardKind::Gemini)
            .unwrap();

        assert_eq!(gemini.shown, shown);
        assert_eq!(gemini.toggle_label_key, label);
        assert_eq!(gemini.title, CardTitle::Literal("Gemini"));
    }

    #[rstest]
    #[case(CardKind::Together)]
    #[case(CardKind::Gemini)]
    #[case(CardKind::Binance)]
    #[case(CardKind::Rewards)]
    fn test_toggle_card_flips_one_flag(#[case] kind: CardKind) {
        let settings = NewTabSettings::default();
        let toggled = toggle_card(&settings, kind);

        for other in CardKind::ALL {
            let expected = if other == kind {
                !is_shown(&settings, other)
            } else {
                is_shown(&settings, other)
            };
            assert_eq!(is_shown(&toggled, other), expected);
        }
        assert_eq!(toggle_card(&toggled, kind), settings);
    }
}
