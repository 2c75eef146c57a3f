use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Масть карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Diamonds, // ♦
    Hearts,   // ♥
    Clubs,    // ♣
    Spades,   // ♠
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Hearts, Suit::Clubs, Suit::Spades];

    /// Символ масти для отображения.
    pub fn glyph(self) -> char {
        match self {
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }

    /// Буква масти, которую набирает игрок.
    pub fn letter(self) -> char {
        match self {
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
        }
    }

    /// Принимает и букву (регистр не важен), и символ масти.
    pub fn from_char(ch: char) -> Option<Suit> {
        match ch {
            'd' | 'D' | '♦' => Some(Suit::Diamonds),
            'h' | 'H' | '♥' => Some(Suit::Hearts),
            'c' | 'C' | '♣' => Some(Suit::Clubs),
            's' | 'S' | '♠' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Ранг карты.
///
/// Порядок объявления = порядок "Дурака-помещика": 3 младшая, 2 старшая.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
        }
    }

    /// Числовое значение с тузом наверху: 2..=14.
    pub fn ace_high_value(self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Ace => 14,
            // Three = 0 в порядке объявления → 3.
            r => r as u8 + 3,
        }
    }

    /// Разбор "голого" ранга: "3", "10", "J" (буквы без учёта регистра).
    pub fn parse(s: &str) -> Option<Rank> {
        let rank = match s {
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" => Rank::Ten,
            "J" | "j" => Rank::Jack,
            "Q" | "q" => Rank::Queen,
            "K" | "k" => Rank::King,
            "A" | "a" => Rank::Ace,
            "2" => Rank::Two,
            _ => return None,
        };
        Some(rank)
    }
}

/// Вид джокера. Красный старше чёрного.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JokerKind {
    Black,
    Red,
}

/// Карта: обычная (ранг + масть) или джокер.
///
/// Одинаковые карты неотличимы, отдельной идентичности у карты нет.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Card {
    Suited { rank: Rank, suit: Suit },
    Joker(JokerKind),
}

/// Порядок сравнения рангов.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RankOrder {
    /// 3 < 4 < ... < K < A < 2 < Black Joker < Red Joker.
    Landlord,
    /// 2 < 3 < ... < K < A. Масть не участвует.
    AceHigh,
}

impl RankOrder {
    pub fn value(self, card: Card) -> u8 {
        match (self, card) {
            (RankOrder::Landlord, Card::Suited { rank, .. }) => rank as u8,
            (RankOrder::Landlord, Card::Joker(JokerKind::Black)) => 13,
            (RankOrder::Landlord, Card::Joker(JokerKind::Red)) => 14,
            (RankOrder::AceHigh, Card::Suited { rank, .. }) => rank.ace_high_value(),
            // В колодах с этим порядком джокеров нет, но порядок остаётся полным.
            (RankOrder::AceHigh, Card::Joker(JokerKind::Black)) => 15,
            (RankOrder::AceHigh, Card::Joker(JokerKind::Red)) => 16,
        }
    }
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Card::Suited { rank, suit }
    }

    pub const BLACK_JOKER: Card = Card::Joker(JokerKind::Black);
    pub const RED_JOKER: Card = Card::Joker(JokerKind::Red);

    pub fn rank(&self) -> Option<Rank> {
        match self {
            Card::Suited { rank, .. } => Some(*rank),
            Card::Joker(_) => None,
        }
    }

    pub fn suit(&self) -> Option<Suit> {
        match self {
            Card::Suited { suit, .. } => Some(*suit),
            Card::Joker(_) => None,
        }
    }

    pub fn is_joker(&self) -> bool {
        matches!(self, Card::Joker(_))
    }

    /// Форма, которую набирает игрок: `10c`, `Qs`, `BJ`.
    pub fn token(&self) -> String {
        match self {
            Card::Suited { rank, suit } => format!("{}{}", rank.label(), suit.letter()),
            Card::Joker(JokerKind::Black) => "BJ".to_string(),
            Card::Joker(JokerKind::Red) => "RJ".to_string(),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Card {
    /// Формат вида `10♣`, `A♦`, `Red Joker`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Suited { rank, suit } => write!(f, "{rank}{suit}"),
            Card::Joker(JokerKind::Black) => f.write_str("Black Joker"),
            Card::Joker(JokerKind::Red) => f.write_str("Red Joker"),
        }
    }
}

/// Разбор токена вида "Ad", "10c", "qs", "A♦", "BJ", "rj".
impl FromStr for Card {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("BJ") || s.eq_ignore_ascii_case("Black Joker") {
            return Ok(Card::BLACK_JOKER);
        }
        if s.eq_ignore_ascii_case("RJ") || s.eq_ignore_ascii_case("Red Joker") {
            return Ok(Card::RED_JOKER);
        }

        let mut chars = s.chars();
        let suit_ch = chars
            .next_back()
            .ok_or_else(|| "Card token is empty".to_string())?;
        let rank_str = chars.as_str();
        if rank_str.is_empty() {
            return Err(format!("Card token too short: {s}"));
        }

        let rank = Rank::parse(rank_str).ok_or_else(|| format!("Invalid rank: {rank_str}"))?;
        let suit = Suit::from_char(suit_ch).ok_or_else(|| format!("Invalid suit: {suit_ch}"))?;

        Ok(Card::new(rank, suit))
    }
}

/// Разобрать один токен.
pub fn parse_token(token: &str) -> Option<Card> {
    token.parse().ok()
}

/// Разобрать список токенов по принципу "всё или ничего".
///
/// При ошибке возвращается первый битый токен.
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Card>, String> {
    tokens
        .iter()
        .map(|t| parse_token(t.as_ref()).ok_or_else(|| t.as_ref().to_string()))
        .collect()
}

/// Раскладка руки при выводе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandLayout {
    /// По порядку рангов Landlord (джокеры в конце).
    Landlord,
    /// Группами по мастям ♠, ♥, ♦, ♣, внутри масти по возрастанию.
    Gongzhu,
}

fn gongzhu_suit_priority(suit: Suit) -> u8 {
    match suit {
        Suit::Spades => 0,
        Suit::Hearts => 1,
        Suit::Diamonds => 2,
        Suit::Clubs => 3,
    }
}

/// Отсортировать и склеить карты через пробел.
pub fn format_cards(cards: &[Card], layout: HandLayout) -> String {
    let mut sorted = cards.to_vec();
    match layout {
        HandLayout::Landlord => sorted.sort_by_key(|c| RankOrder::Landlord.value(*c)),
        HandLayout::Gongzhu => sorted.sort_by_key(|c| match c.suit() {
            Some(suit) => (gongzhu_suit_priority(suit), RankOrder::AceHigh.value(*c)),
            None => (u8::MAX, RankOrder::AceHigh.value(*c)),
        }),
    }
    join_cards(&sorted)
}

/// Склеить карты через пробел без сортировки.
pub fn join_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
