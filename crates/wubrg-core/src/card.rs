use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The subset of a card-database record the embeds read.
///
/// Multi-faced cards (transform, modal DFC, adventure, ...) usually carry
/// their costs on `card_faces` rather than at the top level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oracle_id: Option<Uuid>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mana_cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_faces: Option<Vec<CardFace>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFace {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mana_cost: Option<String>,
}

impl Card {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            oracle_id: None,
            name: name.into(),
            mana_cost: None,
            card_faces: None,
            set: None,
            layout: None,
        }
    }

    #[must_use]
    pub fn with_mana_cost(mut self, cost: impl Into<String>) -> Self {
        self.mana_cost = Some(cost.into());
        self
    }

    #[must_use]
    pub fn with_faces(mut self, faces: Vec<CardFace>) -> Self {
        self.card_faces = Some(faces);
        self
    }

    fn front_face(&self) -> Option<&CardFace> {
        self.card_faces.as_ref().and_then(|faces| faces.first())
    }

    /// The top-level cost, else the front face's cost.
    ///
    /// `Some("")` (a land) is a present, empty cost; `None` means neither
    /// place has one.
    #[must_use]
    pub fn mana_cost(&self) -> Option<&str> {
        self.mana_cost
            .as_deref()
            .or_else(|| self.front_face().and_then(|f| f.mana_cost.as_deref()))
    }

    /// Name the statistics tables file this card under: the front face for
    /// multi-faced cards, the full name otherwise.
    #[must_use]
    pub fn stats_name(&self) -> &str {
        self.front_face().map_or(&self.name, |f| &f.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(name: &str, cost: Option<&str>) -> CardFace {
        CardFace {
            name: name.into(),
            mana_cost: cost.map(Into::into),
        }
    }

    #[test]
    fn top_level_cost_wins() {
        let card = Card::new("Fire // Ice")
            .with_mana_cost("{1}{R} // {1}{U}")
            .with_faces(vec![face("Fire", Some("{1}{R}")), face("Ice", Some("{1}{U}"))]);
        assert_eq!(card.mana_cost(), Some("{1}{R} // {1}{U}"));
        assert_eq!(card.stats_name(), "Fire");
    }

    #[test]
    fn falls_back_to_front_face() {
        let card = Card::new("Delver of Secrets // Insectile Aberration").with_faces(vec![
            face("Delver of Secrets", Some("{U}")),
            face("Insectile Aberration", Some("")),
        ]);
        assert_eq!(card.mana_cost(), Some("{U}"));
        assert_eq!(card.stats_name(), "Delver of Secrets");
    }

    #[test]
    fn missing_everywhere() {
        let card = Card::new("Mystery");
        assert_eq!(card.mana_cost(), None);
        assert_eq!(card.stats_name(), "Mystery");

        let faceless = Card::new("Odd").with_faces(vec![]);
        assert_eq!(faceless.mana_cost(), None);
        assert_eq!(faceless.stats_name(), "Odd");
    }

    #[test]
    fn empty_cost_is_present() {
        let land = Card::new("Forest").with_mana_cost("");
        assert_eq!(land.mana_cost(), Some(""));
    }
}
