use serde::{Deserialize, Serialize};

/// Discord's `Color.blue()`.
pub const BLUE: u32 = 0x3498DB;
/// Discord's `Color.red()`.
pub const RED: u32 = 0xE74C3C;

/// A chat embed, serialized in the shape the Discord API expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(rename = "color")]
    pub colour: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedFooter {
    pub text: String,
}

impl Embed {
    pub fn new(title: impl Into<String>, colour: u32) -> Self {
        Self {
            title: title.into(),
            colour,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    #[must_use]
    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(EmbedFooter { text: text.into() });
        self
    }

    pub fn add_field(&mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
    }

    pub fn field(&self, name: &str) -> Option<&EmbedField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Convert to a serenity `CreateEmbed` builder.
    #[cfg(feature = "serenity")]
    pub fn to_create_embed(&self) -> serenity::builder::CreateEmbed {
        use serenity::builder::{CreateEmbed, CreateEmbedFooter};

        let mut e = CreateEmbed::new().title(&self.title).colour(self.colour);
        if !self.description.is_empty() {
            e = e.description(&self.description);
        }
        if !self.url.is_empty() {
            e = e.url(&self.url);
        }
        for f in &self.fields {
            e = e.field(&f.name, &f.value, f.inline);
        }
        if let Some(ref footer) = self.footer {
            e = e.footer(CreateEmbedFooter::new(&footer.text));
        }
        e
    }
}
