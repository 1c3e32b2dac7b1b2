use serde::{Deserialize, Serialize};

/// A bilingual paper document: just an ordered list of [`Block`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    /// Finds a block by id, if any.
    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Finds a block by id for editing, if any.
    pub fn block_mut(&mut self, id: &str) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }
}

/// One typed block of paper content.
///
/// The block's `id` is stable across edits; everything else lives in the [`BlockKind`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    #[serde(flatten)]
    pub kind: BlockKind,
}

impl Block {
    /// The block's localized inline-content field, if it has one.
    ///
    /// Headings and paragraphs expose their body; figures and tables expose their caption.
    /// Equations and code blocks hold no inline content.
    pub fn localized(&self) -> Option<&Localized> {
        match &self.kind {
            BlockKind::Heading(heading) => Some(&heading.content),
            BlockKind::Paragraph(paragraph) => Some(&paragraph.content),
            BlockKind::Figure(figure) => Some(&figure.caption),
            BlockKind::Table(table) => Some(&table.caption),
            BlockKind::Equation(_) | BlockKind::Code(_) => None,
        }
    }

    /// Like [`Block::localized`], but for editing.
    pub fn localized_mut(&mut self) -> Option<&mut Localized> {
        match &mut self.kind {
            BlockKind::Heading(heading) => Some(&mut heading.content),
            BlockKind::Paragraph(paragraph) => Some(&mut paragraph.content),
            BlockKind::Figure(figure) => Some(&mut figure.caption),
            BlockKind::Table(table) => Some(&mut table.caption),
            BlockKind::Equation(_) | BlockKind::Code(_) => None,
        }
    }
}

/// The closed set of block types.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BlockKind {
    Heading(Heading),
    Paragraph(Paragraph),
    Figure(Figure),
    Table(Table),
    Equation(Equation),
    Code(CodeBlock),
}

/// A section heading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub level: u8,
    #[serde(default)]
    pub content: Localized,
}

/// A paragraph of body text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub content: Localized,
}

/// A figure with a captioned image.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figure {
    pub url: String,
    #[serde(default)]
    pub caption: Localized,
}

/// A table; only the caption is inline content here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub caption: Localized,
}

/// A display equation. The latex is typeset elsewhere; it is not inline content.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equation {
    pub latex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A code listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub code: String,
}

/// One inline-content sequence per language.
///
/// The two sequences are independent values; editing one never touches the other.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub en: Vec<Inline>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub zh: Vec<Inline>,
}

impl Localized {
    pub fn get(&self, lang: Lang) -> &[Inline] {
        match lang {
            Lang::En => &self.en,
            Lang::Zh => &self.zh,
        }
    }

    pub fn get_mut(&mut self, lang: Lang) -> &mut Vec<Inline> {
        match lang {
            Lang::En => &mut self.en,
            Lang::Zh => &mut self.zh,
        }
    }
}

/// Which language's sequence to address.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Lang {
    #[default]
    En,
    Zh,
}

/// One node of inline content.
///
/// This is a closed union: [`Text`] is the only character-divisible variant, and every other
/// variant is *atomic* — it is never split, and no [`StyleSet`] ever applies to it. The style
/// engine relies on exhaustive matches over this enum, so adding a variant is a compile-checked
/// change at every consumption site.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Inline {
    /// A run of styled text.
    Text(Text),

    /// A hyperlink; its display text is restricted to [`Text`] children.
    Link(Link),

    /// An inline formula, typeset elsewhere.
    Math(Math),

    /// A citation marker pointing at bibliography entries.
    Citation(Citation),

    /// A cross-reference to a figure.
    FigureRef(CrossRef),

    /// A cross-reference to a table.
    TableRef(CrossRef),

    /// A cross-reference to a display equation.
    EquationRef(CrossRef),

    /// A cross-reference to a section heading.
    SectionRef(CrossRef),

    /// A footnote marker carrying its own content.
    Footnote(Footnote),
}

/// A run of text with one uniform [`StyleSet`].
///
/// A canonical sequence never contains two adjacent `Text` nodes with identical styling; the
/// compactor merges them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
    #[serde(default, skip_serializing_if = "StyleSet::is_empty")]
    pub style: StyleSet,
}

impl Text {
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            style: StyleSet::default(),
        }
    }
}

/// A hyperlink. Children are [`Text`] only, so a link's literal text is just their concatenation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub children: Vec<Text>,
}

/// An inline formula.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Math {
    pub latex: String,
}

/// A citation marker, e.g. rendered as `[12, 13]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    pub reference_ids: Vec<String>,
    pub display_text: String,
}

/// A cross-reference to a figure, table, equation, or section, depending on the wrapping
/// [`Inline`] variant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossRef {
    pub target_id: String,
    pub display_text: String,
}

/// A footnote marker; unlike cross-references it owns its content.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footnote {
    pub id: String,
    pub content: String,
    pub display_text: String,
}

/// Independent boolean and color attributes of a [`Text`] run.
///
/// `None` is the canonical "unset" for every attribute; a fully-unset `StyleSet` serializes as
/// nothing at all (see [`Text::style`]).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl StyleSet {
    pub fn is_empty(&self) -> bool {
        *self == StyleSet::default()
    }

    /// The current value of one boolean attribute.
    pub fn flag(&self, flag: StyleFlag) -> Option<bool> {
        match flag {
            StyleFlag::Bold => self.bold,
            StyleFlag::Italic => self.italic,
            StyleFlag::Underline => self.underline,
            StyleFlag::Strikethrough => self.strikethrough,
            StyleFlag::Code => self.code,
        }
    }

    fn flag_mut(&mut self, flag: StyleFlag) -> &mut Option<bool> {
        match flag {
            StyleFlag::Bold => &mut self.bold,
            StyleFlag::Italic => &mut self.italic,
            StyleFlag::Underline => &mut self.underline,
            StyleFlag::Strikethrough => &mut self.strikethrough,
            StyleFlag::Code => &mut self.code,
        }
    }

    /// Returns a copy of this set with `delta` applied.
    pub fn apply(&self, delta: &StyleDelta) -> StyleSet {
        let mut next = self.clone();
        match delta {
            StyleDelta::SetFlag(flag) => *next.flag_mut(*flag) = Some(true),
            StyleDelta::ClearFlag(flag) => *next.flag_mut(*flag) = None,
            StyleDelta::SetColor(ColorTarget::Text, value) => next.color = Some(value.clone()),
            StyleDelta::SetColor(ColorTarget::Background, value) => next.background_color = Some(value.clone()),
            StyleDelta::ClearColor(ColorTarget::Text) => next.color = None,
            StyleDelta::ClearColor(ColorTarget::Background) => next.background_color = None,
            StyleDelta::ClearAll => next = StyleSet::default(),
        }
        next
    }
}

/// The boolean attributes of a [`StyleSet`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StyleFlag {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
}

/// Which of the two color attributes a delta targets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorTarget {
    Text,
    Background,
}

/// A single attribute update to apply over a range of text.
///
/// Clearing is explicit rather than "set to some empty value", so the canonical unset
/// representation survives every edit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum StyleDelta {
    SetFlag(StyleFlag),
    ClearFlag(StyleFlag),
    SetColor(ColorTarget, String),
    ClearColor(ColorTarget),
    ClearAll,
}
