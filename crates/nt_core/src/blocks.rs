//! Typed document blocks.
//!
//! Blocks serialize to the Notion block object shape:
//! `{"object": "block", "type": T, T: {...}}`.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichText {
    pub content: String,
    pub link: Option<String>,
    pub bold: bool,
}

impl RichText {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            link: None,
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn with_link(mut self, url: impl Into<String>) -> Self {
        self.link = Some(url.into());
        self
    }
}

impl Serialize for RichText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Link<'a> {
            url: &'a str,
        }

        #[derive(Serialize)]
        struct Text<'a> {
            content: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            link: Option<Link<'a>>,
        }

        #[derive(Serialize)]
        struct Annotations {
            bold: bool,
        }

        let len = if self.bold { 3 } else { 2 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("type", "text")?;
        map.serialize_entry(
            "text",
            &Text {
                content: &self.content,
                link: self.link.as_deref().map(|url| Link { url }),
            },
        )?;
        if self.bold {
            map.serialize_entry("annotations", &Annotations { bold: true })?;
        }
        map.end()
    }
}

/// One column of a [`Block::ColumnList`]. Columns only exist inside a column
/// list, so they are not a block variant of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub children: Vec<Block>,
}

impl Column {
    pub fn new(children: Vec<Block>) -> Self {
        Self { children }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Collapsible container with a title line.
    Toggle {
        title: Vec<RichText>,
        children: Vec<Block>,
    },
    ColumnList(Vec<Column>),
    Divider,
    Paragraph(Vec<RichText>),
}

impl Block {
    pub fn toggle(title: impl Into<String>) -> Self {
        Block::Toggle {
            title: vec![RichText::plain(title)],
            children: Vec::new(),
        }
    }

    pub fn paragraph(text: RichText) -> Self {
        Block::Paragraph(vec![text])
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Block::Toggle { .. } => "toggle",
            Block::ColumnList(_) => "column_list",
            Block::Divider => "divider",
            Block::Paragraph(_) => "paragraph",
        }
    }
}

fn no_blocks(blocks: &&[Block]) -> bool {
    blocks.is_empty()
}

#[derive(Serialize)]
struct ToggleBody<'a> {
    rich_text: &'a [RichText],
    #[serde(skip_serializing_if = "no_blocks")]
    children: &'a [Block],
}

#[derive(Serialize)]
struct ChildrenBody<'a> {
    children: &'a [Block],
}

#[derive(Serialize)]
struct ParagraphBody<'a> {
    rich_text: &'a [RichText],
}

#[derive(Serialize)]
struct Empty {}

struct ColumnBlock<'a>(&'a Column);

impl Serialize for ColumnBlock<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("object", "block")?;
        map.serialize_entry("type", "column")?;
        map.serialize_entry(
            "column",
            &ChildrenBody {
                children: &self.0.children,
            },
        )?;
        map.end()
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("object", "block")?;
        map.serialize_entry("type", self.kind())?;
        match self {
            Block::Toggle { title, children } => map.serialize_entry(
                "toggle",
                &ToggleBody {
                    rich_text: title,
                    children,
                },
            )?,
            Block::ColumnList(columns) => {
                let columns: Vec<ColumnBlock<'_>> = columns.iter().map(ColumnBlock).collect();
                #[derive(Serialize)]
                struct ColumnListBody<'a> {
                    children: &'a [ColumnBlock<'a>],
                }
                map.serialize_entry("column_list", &ColumnListBody { children: &columns })?
            }
            Block::Divider => map.serialize_entry("divider", &Empty {})?,
            Block::Paragraph(rich_text) => {
                map.serialize_entry("paragraph", &ParagraphBody { rich_text })?
            }
        }
        map.end()
    }
}
