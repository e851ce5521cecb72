//! Turns enriched articles into the block tree of one dated report.

use chrono::NaiveDate;
use nt_core::blocks::Column;
use nt_core::{Block, EnrichedArticle, RichText};

/// Blocks emitted per article.
pub const BLOCKS_PER_ARTICLE: usize = 4;

/// Columned header, divider, summary, divider.
pub fn article_unit(item: &EnrichedArticle) -> [Block; BLOCKS_PER_ARTICLE] {
    let title = RichText::plain(&item.article.title)
        .with_link(&item.article.link)
        .bold();
    let header = Block::ColumnList(vec![
        Column::new(vec![Block::paragraph(title)]),
        Column::new(vec![
            Block::paragraph(RichText::plain(&item.publisher).bold()),
            Block::paragraph(RichText::plain(item.tags_line()).bold()),
        ]),
    ]);

    [
        header,
        Block::Divider,
        Block::paragraph(RichText::plain(&item.summary)),
        Block::Divider,
    ]
}

/// Article units in input order. Empty input gives an empty list.
pub fn assemble(items: &[EnrichedArticle]) -> Vec<Block> {
    items.iter().flat_map(article_unit).collect()
}

/// One dated report: a toggle titled with the date whose body is a leading
/// divider followed by the article units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub title: String,
    pub units: Vec<Block>,
}

impl Report {
    pub fn new(date: NaiveDate, items: &[EnrichedArticle]) -> Self {
        Self {
            title: date.format("%Y%m%d").to_string(),
            units: assemble(items),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The toggle created first, without children.
    pub fn container(&self) -> Block {
        Block::toggle(&self.title)
    }

    /// Children appended into the container.
    pub fn body(&self) -> Vec<Block> {
        let mut body = Vec::with_capacity(self.units.len() + 1);
        body.push(Block::Divider);
        body.extend(self.units.iter().cloned());
        body
    }
}
