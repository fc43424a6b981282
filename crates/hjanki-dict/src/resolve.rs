use scraper::{ElementRef, Html};

use crate::dom;
use crate::error::DictError;

/// Pick the entry block for a query.
///
/// Without a pronunciation the first block wins. With one, the block whose
/// headword and first pronunciation both equal the query is picked.
pub fn resolve<'a>(
    doc: &'a Html,
    expression: &str,
    pronunciation: Option<&str>,
) -> Result<ElementRef<'a>, DictError> {
    let blocks = doc
        .select(&dom::WORD_BLOCK)
        .map(|block| {
            let info = dom::first(block, &dom::WORD_INFO)
                .ok_or_else(|| DictError::format("word block without word info"))?;
            Ok((
                block,
                dom::text_or_empty(dom::first(info, &dom::WORD_INFO_TEXT)),
                dom::text_or_empty(dom::first(info, &dom::WORD_INFO_PRONOUNCE)),
            ))
        })
        .collect::<Result<Vec<_>, DictError>>()?;

    if blocks.is_empty() {
        return Err(DictError::format("no word blocks"));
    }

    let Some(pronunciation) = pronunciation else {
        return Ok(blocks[0].0);
    };

    blocks
        .into_iter()
        .find(|(_, block_expression, block_pronunciation)| {
            block_expression == expression && block_pronunciation == pronunciation
        })
        .map(|(block, _, _)| block)
        .ok_or(DictError::NotFound)
}
