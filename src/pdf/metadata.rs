//! Page counting for merged output

use std::path::Path;
use lopdf::{Document, Object, ObjectId};
use crate::error::{Error, Result};

/// Resolve `key` in `dict` to a referenced object id
fn reference(dict: &lopdf::Dictionary, key: &[u8]) -> Result<ObjectId> {
    match dict.get(key) {
        Ok(Object::Reference(id)) => Ok(*id),
        Ok(_) => Err(Error::General(format!(
            "{} is not a reference",
            String::from_utf8_lossy(key)
        ))),
        Err(_) => Err(Error::General(format!(
            "Missing {}",
            String::from_utf8_lossy(key)
        ))),
    }
}

/// Count pages by reading the Count field from the root Pages dictionary
fn count_pages_from_catalog(doc: &Document) -> Result<usize> {
    let catalog_id = reference(&doc.trailer, b"Root")?;
    let catalog = doc.get_dictionary(catalog_id)?;

    let pages_id = reference(catalog, b"Pages")?;
    let pages = doc.get_dictionary(pages_id)?;

    match pages.get(b"Count") {
        Ok(Object::Integer(n)) if *n >= 0 => Ok(*n as usize),
        Ok(_) => Err(Error::General("Count is not a non-negative integer".to_string())),
        Err(_) => Err(Error::General("No Count in Pages".to_string())),
    }
}

/// Count the number of pages in a PDF file
///
/// Reads the Count field of the page tree root rather than walking every leaf.
pub fn count_pages(path: &Path) -> Result<usize> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let doc = Document::load(path)?;
    let page_count = count_pages_from_catalog(&doc)?;

    if page_count == 0 {
        return Err(Error::EmptyPdf(path.to_path_buf()));
    }

    Ok(page_count)
}
