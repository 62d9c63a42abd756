//! PDF merging functionality using lopdf

use std::collections::BTreeMap;
use std::path::PathBuf;
use lopdf::{Dictionary, Document, Object, ObjectId};
use tracing::{debug, info};
use crate::error::{Error, Result};

/// Page attributes a page may inherit from its ancestors in the page tree
const INHERITABLE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Options for merging PDFs
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Input PDF file paths in the order they should be merged
    pub input_paths: Vec<PathBuf>,
    /// Output PDF file path
    pub output_path: PathBuf,
}

/// Merge multiple PDF files into a single PDF
///
/// Every page of every input is appended in input order, keeping each
/// document's own page order. Returns the number of pages written.
///
/// # Example
///
/// ```no_run
/// use pdf_merger::pdf::{MergeOptions, merge_pdfs};
/// use std::path::PathBuf;
///
/// let options = MergeOptions {
///     input_paths: vec![
///         PathBuf::from("b.pdf"),
///         PathBuf::from("a.pdf"),
///     ],
///     output_path: PathBuf::from("merged.pdf"),
/// };
///
/// merge_pdfs(&options).expect("Failed to merge");
/// ```
pub fn merge_pdfs(options: &MergeOptions) -> Result<usize> {
    if options.input_paths.is_empty() {
        return Err(Error::NoInputFiles);
    }

    // Validate all input files exist
    for path in &options.input_paths {
        if !path.exists() {
            return Err(Error::FileNotFound(path.clone()));
        }
    }

    // Load all documents
    let mut documents: Vec<Document> = Vec::new();
    for path in &options.input_paths {
        info!(path = %path.display(), "loading input");
        let mut doc = Document::load(path)?;

        if doc.get_pages().is_empty() {
            return Err(Error::EmptyPdf(path.clone()));
        }

        flatten_inherited_attributes(&mut doc);
        documents.push(doc);
    }

    let mut max_id = 1;
    let mut page_ids: Vec<ObjectId> = Vec::new();
    let mut objects: BTreeMap<ObjectId, Object> = BTreeMap::new();

    for mut doc in documents {
        // Renumber objects in this document to avoid conflicts
        doc.renumber_objects_with(max_id);
        max_id = doc.max_id + 1;

        // get_pages is keyed by page number, so values come out in page order
        let pages = doc.get_pages();
        debug!(pages = pages.len(), "collected pages");
        page_ids.extend(pages.into_values());

        objects.extend(doc.objects);
    }

    let mut merged_doc = Document::with_version("1.5");

    // Add all collected objects FIRST
    merged_doc.objects.extend(objects);

    // new_object_id() must hand out IDs above everything just added
    merged_doc.max_id = max_id - 1;

    let pages_id = merged_doc.new_object_id();

    let kids: Vec<Object> = page_ids
        .iter()
        .map(|&id| Object::Reference(id))
        .collect();

    let mut pages_object = Dictionary::new();
    pages_object.set("Type", Object::Name(b"Pages".to_vec()));
    pages_object.set("Count", Object::Integer(page_ids.len() as i64));
    pages_object.set("Kids", Object::Array(kids));

    let catalog_id = merged_doc.new_object_id();
    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));

    merged_doc.objects.insert(catalog_id, Object::Dictionary(catalog));
    merged_doc.objects.insert(pages_id, Object::Dictionary(pages_object));
    merged_doc.trailer.set("Root", Object::Reference(catalog_id));

    // Re-parent every page under the new page tree
    for &page_id in &page_ids {
        if let Ok(Object::Dictionary(dict)) = merged_doc.get_object_mut(page_id) {
            dict.set("Parent", Object::Reference(pages_id));
        }
    }

    merged_doc.compress();
    merged_doc.save(&options.output_path)?;

    info!(
        pages = page_ids.len(),
        output = %options.output_path.display(),
        "merged document saved"
    );

    Ok(page_ids.len())
}

/// Copy inheritable attributes from intermediate page-tree nodes onto each page
///
/// Pages are re-parented directly under a fresh root when merging, which would
/// otherwise drop anything they inherited from their old ancestors.
fn flatten_inherited_attributes(doc: &mut Document) {
    for page_id in doc.get_pages().into_values() {
        let inherited = inherited_attributes(doc, page_id);
        if inherited.is_empty() {
            continue;
        }
        if let Ok(Object::Dictionary(page)) = doc.get_object_mut(page_id) {
            for (key, value) in inherited {
                if !page.has(&key) {
                    page.set(key, value);
                }
            }
        }
    }
}

/// Attributes the page at `page_id` inherits, nearest ancestor first
fn inherited_attributes(doc: &Document, page_id: ObjectId) -> Vec<(Vec<u8>, Object)> {
    let mut found: Vec<(Vec<u8>, Object)> = Vec::new();
    let mut seen = vec![page_id];
    let mut current = parent_of(doc, page_id);

    while let Some(node_id) = current {
        // Guard against malformed trees with parent cycles
        if seen.contains(&node_id) {
            break;
        }
        seen.push(node_id);

        let Ok(Object::Dictionary(node)) = doc.get_object(node_id) else {
            break;
        };
        for key in INHERITABLE_KEYS {
            if found.iter().all(|(k, _)| k.as_slice() != key) {
                if let Ok(value) = node.get(key) {
                    found.push((key.to_vec(), value.clone()));
                }
            }
        }
        current = parent_of(doc, node_id);
    }

    found
}

fn parent_of(doc: &Document, id: ObjectId) -> Option<ObjectId> {
    match doc.get_object(id) {
        Ok(Object::Dictionary(dict)) => dict.get(b"Parent").and_then(Object::as_reference).ok(),
        _ => None,
    }
}
