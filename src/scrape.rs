// src/scrape.rs
use crate::{
    page::{ self, DomainPage },
    progress::Progress,
    specs::{ self, DomainEntry },
};

/// Visit each cluster in turn and collect its KS/ACP rows.
/// A cluster whose page can't be loaded or whose domain panel won't open is reported
/// and contributes nothing; the run always goes on to the next one.
pub fn collect_domains(
    ids: &[String],
    page: &mut dyn DomainPage,
    mut progress: Option<&mut dyn Progress>,
) -> Vec<DomainEntry> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(ids.len());
    }

    let mut all = Vec::new();

    for id in ids {
        let url = page::cluster_url(id);
        logf!("Processing {url}");
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Processing {url}"));
        }

        match page::fetch_elements(page, id) {
            Ok(elements) => {
                let mut rows = specs::correlate(id, &elements);
                logf!("{id}: {} KS/ACP domains", rows.len());
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(id, rows.len());
                }
                all.append(&mut rows);
            }
            Err(e) => {
                loge!("{id}: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(id, &e.to_string());
                }
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    all
}
