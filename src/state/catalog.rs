//! Catalog state and the one-shot loader that fills it.
//!
//! DESIGN
//! ======
//! The loader reports progress as [`CatalogEvent`]s instead of writing to a
//! signal directly, so it can be driven by any executor and tested without a
//! reactive runtime.
//!
//! ERROR HANDLING
//! ==============
//! Fetch failures are logged and turned into an empty catalog. `Finished` is
//! always emitted, including when the load future is dropped mid-flight, so
//! `loading` never stays `true`.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use log::{error, info};

use crate::net::api::CatalogSource;
use crate::net::types::Product;

/// Progress of a catalog load.
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogEvent {
    Started,
    Finished(Vec<Product>),
}

/// Products available in this session plus the loading flag.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub loading: bool,
}

impl Default for CatalogState {
    // Starts loading so the first paint shows the spinner, not an empty grid.
    fn default() -> Self {
        Self { products: Vec::new(), loading: true }
    }
}

impl CatalogState {
    pub fn apply(&mut self, event: CatalogEvent) {
        match event {
            CatalogEvent::Started => self.loading = true,
            CatalogEvent::Finished(products) => {
                self.products = products;
                self.loading = false;
            }
        }
    }
}

struct FinishGuard<F: FnMut(CatalogEvent)> {
    emit: F,
    finished: bool,
}

impl<F: FnMut(CatalogEvent)> FinishGuard<F> {
    fn finish(&mut self, products: Vec<Product>) {
        self.finished = true;
        (self.emit)(CatalogEvent::Finished(products));
    }
}

impl<F: FnMut(CatalogEvent)> Drop for FinishGuard<F> {
    fn drop(&mut self) {
        if !self.finished {
            (self.emit)(CatalogEvent::Finished(Vec::new()));
        }
    }
}

/// Fetch the catalog once from `source`, reporting progress through `emit`.
pub async fn load_catalog<S, F>(source: &S, emit: F)
where
    S: CatalogSource + ?Sized,
    F: FnMut(CatalogEvent),
{
    let mut guard = FinishGuard { emit, finished: false };
    (guard.emit)(CatalogEvent::Started);

    let products = match source.fetch_products().await {
        Ok(products) => {
            info!("catalog loaded: {} products", products.len());
            products
        }
        Err(e) => {
            error!("catalog fetch failed: {e}");
            Vec::new()
        }
    };
    guard.finish(products);
}
