//! The in-memory trust anchor index and its refresh discipline.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use chrono::{NaiveDate, Utc};

use crate::cache::CacheFile;
use crate::config::TrustStoreConfig;
use crate::entry::{TrustAnchor, TrustAnchorEntry, TrustAnchorIdentifier};
use crate::error::{EntryRejection, TrustStoreError};

/// The outcome of loading a batch of metadata entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of entries now served by the store.
    pub accepted: usize,
    /// Entries that failed validation, and why.
    pub dropped: Vec<(TrustAnchorIdentifier, EntryRejection)>,
    /// True if the payload was written to the cache file.
    pub persisted: bool,
}

impl LoadReport {
    /// Number of entries that failed validation.
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }
}

/// An immutable, fully built index of trust anchors.
#[derive(Debug, Default)]
pub struct TrustAnchorSnapshot {
    anchors: HashMap<TrustAnchorIdentifier, Arc<TrustAnchor>>,
    needs_refresh: bool,
}

impl TrustAnchorSnapshot {
    fn empty_needing_refresh() -> Self {
        TrustAnchorSnapshot {
            anchors: HashMap::new(),
            needs_refresh: true,
        }
    }

    /// Find the anchor stored under `id`.
    pub fn lookup(&self, id: &TrustAnchorIdentifier) -> Option<Arc<TrustAnchor>> {
        self.anchors.get(id).cloned()
    }

    /// Number of anchors in this snapshot.
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// True if this snapshot holds no anchors.
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}

/// Validate and index `entries` as of `today`, without touching any published state.
fn build_snapshot(
    entries: Vec<TrustAnchorEntry>,
    config: TrustStoreConfig,
    today: NaiveDate,
) -> Result<(TrustAnchorSnapshot, LoadReport), TrustStoreError> {
    let total = entries.len();
    let mut anchors = HashMap::with_capacity(total);
    let mut report = LoadReport::default();

    for entry in entries {
        let rejection = if config.reject_zero_aaguid && entry.identifier.is_zero_aaguid() {
            Some(EntryRejection::ZeroAaguid)
        } else if config.validate_trust_anchor && entry.root_certificates.is_empty() {
            Some(EntryRejection::NoTrustAnchor)
        } else if config.enforce_status {
            entry.revocation_at(today).map(EntryRejection::Revoked)
        } else {
            None
        };

        if let Some(reason) = rejection {
            warn!(identifier = %entry.identifier, %reason, "dropping metadata entry");
            report.dropped.push((entry.identifier, reason));
            continue;
        }

        match TrustAnchor::parse(entry) {
            Ok(anchor) => {
                let id = anchor.identifier().clone();
                if anchors.insert(id.clone(), Arc::new(anchor)).is_some() {
                    warn!(identifier = %id, "duplicate metadata entry, keeping the later one");
                }
            }
            Err((entry, reason)) => {
                warn!(identifier = %entry.identifier, %reason, "dropping metadata entry");
                report.dropped.push((entry.identifier, reason));
            }
        }
    }

    if total > 0 && anchors.is_empty() {
        error!(dropped = report.dropped.len(), "every metadata entry was rejected");
        return Err(TrustStoreError::AllEntriesInvalid {
            dropped: report.dropped.len(),
        });
    }

    report.accepted = anchors.len();
    let snapshot = TrustAnchorSnapshot {
        anchors,
        needs_refresh: false,
    };
    Ok((snapshot, report))
}

/// Holds the trust anchors used to resolve attestation chains.
///
/// Lookups clone the currently published [TrustAnchorSnapshot] handle and never wait on I/O.
/// A load or refresh builds a complete new snapshot first and then swaps the handle, so readers
/// only ever observe the old index or the new one. Writers are serialised through a single
/// writer lock, held from the cache write until the matching snapshot is published, so the
/// cache file always describes the published index.
#[derive(Debug)]
pub struct TrustAnchorStore {
    config: TrustStoreConfig,
    published: RwLock<Arc<TrustAnchorSnapshot>>,
    writer: Mutex<()>,
    cache: Option<Mutex<CacheFile>>,
}

impl TrustAnchorStore {
    /// Create an empty store with no backing cache. It reports [Self::needs_refresh] until
    /// entries are loaded.
    pub fn new(config: TrustStoreConfig) -> Self {
        TrustAnchorStore {
            config,
            published: RwLock::new(Arc::new(TrustAnchorSnapshot::empty_needing_refresh())),
            writer: Mutex::new(()),
            cache: None,
        }
    }

    /// Build an in-memory store from a caller supplied snapshot of metadata, using the default
    /// validation rules.
    pub fn in_memory(entries: Vec<TrustAnchorEntry>) -> Result<(Self, LoadReport), TrustStoreError> {
        let store = Self::new(TrustStoreConfig::default());
        let report = store.load(entries)?;
        Ok((store, report))
    }

    /// Open a store backed by the cache file at `path`, creating the file if needed.
    ///
    /// A cache that can not be opened, is empty, or does not parse results in an empty store
    /// that [Self::needs_refresh]. This never fails; the error is logged instead.
    #[tracing::instrument(level = "debug", skip(config))]
    pub fn open(path: &Path, config: TrustStoreConfig) -> Self {
        let mut store = Self::new(config);

        let mut cache = match CacheFile::open(path) {
            Ok(c) => c,
            Err(e) => {
                error!(?e, "unable to open metadata cache, a refresh is required");
                return store;
            }
        };

        match Self::read_cache(&mut cache) {
            Ok(Some(entries)) => match store.publish(entries, Utc::now().date_naive()) {
                Ok(report) => {
                    info!(
                        accepted = report.accepted,
                        dropped = report.dropped_count(),
                        "loaded metadata cache"
                    );
                }
                Err(e) => {
                    error!(?e, "metadata cache contents rejected, a refresh is required");
                }
            },
            Ok(None) => {
                info!("metadata cache is empty, a refresh is required");
            }
            Err(e) => {
                error!(?e, "metadata cache is unreadable, a refresh is required");
            }
        }

        store.cache = Some(Mutex::new(cache));
        store
    }

    fn read_cache(cache: &mut CacheFile) -> Result<Option<Vec<TrustAnchorEntry>>, TrustStoreError> {
        match cache.read()? {
            Some(payload) => serde_json::from_slice(&payload)
                .map(Some)
                .map_err(TrustStoreError::from),
            None => Ok(None),
        }
    }

    /// The validation rules of this store.
    pub fn config(&self) -> &TrustStoreConfig {
        &self.config
    }

    /// The currently published snapshot.
    pub fn snapshot(&self) -> Arc<TrustAnchorSnapshot> {
        match self.published.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Find the trust anchor stored under `id`.
    pub fn lookup(&self, id: &TrustAnchorIdentifier) -> Option<Arc<TrustAnchor>> {
        self.snapshot().lookup(id)
    }

    /// True if the store holds no usable metadata and should be refreshed from upstream.
    pub fn needs_refresh(&self) -> bool {
        self.snapshot().needs_refresh
    }

    /// Replace the in-memory index with `entries`. Invalid entries are dropped and reported;
    /// only a non-empty batch where every entry is invalid is an error, in which case the
    /// previously published index stays in place.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn load(&self, entries: Vec<TrustAnchorEntry>) -> Result<LoadReport, TrustStoreError> {
        self.publish(entries, Utc::now().date_naive())
    }

    pub(crate) fn publish(
        &self,
        entries: Vec<TrustAnchorEntry>,
        today: NaiveDate,
    ) -> Result<LoadReport, TrustStoreError> {
        let (snapshot, report) = build_snapshot(entries, self.config, today)?;
        let _writer = self.lock_writer();
        self.swap(snapshot);
        Ok(report)
    }

    fn lock_writer(&self) -> MutexGuard<'_, ()> {
        match self.writer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn swap(&self, snapshot: TrustAnchorSnapshot) {
        let snapshot = Arc::new(snapshot);
        match self.published.write() {
            Ok(mut guard) => *guard = snapshot,
            Err(poisoned) => *poisoned.into_inner() = snapshot,
        }
    }

    /// Load `entries` fetched from upstream, persist them to the cache file if one is
    /// configured, then publish them.
    ///
    /// A cache write failure is logged and reported through [LoadReport::persisted]; the new
    /// entries are still published.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn refresh(&self, entries: Vec<TrustAnchorEntry>) -> Result<LoadReport, TrustStoreError> {
        self.refresh_at(entries, Utc::now().date_naive())
    }

    pub(crate) fn refresh_at(
        &self,
        entries: Vec<TrustAnchorEntry>,
        today: NaiveDate,
    ) -> Result<LoadReport, TrustStoreError> {
        // The cache holds the batch as received, not the filtered set.
        let payload = serde_json::to_vec(&entries)?;
        let (snapshot, mut report) = build_snapshot(entries, self.config, today)?;

        // Persist and publish as one step with respect to other writers.
        let writer = self.lock_writer();

        if let Some(cache) = &self.cache {
            let mut cache = match cache.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            match cache.replace(&payload) {
                Ok(()) => report.persisted = true,
                Err(e) => error!(?e, path = %cache.path().display(), "unable to write metadata cache"),
            }
        }

        self.swap(snapshot);
        drop(writer);

        info!(
            accepted = report.accepted,
            dropped = report.dropped_count(),
            persisted = report.persisted,
            "metadata refreshed"
        );
        Ok(report)
    }
}
