use crate::model::domain::Catalog;
use bincode::Options;

/// Upper bound for snapshot payloads.
const SNAPSHOT_LIMIT: u64 = 64 * 1024 * 1024;

impl Catalog {
    /// Reconstructs a catalog from its binary snapshot.
    ///
    /// The snapshot is written by [`Catalog::to_bytes`] from an already
    /// validated catalog, so no further validation happens here.
    pub fn from_bytes(data: &[u8]) -> Result<Self, bincode::Error> {
        snapshot_options().deserialize(data)
    }

    /// Serializes the catalog into the snapshot format read by [`Catalog::from_bytes`].
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        snapshot_options().serialize(self)
    }
}

fn snapshot_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(SNAPSHOT_LIMIT)
        .allow_trailing_bytes()
}
