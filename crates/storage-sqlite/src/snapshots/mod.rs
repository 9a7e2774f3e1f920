mod repository;

pub use repository::SnapshotRepository;
