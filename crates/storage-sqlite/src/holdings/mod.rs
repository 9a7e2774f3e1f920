mod repository;

pub use repository::HoldingRepository;
