pub mod forsale;

pub use forsale::{CheckForSaleUseCase, ForSaleCheck, GenerateRecordsUseCase};
