mod check_for_sale;
mod generate_records;

pub use check_for_sale::{CheckForSaleUseCase, ForSaleCheck};
pub use generate_records::GenerateRecordsUseCase;
