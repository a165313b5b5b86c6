//! Process exit codes.

use forsale_application::use_cases::ForSaleCheck;

/// At least one valid record, or records generated.
pub const FOR_SALE: u8 = 0;
/// The lookup worked but nothing valid was found.
pub const NOT_FOR_SALE: u8 = 2;
/// Usage, configuration or transport failure.
pub const FAILURE: u8 = 3;

pub fn for_check(check: &ForSaleCheck) -> u8 {
    if check.is_for_sale() {
        FOR_SALE
    } else {
        NOT_FOR_SALE
    }
}
