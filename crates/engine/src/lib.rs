pub use error::EngineError;
pub use format::{format_for_api, generate_group_message};
pub use ledger::{Ledger, LedgerEntry};
pub use line_items::LineItem;
pub use money::{format_amount, round2};
pub use ops::{process_additional_charges, process_receipt, process_transaction};
pub use receipt::{AdditionalCharges, Group, Member, Receipt, ReceiptLine};

mod error;
mod format;
mod ledger;
mod line_items;
mod money;
mod ops;
mod receipt;

type ResultEngine<T> = Result<T, EngineError>;
