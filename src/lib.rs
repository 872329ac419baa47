//! In-memory book of loans between lenders and customers, with totals of
//! outstanding principal, interest and penalty per lender or customer.

pub mod clock;
pub mod error;
pub mod events;
pub mod ledger;
pub mod loan;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{LedgerError, Result};
pub use events::{EventSink, LedgerEvent, LogSink, RecordingSink};
pub use ledger::LoanLedger;
pub use loan::{parse_date, Loan, DATE_FORMAT};
