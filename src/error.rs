use chrono::NaiveDate;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LedgerError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// A date field did not match `dd/mm/yyyy` or named a day that does not exist.
    #[error("invalid {field} '{input}': expected a date formatted as dd/mm/yyyy")]
    Parse { field: &'static str, input: String },

    #[error("Payment date can't be greater than the due date (loan {loan_id}: paid {payment_date}, due {due_date})")]
    InvalidDateRange {
        loan_id: String,
        payment_date: NaiveDate,
        due_date: NaiveDate,
    },
}
