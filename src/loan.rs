use chrono::NaiveDate;
use std::fmt;

use crate::error::{LedgerError, Result};

/// chrono format for `dd/mm/yyyy` dates.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// A single loan between a lender and a customer.
///
/// Interest and penalty are stored figures: nothing here multiplies them by
/// elapsed days, they are summed as-is by the ledger.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loan {
    loan_id: String,
    customer_id: String,
    lender_id: String,
    amount: f64,
    remaining_amount: f64,
    payment_date: NaiveDate,
    interest_per_day: f64,
    due_date: NaiveDate,
    penalty_per_day: f64,
}

impl Loan {
    /// Builds a loan from `dd/mm/yyyy` date strings.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        loan_id: impl Into<String>,
        customer_id: impl Into<String>,
        lender_id: impl Into<String>,
        amount: f64,
        remaining_amount: f64,
        payment_date: &str,
        interest_per_day: f64,
        due_date: &str,
        penalty_per_day: f64,
    ) -> Result<Self> {
        let payment_date = parse_date("payment_date", payment_date)?;
        let due_date = parse_date("due_date", due_date)?;

        Ok(Self::from_dates(
            loan_id,
            customer_id,
            lender_id,
            amount,
            remaining_amount,
            payment_date,
            interest_per_day,
            due_date,
            penalty_per_day,
        ))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn from_dates(
        loan_id: impl Into<String>,
        customer_id: impl Into<String>,
        lender_id: impl Into<String>,
        amount: f64,
        remaining_amount: f64,
        payment_date: NaiveDate,
        interest_per_day: f64,
        due_date: NaiveDate,
        penalty_per_day: f64,
    ) -> Self {
        Self {
            loan_id: loan_id.into(),
            customer_id: customer_id.into(),
            lender_id: lender_id.into(),
            amount,
            remaining_amount,
            payment_date,
            interest_per_day,
            due_date,
            penalty_per_day,
        }
    }

    pub fn loan_id(&self) -> &str {
        &self.loan_id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn lender_id(&self) -> &str {
        &self.lender_id
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn remaining_amount(&self) -> f64 {
        self.remaining_amount
    }

    pub fn payment_date(&self) -> NaiveDate {
        self.payment_date
    }

    pub fn interest_per_day(&self) -> f64 {
        self.interest_per_day
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn penalty_per_day(&self) -> f64 {
        self.penalty_per_day
    }

    /// True once `today` is strictly past the due date.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date < today
    }
}

impl fmt::Display for Loan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "loan {}, customer {}, lender {}, amount ${:.2}, remaining ${:.2}, paid {}, due {}, interest ${:.2}, penalty ${:.2}",
            self.loan_id,
            self.customer_id,
            self.lender_id,
            self.amount,
            self.remaining_amount,
            self.payment_date.format(DATE_FORMAT),
            self.due_date.format(DATE_FORMAT),
            self.interest_per_day,
            self.penalty_per_day
        )
    }
}

/// Parses a `dd/mm/yyyy` date. `field` is only used in the error.
///
/// A day past the end of its month (`31/02/2023`) resolves to the month's
/// last day. Days outside 1..=31 and months outside 1..=12 are errors.
pub fn parse_date(field: &'static str, input: &str) -> Result<NaiveDate> {
    let err = || LedgerError::Parse {
        field,
        input: input.to_string(),
    };

    // exactly two digits, two digits, four digits
    let bytes = input.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(err());
    }

    let number = |range: std::ops::Range<usize>| input[range].parse::<u32>().map_err(|_| err());
    let day = number(0..2)?;
    let month = number(3..5)?;
    let year = number(6..10)? as i32;
    if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
        return Err(err());
    }

    (day.min(28)..=day)
        .rev()
        .find_map(|d| NaiveDate::from_ymd_opt(year, month, d))
        .ok_or_else(err)
}
