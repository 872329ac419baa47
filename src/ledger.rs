use log::trace;
use std::collections::HashMap;

use crate::clock::{Clock, SystemClock};
use crate::error::{LedgerError, Result};
use crate::events::{EventSink, LedgerEvent, LogSink};
use crate::loan::Loan;

/// Append-only book of loans with per-lender and per-customer totals.
///
/// Loans are kept in insertion order and never changed or removed. Every
/// query is a linear scan over the whole book, nothing is cached.
///
/// Interest and penalty figures are summed as stored, they do not accrue.
///
/// The ledger does no locking of its own. Inserting needs `&mut self`, so
/// sharing one ledger between threads means wrapping it in something like
/// `RwLock<LoanLedger<C, S>>` (one writer, many readers).
///
/// Grouped queries only contain keys that have at least one loan. A missing
/// key means zero.
#[derive(Debug)]
pub struct LoanLedger<C = SystemClock, S = LogSink> {
    loans: Vec<Loan>,
    clock: C,
    sink: S,
}

impl LoanLedger {
    /// Ledger on the system clock, due-date alerts go to the `log` facade.
    pub fn new() -> Self {
        Self::with_parts(SystemClock, LogSink)
    }
}

impl Default for LoanLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock, S: EventSink> LoanLedger<C, S> {
    pub fn with_parts(clock: C, sink: S) -> Self {
        Self {
            loans: Vec::new(),
            clock,
            sink,
        }
    }

    /// Stores `loan`.
    ///
    /// Fails without touching the ledger if the payment date is after the
    /// due date. A loan already past due is still stored, and a
    /// [`LedgerEvent::DueDateCrossed`] goes to the sink.
    pub fn add_loan(&mut self, loan: Loan) -> Result<()> {
        if loan.payment_date() > loan.due_date() {
            return Err(LedgerError::InvalidDateRange {
                loan_id: loan.loan_id().to_string(),
                payment_date: loan.payment_date(),
                due_date: loan.due_date(),
            });
        }

        trace!("adding {}", loan);
        let overdue = loan.is_overdue(self.clock.today());
        let loan_id = loan.loan_id().to_string();
        self.loans.push(loan);

        if overdue {
            self.sink.record(LedgerEvent::DueDateCrossed { loan_id });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.loans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loans.is_empty()
    }

    /// All loans, oldest insert first.
    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    // amount still owed to the lender
    pub fn remaining_amount_by_lender(&self, lender_id: &str) -> f64 {
        self.total_where(|l| l.lender_id() == lender_id, Loan::remaining_amount)
    }

    pub fn total_interest_by_lender(&self, lender_id: &str) -> f64 {
        self.total_where(|l| l.lender_id() == lender_id, Loan::interest_per_day)
    }

    pub fn total_interest_by_customer(&self, customer_id: &str) -> f64 {
        self.total_where(|l| l.customer_id() == customer_id, Loan::interest_per_day)
    }

    pub fn total_penalty_by_lender(&self, lender_id: &str) -> f64 {
        self.total_where(|l| l.lender_id() == lender_id, Loan::penalty_per_day)
    }

    pub fn total_penalty_by_customer(&self, customer_id: &str) -> f64 {
        self.total_where(|l| l.customer_id() == customer_id, Loan::penalty_per_day)
    }

    pub fn aggregate_interest_by_customer(&self) -> HashMap<String, f64> {
        self.aggregate(Loan::customer_id, Loan::interest_per_day)
    }

    pub fn aggregate_interest_by_lender(&self) -> HashMap<String, f64> {
        self.aggregate(Loan::lender_id, Loan::interest_per_day)
    }

    pub fn aggregate_remaining_amount_by_lender(&self) -> HashMap<String, f64> {
        self.aggregate(Loan::lender_id, Loan::remaining_amount)
    }

    pub fn aggregate_remaining_amount_by_customer(&self) -> HashMap<String, f64> {
        self.aggregate(Loan::customer_id, Loan::remaining_amount)
    }

    pub fn aggregate_penalty_by_lender(&self) -> HashMap<String, f64> {
        self.aggregate(Loan::lender_id, Loan::penalty_per_day)
    }

    pub fn aggregate_penalty_by_customer(&self) -> HashMap<String, f64> {
        self.aggregate(Loan::customer_id, Loan::penalty_per_day)
    }

    fn total_where(&self, matches: impl Fn(&Loan) -> bool, value: fn(&Loan) -> f64) -> f64 {
        self.loans
            .iter()
            .filter(|&loan| matches(loan))
            .map(value)
            .sum()
    }

    fn aggregate(&self, key: fn(&Loan) -> &str, value: fn(&Loan) -> f64) -> HashMap<String, f64> {
        let mut totals: HashMap<String, f64> = HashMap::new();

        for loan in &self.loans {
            *totals.entry(key(loan).to_string()).or_insert(0.) += value(loan);
        }
        totals
    }
}
