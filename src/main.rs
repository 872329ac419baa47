use loan_ledger::*;
use log::{error, info};
use simple_logger::SimpleLogger;
use std::collections::HashMap;

fn main() -> Result<()> {
    if let Err(e) = SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()
    {
        eprintln!("logger already initialised: {}", e);
    }

    let mut ledger = LoanLedger::new();
    for loan in [
        Loan::new("L1", "C1", "LEN1", 10000., 10000., "05/06/2023", 1., "05/07/2023", 0.01)?,
        Loan::new("L2", "C1", "LEN1", 20000., 5000., "01/06/2023", 1., "05/08/2023", 0.01)?,
        Loan::new("L3", "C2", "LEN2", 50000., 30000., "04/04/2023", 2., "04/05/2023", 0.02)?,
        Loan::new("L4", "C3", "LEN2", 50000., 30000., "04/04/2023", 2., "04/05/2023", 0.02)?,
    ] {
        ledger.add_loan(loan)?;
    }

    let rejected = Loan::new("L5", "C4", "LEN4", 10000., 10000., "05/08/2023", 1., "05/07/2023", 0.01)?;
    if let Err(e) = ledger.add_loan(rejected) {
        error!("{}", e);
    }

    info!("{} loans on the book", ledger.len());
    for loan in ledger.loans() {
        println!("{}", loan);
    }

    show("remaining by lender", &ledger.aggregate_remaining_amount_by_lender());
    show("remaining by customer", &ledger.aggregate_remaining_amount_by_customer());
    show("interest by lender", &ledger.aggregate_interest_by_lender());
    show("interest by customer", &ledger.aggregate_interest_by_customer());
    show("penalty by lender", &ledger.aggregate_penalty_by_lender());
    show("penalty by customer", &ledger.aggregate_penalty_by_customer());

    Ok(())
}

fn show(title: &str, totals: &HashMap<String, f64>) {
    let mut keys: Vec<&String> = totals.keys().collect();
    keys.sort();

    println!("{}:", title);
    for key in keys {
        println!("  {} ${:.2}", key, totals[key]);
    }
}

// the public types can be sent and shared across threads
#[cfg(test)]
fn is_normal<T: Sized + Send + Sync + Unpin>() {}

#[test]
fn normal_types() {
    is_normal::<Loan>();
    is_normal::<LedgerEvent>();
    is_normal::<LoanLedger>();
    is_normal::<LoanLedger<FixedClock, RecordingSink>>();
}
