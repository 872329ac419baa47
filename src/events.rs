use log::{Level, Log, Record};
use std::fmt;

/// Something the ledger reports while it works.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LedgerEvent {
    /// A loan was added whose due date is already behind the clock.
    DueDateCrossed { loan_id: String },
}

impl fmt::Display for LedgerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerEvent::DueDateCrossed { loan_id } => {
                write!(f, "Loan with ID {} has crossed the due date.", loan_id)
            }
        }
    }
}

/// Receiver for [`LedgerEvent`]s.
pub trait EventSink {
    fn record(&mut self, event: LedgerEvent);
}

/// Forwards events to the `log` facade at warn level.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct LogSink;

impl LogSink {
    fn emit(logger: &dyn Log, event: &LedgerEvent) {
        logger.log(
            &Record::builder()
                .level(Level::Warn)
                .target(module_path!())
                .module_path_static(Some(module_path!()))
                .file_static(Some(file!()))
                .line(Some(line!()))
                .args(format_args!("{}", event))
                .build(),
        );
    }
}

impl EventSink for LogSink {
    fn record(&mut self, event: LedgerEvent) {
        if Level::Warn <= log::max_level() {
            Self::emit(log::logger(), &event);
        }
    }
}

/// Keeps every event in memory, in the order recorded.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct RecordingSink {
    events: Vec<LedgerEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    pub fn take(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for RecordingSink {
    fn record(&mut self, event: LedgerEvent) {
        self.events.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn record(&mut self, event: LedgerEvent) {
        (**self).record(event);
    }
}
