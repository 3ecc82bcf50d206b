// ============================================================================
// Interfaces Module
// Pluggable seams between the engines and their host application
// ============================================================================

mod event_sink;

pub use event_sink::{CalculationEvent, EventSink, LoggingEventSink, NoOpEventSink, Operation};
