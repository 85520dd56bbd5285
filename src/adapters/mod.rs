// Adapters layer: concrete renderers for the move stream.

pub mod output;

pub use output::{sink_for, CsvSink, JsonLinesSink, TextSink};
