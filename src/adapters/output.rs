use crate::domain::model::{Move, OutputFormat};
use crate::domain::ports::MoveSink;
use crate::utils::error::Result;
use std::io::{BufWriter, Write};

/// Canonical move log: `Move disk <d> from <S> to <D>`, one per line.
pub struct TextSink<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error().into())
    }
}

impl<W: Write> MoveSink for TextSink<W> {
    fn write_move(&mut self, mv: &Move) -> Result<()> {
        writeln!(self.writer, "{}", mv)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// CSV with a `disk,from,to` header row.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(writer),
        }
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| e.into_error().into())
    }
}

impl<W: Write> MoveSink for CsvSink<W> {
    // 即使沒有任何步驟也要輸出標頭
    fn begin(&mut self, _disks: u32) -> Result<()> {
        self.writer.write_record(["disk", "from", "to"])?;
        Ok(())
    }

    fn write_move(&mut self, mv: &Move) -> Result<()> {
        self.writer.serialize(mv)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// JSON Lines: one `{"disk":..,"from":..,"to":..}` object per line.
pub struct JsonLinesSink<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error().into())
    }
}

impl<W: Write> MoveSink for JsonLinesSink<W> {
    fn write_move(&mut self, mv: &Move) -> Result<()> {
        serde_json::to_writer(&mut self.writer, mv)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// 依輸出格式建立對應的 sink
pub fn sink_for<W: Write + 'static>(format: OutputFormat, writer: W) -> Box<dyn MoveSink> {
    match format {
        OutputFormat::Text => Box::new(TextSink::new(writer)),
        OutputFormat::Csv => Box::new(CsvSink::new(writer)),
        OutputFormat::Json => Box::new(JsonLinesSink::new(writer)),
    }
}

impl MoveSink for Box<dyn MoveSink> {
    fn begin(&mut self, disks: u32) -> Result<()> {
        (**self).begin(disks)
    }

    fn write_move(&mut self, mv: &Move) -> Result<()> {
        (**self).write_move(mv)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Rod;

    fn sample() -> Vec<Move> {
        vec![
            Move {
                disk: 1,
                from: Rod::new('A'),
                to: Rod::new('B'),
            },
            Move {
                disk: 2,
                from: Rod::new('A'),
                to: Rod::new('C'),
            },
        ]
    }

    #[test]
    fn test_text_sink() {
        let mut sink = TextSink::new(Vec::new());
        for mv in sample() {
            sink.write_move(&mv).unwrap();
        }
        sink.finish().unwrap();

        let out = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        assert_eq!(out, "Move disk 1 from A to B\nMove disk 2 from A to C\n");
    }

    #[test]
    fn test_csv_sink() {
        let mut sink = CsvSink::new(Vec::new());
        sink.begin(2).unwrap();
        for mv in sample() {
            sink.write_move(&mv).unwrap();
        }
        sink.finish().unwrap();

        let out = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        assert_eq!(out, "disk,from,to\n1,A,B\n2,A,C\n");
    }

    #[test]
    fn test_json_lines_sink() {
        let mut sink = JsonLinesSink::new(Vec::new());
        for mv in sample() {
            sink.write_move(&mv).unwrap();
        }
        sink.finish().unwrap();

        let out = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec![
            r#"{"disk":1,"from":"A","to":"B"}"#,
            r#"{"disk":2,"from":"A","to":"C"}"#,
        ]);
    }

    #[test]
    fn test_csv_sink_without_moves_writes_header_only() {
        let mut sink = CsvSink::new(Vec::new());
        sink.begin(0).unwrap();
        sink.finish().unwrap();

        let out = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        assert_eq!(out, "disk,from,to\n");
    }
}
