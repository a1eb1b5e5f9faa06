use std::io::{self, BufRead, Write};

use crate::error::ClassifyError;
use crate::lookup::ReverseLookup;
use crate::report::Reporter;
use crate::sink::LineSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierState {
    Idle,
    Reading,
    Matched,
    Unmatched,
    /// End of input reached, every line routed
    Done,
    /// Aborted on an I/O or lookup error
    Failed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifyStats {
    pub lines: usize,
    pub matched: usize,
    pub unmatched: usize,
}

/// Routes each input line to the matched or unmatched sink
pub struct Classifier<'a> {
    lookup: &'a dyn ReverseLookup,
    reporter: &'a dyn Reporter,
    state: ClassifierState,
}

impl<'a> Classifier<'a> {
    pub fn new(lookup: &'a dyn ReverseLookup, reporter: &'a dyn Reporter) -> Self {
        Self {
            lookup,
            reporter,
            state: ClassifierState::Idle,
        }
    }

    pub fn state(&self) -> ClassifierState {
        self.state
    }

    /// Consume `input` to the end. On error, lines written so far stay in the
    /// sinks; flushing them is left to the caller.
    pub fn run<R, M, U>(
        &mut self,
        input: R,
        matched: &mut LineSink<M>,
        unmatched: &mut LineSink<U>,
    ) -> Result<ClassifyStats, ClassifyError>
    where
        R: BufRead,
        M: Write,
        U: Write,
    {
        self.state = ClassifierState::Reading;
        let result = self.drain(input, matched, unmatched);
        self.state = match result {
            Ok(_) => ClassifierState::Done,
            Err(_) => ClassifierState::Failed,
        };
        result
    }

    fn drain<R, M, U>(
        &mut self,
        mut input: R,
        matched: &mut LineSink<M>,
        unmatched: &mut LineSink<U>,
    ) -> Result<ClassifyStats, ClassifyError>
    where
        R: BufRead,
        M: Write,
        U: Write,
    {
        let mut stats = ClassifyStats::default();
        let mut buf = Vec::new();
        let mut skip_lf = false;

        loop {
            buf.clear();
            let more = read_record(&mut input, &mut buf, &mut skip_lf).map_err(|source| {
                ClassifyError::ReadInput {
                    line: stats.lines + 1,
                    source,
                }
            })?;
            if !more {
                return Ok(stats);
            }
            stats.lines += 1;

            let line = buf.as_slice();
            // Non UTF-8 lines cannot equal any dictionary value
            let hit = std::str::from_utf8(line)
                .ok()
                .filter(|text| self.lookup.contains_value(text));

            match hit {
                Some(text) => {
                    self.state = ClassifierState::Matched;
                    let index = self.lookup.index_of(text)?;
                    matched
                        .write_record(index, text)
                        .map_err(|source| ClassifyError::WriteOutput {
                            sink: matched.kind(),
                            source,
                        })?;
                    self.reporter.info(&format!("matched record {text}"));
                    stats.matched += 1;
                }
                None => {
                    self.state = ClassifierState::Unmatched;
                    unmatched
                        .write_line(line)
                        .map_err(|source| ClassifyError::WriteOutput {
                            sink: unmatched.kind(),
                            source,
                        })?;
                    stats.unmatched += 1;
                }
            }

            self.state = ClassifierState::Reading;
        }
    }
}

/// Reads one record into `buf` without its terminator, which is `\n`, `\r\n`
/// or a lone `\r`. Returns `false` at end of input.
///
/// `skip_lf` carries a `\r` seen at the end of the previous record so the
/// `\n` of a `\r\n` pair is dropped without reading ahead.
fn read_record<R: BufRead>(
    input: &mut R,
    buf: &mut Vec<u8>,
    skip_lf: &mut bool,
) -> io::Result<bool> {
    let mut read_any = false;
    loop {
        let available = match input.fill_buf() {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            return Ok(read_any);
        }
        if std::mem::take(skip_lf) && available[0] == b'\n' {
            input.consume(1);
            continue;
        }
        read_any = true;

        match available.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(pos) => {
                *skip_lf = available[pos] == b'\r';
                buf.extend_from_slice(&available[..pos]);
                input.consume(pos + 1);
                return Ok(true);
            }
            None => {
                let len = available.len();
                buf.extend_from_slice(available);
                input.consume(len);
            }
        }
    }
}
